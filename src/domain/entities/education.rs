use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    entities::owned::{OwnedEntity, PgQueryAs},
    utils::text::blank_to_none,
    validation::{new_validation_error, validate_not_blank},
};

/// Scale a CGPA is graded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "cgpa_scale")]
pub enum CgpaScale {
    #[serde(rename = "4.0")]
    #[sqlx(rename = "4.0")]
    Four,
    #[serde(rename = "5.0")]
    #[sqlx(rename = "5.0")]
    Five,
}

impl CgpaScale {
    pub fn max_value(self) -> Decimal {
        match self {
            CgpaScale::Four => Decimal::new(400, 2),
            CgpaScale::Five => Decimal::new(500, 2),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Education {
    pub id: Uuid,
    pub user_id: Uuid,
    pub degree: Option<String>,
    pub institute: String,
    pub pass_year: i32,
    pub cgpa: Decimal,
    pub out_of: CgpaScale,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_cgpa_within_scale", skip_on_field_errors = true))]
pub struct EducationInput {
    #[validate(length(max = 100, message = "Degree must be at most 100 characters"))]
    pub degree: Option<String>,

    #[validate(
        length(max = 100, message = "Institute must be at most 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub institute: String,

    #[validate(range(min = 1, message = "Pass year must be a positive number"))]
    pub pass_year: i32,

    #[validate(custom(function = "validate_cgpa"))]
    pub cgpa: Decimal,

    pub out_of: CgpaScale,
}

/// Fits `NUMERIC(3, 2)`: non-negative, below 10, at most two decimals.
fn validate_cgpa(cgpa: &Decimal) -> Result<(), ValidationError> {
    if cgpa.is_sign_negative() || *cgpa >= Decimal::TEN {
        return Err(new_validation_error("cgpa_range", "CGPA must be between 0 and 9.99"));
    }
    if cgpa.normalize().scale() > 2 {
        return Err(new_validation_error("cgpa_scale", "CGPA may have at most two decimal places"));
    }
    Ok(())
}

fn validate_cgpa_within_scale(input: &EducationInput) -> Result<(), ValidationError> {
    if input.cgpa > input.out_of.max_value() {
        return Err(new_validation_error("cgpa_exceeds_scale", "CGPA cannot exceed the scale it is graded out of"));
    }
    Ok(())
}

impl OwnedEntity for Education {
    type Input = EducationInput;

    const TABLE: &'static str = "educations";
    const LABEL: &'static str = "Education";
    const PATH: &'static str = "/educations";
    const COLUMNS: &'static [&'static str] = &["degree", "institute", "pass_year", "cgpa", "out_of"];
    const ORDER_BY: &'static str = "degree ASC, created_at ASC";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn bind_input<'q>(input: &'q EducationInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.degree)
            .bind(&input.institute)
            .bind(input.pass_year)
            .bind(input.cgpa)
            .bind(input.out_of)
    }

    fn prepare(input: EducationInput) -> EducationInput {
        EducationInput {
            degree: blank_to_none(input.degree),
            institute: input.institute.trim().to_string(),
            ..input
        }
    }
}
