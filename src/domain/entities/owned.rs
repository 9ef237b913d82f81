use serde::{de::DeserializeOwned, Serialize};
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    FromRow, Postgres,
};
use uuid::Uuid;
use validator::Validate;

pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// A profile section row that belongs to exactly one user.
///
/// Implementors describe their table and how to bind their form input;
/// the generic repository, use case and route layers do the rest.
pub trait OwnedEntity:
    for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    /// Payload accepted on create and update. It never carries an owner:
    /// the owner always comes from the authenticated request.
    type Input: Validate + DeserializeOwned + Send + Sync + 'static;

    const TABLE: &'static str;

    /// Human readable name used in messages.
    const LABEL: &'static str;

    /// Route segment under the API prefix, with leading slash.
    const PATH: &'static str;

    /// Writable columns in the order `bind_input` binds them.
    const COLUMNS: &'static [&'static str];

    const ORDER_BY: &'static str = "created_at ASC";

    fn id(&self) -> Uuid;

    fn owner_id(&self) -> Uuid;

    fn bind_input<'q>(input: &'q Self::Input, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    /// Normalises raw input before validation.
    fn prepare(input: Self::Input) -> Self::Input {
        input
    }
}
