/// Trims the value and turns blank strings into `None`.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First character upper case, the rest lower case.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_normalises_case() {
        assert_eq!(capitalize("python"), "Python");
        assert_eq!(capitalize("GO"), "Go");
        assert_eq!(capitalize("  rUST "), "Rust");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(blank_to_none(Some("   ".into())), None);
        assert_eq!(blank_to_none(Some(" x ".into())), Some("x".into()));
        assert_eq!(blank_to_none(None), None);
    }
}
