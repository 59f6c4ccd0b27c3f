//! Input validation for project names and ports.
//!
//! Each check reports the first violation it finds; nothing is ever
//! silently coerced into a legal value.

use crate::error::{Error, Result};

/// Names that can never be used as a project name, compared
/// case-insensitively. Fixed denylist, not user-configurable.
const RESERVED_NAMES: [&str; 2] = ["node_modules", "favicon.ico"];

/// Longest accepted project name, matching npm's package name limit.
const MAX_NAME_LENGTH: usize = 214;

/// Inclusive port range accepted for the dev server.
pub const PORT_MIN: u16 = 1024;
pub const PORT_MAX: u16 = 65535;

/// Validate a project name.
///
/// Accepted names are non-empty, at most 214 characters, drawn from
/// `[a-zA-Z0-9._-]`, not starting with `.` or `_`, either fully lowercase
/// or starting with an uppercase letter, and not on the reserved list.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_name("Project name cannot be empty", name));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid_name(
            "Project name must be less than 214 characters",
            name,
        ));
    }

    if name.starts_with('.') || name.starts_with('_') {
        return Err(invalid_name("Project name cannot start with . or _", name));
    }

    // Lowercase names and names with a leading uppercase letter are fine;
    // a lowercase-initial name containing uppercase elsewhere is not.
    let starts_uppercase = name.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    if name != name.to_lowercase() && !starts_uppercase {
        return Err(invalid_name(
            "Project name should be lowercase or PascalCase",
            name,
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
    {
        return Err(invalid_name(
            "Project name can only contain letters, numbers, hyphens, underscores, and dots",
            name,
        ));
    }

    if RESERVED_NAMES
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved))
    {
        return Err(invalid_name(
            format!("Project name \"{}\" is not allowed", name),
            name,
        ));
    }

    Ok(())
}

/// Parse and validate a dev-server port.
///
/// Distinguishes "not a number" from "out of range"; never substitutes a
/// default on failure.
pub fn validate_port(raw: &str) -> Result<u16> {
    let port: i64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid_port("Port must be a number", raw))?;

    if port < i64::from(PORT_MIN) || port > i64::from(PORT_MAX) {
        return Err(invalid_port(
            format!("Port must be between {} and {}", PORT_MIN, PORT_MAX),
            raw,
        ));
    }

    Ok(port as u16)
}

fn invalid_name(problem: impl Into<String>, value: &str) -> Error {
    Error::validation_invalid_argument("project_name", problem, Some(value.to_string()))
}

fn invalid_port(problem: impl Into<String>, value: &str) -> Error {
    Error::validation_invalid_argument("port", problem, Some(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_name() {
        assert!(validate_project_name("my-plugin").is_ok());
    }

    #[test]
    fn accepts_pascal_case_name() {
        assert!(validate_project_name("MyPlugin").is_ok());
    }

    #[test]
    fn accepts_uppercase_initial_with_irregular_casing() {
        // First-letter-uppercase is enough; the rest may be any casing
        assert!(validate_project_name("MyXXXyyy").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("   ").is_err());
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "a".repeat(215);
        assert!(validate_project_name(&name).is_err());
        let name = "a".repeat(214);
        assert!(validate_project_name(&name).is_ok());
    }

    #[test]
    fn rejects_leading_dot_or_underscore() {
        assert!(validate_project_name(".hidden").is_err());
        assert!(validate_project_name("_private").is_err());
    }

    #[test]
    fn rejects_lowercase_initial_mixed_case() {
        assert!(validate_project_name("myPlugin").is_err());
    }

    #[test]
    fn rejects_illegal_characters() {
        assert!(validate_project_name("my/plugin").is_err());
        assert!(validate_project_name("my plugin").is_err());
        assert!(validate_project_name("my@plugin").is_err());
    }

    #[test]
    fn rejects_reserved_names_case_insensitively() {
        assert!(validate_project_name("node_modules").is_err());
        assert!(validate_project_name("Node_Modules").is_err());
        assert!(validate_project_name("favicon.ico").is_err());
    }

    #[test]
    fn port_accepts_range_bounds() {
        assert_eq!(validate_port("1024").unwrap(), 1024);
        assert_eq!(validate_port("65535").unwrap(), 65535);
    }

    #[test]
    fn port_rejects_out_of_range() {
        assert!(validate_port("1023").is_err());
        assert!(validate_port("65536").is_err());
        assert!(validate_port("0").is_err());
        assert!(validate_port("-1").is_err());
    }

    #[test]
    fn port_rejects_non_numeric_with_distinct_reason() {
        let err = validate_port("abc").unwrap_err();
        assert!(err.message.contains("must be a number"));

        let err = validate_port("1023").unwrap_err();
        assert!(err.message.contains("between"));
    }
}
