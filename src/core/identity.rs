//! Project name casing variants.
//!
//! The generated project refers to itself in three forms: the raw name as
//! typed ("MyPlugin"), a kebab-case slug for package and route names
//! ("my-plugin"), and a snake_case form for identifiers ("my_plugin").

use serde::Serialize;

use crate::error::Result;
use crate::validate;

/// Canonical casing variants of a validated project name.
///
/// Immutable once derived; both variants are pure functions of `raw`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectIdentity {
    pub raw: String,
    pub kebab: String,
    pub snake: String,
}

impl ProjectIdentity {
    /// Validate a project name and derive its casing variants.
    pub fn new(name: &str) -> Result<Self> {
        validate::validate_project_name(name)?;
        Ok(Self {
            raw: name.to_string(),
            kebab: to_kebab_case(name),
            snake: to_snake_case(name),
        })
    }
}

/// Convert a name to kebab-case: `MyPlugin` -> `my-plugin`.
pub fn to_kebab_case(value: &str) -> String {
    convert_case(value, '-', '_')
}

/// Convert a name to snake_case: `MyPlugin` -> `my_plugin`.
pub fn to_snake_case(value: &str) -> String {
    convert_case(value, '_', '-')
}

/// Shared scan for both casings.
///
/// A delimiter is inserted at every lowercase-to-uppercase ASCII boundary,
/// and every run of whitespace or the opposite separator collapses to a
/// single delimiter. Characters equal to the delimiter itself pass through
/// unchanged. Everything is lowercased at the end of the scan.
fn convert_case(value: &str, delimiter: char, opposite: char) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut prev_was_lower = false;
    let mut in_separator_run = false;

    for ch in value.chars() {
        if ch.is_whitespace() || ch == opposite {
            in_separator_run = true;
            continue;
        }

        if in_separator_run {
            out.push(delimiter);
            in_separator_run = false;
        } else if prev_was_lower && ch.is_ascii_uppercase() {
            out.push(delimiter);
        }

        out.extend(ch.to_lowercase());
        prev_was_lower = ch.is_ascii_lowercase();
    }

    // A trailing separator run still yields a delimiter
    if in_separator_run {
        out.push(delimiter);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_splits_case_boundary() {
        assert_eq!(to_kebab_case("MyPlugin"), "my-plugin");
    }

    #[test]
    fn snake_splits_case_boundary() {
        assert_eq!(to_snake_case("MyPlugin"), "my_plugin");
    }

    #[test]
    fn kebab_collapses_spaces_and_underscores() {
        assert_eq!(to_kebab_case("my  plugin"), "my-plugin");
        assert_eq!(to_kebab_case("my__plugin"), "my-plugin");
        assert_eq!(to_kebab_case("my _ plugin"), "my-plugin");
    }

    #[test]
    fn snake_collapses_spaces_and_hyphens() {
        assert_eq!(to_snake_case("my plugin"), "my_plugin");
        assert_eq!(to_snake_case("my--plugin"), "my_plugin");
    }

    #[test]
    fn kebab_preserves_existing_hyphens() {
        assert_eq!(to_kebab_case("my-plugin"), "my-plugin");
    }

    #[test]
    fn kebab_splits_only_lower_to_upper() {
        // Only a lowercase immediately followed by an uppercase is a boundary
        assert_eq!(to_kebab_case("MyXXXyyy"), "my-xxxyyy");
        assert_eq!(to_kebab_case("HTTPServer"), "httpserver");
    }

    #[test]
    fn kebab_is_idempotent() {
        for name in ["MyPlugin", "my plugin", "Already-Kebab", "abc123"] {
            let once = to_kebab_case(name);
            assert_eq!(to_kebab_case(&once), once);
        }
    }

    #[test]
    fn kebab_output_has_no_uppercase_or_whitespace() {
        for name in ["MyPlugin", "Weird MIXED_case-Name", "A B C"] {
            let out = to_kebab_case(name);
            assert!(!out.chars().any(|c| c.is_uppercase()));
            assert!(!out.chars().any(|c| c.is_whitespace()));
        }
    }

    #[test]
    fn identity_derives_both_variants() {
        let identity = ProjectIdentity::new("MyPlugin").unwrap();
        assert_eq!(identity.raw, "MyPlugin");
        assert_eq!(identity.kebab, "my-plugin");
        assert_eq!(identity.snake, "my_plugin");
    }

    #[test]
    fn identity_rejects_invalid_name() {
        assert!(ProjectIdentity::new(".hidden").is_err());
    }
}
