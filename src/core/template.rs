//! Placeholder substitution for template file contents.

use crate::identity::ProjectIdentity;

/// Placeholder tokens recognized inside template files.
///
/// These are the only four substitution points; any other brace-delimited
/// text in a template file is left untouched.
pub struct Tokens;

impl Tokens {
    pub const PROJECT_NAME: &'static str = "{{PROJECT_NAME}}";
    pub const PROJECT_NAME_KEBAB: &'static str = "{{PROJECT_NAME_KEBAB}}";
    pub const PROJECT_NAME_SNAKE: &'static str = "{{PROJECT_NAME_SNAKE}}";
    pub const PORT: &'static str = "{{PORT}}";
}

/// The closed token-to-value table for one provisioning run.
///
/// Fixed at four entries derived from the project identity and port. No
/// replacement value contains a token, so application order is irrelevant.
#[derive(Debug, Clone)]
pub struct Replacements {
    pairs: [(&'static str, String); 4],
}

impl Replacements {
    pub fn new(identity: &ProjectIdentity, port: u16) -> Self {
        Self {
            pairs: [
                (Tokens::PROJECT_NAME, identity.raw.clone()),
                (Tokens::PROJECT_NAME_KEBAB, identity.kebab.clone()),
                (Tokens::PROJECT_NAME_SNAKE, identity.snake.clone()),
                (Tokens::PORT, port.to_string()),
            ],
        }
    }

    /// Replace every occurrence of every token in `content`.
    ///
    /// Tokens are matched as literal text, one linear pass per token.
    pub fn apply(&self, content: &str) -> String {
        let mut result = content.to_string();

        for (token, value) in &self.pairs {
            result = result.replace(token, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements() -> Replacements {
        let identity = ProjectIdentity::new("MyPlugin").unwrap();
        Replacements::new(&identity, 10120)
    }

    #[test]
    fn replaces_every_occurrence_of_a_token() {
        let content = "{{PROJECT_NAME_KEBAB}} {{PROJECT_NAME_KEBAB}} {{PROJECT_NAME_KEBAB}}";
        assert_eq!(
            replacements().apply(content),
            "my-plugin my-plugin my-plugin"
        );
    }

    #[test]
    fn replaces_all_four_tokens() {
        let content = "{{PROJECT_NAME}}/{{PROJECT_NAME_KEBAB}}/{{PROJECT_NAME_SNAKE}}:{{PORT}}";
        assert_eq!(
            replacements().apply(content),
            "MyPlugin/my-plugin/my_plugin:10120"
        );
    }

    #[test]
    fn content_without_tokens_is_unchanged() {
        let content = "const x = { a: 1 };\n";
        assert_eq!(replacements().apply(content), content);
    }

    #[test]
    fn unknown_brace_delimited_text_is_untouched() {
        let content = "{{SOMETHING_ELSE}} and {{PORT}}";
        assert_eq!(replacements().apply(content), "{{SOMETHING_ELSE}} and 10120");
    }
}
