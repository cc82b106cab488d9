//! LLM prompt engineering for line-item extraction

use serde::{Deserialize, Serialize};

/// Prompt settings
///
/// The built-in template asks for bullets only, first in `primary_language`
/// and then the same bullets in `secondary_language` when one is set.
/// `template` replaces the built-in text entirely; it must contain `{text}`
/// and may use `{subject}`, `{focus}`, `{persona}`, `{document_kind}`,
/// `{bullet}`, `{primary_language}` and `{secondary_language}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Role the model is asked to play
    pub persona: String,

    /// Category of facts to extract
    pub focus: String,

    /// What kind of document the chunks come from
    pub document_kind: String,

    /// Bullet marker the model is asked to use
    pub bullet: String,

    /// Language of the first bullet list
    pub primary_language: String,

    /// Language of the repeated bullet list; `None` or `""` asks for one list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_language: Option<String>,

    /// Fully custom template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            persona: "an analyst and IT architect".to_string(),
            focus: "strategic IT initiatives".to_string(),
            document_kind: "annual report".to_string(),
            bullet: "•".to_string(),
            primary_language: "English".to_string(),
            secondary_language: Some("Danish".to_string()),
            template: None,
        }
    }
}

impl PromptConfig {
    /// Secondary language, treating an empty string as unset
    pub fn secondary_language(&self) -> Option<&str> {
        self.secondary_language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
    }
}

/// Builds prompts for the LLM from a [`PromptConfig`]
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    config: PromptConfig,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    /// Settings this builder renders with
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Build the complete extraction prompt for one chunk
    pub fn build(&self, text: &str, subject: &str) -> String {
        let template = self
            .config
            .template
            .clone()
            .unwrap_or_else(|| self.default_template());

        // subject and chunk text go in last so braces inside them are never expanded
        template
            .replace("{focus}", &self.config.focus)
            .replace("{persona}", &self.config.persona)
            .replace("{document_kind}", &self.config.document_kind)
            .replace("{bullet}", &self.config.bullet)
            .replace("{primary_language}", &self.config.primary_language)
            .replace(
                "{secondary_language}",
                self.config.secondary_language().unwrap_or(""),
            )
            .replace("{subject}", subject)
            .replace("{text}", text)
    }

    fn default_template(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and source
        prompt.push_str("You are {persona}.\n");
        prompt.push_str("Here is a chunk from the {document_kind} of {subject}:\n\n");

        // 2. The text to analyze
        prompt.push_str("{text}\n\n");

        // 3. Task and output contract
        prompt.push_str(TASK_INSTRUCTIONS);
        prompt.push_str("\n\nFormat requirements:\n");
        match self.config.secondary_language() {
            Some(_) => {
                prompt.push_str("- First list bullet points in {primary_language}.\n");
                prompt.push_str("- Then list the same bullet points in {secondary_language}.\n");
            }
            None => prompt.push_str("- List bullet points in {primary_language}.\n"),
        }
        prompt.push_str("- Use \"{bullet}\" for each bullet.\n");

        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(PromptConfig::default())
    }
}

const TASK_INSTRUCTIONS: &str = r#"Task: Extract and list ONLY the {focus} mentioned.

Do NOT explain your reasoning.
Do NOT include commentary, introductions, or meta-thoughts.
ONLY output bullet points."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_text_and_subject() {
        let prompt = PromptBuilder::default().build("We migrate to Azure.", "BEC");
        assert!(prompt.contains("We migrate to Azure."));
        assert!(prompt.contains("annual report of BEC"));
    }

    #[test]
    fn test_default_prompt_contract() {
        let prompt = PromptBuilder::default().build("text", "Acme");
        assert!(prompt.contains("You are an analyst and IT architect."));
        assert!(prompt.contains("ONLY the strategic IT initiatives"));
        assert!(prompt.contains("Do NOT include commentary"));
        assert!(prompt.contains("First list bullet points in English."));
        assert!(prompt.contains("same bullet points in Danish."));
        assert!(prompt.contains("Use \"•\" for each bullet."));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_single_language_prompt() {
        let config = PromptConfig {
            secondary_language: None,
            ..PromptConfig::default()
        };
        let prompt = PromptBuilder::new(config).build("text", "Acme");
        assert!(prompt.contains("- List bullet points in English."));
        assert!(!prompt.contains("Then list"));
    }

    #[test]
    fn test_empty_secondary_language_means_single_list() {
        let config = PromptConfig {
            secondary_language: Some("  ".to_string()),
            ..PromptConfig::default()
        };
        assert_eq!(config.secondary_language(), None);
        let prompt = PromptBuilder::new(config).build("text", "Acme");
        assert!(!prompt.contains("Then list"));
    }

    #[test]
    fn test_custom_template() {
        let config = PromptConfig {
            focus: "sustainability goals".to_string(),
            template: Some("Company {subject}. Find {focus}:\n{text}".to_string()),
            ..PromptConfig::default()
        };
        let prompt = PromptBuilder::new(config).build("chunk body", "Contoso");
        assert_eq!(prompt, "Company Contoso. Find sustainability goals:\nchunk body");
    }

    #[test]
    fn test_braces_in_chunk_text_survive() {
        let prompt = PromptBuilder::default().build("literal {subject} in source", "Acme");
        assert!(prompt.contains("literal {subject} in source"));
    }
}
