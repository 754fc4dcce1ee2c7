//! Canonical per-provider defaults.
//!
//! A [`ProviderDefaults`] value fixes a provider's identity — name, base
//! URL, wire API, stock model — at construction. The accessors are pure:
//! the same value always yields the same canonical model definition, so
//! the merge in [`merge`](super::merge) can use it as a deterministic
//! fallback when the user configuration has not already defined that
//! model.

use super::schema::ModelDefinition;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GROQ_DEFAULT_MODEL_ID: &str = "moonshotai/kimi-k2-instruct";

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const OPENROUTER_DEFAULT_MODEL_ID: &str = "z-ai/glm-5";

/// Wire API spoken by OpenAI-compatible completion endpoints.
pub const OPENAI_COMPLETIONS_API: &str = "openai-completions";

/// Canonical defaults for one named provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDefaults {
    name: String,
    base_url: String,
    api: String,
    default_model_id: String,
    default_alias: String,
}

impl ProviderDefaults {
    /// Defaults for an arbitrary provider.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api: impl Into<String>,
        default_model_id: impl Into<String>,
        default_alias: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            api: api.into(),
            default_model_id: default_model_id.into(),
            default_alias: default_alias.into(),
        }
    }

    /// Stock Groq defaults.
    pub fn groq() -> Self {
        Self::new(
            "groq",
            GROQ_BASE_URL,
            OPENAI_COMPLETIONS_API,
            GROQ_DEFAULT_MODEL_ID,
            "Groq",
        )
    }

    /// Stock OpenRouter defaults.
    pub fn openrouter() -> Self {
        Self::new(
            "openrouter",
            OPENROUTER_BASE_URL,
            OPENAI_COMPLETIONS_API,
            OPENROUTER_DEFAULT_MODEL_ID,
            "OpenRouter",
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn default_model_id(&self) -> &str {
        &self.default_model_id
    }

    pub fn default_alias(&self) -> &str {
        &self.default_alias
    }

    /// The model reference used as the alias-map key and the selection's
    /// `primary` value: `provider/model-id`.
    pub fn model_ref(&self) -> String {
        format!("{}/{}", self.name, self.default_model_id)
    }

    /// The canonical model definition for this provider's stock model.
    pub fn default_model(&self) -> ModelDefinition {
        ModelDefinition::new(&self.default_model_id).with_name(&self.default_alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groq_defaults_match_constants() {
        let groq = ProviderDefaults::groq();
        assert_eq!(groq.name(), "groq");
        assert_eq!(groq.base_url(), GROQ_BASE_URL);
        assert_eq!(groq.api(), "openai-completions");
        assert_eq!(groq.default_model_id(), GROQ_DEFAULT_MODEL_ID);
    }

    #[test]
    fn model_ref_joins_provider_and_model() {
        let groq = ProviderDefaults::groq();
        assert_eq!(groq.model_ref(), "groq/moonshotai/kimi-k2-instruct");
    }

    #[test]
    fn default_model_is_deterministic() {
        let groq = ProviderDefaults::groq();
        assert_eq!(groq.default_model(), groq.default_model());
        assert_eq!(groq.default_model().id, GROQ_DEFAULT_MODEL_ID);
    }

    #[test]
    fn custom_provider_defaults() {
        let local = ProviderDefaults::new(
            "local",
            "http://127.0.0.1:8080/v1",
            OPENAI_COMPLETIONS_API,
            "llama-3.3-70b",
            "Local",
        );
        assert_eq!(local.model_ref(), "local/llama-3.3-70b");
        assert_eq!(local.default_model().name.as_deref(), Some("Local"));
    }
}
