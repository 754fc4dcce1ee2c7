//! Typed view of the user configuration tree.
//!
//! The tree is deliberately open: every struct carries a
//! `#[serde(flatten)]` catch-all map, so fields this crate does not know
//! about survive a deserialize → merge → serialize round-trip untouched.
//! The merge logic in [`merge`](super::merge) only ever rewrites the
//! subtrees it owns (`agents.defaults.models`, `agents.defaults.model`,
//! `models.providers`, `models.mode`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Root of the user configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Agent-level settings (`agents.defaults`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<AgentsSection>,
    /// Model/provider settings (`models.mode`, `models.providers`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<ModelsSection>,
    /// Everything else in the tree, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `agents` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<AgentDefaults>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Defaults applied to every agent: the active model selection and the
/// model-reference → display-metadata map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentDefaults {
    /// Active model selection (`primary` plus optional `fallbacks`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelSelection>,
    /// Display metadata keyed by model reference (e.g. `groq/...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<BTreeMap<String, ModelAliasEntry>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The active model selection.
///
/// `fallbacks` is `Option` so that a selection which never declared the
/// field stays structurally without it — the merge carries `fallbacks`
/// over only when it was actually present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallbacks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Per-model-reference display metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelAliasEntry {
    /// Human-readable alias shown in pickers. Fill-if-absent on merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `models` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsSection {
    /// Merge mode for provider lists. Defaults to `"merge"` (additive)
    /// when a provider merge first touches this section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<BTreeMap<String, ProviderRecord>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One provider entry under `models.providers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    #[serde(rename = "baseUrl", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    /// Credential. Never written blank: the merge trims and drops empty
    /// values rather than carrying them forward.
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Offered models, unique by `id`. A malformed (non-array) value
    /// recovers to an empty list — see [`lenient_models`].
    #[serde(
        default,
        deserialize_with = "lenient_models",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub models: Vec<ModelDefinition>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One model offered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ModelDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            rest: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Deserialize a provider's `models` field, recovering a malformed value
/// (non-array, or an array whose entries are missing `id`) to an empty
/// list with a warning instead of failing the whole config parse.
fn lenient_models<'de, D>(deserializer: D) -> Result<Vec<ModelDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    if !value.is_array() {
        warn!(
            "ignoring provider `models` field of unexpected type {}",
            type_name(&value)
        );
        return Ok(Vec::new());
    }
    match serde_json::from_value(value) {
        Ok(models) => Ok(models),
        Err(e) => {
            warn!("ignoring malformed provider model list: {e}");
            Ok(Vec::new())
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_roundtrip() {
        let input = json!({
            "agents": { "defaults": { "theme": "dark" }, "sandbox": true },
            "models": { "providers": {} },
            "gateway": { "port": 18789 }
        });
        let cfg: Config = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(&cfg).unwrap();
        assert_eq!(output["gateway"]["port"], 18789);
        assert_eq!(output["agents"]["sandbox"], true);
        assert_eq!(output["agents"]["defaults"]["theme"], "dark");
    }

    #[test]
    fn provider_record_uses_camel_case_keys() {
        let record = ProviderRecord {
            base_url: Some("https://api.groq.com/openai/v1".into()),
            api: Some("openai-completions".into()),
            api_key: Some("gsk-test".into()),
            models: vec![ModelDefinition::new("m1")],
            rest: Map::new(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("baseUrl").is_some());
        assert!(value.get("apiKey").is_some());
        assert!(value.get("base_url").is_none());
    }

    #[test]
    fn malformed_models_recovers_to_empty() {
        let input = json!({
            "models": {
                "providers": {
                    "groq": { "baseUrl": "https://example", "models": "oops" }
                }
            }
        });
        let cfg: Config = serde_json::from_value(input).unwrap();
        let providers = cfg.models.unwrap().providers.unwrap();
        let record = &providers["groq"];
        assert!(record.models.is_empty());
        assert_eq!(record.base_url.as_deref(), Some("https://example"));
    }

    #[test]
    fn model_entries_missing_id_recover_to_empty() {
        let input = json!({
            "models": {
                "providers": {
                    "groq": { "models": [{ "label": "no id here" }] }
                }
            }
        });
        let cfg: Config = serde_json::from_value(input).unwrap();
        let providers = cfg.models.unwrap().providers.unwrap();
        let record = &providers["groq"];
        assert!(record.models.is_empty());
    }

    #[test]
    fn model_definition_preserves_extra_fields() {
        let input = json!({ "id": "m1", "name": "Model One", "contextWindow": 131072 });
        let def: ModelDefinition = serde_json::from_value(input).unwrap();
        assert_eq!(def.id, "m1");
        assert_eq!(def.name.as_deref(), Some("Model One"));
        assert_eq!(def.rest["contextWindow"], 131072);
        let out = serde_json::to_value(&def).unwrap();
        assert_eq!(out["contextWindow"], 131072);
    }

    #[test]
    fn selection_without_fallbacks_serializes_without_field() {
        let selection = ModelSelection {
            fallbacks: None,
            primary: Some("groq/moonshotai/kimi-k2-instruct".into()),
            rest: Map::new(),
        };
        let value = serde_json::to_value(&selection).unwrap();
        assert!(value.get("fallbacks").is_none());
        assert!(value.get("primary").is_some());
    }

    #[test]
    fn empty_config_parses() {
        let cfg: Config = serde_json::from_value(json!({})).unwrap();
        assert!(cfg.agents.is_none());
        assert!(cfg.models.is_none());
        assert!(cfg.rest.is_empty());
    }
}
