//! Non-destructive provider merging.
//!
//! [`merge_provider`] folds a provider's canonical defaults into a user
//! configuration tree without discarding anything the user already set:
//! unknown fields pass through, an existing model entry with the
//! canonical id wins over the synthesized default, and a previously
//! stored credential is carried forward only when it is non-blank.
//! [`apply_default_selection`] additionally points the active model
//! selection at the provider's stock model. Both take the input tree by
//! reference and return a new tree; both are idempotent.

use super::providers::ProviderDefaults;
use super::schema::{Config, ModelSelection, ProviderRecord};
use serde_json::Map;
use std::collections::BTreeMap;
use tracing::debug;

/// Default value for `models.mode` when a merge first touches the
/// section: provider lists add to the built-in catalog rather than
/// replacing it.
const DEFAULT_MODELS_MODE: &str = "merge";

/// Merge `provider`'s defaults into `cfg`, returning the new tree.
///
/// Implements fill-if-absent semantics throughout: the alias map entry
/// gets an alias only if none is present, the canonical model is
/// appended only if no entry with its id exists, and the stored
/// credential survives only when non-blank after trimming. The provider
/// record's `baseUrl` and `api` are always reset to the canonical
/// values; every other field of an existing record is preserved.
pub fn merge_provider(cfg: &Config, provider: &ProviderDefaults) -> Config {
    let mut next = cfg.clone();

    // Alias map under agents.defaults.models: ensure the entry for this
    // provider's stock model exists, assigning an alias only if absent.
    let defaults = next
        .agents
        .get_or_insert_with(Default::default)
        .defaults
        .get_or_insert_with(Default::default);
    let alias_entry = defaults
        .models
        .get_or_insert_with(BTreeMap::new)
        .entry(provider.model_ref())
        .or_default();
    if alias_entry.alias.is_none() {
        alias_entry.alias = Some(provider.default_alias().to_string());
    }

    // Provider record under models.providers.
    let models = next.models.get_or_insert_with(Default::default);
    if models.mode.is_none() {
        models.mode = Some(DEFAULT_MODELS_MODE.to_string());
    }
    let providers = models.providers.get_or_insert_with(BTreeMap::new);

    let (mut merged_models, api_key, rest) = match providers.remove(provider.name()) {
        Some(existing) => {
            let has_default = existing
                .models
                .iter()
                .any(|m| m.id == provider.default_model_id());
            let mut merged = existing.models;
            if !has_default {
                merged.push(provider.default_model());
            }
            let api_key = existing
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string);
            (merged, api_key, existing.rest)
        }
        None => (Vec::new(), None, Map::new()),
    };
    if merged_models.is_empty() {
        merged_models.push(provider.default_model());
    }

    providers.insert(
        provider.name().to_string(),
        ProviderRecord {
            base_url: Some(provider.base_url().to_string()),
            api: Some(provider.api().to_string()),
            api_key,
            models: merged_models,
            rest,
        },
    );

    debug!(provider = provider.name(), "merged provider defaults");
    next
}

/// [`merge_provider`] plus pointing the active selection's `primary` at
/// this provider's stock model.
///
/// `fallbacks` is carried over only when the current selection actually
/// declares it; any other field of the old selection is replaced, so
/// applying this twice yields the same selection as applying it once.
pub fn apply_default_selection(cfg: &Config, provider: &ProviderDefaults) -> Config {
    let mut next = merge_provider(cfg, provider);

    let defaults = next
        .agents
        .get_or_insert_with(Default::default)
        .defaults
        .get_or_insert_with(Default::default);
    let fallbacks = defaults.model.as_ref().and_then(|m| m.fallbacks.clone());
    defaults.model = Some(ModelSelection {
        fallbacks,
        primary: Some(provider.model_ref()),
        rest: Map::new(),
    });

    next
}
