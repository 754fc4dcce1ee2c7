//! Configuration tree and provider merging.
//!
//! - [`schema`] — the typed-but-open configuration tree. Unknown fields
//!   ride along in flatten maps and survive merges untouched.
//! - [`providers`] — [`ProviderDefaults`]: canonical per-provider base
//!   URL, wire API, and stock model.
//! - [`merge`] — [`merge_provider`] and [`apply_default_selection`],
//!   pure tree-in/tree-out merges with fill-if-absent semantics.

pub mod merge;
pub mod providers;
pub mod schema;

pub use merge::{apply_default_selection, merge_provider};
pub use providers::ProviderDefaults;
pub use schema::{
    AgentDefaults, AgentsSection, Config, ModelAliasEntry, ModelDefinition, ModelSelection,
    ModelsSection, ProviderRecord,
};
