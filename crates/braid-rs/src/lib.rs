//! Provider config merging and system prompt composition for LLM agent
//! runtimes.
//!
//! `braid-rs` covers the two jobs an agent runtime does at session
//! setup, with strict non-destructive contracts around both:
//!
//! 1. **Config merging** — fold a provider's canonical defaults (base
//!    URL, wire API, stock model) into the user's configuration tree
//!    without dropping anything the user already set. Merges are pure,
//!    idempotent, and never duplicate a model id or overwrite a stored
//!    credential with a blank one.
//!
//! 2. **Prompt composition** — assemble the agent's system prompt from
//!    an immutable parameter bundle, with a static/dynamic split: the
//!    static prompt is byte-stable across turns (cache-friendly) while
//!    the per-turn context message carries everything that changes
//!    between turns. A session's prompt can be pinned to a fixed string
//!    with [`apply_prompt_override`], which also disables dynamic
//!    rebuilding.
//!
//! # Getting started
//!
//! ```
//! use braid_rs::config::{Config, ProviderDefaults, merge_provider};
//! use braid_rs::prompt::{PromptComposer, PromptParams};
//!
//! // Merge Groq defaults into an empty config.
//! let cfg = merge_provider(&Config::default(), &ProviderDefaults::groq());
//! assert!(cfg.models.as_ref().unwrap().providers.as_ref().unwrap().contains_key("groq"));
//!
//! // Compose a cache-stable prompt and its per-turn context.
//! let composer = PromptComposer::default();
//! let params = PromptParams::new("/home/user/work");
//! let static_prompt = composer.compose_static(&params);
//! let context = composer.dynamic_context(&params);
//! assert!(!static_prompt.is_empty());
//! assert!(!context.is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Open configuration tree, [`ProviderDefaults`](config::ProviderDefaults), pure merge operations |
//! | [`prompt`] | [`PromptParams`](prompt::PromptParams) bundle, [`PromptComposer`](prompt::PromptComposer), static/dynamic split |
//! | [`session`] | [`OverridablePromptSession`](session::OverridablePromptSession) capability and fixed-prompt overrides |
//!
//! # Design principles
//!
//! 1. **Merges never destroy.** Unknown fields ride along in flatten
//!    maps; existing entries win over synthesized defaults; blank
//!    credentials are dropped rather than written.
//!
//! 2. **Static content stays static.** Anything that varies per turn
//!    lives in the dynamic context message, so the composed system
//!    prompt can be cached and reused byte-for-byte.
//!
//! 3. **Capabilities over casts.** Prompt prose comes from an injected
//!    [`PromptRenderer`](prompt::PromptRenderer); session mutation goes
//!    through the narrow
//!    [`OverridablePromptSession`](session::OverridablePromptSession)
//!    trait. No reaching into private state.

pub mod config;
pub mod prelude;
pub mod prompt;
pub mod session;

pub use config::{Config, ProviderDefaults, apply_default_selection, merge_provider};
pub use prompt::{PromptComposer, PromptParams};
pub use session::{OverridablePromptSession, PromptOverride, apply_prompt_override};
