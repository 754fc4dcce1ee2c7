//! Convenience re-exports for common `braid-rs` types.
//!
//! Meant to be glob-imported when wiring an agent runtime:
//!
//! ```ignore
//! use braid_rs::prelude::*;
//! ```
//!
//! This pulls in the config tree + merge operations, the prompt bundle
//! and composer, and the session override surface. Specialized types
//! (the raw schema structs, the section builder, the normalized sandbox
//! context) are intentionally excluded — import those from their
//! modules directly when needed.

// ── Config ──────────────────────────────────────────────────────────
pub use crate::config::{Config, ProviderDefaults, apply_default_selection, merge_provider};

// ── Prompt composition ──────────────────────────────────────────────
pub use crate::prompt::{
    ContextFile, MarkdownRenderer, PromptComposer, PromptMode, PromptParams, PromptRenderer,
    RuntimeInfo, SandboxInfo, ToolDescriptor,
};

// ── Session overrides ───────────────────────────────────────────────
pub use crate::session::{
    OverridablePromptSession, PromptOverride, SessionPromptState, apply_prompt_override,
};
