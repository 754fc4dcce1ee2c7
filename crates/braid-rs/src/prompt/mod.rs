//! Prompt composition: parameters, builder, composer, dynamic context.
//!
//! - [`params`] — [`PromptParams`], the immutable per-composition bundle,
//!   and its closed mode enums.
//! - [`builder`] — [`SystemPromptBuilder`], multi-section markdown
//!   assembly.
//! - [`compose`] — [`PromptComposer`] with the injected
//!   [`PromptRenderer`] capability and the stock [`MarkdownRenderer`].
//! - [`dynamic`] — [`DynamicContext`], the per-turn-variable subset
//!   re-rendered each turn while the static prompt is reused.

pub mod builder;
pub mod compose;
pub mod dynamic;
pub mod params;

pub use builder::SystemPromptBuilder;
pub use compose::{MarkdownRenderer, PromptComposer, PromptRenderer, PromptRequest, tool_summaries};
pub use dynamic::{DynamicContext, SandboxContext};
pub use params::{
    CitationsMode, ContextFile, PromptMode, PromptParams, ReactionGuidance, ReactionLevel,
    ReasoningLevel, RuntimeInfo, SandboxInfo, ThinkLevel, TimeFormat, ToolDescriptor,
    WorkspaceAccess,
};
