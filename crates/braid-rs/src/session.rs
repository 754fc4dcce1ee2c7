//! Session prompt state and fixed-prompt overrides.
//!
//! [`OverridablePromptSession`] is the narrow mutable interface a session
//! type exposes for prompt replacement: read/write the current prompt and
//! swap the rebuild hook. [`apply_prompt_override`] uses it to install a
//! fixed prompt and disable dynamic rebuilding until a new override is
//! applied. [`SessionPromptState`] is the crate's own minimal implementor.

use std::fmt;
use tracing::debug;

/// Hook invoked when the session wants to rebuild its prompt for a new
/// tool set.
pub type RebuildHook = Box<dyn Fn(&[String]) -> String + Send + Sync>;

/// The mutable prompt slots of a session. Callers must not invoke the
/// override path concurrently on the same session; no internal locking
/// is provided.
pub trait OverridablePromptSession {
    /// The currently active prompt.
    fn prompt(&self) -> &str;
    /// Replace the active prompt.
    fn set_prompt(&mut self, prompt: String);
    /// Replace the prompt-regeneration hook.
    fn set_rebuild_hook(&mut self, hook: RebuildHook);
}

/// A prompt override: either literal text (trimmed on resolution) or a
/// generator invoked with no arguments.
///
/// The enum is closed, so an override is always one of these two — there
/// is no "neither a string nor a function" failure mode.
pub enum PromptOverride {
    Text(String),
    Generator(Box<dyn Fn() -> String + Send + Sync>),
}

impl PromptOverride {
    /// Literal text override.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Generator override.
    pub fn generator(generate: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Generator(Box::new(generate))
    }

    /// A generator that always returns `prompt`, pre-trimmed. Useful
    /// when the caller wants generator semantics for a known string.
    pub fn fixed(prompt: impl Into<String>) -> Self {
        let fixed = prompt.into().trim().to_string();
        Self::Generator(Box::new(move || fixed.clone()))
    }

    /// Resolve to the final prompt string: trim the literal, or invoke
    /// the generator (whose output is used verbatim).
    pub fn resolve(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Generator(generate) => generate(),
        }
    }
}

// Closures have no Debug; render the variant name only.
impl fmt::Debug for PromptOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Install `value` as the session's fixed prompt.
///
/// Resolves the override, writes it as the current prompt, and replaces
/// the rebuild hook with one that ignores its input and always returns
/// the same string — dynamic prompt rebuilding stays disabled for this
/// session until a new override is applied. Mutates the caller-owned
/// session in place and returns the resolved prompt.
pub fn apply_prompt_override(
    session: &mut dyn OverridablePromptSession,
    value: &PromptOverride,
) -> String {
    let prompt = value.resolve();
    session.set_prompt(prompt.clone());
    let fixed = prompt.clone();
    session.set_rebuild_hook(Box::new(move |_tool_names| fixed.clone()));
    debug!(chars = prompt.len(), "prompt override applied; rebuild disabled");
    prompt
}

/// Minimal session prompt holder: the current prompt plus an optional
/// rebuild hook. Without a hook, [`rebuild`](Self::rebuild) returns the
/// current prompt unchanged.
#[derive(Default)]
pub struct SessionPromptState {
    prompt: String,
    rebuild_hook: Option<RebuildHook>,
}

impl SessionPromptState {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            rebuild_hook: None,
        }
    }

    /// Rebuild the prompt for a new tool set via the hook, falling back
    /// to the current prompt when no hook is installed.
    pub fn rebuild(&self, tool_names: &[String]) -> String {
        match &self.rebuild_hook {
            Some(hook) => hook(tool_names),
            None => self.prompt.clone(),
        }
    }
}

impl OverridablePromptSession for SessionPromptState {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    fn set_rebuild_hook(&mut self, hook: RebuildHook) {
        self.rebuild_hook = Some(hook);
    }
}

impl fmt::Debug for SessionPromptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionPromptState")
            .field("prompt", &self.prompt)
            .field("rebuild_hook", &self.rebuild_hook.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_override_is_trimmed() {
        let mut session = SessionPromptState::new("original");
        let resolved = apply_prompt_override(&mut session, &PromptOverride::text("  Hello.  "));
        assert_eq!(resolved, "Hello.");
        assert_eq!(session.prompt(), "Hello.");
    }

    #[test]
    fn rebuild_hook_ignores_tool_names_after_override() {
        let mut session = SessionPromptState::new("original");
        apply_prompt_override(&mut session, &PromptOverride::text("  Hello.  "));

        assert_eq!(session.rebuild(&[]), "Hello.");
        assert_eq!(
            session.rebuild(&["shell".to_string(), "read_file".to_string()]),
            "Hello."
        );
    }

    #[test]
    fn generator_override_invoked_with_no_arguments() {
        let mut session = SessionPromptState::new("original");
        let resolved = apply_prompt_override(
            &mut session,
            &PromptOverride::generator(|| "generated prompt".to_string()),
        );
        assert_eq!(resolved, "generated prompt");
        assert_eq!(session.rebuild(&["anything".to_string()]), "generated prompt");
    }

    #[test]
    fn fixed_pre_trims_and_stays_fixed() {
        let value = PromptOverride::fixed("  stable prompt \n");
        assert_eq!(value.resolve(), "stable prompt");
        assert_eq!(value.resolve(), "stable prompt");
    }

    #[test]
    fn rebuild_without_hook_returns_current_prompt() {
        let session = SessionPromptState::new("base prompt");
        assert_eq!(session.rebuild(&["shell".to_string()]), "base prompt");
    }

    #[test]
    fn reapplying_override_replaces_previous() {
        let mut session = SessionPromptState::new("original");
        apply_prompt_override(&mut session, &PromptOverride::text("first"));
        apply_prompt_override(&mut session, &PromptOverride::text("second"));
        assert_eq!(session.prompt(), "second");
        assert_eq!(session.rebuild(&[]), "second");
    }

    #[test]
    fn override_works_through_the_trait_object() {
        let mut session = SessionPromptState::new("original");
        let dyn_session: &mut dyn OverridablePromptSession = &mut session;
        apply_prompt_override(dyn_session, &PromptOverride::text("via trait"));
        assert_eq!(session.prompt(), "via trait");
    }
}
