//! Multi-section prompt assembly.
//!
//! [`SystemPromptBuilder`] turns a preamble plus a series of `## Section`
//! blocks into a single prompt string. The
//! [`MarkdownRenderer`](super::compose::MarkdownRenderer) drives it for
//! both the system prompt and the per-turn context message; empty and
//! `None` content is silently skipped so callers can chain
//! unconditionally.

/// Builder for multi-section prompts. Sections are joined with double
/// newlines; empty sections are skipped.
///
/// # Example
///
/// ```
/// use braid_rs::prompt::builder::SystemPromptBuilder;
///
/// let prompt = SystemPromptBuilder::new("You are a workspace agent.")
///     .section("Runtime", "host: devbox\nos: linux")
///     .section_opt("Sandbox", None::<String>)
///     .build();
///
/// assert!(prompt.contains("## Runtime"));
/// assert!(!prompt.contains("Sandbox"));
/// ```
pub struct SystemPromptBuilder {
    sections: Vec<String>,
}

impl SystemPromptBuilder {
    /// Create a builder with an initial preamble (included verbatim,
    /// without a heading).
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            sections: vec![preamble.into()],
        }
    }

    /// Append a `## heading` section. Skipped if `content` is empty.
    pub fn section(mut self, heading: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.sections.push(format!("## {heading}\n\n{content}"));
        }
        self
    }

    /// Append a section at an explicit heading depth (3 → `###`).
    /// Skipped if `content` is empty.
    pub fn section_at(mut self, level: u8, heading: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            let prefix = "#".repeat(level as usize);
            self.sections.push(format!("{prefix} {heading}\n\n{content}"));
        }
        self
    }

    /// Append a section only when `condition` holds. The content closure
    /// runs only in that case.
    pub fn section_if(
        self,
        condition: bool,
        heading: &str,
        content_fn: impl FnOnce() -> String,
    ) -> Self {
        if condition {
            self.section(heading, content_fn())
        } else {
            self
        }
    }

    /// Append a section only if the content is `Some`.
    pub fn section_opt(self, heading: &str, content: Option<impl Into<String>>) -> Self {
        match content {
            Some(c) => self.section(heading, c),
            None => self,
        }
    }

    /// Append raw text without a heading. Skipped if empty.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.sections.push(content);
        }
        self
    }

    /// Append raw text only when `condition` holds.
    pub fn raw_if(self, condition: bool, content_fn: impl FnOnce() -> String) -> Self {
        if condition {
            self.raw(content_fn())
        } else {
            self
        }
    }

    /// Append raw text only if the content is `Some`.
    pub fn raw_opt(self, content: Option<impl Into<String>>) -> Self {
        match content {
            Some(c) => self.raw(c),
            None => self,
        }
    }

    /// Join all sections with double newlines.
    pub fn build(self) -> String {
        self.sections.join("\n\n")
    }
}

/// Render `label: value` lines for section bodies, skipping `None`
/// values entirely. The runtime and sandbox sections use this format.
pub fn kv_block<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<String>)>) -> String {
    pairs
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_only() {
        let prompt = SystemPromptBuilder::new("You are a workspace agent.").build();
        assert_eq!(prompt, "You are a workspace agent.");
    }

    #[test]
    fn sections_get_level_two_headings() {
        let prompt = SystemPromptBuilder::new("Preamble")
            .section("Runtime", "host: devbox")
            .build();
        assert_eq!(prompt, "Preamble\n\n## Runtime\n\nhost: devbox");
    }

    #[test]
    fn empty_section_skipped() {
        let prompt = SystemPromptBuilder::new("P")
            .section("Empty", "")
            .section("Tools", "- shell")
            .build();
        assert!(!prompt.contains("Empty"));
        assert!(prompt.contains("## Tools"));
    }

    #[test]
    fn section_at_controls_depth() {
        let prompt = SystemPromptBuilder::new("P")
            .section("Context Files", "See below.")
            .section_at(3, "AGENTS.md", "Project notes.")
            .build();
        assert!(prompt.contains("## Context Files"));
        assert!(prompt.contains("### AGENTS.md\n\nProject notes."));
    }

    #[test]
    fn section_if_only_runs_closure_when_true() {
        let prompt = SystemPromptBuilder::new("P")
            .section_if(false, "Hidden", || unreachable!())
            .section_if(true, "Shown", || "content".into())
            .build();
        assert!(!prompt.contains("Hidden"));
        assert!(prompt.contains("## Shown"));
    }

    #[test]
    fn section_opt_and_raw_opt() {
        let prompt = SystemPromptBuilder::new("P")
            .section_opt("Sandbox", None::<String>)
            .raw_opt(Some("Trailing note."))
            .build();
        assert!(!prompt.contains("Sandbox"));
        assert!(prompt.ends_with("Trailing note."));
    }

    #[test]
    fn raw_if_false_skips() {
        let prompt = SystemPromptBuilder::new("P").raw_if(false, || "x".into()).build();
        assert_eq!(prompt, "P");
    }

    #[test]
    fn kv_block_skips_absent_values() {
        let block = kv_block([
            ("host", Some("devbox".to_string())),
            ("provider", None),
            ("os", Some("linux".to_string())),
        ]);
        assert_eq!(block, "host: devbox\nos: linux");
    }

    #[test]
    fn kv_block_empty_when_all_absent() {
        assert_eq!(kv_block([("a", None), ("b", None)]), "");
    }
}
