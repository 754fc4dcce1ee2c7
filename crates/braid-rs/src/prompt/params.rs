//! The prompt parameter bundle.
//!
//! [`PromptParams`] is an immutable snapshot of everything a composition
//! call needs: workspace location, runtime descriptors, tool
//! descriptors, time and timezone, sandbox descriptor, context files,
//! and the mode flags. It is constructed once per composition and not
//! retained.
//!
//! All mode-like fields are closed enums so the renderer can match
//! exhaustively.

use chrono::{DateTime, FixedOffset};

// ── Mode flags ─────────────────────────────────────────────────────

/// Which hardcoded guidance sections the rendered prompt includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptMode {
    /// Everything: guidance, hints, tooling, context files.
    #[default]
    Full,
    /// Skips the behavioral guidance sections (heartbeat, skills, docs,
    /// TTS, reaction guidance) but keeps workspace/runtime/tooling.
    Minimal,
    /// Preamble and caller-supplied instructions only.
    Bare,
}

impl PromptMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Minimal => "minimal",
            Self::Bare => "bare",
        }
    }
}

/// Default extended-thinking level advertised to the agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThinkLevel {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl ThinkLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Reasoning effort requested from the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReasoningLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl ReasoningLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Clock style for user-facing timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl TimeFormat {
    /// Format a timestamp the way the user expects to read it.
    pub fn format_time(self, time: &DateTime<FixedOffset>) -> String {
        match self {
            Self::TwelveHour => time.format("%-I:%M %p").to_string(),
            Self::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwelveHour => "12h",
            Self::TwentyFourHour => "24h",
        }
    }
}

/// How aggressively the agent should cite memory sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CitationsMode {
    #[default]
    Off,
    On,
}

impl CitationsMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

/// What the sandbox lets the agent do with the workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkspaceAccess {
    #[default]
    None,
    ReadOnly,
    ReadWrite,
}

impl WorkspaceAccess {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
        }
    }
}

// ── Supporting records ─────────────────────────────────────────────

/// How much the agent should react to channel messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionLevel {
    Minimal,
    Extensive,
}

impl ReactionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Extensive => "extensive",
        }
    }
}

/// Reaction policy for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionGuidance {
    pub level: ReactionLevel,
    pub channel: String,
}

/// Where and what the agent is running on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub agent_id: Option<String>,
    pub host: String,
    pub os: String,
    pub arch: String,
    pub model: String,
    pub provider: Option<String>,
    pub capabilities: Vec<String>,
    pub channel: Option<String>,
    /// Message actions the current channel supports (react, edit, ...).
    pub channel_actions: Vec<String>,
}

/// Sandbox descriptor as reported by the runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandboxInfo {
    pub enabled: bool,
    pub workspace_dir: String,
    pub workspace_access: WorkspaceAccess,
    pub agent_workspace_mount: Option<String>,
    pub browser_bridge_url: Option<String>,
    pub browser_novnc_url: Option<String>,
    pub host_browser_allowed: bool,
    pub elevated: bool,
}

/// A tool as the prompt sees it: name plus full description. Summaries
/// are derived from this at composition time, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A file whose content is embedded into the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFile {
    pub path: String,
    pub content: String,
}

impl ContextFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

// ── The bundle ─────────────────────────────────────────────────────

/// Immutable snapshot of everything needed to render a prompt.
///
/// Construct with [`PromptParams::new`] and the `with_*` methods for the
/// common fields; the rest are public for struct-update syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptParams {
    pub workspace_dir: String,
    pub think_level: ThinkLevel,
    pub reasoning_level: ReasoningLevel,
    /// Free-form caller-supplied instructions, appended verbatim.
    pub extra_instructions: Option<String>,
    pub owner_ids: Vec<String>,
    /// Whether to remind the model to wrap reasoning in tags.
    pub reasoning_tag_hint: bool,
    pub heartbeat_prompt: Option<String>,
    pub skills_prompt: Option<String>,
    pub docs_path: Option<String>,
    pub tts_hint: Option<String>,
    pub reaction_guidance: Option<ReactionGuidance>,
    pub workspace_notes: Vec<String>,
    pub mode: PromptMode,
    pub runtime: RuntimeInfo,
    pub tools: Vec<ToolDescriptor>,
    pub model_alias_lines: Vec<String>,
    pub timezone: String,
    /// Pre-resolved user-local time string, if the caller has one.
    pub time: Option<String>,
    pub time_format: TimeFormat,
    pub context_files: Vec<ContextFile>,
    pub sandbox: Option<SandboxInfo>,
    pub citations: CitationsMode,
    /// When set, time- and state-sensitive sections are omitted. Forced
    /// on by `compose_static`.
    pub exclude_dynamic_context: bool,
}

impl PromptParams {
    pub fn new(workspace_dir: impl Into<String>) -> Self {
        Self {
            workspace_dir: workspace_dir.into(),
            think_level: ThinkLevel::default(),
            reasoning_level: ReasoningLevel::default(),
            extra_instructions: None,
            owner_ids: Vec::new(),
            reasoning_tag_hint: false,
            heartbeat_prompt: None,
            skills_prompt: None,
            docs_path: None,
            tts_hint: None,
            reaction_guidance: None,
            workspace_notes: Vec::new(),
            mode: PromptMode::default(),
            runtime: RuntimeInfo::default(),
            tools: Vec::new(),
            model_alias_lines: Vec::new(),
            timezone: "UTC".to_string(),
            time: None,
            time_format: TimeFormat::default(),
            context_files: Vec::new(),
            sandbox: None,
            citations: CitationsMode::default(),
            exclude_dynamic_context: false,
        }
    }

    pub fn with_mode(mut self, mode: PromptMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_runtime(mut self, runtime: RuntimeInfo) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDescriptor>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_sandbox(mut self, sandbox: SandboxInfo) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    /// Set the user-local time, formatted per `format`.
    pub fn with_time(mut self, time: &DateTime<FixedOffset>, format: TimeFormat) -> Self {
        self.time_format = format;
        self.time = Some(format.format_time(time));
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_extra_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.extra_instructions = Some(instructions.into());
        self
    }

    pub fn with_workspace_notes(mut self, notes: Vec<String>) -> Self {
        self.workspace_notes = notes;
        self
    }

    pub fn with_model_alias_lines(mut self, lines: Vec<String>) -> Self {
        self.model_alias_lines = lines;
        self
    }

    pub fn with_context_files(mut self, files: Vec<ContextFile>) -> Self {
        self.context_files = files;
        self
    }
}
