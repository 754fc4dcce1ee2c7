//! Prompt composition.
//!
//! [`PromptComposer`] assembles the system prompt and the per-turn
//! context message from a [`PromptParams`] bundle. Section prose comes
//! from an injected [`PromptRenderer`] capability — the composer owns
//! only the contract: derive tool summaries fresh from the live tool
//! set, force the exclude-dynamic flag for static composition, and hand
//! the renderer everything it needs in one [`PromptRequest`].
//!
//! [`MarkdownRenderer`] is the stock renderer: markdown sections via
//! [`SystemPromptBuilder`], stable content first, time- and
//! state-sensitive sections only when dynamic content is included.

use super::builder::{SystemPromptBuilder, kv_block};
use super::dynamic::{DynamicContext, SandboxContext};
use super::params::{CitationsMode, PromptMode, PromptParams, ThinkLevel, ToolDescriptor};
use std::collections::BTreeMap;
use tracing::debug;

// ── Composer ───────────────────────────────────────────────────────

/// Everything a renderer needs for one prompt: the parameter bundle plus
/// the per-call derived tool views.
#[derive(Debug)]
pub struct PromptRequest<'a> {
    pub params: &'a PromptParams,
    /// Tool names in declaration order.
    pub tool_names: Vec<String>,
    /// Name → one-line summary, derived from the live tool set at
    /// composition time so stale summaries cannot leak across tool-set
    /// changes.
    pub tool_summaries: BTreeMap<String, String>,
    /// Effective exclude flag (the bundle's flag, or forced by
    /// [`PromptComposer::compose_static`]).
    pub exclude_dynamic_context: bool,
}

/// Section-content capability injected into the composer.
pub trait PromptRenderer {
    /// Render the full system prompt.
    fn render_prompt(&self, request: &PromptRequest<'_>) -> String;
    /// Render the standalone per-turn context message.
    fn render_context(&self, context: &DynamicContext) -> String;
}

/// Assembles prompts by delegating prose to an injected renderer.
pub struct PromptComposer<R: PromptRenderer> {
    renderer: R,
}

impl Default for PromptComposer<MarkdownRenderer> {
    fn default() -> Self {
        Self::new(MarkdownRenderer)
    }
}

impl<R: PromptRenderer> PromptComposer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Compose the full prompt, honoring the bundle's exclude flag.
    pub fn compose(&self, params: &PromptParams) -> String {
        self.render(params, params.exclude_dynamic_context)
    }

    /// Compose with dynamic content forced off. For a fixed set of
    /// static fields the output is byte-identical regardless of sandbox
    /// state or current time — the basis for cache-stable prompts.
    pub fn compose_static(&self, params: &PromptParams) -> String {
        self.render(params, true)
    }

    /// Render the per-turn context message for the same bundle.
    pub fn dynamic_context(&self, params: &PromptParams) -> String {
        self.renderer.render_context(&DynamicContext::from_params(params))
    }

    fn render(&self, params: &PromptParams, exclude_dynamic_context: bool) -> String {
        let request = PromptRequest {
            params,
            tool_names: params.tools.iter().map(|t| t.name.clone()).collect(),
            tool_summaries: tool_summaries(&params.tools),
            exclude_dynamic_context,
        };
        let prompt = self.renderer.render_prompt(&request);
        debug!(
            mode = params.mode.as_str(),
            tools = request.tool_names.len(),
            static_only = exclude_dynamic_context,
            chars = prompt.len(),
            "composed system prompt"
        );
        prompt
    }
}

/// Derive the name → summary map from a live tool set: first sentence of
/// the first description line, truncated.
pub fn tool_summaries(tools: &[ToolDescriptor]) -> BTreeMap<String, String> {
    tools
        .iter()
        .map(|tool| (tool.name.clone(), summarize(&tool.description)))
        .collect()
}

const SUMMARY_MAX_CHARS: usize = 120;

fn summarize(description: &str) -> String {
    let first_line = description.lines().next().unwrap_or("").trim();
    let sentence = match first_line.split_once(". ") {
        Some((head, _)) => format!("{head}."),
        None => first_line.to_string(),
    };
    if sentence.chars().count() > SUMMARY_MAX_CHARS {
        let truncated: String = sentence.chars().take(SUMMARY_MAX_CHARS - 1).collect();
        format!("{truncated}…")
    } else {
        sentence
    }
}

// ── Stock renderer ─────────────────────────────────────────────────

const PREAMBLE: &str = "You are a personal assistant agent operating inside the user's workspace.";

const REASONING_TAG_HINT: &str =
    "Wrap internal reasoning in <thinking> tags. Never mix reasoning into user-facing text.";

const CITATIONS_GUIDANCE: &str =
    "When answering from stored memory, cite the source file inline.";

/// Default [`PromptRenderer`]: markdown sections, stable content first,
/// dynamic tail last (and only when requested).
pub struct MarkdownRenderer;

impl PromptRenderer for MarkdownRenderer {
    fn render_prompt(&self, request: &PromptRequest<'_>) -> String {
        let p = request.params;
        let mut b = SystemPromptBuilder::new(PREAMBLE)
            .raw_if(p.reasoning_tag_hint, || REASONING_TAG_HINT.to_string())
            .raw_opt(p.extra_instructions.clone());

        match p.mode {
            PromptMode::Bare => return b.build(),
            PromptMode::Full | PromptMode::Minimal => {}
        }

        b = b
            .section("Workspace", format!("Your workspace is `{}`.", p.workspace_dir))
            .section("Runtime", runtime_block(p))
            .section_if(!request.tool_names.is_empty(), "Tools", || {
                tools_block(&request.tool_names, &request.tool_summaries)
            })
            .section_if(!p.model_alias_lines.is_empty(), "Model Aliases", || {
                p.model_alias_lines.join("\n")
            });

        if p.mode == PromptMode::Full {
            b = b
                .section_opt("Heartbeat", p.heartbeat_prompt.clone())
                .section_opt("Skills", p.skills_prompt.clone())
                .section_opt(
                    "Documentation",
                    p.docs_path
                        .as_ref()
                        .map(|path| format!("Reference docs live under `{path}`.")),
                )
                .section_opt("Voice Output", p.tts_hint.clone())
                .section_opt(
                    "Reactions",
                    p.reaction_guidance.as_ref().map(|g| {
                        format!(
                            "Reaction level on `{}` is {}.",
                            g.channel,
                            g.level.as_str()
                        )
                    }),
                )
                .section_if(!p.owner_ids.is_empty(), "Owners", || {
                    format!("Your owners: {}.", p.owner_ids.join(", "))
                })
                .section_if(p.citations == CitationsMode::On, "Citations", || {
                    CITATIONS_GUIDANCE.to_string()
                });
        }

        if !p.context_files.is_empty() {
            b = b.section("Context Files", "Project files provided for this session:");
            for file in &p.context_files {
                b = b.section_at(3, &file.path, file.content.clone());
            }
        }

        // Dynamic tail: everything below varies between turns and is
        // omitted from static compositions.
        if !request.exclude_dynamic_context {
            b = b
                .section_if(!p.workspace_notes.is_empty(), "Workspace Notes", || {
                    bullet_list(&p.workspace_notes)
                })
                .section(
                    "Current Time",
                    kv_block([
                        ("timezone", Some(p.timezone.clone())),
                        ("time", p.time.clone()),
                        ("format", Some(p.time_format.as_str().to_string())),
                    ]),
                )
                .section_opt(
                    "Sandbox",
                    p.sandbox
                        .as_ref()
                        .map(|s| sandbox_block(&SandboxContext::from(s))),
                );
        }

        b.build()
    }

    fn render_context(&self, ctx: &DynamicContext) -> String {
        let mut workspace = format!("dir: {}", ctx.workspace_dir);
        if !ctx.workspace_notes.is_empty() {
            workspace.push('\n');
            workspace.push_str(&bullet_list(&ctx.workspace_notes));
        }

        SystemPromptBuilder::new("Per-turn session context.")
            .section("Workspace", workspace)
            .section_opt("Sandbox", ctx.sandbox.as_ref().map(sandbox_block))
            .section_if(!ctx.owner_ids.is_empty(), "Owners", || {
                ctx.owner_ids.join(", ")
            })
            .section(
                "Session",
                kv_block([
                    ("timezone", Some(ctx.timezone.clone())),
                    ("mode", Some(ctx.mode.as_str().to_string())),
                    (
                        "thinking",
                        (ctx.think_level != ThinkLevel::Off)
                            .then(|| ctx.think_level.as_str().to_string()),
                    ),
                ]),
            )
            .section(
                "Runtime",
                kv_block([
                    ("host", Some(ctx.runtime.host.clone())),
                    ("os", Some(ctx.runtime.os.clone())),
                    ("model", Some(ctx.runtime.model.clone())),
                    ("provider", ctx.runtime.provider.clone()),
                ]),
            )
            .raw_opt(ctx.extra_instructions.clone())
            .build()
    }
}

fn runtime_block(p: &PromptParams) -> String {
    let r = &p.runtime;
    kv_block([
        ("agent", r.agent_id.clone()),
        ("host", Some(r.host.clone())),
        ("os", Some(r.os.clone())),
        ("arch", Some(r.arch.clone())),
        ("model", Some(r.model.clone())),
        ("provider", r.provider.clone()),
        (
            "capabilities",
            (!r.capabilities.is_empty()).then(|| r.capabilities.join(", ")),
        ),
        ("channel", r.channel.clone()),
        (
            "channel actions",
            (!r.channel_actions.is_empty()).then(|| r.channel_actions.join(", ")),
        ),
        (
            "thinking",
            (p.think_level != ThinkLevel::Off).then(|| p.think_level.as_str().to_string()),
        ),
        (
            "reasoning",
            (p.reasoning_level != super::params::ReasoningLevel::None)
                .then(|| p.reasoning_level.as_str().to_string()),
        ),
    ])
}

fn tools_block(names: &[String], summaries: &BTreeMap<String, String>) -> String {
    names
        .iter()
        .map(|name| match summaries.get(name) {
            Some(summary) if !summary.is_empty() => format!("- {name}: {summary}"),
            _ => format!("- {name}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sandbox_block(sandbox: &SandboxContext) -> String {
    kv_block([
        ("enabled", Some(sandbox.enabled.to_string())),
        ("workspace", Some(sandbox.workspace_dir.clone())),
        ("access", Some(sandbox.workspace_access.as_str().to_string())),
        ("mount", sandbox.agent_workspace_mount.clone()),
        ("browser bridge", sandbox.browser_bridge_url.clone()),
        ("browser noVNC", sandbox.browser_novnc_url.clone()),
        (
            "host browser allowed",
            Some(sandbox.host_browser_allowed.to_string()),
        ),
        ("elevated", Some(sandbox.elevated.to_string())),
    ])
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
