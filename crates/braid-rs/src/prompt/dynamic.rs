//! Per-turn dynamic context extraction.
//!
//! [`DynamicContext`] is the subset of [`PromptParams`] expected to
//! change between agent turns. It is re-rendered and re-issued every
//! turn while the static prompt from
//! [`compose_static`](super::compose::PromptComposer::compose_static) is
//! reused unchanged — that split is what keeps the expensive prompt
//! prefix cache-stable.

use super::params::{
    PromptMode, PromptParams, RuntimeInfo, SandboxInfo, ThinkLevel, WorkspaceAccess,
};

/// The per-turn-variable subset of the prompt parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicContext {
    pub workspace_dir: String,
    pub workspace_notes: Vec<String>,
    /// Entirely absent when the source bundle carries no sandbox
    /// descriptor — never present with empty fields.
    pub sandbox: Option<SandboxContext>,
    pub owner_ids: Vec<String>,
    pub timezone: String,
    pub runtime: RuntimeInfo,
    pub think_level: ThinkLevel,
    pub extra_instructions: Option<String>,
    pub mode: PromptMode,
}

/// Normalized sandbox descriptor carried in the context message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxContext {
    pub enabled: bool,
    pub workspace_dir: String,
    pub workspace_access: WorkspaceAccess,
    pub agent_workspace_mount: Option<String>,
    pub browser_bridge_url: Option<String>,
    pub browser_novnc_url: Option<String>,
    pub host_browser_allowed: bool,
    pub elevated: bool,
}

impl From<&SandboxInfo> for SandboxContext {
    fn from(info: &SandboxInfo) -> Self {
        Self::from_info(info)
    }
}

impl SandboxContext {
    fn from_info(info: &SandboxInfo) -> Self {
        Self {
            enabled: info.enabled,
            workspace_dir: info.workspace_dir.clone(),
            workspace_access: info.workspace_access,
            agent_workspace_mount: info.agent_workspace_mount.clone(),
            browser_bridge_url: info.browser_bridge_url.clone(),
            browser_novnc_url: info.browser_novnc_url.clone(),
            host_browser_allowed: info.host_browser_allowed,
            elevated: info.elevated,
        }
    }
}

impl DynamicContext {
    /// Derive the per-turn subset from a full parameter bundle.
    pub fn from_params(params: &PromptParams) -> Self {
        Self {
            workspace_dir: params.workspace_dir.clone(),
            workspace_notes: params.workspace_notes.clone(),
            sandbox: params.sandbox.as_ref().map(SandboxContext::from_info),
            owner_ids: params.owner_ids.clone(),
            timezone: params.timezone.clone(),
            runtime: params.runtime.clone(),
            think_level: params.think_level,
            extra_instructions: params.extra_instructions.clone(),
            mode: params.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_absent_stays_absent() {
        let params = PromptParams::new("/work");
        let ctx = DynamicContext::from_params(&params);
        assert!(ctx.sandbox.is_none());
    }

    #[test]
    fn sandbox_fields_propagate() {
        let params = PromptParams::new("/work").with_sandbox(SandboxInfo {
            enabled: true,
            workspace_dir: "/sandbox/work".into(),
            workspace_access: WorkspaceAccess::ReadWrite,
            agent_workspace_mount: Some("/mnt/agent".into()),
            browser_bridge_url: Some("http://127.0.0.1:9222".into()),
            browser_novnc_url: None,
            host_browser_allowed: false,
            elevated: true,
        });
        let ctx = DynamicContext::from_params(&params);
        let sandbox = ctx.sandbox.unwrap();
        assert!(sandbox.enabled);
        assert!(sandbox.elevated);
        assert_eq!(sandbox.workspace_access, WorkspaceAccess::ReadWrite);
        assert_eq!(sandbox.agent_workspace_mount.as_deref(), Some("/mnt/agent"));
        assert!(sandbox.browser_novnc_url.is_none());
    }

    #[test]
    fn static_fields_excluded() {
        // The dynamic subset carries no tool list, alias lines, or
        // context files; changing those must not affect it.
        let base = PromptParams::new("/work");
        let changed = base
            .clone()
            .with_tools(vec![crate::prompt::params::ToolDescriptor::new("shell", "Run.")])
            .with_model_alias_lines(vec!["kimi -> groq".into()]);
        assert_eq!(
            DynamicContext::from_params(&base),
            DynamicContext::from_params(&changed)
        );
    }

    #[test]
    fn per_turn_fields_carried() {
        let params = PromptParams::new("/work")
            .with_workspace_notes(vec!["deploy frozen until Monday".into()])
            .with_extra_instructions("Answer in Swedish.")
            .with_timezone("Europe/Stockholm");
        let ctx = DynamicContext::from_params(&params);
        assert_eq!(ctx.workspace_notes.len(), 1);
        assert_eq!(ctx.extra_instructions.as_deref(), Some("Answer in Swedish."));
        assert_eq!(ctx.timezone, "Europe/Stockholm");
    }
}
