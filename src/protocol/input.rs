use serde::Deserialize;

/// The input received from Claude Code on stdin for a PreToolUse hook.
///
/// Every field is optional: a missing `tool_input` or `command` reads as an
/// empty command. Present fields must still have the right JSON type.
/// Unknown fields are silently ignored for forward compatibility.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub tool_input: ToolInput,
}

/// Tool-specific parameters. Only the Bash `command` matters to the gate.
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub command: String,
}

impl HookInput {
    /// The shell command about to run, or `""` when none was sent.
    pub fn command(&self) -> &str {
        &self.tool_input.command
    }
}
