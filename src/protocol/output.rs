/// Outcome of running a command through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No rule matched; the command may run.
    Allow,
    /// A rule matched. `rule` is its name, `message` goes to stderr.
    Block { rule: String, message: String },
}

/// Exit status telling the runner to let the command through.
pub const EXIT_ALLOW: u8 = 0;

/// Exit status telling the runner to refuse the command.
pub const EXIT_BLOCK: u8 = 2;

impl Verdict {
    /// The process exit status this verdict maps to.
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Allow => EXIT_ALLOW,
            Verdict::Block { .. } => EXIT_BLOCK,
        }
    }

    /// The stderr message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Allow => None,
            Verdict::Block { message, .. } => Some(message.as_str()),
        }
    }
}
