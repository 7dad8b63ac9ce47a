pub mod input;
pub mod output;

pub use input::{HookInput, ToolInput};
pub use output::{Verdict, EXIT_ALLOW, EXIT_BLOCK};
