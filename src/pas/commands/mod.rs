pub mod builtins;
pub mod resolve;
pub mod system;

use crate::pas::context::ShellContext;
use crate::pas::error::Result;
use std::io::Write;

/// A command that runs inside the shell process.
///
/// `args[0]` is the command name. Output goes to `stdout`, which is already
/// pointed at the redirection target when there is one. Returns whether the
/// command succeeded.
pub trait Executable: Send + Sync {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, stdout: &mut dyn Write) -> Result<bool>;
}
