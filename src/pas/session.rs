use crate::pas::context::ShellContext;
use crate::pas::error::Result;
use crate::pas::source::LineSource;
use crate::pas::{report_error, run_command_line};
use log::debug;
use std::io::Write;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    EndOfInput,
    /// `exit` or `die` ran with this status.
    Exit(i32),
}

impl Termination {
    pub fn status(self) -> i32 {
        match self {
            Termination::EndOfInput => 0,
            Termination::Exit(code) => code,
        }
    }
}

/// Reads and runs lines until end of input or an `exit`/`die`.
///
/// With a prompt, it is written to `out` before every read, the final
/// end-of-input read included. Errors from a line are reported and the
/// loop moves on; only a failure of the line source itself ends the
/// session early.
pub fn run_loop(
    source: &mut dyn LineSource,
    ctx: &mut ShellContext,
    prompt: Option<&str>,
    out: &mut dyn Write,
) -> Result<Termination> {
    loop {
        if let Some(prompt) = prompt {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let Some(line) = source.next_line()? else {
            debug!("end of input");
            return Ok(Termination::EndOfInput);
        };

        if let Err(e) = run_command_line(&line, ctx) {
            report_error(&e);
        }

        if let Some(code) = ctx.exit_request {
            out.flush()?;
            return Ok(Termination::Exit(code));
        }
    }
}
