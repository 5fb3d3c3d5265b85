// System command
use crate::pas::ast::StructuredCommand;
use crate::pas::commands::builtins::common::resolve_path;
use crate::pas::commands::resolve::resolve_executable;
use crate::pas::context::ShellContext;
use crate::pas::error::{Result, ShellError};
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};

/// Opens a `<` target read-only.
pub fn open_input(path: &str, ctx: &ShellContext) -> Result<File> {
    File::open(resolve_path(ctx, path)).map_err(|source| ShellError::Redirection {
        path: path.to_string(),
        source,
    })
}

/// Opens a `>` target for writing, creating or truncating it.
pub fn open_output(path: &str, ctx: &ShellContext) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(ctx.redirect_mode)
        .open(resolve_path(ctx, path))
        .map_err(|source| ShellError::Redirection {
            path: path.to_string(),
            source,
        })
}

/// Starts `cmd` as a child process.
///
/// Standard input comes from the command's own `< file` if it has one, then
/// `stdin`, then the session default. Standard output is `stdout` or the
/// shell's own; the caller has already applied any `> file`. The
/// `Command` (and with it every parent-side copy of the handles passed in)
/// is dropped before this returns.
pub fn spawn_external(
    cmd: &StructuredCommand,
    ctx: &ShellContext,
    stdin: Option<Stdio>,
    stdout: Option<Stdio>,
) -> Result<Child> {
    let Some(program) = cmd.program() else {
        return Err(ShellError::Syntax("empty command".to_string()));
    };
    let path = resolve_executable(program, ctx)?;

    let stdin = match &cmd.input_source {
        Some(file) => Stdio::from(open_input(file, ctx)?),
        None => stdin.unwrap_or_else(|| {
            if ctx.detach_stdin {
                Stdio::null()
            } else {
                Stdio::inherit()
            }
        }),
    };

    let mut command = Command::new(&path);
    command
        .arg0(program)
        .args(&cmd.arguments[1..])
        .current_dir(&ctx.cwd)
        .stdin(stdin)
        .stdout(stdout.unwrap_or_else(Stdio::inherit));

    // Anything the shell printed so far must land before the child's output.
    io::stdout().flush()?;

    debug!("spawning {} {:?}", path.display(), &cmd.arguments[1..]);
    command.spawn().map_err(|source| ShellError::Spawn {
        program: program.to_string(),
        source,
    })
}

/// Waits for a child; success means it exited normally with status 0.
pub fn wait_success(mut child: Child) -> Result<bool> {
    let status = child.wait()?;
    debug!("child {} exited with {}", child.id(), status);
    Ok(status.success())
}
