// Cd command

use crate::pas::commands::Executable;
use crate::pas::commands::builtins::common::resolve_path;
use crate::pas::context::ShellContext;
use crate::pas::error::{Result, ShellError};
use log::debug;
use std::fs;
use std::io::{self, Write};

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, _stdout: &mut dyn Write) -> Result<bool> {
        // args[0] is "cd". args[1] is path.
        let path_str = match args.len() {
            0 | 1 => return Err(ShellError::Builtin("cd: expected one argument".to_string())),
            2 => &args[1],
            _ => return Err(ShellError::Builtin("cd: too many arguments".to_string())),
        };

        let new_path = resolve_path(ctx, path_str);
        // Canonicalize to remove .. and .
        let canon = fs::canonicalize(&new_path)
            .map_err(|e| ShellError::Builtin(format!("cd: {}: {}", path_str, e)))?;
        if !canon.is_dir() {
            let e = io::Error::from(io::ErrorKind::NotADirectory);
            return Err(ShellError::Builtin(format!("cd: {}: {}", path_str, e)));
        }

        debug!("cd {} -> {}", path_str, canon.display());
        ctx.cwd = canon;
        Ok(true)
    }
}
