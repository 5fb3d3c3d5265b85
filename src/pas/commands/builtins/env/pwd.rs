// Pwd command

use crate::pas::commands::Executable;
use crate::pas::context::ShellContext;
use crate::pas::error::{Result, ShellError};
use std::fs;
use std::io::Write;

pub struct PwdCommand;
impl Executable for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, stdout: &mut dyn Write) -> Result<bool> {
        // The directory may have been removed from under us.
        fs::metadata(&ctx.cwd).map_err(|e| ShellError::Builtin(format!("pwd: {}", e)))?;
        writeln!(stdout, "{}", ctx.cwd.display())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwd_prints_session_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = ShellContext::new();
        ctx.cwd = dir.path().to_path_buf();

        let mut out = Vec::new();
        assert!(PwdCommand.execute(&["pwd".to_string()], &mut ctx, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", dir.path().display()));
    }

    #[test]
    fn test_pwd_is_repeatable() {
        let mut ctx = ShellContext::new();
        let mut first = Vec::new();
        let mut second = Vec::new();
        PwdCommand.execute(&["pwd".to_string()], &mut ctx, &mut first).unwrap();
        PwdCommand.execute(&["pwd".to_string()], &mut ctx, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pwd_fails_when_dir_is_gone() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = ShellContext::new();
        ctx.cwd = dir.path().join("removed");
        assert!(PwdCommand.execute(&["pwd".to_string()], &mut ctx, &mut Vec::new()).is_err());
    }
}
