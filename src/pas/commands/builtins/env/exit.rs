// Exit and die commands

use crate::pas::commands::Executable;
use crate::pas::context::ShellContext;
use crate::pas::error::Result;
use std::io::Write;

/// Ends the session with status 0. Arguments are ignored.
pub struct ExitCommand;
impl Executable for ExitCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, _stdout: &mut dyn Write) -> Result<bool> {
        ctx.exit_request = Some(0);
        Ok(true)
    }
}

/// Prints its arguments, then ends the session with status 1.
pub struct DieCommand;
impl Executable for DieCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, stdout: &mut dyn Write) -> Result<bool> {
        ctx.exit_request = Some(1);
        if args.len() > 1 {
            writeln!(stdout, "{}", args[1..].join(" "))?;
            stdout.flush()?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_requests_status_zero() {
        let mut ctx = ShellContext::new();
        ExitCommand.execute(&["exit".to_string(), "7".to_string()], &mut ctx, &mut Vec::new()).unwrap();
        assert_eq!(ctx.exit_request, Some(0));
    }

    #[test]
    fn test_die_prints_and_requests_status_one() {
        let mut ctx = ShellContext::new();
        let mut out = Vec::new();
        let args: Vec<String> = ["die", "bad", "thing"].iter().map(|s| s.to_string()).collect();
        DieCommand.execute(&args, &mut ctx, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bad thing\n");
        assert_eq!(ctx.exit_request, Some(1));
    }

    #[test]
    fn test_die_without_message_prints_nothing() {
        let mut ctx = ShellContext::new();
        let mut out = Vec::new();
        DieCommand.execute(&["die".to_string()], &mut ctx, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(ctx.exit_request, Some(1));
    }
}
