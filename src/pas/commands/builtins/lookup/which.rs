// Which command

use crate::pas::commands::Executable;
use crate::pas::commands::resolve::search_path_lookup;
use crate::pas::context::ShellContext;
use crate::pas::error::Result;
use std::io::Write;

/// Prints where a bare name resolves on the search path.
///
/// Fails quietly for builtins, unknown names, and anything other than
/// exactly one argument.
pub struct WhichCommand;
impl Executable for WhichCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, stdout: &mut dyn Write) -> Result<bool> {
        if args.len() != 2 {
            return Ok(false);
        }
        let name = &args[1];
        if ctx.is_builtin(name) {
            return Ok(false);
        }

        match search_path_lookup(name, ctx) {
            Some(path) => {
                writeln!(stdout, "{}", path.display())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (bool, String) {
        let mut ctx = ShellContext::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let ok = WhichCommand.execute(&args, &mut ctx, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_which_builtin_fails() {
        for name in ["cd", "pwd", "exit", "die", "which"] {
            assert_eq!(run(&["which", name]), (false, String::new()));
        }
    }

    #[test]
    fn test_which_finds_one_path() {
        let (ok, out) = run(&["which", "ls"]);
        assert!(ok);
        assert_eq!(out.lines().count(), 1);
        assert!(out.trim_end().ends_with("/ls"));
    }

    #[test]
    fn test_which_argument_count_and_unknown() {
        assert_eq!(run(&["which"]), (false, String::new()));
        assert_eq!(run(&["which", "ls", "cat"]), (false, String::new()));
        assert_eq!(run(&["which", "definitely-not-a-command-xyz"]), (false, String::new()));
    }
}
