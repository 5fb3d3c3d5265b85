use crate::pas::ast::{CommandExpr, StructuredCommand};
use crate::pas::commands::system::{open_output, spawn_external, wait_success};
use crate::pas::context::ShellContext;
use crate::pas::error::Result;
use crate::pas::report_error;
use log::debug;
use os_pipe::pipe;
use std::io::{self, Write};
use std::process::Stdio;

/// Runs one parsed line and returns whether it succeeded.
pub fn execute_expr(expr: CommandExpr, ctx: &mut ShellContext) -> Result<bool> {
    match expr {
        CommandExpr::Simple(cmd) => execute_simple(&cmd, ctx),
        CommandExpr::Pipe { left, right } => execute_pipe(&left, &right, ctx),
    }
}

fn execute_simple(cmd: &StructuredCommand, ctx: &mut ShellContext) -> Result<bool> {
    let Some(program) = cmd.program() else {
        return Ok(ctx.last_success);
    };

    // The target is opened before dispatch so builtins and children share
    // the same failure path; it is closed again when `redirect` drops.
    let redirect = match &cmd.output_target {
        Some(path) => Some(open_output(path, ctx)?),
        None => None,
    };

    let registry = ctx.registry.clone();
    if let Some(builtin) = registry.get(program) {
        debug!("running builtin {}", program);
        return match redirect {
            Some(mut file) => {
                let res = builtin.execute(&cmd.arguments, ctx, &mut file);
                file.flush()?;
                res
            }
            None => {
                let mut out = io::stdout().lock();
                let res = builtin.execute(&cmd.arguments, ctx, &mut out);
                out.flush()?;
                res
            }
        };
    }

    let child = spawn_external(cmd, ctx, None, redirect.map(Stdio::from))?;
    wait_success(child)
}

/// Runs `left | right` and reports the right-hand side's outcome.
///
/// Both children are started before either is waited on, and the parent's
/// pipe ends are gone by then so the reader sees end-of-stream when the
/// writer exits. A file redirection on either side takes precedence over the
/// pipe for that stream.
fn execute_pipe(left: &StructuredCommand, right: &StructuredCommand, ctx: &mut ShellContext) -> Result<bool> {
    let (reader, writer) = pipe()?;

    let left_child = (|| {
        let stdout = match &left.output_target {
            Some(path) => Stdio::from(open_output(path, ctx)?),
            None => Stdio::from(writer),
        };
        spawn_external(left, ctx, None, Some(stdout))
    })();

    let right_child = (|| {
        let stdout = match &right.output_target {
            Some(path) => Some(Stdio::from(open_output(path, ctx)?)),
            None => None,
        };
        spawn_external(right, ctx, Some(Stdio::from(reader)), stdout)
    })();

    match left_child {
        Ok(child) => {
            // The left side's status never decides the pipeline.
            let left_ok = wait_success(child)?;
            debug!("left side of pipe succeeded: {}", left_ok);
        }
        Err(e) => report_error(&e),
    }

    wait_success(right_child?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pas::parser::{parse_command_line, tokenize};
    use std::fs;

    fn scratch_ctx() -> (tempfile::TempDir, ShellContext) {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = ShellContext::new();
        ctx.cwd = dir.path().to_path_buf();
        (dir, ctx)
    }

    fn run(line: &str, ctx: &mut ShellContext) -> Result<bool> {
        let expr = parse_command_line(tokenize(line), &ctx.cwd.clone())?;
        execute_expr(expr, ctx)
    }

    #[test]
    fn test_builtin_output_redirect() {
        let (dir, mut ctx) = scratch_ctx();
        assert!(run("pwd > where.txt", &mut ctx).unwrap());
        let content = fs::read_to_string(dir.path().join("where.txt")).unwrap();
        assert_eq!(content, format!("{}\n", dir.path().display()));
    }

    #[test]
    fn test_external_output_then_input_redirect() {
        let (dir, mut ctx) = scratch_ctx();
        assert!(run("echo hi > out.txt", &mut ctx).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "hi\n");

        assert!(run("cat < out.txt > copy.txt", &mut ctx).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("copy.txt")).unwrap(), "hi\n");
    }

    #[test]
    fn test_unwritable_output_is_not_executed() {
        let (dir, mut ctx) = scratch_ctx();
        assert!(run("echo hi > missing_dir/out.txt", &mut ctx).is_err());
        assert!(!dir.path().join("missing_dir").exists());
    }

    #[test]
    fn test_pipe_sorts_lines() {
        let (dir, mut ctx) = scratch_ctx();
        assert!(run(r#"printf "b\na\n" | sort > sorted.txt"#, &mut ctx).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("sorted.txt")).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_pipe_outcome_is_right_side() {
        let (_dir, mut ctx) = scratch_ctx();
        assert!(run("false | true", &mut ctx).unwrap());
        assert!(!run("true | false", &mut ctx).unwrap());
    }

    #[test]
    fn test_pipe_right_input_file_wins() {
        let (dir, mut ctx) = scratch_ctx();
        fs::write(dir.path().join("in.txt"), "from file\n").unwrap();
        assert!(run("echo from pipe | cat < in.txt > out.txt", &mut ctx).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "from file\n");
    }

    #[test]
    fn test_pipe_left_output_file_wins() {
        let (dir, mut ctx) = scratch_ctx();
        assert!(run("echo left > left.txt | cat > right.txt", &mut ctx).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("left.txt")).unwrap(), "left\n");
        assert_eq!(fs::read_to_string(dir.path().join("right.txt")).unwrap(), "");
    }

    #[test]
    fn test_pipe_with_missing_left_still_runs_right() {
        let (dir, mut ctx) = scratch_ctx();
        assert!(run("no-such-program-xyz | cat > out.txt", &mut ctx).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "");
    }

    #[test]
    fn test_pipe_with_missing_right_fails() {
        let (_dir, mut ctx) = scratch_ctx();
        assert!(run("echo hi | no-such-program-xyz", &mut ctx).is_err());
    }
}
