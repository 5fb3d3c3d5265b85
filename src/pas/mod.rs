pub mod ast;
pub mod commands;
pub mod conditional;
pub mod context;
pub mod error;
pub mod executor;
pub mod glob;
pub mod parser;
pub mod session;
pub mod source;

use colored::*;
use context::ShellContext;
use error::{Result, ShellError};
use executor::execute_expr;
use log::debug;


/// Runs one input line against the session.
///
/// Blank and comment-only lines do nothing. A line skipped by `and`/`or`
/// or rejected as a syntax error leaves `last_success` untouched; any other
/// error counts as a failed command.
pub fn run_command_line(line: &str, ctx: &mut ShellContext) -> Result<()> {
    let mut tokens = parser::tokenize(line);
    let Some(first) = tokens.first() else {
        return Ok(());
    };
    debug!("tokens: {:?}", tokens);

    let decision = conditional::evaluate(first, ctx.last_success, ctx.first_command)?;
    ctx.first_command = false;
    if !decision.run {
        debug!("skipping line, previous outcome was {}", ctx.last_success);
        return Ok(());
    }
    tokens.drain(..decision.offset);

    let expr = parser::parse_command_line(tokens, &ctx.cwd)?;
    if let ast::CommandExpr::Simple(cmd) = &expr {
        if cmd.arguments.is_empty() {
            return Ok(());
        }
    }

    match execute_expr(expr, ctx) {
        Ok(success) => {
            ctx.last_success = success;
            Ok(())
        }
        Err(e) => {
            ctx.last_success = false;
            Err(e)
        }
    }
}

pub fn report_error(err: &ShellError) {
    eprintln!("{} {}", "mysh:".red().bold(), err);
}
