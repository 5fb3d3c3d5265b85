use crate::pas::ast::Conditional;
use crate::pas::error::{Result, ShellError};

/// Whether a line runs, and how many leading tokens to drop before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub run: bool,
    pub offset: usize,
}

/// Applies the `and`/`or` rule for a line's first token.
///
/// On the very first line there is no previous outcome, so a leading
/// keyword is a syntax error.
pub fn evaluate(first_token: &str, previous_success: bool, is_first_command: bool) -> Result<Decision> {
    let Some(cond) = Conditional::from_token(first_token) else {
        return Ok(Decision { run: true, offset: 0 });
    };

    if is_first_command {
        return Err(ShellError::Syntax(
            "conditional command cannot be first".to_string(),
        ));
    }

    let run = match cond {
        Conditional::And => previous_success,
        Conditional::Or => !previous_success,
    };
    Ok(Decision { run, offset: 1 })
}
