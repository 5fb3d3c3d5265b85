use crate::pas::ast::{CommandExpr, StructuredCommand};
use crate::pas::error::{Result, ShellError};
use crate::pas::glob::{expand_glob, has_wildcard};
use log::{debug, warn};
use std::path::Path;

/// Drops everything from the first unquoted `#` onwards.
pub fn strip_comment(line: &str) -> &str {
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for (idx, c) in line.char_indices() {
        match c {
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '#' if !in_single_quote && !in_double_quote => return &line[..idx],
            _ => {}
        }
    }
    line
}

/// Splits a raw line into owned tokens.
///
/// Comments are stripped first. A token that starts with a quote runs to the
/// matching quote (or end of line when unterminated) and excludes the quotes;
/// any other token runs to the next whitespace. Quotes in the middle of an
/// unquoted token are ordinary characters.
pub fn tokenize(line: &str) -> Vec<String> {
    let line = strip_comment(line);
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let Some(first) = chars.next() else {
            break;
        };

        let mut current_token = String::new();
        if first == '\'' || first == '"' {
            for c in chars.by_ref() {
                if c == first {
                    break;
                }
                current_token.push(c);
            }
        } else {
            current_token.push(first);
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                current_token.push(c);
            }
        }
        tokens.push(current_token);
    }

    tokens
}

/// Turns one command segment into a `StructuredCommand`.
///
/// `<`/`>` followed by another token set the input/output file (last one
/// wins). A trailing `<` or `>` is kept as a plain argument. Tokens with a
/// wildcard are expanded against `cwd`.
pub fn structure_command(tokens: Vec<String>, cwd: &Path) -> StructuredCommand {
    let mut cmd = StructuredCommand::default();
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let is_redirect = token == "<" || token == ">";
        if is_redirect && iter.peek().is_some() {
            let target = iter.next();
            if token == "<" {
                cmd.input_source = target;
            } else {
                cmd.output_target = target;
            }
        } else if has_wildcard(&token) {
            cmd.arguments.extend(expand_glob(&token, cwd));
        } else {
            cmd.arguments.push(token);
        }
    }

    cmd
}

/// Structures the tokens that remain after the conditional keyword.
///
/// The first `|` splits the line into exactly two segments; anything after a
/// second `|` stays in the right-hand segment as ordinary tokens.
pub fn parse_command_line(mut tokens: Vec<String>, cwd: &Path) -> Result<CommandExpr> {
    let Some(split) = tokens.iter().position(|t| t == "|") else {
        let cmd = structure_command(tokens, cwd);
        debug!("parsed simple command: {:?}", cmd);
        return Ok(CommandExpr::Simple(cmd));
    };

    let right_tokens = tokens.split_off(split + 1);
    tokens.pop();

    if right_tokens.iter().any(|t| t == "|") {
        warn!("only two-stage pipelines are supported; extra '|' passed through");
    }

    let left = structure_command(tokens, cwd);
    let right = structure_command(right_tokens, cwd);

    if left.arguments.is_empty() {
        return Err(ShellError::Syntax("missing command before '|'".to_string()));
    }
    if right.arguments.is_empty() {
        return Err(ShellError::Syntax("missing command after '|'".to_string()));
    }

    debug!("parsed pipeline: {:?} | {:?}", left, right);
    Ok(CommandExpr::Pipe { left, right })
}
