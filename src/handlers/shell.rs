use anyhow::{Context, Result};
use colored::*;
use log::debug;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::os::fd::AsFd;
use std::path::PathBuf;
use crate::config::ShellConfig;
use crate::pas::context::ShellContext;
use crate::pas::session::{run_loop, Termination};
use crate::pas::source::{LineSource, ReaderSource};

/// Runs a whole shell session and returns the process exit status.
///
/// With a script path, lines come from that file; otherwise from stdin,
/// which also decides whether prompts and banners are shown.
pub fn handle_shell(script: Option<PathBuf>) -> Result<i32> {
    let config = ShellConfig::default();
    let mut ctx = ShellContext::with_config(&config);

    let (mut source, interactive, detach_stdin): (Box<dyn LineSource>, bool, bool) = match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            (Box::new(ReaderSource::new(BufReader::new(file))), false, true)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let detach = !interactive && is_regular_file(&stdin);
            (Box::new(ReaderSource::new(stdin.lock())), interactive, detach)
        }
    };

    // Children must not eat the rest of a script file. A piped stdin is
    // left to them.
    ctx.detach_stdin = detach_stdin;
    colored::control::set_override(interactive);
    debug!(
        "starting session (interactive: {}, detach stdin: {})",
        interactive, detach_stdin
    );

    if interactive {
        // Ctrl-C should stop the foreground child, not the shell.
        ctrlc::set_handler(|| {}).context("Failed to install Ctrl-C handler")?;
        println!("{}", config.welcome.green().bold());
    }

    let prompt = interactive.then_some(config.prompt.as_str());
    let termination = run_loop(&mut *source, &mut ctx, prompt, &mut io::stdout())
        .context("Failed to read input")?;

    if interactive && termination == Termination::EndOfInput {
        println!("\n{}", config.farewell.green());
    }
    Ok(termination.status())
}

fn is_regular_file(handle: impl AsFd) -> bool {
    handle
        .as_fd()
        .try_clone_to_owned()
        .map(File::from)
        .and_then(|file| file.metadata())
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
