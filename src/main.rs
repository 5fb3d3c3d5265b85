mod cli;
mod config;
mod handlers;
mod pas;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use handlers::shell;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let status = shell::handle_shell(cli.script)?;
    std::process::exit(status);
}
