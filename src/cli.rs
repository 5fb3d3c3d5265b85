use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mysh", version, about = "mysh: a small command interpreter")]
pub struct Cli {
    /// Script to run instead of reading commands from standard input
    pub script: Option<PathBuf>,
}
