use std::path::PathBuf;

/// Directories probed, in order, for bare command names.
pub const SEARCH_PATH: [&str; 3] = ["/usr/local/bin", "/usr/bin", "/bin"];

/// Compiled-in shell settings. Nothing here is read from disk or the environment.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub search_path: Vec<PathBuf>,
    pub prompt: String,
    pub welcome: String,
    pub farewell: String,
    /// Permission bits for files created by `>` redirection (rw-r-----).
    pub redirect_mode: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            search_path: SEARCH_PATH.iter().map(PathBuf::from).collect(),
            prompt: "mysh> ".to_string(),
            welcome: "Welcome to my Shell!".to_string(),
            farewell: "Exiting my shell.".to_string(),
            redirect_mode: 0o640,
        }
    }
}
