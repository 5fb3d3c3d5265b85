use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use crate::config::ShellConfig;
use crate::pas::commands::Executable;

/// Per-session interpreter state threaded through every stage.
pub struct ShellContext {
    pub cwd: PathBuf,
    /// Outcome of the last command that actually ran.
    pub last_success: bool,
    /// Set until the first non-empty line has been accepted.
    pub first_command: bool,
    /// Status requested by `exit`/`die`; the loop stops once this is set.
    pub exit_request: Option<i32>,
    /// Give children a null stdin unless they redirect it themselves.
    pub detach_stdin: bool,
    pub search_path: Vec<PathBuf>,
    pub redirect_mode: u32,
    pub registry: Arc<HashMap<String, Box<dyn Executable + Send + Sync>>>,
}

impl ShellContext {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_config(&ShellConfig::default())
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut ctx = Self {
            cwd,
            last_success: true,
            first_command: true,
            exit_request: None,
            detach_stdin: false,
            search_path: config.search_path.clone(),
            redirect_mode: config.redirect_mode,
            registry: Arc::new(HashMap::new()),
        };
        crate::pas::commands::builtins::register_all_builtins(&mut ctx);
        ctx
    }

    #[cfg(test)]
    pub fn with_search_path(mut self, search_path: Vec<PathBuf>) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn register_command(&mut self, name: &str, command: Box<dyn Executable + Send + Sync>) {
        if let Some(map) = Arc::get_mut(&mut self.registry) {
            map.insert(name.to_string(), command);
        } else {
            // This should not happen during initialization phase
            panic!("Cannot register command: Registry is shared");
        }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }
}
