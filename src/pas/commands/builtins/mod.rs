pub mod env;
pub mod lookup;
pub mod common; // Private helpers

use crate::pas::context::ShellContext;

/// Helper to register all built-in commands at once
pub fn register_all_builtins(ctx: &mut ShellContext) {
    // Env/Navigation
    ctx.register_command("cd", Box::new(env::cd::CdCommand));
    ctx.register_command("pwd", Box::new(env::pwd::PwdCommand));

    // Session control
    ctx.register_command("exit", Box::new(env::exit::ExitCommand));
    ctx.register_command("die", Box::new(env::exit::DieCommand));

    // Lookup
    ctx.register_command("which", Box::new(lookup::which::WhichCommand));
}
