// One command segment after redirections are pulled out: "sort < in.txt > out.txt"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredCommand {
    pub arguments: Vec<String>,
    pub input_source: Option<String>,
    pub output_target: Option<String>,
}

impl StructuredCommand {
    pub fn program(&self) -> Option<&str> {
        self.arguments.first().map(|s| s.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandExpr {
    // Simple command: "echo hello > out.txt"
    Simple(StructuredCommand),
    // Pipeline: "ls | sort"
    Pipe {
        left: StructuredCommand,
        right: StructuredCommand,
    },
}

/// Leading keyword of a line: "and cmd" / "or cmd".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditional {
    And,
    Or,
}

impl Conditional {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "and" => Some(Conditional::And),
            "or" => Some(Conditional::Or),
            _ => None,
        }
    }
}
