use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Interactive in-memory address book")]
pub struct Cli {
    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, env = "ADDRESS_BOOK_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,
}

/// Commands understood by the interactive loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Get,
    List,
    Search,
    Remove,
    Help,
    Quit,
    /// Anything else. Ignored by the loop.
    Unknown,
}

impl Command {
    /// Command words in the order `help` shows them.
    pub const WORDS: [&'static str; 7] = ["add", "get", "list", "search", "remove", "help", "quit"];

    /// Parse the first word of an input line. Matching is exact and case-sensitive.
    pub fn parse(line: &str) -> Self {
        match line.split_whitespace().next().unwrap_or_default() {
            "add" => Command::Add,
            "get" => Command::Get,
            "list" => Command::List,
            "search" => Command::Search,
            "remove" => Command::Remove,
            "help" => Command::Help,
            "quit" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}
