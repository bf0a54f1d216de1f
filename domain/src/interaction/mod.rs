//! Session-control directives.
//!
//! Each input line is either one of four directives or chat content.
//! Matching is exact and case-sensitive on the raw line: `"/Quit"` or
//! `" /quit"` are chat messages, not directives.
//!
//! ```
//! use companion_domain::Directive;
//!
//! assert_eq!(Directive::parse("/reset"), Directive::Reset);
//! assert_eq!(
//!     Directive::parse("/reset "),
//!     Directive::Chat("/reset ".to_string())
//! );
//! ```

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Emit a farewell and end the session
    Quit,
    /// List the available directives
    Help,
    /// Reseed both tracks and clear the transcript
    Reset,
    /// Persist the transcript
    Save,
    /// Anything else, sent to both tracks verbatim
    Chat(String),
}

/// Name and description of a directive, for help listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveHelp {
    pub name: &'static str,
    pub description: &'static str,
}

impl Directive {
    /// Help entries for the four directives
    pub const HELP: [DirectiveHelp; 4] = [
        DirectiveHelp {
            name: "/help",
            description: "Show list of available commands",
        },
        DirectiveHelp {
            name: "/reset",
            description: "Reset the conversation history",
        },
        DirectiveHelp {
            name: "/save",
            description: "Save the conversation history to a file",
        },
        DirectiveHelp {
            name: "/quit",
            description: "Quit the chat session",
        },
    ];

    pub fn parse(line: &str) -> Self {
        match line {
            "/quit" => Directive::Quit,
            "/help" => Directive::Help,
            "/reset" => Directive::Reset,
            "/save" => Directive::Save,
            other => Directive::Chat(other.to_string()),
        }
    }
}
