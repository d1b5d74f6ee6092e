//! Action directive parsing
//!
//! A model reply may carry an action on a line of the form
//! `Action: <name>: <argument>`. The first matching line wins; any later
//! matches in the same reply are ignored.

use regex::Regex;
use std::sync::OnceLock;

/// A parsed instruction naming a tool and its textual argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDirective {
    /// Action name (one or more word characters)
    pub name: String,

    /// Argument text (the rest of the line, may be empty)
    pub argument: String,
}

fn action_re() -> &'static Regex {
    static ACTION_RE: OnceLock<Regex> = OnceLock::new();
    ACTION_RE.get_or_init(|| Regex::new(r"^Action: (\w+): (.*)$").expect("action pattern"))
}

/// Scan a reply line-by-line for the first action directive
pub fn parse_action(reply: &str) -> Option<ActionDirective> {
    reply.lines().find_map(|line| {
        action_re().captures(line).map(|captures| ActionDirective {
            name: captures[1].to_string(),
            argument: captures[2].to_string(),
        })
    })
}
