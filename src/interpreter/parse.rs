//! Line parsing: one submitted line into a command name and an argument.

/// A submitted line split on whitespace runs.
///
/// Only the first two tokens carry meaning. Anything after them is kept in
/// `extra` so strict mode can reject it; the default mode ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub command: &'a str,
    pub argument: Option<&'a str>,
    pub extra: Vec<&'a str>,
}

impl<'a> ParsedLine<'a> {
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or("");
    let argument = tokens.next();
    ParsedLine {
        command,
        argument,
        extra: tokens.collect(),
    }
}
