//! Static help text for the command table.

use serde::Serialize;

/// One line of `help` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub description: &'static str,
}

pub const HELP_ENTRIES: [HelpEntry; 5] = [
    HelpEntry {
        usage: "cat <file>",
        description: "See the content of <file>",
    },
    HelpEntry {
        usage: "cd <dir>",
        description: "Move into <dir>, \"cd ..\" to move to the parent directory, \"cd\" or \"cd ~\" to return to root",
    },
    HelpEntry {
        usage: "ls",
        description: "See files and directories in the current directory",
    },
    HelpEntry {
        usage: "clear",
        description: "Clear the screen",
    },
    HelpEntry {
        usage: "help",
        description: "Display this help menu",
    },
];
