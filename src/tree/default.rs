//! Built-in virtual filesystem shown when no definition file is configured.

use crate::tree::builder::NodeSpec;
use crate::tree::node::{Content, Span, Tone};

/// Root collection of the built-in tree
pub fn default_nodes() -> Vec<NodeSpec> {
    vec![
        NodeSpec::dir(
            "about-me",
            vec![
                NodeSpec::file(
                    "about-me.txt",
                    Content::Spans {
                        spans: vec![
                            Span::plain("Hi, I am "),
                            Span::toned("Shawkee", Tone::Teal),
                            Span::plain(
                                ". I build things for the web and like poking at terminals.",
                            ),
                        ],
                    },
                ),
                NodeSpec::file(
                    "contact.txt",
                    Content::List {
                        items: vec![
                            "github: github.com/shawkee".to_string(),
                            "email: hello@shawkee.dev".to_string(),
                        ],
                    },
                ),
            ],
        ),
        NodeSpec::dir(
            "projects",
            vec![
                NodeSpec::file(
                    "readme.txt",
                    "Things I have built. `cd` into a folder and `cat` a file to read more.",
                ),
                NodeSpec::dir(
                    "macos-desktop",
                    vec![NodeSpec::file(
                        "overview.txt",
                        "A simulated desktop in the browser: windows, dock, spotlight and this terminal.",
                    )],
                ),
                NodeSpec::dir(
                    "snake",
                    vec![NodeSpec::file(
                        "overview.txt",
                        "Classic snake on a canvas grid.",
                    )],
                ),
            ],
        ),
        NodeSpec::dir(
            "skills",
            vec![
                NodeSpec::file(
                    "frontend.txt",
                    Content::List {
                        items: vec![
                            "TypeScript".to_string(),
                            "React".to_string(),
                            "Tailwind CSS".to_string(),
                        ],
                    },
                ),
                NodeSpec::file(
                    "tools.txt",
                    Content::List {
                        items: vec!["git".to_string(), "vim".to_string(), "zsh".to_string()],
                    },
                ),
            ],
        ),
        NodeSpec::file(
            "welcome.txt",
            Content::Spans {
                spans: vec![
                    Span::plain("Type "),
                    Span::toned("help", Tone::Yellow),
                    Span::plain(" to see what this terminal can do."),
                ],
            },
        ),
    ]
}
