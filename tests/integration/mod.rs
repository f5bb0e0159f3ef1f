//! Integration tests for the deskterm terminal core

mod cli_parse;
mod session_properties;
mod terminal_scenarios;
mod tree_definition;
