//! # Help Command
//!
//! Handles the `help` command.
//! Displays the main help menu to the user.

pub fn handle_help() -> String {
    crate::strings::help::MAIN.to_string()
}
