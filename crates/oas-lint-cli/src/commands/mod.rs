//! CLI subcommand implementations.

pub mod check;
pub mod github;
pub mod init;
pub mod list_rules;
pub mod output;
