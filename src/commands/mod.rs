//! CLI commands

pub mod browse;
pub mod clean;
pub mod contact;
pub mod generate;
pub mod list;
pub mod show;

use clap::ValueEnum;

/// Output format for commands that print posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}
