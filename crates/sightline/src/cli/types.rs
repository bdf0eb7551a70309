//! CLI value enums.
//!
//! This module contains the value enums used for CLI argument parsing.

use clap::ValueEnum;

/// Graph export format for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormatArg {
    /// Renderer-ready JSON description
    #[default]
    Json,
    /// Graphviz DOT source
    Dot,
}

impl std::fmt::Display for GraphFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Dot => write!(f, "dot"),
        }
    }
}
