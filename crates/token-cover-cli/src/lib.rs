//! token-cover-cli library: exposes the CLI's building blocks for testing.

pub mod config;
pub mod explainer;

pub use config::{Config, ConfigError};
pub use explainer::{
    CoverReport, ExplainRequest, Explainer, FineTokens, SegmentReport, WordTokenizer,
};
