#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, unreachable_pub)]

pub mod error;
pub mod generate;
pub mod identifier;
pub mod normalize;
pub mod pipeline;
pub mod registry;

pub use error::PipelineError;
pub use identifier::IconIdentifier;
pub use normalize::{normalize, NormalizeError, NormalizedIcon};
pub use pipeline::{run_build, run_normalize, BuildConfig, BuildSummary};
