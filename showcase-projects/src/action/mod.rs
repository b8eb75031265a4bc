//! GitHub Actions host integration.
//!
//! The runner never touches the host directly: inputs come from an
//! [`InputSource`] and everything reported back goes through a [`Reporter`].

mod inputs;
mod reporter;

pub use inputs::{EnvInputs, InputSource};
pub use reporter::{GitHubReporter, MemoryReporter, Report, Reporter};
