#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod action;
pub mod config;
pub mod render;
pub mod repositories;
pub mod runner;
pub mod splice;
pub mod storage;
pub mod summary;

pub use action::{EnvInputs, GitHubReporter, InputSource, MemoryReporter, Report, Reporter};
pub use config::{ActionInputs, InputError, RepositoryContext};
pub use render::{escape_html, render, render_on, Format, GeneratorOptions};
pub use repositories::{fetch_repositories_with_topic, FetchError, Repository};
pub use runner::{
    prepare_update, publish_outputs, report_update, ReadmeUpdate, Runner, RunnerConfig,
    RunnerError,
};
pub use splice::{splice, Placement, Spliced};
pub use storage::{
    commit_readme, ensure_directory_exists, read_readme, write_readme, CommitError, CommitRequest,
    CommitStatus, StorageError,
};
pub use summary::RunSummary;
