//! Reporting to the workflow run.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Channel through which a run reports progress, warnings, failures and
/// outputs to its host.
pub trait Reporter: Send + Sync {
    /// Reports an informational message.
    fn info(&self, message: &str);

    /// Reports a warning.
    fn warning(&self, message: &str);

    /// Reports that the run failed.
    fn set_failed(&self, message: &str);

    /// Publishes an output value.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be recorded.
    fn set_output(&self, name: &str, value: &str) -> io::Result<()>;
}

/// Reports through GitHub Actions workflow commands and the `GITHUB_OUTPUT`
/// file.
#[derive(Debug, Clone, Default)]
pub struct GitHubReporter {
    output_file: Option<PathBuf>,
}

impl GitHubReporter {
    /// Creates a reporter writing outputs to `output_file`.
    #[must_use]
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Creates a reporter for the current runner environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        )
    }
}

impl Reporter for GitHubReporter {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn warning(&self, message: &str) {
        warn!("{message}");
        println!("::warning::{}", escape_data(message));
    }

    fn set_failed(&self, message: &str) {
        error!("{message}");
        println!("::error::{}", escape_data(message));
    }

    fn set_output(&self, name: &str, value: &str) -> io::Result<()> {
        let Some(path) = &self.output_file else {
            info!(name, value, "GITHUB_OUTPUT is not set, output not recorded");
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(format_output(name, value)?.as_bytes())
    }
}

/// Escapes a workflow command message.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats an output using the multi-line `name<<delimiter` syntax.
fn format_output(name: &str, value: &str) -> io::Result<String> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Unexpected input: name or value contains the delimiter {delimiter}"),
        ));
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// A message recorded by [`MemoryReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// An informational message.
    Info(String),
    /// A warning.
    Warning(String),
    /// A failure.
    Failed(String),
    /// An output value.
    Output {
        /// Output name.
        name: String,
        /// Output value.
        value: String,
    },
}

/// Records reports in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything reported so far.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.lock().clone()
    }

    /// Returns the reported warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|report| match report {
                Report::Warning(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns the last value published for output `name`.
    #[must_use]
    pub fn output(&self, name: &str) -> Option<String> {
        self.lock().iter().rev().find_map(|report| match report {
            Report::Output { name: n, value } if n == name => Some(value.clone()),
            _ => None,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Report>> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, report: Report) {
        self.lock().push(report);
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.push(Report::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(Report::Warning(message.to_string()));
    }

    fn set_failed(&self, message: &str) {
        self.push(Report::Failed(message.to_string()));
    }

    fn set_output(&self, name: &str, value: &str) -> io::Result<()> {
        self.push(Report::Output {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }
}
