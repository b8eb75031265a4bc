//! Action input sources.

use std::collections::HashMap;

/// A key-value source of action inputs.
pub trait InputSource {
    /// Returns the input named `name`, or `None` when unset or blank.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads inputs from the `INPUT_<NAME>` environment variables set by the
/// GitHub Actions runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl EnvInputs {
    /// Returns the environment variable holding the input `name`.
    #[must_use]
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputs {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(Self::variable_name(name))
            .ok()
            .and_then(non_blank)
    }
}

impl InputSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned().and_then(non_blank)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
