//! Rendering options.

use std::fmt;

/// Layout used to render the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Markdown bullet list with shields.io badges.
    List,
    /// HTML table.
    Table,
    /// Grid of github-readme-stats pin cards.
    #[default]
    Card,
}

impl Format {
    /// Parses a format name.
    ///
    /// Unrecognized names fall back to [`Format::Card`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "list" => Self::List,
            "table" => Self::Table,
            _ => Self::Card,
        }
    }

    /// Returns the format name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Table => "table",
            Self::Card => "card",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling how repositories are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Layout to render.
    pub format: Format,

    /// Section heading.
    pub title: String,

    /// Show repository descriptions.
    pub show_description: bool,

    /// Show the primary language.
    pub show_language: bool,

    /// Show the stargazer count.
    pub show_stars: bool,

    /// Show the fork count.
    pub show_forks: bool,

    /// Show up to three topics (table and card layouts).
    pub show_topics: bool,

    /// Maximum number of repositories rendered.
    pub max_repos: usize,
}

/// Heading used when no title is configured.
pub const DEFAULT_TITLE: &str = "🚀 My Projects";

/// Number of repositories rendered when no limit is configured.
pub const DEFAULT_MAX_REPOS: usize = 10;

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            format: Format::Card,
            title: DEFAULT_TITLE.to_string(),
            show_description: true,
            show_language: true,
            show_stars: true,
            show_forks: false,
            show_topics: false,
            max_repos: DEFAULT_MAX_REPOS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(Format::parse("list"), Format::List);
        assert_eq!(Format::parse("table"), Format::Table);
        assert_eq!(Format::parse("card"), Format::Card);
    }

    #[test]
    fn unknown_format_falls_back_to_card() {
        assert_eq!(Format::parse("grid"), Format::Card);
        assert_eq!(Format::parse(""), Format::Card);
        assert_eq!(Format::parse("TABLE"), Format::Card);
    }

    #[test]
    fn default_options() {
        let options = GeneratorOptions::default();
        assert_eq!(options.format, Format::Card);
        assert_eq!(options.title, "🚀 My Projects");
        assert!(options.show_description && options.show_language && options.show_stars);
        assert!(!options.show_forks && !options.show_topics);
        assert_eq!(options.max_repos, 10);
    }
}
