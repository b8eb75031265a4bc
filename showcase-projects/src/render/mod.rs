//! Showcase rendering.
//!
//! Renders repositories into one of three fixed Markdown/HTML layouts,
//! framed by a heading and a dated footer.

mod card;
mod list;
mod options;
mod table;

pub use options::{Format, GeneratorOptions, DEFAULT_MAX_REPOS, DEFAULT_TITLE};

use crate::repositories::Repository;
use chrono::{Local, NaiveDate};
use url::form_urlencoded;

/// Line rendered when there are no repositories to show.
pub const NO_PROJECTS_LINE: &str = "No projects found.";

/// Renders the showcase section, dated today.
#[must_use]
pub fn render(repositories: &[Repository], options: &GeneratorOptions) -> String {
    render_on(repositories, options, Local::now().date_naive())
}

/// Renders the showcase section with a footer dated `date`.
///
/// Only the first `options.max_repos` repositories are rendered. When there
/// are none, the section holds the heading and [`NO_PROJECTS_LINE`] only.
#[must_use]
pub fn render_on(
    repositories: &[Repository],
    options: &GeneratorOptions,
    date: NaiveDate,
) -> String {
    let shown = &repositories[..repositories.len().min(options.max_repos)];

    let mut content = format!("## {}\n\n", options.title);

    if shown.is_empty() {
        content.push_str(NO_PROJECTS_LINE);
        content.push_str("\n\n");
        return content;
    }

    match options.format {
        Format::List => list::render(&mut content, shown, options),
        Format::Table => table::render(&mut content, shown, options),
        Format::Card => card::render(&mut content, shown, options),
    }

    content.push_str("\n---\n");
    content.push_str(&format!("*Updated on {}*\n\n", date.format("%B %-d, %Y")));

    content
}

/// Escapes text for inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Encodes text for use as a shields.io static badge path segment.
///
/// Dashes and underscores are doubled since shields.io uses them as separators.
fn badge_segment(text: &str) -> String {
    let escaped = text.replace('-', "--").replace('_', "__");
    form_urlencoded::byte_serialize(escaped.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
