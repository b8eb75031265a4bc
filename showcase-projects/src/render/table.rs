//! HTML table layout.

use super::{badge_segment, escape_html, GeneratorOptions};
use crate::repositories::Repository;

/// Descriptions longer than this many characters are truncated.
const MAX_DESCRIPTION_CHARS: usize = 150;

/// Topics shown per repository.
const MAX_TOPICS: usize = 3;

const TOPIC_STYLE: &str = "background-color: #f1f8ff; color: #0366d6; padding: 2px 6px; border-radius: 3px; font-size: 12px; margin-right: 4px;";

/// Appends an HTML table with one row per repository.
pub(super) fn render(
    content: &mut String,
    repositories: &[Repository],
    options: &GeneratorOptions,
) {
    content.push_str("<table>\n");

    content.push_str("  <thead>\n    <tr>\n");
    content.push_str("      <th>Repository</th>\n");
    content.push_str("      <th>Description</th>\n");
    if options.show_language {
        content.push_str("      <th>Language</th>\n");
    }
    if options.show_stars {
        content.push_str("      <th>Stars</th>\n");
    }
    if options.show_forks {
        content.push_str("      <th>Forks</th>\n");
    }
    if options.show_topics {
        content.push_str("      <th>Topics</th>\n");
    }
    content.push_str("    </tr>\n  </thead>\n");

    content.push_str("  <tbody>\n");
    for repo in repositories {
        render_row(content, repo, options);
    }
    content.push_str("  </tbody>\n</table>\n\n");
}

fn render_row(content: &mut String, repo: &Repository, options: &GeneratorOptions) {
    content.push_str("    <tr>\n");

    content.push_str(&format!(
        "      <td><a href=\"{}\" target=\"_blank\"><strong>{}</strong></a></td>\n",
        repo.html_url,
        escape_html(&repo.name)
    ));

    let description =
        truncate_description(repo.description.as_deref().unwrap_or("No description"));
    let homepage = repo
        .homepage
        .as_deref()
        .map(|url| {
            format!(
                "<br><a href=\"{}\" target=\"_blank\"><strong>Live Website</strong></a>",
                escape_html(url)
            )
        })
        .unwrap_or_default();
    content.push_str(&format!(
        "      <td>{} {}</td>\n",
        escape_html(&description),
        homepage
    ));

    if options.show_language {
        let language = match &repo.language {
            Some(language) => format!(
                "<img src=\"https://img.shields.io/badge/-{}-blue?style=flat-square\" alt=\"{}\"/>",
                badge_segment(language),
                escape_html(language)
            ),
            None => "None Detected".to_string(),
        };
        content.push_str(&format!("      <td>{language}</td>\n"));
    }

    if options.show_stars {
        content.push_str(&format!("      <td>⭐ {}</td>\n", repo.stargazers_count));
    }

    if options.show_forks {
        content.push_str(&format!("      <td>🔀 {}</td>\n", repo.forks_count));
    }

    if options.show_topics {
        let topics: String = repo
            .topics
            .iter()
            .take(MAX_TOPICS)
            .map(|topic| format!("<span style=\"{TOPIC_STYLE}\">{}</span>", escape_html(topic)))
            .collect();
        let topics = if topics.is_empty() { "None".to_string() } else { topics };
        content.push_str(&format!("      <td>{topics}</td>\n"));
    }

    content.push_str("    </tr>\n");
}

/// Truncates to [`MAX_DESCRIPTION_CHARS`] characters, marking the cut with `...`.
fn truncate_description(description: &str) -> String {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        let mut truncated: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        description.to_string()
    }
}
