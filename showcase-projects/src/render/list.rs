//! Markdown list layout.

use super::{badge_segment, GeneratorOptions};
use crate::repositories::Repository;

/// Appends one list entry per repository.
pub(super) fn render(
    content: &mut String,
    repositories: &[Repository],
    options: &GeneratorOptions,
) {
    for repo in repositories {
        content.push_str(&format!(
            "- ### 🧑‍💻 **[{}]({})**\n",
            repo.name, repo.html_url
        ));

        let badges = badges(repo, options);
        if !badges.is_empty() {
            content.push_str(&format!("   {badges}\n"));
        }
        content.push('\n');

        if options.show_description {
            if let Some(description) = &repo.description {
                content.push_str(&format!("   {description}\n"));
            }
        }
        if let Some(homepage) = &repo.homepage {
            content.push_str(&format!("   [Visit Website]({homepage})\n"));
        }
        content.push('\n');
    }

    content.push('\n');
}

/// Builds the inline badge row for the enabled fields.
fn badges(repo: &Repository, options: &GeneratorOptions) -> String {
    let mut badges = Vec::new();

    if options.show_language {
        if let Some(language) = &repo.language {
            badges.push(format!(
                "![{language}](https://img.shields.io/badge/-{}-blue)",
                badge_segment(language)
            ));
        }
    }

    if options.show_stars {
        badges.push(format!(
            "![Stars](https://img.shields.io/badge/⭐-{}-yellow)",
            repo.stargazers_count
        ));
    }

    if options.show_forks {
        badges.push(format!(
            "![Forks](https://img.shields.io/badge/🔀-{}-orange)",
            repo.forks_count
        ));
    }

    badges.join(" ")
}
