//! Pin card grid layout backed by github-readme-stats.

use super::GeneratorOptions;
use crate::repositories::Repository;
use url::form_urlencoded;

const PIN_ENDPOINT: &str = "https://github-readme-stats.vercel.app/api/pin/";

/// Appends a flex-wrapped grid with one pin card per repository.
pub(super) fn render(
    content: &mut String,
    repositories: &[Repository],
    options: &GeneratorOptions,
) {
    content.push_str(
        "<div style=\"display: flex; flex-wrap: wrap; justify-content: left; gap: 4px\">\n\n",
    );

    let last = repositories.len() - 1;
    for (index, repo) in repositories.iter().enumerate() {
        // Cards are laid out in pairs separated by blank lines.
        if index > 0 && index % 2 == 0 {
            content.push('\n');
        }

        content.push_str(&format!("<a href=\"{}\">\n", repo.html_url));
        content.push_str(&format!(
            "  <img align=\"center\" src=\"{PIN_ENDPOINT}?{}\" />\n",
            pin_query(repo, options)
        ));
        content.push_str("</a>\n");

        if index < last && index % 2 == 0 {
            content.push('\n');
        }
    }

    content.push_str("\n</div>\n\n");
}

/// Builds the pin card query string for a repository.
fn pin_query(repo: &Repository, options: &GeneratorOptions) -> String {
    let flag = |enabled: bool| if enabled { "true" } else { "false" };

    form_urlencoded::Serializer::new(String::new())
        .append_pair("username", repo.owner())
        .append_pair("repo", &repo.name)
        .append_pair("theme", "default")
        .append_pair("show_owner", "true")
        .append_pair(
            "description_lines_count",
            if options.show_description { "2" } else { "0" },
        )
        .append_pair(
            "hide",
            if options.show_description { "" } else { "description" },
        )
        .append_pair("hide_language", flag(!options.show_language))
        .append_pair("show_icons", "true")
        .append_pair("show_stars", flag(options.show_stars))
        .append_pair("show_forks", flag(options.show_forks))
        .append_pair("show_topics", flag(options.show_topics))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{sample_date, sample_repositories};
    use crate::render::{render_on, Format};

    #[test]
    fn renders_pin_cards() {
        let options = GeneratorOptions::default();

        let result = render_on(&sample_repositories(), &options, sample_date());

        assert!(result.contains("<div style=\"display: flex; flex-wrap: wrap;"));
        assert!(result.contains("<a href=\"https://github.com/user/awesome-project\">\n"));
        assert!(result.contains(
            "https://github-readme-stats.vercel.app/api/pin/?username=user&repo=cool-app&"
        ));
        assert!(result.contains("\n</div>\n\n"));
    }

    #[test]
    fn query_reflects_flags() {
        let repos = sample_repositories();
        let options = GeneratorOptions {
            show_description: false,
            show_language: false,
            show_forks: true,
            ..Default::default()
        };

        assert_eq!(
            pin_query(&repos[0], &options),
            "username=user&repo=awesome-project&theme=default&show_owner=true\
             &description_lines_count=0&hide=description&hide_language=true&show_icons=true\
             &show_stars=true&show_forks=true&show_topics=false"
        );
    }

    #[test]
    fn default_query_shows_description() {
        let repos = sample_repositories();
        let query = pin_query(&repos[1], &GeneratorOptions::default());

        assert!(query.contains("description_lines_count=2&hide=&hide_language=false"));
    }

    #[test]
    fn separates_card_pairs() {
        let mut repos = sample_repositories();
        let mut third = repos[0].clone();
        third.name = "third".to_string();
        third.html_url = "https://github.com/user/third".to_string();
        repos.push(third);

        let result = render_on(&repos, &GeneratorOptions::default(), sample_date());

        // First card, blank line, second card, blank line, third card.
        let cards: Vec<&str> = result.split("</a>\n").collect();
        assert_eq!(cards.len(), 4);
        assert!(cards[1].starts_with("\n<a href"));
        assert!(cards[2].starts_with("\n<a href=\"https://github.com/user/third\""));
        assert!(cards[3].starts_with("\n</div>"));
    }

    #[test]
    fn unknown_format_renders_cards() {
        let options = GeneratorOptions {
            format: Format::parse("mosaic"),
            ..Default::default()
        };

        let result = render_on(&sample_repositories(), &options, sample_date());
        assert!(result.contains(PIN_ENDPOINT));
    }
}
