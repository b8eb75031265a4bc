use std::path::PathBuf;

use showcase_projects::{ActionInputs, EnvInputs, Format, InputError};

#[test]
fn loads_inputs_from_runner_environment() {
    temp_env::with_vars(
        [
            ("INPUT_TOKEN", Some("ghp_example")),
            ("INPUT_USERNAME", Some("octocat")),
            ("INPUT_FORMAT", Some("list")),
            ("INPUT_README_PATH", Some("profile/README.md")),
            ("INPUT_MAX_REPOS", Some("5")),
            ("INPUT_SHOW_TOPICS", Some("true")),
            ("INPUT_COMMIT_CHANGES", Some("false")),
            ("INPUT_TOPIC", Some("")),
        ],
        || {
            let inputs = ActionInputs::load(&EnvInputs).unwrap();

            assert_eq!(inputs.token, "ghp_example");
            assert_eq!(inputs.username, "octocat");
            assert_eq!(inputs.topic, "showcase");
            assert_eq!(inputs.format, Format::List);
            assert_eq!(inputs.readme_path, PathBuf::from("profile/README.md"));
            assert_eq!(inputs.max_repos, 5);
            assert!(inputs.show_topics);
            assert!(!inputs.commit_changes);
        },
    );
}

#[test]
fn missing_token_fails() {
    temp_env::with_vars(
        [
            ("INPUT_TOKEN", None),
            ("INPUT_USERNAME", Some("octocat")),
        ],
        || {
            let result = ActionInputs::load(&EnvInputs);
            assert_eq!(result, Err(InputError::Missing { name: "token" }));
        },
    );
}

#[test]
fn invalid_boolean_reports_input_name() {
    temp_env::with_vars(
        [
            ("INPUT_TOKEN", Some("ghp_example")),
            ("INPUT_USERNAME", Some("octocat")),
            ("INPUT_SHOW_STARS", Some("maybe")),
        ],
        || {
            let error = ActionInputs::load(&EnvInputs).unwrap_err();
            assert!(error.to_string().contains("show_stars"));
            assert!(error.to_string().contains("maybe"));
        },
    );
}
