//! Property tests for settings parsing and how settings reach the plans.

use proptest::prelude::*;

use qdii_deploy::{plan, Config, TargetName};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary text never panics the settings parser.
    #[test]
    fn property_from_toml_never_panics(content in "\\PC{0,200}") {
        let _ = Config::from_toml(&content);
    }

    /// PROPERTY: a renamed image reaches build, push and pull together.
    #[test]
    fn property_image_name_shared_by_build_push_pull(
        name in "[a-z][a-z0-9_]{0,15}",
        tag in "[a-z0-9][a-z0-9.]{0,9}",
    ) {
        let content = format!("[image]\nname = \"{name}\"\ntag = \"{tag}\"\n");
        let config = Config::from_toml(&content).expect("valid settings");

        let build = plan(TargetName::Build, &config).command_lines();
        let push = plan(TargetName::Push, &config).command_lines();
        let pull = plan(TargetName::Pull, &config).command_lines();

        prop_assert_eq!(&build[0], &format!("docker build -t {name} ."));
        let published = format!("kegao1995/{name}:{tag}");
        let expected_push = format!("-t {published} --push");
        prop_assert!(push[1].contains(&expected_push));
        prop_assert_eq!(&pull[0], &format!("docker pull {published}"));
        prop_assert!(pull[1].ends_with(&published));
    }

    /// PROPERTY: the port appears in run and pull and nowhere else.
    #[test]
    fn property_port_only_touches_run_and_pull(port in 1024u16..=65535) {
        let config = Config::from_toml(&format!("[dashboard]\nport = {port}\n"))
            .expect("valid settings");

        let run = plan(TargetName::Run, &config).command_lines().join("\n");
        let pull = plan(TargetName::Pull, &config).command_lines().join("\n");
        let build = plan(TargetName::Build, &config).command_lines().join("\n");

        let expected_run = format!("--server.port {port}");
        let expected_pull = format!("-p {port}:{port}");
        prop_assert!(run.ends_with(&expected_run));
        prop_assert!(pull.contains(&expected_pull));
        prop_assert_eq!(build, "docker build -t qdii_data .");
    }
}
