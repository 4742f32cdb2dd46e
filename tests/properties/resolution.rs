//! Property tests for target-name resolution and execution.

use proptest::prelude::*;

use qdii_deploy::infrastructure::RecordingRunner;
use qdii_deploy::{plan, Config, Driver, DriverError, TargetName};

const KNOWN: [&str; 4] = ["run", "build", "push", "pull"];

fn known_word() -> impl Strategy<Value = String> {
    proptest::sample::select(KNOWN.to_vec()).prop_map(str::to_string)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary words never panics and only accepts the four names.
    #[test]
    fn property_parse_accepts_only_known_names(word in ".{0,24}") {
        match word.parse::<TargetName>() {
            Ok(name) => prop_assert_eq!(name.as_str(), word.as_str()),
            Err(DriverError::TargetNotFound { name }) => {
                prop_assert_eq!(name, word.clone());
                prop_assert!(!KNOWN.contains(&word.as_str()));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// PROPERTY: one unknown word anywhere means nothing runs.
    #[test]
    fn property_unknown_word_runs_nothing(
        before in proptest::collection::vec(known_word(), 0..4),
        after in proptest::collection::vec(known_word(), 0..4),
        bad in "[A-Za-z_-]{1,12}",
    ) {
        prop_assume!(!KNOWN.contains(&bad.as_str()));

        let mut words = before;
        words.push(bad);
        words.extend(after);

        let driver = Driver::new(RecordingRunner::new(), Config::default());
        let result = driver.run(&words);

        prop_assert!(
            matches!(result, Err(DriverError::TargetNotFound { .. })),
            "expected TargetNotFound"
        );
        prop_assert!(driver.runner().recorded().is_empty());
    }

    /// PROPERTY: executed commands are exactly the concatenation of each
    /// distinct requested target's own plan, in first-seen order.
    #[test]
    fn property_no_cross_target_leakage(
        words in proptest::collection::vec(known_word(), 1..8),
    ) {
        let config = Config::default();
        let driver = Driver::new(RecordingRunner::new(), config.clone());
        let report = driver.run(&words).expect("known words resolve");

        let mut seen: Vec<TargetName> = Vec::new();
        for w in &words {
            let name: TargetName = w.parse().expect("known word");
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        let expected: Vec<String> = seen
            .iter()
            .flat_map(|name| plan(*name, &config).command_lines())
            .collect();

        prop_assert_eq!(driver.runner().command_lines(), expected);
        prop_assert!(report.is_success());
    }

    /// PROPERTY: the first failing step's code is the overall code and
    /// nothing after it runs.
    #[test]
    fn property_first_failure_stops_execution(
        code in 1i32..=255,
        fail_index in 0usize..6,
    ) {
        let config = Config::default();
        let words = ["run", "build", "push", "pull"];
        let all: Vec<_> = words
            .iter()
            .flat_map(|w| plan(w.parse().expect("known word"), &config).steps)
            .collect();
        let label = all[fail_index].label.clone();

        let driver = Driver::new(RecordingRunner::new().exit_on(label.clone(), code), config);
        let report = driver.run(&words).expect("known words resolve");

        // Labels are unique across targets, so the first match is the failing step.
        prop_assert_eq!(report.exit_code, code);
        prop_assert_eq!(driver.runner().recorded().len(), fail_index + 1);
        prop_assert_eq!(report.failed_step().map(|s| s.label.clone()), Some(label));
    }
}
