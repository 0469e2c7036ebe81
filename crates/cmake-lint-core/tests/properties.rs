//! Property-based tests for cmake-lint-core
//!
//! These tests cover the structural guarantees of the engine: logical lines
//! partition the file, tokenizing is order-preserving, and filter
//! resolution follows the last matching rule.

use proptest::prelude::*;

use cmake_lint_core::filter::{path_matches, FilterRule, FilterSet, Layer, CATEGORIES};
use cmake_lint_core::lines::classify;
use cmake_lint_core::tokenizer::tokenize;

// ============================================================================
// Strategies
// ============================================================================

/// Lines drawn from an alphabet rich in structural characters.
fn line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_() \"#\\\\\t]{0,24}").expect("valid regex")
}

fn unquoted_arg_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_.${}/-]{1,10}").expect("valid regex")
}

fn quoted_arg_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z #()]{0,8}")
        .expect("valid regex")
        .prop_map(|s| format!("\"{s}\""))
}

fn arg_strategy() -> impl Strategy<Value = String> {
    prop_oneof![unquoted_arg_strategy(), quoted_arg_strategy()]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,12}").expect("valid regex")
}

fn filter_rule_strategy() -> impl Strategy<Value = FilterRule> {
    let paths = vec![
        "",
        "whitespace",
        "whitespace/tabs",
        "whitespace/eol",
        "readability",
        "readability/logic",
        "linelength",
        "syntax",
        "package",
        "nonexistent",
    ];
    (prop::sample::select(paths), any::<bool>())
        .prop_map(|(path, enable)| FilterRule::new(path, enable, Layer::CommandLine))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn logical_lines_partition_the_file(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let spans = classify(&lines);
        let mut expected_start = 1;
        for span in &spans {
            prop_assert_eq!(span.start, expected_start);
            prop_assert!(span.end >= span.start);
            expected_start = span.end + 1;
        }
        prop_assert_eq!(expected_start, lines.len() + 1);
    }

    #[test]
    fn tokenizing_preserves_argument_order(
        name in name_strategy(),
        args in prop::collection::vec(arg_strategy(), 0..8),
    ) {
        let line = format!("{name}({})", args.join(" "));
        let command = tokenize(&[line.as_str()], 1).expect("well-formed command");
        let raws: Vec<String> = command.args.iter().map(|a| a.raw.clone()).collect();
        prop_assert_eq!(&raws, &args);
        prop_assert!(command.close_padding.is_some());

        let rejoined = format!("{}({})", command.name, raws.join(" "));
        let again = tokenize(&[rejoined.as_str()], 1).expect("well-formed command");
        let raws_again: Vec<String> = again.args.iter().map(|a| a.raw.clone()).collect();
        prop_assert_eq!(raws_again, raws);
    }

    #[test]
    fn last_matching_rule_wins(
        rules in prop::collection::vec(filter_rule_strategy(), 0..12),
        last in filter_rule_strategy(),
    ) {
        let before = FilterSet::from_rules(rules.clone());
        let mut all = rules;
        all.push(last.clone());
        let after = FilterSet::from_rules(all);

        for category in CATEGORIES {
            if path_matches(&last.path, category.name) {
                prop_assert_eq!(after.is_enabled(category.name), last.enable);
            } else {
                prop_assert_eq!(after.is_enabled(category.name), before.is_enabled(category.name));
            }
        }
    }

    #[test]
    fn extending_never_changes_the_base(
        base in prop::collection::vec(filter_rule_strategy(), 0..8),
        extra in prop::collection::vec(filter_rule_strategy(), 0..8),
    ) {
        let base = FilterSet::from_rules(base);
        let snapshot = base.clone();
        let _file_scoped = base.extended(&extra);
        prop_assert_eq!(base, snapshot);
    }
}
