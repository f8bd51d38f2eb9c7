//! End-to-end checks of the generated fixture text.

use insta::assert_snapshot;
use reflexgen::config::{GeneratorConfig, StorageScope};
use reflexgen::corpus::Corpus;
use reflexgen::fixture::MemberKind;

#[test]
fn three_member_corpus_snapshot() {
    let out = reflexgen::generate(3).unwrap();
    assert_snapshot!("three_member_corpus", out);
}

#[test]
fn three_member_corpus_shape() {
    let corpus = Corpus::assemble(3);
    assert_eq!(corpus.len(), 2);

    let one = &corpus.aggregates[0];
    assert_eq!(one.member_count(), 1);
    assert_eq!(one.members[0].kind, MemberKind::SharedAlias);
    assert_eq!(one.members[0].initial_value(), 1);

    let two = &corpus.aggregates[1];
    assert_eq!(two.member_count(), 2);
    assert_eq!(two.members[0].kind, MemberKind::SharedAlias);
    assert_eq!(two.members[0].initial_value(), 1);
    assert_eq!(two.members[1].kind, MemberKind::OwnedValue);
    assert_eq!(two.members[1].initial_value(), 2);

    let out = reflexgen::generate(3).unwrap();
    assert!(out.contains("testing::Types<test_aggregate_1, test_aggregate_2>;"));
}

#[test]
fn default_corpus_covers_thirty_nine_fixtures() {
    let out = reflexgen::generate_with_config(&GeneratorConfig::default()).unwrap();
    assert_eq!(out.matches("\nstruct test_aggregate_").count(), 39);
    assert!(out.contains("struct test_aggregate_39\n"));
    assert!(!out.contains("test_aggregate_40"));
    assert!(out.contains("\tstatic constexpr std::size_t member_count = 39;\n"));
}

#[test]
fn member_count_matches_member_lines() {
    let out = reflexgen::generate(12).unwrap();
    for block in out.split("\nstruct ").skip(1) {
        let name = block.lines().next().unwrap();
        let size: usize = name.trim_start_matches("test_aggregate_").parse().unwrap();
        assert!(block.contains(&format!("member_count = {size};")), "{name}");
        let members = block
            .lines()
            .filter(|l| l.starts_with("\tint ") || l.starts_with("\tint& "))
            .count();
        assert_eq!(members, size, "{name}");
        assert_eq!(block.matches("if constexpr").count(), size, "{name}");
    }
}

#[test]
fn type_list_is_ascending_and_comma_separated() {
    let out = reflexgen::generate(6).unwrap();
    let last = out.lines().last().unwrap();
    assert_eq!(
        last,
        "using types = testing::Types<test_aggregate_1, test_aggregate_2, test_aggregate_3, test_aggregate_4, test_aggregate_5>;"
    );
}

#[test]
fn single_bound_yields_empty_type_list() {
    let out = reflexgen::generate(1).unwrap();
    assert!(!out.contains("struct "));
    assert!(out.ends_with("using types = testing::Types<>;\n"));
}

#[test]
fn zero_bound_is_a_config_error() {
    let err = reflexgen::generate(0).unwrap_err();
    assert!(err.to_string().starts_with("Config error"), "got: {err}");
}

#[test]
fn generation_is_deterministic() {
    let a = reflexgen::generate(40).unwrap();
    let b = reflexgen::generate(40).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shared_cells_declared_once_per_odd_position() {
    let out = reflexgen::generate(10).unwrap();
    for p in (1..10).step_by(2) {
        assert_eq!(out.matches(&format!("inline int s_v{p} = {p};")).count(), 1, "s_v{p}");
    }
    for p in (2..10).step_by(2) {
        assert!(!out.contains(&format!("s_v{p}")), "even position {p} must not be shared");
    }
}

#[test]
fn per_aggregate_scope_declares_cells_inside_each_struct() {
    let config = GeneratorConfig {
        num_supported_members: 4,
        storage_scope: StorageScope::PerAggregate,
        ..GeneratorConfig::default()
    };
    let out = reflexgen::generate_with_config(&config).unwrap();
    assert_eq!(out.matches("\tstatic inline int s_v1 = 1;").count(), 3);
    assert_eq!(out.matches("\tstatic inline int s_v3 = 3;").count(), 1);
    assert!(!out.contains("\ninline int"));
}

#[test]
fn toml_config_drives_generation() {
    let config = GeneratorConfig::from_toml_str(
        "num_supported_members = 3\ntype_list_alias = \"subjects\"\n",
    )
    .unwrap();
    let out = reflexgen::generate_with_config(&config).unwrap();
    assert!(out.ends_with("using subjects = testing::Types<test_aggregate_1, test_aggregate_2>;\n"));
}
