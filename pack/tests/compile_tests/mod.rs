#![cfg(not(miri))]
#![cfg(feature = "slow-tests")]

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use pack_testhelpers::test;

/// A program that must be rejected by the compiler.
struct CompilationTest {
    /// Contents of the scratch crate's `main.rs`
    source: &'static str,
    /// Fragments that must all appear in the compiler's output
    expected_errors: &'static [&'static str],
    name: &'static str,
}

fn strip_ansi_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1B' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

fn hash_source(name: &str, source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    source.hash(&mut hasher);
    hasher.finish()
}

fn run_compilation_test(test: &CompilationTest) {
    tracing::info!(name = test.name, "running compilation test");

    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let project_dir = temp_dir.path();
    let pack_path = Path::new(env!("CARGO_MANIFEST_DIR"));

    fs::create_dir(project_dir.join("src")).expect("Failed to create src directory");

    let cargo_toml = format!(
        r#"
[package]
name = "pack-compile-test"
version = "0.1.0"
edition = "2024"

[dependencies]
pack = {{ path = {:?} }}
    "#,
        pack_path.display()
    );
    fs::write(project_dir.join("Cargo.toml"), cargo_toml).expect("Failed to write Cargo.toml");
    fs::write(project_dir.join("src").join("main.rs"), test.source)
        .expect("Failed to write main.rs");

    // One target directory per fixture, so reruns only rebuild the fixture
    let target_dir = std::env::temp_dir()
        .join("pack_compile_tests")
        .join(format!("target_{}", hash_source(test.name, test.source)));
    tracing::debug!(project = %project_dir.display(), target = %target_dir.display());

    let output = std::process::Command::new("cargo")
        .current_dir(project_dir)
        .args(["build", "--color=never"])
        .env("CARGO_TARGET_DIR", &target_dir)
        .output()
        .expect("Failed to execute cargo build");

    let stderr = strip_ansi_escapes(&String::from_utf8_lossy(&output.stderr));

    assert!(
        !output.status.success(),
        "'{}' compiled successfully but should have failed",
        test.name
    );

    let missing: Vec<&str> = test
        .expected_errors
        .iter()
        .copied()
        .filter(|expected| !stderr.contains(expected))
        .collect();
    assert!(
        missing.is_empty(),
        "'{}' did not report {:?}\n\ncompiler output:\n{}",
        test.name,
        missing,
        stderr
    );
}

#[test]
fn too_few_arguments() {
    run_compilation_test(&CompilationTest {
        name: "arity",
        source: include_str!("fixtures/arity.rs"),
        expected_errors: &["arity mismatch"],
    });
}

#[test]
fn argument_of_another_type() {
    run_compilation_test(&CompilationTest {
        name: "payload",
        source: include_str!("fixtures/payload.rs"),
        expected_errors: &["payload mismatch"],
    });
}

#[test]
fn pack_argument_of_another_type() {
    run_compilation_test(&CompilationTest {
        name: "payload_in_pack",
        source: include_str!("fixtures/payload_in_pack.rs"),
        expected_errors: &["payload mismatch", "u16"],
    });
}

#[test]
fn constant_of_another_value() {
    run_compilation_test(&CompilationTest {
        name: "constant_value",
        source: include_str!("fixtures/constant_value.rs"),
        expected_errors: &["payload mismatch: constant values differ"],
    });
}

#[test]
fn key_shared_by_two_slots() {
    run_compilation_test(&CompilationTest {
        name: "key_ambiguity",
        source: include_str!("fixtures/key_ambiguity.rs"),
        expected_errors: &["type annotations needed"],
    });
}

#[test]
fn position_past_the_end() {
    run_compilation_test(&CompilationTest {
        name: "index_out_of_range",
        source: include_str!("fixtures/index_out_of_range.rs"),
        expected_errors: &["no slot answers to"],
    });
}

#[test]
fn groups_of_different_kinds() {
    run_compilation_test(&CompilationTest {
        name: "deduction",
        source: include_str!("fixtures/deduction.rs"),
        expected_errors: &["deduction failure"],
    });
}

#[test]
fn template_not_declared_by_the_pack() {
    run_compilation_test(&CompilationTest {
        name: "unrelated_template",
        source: include_str!("fixtures/unrelated_template.rs"),
        expected_errors: &["Strip<u8, 4>", "GridTemplate"],
    });
}

#[test]
fn borrow_outlived_by_the_pack() {
    run_compilation_test(&CompilationTest {
        name: "borrowed_outlives",
        source: include_str!("fixtures/borrowed_outlives.rs"),
        expected_errors: &["`x` does not live long enough"],
    });
}
