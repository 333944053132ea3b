// SPDX-License-Identifier: GPL-3.0-or-later

//! End to end checks over the public API: event file in, recognized
//! entries out, database written and read back.

use badger::semantic::{tools, EntryKind, Recognition};
use badger::{config, events, output};
use std::collections::HashMap;
use std::path::PathBuf;

fn execution(program: &str, arguments: Vec<&str>, working_dir: &str) -> events::Execution {
    events::Execution::from_strings(program, arguments, working_dir, HashMap::new())
}

#[test]
fn unclaimed_programs_stay_out_independent_of_arguments() {
    let registry = tools::create(&config::Main::default());

    for arguments in [vec![], vec!["-c", "main.c"], vec!["a.o", "-o", "a.out"]] {
        let result = registry.recognize(&execution("ld", arguments, "/build"));
        assert_eq!(result, Recognition::NotApplicable);
    }
}

#[test]
fn single_source_compile_produces_one_entry() {
    let registry = tools::create(&config::Main::default());

    let result = registry.recognize(&execution("ftn", vec!["-c", "-O2", "foo.f90"], "/build"));

    let Recognition::Recognized(entries) = result else {
        panic!("expected entries, got {result:?}")
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].directory, PathBuf::from("/build"));
    assert_eq!(entries[0].file, PathBuf::from("/build/foo.f90"));
    assert_eq!(entries[0].arguments, vec!["ftn", "-c", "-O2", "foo.f90"]);
}

#[test]
fn version_queries_produce_no_entry() {
    let registry = tools::create(&config::Main::default());

    assert_eq!(
        registry.recognize(&execution("ftn", vec!["--version"], "/build")),
        Recognition::QueryOnly
    );
    assert_eq!(
        registry.recognize(&execution("gcc", vec!["--version"], "/build")),
        Recognition::QueryOnly
    );
}

#[test]
fn preprocess_invocations_are_marked_for_exclusion() {
    let registry = tools::create(&config::Main::default());

    let result = registry.recognize(&execution("cc", vec!["-E", "foo.c"], "/build"));

    let Recognition::Recognized(entries) = result else {
        panic!("expected entries, got {result:?}")
    };
    assert_eq!(entries[0].kind, EntryKind::Preprocess);
}

#[test]
fn multi_source_invocations_fan_out() {
    let registry = tools::create(&config::Main::default());

    let result = registry.recognize(&execution(
        "gcc",
        vec!["-c", "-DX=1", "a.c", "b.c", "c.c"],
        "/build",
    ));

    let Recognition::Recognized(entries) = result else {
        panic!("expected entries, got {result:?}")
    };
    assert_eq!(entries.len(), 3);
    let files: Vec<_> = entries.iter().map(|e| e.file.clone()).collect();
    assert_eq!(
        files,
        vec![
            PathBuf::from("/build/a.c"),
            PathBuf::from("/build/b.c"),
            PathBuf::from("/build/c.c"),
        ]
    );
    // the flag lists are identical across the fan out
    for entry in &entries {
        assert_eq!(
            entry.arguments,
            vec!["gcc", "-c", "-DX=1", "a.c", "b.c", "c.c"]
        );
    }
}

#[test]
fn unknown_flags_survive_verbatim() {
    let registry = tools::create(&config::Main::default());

    let result = registry.recognize(&execution(
        "gcc",
        vec!["-c", "--totally-unknown=yes", "main.c"],
        "/build",
    ));

    let Recognition::Recognized(entries) = result else {
        panic!("expected entries, got {result:?}")
    };
    assert!(entries[0]
        .arguments
        .contains(&"--totally-unknown=yes".to_string()));
}

#[test]
fn recognition_is_repeatable() {
    let registry = tools::create(&config::Main::default());
    let input = execution("clang", vec!["-c", "-O2", "main.c", "util.c"], "/build");

    let first = registry.recognize(&input);
    let second = registry.recognize(&input);

    assert_eq!(first, second);
}

#[test]
fn event_file_to_database_pipeline() {
    let content = r#"[
        {
            "pid": 10,
            "execution": {
                "executable": "/usr/bin/gcc",
                "arguments": ["-c", "main.c", "-o", "main.o"],
                "working_dir": "/project"
            }
        },
        {
            "pid": 11,
            "execution": {
                "executable": "/usr/bin/ld",
                "arguments": ["main.o", "-o", "main"],
                "working_dir": "/project"
            }
        },
        {
            "pid": 12,
            "execution": {
                "executable": "/usr/bin/gcc",
                "arguments": ["--version"],
                "working_dir": "/project"
            }
        }
    ]"#;
    let configuration = config::Main::default();
    let registry = tools::create(&configuration);

    let mut entries = Vec::new();
    for event in events::read(content.as_bytes()).unwrap() {
        if let Recognition::Recognized(semantics) = registry.recognize(&event.execution) {
            for semantic in semantics {
                entries.push(output::from_semantic(&semantic, &configuration.output.format));
            }
        }
    }

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file, PathBuf::from("/project/main.c"));
    assert_eq!(entries[0].directory, PathBuf::from("/project"));
    assert_eq!(
        entries[0].arguments,
        vec!["/usr/bin/gcc", "-c", "main.c", "-o", "main.o"]
    );
    assert_eq!(entries[0].output, Some(PathBuf::from("main.o")));

    // write it out and read it back
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("compile_commands.json");
    let written = output::DatabaseWriter::new(path.clone(), false)
        .write(entries.clone())
        .unwrap();
    assert_eq!(written, 1);
    assert_eq!(output::read(&path).unwrap(), entries);
}

#[test]
fn wrapped_compilers_are_unwrapped() {
    let registry = tools::create(&config::Main::default());

    let result = registry.recognize(&execution(
        "ccache",
        vec!["gcc", "-c", "cached.c"],
        "/build",
    ));

    let Recognition::Recognized(entries) = result else {
        panic!("expected entries, got {result:?}")
    };
    assert_eq!(entries[0].arguments, vec!["gcc", "-c", "cached.c"]);
}

#[test]
fn parse_errors_are_contained_per_execution() {
    let registry = tools::create(&config::Main::default());

    // a broken execution...
    let broken = registry.recognize(&execution("gcc", vec!["-c"], "/build"));
    assert!(matches!(broken, Recognition::Error(_)));

    // ...does not disturb the next one
    let fine = registry.recognize(&execution("gcc", vec!["-c", "ok.c"], "/build"));
    assert!(matches!(fine, Recognition::Recognized(_)));
}
