// SPDX-License-Identifier: GPL-3.0-or-later

//! The argument scan shared by every tool family.
//!
//! Tokens are resolved against the family's flag table in original order.
//! Unknown `-`-prefixed tokens are kept verbatim, non-flag tokens are
//! checked against the family's source suffix set; anything else is an
//! opaque positional argument (object file, library) that stays in the
//! replayed argument list but yields no entry.

use super::flags::{FlagCategory, FlagsByName, Lookup};
use super::{EntryKind, Recognition, RecognitionError, SemanticEntry};
use crate::environment;
use crate::events::Execution;
use std::path::{Path, PathBuf};

/// Parses one execution against a family table and classifies it.
///
/// `is_source` is the family's source suffix test. `read_include_env`
/// appends the GCC include path environment expansion to the replayed
/// arguments (GCC-shaped families only).
pub(super) fn recognize_with_table(
    execution: &Execution,
    table: &FlagsByName,
    is_source: fn(&str) -> bool,
    read_include_env: bool,
) -> Recognition {
    let program = execution.executable.to_string_lossy().to_string();

    let mut arguments = vec![program.clone()];
    let mut sources: Vec<String> = Vec::new();
    let mut output: Option<String> = None;
    let mut query = false;
    let mut preprocess_only = false;
    let mut compile_only = false;
    // kept until the query decision, which beats every other argument
    let mut deferred: Option<RecognitionError> = None;

    let args = &execution.arguments;
    let mut index = 0;
    while index < args.len() {
        let token = &args[index];

        // response files are flag-shaped for the table as well
        if !token.starts_with('-') && !token.starts_with('@') {
            if is_source(token) {
                sources.push(token.clone());
            }
            arguments.push(token.clone());
            index += 1;
            continue;
        }

        let next = args.get(index + 1).map(String::as_str);
        match table.lookup(token, next) {
            Lookup::Hit(found) => {
                if found.category != FlagCategory::Ignored {
                    arguments.push(token.clone());
                    if found.consumed_next {
                        if let Some(value) = &found.value {
                            arguments.push(value.clone());
                        }
                    }
                }
                match found.category {
                    FlagCategory::Query => query = true,
                    FlagCategory::PreprocessorOnly => preprocess_only = true,
                    FlagCategory::CompileOnly => compile_only = true,
                    FlagCategory::Output => output = found.value.clone(),
                    FlagCategory::Input => {
                        if let Some(value) = &found.value {
                            sources.push(value.clone());
                        }
                    }
                    _ => {}
                }
                index += if found.consumed_next { 2 } else { 1 };
            }
            Lookup::MissingValue(flag) => {
                if deferred.is_none() {
                    deferred = Some(RecognitionError::MissingFlagValue {
                        program: program.clone(),
                        flag: flag.to_string(),
                        arguments: args.clone(),
                    });
                }
                arguments.push(token.clone());
                index += 1;
            }
            Lookup::Miss => {
                // unknown flag, retained verbatim for faithful replay
                arguments.push(token.clone());
                index += 1;
            }
        }
    }

    if query {
        return Recognition::QueryOnly;
    }
    if let Some(error) = deferred {
        return Recognition::Error(error);
    }
    if sources.is_empty() {
        if compile_only {
            return Recognition::Error(RecognitionError::NoSourceFile {
                program,
                arguments: args.clone(),
            });
        }
        // pure link or positional-only invocation, nothing to record
        return Recognition::NotApplicable;
    }

    if read_include_env {
        arguments.extend(environment::include_paths(&execution.environment));
    }

    let kind = if preprocess_only && !compile_only {
        EntryKind::Preprocess
    } else {
        EntryKind::Compile
    };
    // an explicit output only applies when it is unambiguous
    let explicit_output = if sources.len() == 1 {
        output.map(PathBuf::from)
    } else {
        None
    };

    let entries = sources
        .iter()
        .map(|source| SemanticEntry {
            kind,
            directory: execution.working_dir.clone(),
            file: absolute(&execution.working_dir, source),
            output: explicit_output.clone(),
            arguments: arguments.clone(),
        })
        .collect();
    Recognition::Recognized(entries)
}

fn absolute(directory: &Path, source: &str) -> PathBuf {
    let path = PathBuf::from(source);
    if path.is_absolute() {
        path
    } else {
        directory.join(path)
    }
}
