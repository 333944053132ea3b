// SPDX-License-Identifier: GPL-3.0-or-later

//! Semantic recognition of captured build commands.
//!
//! The module classifies one [`Execution`](crate::events::Execution) at a
//! time: is it a compiler call, which compiler family's flag syntax does it
//! use, and which source files does it compile. The main abstractions are:
//!
//! - [`Tool`]: one compiler family; pairs a pure program-name matcher with
//!   an argument parser over the family's flag classification table.
//! - [`registry::ToolRegistry`]: the ordered collection of tools; the first
//!   tool whose name matcher accepts an execution owns it exclusively.
//! - [`Recognition`]: the exhaustive outcome of recognizing one execution.
//!
//! Recognition is pure and synchronous. The flag tables are built once and
//! shared by reference, tools hold no mutable state, so any number of
//! executions can be recognized concurrently without locking.

pub mod flags;
mod parser;
pub mod registry;
mod source;
pub mod tools;

use crate::events::Execution;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What a recognized invocation does with its source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Translates sources into object code; wanted in the database.
    Compile,
    /// Stops after preprocessing; excluded from the database by policy.
    Preprocess,
}

/// The normalized record of one compiled source file.
///
/// A multi-source invocation fans out into one entry per source; the
/// entries share the reconstructed argument list and differ in `file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticEntry {
    pub kind: EntryKind,
    /// Working directory of the execution, verbatim.
    pub directory: PathBuf,
    /// The one source file this entry covers, absolute.
    pub file: PathBuf,
    /// Value of the explicit output flag, when it applies unambiguously.
    pub output: Option<PathBuf>,
    /// Order-preserving reconstruction of the invocation, program first.
    /// Unrecognized flags are kept verbatim so the list stays replayable.
    pub arguments: Vec<String>,
}

/// The outcome of recognizing a single execution.
///
/// Exactly one variant results from each execution; callers are required
/// to handle all of them. An error here never affects the recognition of
/// any other execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// A compiler call with its per-source entries.
    Recognized(Vec<SemanticEntry>),
    /// A version or help query; the tool did no work.
    QueryOnly,
    /// Not claimed by any tool, or claimed but nothing was compiled
    /// (pure link, positional-only invocation).
    NotApplicable,
    /// A tool claimed the execution but could not classify the arguments.
    Error(RecognitionError),
}

/// Argument combinations the parser cannot classify.
///
/// The variants carry the program and the full argument list, so the
/// caller can log a useful diagnostic without re-parsing anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("{program}: compilation requested, but no source file found in {arguments:?}")]
    NoSourceFile {
        program: String,
        arguments: Vec<String>,
    },
    #[error("{program}: flag {flag:?} expects a value, none given in {arguments:?}")]
    MissingFlagValue {
        program: String,
        flag: String,
        arguments: Vec<String>,
    },
}

/// One compiler family.
///
/// Implementations are stateless beyond their flag table and are reused
/// across arbitrarily many executions.
pub trait Tool: Send + Sync {
    /// Pure comparison of the invoked program's name against the family's
    /// alias set. Must not inspect the arguments.
    fn matches(&self, program: &Path) -> bool;

    /// Full argument parse. Only called after `matches` accepted the
    /// program; the execution belongs to this tool at that point, parse
    /// failures are reported, never retried elsewhere.
    fn recognize(&self, execution: &Execution) -> Recognition;
}

/// The program name used for matching: base name with a platform
/// executable suffix stripped.
pub(crate) fn program_name(program: &Path) -> Option<String> {
    let name = program.file_name()?.to_str()?;
    let name = name
        .strip_suffix(".exe")
        .or_else(|| name.strip_suffix(".EXE"))
        .unwrap_or(name);
    Some(name.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_program_name_takes_the_basename() {
        assert_eq!(program_name(Path::new("/usr/bin/gcc")), Some("gcc".into()));
        assert_eq!(program_name(Path::new("gcc")), Some("gcc".into()));
        assert_eq!(program_name(Path::new("./tools/cc")), Some("cc".into()));
    }

    #[test]
    fn test_program_name_strips_windows_suffix() {
        assert_eq!(program_name(Path::new("gcc.exe")), Some("gcc".into()));
        assert_eq!(program_name(Path::new("CLANG.EXE")), Some("CLANG".into()));
    }
}
