// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading and writing JSON compilation database files.
//!
//! A compilation database is a JSON array of records, one per compiled
//! source file, as defined by the LLVM project
//! [documentation](https://clang.llvm.org/docs/JSONCompilationDatabase.html).
//! This module owns the entry type, its validation, the conversion from
//! recognized semantics, and the file writer.

use crate::config;
use crate::semantic::SemanticEntry;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{self, Path, PathBuf};
use thiserror::Error;

/// Represents an entry of the compilation database.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The main translation unit source processed by this compilation step.
    pub file: path::PathBuf,
    /// The compile command argv as list of strings. `arguments[0]` is the
    /// executable, the rest is ready to pass to `execvp()`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub arguments: Vec<String>,
    /// The compile command as a single shell-escaped string. Either
    /// `arguments` or `command` is required; `arguments` is preferred.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub command: String,
    /// The working directory of the compilation. Relative paths in the
    /// other fields are resolved against this directory.
    pub directory: path::PathBuf,
    /// The name of the output created by this compilation step. Optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub output: Option<path::PathBuf>,
}

impl Entry {
    /// Create an entry with the arguments field populated.
    pub fn with_arguments(
        file: impl Into<path::PathBuf>,
        arguments: Vec<String>,
        directory: impl Into<path::PathBuf>,
        output: Option<impl Into<path::PathBuf>>,
    ) -> Self {
        Entry {
            file: file.into(),
            arguments,
            command: String::default(),
            directory: directory.into(),
            output: output.map(|o| o.into()),
        }
    }

    /// Create an entry with the command field populated.
    pub fn with_command(
        file: impl Into<path::PathBuf>,
        arguments: Vec<String>,
        directory: impl Into<path::PathBuf>,
        output: Option<impl Into<path::PathBuf>>,
    ) -> Self {
        Entry {
            file: file.into(),
            arguments: Vec::default(),
            command: shell_words::join(&arguments),
            directory: directory.into(),
            output: output.map(|o| o.into()),
        }
    }

    /// Semantic validation of the entry fields.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.file.to_string_lossy().is_empty() {
            return Err(EntryError::EmptyFileName);
        }
        if self.directory.to_string_lossy().is_empty() {
            return Err(EntryError::EmptyDirectory);
        }
        if self.command.is_empty() && self.arguments.is_empty() {
            return Err(EntryError::CommandOrArgumentsAreMissing);
        }
        if !self.command.is_empty() && !self.arguments.is_empty() {
            return Err(EntryError::CommandOrArgumentsArePresent);
        }
        if !self.command.is_empty() {
            shell_words::split(&self.command)?;
        }
        Ok(())
    }
}

/// Converts one recognized semantic entry into a database entry,
/// honoring the configured format.
pub fn from_semantic(semantic: &SemanticEntry, format: &config::Format) -> Entry {
    let output = if format.drop_output_field {
        None
    } else {
        semantic.output.clone()
    };
    if format.command_as_array {
        Entry::with_arguments(
            semantic.file.clone(),
            semantic.arguments.clone(),
            semantic.directory.clone(),
            output,
        )
    } else {
        Entry::with_command(
            semantic.file.clone(),
            semantic.arguments.clone(),
            semantic.directory.clone(),
            output,
        )
    }
}

/// Represents the possible errors of an invalid entry.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum EntryError {
    #[error("Entry has an empty file field")]
    EmptyFileName,
    #[error("Entry has an empty directory field")]
    EmptyDirectory,
    #[error("Both command and arguments fields are empty")]
    CommandOrArgumentsAreMissing,
    #[error("Both command and arguments fields are present")]
    CommandOrArgumentsArePresent,
    #[error("Entry has an invalid command field: {0}")]
    InvalidCommand(#[from] shell_words::ParseError),
}

/// Writes a compilation database file.
///
/// The entries are serialized into a temporary file which is renamed
/// over the final name, so readers never observe a half-written
/// database. Append mode merges the entries of an existing file first.
pub struct DatabaseWriter {
    path: PathBuf,
    append: bool,
}

impl DatabaseWriter {
    pub fn new(path: PathBuf, append: bool) -> Self {
        Self { path, append }
    }

    /// Writes the entries, returns how many the file ends up with.
    pub fn write(&self, entries: Vec<Entry>) -> Result<usize, OutputError> {
        let mut all = Vec::new();
        if self.append && self.path.is_file() {
            all.extend(self.read_existing()?);
        }
        all.extend(entries);

        let temp = self.path.with_extension("tmp");
        let file =
            File::create(&temp).map_err(|error| OutputError::Io(temp.clone(), error))?;
        let mut writer = BufWriter::new(file);
        serialize_entries(&mut writer, &all)
            .map_err(|error| OutputError::Serialization(temp.clone(), error))?;
        writer
            .flush()
            .map_err(|error| OutputError::Io(temp.clone(), error))?;
        std::fs::rename(&temp, &self.path)
            .map_err(|error| OutputError::Io(self.path.clone(), error))?;

        Ok(all.len())
    }

    fn read_existing(&self) -> Result<Vec<Entry>, OutputError> {
        let file =
            File::open(&self.path).map_err(|error| OutputError::Io(self.path.clone(), error))?;
        let entries = serde_json::from_reader(BufReader::new(file))
            .map_err(|error| OutputError::Serialization(self.path.clone(), error))?;
        Ok(entries)
    }
}

/// Serializes the entries as a pretty printed JSON array, streaming one
/// element at a time.
fn serialize_entries<W: Write>(writer: W, entries: &[Entry]) -> Result<(), serde_json::Error> {
    let mut serializer = serde_json::Serializer::pretty(writer);
    let mut sequence = serializer.serialize_seq(Some(entries.len()))?;
    for entry in entries {
        sequence.serialize_element(entry)?;
    }
    sequence.end()
}

/// Reads a compilation database file.
pub fn read(path: &Path) -> Result<Vec<Entry>, OutputError> {
    let file = File::open(path).map_err(|error| OutputError::Io(path.to_path_buf(), error))?;
    let entries = serde_json::from_reader(BufReader::new(file))
        .map_err(|error| OutputError::Serialization(path.to_path_buf(), error))?;
    Ok(entries)
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to access the output file {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Failed to serialize the output file {0}: {1}")]
    Serialization(PathBuf, serde_json::Error),
}
