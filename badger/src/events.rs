// SPDX-License-Identifier: GPL-3.0-or-later

//! The input model of the analysis: process executions captured by an
//! external interception layer and persisted as a JSON array of events.
//!
//! This module only reads event files, it never produces them. The capture
//! mechanism itself (preload library, wrapper executables) is a separate
//! program.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Execution is a representation of a process execution.
///
/// It does not contain information about the outcome of the execution,
/// like the exit code or the duration. It only contains what is necessary
/// to reproduce the execution. The `arguments` vector holds the arguments
/// the program received after its own name; the reconstructed compilation
/// database entry puts the executable back in front.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Execution {
    pub executable: PathBuf,
    pub arguments: Vec<String>,
    pub working_dir: PathBuf,
    #[serde(default)]
    pub environment: HashMap<String, String>,
}

impl Execution {
    /// Convenience constructor used heavily by tests.
    pub fn from_strings(
        executable: &str,
        arguments: Vec<&str>,
        working_dir: &str,
        environment: HashMap<&str, &str>,
    ) -> Self {
        Self {
            executable: PathBuf::from(executable),
            arguments: arguments.iter().map(|s| s.to_string()).collect(),
            working_dir: PathBuf::from(working_dir),
            environment: environment
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Execution path={}, args=[{}]",
            self.executable.display(),
            self.arguments.join(",")
        )
    }
}

/// One captured life cycle event of a process.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Event {
    pub pid: u32,
    pub execution: Execution,
}

/// Reads a full event file (a JSON array of events).
pub fn read(reader: impl io::Read) -> Result<Vec<Event>, EventFileError> {
    let events = serde_json::from_reader(reader)?;
    Ok(events)
}

#[derive(Error, Debug)]
pub enum EventFileError {
    #[error("Failed to read the event file: {0}")]
    Syntax(#[from] serde_json::Error),
}
