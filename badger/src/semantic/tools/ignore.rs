// SPDX-License-Identifier: GPL-3.0-or-later

//! Programs that never produce compilation database entries: coreutils
//! and build orchestration tools seen constantly during intercepted
//! builds, and compilers the configuration excludes.

use super::super::{Recognition, Tool};
use crate::events::Execution;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub(super) struct IgnoredPrograms {
    executables: HashSet<PathBuf>,
}

impl IgnoredPrograms {
    /// Ignore list from the configuration file.
    pub(super) fn from_paths(paths: &[PathBuf]) -> Self {
        Self {
            executables: paths.iter().cloned().collect(),
        }
    }
}

impl Default for IgnoredPrograms {
    fn default() -> Self {
        Self {
            executables: KNOWN_NON_COMPILERS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Tool for IgnoredPrograms {
    fn matches(&self, program: &Path) -> bool {
        self.executables.contains(program)
    }

    fn recognize(&self, _: &Execution) -> Recognition {
        Recognition::NotApplicable
    }
}

const KNOWN_NON_COMPILERS: [&str; 42] = [
    "/usr/bin/basename",
    "/usr/bin/cat",
    "/usr/bin/chmod",
    "/usr/bin/chown",
    "/usr/bin/cp",
    "/usr/bin/cut",
    "/usr/bin/date",
    "/usr/bin/dirname",
    "/usr/bin/echo",
    "/usr/bin/env",
    "/usr/bin/expr",
    "/usr/bin/false",
    "/usr/bin/grep",
    "/usr/bin/head",
    "/usr/bin/install",
    "/usr/bin/ln",
    "/usr/bin/ls",
    "/usr/bin/mkdir",
    "/usr/bin/mktemp",
    "/usr/bin/mv",
    "/usr/bin/printf",
    "/usr/bin/pwd",
    "/usr/bin/readlink",
    "/usr/bin/realpath",
    "/usr/bin/rm",
    "/usr/bin/rmdir",
    "/usr/bin/sed",
    "/usr/bin/sleep",
    "/usr/bin/sort",
    "/usr/bin/tail",
    "/usr/bin/tee",
    "/usr/bin/test",
    "/usr/bin/touch",
    "/usr/bin/tr",
    "/usr/bin/true",
    "/usr/bin/uname",
    "/usr/bin/wc",
    "/usr/bin/which",
    "/usr/bin/make",
    "/usr/bin/gmake",
    "/usr/bin/cmake",
    "/usr/bin/ninja",
];
