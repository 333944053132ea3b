// SPDX-License-Identifier: GPL-3.0-or-later

//! Compiler cache and distribution wrappers: `ccache`, `sccache`,
//! `distcc`, `icecc`.
//!
//! A wrapper invocation carries a complete compiler command after the
//! wrapper's own options. The tool skips those options, answers the
//! wrapper's maintenance queries, and hands the embedded command to the
//! compiler families. The resulting entries replay the real compiler,
//! not the wrapper.

use super::super::flags::{FlagCategory, FlagDef, FlagsByName, Lookup};
use super::super::{program_name, Recognition, Tool};
use crate::events::Execution;
use regex_lite::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static WRAPPER_NAMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(ccache|sccache|distcc|icecc)$").unwrap());

/// The wrappers' own options. Maintenance commands count as queries,
/// scheduling options are consumed and dropped from the replay.
static WRAPPER_FLAGS: LazyLock<FlagsByName> = LazyLock::new(|| {
    use crate::semantic::flags::Spelling::{Exact, Prefix};
    use crate::semantic::flags::{Attachment as A, FlagCategory as C};

    FlagsByName::new(&[
        (Exact("--version"), FlagDef::plain(C::Query)),
        (Exact("-V"), FlagDef::plain(C::Query)),
        (Prefix("--help"), FlagDef::plain(C::Query)),
        (Exact("-h"), FlagDef::plain(C::Query)),
        (Exact("-s"), FlagDef::plain(C::Query)),
        (Exact("--show-stats"), FlagDef::plain(C::Query)),
        (Exact("--show-config"), FlagDef::plain(C::Query)),
        (Exact("-C"), FlagDef::plain(C::Query)),
        (Exact("--clear"), FlagDef::plain(C::Query)),
        (Exact("-z"), FlagDef::plain(C::Query)),
        (Exact("--zero-stats"), FlagDef::plain(C::Query)),
        (Exact("-j"), FlagDef::with_value(C::Ignored, A::Separate)),
        (Exact("--jobs"), FlagDef::with_value(C::Ignored, A::EqOrSeparate)),
        (Exact("-v"), FlagDef::plain(C::Ignored)),
        (Exact("--verbose"), FlagDef::plain(C::Ignored)),
    ])
});

pub(super) struct CompilerWrapper {
    delegates: Vec<Box<dyn Tool>>,
}

impl Default for CompilerWrapper {
    fn default() -> Self {
        Self {
            delegates: super::compiler_tools(),
        }
    }
}

impl Tool for CompilerWrapper {
    fn matches(&self, program: &Path) -> bool {
        program_name(program).is_some_and(|name| WRAPPER_NAMES.is_match(&name))
    }

    fn recognize(&self, execution: &Execution) -> Recognition {
        let args = &execution.arguments;

        // skip the wrapper's own leading options
        let mut query = false;
        let mut index = 0;
        while index < args.len() {
            let token = &args[index];
            if !token.starts_with('-') {
                break;
            }
            match WRAPPER_FLAGS.lookup(token, args.get(index + 1).map(String::as_str)) {
                Lookup::Hit(found) => {
                    if found.category == FlagCategory::Query {
                        query = true;
                    }
                    index += if found.consumed_next { 2 } else { 1 };
                }
                _ => index += 1,
            }
        }

        if query {
            return Recognition::QueryOnly;
        }
        if index >= args.len() {
            // wrapper invoked without an embedded command
            return Recognition::NotApplicable;
        }

        let inner = Execution {
            executable: PathBuf::from(&args[index]),
            arguments: args[index + 1..].to_vec(),
            working_dir: execution.working_dir.clone(),
            environment: execution.environment.clone(),
        };
        for delegate in &self.delegates {
            if delegate.matches(&inner.executable) {
                return delegate.recognize(&inner);
            }
        }
        // the embedded command is no compiler (another wrapper included)
        Recognition::NotApplicable
    }
}

#[cfg(test)]
mod test {
    use super::super::super::{EntryKind, Recognition};
    use super::*;
    use std::collections::HashMap;

    fn recognize(program: &str, arguments: Vec<&str>) -> Recognition {
        let execution = Execution::from_strings(program, arguments, "/project", HashMap::new());
        CompilerWrapper::default().recognize(&execution)
    }

    #[test]
    fn test_name_matching() {
        let tool = CompilerWrapper::default();
        for name in ["ccache", "sccache", "distcc", "icecc", "/usr/bin/ccache"] {
            assert!(tool.matches(Path::new(name)), "should match {name}");
        }
        for name in ["gcc", "cache", "distccd"] {
            assert!(!tool.matches(Path::new(name)), "should not match {name}");
        }
    }

    #[test]
    fn test_wrapped_compilation_replays_the_real_compiler() {
        let result = recognize("ccache", vec!["gcc", "-c", "-O2", "main.c"]);

        let Recognition::Recognized(entries) = result else {
            panic!("expected entries")
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Compile);
        assert_eq!(entries[0].file, std::path::PathBuf::from("/project/main.c"));
        // the wrapper itself is gone from the replayed arguments
        assert_eq!(entries[0].arguments, vec!["gcc", "-c", "-O2", "main.c"]);
    }

    #[test]
    fn test_distcc_options_are_skipped() {
        let result = recognize(
            "distcc",
            vec!["--verbose", "-j", "8", "cc", "-c", "main.c"],
        );

        let Recognition::Recognized(entries) = result else {
            panic!("expected entries")
        };
        assert_eq!(entries[0].arguments, vec!["cc", "-c", "main.c"]);
    }

    #[test]
    fn test_wrapper_maintenance_is_a_query() {
        assert_eq!(recognize("ccache", vec!["--version"]), Recognition::QueryOnly);
        assert_eq!(recognize("ccache", vec!["-s"]), Recognition::QueryOnly);
        assert_eq!(
            recognize("ccache", vec!["--show-stats"]),
            Recognition::QueryOnly
        );
    }

    #[test]
    fn test_bare_wrapper_is_not_applicable() {
        assert_eq!(recognize("ccache", vec![]), Recognition::NotApplicable);
    }

    #[test]
    fn test_wrapped_non_compiler_is_not_applicable() {
        let result = recognize("ccache", vec!["echo", "hello"]);

        assert_eq!(result, Recognition::NotApplicable);
    }

    #[test]
    fn test_nested_wrappers_are_not_chased() {
        let result = recognize("distcc", vec!["ccache", "gcc", "-c", "main.c"]);

        assert_eq!(result, Recognition::NotApplicable);
    }

    #[test]
    fn test_wrapped_query_stays_a_query() {
        let result = recognize("ccache", vec!["gcc", "--version"]);

        assert_eq!(result, Recognition::QueryOnly);
    }
}
