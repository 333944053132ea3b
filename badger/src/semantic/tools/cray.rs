// SPDX-License-Identifier: GPL-3.0-or-later

//! The Cray Fortran front end (`crayftn`, and `ftn` inside the Cray
//! programming environment). Most of its options are single letters that
//! take their value glued or separate, which makes the exact-first lookup
//! order essential here.
//!
//! https://support.hpe.com/hpesc/public/docDisplay?docId=a00115296en_us

use super::super::flags::{FlagDef, FlagsByName};
use super::super::parser::recognize_with_table;
use super::super::{program_name, source, Recognition, Tool};
use crate::events::Execution;
use regex_lite::Regex;
use std::path::Path;
use std::sync::LazyLock;

static CRAY_NAMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(crayftn|ftn)(-\d+(\.\d+)*)?$").unwrap());

static CRAY_FLAGS: LazyLock<FlagsByName> = LazyLock::new(|| {
    use crate::semantic::flags::Spelling::{Exact, Prefix};
    use crate::semantic::flags::{Attachment as A, FlagCategory as C};

    FlagsByName::new(&[
        // pipeline control
        (Exact("-c"), FlagDef::plain(C::CompileOnly)),
        (Exact("-S"), FlagDef::plain(C::CompileOnly)),
        (Exact("-E"), FlagDef::plain(C::PreprocessorOnly)),
        (Exact("-eP"), FlagDef::plain(C::PreprocessorOnly)),
        (Exact("-eZ"), FlagDef::plain(C::Diagnostic)),
        // outputs: -b names the object, -o the binary
        (Exact("-o"), FlagDef::with_value(C::Output, A::GluedOrSeparate)),
        (Exact("-b"), FlagDef::with_value(C::Output, A::GluedOrSeparate)),
        // preprocessor
        (Exact("-D"), FlagDef::with_value(C::DefineMacro, A::GluedOrSeparate)),
        (Exact("-U"), FlagDef::with_value(C::DefineMacro, A::GluedOrSeparate)),
        (Exact("-I"), FlagDef::with_value(C::IncludePath, A::GluedOrSeparate)),
        // module output and search directories
        (Exact("-J"), FlagDef::with_value(C::IncludePath, A::GluedOrSeparate)),
        (Exact("-p"), FlagDef::with_value(C::IncludePath, A::GluedOrSeparate)),
        // source form selection
        (Exact("-f"), FlagDef::with_value(C::StandardVersion, A::GluedOrSeparate)),
        // single letter option groups, value glued or separate
        (Exact("-A"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-d"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-e"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-G"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-h"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-K"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-m"), FlagDef::with_value(C::Diagnostic, A::GluedOrSeparate)),
        (Exact("-M"), FlagDef::with_value(C::Diagnostic, A::GluedOrSeparate)),
        (Exact("-N"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-O"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-Q"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-r"), FlagDef::with_value(C::Diagnostic, A::GluedOrSeparate)),
        (Exact("-R"), FlagDef::with_value(C::Diagnostic, A::GluedOrSeparate)),
        (Exact("-s"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-x"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-Y"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        // linking
        (Exact("-l"), FlagDef::with_value(C::LinkOnly, A::GluedOrSeparate)),
        (Exact("-L"), FlagDef::with_value(C::LinkOnly, A::GluedOrSeparate)),
        (Exact("-dynamic"), FlagDef::plain(C::LinkOnly)),
        (Exact("-static"), FlagDef::plain(C::LinkOnly)),
        (Exact("-shared"), FlagDef::plain(C::LinkOnly)),
        (Exact("-add-rpath"), FlagDef::plain(C::LinkOnly)),
        (Exact("-no-add-rpath"), FlagDef::plain(C::LinkOnly)),
        (Exact("-add-rpath-shared"), FlagDef::plain(C::LinkOnly)),
        (Exact("-no-add-rpath-shared"), FlagDef::plain(C::LinkOnly)),
        (Exact("-add-runpath"), FlagDef::plain(C::LinkOnly)),
        (Exact("-no-add-runpath"), FlagDef::plain(C::LinkOnly)),
        (Exact("-gcc-rpath"), FlagDef::plain(C::LinkOnly)),
        (Exact("-no-gcc-rpath"), FlagDef::plain(C::LinkOnly)),
        (Exact("-as-needed"), FlagDef::plain(C::LinkOnly)),
        (Exact("-no-as-needed"), FlagDef::plain(C::LinkOnly)),
        (Exact("--as-needed"), FlagDef::plain(C::LinkOnly)),
        (Exact("--no-as-needed"), FlagDef::plain(C::LinkOnly)),
        (Exact("--custom-ld-script"), FlagDef::with_value(C::LinkOnly, A::EqOrSeparate)),
        (Exact("--no-custom-ld-script"), FlagDef::plain(C::LinkOnly)),
        // target selection written out by the PrgEnv wrappers
        (Exact("-target-cpu"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Exact("-target-network"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Exact("-target-accel"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Prefix("-cray"), FlagDef::plain(C::PassThrough)),
        (Prefix("--cray"), FlagDef::plain(C::PassThrough)),
        // openmp toggles
        (Exact("-openmp"), FlagDef::plain(C::PassThrough)),
        (Exact("-noopenmp"), FlagDef::plain(C::PassThrough)),
        (Exact("-qopenmp"), FlagDef::plain(C::PassThrough)),
        (Exact("-qno-openmp"), FlagDef::plain(C::PassThrough)),
        (Exact("-mp"), FlagDef::plain(C::PassThrough)),
        (Exact("-default64"), FlagDef::plain(C::PassThrough)),
        (Exact("-g"), FlagDef::plain(C::PassThrough)),
        // queries
        (Exact("-v"), FlagDef::plain(C::Diagnostic)),
        (Exact("-V"), FlagDef::plain(C::Query)),
        (Exact("-VV"), FlagDef::plain(C::Query)),
        (Exact("--version"), FlagDef::plain(C::Query)),
        (Prefix("--help"), FlagDef::plain(C::Query)),
    ])
});

#[derive(Debug, Default)]
pub(super) struct CrayFortran;

impl Tool for CrayFortran {
    fn matches(&self, program: &Path) -> bool {
        program_name(program).is_some_and(|name| CRAY_NAMES.is_match(&name))
    }

    fn recognize(&self, execution: &Execution) -> Recognition {
        recognize_with_table(execution, &CRAY_FLAGS, source::fortran_source, false)
    }
}

#[cfg(test)]
mod test {
    use super::super::super::{EntryKind, Recognition};
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn recognize(program: &str, arguments: Vec<&str>) -> Recognition {
        let execution = Execution::from_strings(program, arguments, "/build", HashMap::new());
        CrayFortran.recognize(&execution)
    }

    #[test]
    fn test_name_matching() {
        let tool = CrayFortran;
        assert!(tool.matches(Path::new("ftn")));
        assert!(tool.matches(Path::new("crayftn")));
        assert!(tool.matches(Path::new("/opt/cray/bin/ftn")));

        assert!(!tool.matches(Path::new("gfortran")));
        assert!(!tool.matches(Path::new("ifort")));
    }

    #[test]
    fn test_simple_compilation() {
        let result = recognize("ftn", vec!["-c", "-O2", "foo.f90"]);

        let Recognition::Recognized(entries) = result else {
            panic!("expected entries")
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Compile);
        assert_eq!(entries[0].directory, PathBuf::from("/build"));
        assert_eq!(entries[0].file, PathBuf::from("/build/foo.f90"));
        assert_eq!(entries[0].arguments, vec!["ftn", "-c", "-O2", "foo.f90"]);
    }

    #[test]
    fn test_version_query() {
        assert_eq!(recognize("ftn", vec!["--version"]), Recognition::QueryOnly);
        assert_eq!(recognize("crayftn", vec!["-V"]), Recognition::QueryOnly);
    }

    #[test]
    fn test_module_directory_flags() {
        let result = recognize(
            "crayftn",
            vec!["-c", "-J", "modules", "-em", "kernel.f90"],
        );

        let Recognition::Recognized(entries) = result else {
            panic!("expected entries")
        };
        // "modules" is the value of -J, not a positional argument
        assert_eq!(entries[0].file, PathBuf::from("/build/kernel.f90"));
        assert_eq!(
            entries[0].arguments,
            vec!["crayftn", "-c", "-J", "modules", "-em", "kernel.f90"]
        );
    }

    #[test]
    fn test_preprocess_only() {
        let result = recognize("ftn", vec!["-eP", "foo.F90"]);

        let Recognition::Recognized(entries) = result else {
            panic!("expected entries")
        };
        assert_eq!(entries[0].kind, EntryKind::Preprocess);
    }

    #[test]
    fn test_link_only_invocation() {
        let result = recognize("ftn", vec!["a.o", "b.o", "-o", "sim"]);

        assert_eq!(result, Recognition::NotApplicable);
    }

    #[test]
    fn test_cray_specific_link_flags() {
        let result = recognize("ftn", vec!["-c", "-add-rpath", "-hlist=m", "foo.f90"]);

        let Recognition::Recognized(entries) = result else {
            panic!("expected entries")
        };
        assert_eq!(
            entries[0].arguments,
            vec!["ftn", "-c", "-add-rpath", "-hlist=m", "foo.f90"]
        );
    }
}
