// SPDX-License-Identifier: GPL-3.0-or-later

//! The Intel Fortran front ends (`ifort`, and the LLVM based `ifx`).
//! Mostly GCC compatible, with Intel spellings for module handling,
//! preprocessing and reporting.

use super::super::flags::{FlagDef, FlagsByName};
use super::super::parser::recognize_with_table;
use super::super::{program_name, source, Recognition, Tool};
use crate::events::Execution;
use regex_lite::Regex;
use std::path::Path;
use std::sync::LazyLock;

static INTEL_NAMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(ifort|ifx)(-[\d.]+)?$").unwrap());

static INTEL_FLAGS: LazyLock<FlagsByName> = LazyLock::new(|| {
    use crate::semantic::flags::Spelling::{Exact, Prefix};
    use crate::semantic::flags::{Attachment as A, FlagCategory as C};

    FlagsByName::new(&[
        // pipeline control
        (Exact("-c"), FlagDef::plain(C::CompileOnly)),
        (Exact("-S"), FlagDef::plain(C::CompileOnly)),
        (Exact("-E"), FlagDef::plain(C::PreprocessorOnly)),
        (Exact("-EP"), FlagDef::plain(C::PreprocessorOnly)),
        (Exact("-P"), FlagDef::plain(C::PreprocessorOnly)),
        (Exact("-preprocess-only"), FlagDef::plain(C::PreprocessorOnly)),
        // preprocessor
        (Exact("-fpp"), FlagDef::plain(C::PassThrough)),
        (Exact("-nofpp"), FlagDef::plain(C::PassThrough)),
        (Exact("-D"), FlagDef::with_value(C::DefineMacro, A::GluedOrSeparate)),
        (Exact("-U"), FlagDef::with_value(C::DefineMacro, A::GluedOrSeparate)),
        (Exact("-undef"), FlagDef::plain(C::PassThrough)),
        // header and module search
        (Exact("-I"), FlagDef::with_value(C::IncludePath, A::GluedOrSeparate)),
        (Exact("-isystem"), FlagDef::with_value(C::IncludePath, A::GluedOrSeparate)),
        (Exact("-include"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-iquote"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-isysroot"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-module"), FlagDef::with_value(C::IncludePath, A::Separate)),
        // output
        (Exact("-o"), FlagDef::with_value(C::Output, A::GluedOrSeparate)),
        // language form and standard
        (Exact("-free"), FlagDef::plain(C::StandardVersion)),
        (Exact("-fixed"), FlagDef::plain(C::StandardVersion)),
        (Exact("-nofree"), FlagDef::plain(C::StandardVersion)),
        (Exact("-nofixed"), FlagDef::plain(C::StandardVersion)),
        (Exact("-stand"), FlagDef::with_value(C::StandardVersion, A::EqOrSeparate)),
        (Exact("-std"), FlagDef::with_value(C::StandardVersion, A::EqOrSeparate)),
        // diagnostics and checking
        (Exact("-w"), FlagDef::plain(C::Diagnostic)),
        (Prefix("-warn"), FlagDef::plain(C::Diagnostic)),
        (Prefix("-check"), FlagDef::plain(C::Diagnostic)),
        (Prefix("-W"), FlagDef::plain(C::Diagnostic)),
        (Prefix("-diag-"), FlagDef::plain(C::Diagnostic)),
        (Exact("-debug"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        (Exact("-v"), FlagDef::plain(C::Diagnostic)),
        // dependency generation
        (Exact("-gen-dep"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        (Exact("-gen-interfaces"), FlagDef::plain(C::PassThrough)),
        (Exact("-nogen-interfaces"), FlagDef::plain(C::PassThrough)),
        (Exact("-MD"), FlagDef::plain(C::Diagnostic)),
        (Exact("-MMD"), FlagDef::plain(C::Diagnostic)),
        (Exact("-MF"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        (Exact("-MT"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        // code generation families kept verbatim
        (Prefix("-O"), FlagDef::plain(C::PassThrough)),
        (Prefix("-g"), FlagDef::plain(C::PassThrough)),
        (Prefix("-x"), FlagDef::plain(C::PassThrough)),
        (Prefix("-ax"), FlagDef::plain(C::PassThrough)),
        (Prefix("-m"), FlagDef::plain(C::PassThrough)),
        (Prefix("-f"), FlagDef::plain(C::PassThrough)),
        (Prefix("-q"), FlagDef::plain(C::PassThrough)),
        (Prefix("-mkl"), FlagDef::plain(C::PassThrough)),
        (Exact("-r8"), FlagDef::plain(C::PassThrough)),
        (Exact("-i8"), FlagDef::plain(C::PassThrough)),
        (Exact("-real-size"), FlagDef::with_value(C::PassThrough, A::Separate)),
        (Exact("-integer-size"), FlagDef::with_value(C::PassThrough, A::Separate)),
        (Exact("-fp-model"), FlagDef::with_value(C::PassThrough, A::Separate)),
        // linking
        (Exact("-l"), FlagDef::with_value(C::LinkOnly, A::GluedOrSeparate)),
        (Exact("-L"), FlagDef::with_value(C::LinkOnly, A::GluedOrSeparate)),
        (Exact("-shared"), FlagDef::plain(C::LinkOnly)),
        (Exact("-static"), FlagDef::plain(C::LinkOnly)),
        (Exact("-shared-intel"), FlagDef::plain(C::LinkOnly)),
        (Exact("-static-intel"), FlagDef::plain(C::LinkOnly)),
        (Exact("-static-libgcc"), FlagDef::plain(C::LinkOnly)),
        (Exact("-shared-libgcc"), FlagDef::plain(C::LinkOnly)),
        (Exact("-nostdlib"), FlagDef::plain(C::LinkOnly)),
        (Exact("-nostartfiles"), FlagDef::plain(C::LinkOnly)),
        (Exact("-nodefaultlibs"), FlagDef::plain(C::LinkOnly)),
        (Exact("-pthread"), FlagDef::plain(C::LinkOnly)),
        (Exact("-Xlinker"), FlagDef::with_value(C::LinkOnly, A::Separate)),
        (Prefix("-Wl,"), FlagDef::plain(C::LinkOnly)),
        // queries
        (Exact("--version"), FlagDef::plain(C::Query)),
        (Exact("-V"), FlagDef::plain(C::Query)),
        (Exact("-dumpmachine"), FlagDef::plain(C::Query)),
        (Exact("-dryrun"), FlagDef::plain(C::Query)),
        (Exact("-help"), FlagDef::plain(C::Query)),
        (Prefix("--help"), FlagDef::plain(C::Query)),
    ])
});

#[derive(Debug, Default)]
pub(super) struct IntelFortran;

impl Tool for IntelFortran {
    fn matches(&self, program: &Path) -> bool {
        program_name(program).is_some_and(|name| INTEL_NAMES.is_match(&name))
    }

    fn recognize(&self, execution: &Execution) -> Recognition {
        recognize_with_table(execution, &INTEL_FLAGS, source::fortran_source, false)
    }
}
