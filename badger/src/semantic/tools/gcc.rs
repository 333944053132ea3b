// SPDX-License-Identifier: GPL-3.0-or-later

//! The GCC family: `gcc`, `g++`, `cc`, `c++` and the GNU Fortran front
//! ends, with cross-compile prefixes and version suffixes.
//!
//! The flag list is the base table for every GCC-shaped family; Clang,
//! CUDA and the MPI launchers extend it with their own spellings.
//!
//! https://gcc.gnu.org/onlinedocs/gcc/Option-Summary.html

use super::super::flags::{FlagDef, FlagsByName, Spelling};
use super::super::parser::recognize_with_table;
use super::super::{program_name, source, Recognition, Tool};
use crate::events::Execution;
use regex_lite::Regex;
use std::path::Path;
use std::sync::LazyLock;

static GCC_NAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^-]+-)*(gcc|g\+\+|cc|c\+\+|gfortran|f77|f90|f95|f03|f08)(-\d+(\.\d+)*)?$")
        .unwrap()
});

static GCC_FLAGS: LazyLock<FlagsByName> = LazyLock::new(|| FlagsByName::new(&flag_list()));

#[derive(Debug, Default)]
pub(super) struct Gcc;

impl Tool for Gcc {
    fn matches(&self, program: &Path) -> bool {
        program_name(program).is_some_and(|name| GCC_NAMES.is_match(&name))
    }

    fn recognize(&self, execution: &Execution) -> Recognition {
        recognize_with_table(execution, &GCC_FLAGS, source::generic_source, true)
    }
}

/// The GCC flag list as declarative (spelling, definition) tuples.
pub(super) fn flag_list() -> Vec<(Spelling, FlagDef)> {
    use crate::semantic::flags::Spelling::{Exact, Prefix};
    use crate::semantic::flags::{Attachment as A, FlagCategory as C};

    vec![
        // pipeline control
        (Exact("-c"), FlagDef::plain(C::CompileOnly)),
        (Exact("-S"), FlagDef::plain(C::CompileOnly)),
        (Exact("-E"), FlagDef::plain(C::PreprocessorOnly)),
        (Exact("-M"), FlagDef::plain(C::PreprocessorOnly)),
        (Exact("-MM"), FlagDef::plain(C::PreprocessorOnly)),
        // dependency generation side effects
        (Exact("-MD"), FlagDef::plain(C::Diagnostic)),
        (Exact("-MMD"), FlagDef::plain(C::Diagnostic)),
        (Exact("-MG"), FlagDef::plain(C::Diagnostic)),
        (Exact("-MP"), FlagDef::plain(C::Diagnostic)),
        (Exact("-MF"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        (Exact("-MT"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        (Exact("-MQ"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        // output
        (Exact("-o"), FlagDef::with_value(C::Output, A::GluedOrSeparate)),
        // preprocessor definitions
        (Exact("-D"), FlagDef::with_value(C::DefineMacro, A::GluedOrSeparate)),
        (Exact("-U"), FlagDef::with_value(C::DefineMacro, A::GluedOrSeparate)),
        // header search
        (Exact("-I"), FlagDef::with_value(C::IncludePath, A::GluedOrSeparate)),
        (Exact("-isystem"), FlagDef::with_value(C::IncludePath, A::GluedOrSeparate)),
        (Exact("-iquote"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-idirafter"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-imacros"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-include"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-iprefix"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-iwithprefix"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-iwithprefixbefore"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("-isysroot"), FlagDef::with_value(C::IncludePath, A::Separate)),
        (Exact("--sysroot"), FlagDef::with_value(C::IncludePath, A::EqOrSeparate)),
        (Exact("-nostdinc"), FlagDef::plain(C::IncludePath)),
        (Exact("-nostdinc++"), FlagDef::plain(C::IncludePath)),
        // language and standard selection
        (Exact("-std"), FlagDef::with_value(C::StandardVersion, A::EqOrSeparate)),
        (Exact("-ansi"), FlagDef::plain(C::StandardVersion)),
        (Exact("-x"), FlagDef::with_value(C::StandardVersion, A::GluedOrSeparate)),
        // linking
        (Exact("-L"), FlagDef::with_value(C::LinkOnly, A::GluedOrSeparate)),
        (Exact("-l"), FlagDef::with_value(C::LinkOnly, A::GluedOrSeparate)),
        (Exact("-shared"), FlagDef::plain(C::LinkOnly)),
        (Exact("-static"), FlagDef::plain(C::LinkOnly)),
        (Exact("-pie"), FlagDef::plain(C::LinkOnly)),
        (Exact("-rdynamic"), FlagDef::plain(C::LinkOnly)),
        (Exact("-nostdlib"), FlagDef::plain(C::LinkOnly)),
        (Exact("-nostdlib++"), FlagDef::plain(C::LinkOnly)),
        (Exact("-nostartfiles"), FlagDef::plain(C::LinkOnly)),
        (Exact("-nodefaultlibs"), FlagDef::plain(C::LinkOnly)),
        (Exact("-static-libgcc"), FlagDef::plain(C::LinkOnly)),
        (Exact("-static-libstdc++"), FlagDef::plain(C::LinkOnly)),
        (Exact("-shared-libgcc"), FlagDef::plain(C::LinkOnly)),
        (Exact("-pthread"), FlagDef::plain(C::LinkOnly)),
        (Exact("-r"), FlagDef::plain(C::LinkOnly)),
        (Exact("-Xlinker"), FlagDef::with_value(C::LinkOnly, A::Separate)),
        (Exact("-T"), FlagDef::with_value(C::LinkOnly, A::Separate)),
        (Exact("-u"), FlagDef::with_value(C::LinkOnly, A::GluedOrSeparate)),
        (Exact("-z"), FlagDef::with_value(C::LinkOnly, A::Separate)),
        (Prefix("-Wl,"), FlagDef::plain(C::LinkOnly)),
        // component forwarding
        (Prefix("-Wa,"), FlagDef::plain(C::PassThrough)),
        (Prefix("-Wp,"), FlagDef::plain(C::PassThrough)),
        (Exact("-Xassembler"), FlagDef::with_value(C::PassThrough, A::Separate)),
        (Exact("-Xpreprocessor"), FlagDef::with_value(C::PassThrough, A::Separate)),
        // warnings and diagnostics
        (Exact("-w"), FlagDef::plain(C::Diagnostic)),
        (Prefix("-W"), FlagDef::plain(C::Diagnostic)),
        (Prefix("-pedantic"), FlagDef::plain(C::Diagnostic)),
        (Exact("-v"), FlagDef::plain(C::Diagnostic)),
        // families kept verbatim
        (Prefix("-g"), FlagDef::plain(C::PassThrough)),
        (Prefix("-O"), FlagDef::plain(C::PassThrough)),
        (Prefix("-f"), FlagDef::plain(C::PassThrough)),
        (Prefix("-m"), FlagDef::plain(C::PassThrough)),
        (Prefix("-d"), FlagDef::plain(C::PassThrough)),
        (Prefix("-save-temps"), FlagDef::plain(C::PassThrough)),
        (Prefix("@"), FlagDef::plain(C::PassThrough)),
        (Exact("-specs"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-B"), FlagDef::with_value(C::PassThrough, A::GluedOrSeparate)),
        (Exact("-pipe"), FlagDef::plain(C::PassThrough)),
        (Exact("-P"), FlagDef::plain(C::PassThrough)),
        (Exact("-C"), FlagDef::plain(C::PassThrough)),
        (Exact("-CC"), FlagDef::plain(C::PassThrough)),
        (Exact("-undef"), FlagDef::plain(C::PassThrough)),
        (Exact("-trigraphs"), FlagDef::plain(C::PassThrough)),
        (Exact("-traditional"), FlagDef::plain(C::PassThrough)),
        (Exact("-traditional-cpp"), FlagDef::plain(C::PassThrough)),
        (Exact("-p"), FlagDef::plain(C::PassThrough)),
        (Exact("-pg"), FlagDef::plain(C::PassThrough)),
        (Exact("--coverage"), FlagDef::plain(C::PassThrough)),
        (Exact("-wrapper"), FlagDef::with_value(C::PassThrough, A::Separate)),
        // queries
        (Exact("--version"), FlagDef::plain(C::Query)),
        (Exact("-dumpversion"), FlagDef::plain(C::Query)),
        (Exact("-dumpfullversion"), FlagDef::plain(C::Query)),
        (Exact("-dumpmachine"), FlagDef::plain(C::Query)),
        (Exact("-dumpspecs"), FlagDef::plain(C::Query)),
        (Exact("-###"), FlagDef::plain(C::Query)),
        (Exact("--target-help"), FlagDef::plain(C::Query)),
        (Prefix("--help"), FlagDef::plain(C::Query)),
        (Prefix("-print-"), FlagDef::plain(C::Query)),
        (Prefix("--print-"), FlagDef::plain(C::Query)),
    ]
}
