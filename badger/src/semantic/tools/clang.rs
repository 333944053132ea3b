// SPDX-License-Identifier: GPL-3.0-or-later

//! The Clang family. Clang accepts the GCC surface, so the table extends
//! the GCC list with the spellings Clang adds on top.

use super::super::flags::{FlagDef, FlagsByName};
use super::super::parser::recognize_with_table;
use super::super::{program_name, source, Recognition, Tool};
use super::gcc;
use crate::events::Execution;
use regex_lite::Regex;
use std::path::Path;
use std::sync::LazyLock;

static CLANG_NAMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^-]+-)*clang(\+\+)?(-\d+(\.\d+)*)?$").unwrap());

static CLANG_FLAGS: LazyLock<FlagsByName> = LazyLock::new(|| {
    use crate::semantic::flags::Spelling::{Exact, Prefix};
    use crate::semantic::flags::{Attachment as A, FlagCategory as C};

    let mut flags = gcc::flag_list();
    flags.extend([
        (Exact("-Xclang"), FlagDef::with_value(C::PassThrough, A::Separate)),
        (Exact("-target"), FlagDef::with_value(C::PassThrough, A::Separate)),
        (Exact("--target"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-arch"), FlagDef::with_value(C::PassThrough, A::Separate)),
        (Exact("--driver-mode"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Exact("--serialize-diagnostics"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        (Exact("-index-store-path"), FlagDef::with_value(C::Diagnostic, A::Separate)),
        (Exact("--analyze"), FlagDef::plain(C::Diagnostic)),
        (Exact("-fsyntax-only"), FlagDef::plain(C::CompileOnly)),
        (Prefix("--gcc-toolchain"), FlagDef::plain(C::PassThrough)),
    ]);
    FlagsByName::new(&flags)
});

#[derive(Debug, Default)]
pub(super) struct Clang;

impl Tool for Clang {
    fn matches(&self, program: &Path) -> bool {
        program_name(program).is_some_and(|name| CLANG_NAMES.is_match(&name))
    }

    fn recognize(&self, execution: &Execution) -> Recognition {
        recognize_with_table(execution, &CLANG_FLAGS, source::generic_source, true)
    }
}
