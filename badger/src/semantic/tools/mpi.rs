// SPDX-License-Identifier: GPL-3.0-or-later

//! The MPI compiler launchers (`mpicc`, `mpicxx`, `mpif90` and friends).
//! They wrap a host compiler and accept its full flag surface, plus the
//! launcher's own introspection queries (`-show`, `-showme`).

use super::super::flags::{FlagDef, FlagsByName};
use super::super::parser::recognize_with_table;
use super::super::{program_name, source, Recognition, Tool};
use super::gcc;
use crate::events::Execution;
use regex_lite::Regex;
use std::path::Path;
use std::sync::LazyLock;

static MPI_NAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^mpi(cc|cxx|CC|c\+\+|fort|f77|f90|f95|icc|icpc|ifort|ifx)(-\d+(\.\d+)*)?$")
        .unwrap()
});

static MPI_FLAGS: LazyLock<FlagsByName> = LazyLock::new(|| {
    use crate::semantic::flags::Spelling::{Exact, Prefix};
    use crate::semantic::flags::{Attachment as A, FlagCategory as C};

    let mut flags = gcc::flag_list();
    flags.extend([
        // launcher introspection, all of it query only
        (Exact("-show"), FlagDef::plain(C::Query)),
        (Prefix("-showme"), FlagDef::plain(C::Query)),
        (Exact("-compile_info"), FlagDef::plain(C::Query)),
        (Exact("-link_info"), FlagDef::plain(C::Query)),
        // host compiler override of the MPICH style wrappers
        (Exact("-cc"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Exact("-cxx"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Exact("-fc"), FlagDef::with_value(C::PassThrough, A::Eq)),
    ]);
    FlagsByName::new(&flags)
});

#[derive(Debug, Default)]
pub(super) struct Mpi;

impl Tool for Mpi {
    fn matches(&self, program: &Path) -> bool {
        program_name(program).is_some_and(|name| MPI_NAMES.is_match(&name))
    }

    fn recognize(&self, execution: &Execution) -> Recognition {
        recognize_with_table(execution, &MPI_FLAGS, source::generic_source, true)
    }
}
