// SPDX-License-Identifier: GPL-3.0-or-later

//! Source file heuristics: which positional arguments name a compilable
//! source, and which name a binary artifact destined for the linker.

use std::collections::HashSet;
use std::sync::LazyLock;

fn extension(argument: &str) -> Option<&str> {
    if argument.starts_with('-') {
        return None;
    }
    argument.rsplit_once('.').map(|(_, extension)| extension)
}

/// Anything a GCC-shaped driver would hand to one of its front ends.
pub(super) fn generic_source(argument: &str) -> bool {
    extension(argument).is_some_and(|e| GENERIC_EXTENSIONS.contains(e))
}

/// Fortran sources, fixed and free form, preprocessed or not.
pub(super) fn fortran_source(argument: &str) -> bool {
    extension(argument).is_some_and(|e| FORTRAN_EXTENSIONS.contains(e))
}

/// CUDA sources plus everything the host compiler accepts.
pub(super) fn cuda_source(argument: &str) -> bool {
    extension(argument).is_some_and(|e| e == "cu" || GENERIC_EXTENSIONS.contains(e))
}

/// Object files and libraries; linker inputs, never compiled.
#[allow(dead_code)]
pub(super) fn is_binary(argument: &str) -> bool {
    extension(argument)
        .map(|e| e.to_lowercase())
        .is_some_and(|e| BINARY_EXTENSIONS.contains(e.as_str()))
}

#[rustfmt::skip]
static GENERIC_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // header files
        "h", "hh", "H", "hp", "hxx", "hpp", "HPP", "h++", "tcc",
        // C
        "c", "C",
        // C++
        "cc", "CC", "c++", "C++", "cxx", "cpp", "cp",
        // ObjectiveC
        "m", "mi", "mm", "M", "mii",
        // Preprocessed
        "i", "ii",
        // Assembly
        "s", "S", "sx", "asm",
        // Fortran
        "f", "for", "ftn",
        "F", "FOR", "fpp", "FPP", "FTN",
        "f90", "f95", "f03", "f08",
        "F90", "F95", "F03", "F08",
        // go
        "go",
        // D
        "d", "di", "dd",
        // Ada
        "ads", "adb",
    ])
});

#[rustfmt::skip]
static FORTRAN_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "f", "for", "ftn",
        "F", "FOR", "fpp", "FPP", "FTN",
        "f90", "f95", "f03", "f08",
        "F90", "F95", "F03", "F08",
    ])
});

#[rustfmt::skip]
static BINARY_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // Object files
        "o", "obj",
        // Static libraries
        "a", "lib",
        // Dynamic/shared libraries
        "so", "dylib", "dll",
    ])
});
