// SPDX-License-Identifier: GPL-3.0-or-later

//! The tool families and the construction of the registry.
//!
//! The registration order below is a documented, stable contract, not an
//! accident of construction: ignore lists come first, wrappers and
//! launchers precede the compilers they delegate to, and the specific
//! front ends precede the generic GCC-shaped matcher. The `ftn` alias
//! therefore always reaches the Cray tool, never the GCC one.

mod clang;
mod cray;
mod cuda;
mod gcc;
mod ignore;
mod intel;
mod mpi;
mod wrapper;

use super::registry::ToolRegistry;
use super::Tool;
use crate::config;
use std::path::PathBuf;

/// Builds the registry with the standard tool order, honoring the
/// compilers the configuration excludes.
pub fn create(config: &config::Main) -> ToolRegistry {
    let mut tools: Vec<Box<dyn Tool>> = vec![Box::new(ignore::IgnoredPrograms::default())];

    let excluded: Vec<PathBuf> = config
        .compilers
        .iter()
        .filter(|compiler| compiler.ignore)
        .map(|compiler| compiler.path.clone())
        .collect();
    if !excluded.is_empty() {
        tools.push(Box::new(ignore::IgnoredPrograms::from_paths(&excluded)));
    }

    tools.push(Box::new(wrapper::CompilerWrapper::default()));
    tools.extend(compiler_tools());

    ToolRegistry::new(tools)
}

/// The compiler families in priority order, without the wrapper. The
/// wrapper tool uses the same list to resolve the command it carries.
pub(super) fn compiler_tools() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(mpi::Mpi),
        Box::new(cuda::Cuda),
        Box::new(cray::CrayFortran),
        Box::new(intel::IntelFortran),
        Box::new(clang::Clang),
        Box::new(gcc::Gcc),
    ]
}

#[cfg(test)]
mod test {
    use super::super::{EntryKind, Recognition};
    use super::*;
    use crate::events::Execution;
    use std::collections::HashMap;

    fn recognize(program: &str, arguments: Vec<&str>) -> Recognition {
        let registry = create(&config::Main::default());
        let execution = Execution::from_strings(program, arguments, "/build", HashMap::new());
        registry.recognize(&execution)
    }

    #[test]
    fn test_unknown_programs_are_not_applicable() {
        for program in ["ld", "rustc", "javac", "cmake", "unknown-tool"] {
            let result = recognize(program, vec!["-c", "main.c"]);
            assert_eq!(
                result,
                Recognition::NotApplicable,
                "unexpected claim of {program}"
            );
        }
    }

    #[test]
    fn test_linker_invocation_is_not_applicable() {
        let result = recognize("ld", vec!["a.o", "b.o", "-o", "a.out"]);

        assert_eq!(result, Recognition::NotApplicable);
    }

    #[test]
    fn test_ftn_reaches_the_cray_tool() {
        // "ftn" answers to the Cray family even though the GCC family
        // also claims Fortran-ish names
        let result = recognize("ftn", vec!["-c", "-O2", "foo.f90"]);

        let Recognition::Recognized(entries) = result else {
            panic!("expected entries")
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Compile);
        assert_eq!(entries[0].file, std::path::PathBuf::from("/build/foo.f90"));
        assert_eq!(entries[0].arguments, vec!["ftn", "-c", "-O2", "foo.f90"]);
    }

    #[test]
    fn test_configured_compilers_are_excluded() {
        let configuration = config::Main {
            compilers: vec![config::Compiler {
                path: "/usr/bin/gcc".into(),
                ignore: true,
            }],
            ..Default::default()
        };
        let registry = create(&configuration);

        let excluded = Execution::from_strings(
            "/usr/bin/gcc",
            vec!["-c", "main.c"],
            "/build",
            HashMap::new(),
        );
        assert_eq!(registry.recognize(&excluded), Recognition::NotApplicable);

        // a different path to the same compiler family still works
        let other =
            Execution::from_strings("/opt/bin/gcc", vec!["-c", "main.c"], "/build", HashMap::new());
        assert!(matches!(
            registry.recognize(&other),
            Recognition::Recognized(_)
        ));
    }

    #[test]
    fn test_coreutils_are_dropped_early() {
        let result = recognize("/usr/bin/ls", vec!["-la"]);

        assert_eq!(result, Recognition::NotApplicable);
    }

    #[test]
    fn test_windows_executable_suffix() {
        let result = recognize("gcc.exe", vec!["-c", "test.c"]);

        assert!(matches!(result, Recognition::Recognized(_)));
    }
}
