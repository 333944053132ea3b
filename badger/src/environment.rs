// SPDX-License-Identifier: GPL-3.0-or-later

//! The catalog of environment variables the analysis consults.
//!
//! Recognition reads nothing from the process environment except the
//! GCC include path variables listed here.

use std::collections::HashMap;

// https://gcc.gnu.org/onlinedocs/cpp/Environment-Variables.html
pub const KEY_GCC__C_INCLUDE_1: &str = "CPATH";
pub const KEY_GCC__C_INCLUDE_2: &str = "C_INCLUDE_PATH";
pub const KEY_GCC__C_INCLUDE_3: &str = "CPLUS_INCLUDE_PATH";
pub const KEY_GCC__OBJC_INCLUDE: &str = "OBJC_INCLUDE_PATH";

/// Expands the GCC include path variables into command line arguments.
///
/// The three C-family variables become `-I` pairs, the Objective-C one
/// becomes `-isystem` pairs. Empty path list members are dropped, the
/// platform's path list separator is honored.
pub fn include_paths(environment: &HashMap<String, String>) -> Vec<String> {
    let mut arguments = Vec::new();

    for key in [
        KEY_GCC__C_INCLUDE_1,
        KEY_GCC__C_INCLUDE_2,
        KEY_GCC__C_INCLUDE_3,
    ] {
        if let Some(value) = environment.get(key) {
            for path in std::env::split_paths(value) {
                if !path.as_os_str().is_empty() {
                    arguments.push("-I".to_string());
                    arguments.push(path.to_string_lossy().to_string());
                }
            }
        }
    }

    if let Some(value) = environment.get(KEY_GCC__OBJC_INCLUDE) {
        for path in std::env::split_paths(value) {
            if !path.as_os_str().is_empty() {
                arguments.push("-isystem".to_string());
                arguments.push(path.to_string_lossy().to_string());
            }
        }
    }

    arguments
}
