// SPDX-License-Identifier: GPL-3.0-or-later

//! Badger turns captured build commands into a JSON compilation database.
//!
//! The interesting part lives in the [`semantic`] module: given one process
//! execution (program, arguments, working directory), decide whether it was a
//! compiler call, which compiler family's flag syntax it speaks, and which
//! source files it compiled. The surrounding modules supply the input model
//! for captured executions, the configuration, and the database output.

pub mod args;
pub mod config;
pub mod environment;
pub mod events;
pub mod output;
pub mod semantic;
