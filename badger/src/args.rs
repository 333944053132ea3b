// SPDX-License-Identifier: GPL-3.0-or-later

//! The command line interface of the application.
//!
//! The parsing is implemented with the `clap` library; the types here
//! represent the structured form of the invocation.

use anyhow::anyhow;
use clap::{arg, command, ArgAction, ArgMatches, Command};

const DEFAULT_OUTPUT_FILE: &str = "compile_commands.json";
const DEFAULT_EVENT_FILE: &str = "events.json";

/// Represents the command line arguments of the application.
#[derive(Debug, PartialEq)]
pub struct Arguments {
    /// The path of the configuration file.
    pub config: Option<String>,
    pub input: BuildEvents,
    pub output: BuildSemantic,
}

/// The event file to analyze.
#[derive(Debug, PartialEq)]
pub struct BuildEvents {
    pub file_name: String,
}

/// The compilation database to produce.
#[derive(Debug, PartialEq)]
pub struct BuildSemantic {
    pub file_name: String,
    pub append: bool,
}

pub fn cli() -> Command {
    command!()
        .about("Generates a JSON compilation database from captured build commands")
        .arg(arg!(-c --config <FILE> "Path of the configuration file").required(false))
        .arg(
            arg!(-i --input <FILE> "Path of the event file to analyze")
                .default_value(DEFAULT_EVENT_FILE),
        )
        .arg(
            arg!(-o --output <FILE> "Path of the compilation database to write")
                .default_value(DEFAULT_OUTPUT_FILE),
        )
        .arg(
            arg!(-a --append "Append new entries to an existing database")
                .action(ArgAction::SetTrue),
        )
}

impl TryFrom<ArgMatches> for Arguments {
    type Error = anyhow::Error;

    fn try_from(matches: ArgMatches) -> Result<Self, Self::Error> {
        let config = matches.get_one::<String>("config").map(String::to_string);
        let input = matches
            .get_one::<String>("input")
            .map(String::to_string)
            .ok_or_else(|| anyhow!("input is defaulted"))?;
        let output = matches
            .get_one::<String>("output")
            .map(String::to_string)
            .ok_or_else(|| anyhow!("output is defaulted"))?;
        let append = matches.get_flag("append");

        Ok(Arguments {
            config,
            input: BuildEvents { file_name: input },
            output: BuildSemantic {
                file_name: output,
                append,
            },
        })
    }
}
