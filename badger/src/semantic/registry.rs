// SPDX-License-Identifier: GPL-3.0-or-later

//! The ordered collection of tools and the dispatch protocol.
//!
//! Registration order is a priority and part of the contract: the first
//! tool whose name matcher accepts the program commits to the execution.
//! After commitment there is no fallback to a later tool, even when the
//! argument parse fails; the parse result is the final outcome.

use super::{Recognition, Tool};
use crate::events::Execution;

pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Dispatches one execution to the first matching tool.
    pub fn recognize(&self, execution: &Execution) -> Recognition {
        for tool in &self.tools {
            if tool.matches(&execution.executable) {
                return tool.recognize(execution);
            }
        }
        Recognition::NotApplicable
    }
}
