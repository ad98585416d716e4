// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use clap::{ArgAction, Parser};
use log::{debug, info, warn, Level};

use crate::commands::{Executable, APP_NAME, APP_VERSION, DEFAULT_COUNT, SUCCESS_STATUS_CODE};
use crate::errors::Result;
use crate::generator::{write_units, RepeatPlan};
use crate::utils::writer::Writer;

const ABOUT: &str = "Print code to paste in that repeats tests";
const TESTS_HELP: &str = "list of tests to repeat";
const COUNT_HELP: &str = "number of times to repeat test sequence (default 100)";
const VERBOSE_HELP: &str = "Sets the level of verbosity - add v's to increase output";

#[derive(Debug, Clone, Eq, PartialEq, Parser)]
#[command(name = APP_NAME, version = APP_VERSION, about = ABOUT, long_about = None)]
/// The Generate command prints one `[UnityTest]` wrapper per (round, test) pair,
/// for rounds 1 up to but not including `count`
pub struct Generate {
    /// names of the zero-argument test coroutines to call, in order
    /// when the flag is repeated the last occurrence wins
    #[arg(
        short,
        long,
        num_args = 1..,
        action = ArgAction::Set,
        overrides_with = "tests",
        value_name = "TEST",
        help = TESTS_HELP
    )]
    pub(crate) tests: Vec<String>,
    /// upper bound (exclusive) of the round index
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true, help = COUNT_HELP)]
    pub(crate) count: i64,
    #[arg(short, long, action = ArgAction::Count, help = VERBOSE_HELP)]
    pub(crate) verbose: u8,
}

impl Generate {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Error,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }
}

impl Executable for Generate {
    /// .
    /// write the repeated test wrappers to the writer
    ///
    /// This function will return an error if writing to the output fails
    fn execute(&self, writer: &mut Writer) -> Result<i32> {
        if self.tests.is_empty() {
            warn!("No test names were given, nothing to generate");
        }

        let plan = RepeatPlan::new(&self.tests, self.count);
        info!(
            "Repeating {} test(s) for rounds {:?}",
            self.tests.len(),
            plan.rounds()
        );

        let written = write_units(&plan, writer)?;
        writer.flush()?;

        debug!("Wrote {} unit(s)", written);
        Ok(SUCCESS_STATUS_CODE)
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod generate_tests;
