// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod generate;

use crate::errors::Result;
use crate::utils::writer::Writer;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "repeat-tests";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Arguments
pub const TESTS: (&str, char) = ("tests", 't');
pub const COUNT: (&str, char) = ("count", 'n');
pub const VERBOSE: (&str, char) = ("verbose", 'v');
// Defaults
pub const DEFAULT_COUNT: i64 = 100;

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;

pub trait Executable {
    fn execute(&self, writer: &mut Writer) -> Result<i32>;
}
