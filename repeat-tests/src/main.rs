// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::process::exit;

use clap::Parser;
use log::trace;

use repeat_tests::commands::generate::Generate;
use repeat_tests::commands::{Executable, ERROR_STATUS_CODE};
use repeat_tests::utils::writer::{WriteBuffer::Stderr, WriteBuffer::Stdout, Writer};

fn main() {
    let generate = Generate::parse();

    simple_logger::init_with_level(generate.log_level()).expect("failed to initialise logger");

    trace!("Arguments are {:?}", generate);

    let mut writer = Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()));

    match generate.execute(&mut writer) {
        Err(e) => {
            writer
                .write_err(format!("Error occurred {e}"))
                .expect("failed to write to stderr");

            exit(ERROR_STATUS_CODE);
        }
        Ok(code) => exit(code),
    }
}
