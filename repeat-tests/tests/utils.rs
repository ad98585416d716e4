// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use clap::Parser;
use repeat_tests::commands::generate::Generate;
use repeat_tests::commands::Executable;
use repeat_tests::utils::writer::Writer;

#[non_exhaustive]
pub struct StatusCode;

const REPEAT_TESTS_TEST_APP_NAME: &str = "repeat-tests-test";

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const INTERNAL_FAILURE: i32 = -1;
    pub const USAGE_ERROR: i32 = 2;
    pub const WRITE_ERROR: i32 = 5;
}

pub fn read_from_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push("tests");
    resource.push(path);
    let mut content = String::new();
    let mut reader = BufReader::new(File::open(resource.as_path()).unwrap());
    reader.read_to_string(&mut content).unwrap();

    content
}

pub fn compare_write_buffer_with_file(
    expected_output_relative_file_path: &str,
    actual_output_writer: Writer,
) {
    let expected_output = read_from_resource_file(expected_output_relative_file_path);
    let actual_output = actual_output_writer.into_string().unwrap();
    assert_eq!(expected_output, actual_output)
}

#[allow(dead_code)]
pub fn compare_write_buffer_with_string(expected_output: &str, actual_output_writer: Writer) {
    let actual_output = actual_output_writer.into_string().unwrap();
    assert_eq!(expected_output, actual_output)
}

pub trait CommandTestRunner {
    fn build_args(&self) -> Vec<String>;

    fn run(&self, writer: &mut Writer) -> i32 {
        let args = self.build_args();

        let command_options = args.iter().fold(
            vec![String::from(REPEAT_TESTS_TEST_APP_NAME)],
            |mut res, arg| {
                res.push(arg.to_string());
                res
            },
        );

        match Generate::try_parse_from(command_options) {
            Ok(generate) => match generate.execute(writer) {
                Err(e) => {
                    writer
                        .write_err(format!("Error occurred {e}"))
                        .expect("failed to write to stderr");

                    StatusCode::WRITE_ERROR
                }
                Ok(code) => code,
            },
            Err(e) => {
                writer
                    .write_err(e.to_string())
                    .expect("failed to write to stderr");

                e.exit_code()
            }
        }
    }
}

#[macro_export]
macro_rules! assert_output_from_file_eq {
    ($expected_output_relative_file_path: expr, $actual_output_writer: expr) => {
        $crate::utils::compare_write_buffer_with_file(
            $expected_output_relative_file_path,
            $actual_output_writer,
        )
    };
}

#[macro_export]
macro_rules! assert_output_from_str_eq {
    ($expected_output: expr, $actual_output_writer: expr) => {
        $crate::utils::compare_write_buffer_with_string($expected_output, $actual_output_writer)
    };
}
