// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod errors;
pub mod generator;
pub mod utils;

pub use generator::{render, write_units, GeneratedUnit, RepeatPlan};
