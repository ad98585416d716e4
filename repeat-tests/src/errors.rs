// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error when writing {0}")]
    IoError(#[from] std::io::Error),
    #[error("Formatting error when writing {0}")]
    FormatError(#[from] std::fmt::Error),
}

pub type Result<R> = std::result::Result<R, Error>;
