//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::string::FromUtf8Error;

/// Common errors that might occur outside of the conversion itself.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Can't read input; write output
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Input is not UTF-8
    #[error("invalid input: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Integer option value can't be parsed
    #[error("parsing error: {0}")]
    ParseInt(#[from] ParseIntError),

    /// Float option value can't be parsed
    #[error("parsing error: {0}")]
    ParseFloat(#[from] ParseFloatError),

    /// Macro package name is neither `man` nor `mdoc`
    #[error("unknown macro package: {0}")]
    UnknownDialect(String),

    /// Configuration file was not found
    #[error("configuration file was not found: {0}")]
    ConfigFileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
