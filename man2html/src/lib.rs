//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Conversion of man(7) and mdoc(7) manual pages into HTML fragments.
//!
//! The source is scanned into tokens, parsed into a tree of macros and
//! rendered through the macro table of the selected [`Dialect`].

use std::{
    fmt::Display,
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
    str::FromStr,
};

use clap::{Parser, ValueEnum};

use config::{formatting_settings, parse_config_file, Man2HtmlConfig};
use error::{Error, Result};
pub use generator::HtmlGenerator;

pub mod buffer;
pub mod config;
pub mod error;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod token;

/// Macro package the source is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Dialect {
    /// man(7)
    #[value(alias = "an")]
    Man,
    /// mdoc(7)
    #[default]
    #[value(alias = "doc")]
    Mdoc,
}

impl Dialect {
    /// mdoc pages carry a `.Dd` prologue macro, man pages don't.
    pub fn detect(source: &str) -> Self {
        if source.contains(".Dd") {
            Dialect::Mdoc
        } else {
            Dialect::Man
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "man" | "an" => Ok(Dialect::Man),
            "mdoc" | "doc" => Ok(Dialect::Mdoc),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Man => write!(f, "man"),
            Dialect::Mdoc => write!(f, "mdoc"),
        }
    }
}

/// Initial style of generated documents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattingSettings {
    /// Section indentation, percent
    pub indent: f64,
    /// Base font size, pixels
    pub font_size: i32,
}

impl Default for FormattingSettings {
    fn default() -> Self {
        Self {
            indent: 8.0,
            font_size: 16,
        }
    }
}

/// Converts [`source`] written in [`dialect`] into an HTML fragment using
/// the default style.
pub fn generate<'a>(source: impl Into<Option<&'a str>>, dialect: Dialect) -> String {
    HtmlGenerator::new(FormattingSettings::default()).generate(source, dialect)
}

/// man2html - convert man and mdoc manual pages to HTML
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Macro package of the input, guessed from the source when omitted
    #[arg(short = 'm', long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Use the specified configuration file
    #[arg(short = 'C', long)]
    pub config_file: Option<PathBuf>,

    /// Manual pages to convert, standard input when empty
    pub files: Vec<PathBuf>,
}

fn read_source(path: Option<&PathBuf>) -> Result<String> {
    let mut bytes = Vec::new();

    match path {
        Some(path) if path.as_os_str() != "-" => {
            File::open(path)?.read_to_end(&mut bytes)?;
        }
        _ => {
            io::stdin().lock().read_to_end(&mut bytes)?;
        }
    }

    Ok(String::from_utf8(bytes)?)
}

/// Converts every input of [`args`] and writes the fragments to [`stdout`].
pub fn run(mut stdout: impl Write, args: Args) -> Result<()> {
    let config = match &args.config_file {
        Some(path) => parse_config_file(path)?,
        None => Man2HtmlConfig::default(),
    };
    let generator = HtmlGenerator::new(formatting_settings(&config)?);

    let inputs: Vec<Option<&PathBuf>> = if args.files.is_empty() {
        vec![None]
    } else {
        args.files.iter().map(Some).collect()
    };

    for input in inputs {
        let source = read_source(input)?;
        let dialect = args
            .dialect
            .or(config.dialect)
            .unwrap_or_else(|| Dialect::detect(&source));

        log::debug!("converting {:?} as {}", input, dialect);

        let html = generator.generate(source.as_str(), dialect);
        writeln!(stdout, "{html}")?;
    }

    stdout.flush()?;
    Ok(())
}
