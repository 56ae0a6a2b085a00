//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{Error, Result};
use crate::{Dialect, FormattingSettings};

/// # Man2HtmlConfig
///
/// Parsed configuration file
///
/// ## Fields:
/// * `dialect`
/// * `output_options`
#[derive(Debug, Default)]
pub struct Man2HtmlConfig {
    pub dialect: Option<Dialect>,
    pub output_options: HashMap<String, Option<String>>,
}

/// # parse_config_file
///
/// Parses man2html configuration file.
///
/// # Params:
/// * path - path to configuration file
///
/// # Errors:
/// * io
/// * unknown dialect name
pub fn parse_config_file(path: &Path) -> Result<Man2HtmlConfig> {
    if !path.exists() {
        return Err(Error::ConfigFileNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut conf = Man2HtmlConfig::default();

    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let directive = match parts.next() {
            Some(d) => d,
            None => continue,
        };

        match directive {
            "dialect" => {
                if let Some(name) = parts.next() {
                    conf.dialect = Some(name.parse()?);
                }
            }
            "output" => {
                if let Some(option_name) = parts.next() {
                    let value = parts.next().map(|s| s.to_string());
                    conf.output_options.insert(option_name.to_string(), value);
                }
            }
            _ => continue,
        }
    }

    Ok(conf)
}

/// Initial style taken from the `output` options of [`config`].
///
/// # Errors
///
/// [Error] if a numeric option can't be parsed.
pub fn formatting_settings(config: &Man2HtmlConfig) -> Result<FormattingSettings> {
    let mut settings = FormattingSettings::default();

    if let Some(Some(val_str)) = config.output_options.get("indent") {
        settings.indent = val_str.parse::<f64>()?;
    }

    if let Some(Some(val_str)) = config.output_options.get("fontsize") {
        settings.font_size = val_str.parse::<i32>()?;
    }

    Ok(settings)
}
