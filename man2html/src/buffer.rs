//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Mutable state of a single conversion.

use crate::FormattingSettings;

/// Presentation settings changed by macros
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Section indentation, percent
    pub indent: f64,
    /// Font size, pixels
    pub font_size: i32,
    pub text_align: String,
    pub hyphens: String,
}

impl From<FormattingSettings> for Style {
    fn from(settings: FormattingSettings) -> Self {
        Self {
            indent: settings.indent,
            font_size: settings.font_size,
            text_align: String::new(),
            hyphens: String::new(),
        }
    }
}

/// One `Bl` list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListContext {
    pub flags: Vec<String>,
    /// Last number printed by an `-enum` list, 0 before the first item
    pub prev_ordinal: usize,
    /// Set once the first item was opened
    pub is_open: bool,
}

/// Bibliographic reference collected between `Rs` and `Re`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct References {
    pub authors: Vec<String>,
    pub book_title: String,
    pub date: String,
    pub publisher_name: String,
    pub journal_name: String,
    pub issue_number: String,
    pub optional_information: String,
    pub page_number: String,
    pub corporate: String,
    pub report_name: String,
    pub article_title: String,
    pub volume: String,
}

/// Appends [`value`] to [`field`], separating repeated values with a space.
pub fn append_field(field: &mut String, value: &str) {
    if !field.is_empty() {
        field.push(' ');
    }
    field.push_str(value);
}

impl References {
    /// Non-empty fields in output order, authors joined with "and".
    pub fn fields(&self) -> Vec<String> {
        let authors = self.authors.join(" and ");

        [
            &authors,
            &self.book_title,
            &self.date,
            &self.publisher_name,
            &self.journal_name,
            &self.issue_number,
            &self.optional_information,
            &self.page_number,
            &self.corporate,
            &self.report_name,
            &self.article_title,
            &self.volume,
        ]
        .into_iter()
        .filter(|field| !field.is_empty())
        .cloned()
        .collect()
    }
}

/// Render context shared by all macro functions of one conversion
#[derive(Debug, Clone)]
pub struct Buffer {
    pub title: String,
    pub section: String,
    pub date: String,
    pub source: String,
    pub manual: String,
    pub volume: String,
    pub os: String,
    pub name: String,
    pub style: Style,
    /// Block level tags
    pub open_tags: Vec<&'static str>,
    /// Inline font tags
    pub font_modes: Vec<&'static str>,
    /// Tags opened by `Bf`
    pub active_font_modes: Vec<&'static str>,
    /// Section wrappers
    pub section_tags: Vec<&'static str>,
    /// Innermost list last
    pub lists: Vec<ListContext>,
    pub references: References,
    pub function_type: Option<String>,
    pub function_name: Option<String>,
    /// Parameters collected by `Fa` while a `Fo` block is open
    pub function_args: Option<Vec<String>>,
    /// No-fill mode
    pub nf: bool,
}

impl Buffer {
    pub fn new(settings: FormattingSettings) -> Self {
        Self {
            title: String::new(),
            section: String::new(),
            date: String::new(),
            source: String::new(),
            manual: String::new(),
            volume: String::new(),
            os: String::new(),
            name: String::new(),
            style: Style::from(settings),
            open_tags: Vec::new(),
            font_modes: Vec::new(),
            active_font_modes: Vec::new(),
            section_tags: Vec::new(),
            lists: Vec::new(),
            references: References::default(),
            function_type: None,
            function_name: None,
            function_args: None,
            nf: false,
        }
    }

    /// Case insensitive check of the current section name
    pub fn is_inside_of_section(&self, section: &str) -> bool {
        self.section.eq_ignore_ascii_case(section)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(FormattingSettings::default())
    }
}
