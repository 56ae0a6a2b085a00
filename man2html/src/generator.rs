//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Renders the document tree into an HTML fragment.

use std::sync::OnceLock;

use log::warn;
use regex::Regex;

use crate::buffer::Buffer;
use crate::macros::{macro_table, MacroTable};
use crate::parser::parse;
use crate::token::Token;
use crate::{Dialect, FormattingSettings};

/// Macros starting a new section
const SECTION_MACROS: [&str; 2] = ["SH", "Sh"];

fn regex_arguments() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r#""(.*?)"|\S+"#).unwrap())
}

fn regex_wrapping_quotes() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r#"^\s*?"([^"]*)"\s*?$"#).unwrap())
}

pub fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

/// Pops and closes [`tags`] down to the topmost [`target`]. Nothing happens
/// when [`target`] is not open.
pub fn close_tags_until(target: &str, tags: &mut Vec<&'static str>) -> String {
    let mut result = String::new();

    if !tags.iter().any(|tag| *tag == target) {
        return result;
    }

    while let Some(tag) = tags.pop() {
        result.push_str(&close_tag(tag));

        if tag == target {
            break;
        }
    }

    result
}

/// Closes and empties [`tags`].
pub fn close_all_tags(tags: &mut Vec<&'static str>) -> String {
    tags.drain(..).rev().map(close_tag).collect()
}

/// Wraps [`content`] in [`name`]; `a>b` nests `b` inside `a`.
pub fn generate_tag(name: &str, content: &str) -> String {
    let tags: Vec<&str> = name.split('>').take_while(|tag| !tag.is_empty()).collect();

    let opening: String = tags.iter().map(|tag| format!("<{tag}>")).collect();
    let closing: String = tags.iter().rev().map(|tag| close_tag(tag)).collect();

    format!("{opening}{content}{closing}")
}

/// Wraps every argument of [`content`], alternating between [`tag1`] and
/// [`tag2`] starting with [`tag1`].
pub fn generate_altern_tag(tag1: &str, tag2: &str, content: &str) -> String {
    parse_arguments(content)
        .iter()
        .enumerate()
        .map(|(i, arg)| generate_tag(if i % 2 == 0 { tag1 } else { tag2 }, arg))
        .collect()
}

/// Splits on white space; a double quoted run is a single argument.
pub fn parse_arguments(args: &str) -> Vec<String> {
    regex_arguments()
        .find_iter(args)
        .map(|arg| clean_quotes(arg.as_str()).trim().to_string())
        .collect()
}

/// Strips one layer of double quotes wrapping the whole [`text`].
pub fn clean_quotes(text: &str) -> String {
    regex_wrapping_quotes().replace(text, "$1").into_owned()
}

/// Closes whatever the document left open.
fn close_document(buffer: &mut Buffer) -> String {
    let mut result = close_all_tags(&mut buffer.font_modes);
    result.push_str(&close_all_tags(&mut buffer.active_font_modes));

    while let Some(list) = buffer.lists.pop() {
        if list.is_open {
            result.push_str("</span></li>");
        }
        result.push_str("</ul>");
    }

    if buffer.nf {
        buffer.nf = false;
        result.push_str("</div>");
    }

    result.push_str(&close_all_tags(&mut buffer.open_tags));
    result.push_str(&close_all_tags(&mut buffer.section_tags));

    result
}

/// `os date os` line printed when the header macros provided them.
fn footer(buffer: &Buffer) -> String {
    let os = if buffer.os.is_empty() {
        &buffer.source
    } else {
        &buffer.os
    };

    if os.is_empty() && buffer.date.is_empty() {
        return String::new();
    }

    format!(
        "<p><span>{os}</span><span>{}</span><span>{os}</span></p>",
        buffer.date
    )
}

/// Walks the tree of one document.
struct Renderer<'a> {
    macros: &'a MacroTable,
    buffer: Buffer,
}

impl Renderer<'_> {
    fn recurse(&mut self, tokens: &[Token]) -> String {
        let mut result = String::new();
        for token in tokens {
            self.reduce(&mut result, token);
        }
        result
    }

    fn reduce(&mut self, result: &mut String, token: &Token) {
        if !token.can_have_nodes() {
            result.push_str(&clean_quotes(&token.value));
            return;
        }

        if SECTION_MACROS.contains(&token.value.as_str()) {
            result.push_str(&close_all_tags(&mut self.buffer.font_modes));
            result.push_str(&close_all_tags(&mut self.buffer.open_tags));
        }

        let args = self.recurse(&token.children);

        match self.macros.get(token.value.as_str()) {
            Some(macro_fn) => result.push_str(&macro_fn(&mut self.buffer, &args, token)),
            None => {
                warn!("unsupported macro: {}", token.value);
                result.push_str(&args);
            }
        }
    }
}

/// Converts documents using the given initial style.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlGenerator {
    settings: FormattingSettings,
}

impl HtmlGenerator {
    pub fn new(settings: FormattingSettings) -> Self {
        Self { settings }
    }

    /// Converts [`source`] into an HTML fragment. Missing or empty source
    /// gives an empty string.
    pub fn generate<'a>(&self, source: impl Into<Option<&'a str>>, dialect: Dialect) -> String {
        let source = match source.into() {
            Some(source) if !source.is_empty() => source,
            _ => return String::new(),
        };

        let tree = parse(source, dialect);
        let mut renderer = Renderer {
            macros: macro_table(dialect),
            buffer: Buffer::new(self.settings),
        };

        let mut result = renderer.recurse(&tree);
        result.push_str(&close_document(&mut renderer.buffer));
        result.push_str(&footer(&renderer.buffer));

        result
    }
}
