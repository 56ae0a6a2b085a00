//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Low level roff requests and escapes shared by both dialects.

use std::sync::OnceLock;

use regex::Regex;

use super::text_production::special_char;
use super::MacroTable;
use crate::buffer::Buffer;
use crate::generator::{close_all_tags, close_tags_until, generate_tag, parse_arguments};
use crate::token::Token;

fn regex_size_change() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"^([-+]?\d)(.*)$").unwrap())
}

/// Maps a roff font name onto the tag rendering it.
pub fn font_mapping(font: &str) -> Option<&'static str> {
    let tag = match font {
        "B" | "3" => "strong",
        "C" | "CW" => "code",
        "I" | "2" => "i",
        "R" | "P" | "1" => "span",
        "S" => "small",
        _ => return None,
    };

    Some(tag)
}

pub fn register(table: &mut MacroTable) {
    table.insert("br", br);
    table.insert("sp", sp);
    table.insert("ss", ss);
    table.insert("ft", ft);
    table.insert("vs", vs);
    table.insert("nf", nf);
    table.insert("fi", fi);
    table.insert("in", indent);
    table.insert("ul", underline);
    table.insert("cu", underline);
    table.insert("nh", nh);
    table.insert("ad", ad);

    // Conditionals, definitions and page control are recognized only
    for name in ["if", "ie", "el", r"\}", "de", "ne", ".", ""] {
        table.insert(name, ignore);
    }

    table.insert(r"\\", backslash);
    table.insert(r"\e", backslash);
    table.insert(r"\-", |_, _, _| "&minus;".to_string());
    table.insert(r"\+", |_, _, _| "&plus;".to_string());
    table.insert(r"\f", font_escape);
    table.insert(r"\s", size_escape);
    table.insert(r"\(", special_char_escape);
    table.insert("\\", |_, _, _| "&nbsp;".to_string());
    table.insert(r"\~", |_, _, _| "&nbsp;".to_string());
    table.insert(r"\0", |_, _, _| "&nbsp;".to_string());
    table.insert(r"\|", |_, _, _| "&thinsp;".to_string());
    table.insert(r"\^", |_, _, _| "&hairsp;".to_string());
    for name in [r"\&", r"\%", r"\)", r"\:", r"\m", r"\d", r"\u"] {
        table.insert(name, ignore);
    }
}

fn ignore(_: &mut Buffer, _: &str, _: &Token) -> String {
    String::new()
}

fn br(_: &mut Buffer, _: &str, _: &Token) -> String {
    "<br>".to_string()
}

fn sp(_: &mut Buffer, args: &str, _: &Token) -> String {
    let spacing = match args.trim() {
        "" => "2",
        spacing => spacing,
    };

    format!("<hr style=\"margin-top:{spacing}em;visibility:hidden;\">")
}

fn ss(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let size = args.trim().parse::<f64>().unwrap_or(0.0);
    buffer.open_tags.push("span");

    format!("<span style=\"word-spacing:{}em;\">", size / 36.0)
}

/// Closes the current font and opens [`args`] unless it is roman.
pub fn ft(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let mut result = close_all_tags(&mut buffer.font_modes);

    let font = parse_arguments(args).into_iter().next().unwrap_or_default();
    match font_mapping(&font) {
        Some("span") | None => {}
        Some(tag) => {
            result.push_str(&format!("<{tag}> "));
            buffer.font_modes.push(tag);
        }
    }

    result
}

fn vs(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let spacing = args.trim().parse::<f64>().unwrap_or(12.0);
    buffer.open_tags.push("section");

    format!("<section style=\"line-height:{}em;\">", spacing / 12.0)
}

fn nf(buffer: &mut Buffer, _: &str, _: &Token) -> String {
    if buffer.nf {
        return String::new();
    }
    buffer.nf = true;

    "<div style=\"white-space: pre; display: block;\">".to_string()
}

fn fi(buffer: &mut Buffer, _: &str, _: &Token) -> String {
    if buffer.nf {
        buffer.nf = false;
        "</div>".to_string()
    } else {
        String::new()
    }
}

fn indent(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let indent = args.trim().parse::<f64>().unwrap_or(3.0);
    buffer.open_tags.push("section");

    format!("<section style=\"margin-left:{}em;\">", indent / 3.0)
}

fn underline(buffer: &mut Buffer, _: &str, token: &Token) -> String {
    ft(buffer, "I", token)
}

fn nh(buffer: &mut Buffer, _: &str, _: &Token) -> String {
    buffer.style.hyphens = "none".to_string();
    String::new()
}

fn ad(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    buffer.style.text_align = args.trim().to_string();
    String::new()
}

fn backslash(_: &mut Buffer, _: &str, _: &Token) -> String {
    "\\".to_string()
}

/// Splits the font name off a `\f` argument: `(xx` is a two character
/// name, `[name]` runs up to the closing bracket, anything else is a single
/// character.
fn split_font_name(args: &str) -> (&str, &str) {
    if let Some(rest) = args.strip_prefix('(') {
        let split = rest.char_indices().nth(2).map_or(rest.len(), |(i, _)| i);
        rest.split_at(split)
    } else if let Some(rest) = args.strip_prefix('[') {
        rest.split_once(']').unwrap_or((rest, ""))
    } else {
        let split = args.char_indices().nth(1).map_or(args.len(), |(i, _)| i);
        args.split_at(split)
    }
}

/// `\fX`, `\f(XX` and `\f[name]` switch the font and print the rest of the
/// word.
fn font_escape(buffer: &mut Buffer, args: &str, token: &Token) -> String {
    let (font, rest) = split_font_name(args.trim());

    format!("{} {} ", ft(buffer, font, token), rest)
}

/// `\s+N` and `\s-N` change the font size by N pixels.
fn size_escape(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let (delta, text) = match regex_size_change().captures(args) {
        Some(caps) => (
            caps[1].parse::<i32>().unwrap_or(0),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (0, args),
    };

    buffer.style.font_size = buffer.style.font_size.saturating_add(delta);
    buffer.open_tags.push("span");

    format!(
        "<span style=\"font-size:{}px;\">{}",
        buffer.style.font_size, text
    )
}

/// `\(xx` prints a named character followed by the rest of the word.
fn special_char_escape(_: &mut Buffer, args: &str, _: &Token) -> String {
    let args = args.trim();
    let split = args.char_indices().nth(2).map_or(args.len(), |(i, _)| i);
    let (name, rest) = args.split_at(split);

    match special_char(name) {
        Some(html) => format!("{html}{rest}"),
        None => rest.to_string(),
    }
}

/// Opens a new top level section. Every open tag is closed first.
pub fn section_heading(buffer: &mut Buffer, args: &str) -> String {
    let mut result = close_all_tags(&mut buffer.font_modes);
    result.push_str(&close_all_tags(&mut buffer.open_tags));
    result.push_str(&close_all_tags(&mut buffer.section_tags));

    buffer.section = args.trim().to_string();
    buffer.section_tags.push("section");

    result.push_str(&generate_tag("h2", args));
    result.push_str(&format!(
        "<section style=\"margin-left:{}%;\">",
        buffer.style.indent
    ));

    result
}

/// Paragraph break: fonts and blocks up to the previous [`tag`] are closed.
pub fn paragraph(buffer: &mut Buffer, tag: &'static str) -> String {
    let mut result = close_all_tags(&mut buffer.font_modes);
    result.push_str(&close_tags_until(tag, &mut buffer.open_tags));
    buffer.open_tags.push(tag);

    result
}
