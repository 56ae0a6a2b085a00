//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Macros of the man(7) package.

use super::defaults::{paragraph, section_heading};
use super::MacroTable;
use crate::buffer::Buffer;
use crate::generator::{
    close_all_tags, close_tags_until, generate_altern_tag, generate_tag, parse_arguments,
};
use crate::token::Token;

pub fn register(table: &mut MacroTable) {
    table.insert("TH", th);
    table.insert("SH", |buffer, args, _| section_heading(buffer, args));
    table.insert("SS", |_, args, _| generate_tag("h3", args));

    table.insert("B", |_, args, _| generate_tag("strong", args));
    table.insert("I", |_, args, _| generate_tag("i", args));
    table.insert("SM", |_, args, _| generate_tag("small", args));
    table.insert("BI", |_, args, _| generate_altern_tag("strong", "i", args));
    table.insert("BR", |_, args, _| generate_altern_tag("strong", "span", args));
    table.insert("IB", |_, args, _| generate_altern_tag("i", "strong", args));
    table.insert("IR", |_, args, _| generate_altern_tag("i", "span", args));
    table.insert("RB", |_, args, _| generate_altern_tag("span", "strong", args));
    table.insert("RI", |_, args, _| generate_altern_tag("span", "i", args));
    table.insert("SB", |_, args, _| generate_altern_tag("small", "strong", args));

    for name in ["P", "LP", "PP"] {
        table.insert(name, p);
    }
    table.insert("IP", ip);
    table.insert("RS", rs);
    table.insert("RE", |buffer, _, _| close_tags_until("section", &mut buffer.open_tags));
}

/// `.TH title section [date [source [manual]]]`
fn th(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let mut args = parse_arguments(args).into_iter();

    buffer.title = args.next().unwrap_or_default();
    buffer.section = args.next().unwrap_or_default();
    buffer.date = args.next().unwrap_or_default();
    buffer.source = args.next().unwrap_or_default();
    buffer.manual = args.next().unwrap_or_default();

    let title = format!("{}({})", buffer.title, buffer.section);

    format!(
        "<p><span>{title}</span><span>{}</span><span>{title}</span></p>",
        buffer.manual
    )
}

fn p(buffer: &mut Buffer, _: &str, _: &Token) -> String {
    paragraph(buffer, "div") + "<div style=\"margin-bottom: 2%;\">"
}

/// `.IP [tag [indent]]`
fn ip(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let args = parse_arguments(args);
    let tag = args.first().map(String::as_str).unwrap_or_default();
    let indent = match args.get(1) {
        Some(indent) => indent.clone(),
        None => buffer.style.indent.to_string(),
    };

    let mut result = close_all_tags(&mut buffer.font_modes);
    result.push_str(&close_tags_until("div", &mut buffer.open_tags));

    result.push_str("<div>");
    result.push_str("<dl style=\"margin-bottom: 0;margin-top: 0;\">");
    result.push_str(&format!("<dt style=\"float: left; clear: left;\">{tag}</dt>"));
    result.push_str(&format!("<dd style=\" margin-left: {indent}%;\">"));

    buffer.open_tags.extend(["div", "dl", "dd"]);

    result
}

fn rs(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let indent = match args.trim() {
        "" => buffer.style.indent.to_string(),
        indent => indent.to_string(),
    };

    let mut result = close_all_tags(&mut buffer.font_modes);
    result.push_str(&format!("<section style=\"margin-left:{indent}%\">"));
    buffer.open_tags.push("section");

    result
}
