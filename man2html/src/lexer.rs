//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Splits roff source into classified [`Token`]s.

use std::collections::VecDeque;
use std::sync::OnceLock;

use log::trace;
use regex::{Captures, Regex};

use crate::macros::is_callable;
use crate::token::{Token, TokenKind};
use crate::Dialect;

/// Newlines, runs of white space and a dot-led macro at the very start of
/// the source.
fn regex_lexeme() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"\n|\s+|^\.\s+\S+").unwrap())
}

/// Every two character escape except `\"`.
fn regex_escape() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r#"\\[^"]"#).unwrap())
}

fn regex_comment() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r#"(\.)?\\"|\\#"#).unwrap())
}

fn regex_new_line() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"[ \t]*\n").unwrap())
}

/// Escapes angle brackets and pads every escape sequence with spaces, so
/// `\fBbold` splits into `\f` and `Bbold`. An escaped newline joins the two
/// lines.
pub fn clean_source(source: &str) -> String {
    regex_escape()
        .replace_all(source, |caps: &Captures| match &caps[0] {
            "\\\n" => String::new(),
            escape => format!(" {escape} "),
        })
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Splits [`text`] keeping the separators. Pieces between two adjacent
/// separators are kept as empty strings.
pub fn split_lexemes(text: &str) -> Vec<&str> {
    let mut lexemes = Vec::new();
    let mut last = 0;

    for m in regex_lexeme().find_iter(text) {
        lexemes.push(&text[last..m.start()]);
        lexemes.push(m.as_str());
        last = m.end();
    }
    lexemes.push(&text[last..]);

    lexemes
}

/// Assigns a kind to a raw lexeme. The first matching rule wins.
pub fn classify(lexeme: &str, dialect: Dialect) -> TokenKind {
    if regex_comment().is_match(lexeme) {
        TokenKind::Comment
    } else if lexeme.starts_with('.') {
        TokenKind::Macro
    } else if dialect == Dialect::Mdoc && is_callable(lexeme.trim()) {
        TokenKind::InlineMacro
    } else if regex_new_line().is_match(lexeme) {
        TokenKind::Break
    } else if lexeme.starts_with('\\') {
        TokenKind::Escape
    } else {
        TokenKind::Text
    }
}

/// Token stream over a single source text.
#[derive(Debug)]
pub struct Lexer {
    lexemes: VecDeque<String>,
    dialect: Dialect,
    /// Position of the last produced token, for trace logs
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str, dialect: Dialect) -> Self {
        let cleaned = clean_source(source);
        let lexemes = split_lexemes(&cleaned)
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            lexemes,
            dialect,
            line: 1,
            col: 0,
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let lexeme = self.lexemes.pop_front()?;

        match lexeme.rfind('\n') {
            Some(pos) => {
                self.line += lexeme.matches('\n').count();
                self.col = lexeme.len() - pos - 1;
            }
            None => self.col += lexeme.len(),
        }

        let kind = classify(&lexeme, self.dialect);
        trace!("{}:{}: {:?} {:?}", self.line, self.col, kind, lexeme);

        Some(Token::new(lexeme, kind))
    }
}
