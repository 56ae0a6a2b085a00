//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Builds the document tree out of the token stream.
//!
//! A newline always returns to the document root, so a macro owns the
//! rest of its own line only. Macros and inline macros opened on the
//! current line are kept on a stack and folded into their parents when the
//! line ends.

use log::debug;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::Dialect;

/// Escapes that consume the following lexeme as their argument
pub const ESCAPES_WITH_ARGUMENTS: [&str; 4] = [r"\f", r"\s", r"\m", r"\("];

fn macro_name(value: &str) -> String {
    value
        .strip_prefix('.')
        .unwrap_or(value)
        .trim_start()
        .to_string()
}

pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    tree: Vec<Token>,
    /// Scopes opened on the current line, innermost last
    open: Vec<Token>,
    /// Set by comments: everything until the end of line is dropped
    ghost: bool,
    /// Kind of the last token placed in a scope
    last: TokenKind,
}

impl Parser<Lexer> {
    pub fn new(source: &str, dialect: Dialect) -> Self {
        Self::from_tokens(Lexer::new(source, dialect))
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn from_tokens(tokens: I) -> Self {
        Self {
            tokens,
            tree: Vec::new(),
            open: Vec::new(),
            ghost: false,
            last: TokenKind::Break,
        }
    }

    /// Consumes the token stream and returns the root list.
    pub fn parse(mut self) -> Vec<Token> {
        while let Some(token) = self.tokens.next() {
            match token.kind {
                TokenKind::Macro => self.handle_macro(token),
                TokenKind::InlineMacro => self.open_scope(token),
                TokenKind::Text => self.handle_text(token),
                TokenKind::Escape => self.handle_escape(token),
                TokenKind::Break => self.handle_break(),
                TokenKind::Comment | TokenKind::Empty => self.ignore(token.kind),
            }
        }
        self.close_scopes();

        self.tree
    }

    fn scope(&mut self) -> &mut Vec<Token> {
        match self.open.last_mut() {
            Some(token) => &mut token.children,
            None => &mut self.tree,
        }
    }

    fn add_to_scope(&mut self, token: Token) {
        self.last = token.kind;
        if !self.ghost {
            self.scope().push(token);
        }
    }

    fn handle_macro(&mut self, mut token: Token) {
        if self.last == TokenKind::Break {
            token.value = macro_name(&token.value);
            self.open_scope(token);
        } else {
            // A dot in the middle of a line, e.g. the end of a sentence
            self.handle_text(token);
        }
    }

    fn open_scope(&mut self, token: Token) {
        self.last = token.kind;
        if !self.ghost {
            self.open.push(token);
        }
    }

    fn handle_text(&mut self, mut token: Token) {
        if token.value.is_empty() {
            return;
        }
        token.kind = TokenKind::Text;

        if self.last == TokenKind::Text {
            if !self.ghost {
                if let Some(last) = self.scope().last_mut() {
                    last.mix(&token);
                }
            }
            return;
        }

        if self.last.can_have_nodes() {
            token.value = token.value.trim().to_string();
        }
        self.add_to_scope(token);
    }

    fn handle_escape(&mut self, mut token: Token) {
        if ESCAPES_WITH_ARGUMENTS.contains(&token.value.as_str()) {
            self.tokens.next();
            let mut argument = self.tokens.next().unwrap_or_default();
            argument.kind = TokenKind::Text;
            token.add_node(argument);
        }

        self.add_to_scope(token);
    }

    fn handle_break(&mut self) {
        self.close_scopes();
        self.ghost = false;

        if self.last == TokenKind::Break {
            debug!("blank line, adding br");
            self.tree.push(Token::new("br", TokenKind::Macro));
        } else {
            self.tree.push(Token::text("\n"));
        }

        self.last = TokenKind::Break;
    }

    fn ignore(&mut self, kind: TokenKind) {
        self.ghost = true;
        self.last = kind;
    }

    /// Folds the scopes opened on the current line into their parents.
    fn close_scopes(&mut self) {
        while let Some(token) = self.open.pop() {
            self.scope().push(token);
        }
    }
}

/// Scans and parses [`source`] in one go.
pub fn parse(source: &str, dialect: Dialect) -> Vec<Token> {
    Parser::new(source, dialect).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: &str, kind: TokenKind, children: Vec<Token>) -> Token {
        Token {
            value: value.to_string(),
            kind,
            children,
        }
    }

    fn text(value: &str) -> Token {
        Token::text(value)
    }

    fn newline() -> Token {
        Token::text("\n")
    }

    #[test]
    fn macro_collects_rest_of_line() {
        let tree = parse(".B bold text\nplain", Dialect::Man);
        assert_eq!(
            tree,
            vec![
                node("B", TokenKind::Macro, vec![text("bold text")]),
                newline(),
                text("plain"),
            ]
        );
    }

    #[test]
    fn inline_macros_nest() {
        let tree = parse(".Op Fl v\n", Dialect::Mdoc);
        assert_eq!(
            tree,
            vec![
                node(
                    "Op",
                    TokenKind::Macro,
                    vec![text(""), node("Fl", TokenKind::InlineMacro, vec![text("v")])]
                ),
                newline(),
            ]
        );
    }

    #[test]
    fn dot_inside_line_is_text() {
        let tree = parse("end .of sentence", Dialect::Man);
        assert_eq!(tree, vec![text("end .of sentence")]);
    }

    #[test]
    fn blank_line_is_single_br() {
        let tree = parse("a\n\nb", Dialect::Man);
        let brs = tree
            .iter()
            .filter(|t| t.kind == TokenKind::Macro && t.value == "br")
            .count();
        assert_eq!(brs, 1);
        assert_eq!(
            tree,
            vec![
                text("a"),
                newline(),
                node("br", TokenKind::Macro, vec![]),
                text("b"),
            ]
        );
    }

    #[test]
    fn comments_drop_the_rest_of_line() {
        let tree = parse(".\\\" a comment .B x\nvisible", Dialect::Man);
        assert_eq!(tree, vec![newline(), text("visible")]);
    }

    #[test]
    fn escape_takes_argument() {
        let tree = parse(r"\fBbold", Dialect::Man);
        assert_eq!(
            tree,
            vec![
                text(" "),
                node(r"\f", TokenKind::Escape, vec![text("Bbold")]),
            ]
        );
    }

    #[test]
    fn escape_at_end_of_input() {
        let tree = Parser::from_tokens(vec![Token::new(r"\f", TokenKind::Escape)].into_iter())
            .parse();
        assert_eq!(tree, vec![node(r"\f", TokenKind::Escape, vec![text("")])]);
    }

    #[test]
    fn leaves_have_no_children() {
        fn check(tokens: &[Token]) {
            for token in tokens {
                if !token.can_have_nodes() {
                    assert!(token.children.is_empty(), "{token:?}");
                }
                check(&token.children);
            }
        }
        check(&parse(
            ".Sh NAME\n.Nm ls\n.Nd list \\fBfiles\\fR\n\n.Bl -bullet\n.It\nitem\n.El\n",
            Dialect::Mdoc,
        ));
    }
}
