//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// Lexeme classes produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind {
    /// `\"` or `\#` comment
    Comment,
    /// Line-initial `.Xx` request
    Macro,
    /// Callable mdoc macro found in the middle of a line
    InlineMacro,
    /// Newline, possibly preceded by horizontal white space
    Break,
    /// Plain text
    Text,
    /// Nothing at all
    #[default]
    Empty,
    /// Backslash-led escape sequence
    Escape,
}

impl TokenKind {
    /// Macros, inline macros and escapes own a scope of child tokens
    pub fn can_have_nodes(self) -> bool {
        matches!(
            self,
            TokenKind::Macro | TokenKind::InlineMacro | TokenKind::Escape
        )
    }
}

/// Single unit of the document tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
    /// Raw text; for macros the name without the leading dot
    pub value: String,
    pub kind: TokenKind,
    /// Tokens lexically inside this one. Always empty for leaves
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            value: value.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::Text)
    }

    pub fn can_have_nodes(&self) -> bool {
        self.kind.can_have_nodes()
    }

    /// Appends a child token. Leaves never receive children
    pub fn add_node(&mut self, token: Token) -> &mut Self {
        if self.can_have_nodes() {
            self.children.push(token);
        }
        self
    }

    /// Concatenates the value of [`token`] onto this one. An [`TokenKind::Empty`]
    /// token takes over the kind of the mixed token.
    pub fn mix(&mut self, token: &Token) -> &mut Self {
        self.value.push_str(&token.value);

        if self.kind == TokenKind::Empty {
            self.kind = token.kind;
        }

        self
    }
}
