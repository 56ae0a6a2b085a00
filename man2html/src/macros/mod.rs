//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Macro name to render function tables.
//!
//! Every dialect table is the shared primitives overlaid with the dialect's
//! own macros, built once and never mutated afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::buffer::Buffer;
use crate::token::Token;
use crate::Dialect;

pub mod an;
pub mod defaults;
pub mod doc;
pub mod text_production;

/// Receives the rendered children of the macro, the macro token itself and
/// the render context. An empty string renders nothing.
pub type MacroFn = fn(&mut Buffer, &str, &Token) -> String;

pub type MacroTable = HashMap<&'static str, MacroFn>;

/// mdoc macros that may be called in the middle of a line
pub const CALLABLE_MACROS: &[&str] = &[
    "Ac", "Ao", "Bc", "Bo", "Brc", "Bro", "Dc", "Do", "Ec", "Eo", "Fc", "Oc", "Oo", "Pc", "Po",
    "Qc", "Qo", "Sc", "So", "Xc", "Xo", "Aq", "Bq", "Brq", "Dq", "Op", "Pq", "Ql", "Qq", "Sq",
    "Vt", "Ta", "Ad", "An", "Ap", "Ar", "At", "Bsx", "Bx", "Cd", "Cm", "Dv", "Dx", "Em", "Er",
    "Ev", "Fa", "Fl", "Fn", "Ft", "Fx", "Ic", "Li", "Lk", "Ms", "Mt", "Nm", "Ns", "Nx", "Ox",
    "Pa", "Pf", "Sx", "Sy", "Tn", "Ux", "Va", "Xr",
];

pub fn is_callable(name: &str) -> bool {
    CALLABLE_MACROS.contains(&name)
}

fn build(register: fn(&mut MacroTable)) -> MacroTable {
    let mut table = MacroTable::with_capacity(200);
    defaults::register(&mut table);
    register(&mut table);
    table
}

/// Table of the given dialect
pub fn macro_table(dialect: Dialect) -> &'static MacroTable {
    static MAN: OnceLock<MacroTable> = OnceLock::new();
    static MDOC: OnceLock<MacroTable> = OnceLock::new();

    match dialect {
        Dialect::Man => MAN.get_or_init(|| build(an::register)),
        Dialect::Mdoc => MDOC.get_or_init(|| build(doc::register)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialects_share_primitives() {
        for dialect in [Dialect::Man, Dialect::Mdoc] {
            let table = macro_table(dialect);
            for name in ["br", "ft", "nf", "fi", r"\f", r"\-", "if", "de"] {
                assert!(table.contains_key(name), "{dialect}: {name}");
            }
        }
    }

    #[test]
    fn dialect_macros_stay_apart() {
        assert!(macro_table(Dialect::Man).contains_key("TH"));
        assert!(!macro_table(Dialect::Man).contains_key("Dt"));
        assert!(macro_table(Dialect::Mdoc).contains_key("Dt"));
        assert!(!macro_table(Dialect::Mdoc).contains_key("TH"));
    }

    #[test]
    fn callable_macros_are_mdoc_macros() {
        let table = macro_table(Dialect::Mdoc);
        for name in CALLABLE_MACROS {
            assert!(table.contains_key(name), "{name}");
        }
        assert!(is_callable("Fl"));
        assert!(!is_callable("Sh"));
    }
}
