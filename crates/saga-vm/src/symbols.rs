//! The standard symbol table, generated from the live tables.
//!
//! Hosts can load a definitions file instead; this builder guarantees
//! the names, codes, and dispatch table can never drift apart, and
//! `write_codes` in the compiler crate renders it back out as the
//! canonical definitions file.

use crate::builtins::BUILTINS;
use crate::state::{
    LATCH_JUMP, LATCH_LEFT, LATCH_RIGHT, MOVE_CHARGE, MOVE_FOLLOW, MOVE_RETREAT,
};
use crate::vars::VARIABLE_NAMES;
use saga_types::{Op, SymbolKind, SymbolTable};

/// Build the full standard table: every builtin, variable, operator,
/// and the named constants scripts use as arguments.
pub fn standard_symbols() -> SymbolTable {
    let mut table = SymbolTable::new();
    for (code, def) in BUILTINS.iter().enumerate() {
        table.register(def.name, SymbolKind::Function, code as u32);
    }
    for (code, name) in VARIABLE_NAMES.iter().enumerate() {
        table.register(*name, SymbolKind::Variable, code as u32);
    }
    for op in [
        Op::Add,
        Op::Sub,
        Op::And,
        Op::Shr,
        Op::Shl,
        Op::Mul,
        Op::Div,
        Op::Mod,
    ] {
        table.register(op.glyph().to_string(), SymbolKind::Operator, op as u32);
    }
    for (name, value) in [
        ("LATCHLEFT", LATCH_LEFT),
        ("LATCHRIGHT", LATCH_RIGHT),
        ("LATCHJUMP", LATCH_JUMP),
    ] {
        table.register(name, SymbolKind::Constant, value);
    }
    for (name, value) in [
        ("MOVEFOLLOW", MOVE_FOLLOW),
        ("MOVECHARGE", MOVE_CHARGE),
        ("MOVERETREAT", MOVE_RETREAT),
    ] {
        table.register(name, SymbolKind::Constant, value as u32);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use saga_types::word::FN_END;

    #[test]
    fn table_matches_dispatch() {
        let table = standard_symbols();
        let end = table.lookup("End").unwrap();
        assert_eq!(end.kind, SymbolKind::Function);
        assert_eq!(end.value, FN_END);

        let tmpx = table.lookup("tmpx").unwrap();
        assert_eq!(tmpx.kind, SymbolKind::Variable);
        assert_eq!(tmpx.value, 0);

        let mul = table.lookup("*").unwrap();
        assert_eq!(mul.kind, SymbolKind::Operator);
        assert_eq!(mul.value, Op::Mul as u32);

        assert_eq!(table.lookup("LATCHJUMP").unwrap().kind, SymbolKind::Constant);
    }
}
