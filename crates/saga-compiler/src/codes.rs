//! Symbol definitions file: the names scripts may use.
//!
//! The file is a sequence of colon-introduced records, each a kind tag,
//! a decimal value, and the symbol name:
//!
//! ```text
//! :F 0 IfSpawned
//! :V 0 tmpx
//! :C 1 LATCHLEFT
//! :O 0 +
//! ```
//!
//! Loading is deliberately lenient — a malformed record is logged and
//! skipped, never fatal. The table is loaded once at startup and frozen.

use saga_types::{SymbolKind, SymbolTable, MAX_SYMBOL_NAME};

/// Parse a definitions file into a symbol table.
pub fn parse_codes(text: &str) -> SymbolTable {
    let mut table = SymbolTable::new();
    for record in text.split(':').skip(1) {
        let record = record.trim();
        if record.is_empty() {
            continue;
        }
        match parse_record(record) {
            Some((kind, value, name)) => table.register(name, kind, value),
            None => tracing::warn!(record, "skipping malformed symbol record"),
        }
    }
    table
}

fn parse_record(record: &str) -> Option<(SymbolKind, u32, &str)> {
    let mut fields = record.split_whitespace();
    let first = fields.next()?;

    // The kind tag is either its own field or glued onto the value.
    let (kind_char, value_text) = if first.len() == 1 {
        (first.chars().next()?, fields.next()?)
    } else {
        let mut chars = first.chars();
        (chars.next()?, chars.as_str())
    };

    let kind = SymbolKind::from_tag(kind_char)?;
    let value: u32 = value_text.parse().ok()?;
    let name = fields.next()?;
    if name.len() > MAX_SYMBOL_NAME || fields.next().is_some() {
        return None;
    }
    Some((kind, value, name))
}

/// Render a symbol table back into the definitions format.
pub fn write_codes(table: &SymbolTable) -> String {
    let mut out = String::new();
    for symbol in table.iter() {
        out.push_str(&format!(
            ":{} {} {}\n",
            symbol.kind.tag(),
            symbol.value,
            symbol.name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records() {
        let table = parse_codes(":F 0 IfSpawned\n:V 3 tmpturn\n:C 2 LATCHRIGHT\n:O 5 *\n");
        assert_eq!(table.len(), 4);
        let sym = table.lookup("tmpturn").unwrap();
        assert_eq!(sym.kind, SymbolKind::Variable);
        assert_eq!(sym.value, 3);
        assert_eq!(table.lookup("*").unwrap().kind, SymbolKind::Operator);
    }

    #[test]
    fn accepts_glued_kind_and_value() {
        let table = parse_codes(":C255 MAXSTATE");
        assert_eq!(table.lookup("MAXSTATE").unwrap().value, 255);
    }

    #[test]
    fn skips_malformed_records() {
        let table = parse_codes(":F 0 IfSpawned\n:Z 1 what\n:F one IfBroken\n:F 2\n:F 3 Ok");
        assert_eq!(table.len(), 2);
        assert!(table.lookup("Ok").is_some());
    }

    #[test]
    fn write_parse_round_trip() {
        let mut table = SymbolTable::new();
        table.register("IfTimeOut", SymbolKind::Function, 1);
        table.register("selfx", SymbolKind::Variable, 6);
        table.register("+", SymbolKind::Operator, 0);

        let text = write_codes(&table);
        let reparsed = parse_codes(&text);
        assert_eq!(reparsed.len(), 3);
        assert_eq!(reparsed.lookup("selfx").unwrap().value, 6);
    }
}
