//! Word tokenizer and symbol resolver.
//!
//! Given a normalized line and a cursor, extract the next
//! space-delimited word and classify it: decimal literal, IDSZ tag,
//! or symbol-table entry. Unresolved words are recorded as diagnostics
//! and compilation continues — the word contributes a zero operand.

use saga_types::{Diagnostic, DiagnosticKind, Diagnostics, Idsz, SymbolKind, SymbolTable};

/// Result of resolving one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Inline literal: a decimal number, an IDSZ tag, or a registered
    /// constant. Compiles with the literal marker bit.
    Constant(u32),
    /// A non-constant symbol: function, variable, or operator.
    Symbol { kind: SymbolKind, value: u32 },
    /// Word resolved to nothing; a zero operand stands in for it.
    NoMatch,
    /// No word left on the line.
    EndOfLine,
}

impl Resolution {
    /// The operand value this resolution contributes.
    pub fn value(self) -> u32 {
        match self {
            Resolution::Constant(v) => v,
            Resolution::Symbol { value, .. } => value,
            Resolution::NoMatch | Resolution::EndOfLine => 0,
        }
    }

    pub fn is_constant(self) -> bool {
        matches!(self, Resolution::Constant(_))
    }
}

/// Resolve the next word of `line` starting at byte `cursor`.
///
/// Returns the resolution and the cursor just past the word.
pub fn next_token(
    line: &str,
    cursor: usize,
    symbols: &SymbolTable,
    file: &str,
    line_no: u32,
    diagnostics: &mut Diagnostics,
) -> (Resolution, usize) {
    let bytes = line.as_bytes();
    let mut pos = cursor;
    while pos < bytes.len() && bytes[pos] == b' ' {
        pos += 1;
    }
    if pos >= bytes.len() {
        return (Resolution::EndOfLine, pos);
    }

    let start = pos;
    while pos < bytes.len() && bytes[pos] != b' ' {
        pos += 1;
    }
    let word = &line[start..pos];

    (classify(word, symbols, file, line_no, diagnostics), pos)
}

fn classify(
    word: &str,
    symbols: &SymbolTable,
    file: &str,
    line_no: u32,
    diagnostics: &mut Diagnostics,
) -> Resolution {
    let first = word.as_bytes()[0];

    if first.is_ascii_digit() {
        return Resolution::Constant(parse_number(word));
    }

    if first == b'[' {
        if let Some(idsz) = Idsz::parse(word) {
            return Resolution::Constant(idsz.0);
        }
        // Malformed tag: fall through to the unresolved path below.
    } else if let Some(symbol) = symbols.lookup(word) {
        return match symbol.kind {
            SymbolKind::Constant => Resolution::Constant(symbol.value),
            kind => Resolution::Symbol {
                kind,
                value: symbol.value,
            },
        };
    }

    // A bare `=` is the assignment separator, not an error.
    if word == "=" {
        return Resolution::NoMatch;
    }

    tracing::warn!(file, line = line_no, word, "undefined symbol");
    diagnostics.push(Diagnostic {
        file: file.to_string(),
        line: line_no,
        kind: DiagnosticKind::UnresolvedSymbol,
        message: format!("{word} undefined"),
    });
    Resolution::NoMatch
}

/// Parse the leading decimal digits of a word. Anything glued on after
/// them is ignored; overflow saturates to the operand field.
fn parse_number(word: &str) -> u32 {
    let digits: &str = {
        let end = word
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(word.len());
        &word[..end]
    };
    digits
        .parse::<u32>()
        .unwrap_or(saga_types::word::VALUE_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        let mut t = SymbolTable::new();
        t.register("IfSpawned", SymbolKind::Function, 0);
        t.register("tmpx", SymbolKind::Variable, 0);
        t.register("LATCHLEFT", SymbolKind::Constant, 1);
        t.register("+", SymbolKind::Operator, 0);
        t
    }

    fn resolve(line: &str, cursor: usize) -> (Resolution, usize, Diagnostics) {
        let mut diags = Diagnostics::new();
        let (res, cur) = next_token(line, cursor, &table(), "test.txt", 1, &mut diags);
        (res, cur, diags)
    }

    #[test]
    fn classifies_numbers_tags_and_symbols() {
        let (res, _, _) = resolve("128", 0);
        assert_eq!(res, Resolution::Constant(128));

        let (res, _, _) = resolve("[GOLD]", 0);
        assert_eq!(res, Resolution::Constant(Idsz::pack('G', 'O', 'L', 'D').0));

        let (res, _, _) = resolve("IfSpawned", 0);
        assert_eq!(
            res,
            Resolution::Symbol {
                kind: SymbolKind::Function,
                value: 0
            }
        );

        let (res, _, _) = resolve("LATCHLEFT", 0);
        assert_eq!(res, Resolution::Constant(1));
    }

    #[test]
    fn cursor_advances_past_word_and_spaces() {
        let line = "tmpx = 5";
        let (res, cur, _) = resolve(line, 0);
        assert!(matches!(res, Resolution::Symbol { .. }));
        assert_eq!(&line[..cur], "tmpx");

        let (res, cur2, _) = resolve(line, cur);
        assert_eq!(res, Resolution::NoMatch); // bare `=`, silent
        let (res, _, _) = resolve(line, cur2);
        assert_eq!(res, Resolution::Constant(5));
    }

    #[test]
    fn equals_is_silent_but_garbage_is_not() {
        let (_, _, diags) = resolve("=", 0);
        assert!(!diags.has_any());

        let (res, _, diags) = resolve("IfBogus", 0);
        assert_eq!(res, Resolution::NoMatch);
        assert_eq!(diags.total, 1);
        assert!(diags.entries[0].message.contains("IfBogus"));
    }

    #[test]
    fn end_of_line_when_only_spaces_remain() {
        let (res, _, _) = resolve("tmpx   ", 4);
        assert_eq!(res, Resolution::EndOfLine);
    }
}
