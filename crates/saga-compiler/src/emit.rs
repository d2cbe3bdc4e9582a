//! Line-by-line instruction emission.
//!
//! Each normalized line becomes either a function word plus its jump
//! slot, or an arithmetic group: header word, operand-count word, then
//! one packed (operator|operand) word per right-hand value. The jump
//! slots are placeholders here; the resolver patches them afterwards.

use saga_lexer::{indentation, space_operators, starts_with_capital, Line};
use saga_types::{
    word, Diagnostic, DiagnosticKind, Diagnostics, ScriptStore, SymbolTable, Word, MAX_INDENT,
};

use crate::token::{next_token, Resolution};

/// Emission failed because the store filled up.
#[derive(Debug)]
pub(crate) struct StoreFull;

pub(crate) fn emit_lines(
    store: &mut ScriptStore,
    symbols: &SymbolTable,
    file: &str,
    lines: &[Line],
    diagnostics: &mut Diagnostics,
) -> Result<(), StoreFull> {
    let mut ended = false;
    for line in lines {
        ended = emit_line(store, symbols, file, line, diagnostics)?;
    }
    // Scripts are supposed to finish with `End`; guarantee the sentinel
    // so the interpreter and resolver never run off this script's words.
    if !ended {
        push(store, Word::function(0, word::FN_END))?;
        push(store, Word::raw(0))?;
    }
    Ok(())
}

/// Emit one line. Returns true when the line was the `End` terminal.
fn emit_line(
    store: &mut ScriptStore,
    symbols: &SymbolTable,
    file: &str,
    line: &Line,
    diagnostics: &mut Diagnostics,
) -> Result<bool, StoreFull> {
    let text = space_operators(&line.text);

    let mut depth = indentation(&text);
    if depth > MAX_INDENT as u32 {
        tracing::warn!(file, line = line.number, depth, "indentation too deep, clamped");
        diagnostics.push(Diagnostic {
            file: file.to_string(),
            line: line.number,
            kind: DiagnosticKind::ExcessIndentation,
            message: format!("{} levels of indentation", depth + 1),
        });
        depth = MAX_INDENT as u32;
    }
    let depth = depth as u8;
    let function_line = starts_with_capital(&text);

    let (first, mut cursor) = next_token(&text, 0, symbols, file, line.number, diagnostics);
    if first == Resolution::EndOfLine {
        return Ok(false);
    }

    if function_line {
        let code = first.value();
        push(store, Word::function(depth, code))?;
        push(store, Word::raw(0))?; // jump slot, patched by the resolver
        return Ok(code == word::FN_END);
    }

    // Assignment: destination register, `=`, first value, then
    // (operator, value) pairs. The count slot is patched once the line
    // is exhausted.
    let header = store.cursor();
    push(store, Word::group_header(depth, first.value()))?;
    push(store, Word::raw(0))?; // operand-count slot

    let (_, after_eq) = next_token(&text, cursor, symbols, file, line.number, diagnostics);
    let (rhs, after_rhs) = next_token(&text, after_eq, symbols, file, line.number, diagnostics);
    if rhs == Resolution::EndOfLine {
        // Nothing on the right-hand side; the empty group stores a zero
        // sum into the destination at run time.
        return Ok(false);
    }
    cursor = after_rhs;

    // The first value rides on operator 0 (Add) so the zero-seeded sum
    // picks it up unchanged.
    push(store, Word::operand(rhs.is_constant(), 0, rhs.value()))?;
    let mut operands: u32 = 1;

    loop {
        let (op, after_op) = next_token(&text, cursor, symbols, file, line.number, diagnostics);
        if op == Resolution::EndOfLine {
            break;
        }
        let (value, after_value) =
            next_token(&text, after_op, symbols, file, line.number, diagnostics);
        if value == Resolution::EndOfLine {
            // Dangling operator at end of line; dropped.
            break;
        }
        cursor = after_value;

        // An operator slot holding a constant forces the literal marker
        // — degenerate input, kept loadable.
        let literal = value.is_constant() || op.is_constant();
        push(
            store,
            Word::operand(literal, (op.value() & 15) as u8, value.value()),
        )?;
        operands += 1;
    }

    store.patch(header + 1, Word::raw(operands));
    Ok(false)
}

fn push(store: &mut ScriptStore, word: Word) -> Result<(), StoreFull> {
    if store.push(word) {
        Ok(())
    } else {
        Err(StoreFull)
    }
}
