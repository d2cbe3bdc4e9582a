//! Disassembler: render a compiled behavior back into readable form.
//!
//! Used by the CLI to inspect what the compiler produced, and by tests
//! to check jump wiring without poking at raw words.

use saga_types::{BehaviorId, Op, ScriptStore, SymbolTable, Word};
use serde::Serialize;

/// A rendered behavior.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub behavior: u32,
    pub start: u32,
    pub entries: Vec<ListingEntry>,
}

/// One rendered instruction (a function with its jump target, or a
/// whole arithmetic group).
#[derive(Debug, Clone, Serialize)]
pub struct ListingEntry {
    /// Absolute store index of the instruction's first word.
    pub index: u32,
    /// Raw words of the instruction, in store order.
    pub words: Vec<u32>,
    /// Jump target for function entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jump: Option<u32>,
    /// Human-readable rendering.
    pub text: String,
}

/// Disassemble one behavior.
pub fn disassemble(store: &ScriptStore, symbols: &SymbolTable, behavior: BehaviorId) -> Listing {
    let start = store.start_of(behavior);
    let mut entries = Vec::new();
    let mut index = start;
    loop {
        let word = store.word(index);
        if word.is_end() {
            entries.push(ListingEntry {
                index,
                words: vec![word.0, store.word(index + 1).0],
                jump: None,
                text: format!("{}End", pad(word.indent())),
            });
            break;
        }
        let entry = if word.is_function() {
            function_entry(store, symbols, index, word)
        } else {
            group_entry(store, symbols, index, word)
        };
        index += entry.words.len() as u32;
        entries.push(entry);
    }
    Listing {
        behavior: behavior.0,
        start,
        entries,
    }
}

fn function_entry(
    store: &ScriptStore,
    symbols: &SymbolTable,
    index: u32,
    word: Word,
) -> ListingEntry {
    let jump = store.word(index + 1).0;
    let name = symbols
        .function_name(word.value())
        .map(str::to_string)
        .unwrap_or_else(|| format!("fn#{}", word.value()));
    ListingEntry {
        index,
        words: vec![word.0, jump],
        jump: Some(jump),
        text: format!("{}{} -> {}", pad(word.indent()), name, jump),
    }
}

fn group_entry(
    store: &ScriptStore,
    symbols: &SymbolTable,
    index: u32,
    header: Word,
) -> ListingEntry {
    let count = store.word(index + 1).0 & 255;
    let mut words = vec![header.0, store.word(index + 1).0];

    let destination = symbols
        .variable_name(header.value())
        .map(str::to_string)
        .unwrap_or_else(|| format!("var#{}", header.value()));
    let mut text = format!("{}{} =", pad(header.indent()), destination);

    for i in 0..count {
        let operand = store.word(index + 2 + i);
        words.push(operand.0);
        if i > 0 {
            let glyph = Op::from_bits(operand.op_bits())
                .map(Op::glyph)
                .unwrap_or('?');
            text.push(' ');
            text.push(glyph);
        }
        text.push(' ');
        if operand.is_literal_operand() {
            text.push_str(&operand.value().to_string());
        } else {
            match symbols.variable_name(operand.value()) {
                Some(name) => text.push_str(name),
                None => text.push_str(&format!("var#{}", operand.value())),
            }
        }
    }

    ListingEntry {
        index,
        words,
        jump: None,
        text,
    }
}

fn pad(indent: u8) -> String {
    " ".repeat(indent as usize * 2)
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "behavior {} @ {}", self.behavior, self.start)?;
        for entry in &self.entries {
            writeln!(f, "{:6}  {}", entry.index, entry.text)?;
        }
        Ok(())
    }
}
