//! The preloaded symbol table consulted during tokenization.
//!
//! Symbols are loaded once from a definitions file before any script
//! compiles and are immutable afterward. Lookup is a linear scan with an
//! exact name comparison — the table is small and compile-time only.

use serde::{Deserialize, Serialize};

/// What a symbol resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A builtin predicate or action, by function code.
    Function,
    /// A named constant; folds into the operand as an inline literal.
    Constant,
    /// A scratch register or world query, read at run time.
    Variable,
    /// An arithmetic operator.
    Operator,
}

impl SymbolKind {
    /// Single-character tag used in the definitions file.
    pub fn tag(self) -> char {
        match self {
            SymbolKind::Function => 'F',
            SymbolKind::Constant => 'C',
            SymbolKind::Variable => 'V',
            SymbolKind::Operator => 'O',
        }
    }

    pub fn from_tag(tag: char) -> Option<SymbolKind> {
        match tag {
            'F' => Some(SymbolKind::Function),
            'C' => Some(SymbolKind::Constant),
            'V' => Some(SymbolKind::Variable),
            'O' => Some(SymbolKind::Operator),
            _ => None,
        }
    }
}

/// One named symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub value: u32,
}

/// The preloaded symbol table.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, kind: SymbolKind, value: u32) {
        self.symbols.push(Symbol {
            name: name.into(),
            kind,
            value,
        });
    }

    /// Exact-name lookup, first match wins.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Reverse lookup of a function name by code, for disassembly.
    pub fn function_name(&self, code: u32) -> Option<&str> {
        self.symbols
            .iter()
            .find(|s| s.kind == SymbolKind::Function && s.value == code)
            .map(|s| s.name.as_str())
    }

    /// Reverse lookup of a variable name by code, for disassembly.
    pub fn variable_name(&self, code: u32) -> Option<&str> {
        self.symbols
            .iter()
            .find(|s| s.kind == SymbolKind::Variable && s.value == code)
            .map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}
