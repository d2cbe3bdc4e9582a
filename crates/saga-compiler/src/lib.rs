//! SAGA bytecode compiler.
//!
//! ```text
//! source text → normalize → tokenize (symbol table) → emit words → resolve jumps
//! ```
//!
//! All behaviors compile into one shared [`ScriptStore`]; a behavior is
//! a start offset into it. Unresolved symbols are diagnostics, not
//! errors — a script with typos still loads (and misbehaves at runtime,
//! which is the language's long-standing contract). The only hard
//! failure is store exhaustion, which fails that one script and leaves
//! everything previously registered intact.

mod codes;
mod disasm;
mod emit;
mod jumps;
mod token;

pub use codes::{parse_codes, write_codes};
pub use disasm::{disassemble, Listing, ListingEntry};
pub use token::{next_token, Resolution};

use saga_types::{BehaviorId, CompileError, Diagnostics, Result, ScriptStore, SymbolTable};
use std::path::Path;

/// The compiler: a preloaded symbol table plus the shared store it
/// emits into. All pass state lives in an explicit context — there are
/// no module-level globals threaded between passes.
pub struct Compiler {
    symbols: SymbolTable,
    store: ScriptStore,
}

impl Compiler {
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            symbols,
            store: ScriptStore::new(),
        }
    }

    /// A compiler writing into a caller-supplied store (reduced capacity
    /// in exhaustion tests).
    pub fn with_store(symbols: SymbolTable, store: ScriptStore) -> Self {
        Self { symbols, store }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn store(&self) -> &ScriptStore {
        &self.store
    }

    /// Hand the finished store to the interpreter.
    pub fn into_store(self) -> ScriptStore {
        self.store
    }

    /// Compile one script and register it as a behavior.
    ///
    /// `file` names the compilation unit in diagnostics. On success the
    /// returned diagnostics list every non-fatal anomaly (unresolved
    /// symbols, clamped indentation); the behavior is registered either
    /// way. On store exhaustion the partial output is rolled back.
    pub fn compile(&mut self, file: &str, source: &str) -> Result<(BehaviorId, Diagnostics)> {
        let lines = saga_lexer::normalize(source);
        let start = self.store.cursor();
        let mut diagnostics = Diagnostics::new();

        let emitted = emit::emit_lines(
            &mut self.store,
            &self.symbols,
            file,
            &lines,
            &mut diagnostics,
        );
        if emitted.is_err() {
            self.store.truncate(start);
            return Err(CompileError::StoreFull {
                file: file.to_string(),
                capacity: self.store.capacity(),
            });
        }

        jumps::resolve(&mut self.store, start);

        let id = self
            .store
            .register(start)
            .ok_or_else(|| CompileError::TooManyBehaviors {
                file: file.to_string(),
                limit: saga_types::MAX_BEHAVIORS,
            })?;
        if diagnostics.has_any() {
            tracing::warn!(file, total = diagnostics.total, "script compiled with diagnostics");
        }
        Ok((id, diagnostics))
    }

    /// Compile a script from disk. A missing file maps to
    /// [`CompileError::MissingScript`]; callers substitute the default
    /// behavior for it.
    pub fn compile_file(&mut self, path: &Path) -> Result<(BehaviorId, Diagnostics)> {
        let source = std::fs::read_to_string(path).map_err(|_| CompileError::MissingScript {
            path: path.display().to_string(),
        })?;
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.compile(&file, &source)
    }
}
