//! Compile errors and the non-fatal diagnostics collection.
//!
//! Almost everything that goes wrong during a compile is a diagnostic:
//! the script stays loadable and the compile keeps going. The only hard
//! failures are store exhaustion, the behavior limit, and a missing
//! script file — and the last of those is recoverable by substituting
//! the default behavior.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostics stored per compile before the rest are only counted.
pub const MAX_DIAGNOSTICS: usize = 20;

/// Hard failures surfaced to the caller of a script load.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("script store full while compiling {file}: {capacity} words exhausted")]
    StoreFull { file: String, capacity: usize },

    #[error("behavior limit reached ({limit}) while registering {file}")]
    TooManyBehaviors { file: String, limit: usize },

    #[error("missing script file: {path}")]
    MissingScript { path: String },
}

/// What kind of non-fatal anomaly a diagnostic records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A word matched no symbol; the line compiled with a zero operand.
    UnresolvedSymbol,
    /// More than 15 levels of indentation; clamped.
    ExcessIndentation,
}

/// One non-fatal compile diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Script file (or behavior name) being compiled.
    pub file: String,
    /// 1-based source line.
    pub line: u32,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

/// Accumulated diagnostics for one compilation unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    pub entries: Vec<Diagnostic>,
    pub total: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, keeping at most [`MAX_DIAGNOSTICS`] entries
    /// while still counting the rest.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.entries.len() < MAX_DIAGNOSTICS {
            self.entries.push(diagnostic);
        }
        self.total += 1;
    }

    pub fn has_any(&self) -> bool {
        self.total > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unresolved(line: u32) -> Diagnostic {
        Diagnostic {
            file: "wolf.txt".into(),
            line,
            kind: DiagnosticKind::UnresolvedSymbol,
            message: "IfBogus undefined".into(),
        }
    }

    #[test]
    fn diagnostics_cap_entries_but_count_all() {
        let mut diags = Diagnostics::new();
        for i in 0..25 {
            diags.push(unresolved(i + 1));
        }
        assert_eq!(diags.entries.len(), MAX_DIAGNOSTICS);
        assert_eq!(diags.total, 25);
        assert!(diags.has_any());
    }

    #[test]
    fn diagnostic_display_names_file_and_line() {
        let d = unresolved(12);
        assert_eq!(d.to_string(), "wolf.txt:12: IfBogus undefined");
    }

    #[test]
    fn diagnostics_serialize() {
        let mut diags = Diagnostics::new();
        diags.push(unresolved(3));
        let json = serde_json::to_string(&diags).unwrap();
        assert!(json.contains("unresolved_symbol"));
        assert!(json.contains("\"total\":1"));
    }
}
