//! Collector for warnings raised while decoding a document.
//!
//! Skipped content never aborts an import. The [`DiagnosticCollector`]
//! records every skip so callers can report it afterwards.

use log::warn;

use crate::error::Diagnostic;

/// Accumulates diagnostics in the order they were raised.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        warn!(code:? = diagnostic.code(); "{}", diagnostic.message());
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and hand back every recorded diagnostic.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
