// =============================================================================
// TRACE — Les destinations des traces du décorateur
// =============================================================================
//
// Le LoggingCalculator écrit deux lignes par appel ("input is x", puis
// "result is y"). OÙ vont ces lignes est une question séparée : c'est le rôle
// d'un TraceSink.
//
//   StdoutSink  → la console, une ligne par trace (comportement d'origine)
//   TracingSink → un événement `tracing::info!` par trace
//   MemorySink  → un Vec<String> ordonné (tests, affichage différé)
//
// =============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Cible où le décorateur émet ses lignes de trace.
///
/// Les lignes sont émises dans l'ordre, sans réordonnancement.
pub trait TraceSink {
    /// Émet une ligne de trace (sans saut de ligne final).
    fn emit(&mut self, line: &str);
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

impl<S: TraceSink + ?Sized> TraceSink for Box<S> {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// Écrit chaque ligne sur la sortie standard.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Transforme chaque ligne en événement `tracing` de niveau INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&mut self, line: &str) {
        tracing::info!(target: crate::config::TRACE_TARGET, "{}", line);
    }
}

/// Garde les lignes en mémoire, dans l'ordre d'émission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Les lignes reçues jusqu'ici
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Vide le sink et rend les lignes accumulées
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl TraceSink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Choix d'un sink par son nom (configuration, ligne de commande).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    Tracing,
    Memory,
}

impl SinkKind {
    /// Construit le sink correspondant.
    ///
    /// `Memory` est refusé : une fois dans un `Box<dyn TraceSink>`, ses lignes
    /// ne pourraient plus être relues. L'appelant crée alors un `MemorySink`
    /// lui-même et le garde.
    pub fn build(self) -> crate::Result<Box<dyn TraceSink>> {
        match self {
            SinkKind::Stdout => Ok(Box::new(StdoutSink)),
            SinkKind::Tracing => Ok(Box::new(TracingSink)),
            SinkKind::Memory => Err(Error::DetachedMemorySink),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SinkKind::Stdout => "stdout",
            SinkKind::Tracing => "tracing",
            SinkKind::Memory => "memory",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(SinkKind::Stdout),
            "tracing" => Ok(SinkKind::Tracing),
            "memory" => Ok(SinkKind::Memory),
            _ => Err(Error::UnknownSink(s.to_string())),
        }
    }
}
