//! Token accumulator driven by committed symbols
//!
//! Digits concatenate into the in-progress buffer; separators and operators
//! finalize numbers; commit evaluates. On evaluation failure the buffer and
//! tokens survive so the user can correct and retry.

use crate::vocab::Symbol;

use super::eval::evaluate;
use super::history::{Operation, OperationHistory};

/// What a committed symbol did to the expression
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvalOutcome {
    Unchanged,
    Appended,
    Evaluated(f64),
    EvaluationFailed,
}

/// Accumulates committed symbols and evaluates on commit
#[derive(Debug, Default)]
pub struct ExpressionEngine {
    buffer: String,
    tokens: Vec<String>,
    last_result: Option<f64>,
    history: OperationHistory,
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn history(&self) -> &OperationHistory {
        &self.history
    }

    /// Finalized tokens plus the in-progress number, for display
    pub fn display(&self) -> String {
        let mut parts: Vec<&str> = self.tokens.iter().map(String::as_str).collect();
        if !self.buffer.is_empty() {
            parts.push(&self.buffer);
        }
        parts.join(" ")
    }

    /// Drop the in-progress expression. History and last result survive.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.tokens.clear();
    }

    /// Apply one committed symbol.
    pub fn commit(&mut self, symbol: &Symbol, now_ms: f64) -> EvalOutcome {
        match symbol {
            Symbol::Digit(d) => {
                self.buffer.push(*d);
                EvalOutcome::Appended
            }
            Symbol::Separator => {
                if self.buffer.is_empty() {
                    EvalOutcome::Unchanged
                } else {
                    self.flush_buffer();
                    EvalOutcome::Appended
                }
            }
            Symbol::Op(op) => {
                self.flush_buffer();
                self.tokens.push(op.as_char().to_string());
                EvalOutcome::Appended
            }
            Symbol::Commit => {
                self.flush_buffer();
                if self.tokens.is_empty() {
                    return EvalOutcome::Unchanged;
                }
                match evaluate(&self.tokens) {
                    Some(result) => {
                        self.history.record(Operation {
                            tokens: std::mem::take(&mut self.tokens),
                            result,
                            committed_at: now_ms,
                        });
                        self.last_result = Some(result);
                        EvalOutcome::Evaluated(result)
                    }
                    // Tokens and buffer stay; the user may keep composing
                    None => EvalOutcome::EvaluationFailed,
                }
            }
        }
    }

    fn flush_buffer(&mut self) {
        if !self.buffer.is_empty() {
            self.tokens.push(std::mem::take(&mut self.buffer));
        }
    }
}
