//! Error types for match compilation.

use thiserror::Error;

/// Classified failures produced while compiling match expressions.
///
/// Every variant is a static shape or arity violation: deterministic,
/// surfaced synchronously, never retried. Compilation either fully succeeds
/// or fails with exactly one of these; there is no degraded rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Match invocation with zero or more than one phrase argument
    #[error("match expects exactly one phrase argument, got {got}")]
    Arity { got: usize },

    /// Selector grouping must be flat and uniformly signed
    #[error("Invalid source for match target: {detail}")]
    InvalidSource { detail: String },

    /// Conjunctive field targeting is not representable in selector syntax
    #[error("Invalid boolean operator in match target: {detail}")]
    InvalidBoolean { detail: String },

    /// Only negation may wrap a match target
    #[error("Invalid unary operator in match target: {detail}")]
    InvalidUnary { detail: String },
}

/// Result type for compilation operations
pub type CompileResult<T> = Result<T, CompileError>;
