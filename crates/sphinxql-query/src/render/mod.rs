//! Clause renderers for SphinxQL statement fragments.
//!
//! The core emits fragments — the MATCH predicate, the pagination clause,
//! the trailing OPTION clause, and aggregate expression text — and leaves
//! splicing them into the surrounding SELECT to the statement-assembly
//! collaborator. Fragments that bind values carry their parameters
//! positionally next to the text.

mod clauses;
mod predicate;

pub use clauses::{aggregate_expr, limit_clause, options_clause};
pub use predicate::{match_body, match_predicate};

use serde_json::Value;

/// A rendered clause fragment plus the parameters it binds.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedClause {
    /// The generated clause text
    pub sql: String,
    /// Values bound by `?` placeholders, in placeholder order
    pub params: Vec<Value>,
}

impl RenderedClause {
    /// Fragment with no bound parameters
    pub fn literal(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}
