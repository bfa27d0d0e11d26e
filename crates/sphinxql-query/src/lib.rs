//! SphinxQL query-text rendering for MySQL-wire full-text search servers
//!
//! This crate translates tree-shaped query filters into the textual query
//! syntax accepted by Sphinx and Manticore, and renders the servers'
//! non-standard SQL clause shapes. The pipeline per outbound statement:
//!
//! 1. **Arity validation** — a match invocation carries exactly one phrase
//! 2. **Target resolution** — the field-targeting tree becomes a canonical
//!    `@field` / `@!field` / `@(f1,f2)` / `@!(f1,f2)` selector, or a
//!    classified error
//! 3. **Phrase escaping** — percent-doubling, then doubled-backslash
//!    escaping of the reserved `@ ( )` set
//! 4. **Literal quoting** — single-quote escaping under the active driver
//!    profile's convention
//! 5. **Clause rendering** — the MATCH predicate plus LIMIT, OPTION, and
//!    aggregate fragments for the statement assembler to splice
//!
//! The whole core is pure, synchronous text rendering: no I/O, no shared
//! mutable state, every call reentrant.
//!
//! ## Usage
//!
//! ```rust
//! use sphinxql_query::render::match_predicate;
//! use sphinxql_query::{ConnectorProfile, MatchCall, TargetExpr};
//!
//! let call = MatchCall::new(Some(TargetExpr::field("title")), "hello");
//! let predicate = match_predicate(&[call], &ConnectorProfile::MYSQL).unwrap();
//! assert_eq!(predicate, "MATCH('(@title hello)')");
//! ```

pub mod connector;
pub mod error;
pub mod escape;
pub mod ir;
pub mod render;
pub mod transform;

// Re-exports
pub use connector::ConnectorProfile;
pub use error::{CompileError, CompileResult};
pub use escape::escape_phrase;
pub use ir::{
    AggregateCall, AggregateFunc, FieldRef, FieldSelector, MatchArgs, MatchCall, OptionEntry,
    OptionValue, PaginationSpec, TargetExpr, UnaryOp,
};
pub use render::{
    aggregate_expr, limit_clause, match_predicate, options_clause, RenderedClause,
};
pub use transform::{resolve, validate_match};
