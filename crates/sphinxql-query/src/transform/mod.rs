//! Transforms between the query builder's raw input and the renderers.
//!
//! Two gates run before any text is produced: the arity check on the match
//! invocation, then structural resolution of the target expression. Both
//! fail with classified [`crate::error::CompileError`]s and never produce
//! partial results.

mod resolve;
mod validate;

pub use resolve::resolve;
pub use validate::validate_match;
