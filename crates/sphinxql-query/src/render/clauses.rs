//! Pagination, tuning-option, and aggregate rendering.

use serde_json::json;

use crate::ir::{AggregateCall, AggregateFunc, OptionEntry, PaginationSpec};
use crate::render::RenderedClause;

/// Render the server's non-standard `LIMIT offset, limit` clause.
///
/// Zero offset folds into literal text, so the common no-offset case reaches
/// the server as a constant. A real offset binds both values positionally.
pub fn limit_clause(page: &PaginationSpec) -> RenderedClause {
    if page.offset == 0 {
        RenderedClause::literal(format!("LIMIT 0, {}", page.limit))
    } else {
        RenderedClause {
            sql: "LIMIT ?, ?".to_string(),
            params: vec![json!(page.offset), json!(page.limit)],
        }
    }
}

/// Render the trailing OPTION clause, entries in declaration order.
///
/// Placement is the caller's contract: OPTION follows every other clause and
/// sits directly after the table reference when no other clause is present.
/// Returns an empty string when there is nothing to render.
pub fn options_clause(entries: &[OptionEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let assignments = entries
        .iter()
        .map(|entry| format!("{}={}", entry.name, entry.value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OPTION {}", assignments)
}

/// Render an aggregate call with the server's counting semantics.
///
/// A non-distinct count renders as `COUNT(*)` no matter what argument it was
/// given: the server's counting is argument-independent. A distinct count
/// keeps its field. Everything else passes its arguments through to a
/// lowercase call form.
pub fn aggregate_expr(call: &AggregateCall) -> String {
    let rendered = match (call.func, call.distinct) {
        (AggregateFunc::Count, false) => "COUNT(*)".to_string(),
        (AggregateFunc::Count, true) => format!("COUNT(DISTINCT {})", call.args.join(", ")),
        _ => format!("{}({})", call.func.name(), call.args.join(", ")),
    };
    match &call.label {
        Some(label) => format!("{} AS {}", rendered, label),
        None => rendered,
    }
}
