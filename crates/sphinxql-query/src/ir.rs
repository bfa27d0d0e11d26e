//! Intermediate representation for match compilation.
//!
//! The upstream query builder hands over three kinds of data per statement:
//! an optional boolean-expression tree naming the fields a phrase should
//! target, the free-text phrase itself, and contextual clause data
//! (pagination, tuning options, aggregate calls). Everything here is an
//! immutable value type for the duration of one render.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Fields and target expressions
// ============================================================================

/// A single retrievable attribute of an indexed document.
///
/// Identity is the field name; the core only ever renders it, never
/// inspects or mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    name: String,
}

impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Unary operators the query builder can attach to a column expression.
///
/// Only logical negation participates in match targeting; ordering
/// modifiers reaching the resolver are a caller mistake and get rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Asc,
    Desc,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Asc => f.write_str("ASC"),
            UnaryOp::Desc => f.write_str("DESC"),
        }
    }
}

/// Boolean-expression tree naming the fields a phrase should target.
///
/// A closed sum over the combinators the query builder can produce. Only a
/// small set of shapes compiles to a selector (see [`crate::transform::resolve`]);
/// everything else fails with a classified error rather than falling through
/// to an approximate rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetExpr {
    /// A bare field reference
    Field(FieldRef),
    /// Logical negation of a sub-expression
    Not(Box<TargetExpr>),
    /// Disjunction across sub-expressions
    Or(Vec<TargetExpr>),
    /// Conjunction across sub-expressions
    And(Vec<TargetExpr>),
    /// A non-negation unary operator in target position
    Unary { op: UnaryOp, expr: Box<TargetExpr> },
}

impl TargetExpr {
    /// Leaf expression for a named field
    pub fn field(name: impl Into<String>) -> Self {
        TargetExpr::Field(FieldRef::new(name))
    }

    /// Negate an expression
    pub fn not(expr: TargetExpr) -> Self {
        TargetExpr::Not(Box::new(expr))
    }

    /// Disjunction over named fields
    pub fn any_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetExpr::Or(names.into_iter().map(|n| TargetExpr::field(n)).collect())
    }
}

impl fmt::Display for TargetExpr {
    /// Structural rendering used in error diagnostics, not in query text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetExpr::Field(field) => write!(f, "{}", field),
            TargetExpr::Not(inner) => write!(f, "NOT {}", inner),
            TargetExpr::Or(members) => write!(f, "({})", join_exprs(members, " OR ")),
            TargetExpr::And(members) => write!(f, "({})", join_exprs(members, " AND ")),
            TargetExpr::Unary { op, expr } => write!(f, "{} {}", expr, op),
        }
    }
}

fn join_exprs(members: &[TargetExpr], sep: &str) -> String {
    members
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

// ============================================================================
// Resolved selectors
// ============================================================================

/// Canonical selector prefix identifying a match target.
///
/// Only the four legal shapes exist here; unsupported trees never resolve
/// into a selector. "No target" is represented by the *absence* of a
/// selector on the match call, never by an empty group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSelector {
    /// `@field`
    Single(FieldRef),
    /// `@!field`
    Exclude(FieldRef),
    /// `@(f1,f2,...)` — match across all listed fields jointly
    Group(Vec<FieldRef>),
    /// `@!(f1,f2,...)`
    ExcludeGroup(Vec<FieldRef>),
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSelector::Single(field) => write!(f, "@{}", field),
            FieldSelector::Exclude(field) => write!(f, "@!{}", field),
            FieldSelector::Group(fields) => write!(f, "@({})", join_fields(fields)),
            FieldSelector::ExcludeGroup(fields) => write!(f, "@!({})", join_fields(fields)),
        }
    }
}

fn join_fields(fields: &[FieldRef]) -> String {
    fields
        .iter()
        .map(FieldRef::name)
        .collect::<Vec<_>>()
        .join(",")
}

// ============================================================================
// Match invocations
// ============================================================================

/// Raw match invocation exactly as supplied by the query builder.
///
/// The builder surface is variadic, so the phrase count is not yet checked
/// here; [`crate::transform::validate_match`] gates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchArgs {
    pub target: Option<TargetExpr>,
    pub phrases: Vec<String>,
}

/// A validated match invocation: one phrase, at most one target expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCall {
    target: Option<TargetExpr>,
    phrase: String,
}

impl MatchCall {
    pub fn new(target: Option<TargetExpr>, phrase: impl Into<String>) -> Self {
        Self {
            target,
            phrase: phrase.into(),
        }
    }

    pub fn target(&self) -> Option<&TargetExpr> {
        self.target.as_ref()
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

// ============================================================================
// Clause data
// ============================================================================

/// Per-statement pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSpec {
    pub offset: u64,
    pub limit: u64,
}

/// One `name=value` assignment in the trailing OPTION clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub name: String,
    pub value: OptionValue,
}

impl OptionEntry {
    pub fn new(name: impl Into<String>, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Value side of a tuning option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    Int(i64),
    Str(String),
    /// Renders as `(v1, v2, ...)`, order preserved
    List(Vec<String>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(v) => write!(f, "{}", v),
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::List(items) => write!(f, "({})", items.join(", ")),
        }
    }
}

/// Aggregate-call descriptor from the projection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCall {
    pub func: AggregateFunc,
    pub args: Vec<String>,
    pub distinct: bool,
    pub label: Option<String>,
}

/// The aggregate functions the server gives non-standard treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    /// Zero-argument grouping marker, `groupby()`
    GroupKey,
}

impl AggregateFunc {
    /// Lowercase call-form name for the pass-through rendering path
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunc::Count => "count",
            AggregateFunc::Sum => "sum",
            AggregateFunc::Avg => "avg",
            AggregateFunc::Min => "min",
            AggregateFunc::Max => "max",
            AggregateFunc::GroupKey => "groupby",
        }
    }
}
