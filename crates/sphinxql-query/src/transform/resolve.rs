//! Match-target resolution.
//!
//! Classifies a boolean-expression tree into one of the four legal selector
//! shapes. Resolution is purely structural: one pass over the tree, no
//! backtracking, rejecting at the first disallowed combinator. Value content
//! is never inspected.

use crate::error::{CompileError, CompileResult};
use crate::ir::{FieldRef, FieldSelector, TargetExpr};

/// Resolve a target expression into its canonical field selector.
///
/// Accepted shapes:
/// - a single field reference → `@field`
/// - a negated field reference → `@!field`
/// - a flat disjunction of field references → `@(f1,f2,...)`
/// - a negated flat disjunction → `@!(f1,f2,...)`
///
/// Anything else fails with a classified error carrying a description of the
/// offending sub-expression. Unsupported shapes are never coerced into an
/// approximate selector.
pub fn resolve(expr: &TargetExpr) -> CompileResult<FieldSelector> {
    match expr {
        TargetExpr::Field(field) => Ok(FieldSelector::Single(field.clone())),
        TargetExpr::Not(inner) => resolve_negated(inner),
        TargetExpr::Or(members) => Ok(FieldSelector::Group(group_members(members)?)),
        TargetExpr::And(_) => Err(invalid_boolean(expr)),
        TargetExpr::Unary { .. } => Err(invalid_unary(expr)),
    }
}

/// Resolve the operand of a top-level negation.
fn resolve_negated(inner: &TargetExpr) -> CompileResult<FieldSelector> {
    match inner {
        TargetExpr::Field(field) => Ok(FieldSelector::Exclude(field.clone())),
        TargetExpr::Or(members) => Ok(FieldSelector::ExcludeGroup(group_members(members)?)),
        TargetExpr::And(_) => Err(invalid_boolean(inner)),
        // Double negation has no selector syntax; the grouping must be
        // uniformly signed.
        TargetExpr::Not(_) => Err(invalid_source(inner)),
        TargetExpr::Unary { .. } => Err(invalid_unary(inner)),
    }
}

/// Collect the members of a disjunction, which must all be bare fields.
fn group_members(members: &[TargetExpr]) -> CompileResult<Vec<FieldRef>> {
    if members.is_empty() {
        return Err(CompileError::InvalidSource {
            detail: "empty disjunction".to_string(),
        });
    }
    let mut fields = Vec::with_capacity(members.len());
    for member in members {
        match member {
            TargetExpr::Field(field) => fields.push(field.clone()),
            // A conjunction is unrepresentable at any depth
            TargetExpr::And(_) => return Err(invalid_boolean(member)),
            // Negated members and nested disjunctions break the flat,
            // uniformly signed grouping the selector syntax requires
            other => return Err(invalid_source(other)),
        }
    }
    Ok(fields)
}

fn invalid_source(expr: &TargetExpr) -> CompileError {
    CompileError::InvalidSource {
        detail: expr.to_string(),
    }
}

fn invalid_boolean(expr: &TargetExpr) -> CompileError {
    CompileError::InvalidBoolean {
        detail: expr.to_string(),
    }
}

fn invalid_unary(expr: &TargetExpr) -> CompileError {
    CompileError::InvalidUnary {
        detail: expr.to_string(),
    }
}
