//! Arity gate for match invocations.

use crate::error::{CompileError, CompileResult};
use crate::ir::{MatchArgs, MatchCall};

/// Check the invocation contract and produce the unit of compilation.
///
/// A match invocation carries exactly one free-text phrase, whether or not a
/// target expression is also present. This runs before, and independent of,
/// target-shape resolution.
pub fn validate_match(args: MatchArgs) -> CompileResult<MatchCall> {
    let MatchArgs {
        target,
        mut phrases,
    } = args;
    match phrases.len() {
        1 => Ok(MatchCall::new(target, phrases.remove(0))),
        got => Err(CompileError::Arity { got }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TargetExpr;

    #[test]
    fn test_single_phrase_passes() {
        let call = validate_match(MatchArgs {
            target: None,
            phrases: vec!["adriel".to_string()],
        })
        .unwrap();
        assert_eq!(call.phrase(), "adriel");
        assert!(call.target().is_none());
    }

    #[test]
    fn test_target_is_carried_through() {
        let call = validate_match(MatchArgs {
            target: Some(TargetExpr::field("name")),
            phrases: vec!["adriel".to_string()],
        })
        .unwrap();
        assert_eq!(call.target(), Some(&TargetExpr::field("name")));
    }

    #[test]
    fn test_zero_phrases_rejected() {
        let err = validate_match(MatchArgs {
            target: None,
            phrases: vec![],
        })
        .unwrap_err();
        assert_eq!(err, CompileError::Arity { got: 0 });
    }

    #[test]
    fn test_two_phrases_rejected_even_with_target() {
        let err = validate_match(MatchArgs {
            target: Some(TargetExpr::field("name")),
            phrases: vec!["word1".to_string(), "word2".to_string()],
        })
        .unwrap_err();
        assert_eq!(err, CompileError::Arity { got: 2 });
    }
}
