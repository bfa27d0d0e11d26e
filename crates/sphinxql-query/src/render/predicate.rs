//! MATCH predicate rendering.
//!
//! Joins the two halves of each match body — the resolved field selector and
//! the escaped phrase — then finishes the literal according to the active
//! driver profile.

use tracing::trace;

use crate::connector::ConnectorProfile;
use crate::error::CompileResult;
use crate::escape::escape_phrase;
use crate::ir::MatchCall;
use crate::transform::resolve;

/// Render validated match calls as a single MATCH predicate.
///
/// Each call contributes one body: `(<selector> <phrase>)` when the call
/// targets specific fields, or the bare phrase when it matches against the
/// whole document. Multiple bodies from one statement join with a single
/// space inside one literal; the server reads that as implicit conjunction.
pub fn match_predicate(calls: &[MatchCall], profile: &ConnectorProfile) -> CompileResult<String> {
    let mut bodies = Vec::with_capacity(calls.len());
    for call in calls {
        bodies.push(match_body(call)?);
    }
    let joined = bodies.join(" ");
    trace!(driver = profile.name(), body = %joined, "rendered match predicate");
    let literal = profile.quote_literal(&joined);
    if profile.quotes_literal() {
        Ok(format!("MATCH({})", literal))
    } else {
        Ok(format!("MATCH('{}')", literal))
    }
}

/// Render the inner body for one match call, before literal quoting.
pub fn match_body(call: &MatchCall) -> CompileResult<String> {
    let phrase = escape_phrase(call.phrase());
    match call.target() {
        Some(target) => {
            let selector = resolve(target)?;
            Ok(format!("({} {})", selector, phrase))
        }
        None => Ok(phrase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompileError;
    use crate::ir::TargetExpr;
    use insta::assert_snapshot;

    fn targeted(field: &str, phrase: &str) -> MatchCall {
        MatchCall::new(Some(TargetExpr::field(field)), phrase)
    }

    // =========================================================================
    // Bodies
    // =========================================================================

    #[test]
    fn test_body_with_target() {
        let body = match_body(&targeted("name", "adriel")).unwrap();
        assert_eq!(body, "(@name adriel)");
    }

    #[test]
    fn test_body_without_target_has_no_parens() {
        let body = match_body(&MatchCall::new(None, "adriel")).unwrap();
        assert_eq!(body, "adriel");
    }

    #[test]
    fn test_body_quote_left_for_quoter() {
        let body = match_body(&targeted("name", "adri'el")).unwrap();
        assert_eq!(body, "(@name adri'el)");
    }

    #[test]
    fn test_body_escapes_reserved_phrase() {
        let body = match_body(&targeted("name", "@username")).unwrap();
        assert_eq!(body, r"(@name \\@username)");
    }

    #[test]
    fn test_body_group_target() {
        let call = MatchCall::new(Some(TargetExpr::any_of(["name", "country"])), "US");
        assert_eq!(match_body(&call).unwrap(), "(@(name,country) US)");
    }

    // =========================================================================
    // Full predicates
    // =========================================================================

    #[test]
    fn test_predicate_single_call() {
        let sql = match_predicate(&[targeted("name", "adriel")], &ConnectorProfile::MYSQL).unwrap();
        assert_snapshot!(sql, @"MATCH('(@name adriel)')");
    }

    #[test]
    fn test_predicate_escapes_quote() {
        let sql =
            match_predicate(&[targeted("name", "adri'el")], &ConnectorProfile::MYSQL).unwrap();
        assert_snapshot!(sql, @r"MATCH('(@name adri\'el)')");
    }

    #[test]
    fn test_predicate_merges_calls() {
        let calls = [targeted("name", "adriel"), targeted("country", "US")];
        let sql = match_predicate(&calls, &ConnectorProfile::MYSQL).unwrap();
        assert_snapshot!(sql, @"MATCH('(@name adriel) (@country US)')");
    }

    #[test]
    fn test_predicate_whole_document() {
        let sql =
            match_predicate(&[MatchCall::new(None, "adriel")], &ConnectorProfile::MYSQL).unwrap();
        assert_snapshot!(sql, @"MATCH('adriel')");
    }

    #[test]
    fn test_predicate_pre_quoted_driver() {
        let sql = match_predicate(
            &[targeted("name", "adri'el")],
            &ConnectorProfile::LIBMYSQLCLIENT,
        )
        .unwrap();
        assert_snapshot!(sql, @r"MATCH('(@name adri\'el)')");
    }

    #[test]
    fn test_predicate_unicode_untouched() {
        let sql =
            match_predicate(&[targeted("name", "miljøet")], &ConnectorProfile::MYSQL).unwrap();
        assert_snapshot!(sql, @"MATCH('(@name miljøet)')");
    }

    #[test]
    fn test_predicate_propagates_shape_error() {
        let call = MatchCall::new(
            Some(TargetExpr::And(vec![
                TargetExpr::field("name"),
                TargetExpr::field("country"),
            ])),
            "US",
        );
        let err = match_predicate(&[call], &ConnectorProfile::MYSQL).unwrap_err();
        assert!(matches!(err, CompileError::InvalidBoolean { .. }));
    }
}
