use crate::ast::{QueryNode, SERVER_CHOICE_INDEX};
use crate::error::{QueryError, Result};

/// Translate a parsed CQL tree into the Solr query syntax.
///
/// Terms are emitted quoted and verbatim; the backend tokenizes them. Boolean
/// nodes are always parenthesized so the output precedence mirrors the tree
/// regardless of Solr's own precedence rules.
pub fn to_solr(node: &QueryNode) -> Result<String> {
    let mut out = String::new();
    emit(node, &mut out)?;
    Ok(out)
}

fn emit(node: &QueryNode, out: &mut String) -> Result<()> {
    match node {
        QueryNode::Term { index, value, .. } => {
            if let Some(index) = index {
                if !index.eq_ignore_ascii_case(SERVER_CHOICE_INDEX) {
                    return Err(QueryError::UnsupportedIndex(index.clone()));
                }
            }
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
        QueryNode::And {
            left,
            right,
            modifiers,
        } => emit_boolean(left, right, !modifiers.is_empty(), "AND", out)?,
        QueryNode::Or {
            left,
            right,
            modifiers,
        } => emit_boolean(left, right, !modifiers.is_empty(), "OR", out)?,
        QueryNode::Not { .. } => return Err(QueryError::UnsupportedConstruct("not")),
    }
    Ok(())
}

fn emit_boolean(
    left: &QueryNode,
    right: &QueryNode,
    has_modifiers: bool,
    op: &'static str,
    out: &mut String,
) -> Result<()> {
    if has_modifiers {
        return Err(QueryError::UnsupportedModifiers(op));
    }
    out.push('(');
    emit(left, out)?;
    out.push(' ');
    out.push_str(op);
    out.push(' ');
    emit(right, out)?;
    out.push(')');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Modifier;

    fn modifier(name: &str) -> Modifier {
        Modifier {
            name: name.to_string(),
            relation: None,
            value: None,
        }
    }

    #[test]
    fn translates_bare_term() {
        let query = QueryNode::term("storm");
        assert_eq!(to_solr(&query).unwrap(), "\"storm\"");
    }

    #[test]
    fn translates_and() {
        let query = QueryNode::and(QueryNode::term("ship"), QueryNode::term("storm"));
        assert_eq!(to_solr(&query).unwrap(), "(\"ship\" AND \"storm\")");
    }

    #[test]
    fn parenthesization_mirrors_tree_shape() {
        let left_deep = QueryNode::or(
            QueryNode::and(QueryNode::term("a"), QueryNode::term("b")),
            QueryNode::term("c"),
        );
        assert_eq!(to_solr(&left_deep).unwrap(), "((\"a\" AND \"b\") OR \"c\")");

        let right_deep = QueryNode::or(
            QueryNode::term("a"),
            QueryNode::and(QueryNode::term("b"), QueryNode::term("c")),
        );
        assert_eq!(to_solr(&right_deep).unwrap(), "(\"a\" OR (\"b\" AND \"c\"))");
    }

    #[test]
    fn accepts_server_choice_index_case_insensitively() {
        let query = QueryNode::Term {
            index: Some("CQL.SERVERCHOICE".to_string()),
            value: "storm".to_string(),
            modifiers: Vec::new(),
        };
        assert_eq!(to_solr(&query).unwrap(), "\"storm\"");
    }

    #[test]
    fn rejects_foreign_index() {
        let query = QueryNode::Term {
            index: Some("dc.title".to_string()),
            value: "storm".to_string(),
            modifiers: Vec::new(),
        };
        assert_eq!(
            to_solr(&query).unwrap_err(),
            QueryError::UnsupportedIndex("dc.title".to_string())
        );
    }

    #[test]
    fn rejects_foreign_index_in_nested_tree() {
        let query = QueryNode::and(
            QueryNode::term("ship"),
            QueryNode::Term {
                index: Some("dc.title".to_string()),
                value: "storm".to_string(),
                modifiers: Vec::new(),
            },
        );
        assert!(matches!(
            to_solr(&query),
            Err(QueryError::UnsupportedIndex(_))
        ));
    }

    #[test]
    fn rejects_boolean_modifiers() {
        let query = QueryNode::Or {
            left: Box::new(QueryNode::term("ship")),
            right: Box::new(QueryNode::term("storm")),
            modifiers: vec![modifier("proximity")],
        };
        assert_eq!(
            to_solr(&query).unwrap_err(),
            QueryError::UnsupportedModifiers("OR")
        );
    }

    #[test]
    fn rejects_not_queries() {
        let query = QueryNode::Not {
            left: Box::new(QueryNode::term("ship")),
            right: Box::new(QueryNode::term("storm")),
            modifiers: Vec::new(),
        };
        assert_eq!(
            to_solr(&query).unwrap_err(),
            QueryError::UnsupportedConstruct("not")
        );
    }

    #[test]
    fn term_text_is_passed_through_unescaped() {
        // The backend tokenizes term text itself; no internal quoting here.
        let query = QueryNode::term("sturm & drang");
        assert_eq!(to_solr(&query).unwrap(), "\"sturm & drang\"");
    }
}
