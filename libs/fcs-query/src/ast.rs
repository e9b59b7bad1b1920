/// The only term index this endpoint accepts, compared case-insensitively.
pub const SERVER_CHOICE_INDEX: &str = "cql.serverChoice";

/// A modifier attached to a relation or boolean operator, e.g. `/unit=word`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub name: String,
    pub relation: Option<String>,
    pub value: Option<String>,
}

/// Parsed CQL query tree, handed over by the protocol runtime.
///
/// The enum is closed on purpose: the translator matches exhaustively, so a
/// new node kind is a compile error instead of a runtime fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    Term {
        index: Option<String>,
        value: String,
        modifiers: Vec<Modifier>,
    },
    And {
        left: Box<QueryNode>,
        right: Box<QueryNode>,
        modifiers: Vec<Modifier>,
    },
    Or {
        left: Box<QueryNode>,
        right: Box<QueryNode>,
        modifiers: Vec<Modifier>,
    },
    /// CQL `not` (and-not). Parsed upstream, always rejected by the translator.
    Not {
        left: Box<QueryNode>,
        right: Box<QueryNode>,
        modifiers: Vec<Modifier>,
    },
}

impl QueryNode {
    /// Server-choice term without modifiers.
    pub fn term(value: impl Into<String>) -> Self {
        QueryNode::Term {
            index: None,
            value: value.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn and(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::And {
            left: Box::new(left),
            right: Box::new(right),
            modifiers: Vec::new(),
        }
    }

    pub fn or(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::Or {
            left: Box::new(left),
            right: Box::new(right),
            modifiers: Vec::new(),
        }
    }
}
