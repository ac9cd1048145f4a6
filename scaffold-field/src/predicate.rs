use std::fmt;

use serde::Serialize;

/// A query predicate that can be attached to a field.
///
/// Every kind has three spellings: the token used on the command line
/// (`gte`), the suffix of the generated parameter field (`AgeGte`) and the
/// suffix of the ent predicate function it calls (`AgeGTE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateKind {
    Eq,
    Neq,
    In,
    NotIn,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    ContainsFold,
    HasPrefix,
    HasSuffix,
    EqualFold,
    IsNull,
    NotNull,
}

/// What a predicate parameter carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// One value of the field type.
    Single,
    /// A list of values of the field type.
    List,
    /// A flag; the predicate itself takes no argument.
    Flag,
}

impl PredicateKind {
    /// Every predicate kind, in registry order.
    pub const ALL: [PredicateKind; 15] = [
        PredicateKind::Eq,
        PredicateKind::Neq,
        PredicateKind::In,
        PredicateKind::NotIn,
        PredicateKind::Gt,
        PredicateKind::Gte,
        PredicateKind::Lt,
        PredicateKind::Lte,
        PredicateKind::Contains,
        PredicateKind::ContainsFold,
        PredicateKind::HasPrefix,
        PredicateKind::HasSuffix,
        PredicateKind::EqualFold,
        PredicateKind::IsNull,
        PredicateKind::NotNull,
    ];

    /// The token accepted in field specifications.
    pub fn token(self) -> &'static str {
        match self {
            PredicateKind::Eq => "eq",
            PredicateKind::Neq => "neq",
            PredicateKind::In => "in",
            PredicateKind::NotIn => "nin",
            PredicateKind::Gt => "gt",
            PredicateKind::Gte => "gte",
            PredicateKind::Lt => "lt",
            PredicateKind::Lte => "lte",
            PredicateKind::Contains => "contains",
            PredicateKind::ContainsFold => "containsfold",
            PredicateKind::HasPrefix => "prefix",
            PredicateKind::HasSuffix => "suffix",
            PredicateKind::EqualFold => "equalfold",
            PredicateKind::IsNull => "isnull",
            PredicateKind::NotNull => "notnull",
        }
    }

    /// Suffix appended to the field name to name the query parameter.
    pub fn display_suffix(self) -> &'static str {
        match self {
            PredicateKind::Eq => "Eq",
            PredicateKind::Neq => "Neq",
            PredicateKind::In => "In",
            PredicateKind::NotIn => "NotIn",
            PredicateKind::Gt => "Gt",
            PredicateKind::Gte => "Gte",
            PredicateKind::Lt => "Lt",
            PredicateKind::Lte => "Lte",
            PredicateKind::Contains => "Contains",
            PredicateKind::ContainsFold => "ContainsFold",
            PredicateKind::HasPrefix => "HasPrefix",
            PredicateKind::HasSuffix => "HasSuffix",
            PredicateKind::EqualFold => "EqualFold",
            PredicateKind::IsNull => "IsNull",
            PredicateKind::NotNull => "NotNull",
        }
    }

    /// Suffix of the ent predicate function (`user.AgeGTE`).
    pub fn storage_suffix(self) -> &'static str {
        match self {
            PredicateKind::Eq => "EQ",
            PredicateKind::Neq => "NEQ",
            PredicateKind::Gt => "GT",
            PredicateKind::Gte => "GTE",
            PredicateKind::Lt => "LT",
            PredicateKind::Lte => "LTE",
            PredicateKind::IsNull => "IsNil",
            PredicateKind::NotNull => "NotNil",
            other => other.display_suffix(),
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            PredicateKind::In | PredicateKind::NotIn => Arity::List,
            PredicateKind::IsNull | PredicateKind::NotNull => Arity::Flag,
            _ => Arity::Single,
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
