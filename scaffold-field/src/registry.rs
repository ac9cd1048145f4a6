use indexmap::IndexMap;

use crate::PredicateKind;

/// Lookup table from predicate tokens to predicate kinds.
///
/// The registry is a plain value: build it once and pass it to the
/// [`FieldParser`](crate::FieldParser). [`PredicateRegistry::standard`]
/// accepts the token of every [`PredicateKind`]; tests and embedders can
/// build narrower or aliased tables with [`PredicateRegistry::with`].
#[derive(Debug, Clone, Default)]
pub struct PredicateRegistry {
    tokens: IndexMap<String, PredicateKind>,
}

impl PredicateRegistry {
    /// A registry with no tokens.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with the canonical token of every predicate kind.
    pub fn standard() -> Self {
        PredicateKind::ALL
            .iter()
            .fold(Self::empty(), |registry, kind| {
                registry.with(kind.token(), *kind)
            })
    }

    /// Register `token` for `kind`, replacing any earlier registration of
    /// the same token.
    pub fn with(mut self, token: impl Into<String>, kind: PredicateKind) -> Self {
        self.tokens.insert(token.into(), kind);
        self
    }

    /// Resolve a token. Tokens are matched exactly.
    pub fn parse_token(&self, token: &str) -> Option<PredicateKind> {
        self.tokens.get(token).copied()
    }

    /// Registered tokens, in registration order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
