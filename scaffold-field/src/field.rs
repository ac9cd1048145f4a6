use kratos_scaffold_core::normalize_identifier;
use serde::Serialize;

use crate::{Error, PredicateKind, PredicateRegistry, Result};

/// One named, typed attribute of a generated entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    /// Go type as written in the field token (`int64`, `string`, `time.Time`, ...)
    pub declared_type: String,
    pub predicates: Vec<Predicate>,
}

/// A predicate attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    pub kind: PredicateKind,
    pub field_name: String,
    pub declared_type: String,
}

/// A query parameter derived from one (field, predicate) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateParam {
    /// Parameter name: field name + display suffix (`ageGte`)
    pub name: String,
    pub declared_type: String,
    /// ent predicate function: normalized field name + storage suffix (`AgeGTE`)
    pub storage_accessor: String,
    pub kind: PredicateKind,
}

impl Field {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            predicates: Vec::new(),
        }
    }

    /// Attach a predicate.
    pub fn predicate(mut self, kind: PredicateKind) -> Self {
        self.predicates.push(Predicate {
            kind,
            field_name: self.name.clone(),
            declared_type: self.declared_type.clone(),
        });
        self
    }

    /// Whether this is the primary identifier field.
    pub fn is_primary(&self) -> bool {
        self.name == "id"
    }

    /// The query parameters of this field, in predicate order.
    pub fn params(&self) -> Vec<PredicateParam> {
        self.predicates
            .iter()
            .map(|p| PredicateParam {
                name: format!("{}{}", self.name, p.kind.display_suffix()),
                declared_type: self.declared_type.clone(),
                storage_accessor: format!(
                    "{}{}",
                    normalize_identifier(&self.name),
                    p.kind.storage_suffix()
                ),
                kind: p.kind,
            })
            .collect()
    }
}

/// Parses `name:type[:predicate,...]` tokens against a predicate registry.
pub struct FieldParser<'a> {
    registry: &'a PredicateRegistry,
}

impl<'a> FieldParser<'a> {
    pub fn new(registry: &'a PredicateRegistry) -> Self {
        Self { registry }
    }

    /// Parse a single field token.
    pub fn parse(&self, raw: &str) -> Result<Field> {
        let segments: Vec<&str> = raw.split(':').map(str::trim).collect();

        let (name, declared_type, predicates) = match segments.as_slice() {
            [name, ty] => (*name, *ty, None),
            [name, ty, predicates] => (*name, *ty, Some(*predicates)),
            _ => return Err(Error::malformed(raw)),
        };
        if name.is_empty() || declared_type.is_empty() {
            return Err(Error::malformed(raw));
        }

        let mut field = Field::new(name, declared_type);
        for token in predicates
            .into_iter()
            .flat_map(|list| list.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            let kind = self.registry.parse_token(token).ok_or_else(|| {
                Error::unknown_predicate(name, token, self.registry.tokens())
            })?;
            field = field.predicate(kind);
        }

        Ok(field)
    }

    /// Parse every token in order, stopping at the first error.
    pub fn parse_all<I, S>(&self, raws: I) -> Result<Vec<Field>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raws.into_iter().map(|raw| self.parse(raw.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Field> {
        FieldParser::new(&PredicateRegistry::standard()).parse(raw)
    }

    #[test]
    fn test_parse_without_predicates() {
        let field = parse("name:string").unwrap();
        assert_eq!(field.name, "name");
        assert_eq!(field.declared_type, "string");
        assert!(field.predicates.is_empty());
        assert!(field.params().is_empty());
    }

    #[test]
    fn test_parse_with_predicates() {
        let field = parse("age:int32:gte,lte").unwrap();
        let kinds: Vec<_> = field.predicates.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PredicateKind::Gte, PredicateKind::Lte]);
        assert!(field.predicates.iter().all(|p| p.field_name == "age"));
        assert!(field.predicates.iter().all(|p| p.declared_type == "int32"));
    }

    #[test]
    fn test_parse_ignores_empty_predicate_entries() {
        let field = parse("id:int64:eq,,in,").unwrap();
        assert_eq!(field.predicates.len(), 2);

        let field = parse("id:int64:").unwrap();
        assert!(field.predicates.is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        for raw in ["name", "", ":string", "name:", "a:b:eq:extra"] {
            let err = parse(raw).unwrap_err();
            assert!(
                matches!(*err, Error::MalformedField { .. }),
                "expected malformed error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_unknown_predicate() {
        let err = parse("name:string:contains,foo").unwrap_err();
        match err.as_ref() {
            Error::UnknownPredicate {
                field,
                token,
                valid,
            } => {
                assert_eq!(field, "name");
                assert_eq!(token, "foo");
                assert!(valid.starts_with("eq, neq, in"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_params_follow_token_order() {
        let field = parse("id:int64:in,eq").unwrap();
        let params = field.params();

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "idIn");
        assert_eq!(params[0].storage_accessor, "IDIn");
        assert_eq!(params[1].name, "idEq");
        assert_eq!(params[1].storage_accessor, "IDEQ");
    }

    #[test]
    fn test_params_use_normalized_storage_name() {
        let field = parse("userId:int64:eq").unwrap();
        let params = field.params();
        assert_eq!(params[0].name, "userIdEq");
        assert_eq!(params[0].storage_accessor, "UserIDEQ");
    }

    #[test]
    fn test_parse_with_custom_registry() {
        let registry = PredicateRegistry::empty().with("like", PredicateKind::Contains);
        let parser = FieldParser::new(&registry);

        let field = parser.parse("name:string:like").unwrap();
        assert_eq!(field.params()[0].name, "nameContains");
        assert!(parser.parse("name:string:contains").is_err());
    }

    #[test]
    fn test_parse_all_stops_at_first_error() {
        let registry = PredicateRegistry::standard();
        let parser = FieldParser::new(&registry);

        let fields = parser.parse_all(["id:int64:eq", "name:string"]).unwrap();
        assert_eq!(fields.len(), 2);

        let err = parser
            .parse_all(["id:int64:eq", "name", "age:int32:bogus"])
            .unwrap_err();
        assert!(matches!(*err, Error::MalformedField { .. }));
    }

    #[test]
    fn test_is_primary() {
        assert!(Field::new("id", "int64").is_primary());
        assert!(!Field::new("ID", "int64").is_primary());
        assert!(!Field::new("userId", "int64").is_primary());
    }
}
