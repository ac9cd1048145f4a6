use miette::Diagnostic;
use thiserror::Error;

/// Result type for field parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors in the field list given on the command line.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed field '{raw}'")]
    #[diagnostic(
        code(scaffold::malformed_field),
        help("fields are written as name:type or name:type:predicate,predicate (e.g. age:int32:gte,lte)")
    )]
    MalformedField { raw: String },

    #[error("unknown predicate '{token}' on field '{field}'")]
    #[diagnostic(code(scaffold::unknown_predicate), help("valid predicates are: {valid}"))]
    UnknownPredicate {
        field: String,
        token: String,
        valid: String,
    },

    #[error("entity name '{raw}' is empty after normalization")]
    #[diagnostic(code(scaffold::empty_entity_name))]
    EmptyEntityName { raw: String },

    #[error("fields '{first}' and '{second}' generate the same identifier")]
    #[diagnostic(
        code(scaffold::duplicate_field),
        help("field names must be unique, ignoring case and underscores")
    )]
    DuplicateField { first: String, second: String },
}

impl Error {
    pub fn malformed(raw: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedField { raw: raw.into() })
    }

    pub fn unknown_predicate<'a>(
        field: impl Into<String>,
        token: impl Into<String>,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Box<Self> {
        Box::new(Error::UnknownPredicate {
            field: field.into(),
            token: token.into(),
            valid: valid.into_iter().collect::<Vec<_>>().join(", "),
        })
    }
}
