//! error types
//!
//! structured errors for schema lookups, document parsing, and code synthesis.
//! every variant is fatal: a run that hits one produces no output.

/// library result type
pub type Result<T> = std::result::Result<T, Error>;

/// error type for the generator and its loaders
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// a named type that resolves to none of the six graphql type categories
    #[error("type `{name}` is not a scalar, object, interface, union, enum, or input type")]
    UnknownTypeKind { name: String },

    /// an input object field whose base type is not a scalar, enum, or input object
    #[error("input field `{input}.{field}` has an unknown type `{type_name}`")]
    UnresolvableInputFieldType {
        input: String,
        field: String,
        type_name: String,
    },

    #[error("field `{field}` is not defined on root type `{root}`")]
    UnknownRootField { root: String, field: String },

    #[error("schema has no {kind} root type `{root}`")]
    MissingRootType { kind: &'static str, root: String },

    #[error("anonymous {kind} operations cannot be generated; give the operation a name")]
    AnonymousOperation { kind: &'static str },

    #[error("schema parse error: {0}")]
    SchemaParse(#[from] graphql_parser::schema::ParseError),

    #[error("document parse error: {0}")]
    DocumentParse(#[from] graphql_parser::query::ParseError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// true if the error points at the schema rather than the operation documents
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownTypeKind { .. }
                | Error::UnresolvableInputFieldType { .. }
                | Error::MissingRootType { .. }
                | Error::SchemaParse(_)
        )
    }
}
