//! Abstract field-type vocabulary shared by every target language.
//!
//! Schema files describe field types with a small language-agnostic token set
//! (FHIR primitive names) plus a `[]` collection marker that may nest. Each
//! language crate maps this vocabulary to its own syntax via the `TypeMapper`
//! trait in `ehrgen-codegen`.

/// Prefix marking "ordered sequence of the type that follows".
pub const COLLECTION_MARKER: &str = "[]";

/// Recognized scalar type tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Code,
    Id,
    Uri,
    Url,
    Integer,
    PositiveInt,
    UnsignedInt,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Instant,
    Base64Binary,
}

impl ScalarType {
    /// Parse a scalar token as written in schema files.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(Self::String),
            "code" => Some(Self::Code),
            "id" => Some(Self::Id),
            "uri" => Some(Self::Uri),
            "url" => Some(Self::Url),
            "integer" => Some(Self::Integer),
            "positiveInt" => Some(Self::PositiveInt),
            "unsignedInt" => Some(Self::UnsignedInt),
            "decimal" => Some(Self::Decimal),
            "boolean" => Some(Self::Boolean),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::DateTime),
            "instant" => Some(Self::Instant),
            "base64Binary" => Some(Self::Base64Binary),
            _ => None,
        }
    }

    /// Get the schema token for this scalar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Code => "code",
            Self::Id => "id",
            Self::Uri => "uri",
            Self::Url => "url",
            Self::Integer => "integer",
            Self::PositiveInt => "positiveInt",
            Self::UnsignedInt => "unsignedInt",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Instant => "instant",
            Self::Base64Binary => "base64Binary",
        }
    }
}

/// A parsed abstract field type.
///
/// Parsing is total: tokens outside the recognized vocabulary become
/// `Unknown` and map to each language's untyped representation instead of
/// failing generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    /// Ordered sequence of the inner type. Nests for `[][]token`.
    List(Box<FieldType>),
    Unknown(String),
}

impl FieldType {
    /// Parse an abstract type token, recursing through collection markers.
    pub fn parse(token: &str) -> Self {
        if let Some(inner) = token.strip_prefix(COLLECTION_MARKER) {
            return Self::List(Box::new(Self::parse(inner)));
        }
        match ScalarType::from_token(token) {
            Some(scalar) => Self::Scalar(scalar),
            None => Self::Unknown(token.to_string()),
        }
    }
}
