use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for ehrgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(ehrgen::io_error),
        help("pass the schema root directory with --schemas")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("base namespace '{namespace}' not found under '{path}'")]
    #[diagnostic(
        code(ehrgen::missing_base_namespace),
        help("the canonical domain model must exist at '<schema root>/{namespace}'")
    )]
    MissingBaseNamespace { namespace: String, path: PathBuf },

    #[error("failed to parse YAML document")]
    #[diagnostic(code(ehrgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Create an io error with the offending path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a missing-base-namespace error
    pub fn missing_base_namespace(namespace: impl Into<String>, path: &Path) -> Box<Self> {
        Box::new(Error::MissingBaseNamespace {
            namespace: namespace.into(),
            path: path.to_path_buf(),
        })
    }

    /// Create a parse error from a yaml error with source context
    pub fn parse(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|loc| SourceSpan::new(loc.index().into(), 1));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
