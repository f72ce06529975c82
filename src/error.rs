use std::fmt;
use thiserror::Error;

/// The role a substring plays inside a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Registry,
    Namespace,
    Repository,
    Tag,
    Digest,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Registry => "registry",
            Field::Namespace => "namespace",
            Field::Repository => "repository",
            Field::Tag => "tag",
            Field::Digest => "digest",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("Image reference is empty")]
    EmptyReference,

    #[error("Invalid character in {field} `{value}`")]
    InvalidCharacter { field: Field, value: String },

    #[error("Malformed digest `{0}`, expected `algorithm:hex`")]
    MalformedDigest(String),

    #[error("Missing repository name in `{0}`")]
    EmptyRepository(String),

    #[error("Missing {field} component in `{image}`")]
    EmptyPathComponent { field: Field, image: String },

    #[error("Digest `{0}` is not a valid sha256 or sha512 digest")]
    UnregisteredDigest(String),
}

pub type Result<T, E = ReferenceError> = std::result::Result<T, E>;
