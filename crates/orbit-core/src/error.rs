use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrbitError>;

/// Failures at the configuration boundary. The per-frame engine itself never
/// fails; missing anchors and degenerate geometry just draw less.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbitError {
    #[error("unknown layout key `{0}`")]
    UnknownKey(String),

    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },

    #[error("unknown shape `{0}` (expected `cloud` or `octahedron`)")]
    UnknownShape(String),
}
