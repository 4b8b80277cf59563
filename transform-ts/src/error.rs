/// Errors produced while building a [`Collection`](crate::Collection) or
/// loading [`ResolveOptions`](crate::ResolveOptions).
///
/// Resolution itself never fails; these only arise at the edges of the pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Two entries were added under the same symbol.
  #[error("duplicate type symbol `{0}`")]
  DuplicateSymbol(String),

  #[error("invalid resolve options: {0}")]
  InvalidOptions(String),

  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
