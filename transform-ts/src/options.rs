use crate::error::Error;
use crate::error::Result;
use crate::symbol::contains_placeholder_syntax;
use serde::Deserialize;
use serde::Serialize;

/// TypeScript's top type, used for symbols no declaration provides.
pub const UNKNOWN_TYPE: &str = "any";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ResolveOptions {
  /// Replacement for symbols absent from the collection.
  pub unknown_type: String,
  /// Resolve entries on the rayon thread pool.
  pub parallel: bool,
}

impl Default for ResolveOptions {
  fn default() -> Self {
    ResolveOptions {
      unknown_type: UNKNOWN_TYPE.to_string(),
      parallel: false,
    }
  }
}

impl ResolveOptions {
  pub fn from_json_str(json: &str) -> Result<Self> {
    let options: ResolveOptions = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
  }

  pub fn with_unknown_type(mut self, unknown_type: impl Into<String>) -> Self {
    self.unknown_type = unknown_type.into();
    self
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.unknown_type.trim().is_empty() {
      return Err(Error::InvalidOptions("unknownType must not be empty".to_string()));
    }
    // The fallback must never look like another placeholder.
    if contains_placeholder_syntax(&self.unknown_type) {
      return Err(Error::InvalidOptions(format!(
        "unknownType `{}` contains placeholder syntax",
        self.unknown_type
      )));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_any() {
    let options = ResolveOptions::from_json_str("{}").unwrap();
    assert_eq!(options, ResolveOptions::default());
    assert_eq!(options.unknown_type, "any");
    assert!(!options.parallel);
  }

  #[test]
  fn reads_camel_case_keys() {
    let options = ResolveOptions::from_json_str(r#"{"unknownType":"unknown","parallel":true}"#).unwrap();
    assert_eq!(options.unknown_type, "unknown");
    assert!(options.parallel);
  }

  #[test]
  fn rejects_bad_fallbacks() {
    assert!(matches!(
      ResolveOptions::from_json_str(r#"{"unknownType":"  "}"#),
      Err(Error::InvalidOptions(_))
    ));
    assert!(matches!(
      ResolveOptions::from_json_str(r#"{"unknownType":"{%Foo%}"}"#),
      Err(Error::InvalidOptions(_))
    ));
    assert!(matches!(
      ResolveOptions::from_json_str(r#"{"fallback":"any"}"#),
      Err(Error::Json(_))
    ));
  }
}
