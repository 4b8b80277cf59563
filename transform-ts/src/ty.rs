use crate::symbol::normalize_symbol;
use crate::symbol::MissingSymbols;
use serde::Deserialize;
use serde::Serialize;

/// A declared or inline type produced by an upstream transformer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
  /// Key of this type within a [`Collection`](crate::Collection).
  pub symbol: String,
  pub name: String,
  #[serde(default)]
  pub namespace: Vec<String>,
  /// Emitted body; may contain `{%symbol%}` placeholders.
  pub transformed: String,
  #[serde(default)]
  pub missing_symbols: MissingSymbols,
  /// Inline types are never emitted as named declarations, so nothing may refer
  /// to them by name.
  #[serde(default)]
  pub is_inline: bool,
}

impl Type {
  pub fn new(symbol: impl Into<String>, name: impl Into<String>, transformed: impl Into<String>) -> Self {
    Type {
      symbol: symbol.into(),
      name: name.into(),
      namespace: Vec::new(),
      transformed: transformed.into(),
      missing_symbols: MissingSymbols::new(),
      is_inline: false,
    }
  }

  pub fn inline(symbol: impl Into<String>, transformed: impl Into<String>) -> Self {
    let symbol = symbol.into();
    Type {
      name: symbol.clone(),
      is_inline: true,
      ..Type::new(symbol, String::new(), transformed)
    }
  }

  /// Builds a named type from a backslash separated source name, e.g.
  /// `App\Data\User` becomes `User` in namespace `App.Data`.
  pub fn from_symbol(symbol: &str, transformed: impl Into<String>) -> Self {
    let symbol = normalize_symbol(symbol);
    let mut segments: Vec<String> = symbol
      .split('\\')
      .filter(|s| !s.is_empty())
      .map(str::to_string)
      .collect();
    let name = segments.pop().unwrap_or_default();
    Type::new(symbol, name, transformed).with_namespace(segments)
  }

  pub fn with_namespace<I, S>(mut self, namespace: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.namespace = namespace.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_missing_symbols<'a>(mut self, symbols: impl IntoIterator<Item = &'a str>) -> Self {
    self.missing_symbols = symbols.into_iter().collect();
    self
  }

  /// Name used by other declarations to reference this type. Inline types have
  /// none.
  pub fn target_name(&self) -> Option<String> {
    if self.is_inline {
      return None;
    }
    if self.namespace.is_empty() {
      return Some(self.name.clone());
    }
    let mut name = self.namespace.join(".");
    name.push('.');
    name.push_str(&self.name);
    Some(name)
  }
}

#[cfg(test)]
mod tests {
  use super::Type;

  #[test]
  fn target_name_joins_namespace() {
    let ty = Type::new("App\\Data\\User", "User", "{}").with_namespace(["App", "Data"]);
    assert_eq!(ty.target_name().as_deref(), Some("App.Data.User"));

    let ty = Type::new("Bar", "BarDto", "{}");
    assert_eq!(ty.target_name().as_deref(), Some("BarDto"));
  }

  #[test]
  fn inline_has_no_target_name() {
    assert_eq!(Type::inline("Baz", "string").target_name(), None);
  }

  #[test]
  fn from_symbol_splits_source_name() {
    let ty = Type::from_symbol("\\App\\Enums\\Status", "'a' | 'b'");
    assert_eq!(ty.symbol, "App\\Enums\\Status");
    assert_eq!(ty.name, "Status");
    assert_eq!(ty.namespace, vec!["App".to_string(), "Enums".to_string()]);
    assert_eq!(ty.target_name().as_deref(), Some("App.Enums.Status"));

    let ty = Type::from_symbol("Plain", "number");
    assert!(ty.namespace.is_empty());
    assert_eq!(ty.target_name().as_deref(), Some("Plain"));
  }

  #[test]
  fn deserializes_with_defaults() {
    let ty: Type = serde_json::from_str(
      r#"{"symbol":"X","name":"X","transformed":"Array<{%Foo%}>","missingSymbols":["Foo"]}"#,
    )
    .unwrap();
    assert!(!ty.is_inline);
    assert!(ty.namespace.is_empty());
    assert!(ty.missing_symbols.contains("Foo"));
  }
}
