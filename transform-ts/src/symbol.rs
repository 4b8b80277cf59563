use serde::Deserialize;
use serde::Serialize;
use std::slice;

/// Opening delimiter of a placeholder token.
pub const PLACEHOLDER_OPEN: &str = "{%";
/// Closing delimiter of a placeholder token.
pub const PLACEHOLDER_CLOSE: &str = "%}";

/// The token embedded in transformed text for a symbol that could not be
/// resolved yet.
pub fn placeholder(symbol: &str) -> String {
  format!("{PLACEHOLDER_OPEN}{symbol}{PLACEHOLDER_CLOSE}")
}

/// Strips leading namespace separators, so `\App\User` and `App\User` name the
/// same symbol.
pub fn normalize_symbol(symbol: &str) -> &str {
  symbol.trim_start_matches('\\')
}

/// Returns true if `text` contains anything shaped like a placeholder opening.
pub fn contains_placeholder_syntax(text: &str) -> bool {
  text.contains(PLACEHOLDER_OPEN)
}

/// Symbols referenced by a type that its transformer could not resolve.
///
/// Insertion order is kept and every symbol is stored once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MissingSymbols {
  symbols: Vec<String>,
}

impl MissingSymbols {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `symbol` and returns the placeholder to emit in its place. The
  /// recorded symbol and the placeholder both use the normalized form.
  pub fn add(&mut self, symbol: &str) -> String {
    let symbol = normalize_symbol(symbol);
    self.push_unique(symbol);
    placeholder(symbol)
  }

  fn push_unique(&mut self, symbol: &str) {
    if !self.contains(symbol) {
      self.symbols.push(symbol.to_string());
    }
  }

  /// Exact match against the recorded symbols.
  pub fn contains(&self, symbol: &str) -> bool {
    self.symbols.iter().any(|s| s == symbol)
  }

  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, String> {
    self.symbols.iter()
  }
}

// Symbols loaded as data are kept verbatim, since they have to match the
// placeholders already present in the transformed text.
impl From<Vec<String>> for MissingSymbols {
  fn from(symbols: Vec<String>) -> Self {
    let mut missing = MissingSymbols::new();
    for symbol in &symbols {
      missing.push_unique(symbol);
    }
    missing
  }
}

impl From<MissingSymbols> for Vec<String> {
  fn from(symbols: MissingSymbols) -> Self {
    symbols.symbols
  }
}

impl<'a> FromIterator<&'a str> for MissingSymbols {
  fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
    let mut symbols = MissingSymbols::new();
    for symbol in iter {
      symbols.add(symbol);
    }
    symbols
  }
}

impl<'a> IntoIterator for &'a MissingSymbols {
  type Item = &'a String;
  type IntoIter = slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_returns_placeholder_and_dedupes() {
    let mut symbols = MissingSymbols::new();
    assert_eq!(symbols.add("App\\Data\\User"), "{%App\\Data\\User%}");
    assert_eq!(symbols.add("\\App\\Data\\User"), "{%App\\Data\\User%}");
    assert_eq!(symbols.add("Post"), "{%Post%}");
    assert_eq!(
      symbols.iter().map(String::as_str).collect::<Vec<_>>(),
      vec!["App\\Data\\User", "Post"]
    );
    assert!(symbols.contains("Post"));
    assert!(!symbols.contains("\\Post"));
  }

  #[test]
  fn serializes_as_plain_array() {
    let symbols: MissingSymbols = ["B", "A", "B"].into_iter().collect();
    let json = serde_json::to_string(&symbols).unwrap();
    assert_eq!(json, r#"["B","A"]"#);
    let back: MissingSymbols = serde_json::from_str(&json).unwrap();
    assert_eq!(back, symbols);
  }

  #[test]
  fn loaded_symbols_are_kept_verbatim() {
    let symbols: MissingSymbols = serde_json::from_str(r#"["\\Foo","Bar","\\Foo"]"#).unwrap();
    assert_eq!(
      symbols.iter().map(String::as_str).collect::<Vec<_>>(),
      vec!["\\Foo", "Bar"]
    );
    assert_eq!(serde_json::to_string(&symbols).unwrap(), r#"["\\Foo","Bar"]"#);
  }

  #[test]
  fn placeholder_syntax_detection() {
    assert!(contains_placeholder_syntax("Array<{%Foo%}>"));
    assert!(!contains_placeholder_syntax("Array<any>"));
  }
}
