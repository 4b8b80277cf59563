use crate::symbol::placeholder;
use aho_corasick::AhoCorasick;
use aho_corasick::MatchKind;

/// Replacement text for each resolved missing symbol of one type, in the order
/// the symbols were recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Replacements {
  entries: Vec<(String, String)>,
}

impl Replacements {
  pub fn new() -> Self {
    Self::default()
  }

  /// Symbols come from a [`MissingSymbols`](crate::MissingSymbols), which
  /// already holds each one once.
  pub fn insert(&mut self, symbol: impl Into<String>, replacement: impl Into<String>) {
    self.entries.push((symbol.into(), replacement.into()));
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(s, r)| (s.as_str(), r.as_str()))
  }

  /// Substitutes every placeholder of a mapped symbol in one left to right
  /// scan. Inserted text is never scanned again.
  pub fn apply(&self, text: &str) -> String {
    if self.entries.is_empty() {
      return text.to_string();
    }
    let patterns: Vec<String> = self.entries.iter().map(|(s, _)| placeholder(s)).collect();
    let replace_with: Vec<&str> = self.entries.iter().map(|(_, r)| r.as_str()).collect();
    let matcher = AhoCorasick::builder()
      .match_kind(MatchKind::LeftmostFirst)
      .build(&patterns)
      .expect("placeholder patterns always fit in an automaton");
    matcher.replace_all(text, &replace_with)
  }
}
