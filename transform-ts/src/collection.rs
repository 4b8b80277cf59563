use crate::error::Error;
use crate::error::Result;
use crate::symbol::normalize_symbol;
use crate::ty::Type;
use ahash::AHashMap;
use serde::Deserialize;
use serde::Serialize;
use std::slice;
use std::vec;

/// Read-only lookup of types by symbol.
pub trait TypeLookup {
  fn find(&self, symbol: &str) -> Option<&Type>;
}

/// Ordered set of transformed types, keyed by symbol.
///
/// Keys and lookups both go through [`normalize_symbol`], so `\App\User` and
/// `App\User` address the same entry. Stored types keep their symbol verbatim.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Type>", into = "Vec<Type>")]
pub struct Collection {
  types: Vec<Type>,
  by_symbol: AHashMap<String, usize>,
}

impl Collection {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_types(types: impl IntoIterator<Item = Type>) -> Result<Self> {
    let mut collection = Collection::new();
    for ty in types {
      collection.add(ty)?;
    }
    Ok(collection)
  }

  pub fn add(&mut self, ty: Type) -> Result<()> {
    let key = normalize_symbol(&ty.symbol);
    if self.by_symbol.contains_key(key) {
      return Err(Error::DuplicateSymbol(ty.symbol));
    }
    self.by_symbol.insert(key.to_string(), self.types.len());
    self.types.push(ty);
    Ok(())
  }

  pub fn find(&self, symbol: &str) -> Option<&Type> {
    self
      .by_symbol
      .get(normalize_symbol(symbol))
      .map(|&idx| &self.types[idx])
  }

  /// Stores `ty` under its symbol, replacing an existing entry at the same
  /// position or appending a new one.
  pub fn put(&mut self, ty: Type) {
    let key = normalize_symbol(&ty.symbol);
    match self.by_symbol.get(key) {
      Some(&idx) => self.types[idx] = ty,
      None => {
        self.by_symbol.insert(key.to_string(), self.types.len());
        self.types.push(ty);
      }
    }
  }

  pub fn iter(&self) -> slice::Iter<'_, Type> {
    self.types.iter()
  }

  pub fn as_slice(&self) -> &[Type] {
    &self.types
  }

  /// Writes back the resolved body of the entry at `idx`.
  pub(crate) fn commit_transformed(&mut self, idx: usize, transformed: String) {
    self.types[idx].transformed = transformed;
  }

  pub fn len(&self) -> usize {
    self.types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
}

impl TypeLookup for Collection {
  fn find(&self, symbol: &str) -> Option<&Type> {
    Collection::find(self, symbol)
  }
}

impl TryFrom<Vec<Type>> for Collection {
  type Error = Error;

  fn try_from(types: Vec<Type>) -> Result<Self> {
    Collection::from_types(types)
  }
}

impl From<Collection> for Vec<Type> {
  fn from(collection: Collection) -> Self {
    collection.types
  }
}

impl IntoIterator for Collection {
  type Item = Type;
  type IntoIter = vec::IntoIter<Type>;

  fn into_iter(self) -> Self::IntoIter {
    self.types.into_iter()
  }
}

impl<'a> IntoIterator for &'a Collection {
  type Item = &'a Type;
  type IntoIter = slice::Iter<'a, Type>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
