use super::Replacements;
use super::Step;
use crate::collection::Collection;
use crate::collection::TypeLookup;
use crate::options::ResolveOptions;
use crate::ty::Type;
use rayon::prelude::*;
use tracing::debug;
use tracing::debug_span;

/// Replaces `{%symbol%}` placeholders left by upstream transformers with the
/// name of the referenced declaration, or with the unknown type when no
/// declaration exists.
///
/// Placeholders referring to inline types are left untouched: inline types have
/// no name to refer to, and this step does not inline bodies.
#[derive(Clone, Debug, Default)]
pub struct ReplaceMissingSymbolsStep {
  options: ResolveOptions,
}

impl ReplaceMissingSymbolsStep {
  pub fn new(options: ResolveOptions) -> Self {
    ReplaceMissingSymbolsStep { options }
  }

  pub fn options(&self) -> &ResolveOptions {
    &self.options
  }

  /// Decides the replacement for each of `ty`'s missing symbols.
  pub fn replacements_for(&self, lookup: &impl TypeLookup, ty: &Type) -> Replacements {
    let mut replacements = Replacements::new();
    for symbol in &ty.missing_symbols {
      let Some(found) = lookup.find(symbol) else {
        debug!(symbol = %symbol, replacement = %self.options.unknown_type, "unknown symbol");
        replacements.insert(symbol.as_str(), self.options.unknown_type.as_str());
        continue;
      };
      match found.target_name() {
        Some(name) => replacements.insert(symbol.as_str(), name),
        None => {
          debug!(symbol = %symbol, "symbol refers to inline type, placeholder kept");
        }
      }
    }
    replacements
  }

  /// Computes the resolved body of `ty` without modifying it.
  pub fn resolve_type(&self, lookup: &impl TypeLookup, ty: &Type) -> String {
    if ty.missing_symbols.is_empty() {
      return ty.transformed.clone();
    }
    let _span = debug_span!("resolve_type", symbol = %ty.symbol).entered();
    self.replacements_for(lookup, ty).apply(&ty.transformed)
  }

  fn execute_sequential(&self, mut collection: Collection) -> Collection {
    for idx in 0..collection.len() {
      let ty = &collection.as_slice()[idx];
      if ty.missing_symbols.is_empty() {
        continue;
      }
      let transformed = self.resolve_type(&collection, ty);
      collection.commit_transformed(idx, transformed);
    }
    collection
  }

  fn execute_parallel(&self, mut collection: Collection) -> Collection {
    let resolved: Vec<Option<String>> = collection
      .as_slice()
      .par_iter()
      .map(|ty| {
        (!ty.missing_symbols.is_empty()).then(|| self.resolve_type(&collection, ty))
      })
      .collect();
    for (idx, transformed) in resolved.into_iter().enumerate() {
      if let Some(transformed) = transformed {
        collection.commit_transformed(idx, transformed);
      }
    }
    collection
  }
}

impl Step for ReplaceMissingSymbolsStep {
  fn execute(&self, collection: Collection) -> Collection {
    let _span = debug_span!(
      "replace_missing_symbols",
      types = collection.len(),
      parallel = self.options.parallel
    )
    .entered();
    if self.options.parallel {
      self.execute_parallel(collection)
    } else {
      self.execute_sequential(collection)
    }
  }
}
