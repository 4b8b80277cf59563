//! Resolution of missing symbols in transformed TypeScript declarations.
//!
//! Upstream transformers emit `{%symbol%}` placeholders for references they
//! cannot resolve locally. Once every type has been transformed, the
//! [`ReplaceMissingSymbolsStep`] looks each placeholder up across the whole
//! [`Collection`] and substitutes the referenced declaration's name, or `any`
//! when nothing declares the symbol.

pub mod collection;
pub mod error;
pub mod options;
pub mod steps;
pub mod symbol;
pub mod ty;

pub use collection::Collection;
pub use collection::TypeLookup;
pub use error::Error;
pub use error::Result;
pub use options::ResolveOptions;
pub use options::UNKNOWN_TYPE;
pub use steps::ReplaceMissingSymbolsStep;
pub use steps::Replacements;
pub use steps::Step;
pub use symbol::placeholder;
pub use symbol::MissingSymbols;
pub use ty::Type;

/// Runs [`ReplaceMissingSymbolsStep`] with default options.
pub fn replace_missing_symbols(collection: Collection) -> Collection {
  ReplaceMissingSymbolsStep::default().execute(collection)
}
