use crate::collection::Collection;

pub mod replace_missing_symbols;
pub mod replacements;

pub use replace_missing_symbols::ReplaceMissingSymbolsStep;
pub use replacements::Replacements;

/// One stage of the transformation pipeline.
pub trait Step {
  fn execute(&self, collection: Collection) -> Collection;
}
