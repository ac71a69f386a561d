//! Card system: categories, definitions, taxonomy loading and the corpus.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identifier (`card-01`, `card-02`, ...)
//! - `Category`: The fixed set of card categories
//! - `CardDefinition`: Immutable card value
//! - `Taxonomy`: Source document the corpus is built from
//! - `CardRegistry`: The corpus, in enumeration order

pub mod category;
pub mod definition;
pub mod registry;
pub mod taxonomy;

pub use category::{Category, UnknownCategory};
pub use definition::{CardDefinition, CardId};
pub use registry::CardRegistry;
pub use taxonomy::{Disease, Taxonomy, TaxonomyCategory, TaxonomyError};
