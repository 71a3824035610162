//! Product catalog module.
//!
//! Contains products, taxonomy terms, the catalog collaborator trait and
//! an in-memory implementation of it.

mod index;
mod memory;
mod product;
mod term;

pub use index::{CatalogIndex, PricePoint, ProductIdSet};
pub use memory::{CatalogSnapshot, MemoryCatalog};
pub use product::{Product, ProductStatus, ProductType};
pub use term::{Term, TermKind, TermTree};
