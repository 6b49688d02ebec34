mod categorization;
mod consolidation;
mod query;
mod root;

pub use categorization::CategorizationService;
pub use consolidation::{NewShoppingListItem, consolidate};
pub use query::*;
pub use root::*;
