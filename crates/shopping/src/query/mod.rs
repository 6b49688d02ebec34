mod list;

use std::ops::Deref;

pub use list::ShoppingListItemView;

#[derive(Clone)]
pub struct Query(pub kondate_shared::State);

impl Deref for Query {
    type Target = kondate_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
