use std::collections::HashSet;

use kondate_shared::{recipe::Ingredient, shopping::IngredientCategory};

use crate::CategorizationService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShoppingListItem {
    pub name: String,
    pub amount: String,
    pub category: IngredientCategory,
}

/// Merges ingredient lists into one shopping list.
///
/// Lists are walked in order and only the first ingredient with a given name
/// is kept, together with its amount. Amounts are never summed.
pub fn consolidate<'a>(
    ingredient_lists: impl IntoIterator<Item = &'a Vec<Ingredient>>,
) -> Vec<NewShoppingListItem> {
    let mut seen = HashSet::new();

    ingredient_lists
        .into_iter()
        .flatten()
        .filter(|ingredient| seen.insert(ingredient.name.to_owned()))
        .map(|ingredient| NewShoppingListItem {
            name: ingredient.name.to_owned(),
            amount: ingredient.amount.to_owned(),
            category: CategorizationService::categorize(&ingredient.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_wins() {
        let curry = vec![Ingredient::new("onion", "1"), Ingredient::new("豚肉", "200g")];
        let soup = vec![
            Ingredient::new("onion", "2"),
            Ingredient::new("にんじん", "1本"),
            Ingredient::new("豚肉", "100g"),
        ];

        let items = consolidate([&curry, &soup]);

        assert_eq!(
            items,
            vec![
                NewShoppingListItem {
                    name: "onion".to_owned(),
                    amount: "1".to_owned(),
                    category: IngredientCategory::Vegetables,
                },
                NewShoppingListItem {
                    name: "豚肉".to_owned(),
                    amount: "200g".to_owned(),
                    category: IngredientCategory::Protein,
                },
                NewShoppingListItem {
                    name: "にんじん".to_owned(),
                    amount: "1本".to_owned(),
                    category: IngredientCategory::Vegetables,
                },
            ]
        );
    }

    #[test]
    fn test_names_compare_exactly() {
        let a = vec![Ingredient::new("Onion", "1"), Ingredient::new("onion ", "1")];
        let b = vec![Ingredient::new("onion", "3")];

        let items = consolidate([&a, &b]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_empty() {
        assert!(consolidate(Vec::<&Vec<Ingredient>>::new()).is_empty());
        assert!(consolidate([&vec![]]).is_empty());
    }
}
