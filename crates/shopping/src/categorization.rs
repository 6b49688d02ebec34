use kondate_shared::shopping::IngredientCategory;

const PROTEIN: &[&str] = &[
    "肉", "魚", "鮭", "豆腐", "meat", "chicken", "beef", "pork", "lamb", "fish", "salmon", "tuna",
    "shrimp", "tofu",
];

const VEGETABLES: &[&str] = &[
    "野菜",
    "人参",
    "玉ねぎ",
    "パプリカ",
    "ズッキーニ",
    "ナス",
    "にんじん",
    "セロリ",
    "vegetable",
    "carrot",
    "onion",
    "bell pepper",
    "paprika",
    "zucchini",
    "eggplant",
    "celery",
];

/// Categorization Service
///
/// Stateless service that groups shopping list entries by matching keywords
/// inside the ingredient name. Matching is case-sensitive and protein keywords
/// are checked first, so `鶏肉と玉ねぎ` is protein.
pub struct CategorizationService;

impl CategorizationService {
    pub fn categorize(ingredient_name: &str) -> IngredientCategory {
        if Self::is_protein(ingredient_name) {
            return IngredientCategory::Protein;
        }

        if Self::is_vegetable(ingredient_name) {
            return IngredientCategory::Vegetables;
        }

        IngredientCategory::Other
    }

    fn is_protein(name: &str) -> bool {
        PROTEIN.iter().any(|keyword| name.contains(keyword))
    }

    fn is_vegetable(name: &str) -> bool {
        VEGETABLES.iter().any(|keyword| name.contains(keyword))
    }
}
