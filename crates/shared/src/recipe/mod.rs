use serde::{Deserialize, Serialize};

/// Amount given to ingredients whose quantity is not known.
pub const AMOUNT_AS_NEEDED: &str = "as needed";
pub const DEFAULT_CATEGORY: &str = "other";
pub const DEFAULT_COOK_TIME: u32 = 30;
pub const DEFAULT_SERVINGS: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    pub fn as_needed(name: impl Into<String>) -> Self {
        Self::new(name, AMOUNT_AS_NEEDED)
    }
}

/// Normalized recipe produced from a web page, not yet persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
}

impl RecipeDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_owned(),
            cook_time: DEFAULT_COOK_TIME,
            servings: DEFAULT_SERVINGS,
            ingredients: vec![],
            instructions: vec![],
            tags: vec![],
        }
    }
}
