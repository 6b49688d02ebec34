use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Description,
    Category,
    CookTime,
    Servings,
    Calories,
    Protein,
    Carbs,
    Fat,
    ImageUrl,
    Tags,
    Ingredients,
    Instructions,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    Date,
    MealType,
    RecipeId,
}

#[derive(Iden, Clone)]
pub enum ShoppingListItem {
    Table,
    Id,
    Name,
    Amount,
    Category,
    Checked,
}
