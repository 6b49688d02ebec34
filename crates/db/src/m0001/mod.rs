mod meal_plan;
mod recipe;
mod shopping_list_item;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "kondate",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        meal_plan::CreateTable,
        meal_plan::CreateDateIdx,
        shopping_list_item::CreateTable
    ]
);
