use anyhow::Result;
use clap::Subcommand;
use kondate_shared::shopping::IngredientCategory;
use kondate_shopping::{AddInput, ShoppingListItemView};
use serde::Serialize;
use serde_json::json;
use time::Date;

use crate::config::Config;

#[derive(Subcommand)]
pub enum ShoppingCommands {
    /// Rebuild the shopping list from meal plans
    Generate {
        /// Meal plan ids, in priority order
        #[arg(conflicts_with_all = ["from", "to"])]
        ids: Vec<i64>,

        /// Use every meal plan between --from and --to (inclusive)
        #[arg(long, value_parser = super::parse_date, requires = "to")]
        from: Option<Date>,

        #[arg(long, value_parser = super::parse_date, requires = "from")]
        to: Option<Date>,
    },
    List,
    Check { id: i64 },
    Uncheck { id: i64 },
    /// Add an item by hand
    Add {
        name: String,
        amount: String,

        /// vegetables, protein or other (derived from the name by default)
        #[arg(long)]
        category: Option<IngredientCategory>,
    },
    Delete { id: i64 },
    /// Remove every checked item
    ClearChecked,
}

#[derive(Serialize)]
pub struct ShoppingListItemOutput {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub category: IngredientCategory,
    pub checked: bool,
}

impl From<ShoppingListItemView> for ShoppingListItemOutput {
    fn from(view: ShoppingListItemView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            amount: view.amount,
            category: view.category.0,
            checked: view.checked,
        }
    }
}

fn print_items(items: Vec<ShoppingListItemView>) -> Result<()> {
    let output = items
        .into_iter()
        .map(ShoppingListItemOutput::from)
        .collect::<Vec<_>>();

    super::print_json(&output)
}

pub async fn run(config: &Config, command: ShoppingCommands) -> Result<()> {
    let state = crate::db::create_state(&config.database).await?;
    let shopping = kondate_shopping::Command::new(state.clone());

    match command {
        ShoppingCommands::Generate { ids, from, to } => {
            let ids = match (from, to) {
                (Some(from), Some(to)) => kondate_mealplan::Query(state)
                    .list_range(from, to)
                    .await?
                    .into_iter()
                    .map(|plan| plan.id)
                    .collect(),
                _ => ids,
            };

            print_items(shopping.generate(&ids).await?)
        }
        ShoppingCommands::List => print_items(kondate_shopping::Query(state).list().await?),
        ShoppingCommands::Check { id } => {
            shopping.check(id).await?;

            super::print_json(&json!({ "id": id, "checked": true }))
        }
        ShoppingCommands::Uncheck { id } => {
            shopping.uncheck(id).await?;

            super::print_json(&json!({ "id": id, "checked": false }))
        }
        ShoppingCommands::Add {
            name,
            amount,
            category,
        } => {
            let id = shopping
                .add(AddInput {
                    name,
                    amount,
                    category,
                })
                .await?;

            super::print_json(&json!({ "id": id }))
        }
        ShoppingCommands::Delete { id } => {
            shopping.delete(id).await?;

            super::print_json(&json!({ "deleted": id }))
        }
        ShoppingCommands::ClearChecked => {
            let removed = shopping.delete_checked().await?;

            super::print_json(&json!({ "removed": removed }))
        }
    }
}
