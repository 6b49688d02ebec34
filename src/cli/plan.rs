use anyhow::Result;
use clap::Subcommand;
use kondate_mealplan::{MealPlanInput, MealPlanView};
use kondate_shared::mealplan::MealType;
use serde::Serialize;
use serde_json::json;
use time::Date;

use crate::config::Config;

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Schedule a recipe for a meal
    Add {
        /// Day in YYYY-MM-DD format
        #[arg(value_parser = super::parse_date)]
        date: Date,

        /// breakfast, lunch or dinner
        meal_type: MealType,

        recipe_id: i64,
    },
    /// List meal plans, optionally limited to a date range (inclusive)
    List {
        #[arg(long, value_parser = super::parse_date, requires = "to")]
        from: Option<Date>,

        #[arg(long, value_parser = super::parse_date, requires = "from")]
        to: Option<Date>,
    },
    Delete { id: i64 },
}

#[derive(Serialize)]
pub struct MealPlanOutput {
    pub id: i64,
    pub date: String,
    pub meal_type: MealType,
    pub recipe_id: i64,
}

impl TryFrom<MealPlanView> for MealPlanOutput {
    type Error = anyhow::Error;

    fn try_from(view: MealPlanView) -> Result<Self> {
        Ok(Self {
            id: view.id,
            date: super::format_date(view.day()?)?,
            meal_type: view.meal_type.0,
            recipe_id: view.recipe_id,
        })
    }
}

pub async fn run(config: &Config, command: PlanCommands) -> Result<()> {
    let state = crate::db::create_state(&config.database).await?;

    match command {
        PlanCommands::Add {
            date,
            meal_type,
            recipe_id,
        } => {
            if kondate_recipe::Query(state.clone())
                .find(recipe_id)
                .await?
                .is_none()
            {
                tracing::warn!(recipe_id, "meal plan points to an unknown recipe");
            }

            let id = kondate_mealplan::Command::new(state)
                .create(MealPlanInput {
                    date,
                    meal_type,
                    recipe_id,
                })
                .await?;

            super::print_json(&json!({ "id": id }))
        }
        PlanCommands::List { from, to } => {
            let query = kondate_mealplan::Query(state);
            let plans = match (from, to) {
                (Some(from), Some(to)) => query.list_range(from, to).await?,
                _ => query.list().await?,
            };

            let output = plans
                .into_iter()
                .map(MealPlanOutput::try_from)
                .collect::<Result<Vec<_>>>()?;

            super::print_json(&output)
        }
        PlanCommands::Delete { id } => {
            kondate_mealplan::Command::new(state).delete(id).await?;

            super::print_json(&json!({ "deleted": id }))
        }
    }
}
