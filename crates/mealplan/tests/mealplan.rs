use kondate_mealplan::MealPlanInput;
use kondate_shared::mealplan::MealType;
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

#[tokio::test]
async fn test_create_update_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = kondate_mealplan::Command::new(state.clone());
    let query = kondate_mealplan::Query(state);

    let id = command
        .create(MealPlanInput {
            date: date!(2024 - 05 - 01),
            meal_type: MealType::Lunch,
            recipe_id: 7,
        })
        .await?;

    let plan = query.find(id).await?.unwrap();
    assert_eq!(plan.day()?, date!(2024 - 05 - 01));
    assert_eq!(plan.meal_type.0, MealType::Lunch);
    assert_eq!(plan.recipe_id, 7);

    command
        .update(
            id,
            MealPlanInput {
                date: date!(2024 - 05 - 02),
                meal_type: MealType::Dinner,
                recipe_id: 8,
            },
        )
        .await?;

    let plan = query.find(id).await?.unwrap();
    assert_eq!(plan.day()?, date!(2024 - 05 - 02));
    assert_eq!(plan.meal_type.0, MealType::Dinner);
    assert_eq!(plan.recipe_id, 8);

    command.delete(id).await?;
    assert!(query.find(id).await?.is_none());

    let err = command.delete(id).await.unwrap_err();
    assert_eq!(err.to_string(), format!("meal plan {id} not found"));

    Ok(())
}

#[tokio::test]
async fn test_list_range_is_inclusive() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = kondate_mealplan::Command::new(state.clone());
    let query = kondate_mealplan::Query(state);

    let mut ids = vec![];
    for (date, meal_type) in [
        (date!(2024 - 05 - 03), MealType::Dinner),
        (date!(2024 - 04 - 30), MealType::Breakfast),
        (date!(2024 - 05 - 01), MealType::Breakfast),
        (date!(2024 - 05 - 07), MealType::Lunch),
        (date!(2024 - 05 - 08), MealType::Lunch),
    ] {
        ids.push(
            command
                .create(MealPlanInput {
                    date,
                    meal_type,
                    recipe_id: 1,
                })
                .await?,
        );
    }

    let found = query
        .list_range(date!(2024 - 05 - 01), date!(2024 - 05 - 07))
        .await?
        .into_iter()
        .map(|plan| plan.id)
        .collect::<Vec<_>>();
    assert_eq!(found, vec![ids[2], ids[0], ids[3]]);

    assert_eq!(query.list().await?.len(), 5);

    let found = query
        .list_range(date!(2024 - 05 - 09), date!(2024 - 05 - 01))
        .await?;
    assert!(found.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = kondate_mealplan::Command::new(state);

    let err = command
        .create(MealPlanInput {
            date: date!(2024 - 05 - 01),
            meal_type: MealType::Lunch,
            recipe_id: 0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, kondate_shared::Error::Validate(_)));

    let err = command
        .update(
            99,
            MealPlanInput {
                date: date!(2024 - 05 - 01),
                meal_type: MealType::Lunch,
                recipe_id: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, kondate_shared::Error::NotFound(_)));

    Ok(())
}
