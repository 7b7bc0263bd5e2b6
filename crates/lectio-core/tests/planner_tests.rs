use jiff::civil::Date;
use lectio_core::{
    params::{
        CreateLocalPlan, CreatePresetPlan, DayRange, DeletePlan, Id, ListPlans,
        LocalPlanParameters, UpdateProgress,
    },
    Planner, PlanStatus, PresetProfile,
};

mod common;

fn local_params(name: &str, total_days: u32) -> CreateLocalPlan {
    CreateLocalPlan {
        name: name.to_string(),
        start_date: Date::constant(2026, 3, 1),
        parameters: LocalPlanParameters {
            total_days,
            order: Default::default(),
            books: vec!["Gospels".to_string()],
            include_psalms: true,
            include_proverbs: false,
        },
    }
}

async fn create_local(planner: &Planner, name: &str, total_days: u32) -> lectio_core::Plan {
    planner
        .create_local_plan(&local_params(name, total_days))
        .await
        .expect("Failed to create local plan")
}

#[tokio::test]
async fn test_local_plan_lifecycle() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let plan = create_local(&planner, "Évangiles", 5).await;
    assert_eq!(plan.total_days, 5);
    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(plan.days.len(), 5);
    assert_eq!(plan.days[0].day_index, 1);
    assert_eq!(plan.days[0].date, Date::constant(2026, 3, 1));
    assert_eq!(plan.days[4].date, Date::constant(2026, 3, 5));
    // Local generation attaches devotional content to every day.
    assert!(plan.days.iter().all(|d| d.meditation_theme.is_some()));
    assert!(plan.days.iter().all(|d| d.memory_verse.is_some()));
    assert!(plan.days.iter().all(|d| d.readings.len() == 2)); // gospel + psalm

    // Round trip through the database.
    let fetched = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(fetched.name, "Évangiles");
    assert_eq!(fetched.days.len(), 5);
    assert_eq!(fetched.source.kind(), "local");
    assert_eq!(fetched.days[2].readings, plan.days[2].readings);

    // Listing shows the plan with zero completed days.
    let summaries = planner
        .list_plans(&ListPlans::default())
        .await
        .expect("Failed to list plans");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_days, 5);
    assert_eq!(summaries[0].completed_days, 0);
}

#[tokio::test]
async fn test_progress_updates_flip_plan_status() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let plan = create_local(&planner, "Court", 3).await;

    // Complete days one by one; the plan stays active until the last one.
    for day_index in 1..=2u32 {
        let (day, stats) = planner
            .update_progress(&UpdateProgress {
                plan_id: plan.id,
                day_index,
                completed: true,
                notes: None,
            })
            .await
            .expect("Failed to update progress");
        assert!(day.completed);
        assert!(day.completed_at.is_some());
        assert_eq!(stats.completed_days, day_index);
        assert!(!stats.is_complete());
    }

    let fetched = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(fetched.status, PlanStatus::Active);

    let (_, stats) = planner
        .update_progress(&UpdateProgress {
            plan_id: plan.id,
            day_index: 3,
            completed: true,
            notes: Some("Terminé!".to_string()),
        })
        .await
        .expect("Failed to update progress");
    assert!(stats.is_complete());
    assert_eq!(stats.percent, 100);

    let completed = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(completed.status, PlanStatus::Completed);
    assert_eq!(completed.days[2].notes.as_deref(), Some("Terminé!"));

    // Un-completing a day never reverses the plan status.
    let (day, stats) = planner
        .update_progress(&UpdateProgress {
            plan_id: plan.id,
            day_index: 2,
            completed: false,
            notes: None,
        })
        .await
        .expect("Failed to update progress");
    assert!(!day.completed);
    assert!(day.completed_at.is_none());
    assert_eq!(stats.completed_days, 2);

    let still_completed = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(still_completed.status, PlanStatus::Completed);
}

#[tokio::test]
async fn test_completed_filter() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let done = create_local(&planner, "Fini", 1).await;
    create_local(&planner, "En cours", 3).await;

    planner
        .update_progress(&UpdateProgress {
            plan_id: done.id,
            day_index: 1,
            completed: true,
            notes: None,
        })
        .await
        .expect("Failed to update progress");

    let all = planner
        .list_plans(&ListPlans { completed: false })
        .await
        .expect("Failed to list plans");
    assert_eq!(all.len(), 2);

    let completed = planner
        .list_plans(&ListPlans { completed: true })
        .await
        .expect("Failed to list plans");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].name, "Fini");
}

#[tokio::test]
async fn test_preset_plan_creation() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let plan = planner
        .create_preset_plan(&CreatePresetPlan {
            slug: "thompson-no-worry".to_string(),
            start_date: Date::constant(2026, 3, 2),
            profile: PresetProfile::default(),
        })
        .await
        .expect("Failed to create preset plan");

    assert_eq!(plan.name, "Ne vous inquiétez pas — Apprentissages de Mt 6");
    assert_eq!(plan.total_days, 21);
    assert_eq!(plan.source.kind(), "preset");
    // Sunday is this preset's rest day.
    assert!(plan
        .days
        .iter()
        .all(|d| d.date.weekday() != jiff::civil::Weekday::Sunday));
}

#[tokio::test]
async fn test_unknown_preset_falls_back() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let plan = planner
        .create_preset_plan(&CreatePresetPlan {
            slug: "does-not-exist".to_string(),
            start_date: Date::constant(2026, 3, 2),
            profile: PresetProfile::default(),
        })
        .await
        .expect("Failed to create preset plan");

    assert_eq!(plan.name, "Exigence spirituelle — Transformation profonde");
    assert_eq!(plan.total_days, 30);
}

#[tokio::test]
async fn test_ics_import_from_text() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let ics = "BEGIN:VCALENDAR\n\
        BEGIN:VEVENT\n\
        DTSTART:20260301\n\
        SUMMARY:Matthieu 1\n\
        END:VEVENT\n\
        BEGIN:VEVENT\n\
        DTSTART:20260302\n\
        SUMMARY:Matthieu 2\n\
        DESCRIPTION:Suite de la généalogie\n\
        END:VEVENT\n\
        END:VCALENDAR\n";

    let plan = planner
        .import_ics_text("Importé", "plan.ics", ics)
        .await
        .expect("Failed to import ICS");

    assert_eq!(plan.total_days, 2);
    assert_eq!(plan.start_date, Date::constant(2026, 3, 1));
    assert_eq!(plan.source.kind(), "import");
    assert_eq!(plan.days[0].readings, vec!["Matthieu 1"]);
    assert_eq!(plan.days[1].notes.as_deref(), Some("Suite de la généalogie"));
}

#[tokio::test]
async fn test_ics_import_rejects_empty_calendar() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let result = planner
        .import_ics_text("Vide", "empty.ics", "BEGIN:VCALENDAR\nEND:VCALENDAR\n")
        .await;
    assert!(matches!(
        result,
        Err(lectio_core::PlannerError::NoReadings { .. })
    ));

    // Nothing was persisted.
    let summaries = planner
        .list_plans(&ListPlans::default())
        .await
        .expect("Failed to list plans");
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_day_range_queries() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let plan = create_local(&planner, "Semaine", 7).await;

    let middle = planner
        .get_days(&DayRange {
            plan_id: plan.id,
            from: Some(3),
            to: Some(5),
        })
        .await
        .expect("Failed to get days");
    assert_eq!(middle.len(), 3);
    assert_eq!(middle[0].day_index, 3);
    assert_eq!(middle[2].day_index, 5);

    let missing_plan = planner
        .get_days(&DayRange {
            plan_id: 999,
            from: None,
            to: None,
        })
        .await;
    assert!(matches!(
        missing_plan,
        Err(lectio_core::PlannerError::PlanNotFound { id: 999 })
    ));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let plan = create_local(&planner, "À supprimer", 2).await;

    let unconfirmed = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        unconfirmed,
        Err(lectio_core::PlannerError::InvalidInput { .. })
    ));

    planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete plan");

    let gone = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to query plan");
    assert!(gone.is_none());

    let missing = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: true,
        })
        .await;
    assert!(matches!(
        missing,
        Err(lectio_core::PlannerError::PlanNotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_progress_unknown_day() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let plan = create_local(&planner, "Court", 2).await;

    let result = planner
        .update_progress(&UpdateProgress {
            plan_id: plan.id,
            day_index: 99,
            completed: true,
            notes: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(lectio_core::PlannerError::DayNotFound { day_index: 99, .. })
    ));

    let result = planner
        .update_progress(&UpdateProgress {
            plan_id: 12345,
            day_index: 1,
            completed: true,
            notes: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(lectio_core::PlannerError::PlanNotFound { id: 12345 })
    ));
}
