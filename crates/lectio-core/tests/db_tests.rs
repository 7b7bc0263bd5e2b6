use jiff::civil::Date;
use lectio_core::{
    generator::GeneratedDay,
    models::{PlanFilter, PlanSource, PlanStatus, PrayerSubject},
    params::LocalPlanParameters,
    Database,
};
use tempfile::TempDir;

fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open database");
    (temp_dir, db)
}

fn local_source() -> PlanSource {
    PlanSource::Local {
        parameters: LocalPlanParameters {
            total_days: 3,
            order: Default::default(),
            books: vec!["NT".to_string()],
            include_psalms: false,
            include_proverbs: false,
        },
    }
}

fn sample_days(count: u32) -> Vec<GeneratedDay> {
    (1..=count)
        .map(|day_index| GeneratedDay {
            day_index,
            date: Date::constant(2026, 3, day_index as i8),
            readings: vec![format!("Matthieu {day_index}")],
            meditation_theme: Some("Amour de Dieu".to_string()),
            prayer_subjects: Some(vec![PrayerSubject {
                theme: "Gratitude".to_string(),
                subject: "Remerciez Dieu pour ses bénédictions".to_string(),
                color: "blue".to_string(),
                acknowledged: false,
                notes: String::new(),
            }]),
            memory_verse: Some("Je puis tout par celui qui me fortifie.".to_string()),
            notes: None,
        })
        .collect()
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("test.db");
    let _first = Database::new(&path).expect("Failed to open database");
    let _second = Database::new(&path).expect("Failed to reopen database");
}

#[test]
fn test_create_and_fetch_plan_round_trip() {
    let (_temp_dir, mut db) = create_test_db();

    let source = local_source();
    let created = db
        .create_plan_with_days("Test", Date::constant(2026, 3, 1), &source, &sample_days(3))
        .expect("Failed to create plan");
    assert_eq!(created.total_days, 3);
    assert_eq!(created.status, PlanStatus::Active);

    let fetched = db
        .get_plan(created.id)
        .expect("Failed to query plan")
        .expect("Plan should exist");
    assert_eq!(fetched.name, "Test");
    assert_eq!(fetched.source, source);
    assert_eq!(fetched.days.len(), 3);

    // JSON columns survive the round trip.
    let day = &fetched.days[1];
    assert_eq!(day.readings, vec!["Matthieu 2"]);
    let subjects = day.prayer_subjects.as_ref().expect("subjects");
    assert_eq!(subjects[0].theme, "Gratitude");
    assert!(!subjects[0].acknowledged);

    assert!(db.get_plan(999).expect("Failed to query plan").is_none());
}

#[test]
fn test_list_plans_filters_by_status() {
    let (_temp_dir, mut db) = create_test_db();

    let a = db
        .create_plan_with_days("A", Date::constant(2026, 3, 1), &local_source(), &sample_days(1))
        .expect("Failed to create plan");
    db.create_plan_with_days("B", Date::constant(2026, 3, 1), &local_source(), &sample_days(2))
        .expect("Failed to create plan");

    db.update_progress(a.id, 1, true, None)
        .expect("Failed to update progress");

    let all = db.list_plans(None).expect("Failed to list plans");
    assert_eq!(all.len(), 2);

    let completed = db
        .list_plans(Some(&PlanFilter {
            status: Some(PlanStatus::Completed),
        }))
        .expect("Failed to list plans");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].name, "A");
    assert_eq!(completed[0].completed_days, 1);
    assert_eq!(completed[0].source_kind, "local");
}

#[test]
fn test_update_progress_counts_and_status() {
    let (_temp_dir, mut db) = create_test_db();
    let plan = db
        .create_plan_with_days("P", Date::constant(2026, 3, 1), &local_source(), &sample_days(2))
        .expect("Failed to create plan");

    let (day, stats) = db
        .update_progress(plan.id, 1, true, Some("lu au réveil"))
        .expect("Failed to update progress");
    assert!(day.completed);
    assert_eq!(day.notes.as_deref(), Some("lu au réveil"));
    assert_eq!(stats.total_days, 2);
    assert_eq!(stats.completed_days, 1);
    assert_eq!(stats.percent, 50);

    // Notes persist when a later update passes none.
    let (day, stats) = db
        .update_progress(plan.id, 1, false, None)
        .expect("Failed to update progress");
    assert!(!day.completed);
    assert!(day.completed_at.is_none());
    assert_eq!(day.notes.as_deref(), Some("lu au réveil"));
    assert_eq!(stats.completed_days, 0);

    db.update_progress(plan.id, 1, true, None)
        .expect("Failed to update progress");
    db.update_progress(plan.id, 2, true, None)
        .expect("Failed to update progress");

    let completed = db
        .get_plan(plan.id)
        .expect("Failed to query plan")
        .expect("Plan should exist");
    assert_eq!(completed.status, PlanStatus::Completed);
}

#[test]
fn test_delete_plan_removes_days() {
    let (_temp_dir, mut db) = create_test_db();
    let plan = db
        .create_plan_with_days("D", Date::constant(2026, 3, 1), &local_source(), &sample_days(3))
        .expect("Failed to create plan");

    db.delete_plan(plan.id).expect("Failed to delete plan");

    assert!(db.get_plan(plan.id).expect("Failed to query plan").is_none());
    assert!(matches!(
        db.get_days(plan.id, None, None),
        Err(lectio_core::PlannerError::PlanNotFound { .. })
    ));
    assert!(matches!(
        db.delete_plan(plan.id),
        Err(lectio_core::PlannerError::PlanNotFound { .. })
    ));
}

#[test]
fn test_get_days_range_bounds() {
    let (_temp_dir, mut db) = create_test_db();
    let plan = db
        .create_plan_with_days("R", Date::constant(2026, 3, 1), &local_source(), &sample_days(5))
        .expect("Failed to create plan");

    let tail = db
        .get_days(plan.id, Some(4), None)
        .expect("Failed to get days");
    assert_eq!(tail.len(), 2);
    assert_eq!(tail[0].day_index, 4);

    let head = db
        .get_days(plan.id, None, Some(2))
        .expect("Failed to get days");
    assert_eq!(head.len(), 2);
    assert_eq!(head[1].day_index, 2);

    let empty = db
        .get_days(plan.id, Some(4), Some(2))
        .expect("Failed to get days");
    assert!(empty.is_empty());
}
