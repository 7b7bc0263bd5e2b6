//! Collection wrapper types for displaying groups of domain objects.
//!
//! The wrappers format collections with consistent structure and handle
//! empty collections gracefully.

use std::{fmt, ops::Index};

use crate::models::{PlanSummary, ReadingDay};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Formats each summary with its own Display implementation and prints a
/// friendly message when the collection is empty.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plan summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{}", plan)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of reading days.
pub struct Days(pub Vec<ReadingDay>);

impl Days {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of days in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the day at the given index.
    pub fn get(&self, index: usize) -> Option<&ReadingDay> {
        self.0.get(index)
    }

    /// Get an iterator over the days.
    pub fn iter(&self) -> std::slice::Iter<'_, ReadingDay> {
        self.0.iter()
    }
}

impl Index<usize> for Days {
    type Output = ReadingDay;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Days {
    type Item = ReadingDay;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Days {
    type Item = &'a ReadingDay;
    type IntoIter = std::slice::Iter<'a, ReadingDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No days found.")
        } else {
            for day in &self.0 {
                write!(f, "{}", day)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::Date, Timestamp};

    use super::*;
    use crate::models::{PlanStatus, ReadingDay};

    fn create_test_plan_summary() -> PlanSummary {
        PlanSummary {
            id: 1,
            name: "Évangiles en 30 jours".to_string(),
            start_date: Date::constant(2026, 3, 1),
            status: PlanStatus::Active,
            source_kind: "local".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            total_days: 30,
            completed_days: 12,
        }
    }

    fn create_test_day() -> ReadingDay {
        ReadingDay {
            id: 1,
            plan_id: 1,
            day_index: 1,
            date: Date::constant(2026, 3, 1),
            readings: vec!["Matthieu 1".to_string(), "Psaume 1".to_string()],
            meditation_theme: Some("Amour de Dieu".to_string()),
            prayer_subjects: None,
            memory_verse: None,
            completed: false,
            completed_at: None,
            notes: None,
        }
    }

    #[test]
    fn test_plan_summaries_display() {
        let summaries = PlanSummaries(vec![create_test_plan_summary()]);
        let output = format!("{}", summaries);
        assert!(output.contains("Évangiles en 30 jours"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("(12/30)"));

        let empty = PlanSummaries(vec![]);
        assert_eq!(format!("{}", empty), "No plans found.\n");

        let mut second = create_test_plan_summary();
        second.id = 2;
        second.name = "Psaumes".to_string();
        let summaries = PlanSummaries(vec![create_test_plan_summary(), second]);
        let output = format!("{}", summaries);
        assert!(output.contains("## Évangiles en 30 jours"));
        assert!(output.contains("## Psaumes"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_days_display() {
        let days = Days(vec![create_test_day()]);
        let output = format!("{}", days);
        assert!(output.contains("### Day 1: 2026-03-01 (○)"));
        assert!(output.contains("- Matthieu 1"));
        assert!(output.contains("- Psaume 1"));
        assert!(output.contains("Amour de Dieu"));

        let empty = Days(vec![]);
        assert_eq!(format!("{}", empty), "No days found.\n");
    }

    #[test]
    fn test_completed_day_icon() {
        let mut day = create_test_day();
        day.completed = true;
        day.completed_at = Some(Timestamp::from_second(1640995200).unwrap());
        let output = format!("{}", Days(vec![day]));
        assert!(output.contains("(✓)"));
        assert!(output.contains("- Completed: "));
    }
}
