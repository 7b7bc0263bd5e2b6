//! ICS calendar importer.
//!
//! Turns an iCalendar document into a day sequence with a single line scan.
//! Only `SUMMARY`, `DESCRIPTION` and `DTSTART` are consumed; everything else
//! in the document is ignored. Reading references are recovered from event
//! summaries by matching known book names; an unrecognizable summary is kept
//! verbatim as a placeholder reading so no imported day is ever empty.

use std::sync::LazyLock;

use jiff::{civil::Date, Zoned};
use regex::Regex;

use crate::{
    catalog,
    error::{PlannerError, Result},
    generator::GeneratedDay,
};

/// Matches a canonical book name followed by a chapter number. Longer names
/// are listed first so "1 Jean" wins over "Jean".
static BOOK_REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = catalog::all_books().map(|b| b.name).collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"({alternation})\s*(\d+)"))
        .expect("book reference pattern is valid")
});

#[derive(Default)]
struct EventAccumulator {
    summary: Option<String>,
    description: Option<String>,
    start: Option<String>,
}

/// Parse an ICS document into an ordered day sequence.
///
/// Day indices are assigned 1, 2, 3, ... in encounter order. A document
/// yielding zero usable events is an error.
pub fn import_from_ics(text: &str) -> Result<Vec<GeneratedDay>> {
    let today = Zoned::now().date();
    let mut days = Vec::new();
    let mut event: Option<EventAccumulator> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim_end_matches('\r');

        if line == "BEGIN:VEVENT" {
            event = Some(EventAccumulator::default());
        } else if line == "END:VEVENT" {
            if let Some(acc) = event.take() {
                if let (Some(summary), Some(start)) = (acc.summary, acc.start) {
                    let day_index = days.len() as u32 + 1;
                    days.push(GeneratedDay {
                        day_index,
                        date: parse_event_date(&start, today),
                        readings: readings_from_summary(&summary),
                        meditation_theme: None,
                        prayer_subjects: None,
                        memory_verse: None,
                        notes: acc.description,
                    });
                }
            }
        } else if let Some(acc) = event.as_mut() {
            if let Some(rest) = line.strip_prefix("SUMMARY:") {
                acc.summary = Some(rest.to_string());
            } else if let Some(rest) = line.strip_prefix("DESCRIPTION:") {
                acc.description = Some(rest.to_string());
            } else if let Some(rest) = line.strip_prefix("DTSTART:") {
                acc.start = Some(rest.to_string());
            }
        }
    }

    if days.is_empty() {
        return Err(PlannerError::no_readings("the ICS document"));
    }
    Ok(days)
}

/// Interpret the leading 8 characters as a compact `YYYYMMDD` date. Shorter
/// or malformed values fall back to today rather than failing the import.
fn parse_event_date(value: &str, today: Date) -> Date {
    value
        .get(..8)
        .and_then(|compact| Date::strptime("%Y%m%d", compact).ok())
        .unwrap_or(today)
}

/// Recover reading references from an event summary. Falls back to the raw
/// summary text when no known book name is found.
fn readings_from_summary(summary: &str) -> Vec<String> {
    let readings: Vec<String> = BOOK_REFERENCE_RE
        .captures_iter(summary)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]))
        .collect();

    if readings.is_empty() {
        vec![summary.trim().to_string()]
    } else {
        readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_EVENTS: &str = "BEGIN:VCALENDAR\r\n\
        VERSION:2.0\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART:20260301\r\n\
        SUMMARY:Jour 1 - Matthieu 1 et Psaumes 23\r\n\
        DESCRIPTION:Lecture du matin\r\n\
        END:VEVENT\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART:20260302T090000Z\r\n\
        SUMMARY:Jour 2 - Marc 2\r\n\
        END:VEVENT\r\n\
        END:VCALENDAR\r\n";

    #[test]
    fn test_import_two_events() {
        let days = import_from_ics(TWO_EVENTS).expect("import");
        assert_eq!(days.len(), 2);

        assert_eq!(days[0].day_index, 1);
        assert_eq!(days[0].date, Date::constant(2026, 3, 1));
        assert_eq!(days[0].readings, vec!["Matthieu 1", "Psaumes 23"]);
        assert_eq!(days[0].notes.as_deref(), Some("Lecture du matin"));

        assert_eq!(days[1].day_index, 2);
        assert_eq!(days[1].date, Date::constant(2026, 3, 2));
        assert_eq!(days[1].readings, vec!["Marc 2"]);
        assert!(days[1].notes.is_none());
    }

    #[test]
    fn test_event_without_date_is_dropped() {
        let text = "BEGIN:VEVENT\n\
            SUMMARY:Matthieu 5\n\
            END:VEVENT\n\
            BEGIN:VEVENT\n\
            DTSTART:20260310\n\
            SUMMARY:Luc 15\n\
            END:VEVENT\n";
        let days = import_from_ics(text).expect("import");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].readings, vec!["Luc 15"]);
    }

    #[test]
    fn test_unrecognized_summary_becomes_placeholder() {
        let text = "BEGIN:VEVENT\n\
            DTSTART:20260301\n\
            SUMMARY:Méditation libre\n\
            END:VEVENT\n";
        let days = import_from_ics(text).expect("import");
        assert_eq!(days[0].readings, vec!["Méditation libre"]);
    }

    #[test]
    fn test_short_date_falls_back_to_today() {
        let text = "BEGIN:VEVENT\n\
            DTSTART:2026\n\
            SUMMARY:Jean 3\n\
            END:VEVENT\n";
        let days = import_from_ics(text).expect("import");
        assert_eq!(days[0].date, Zoned::now().date());
    }

    #[test]
    fn test_numbered_books_win_over_suffixes() {
        let text = "BEGIN:VEVENT\n\
            DTSTART:20260301\n\
            SUMMARY:1 Jean 4 puis Jean 3\n\
            END:VEVENT\n";
        let days = import_from_ics(text).expect("import");
        assert_eq!(days[0].readings, vec!["1 Jean 4", "Jean 3"]);
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(matches!(
            import_from_ics("BEGIN:VCALENDAR\nEND:VCALENDAR\n"),
            Err(PlannerError::NoReadings { .. })
        ));
        assert!(import_from_ics("").is_err());
    }
}
