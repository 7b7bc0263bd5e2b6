//! Named plan presets and the preset-based generator.
//!
//! A preset bundles a title, two durations (standard and intensive), a book
//! list and an optional rest-day weekday mask. The generator walks calendar
//! dates from the start date, skipping rest days without consuming a day
//! index, and assigns chapter blocks by round-robin over the preset's books.

use jiff::{civil::Date, ToSpan};

use crate::{
    catalog,
    error::{PlannerError, Result},
    generator::GeneratedDay,
    models::PresetProfile,
};

/// A single preset definition.
#[derive(Debug, Clone, Copy)]
pub struct PresetDef {
    /// Stable identifier used on the command line and in stored sources
    pub slug: &'static str,
    /// Display name of the generated plan
    pub name: &'static str,
    /// One-line description for listings
    pub description: &'static str,
    /// Plan length for profiles reading up to 30 minutes per day
    pub standard_days: u32,
    /// Plan length for profiles reading more than 30 minutes per day
    pub intensive_days: u32,
    /// Books traversed round-robin, by canonical French name
    pub books: &'static [&'static str],
    /// Weekdays skipped entirely (1 = Monday .. 7 = Sunday)
    pub rest_days: &'static [u8],
}

/// All available presets. The first entry doubles as the fallback for
/// unknown slugs.
pub const PRESETS: &[PresetDef] = &[
    PresetDef {
        slug: "thompson-spiritual-demand",
        name: "Exigence spirituelle — Transformation profonde",
        description: "Un parcours exigeant à travers Matthieu, Romains et Jacques",
        standard_days: 30,
        intensive_days: 21,
        books: &["Matthieu", "Romains", "Jacques"],
        rest_days: &[],
    },
    PresetDef {
        slug: "thompson-no-worry",
        name: "Ne vous inquiétez pas — Apprentissages de Mt 6",
        description: "Vaincre l'inquiétude avec Matthieu, Philippiens et 1 Pierre",
        standard_days: 21,
        intensive_days: 14,
        books: &["Matthieu", "Philippiens", "1 Pierre"],
        rest_days: &[7],
    },
    PresetDef {
        slug: "thompson-companionship",
        name: "Cheminer en couple selon la Parole",
        description: "Lectures pour le couple, week-ends libres",
        standard_days: 28,
        intensive_days: 21,
        books: &["Cantique des Cantiques", "Éphésiens", "1 Corinthiens"],
        rest_days: &[6, 7],
    },
    PresetDef {
        slug: "thompson-prayer-life",
        name: "Vie de prière — Souffle spirituel",
        description: "Psaumes, Luc et Actes pour nourrir la prière",
        standard_days: 30,
        intensive_days: 21,
        books: &["Psaumes", "Luc", "Actes"],
        rest_days: &[],
    },
    PresetDef {
        slug: "thompson-forgiveness",
        name: "Pardon & réconciliation — Cœur libéré",
        description: "Le pardon à travers Matthieu, Luc et Colossiens",
        standard_days: 21,
        intensive_days: 14,
        books: &["Matthieu", "Luc", "Colossiens"],
        rest_days: &[7],
    },
    PresetDef {
        slug: "gospels-30",
        name: "Les quatre Évangiles",
        description: "Matthieu, Marc, Luc et Jean en lecture continue",
        standard_days: 60,
        intensive_days: 30,
        books: &["Matthieu", "Marc", "Luc", "Jean"],
        rest_days: &[],
    },
];

/// Resolve a preset slug, falling back to the first table entry when the
/// slug is unknown.
pub fn resolve(slug: &str) -> &'static PresetDef {
    PRESETS
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or(&PRESETS[0])
}

impl PresetDef {
    /// Plan length for a given profile.
    pub fn total_days(&self, profile: &PresetProfile) -> u32 {
        if profile.minutes_per_day > 30 {
            self.intensive_days
        } else {
            self.standard_days
        }
    }
}

/// Generate the day sequence for a preset.
///
/// Returns the preset's display name together with exactly
/// `total_days` records. Rest days advance the calendar without
/// consuming a day index, so the plan runs longer than `total_days`
/// calendar days when a mask is set.
pub fn generate_from_preset(
    slug: &str,
    start_date: Date,
    profile: &PresetProfile,
) -> Result<(String, Vec<GeneratedDay>)> {
    let preset = resolve(slug);
    let total_days = preset.total_days(profile);
    let chapters_per_day = (profile.minutes_per_day / 10).max(1);

    let mut days = Vec::with_capacity(total_days as usize);
    let mut date = start_date;
    for day_index in 1..=total_days {
        while preset
            .rest_days
            .contains(&(date.weekday().to_monday_one_offset() as u8))
        {
            date = advance(date)?;
        }

        let book_slot = (day_index - 1) as usize % preset.books.len();
        let reading = chapter_block(preset.books[book_slot], day_index, preset.books.len(), chapters_per_day)?;

        days.push(GeneratedDay {
            day_index,
            date,
            readings: vec![reading],
            meditation_theme: None,
            prayer_subjects: None,
            memory_verse: None,
            notes: None,
        });
        date = advance(date)?;
    }

    Ok((preset.name.to_string(), days))
}

fn advance(date: Date) -> Result<Date> {
    date.checked_add(1.day())
        .map_err(|e| PlannerError::Configuration {
            message: format!("Date arithmetic overflow: {e}"),
        })
}

/// Format a block of consecutive chapters within a book, clamped to the
/// book's chapter count.
fn chapter_block(
    book_name: &str,
    day_index: u32,
    book_count: usize,
    chapters_per_day: u32,
) -> Result<String> {
    let book = catalog::find_book(book_name).ok_or_else(|| {
        PlannerError::invalid_input("preset")
            .with_reason(format!("Preset references unknown book '{book_name}'"))
    })?;

    let start = ((day_index - 1) / book_count as u32 + 1).min(book.chapters);
    let end = (start + chapters_per_day - 1).min(book.chapters);
    if end > start {
        Ok(format!("{} {}-{}", book.name, start, end))
    } else {
        Ok(format!("{} {}", book.name, start))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::Weekday;

    use super::*;

    fn monday() -> Date {
        // 2026-03-02 is a Monday.
        Date::constant(2026, 3, 2)
    }

    #[test]
    fn test_resolve_known_and_fallback() {
        assert_eq!(resolve("thompson-prayer-life").slug, "thompson-prayer-life");
        assert_eq!(resolve("nonexistent").slug, PRESETS[0].slug);
    }

    #[test]
    fn test_day_count_matches_profile() {
        let standard = PresetProfile {
            minutes_per_day: 30,
            goal: None,
        };
        let intensive = PresetProfile {
            minutes_per_day: 45,
            goal: None,
        };

        let (name, days) =
            generate_from_preset("thompson-no-worry", monday(), &standard).expect("generate");
        assert_eq!(name, "Ne vous inquiétez pas — Apprentissages de Mt 6");
        assert_eq!(days.len(), 21);

        let (_, days) =
            generate_from_preset("thompson-no-worry", monday(), &intensive).expect("generate");
        assert_eq!(days.len(), 14);
    }

    #[test]
    fn test_rest_days_skip_calendar_not_plan() {
        let profile = PresetProfile::default();
        let (_, days) =
            generate_from_preset("thompson-companionship", monday(), &profile).expect("generate");

        assert_eq!(days.len(), 28);
        for day in &days {
            let weekday = day.date.weekday();
            assert_ne!(weekday, Weekday::Saturday);
            assert_ne!(weekday, Weekday::Sunday);
        }
        // Indices stay contiguous while dates jump over weekends.
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.day_index, i as u32 + 1);
        }
        // Day 6 lands on the following Monday, not Saturday.
        assert_eq!(days[5].date, Date::constant(2026, 3, 9));
    }

    #[test]
    fn test_round_robin_and_chapter_blocks() {
        let profile = PresetProfile {
            minutes_per_day: 30,
            goal: None,
        };
        let (_, days) =
            generate_from_preset("thompson-spiritual-demand", monday(), &profile).expect("generate");

        // 30 minutes -> 3 chapters per day, 3 books round-robin.
        assert_eq!(days[0].readings[0], "Matthieu 1-3");
        assert_eq!(days[1].readings[0], "Romains 1-3");
        assert_eq!(days[2].readings[0], "Jacques 1-3");
        assert_eq!(days[3].readings[0], "Matthieu 2-4");
    }

    #[test]
    fn test_chapter_block_clamps_to_book_end() {
        // Jacques has 5 chapters; block start and end stay within them.
        let profile = PresetProfile {
            minutes_per_day: 30,
            goal: None,
        };
        let (_, days) =
            generate_from_preset("thompson-spiritual-demand", monday(), &profile).expect("generate");

        // Day 15 is the fifth Jacques slot: start chapter 5, clamped end.
        assert_eq!(days[14].readings[0], "Jacques 5");
        // Day 30 would start past the end; start is clamped too.
        assert_eq!(days[29].readings[0], "Jacques 5");
    }

    #[test]
    fn test_minimal_minutes_read_one_chapter() {
        let profile = PresetProfile {
            minutes_per_day: 5,
            goal: None,
        };
        let (_, days) =
            generate_from_preset("thompson-prayer-life", monday(), &profile).expect("generate");
        assert_eq!(days[0].readings[0], "Psaumes 1");
        assert_eq!(days[1].readings[0], "Luc 1");
    }
}
