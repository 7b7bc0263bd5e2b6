//! Local reading-plan generator.
//!
//! Produces a full plan offline: daily readings over the selected books,
//! plus rotating meditation themes, prayer subjects and memory verses. The
//! rotation tables are fixed so day content is reproducible; only the
//! non-chronological book pick and the prayer-subject colors draw from the
//! caller-supplied random source.

use jiff::{civil::Date, ToSpan};
use rand::Rng;

use crate::{
    catalog::{self, Book},
    error::{PlannerError, Result},
    models::PrayerSubject,
    params::{LocalPlanParameters, ReadingOrder},
};

/// One generated day, before persistence assigns row IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDay {
    /// 1-based contiguous index within the plan
    pub day_index: u32,
    /// Calendar date assigned to this day
    pub date: Date,
    /// Ordered reading references (never empty)
    pub readings: Vec<String>,
    /// Meditation theme for the day
    pub meditation_theme: Option<String>,
    /// Prayer subjects for the day
    pub prayer_subjects: Option<Vec<PrayerSubject>>,
    /// Memory verse for the day
    pub memory_verse: Option<String>,
    /// Free-form notes (populated by the ICS importer from event
    /// descriptions)
    pub notes: Option<String>,
}

/// Meditation themes, rotated by day index.
const MEDITATION_THEMES: &[&str] = &[
    "Paix et sérénité",
    "Amour de Dieu",
    "Sagesse divine",
    "Grâce et miséricorde",
    "Foi et confiance",
    "Espérance et joie",
    "Pardon et réconciliation",
    "Service et humilité",
    "Persévérance et endurance",
    "Louange et adoration",
];

/// Prayer subject templates, rotated by day index with an offset per slot.
const PRAYER_TEMPLATES: &[(&str, &str)] = &[
    ("Gratitude", "Remerciez Dieu pour ses bénédictions"),
    ("Guérison", "Priez pour la guérison de vos proches"),
    ("Sagesse", "Demandez la sagesse divine"),
    ("Paix", "Priez pour la paix dans votre cœur"),
    ("Protection", "Demandez la protection divine"),
    ("Direction", "Cherchez la direction de Dieu"),
    ("Force", "Demandez la force spirituelle"),
    ("Pardon", "Priez pour le pardon"),
];

/// Display palette for prayer subjects.
const PRAYER_COLORS: &[&str] = &[
    "blue", "green", "purple", "orange", "pink", "cyan", "lime", "amber",
];

/// Memory verses, rotated by day index.
const MEMORY_VERSES: &[&str] = &[
    "Car Dieu a tant aimé le monde qu'il a donné son Fils unique, afin que quiconque croit en lui ne périsse point, mais qu'il ait la vie éternelle.",
    "Je puis tout par celui qui me fortifie.",
    "L'Éternel est mon berger: je ne manquerai de rien.",
    "Cherchez premièrement le royaume et la justice de Dieu; et toutes ces choses vous seront données par-dessus.",
    "Car je connais les pensées que j'ai pour vous, dit l'Éternel, pensées de paix et non de malheur, afin de vous donner un avenir et de l'espérance.",
    "Confie-toi en l'Éternel de tout ton cœur, et ne t'appuie pas sur ta sagesse.",
    "L'amour est patient, il est plein de bonté; l'amour n'est point envieux; l'amour ne se vante point, il ne s'enfle point d'orgueil.",
    "Car nous marchons par la foi et non par la vue.",
    "Réjouissez-vous toujours dans le Seigneur; je le répète, réjouissez-vous.",
    "Toutes choses concourent au bien de ceux qui aiment Dieu.",
];

/// Generate a complete local plan.
///
/// Dates increase strictly by one calendar day from `start_date`. The
/// chronological order is fully deterministic; other orders pick a random
/// book and chapter for each day.
pub fn generate<R: Rng + ?Sized>(
    params: &LocalPlanParameters,
    start_date: Date,
    rng: &mut R,
) -> Result<Vec<GeneratedDay>> {
    params.validate()?;
    let books = catalog::expand_book_groups(&params.books);

    let mut days = Vec::with_capacity(params.total_days as usize);
    for day_index in 1..=params.total_days {
        let date = date_for_day(start_date, day_index)?;
        let mut readings = vec![main_reading(&books, day_index, params.order, rng)];

        if params.include_psalms {
            readings.push(format!("Psaume {}", (day_index - 1) % 150 + 1));
        }
        if params.include_proverbs {
            readings.push(format!("Proverbes {}", (day_index - 1) % 31 + 1));
        }

        days.push(GeneratedDay {
            day_index,
            date,
            readings,
            meditation_theme: Some(theme_for_day(day_index).to_string()),
            prayer_subjects: Some(prayer_subjects_for_day(day_index, rng)),
            memory_verse: Some(verse_for_day(day_index).to_string()),
            notes: None,
        });
    }

    Ok(days)
}

/// Offset a plan start date by a 1-based day index.
pub fn date_for_day(start_date: Date, day_index: u32) -> Result<Date> {
    start_date
        .checked_add((i64::from(day_index) - 1).days())
        .map_err(|e| PlannerError::Configuration {
            message: format!("Date arithmetic overflow: {e}"),
        })
}

/// Meditation theme for a 1-based day index.
pub fn theme_for_day(day_index: u32) -> &'static str {
    MEDITATION_THEMES[day_index as usize % MEDITATION_THEMES.len()]
}

/// Memory verse for a 1-based day index.
pub fn verse_for_day(day_index: u32) -> &'static str {
    MEMORY_VERSES[day_index as usize % MEMORY_VERSES.len()]
}

/// Prayer subjects for a 1-based day index: 3 to 5 subjects drawn from the
/// template table with a rotating offset, each with a random palette color.
pub fn prayer_subjects_for_day<R: Rng + ?Sized>(day_index: u32, rng: &mut R) -> Vec<PrayerSubject> {
    let day = day_index as usize;
    let count = 3 + day % 3;
    (0..count)
        .map(|slot| {
            let (theme, subject) = PRAYER_TEMPLATES[(day + slot) % PRAYER_TEMPLATES.len()];
            PrayerSubject {
                theme: theme.to_string(),
                subject: subject.to_string(),
                color: PRAYER_COLORS[rng.random_range(0..PRAYER_COLORS.len())].to_string(),
                acknowledged: false,
                notes: String::new(),
            }
        })
        .collect()
}

fn main_reading<R: Rng + ?Sized>(
    books: &[&'static Book],
    day_index: u32,
    order: ReadingOrder,
    rng: &mut R,
) -> String {
    let day = day_index as usize;
    let (book, chapter) = if order == ReadingOrder::Chronological {
        let book = books[day % books.len()];
        let chapter = ((day / books.len()) as u32 + 1).min(book.chapters);
        (book, chapter)
    } else {
        let book = books[rng.random_range(0..books.len())];
        (book, rng.random_range(1..=book.chapters))
    };
    format!("{} {}", book.name, chapter)
}
