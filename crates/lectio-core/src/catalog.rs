//! Static catalog of canonical French Bible books.
//!
//! The catalog is the single source of truth for book names, chapter counts
//! and testament membership. It backs the local generator (bounded chapter
//! selection), the preset generator (round-robin traversal) and the mapping
//! of user-supplied book sets to the upstream generator's compact "OT"/"NT"
//! encoding.

use serde::{Deserialize, Serialize};

/// Testament membership for a catalog book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Testament {
    /// Old Testament
    Ot,
    /// New Testament
    Nt,
}

/// A single canonical book entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    /// Canonical French name
    pub name: &'static str,
    /// Number of chapters
    pub chapters: u32,
    /// Testament membership
    pub testament: Testament,
}

const fn ot(name: &'static str, chapters: u32) -> Book {
    Book {
        name,
        chapters,
        testament: Testament::Ot,
    }
}

const fn nt(name: &'static str, chapters: u32) -> Book {
    Book {
        name,
        chapters,
        testament: Testament::Nt,
    }
}

/// The 39 Old Testament books in canonical order.
pub const OLD_TESTAMENT: &[Book] = &[
    ot("Genèse", 50),
    ot("Exode", 40),
    ot("Lévitique", 27),
    ot("Nombres", 36),
    ot("Deutéronome", 34),
    ot("Josué", 24),
    ot("Juges", 21),
    ot("Ruth", 4),
    ot("1 Samuel", 31),
    ot("2 Samuel", 24),
    ot("1 Rois", 22),
    ot("2 Rois", 25),
    ot("1 Chroniques", 29),
    ot("2 Chroniques", 36),
    ot("Esdras", 10),
    ot("Néhémie", 13),
    ot("Esther", 10),
    ot("Job", 42),
    ot("Psaumes", 150),
    ot("Proverbes", 31),
    ot("Ecclésiaste", 12),
    ot("Cantique des Cantiques", 8),
    ot("Ésaïe", 66),
    ot("Jérémie", 52),
    ot("Lamentations", 5),
    ot("Ézéchiel", 48),
    ot("Daniel", 12),
    ot("Osée", 14),
    ot("Joël", 3),
    ot("Amos", 9),
    ot("Abdias", 1),
    ot("Jonas", 4),
    ot("Michée", 7),
    ot("Nahum", 3),
    ot("Habacuc", 3),
    ot("Sophonie", 3),
    ot("Aggée", 2),
    ot("Zacharie", 14),
    ot("Malachie", 4),
];

/// The 27 New Testament books in canonical order.
pub const NEW_TESTAMENT: &[Book] = &[
    nt("Matthieu", 28),
    nt("Marc", 16),
    nt("Luc", 24),
    nt("Jean", 21),
    nt("Actes", 28),
    nt("Romains", 16),
    nt("1 Corinthiens", 16),
    nt("2 Corinthiens", 13),
    nt("Galates", 6),
    nt("Éphésiens", 6),
    nt("Philippiens", 4),
    nt("Colossiens", 4),
    nt("1 Thessaloniciens", 5),
    nt("2 Thessaloniciens", 3),
    nt("1 Timothée", 6),
    nt("2 Timothée", 4),
    nt("Tite", 3),
    nt("Philémon", 1),
    nt("Hébreux", 13),
    nt("Jacques", 5),
    nt("1 Pierre", 5),
    nt("2 Pierre", 3),
    nt("1 Jean", 5),
    nt("2 Jean", 1),
    nt("3 Jean", 1),
    nt("Jude", 1),
    nt("Apocalypse", 22),
];

/// The four gospels, used by the `Gospels` group tag.
pub const GOSPEL_NAMES: &[&str] = &["Matthieu", "Marc", "Luc", "Jean"];

/// Iterates over the whole catalog, Old Testament first.
pub fn all_books() -> impl Iterator<Item = &'static Book> {
    OLD_TESTAMENT.iter().chain(NEW_TESTAMENT.iter())
}

/// Looks up a book by its exact canonical name.
pub fn find_book(name: &str) -> Option<&'static Book> {
    all_books().find(|b| b.name == name)
}

/// Expands book-group tags into concrete catalog entries.
///
/// Recognized group tags are `OT`, `NT`, `Gospels`, `Psalms` and `Proverbs`;
/// any other tag is treated as an explicit canonical book name. Unknown names
/// are silently ignored. Catalog order is preserved within each group and
/// duplicates are tolerated (groups can overlap when callers mix tags).
pub fn expand_book_groups(tags: &[String]) -> Vec<&'static Book> {
    let mut selected = Vec::new();

    for tag in tags {
        match tag.as_str() {
            "OT" => selected.extend(OLD_TESTAMENT.iter()),
            "NT" => selected.extend(NEW_TESTAMENT.iter()),
            "Gospels" => {
                selected.extend(
                    NEW_TESTAMENT
                        .iter()
                        .filter(|b| GOSPEL_NAMES.contains(&b.name)),
                );
            }
            "Psalms" => selected.extend(OLD_TESTAMENT.iter().filter(|b| b.name == "Psaumes")),
            "Proverbs" => selected.extend(OLD_TESTAMENT.iter().filter(|b| b.name == "Proverbes")),
            name => {
                if let Some(book) = find_book(name) {
                    selected.push(book);
                }
            }
        }
    }

    selected
}

/// Maps a requested book set to the upstream generator's book-set tag.
///
/// Literal `OT`/`NT` tags short-circuit; otherwise each name is tested for
/// membership in the two canonical name lists. Both testaments present (or
/// neither, as a safe default) yields `"OT,NT"`.
pub fn map_to_api_book_set(books: &[String]) -> &'static str {
    if books.is_empty() {
        return "OT,NT";
    }

    let has_ot_tag = books.iter().any(|b| b == "OT");
    let has_nt_tag = books.iter().any(|b| b == "NT");
    if has_ot_tag && has_nt_tag {
        return "OT,NT";
    }
    if has_ot_tag {
        return "OT";
    }
    if has_nt_tag {
        return "NT";
    }

    let has_ot = books
        .iter()
        .any(|name| OLD_TESTAMENT.iter().any(|b| b.name == name.as_str()));
    let has_nt = books
        .iter()
        .any(|name| NEW_TESTAMENT.iter().any(|b| b.name == name.as_str()));

    match (has_ot, has_nt) {
        (true, true) => "OT,NT",
        (true, false) => "OT",
        (false, true) => "NT",
        (false, false) => "OT,NT",
    }
}
