use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use crate::books::domain::Book;
use crate::core::library::{LibraryError, Shelf};
use crate::shelves::domain::Shelves;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriteria {
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    AuthorAsc,
}

impl FromStr for SortCriteria {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_desc" => Ok(SortCriteria::DateDesc),
            "date_asc" => Ok(SortCriteria::DateAsc),
            "title_asc" => Ok(SortCriteria::TitleAsc),
            "title_desc" => Ok(SortCriteria::TitleDesc),
            "author_asc" => Ok(SortCriteria::AuthorAsc),
            _ => Err(LibraryError::validation(
                format!("unknown sort criteria {}", s).as_str(), Some("criteria".to_string()))),
        }
    }
}

impl Display for SortCriteria {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortCriteria::DateDesc => write!(f, "date_desc"),
            SortCriteria::DateAsc => write!(f, "date_asc"),
            SortCriteria::TitleAsc => write!(f, "title_asc"),
            SortCriteria::TitleDesc => write!(f, "title_desc"),
            SortCriteria::AuthorAsc => write!(f, "author_asc"),
        }
    }
}

// Letters compare by their base form first, so "Émile" files under e and
// "alpha" ties with "Alpha". Accents only break ties on the base form, and
// full ties keep their prior order.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_key(a).cmp(&base_key(b))
        .then_with(|| a.trim().to_lowercase().cmp(&b.trim().to_lowercase()))
}

fn base_key(s: &str) -> String {
    s.trim().nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// A missing date_added sorts as the earliest possible date.
pub fn compare<B: Book>(criteria: SortCriteria, a: &B, b: &B) -> Ordering {
    match criteria {
        SortCriteria::DateDesc => b.date_added().cmp(&a.date_added()),
        SortCriteria::DateAsc => a.date_added().cmp(&b.date_added()),
        SortCriteria::TitleAsc => collate(a.title(), b.title()),
        SortCriteria::TitleDesc => collate(b.title(), a.title()),
        SortCriteria::AuthorAsc => collate(a.first_author().unwrap_or(""), b.first_author().unwrap_or("")),
    }
}

// slice::sort_by is stable, which the shelves rely on for ties
pub fn sort_shelves(shelves: &mut Shelves, criteria: SortCriteria) {
    for shelf in Shelf::ALL {
        shelves.shelf_mut(shelf).sort_by(|a, b| compare(criteria, a, b));
    }
}
