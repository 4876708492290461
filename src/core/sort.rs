//! # Column Sorting
//!
//! Sorting only reorders what is drawn. The loaded records stay in fetch
//! order so bulk selection is unaffected.

use std::cmp::Ordering;

use crate::api::Artwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Title,
        SortColumn::PlaceOfOrigin,
        SortColumn::ArtistDisplay,
        SortColumn::Inscriptions,
        SortColumn::DateStart,
        SortColumn::DateEnd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Title => "Title",
            SortColumn::PlaceOfOrigin => "Place of Origin",
            SortColumn::ArtistDisplay => "Artist Display",
            SortColumn::Inscriptions => "Inscriptions",
            SortColumn::DateStart => "Date Start",
            SortColumn::DateEnd => "Date End",
        }
    }

    /// Column after this one, or `None` after the last.
    pub fn next(&self) -> Option<SortColumn> {
        let position = Self::ALL.iter().position(|c| c == self)?;
        Self::ALL.get(position + 1).copied()
    }

    fn compare(&self, a: &Artwork, b: &Artwork) -> Ordering {
        match self {
            SortColumn::Title => cmp_text(&a.title, &b.title),
            SortColumn::PlaceOfOrigin => cmp_text(&a.place_of_origin, &b.place_of_origin),
            SortColumn::ArtistDisplay => cmp_text(&a.artist_display, &b.artist_display),
            SortColumn::Inscriptions => cmp_text(&a.inscriptions, &b.inscriptions),
            SortColumn::DateStart => cmp_date(a.date_start, b.date_start),
            SortColumn::DateEnd => cmp_date(a.date_end, b.date_end),
        }
    }
}

/// Case-insensitive; empty values sort last.
fn cmp_text(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Missing dates sort last.
fn cmp_date(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Picking the active column flips it; a new column starts ascending.
    pub fn apply(current: Option<SortState>, column: SortColumn) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column,
                direction: state.direction.flip(),
            },
            _ => SortState {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// Indices into `records` in display order. Stable, so ties keep fetch order.
pub fn display_order(records: &[Artwork], sort: Option<SortState>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    if let Some(sort) = sort {
        order.sort_by(|&a, &b| {
            let ordering = sort.column.compare(&records[a], &records[b]);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    order
}
