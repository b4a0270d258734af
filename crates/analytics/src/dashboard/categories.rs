//! Catalog breakdowns by content type and by genre

use reelscout_core::models::{Content, Genre};
use std::collections::{BTreeMap, HashMap};

use super::types::CountEntry;

/// Count content per type, ascending by type tag
pub fn contents_by_type(contents: &[Content]) -> Vec<CountEntry> {
    let mut counts: BTreeMap<&'static str, i64> = BTreeMap::new();
    for content in contents {
        *counts.entry(content.content_type.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(label, count)| CountEntry::new(label, count))
        .collect()
}

/// Count (content, genre) pairs per genre, descending by count
///
/// A content item with several genres adds one to each. Ties keep the order
/// in which genres were first seen.
pub fn contents_by_genre(contents: &[Content]) -> Vec<CountEntry> {
    let mut order: Vec<(Genre, i64)> = Vec::new();
    let mut index: HashMap<Genre, usize> = HashMap::new();

    for genre in contents.iter().flat_map(|c| c.genres.iter().copied()) {
        match index.get(&genre) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(genre, order.len());
                order.push((genre, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));

    order
        .into_iter()
        .map(|(genre, count)| CountEntry::new(genre.as_str(), count))
        .collect()
}
