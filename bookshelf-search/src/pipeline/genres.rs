//! Genre synthesis.
//!
//! Catalog categories are sparse and often academic, so each surviving
//! volume gets a label set built from its own (non-banned) categories plus
//! labels implied by keywords in its title and description.

use std::collections::BTreeSet;

use crate::heuristics::Heuristics;
use crate::types::RawCatalogItem;

/// Emitted when no label could be derived.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Derive the genre string for `item`: sorted labels joined with `", "`,
/// or [`UNKNOWN_GENRE`].
pub fn extract_genres(item: &RawCatalogItem, heuristics: &Heuristics) -> String {
    let mut genres: BTreeSet<&str> = item
        .categories()
        .iter()
        .filter(|c| !heuristics.is_banned_category(c))
        .map(String::as_str)
        .collect();

    let text = item.searchable_text();
    genres.extend(
        heuristics
            .genre_keywords
            .iter()
            .filter(|rule| text.contains(rule.keyword.as_str()))
            .map(|rule| rule.label.as_str()),
    );

    if genres.is_empty() {
        return UNKNOWN_GENRE.to_owned();
    }
    genres.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::GenreRule;
    use crate::types::VolumeInfo;

    fn make_item(title: &str, description: Option<&str>, categories: &[&str]) -> RawCatalogItem {
        RawCatalogItem {
            id: Some("id".into()),
            volume_info: Some(VolumeInfo {
                title: Some(title.into()),
                description: description.map(str::to_string),
                categories: Some(categories.iter().map(|c| c.to_string()).collect()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn no_categories_no_keywords_is_unknown() {
        let item = make_item("Dune", Some("A desert planet"), &[]);
        assert_eq!(extract_genres(&item, &Heuristics::default()), "Unknown");
    }

    #[test]
    fn absent_volume_info_is_unknown() {
        let item = RawCatalogItem {
            id: Some("id".into()),
            volume_info: None,
        };
        assert_eq!(extract_genres(&item, &Heuristics::default()), UNKNOWN_GENRE);
    }

    #[test]
    fn categories_kept_verbatim() {
        let item = make_item("Dune", None, &["Fiction"]);
        assert_eq!(extract_genres(&item, &Heuristics::default()), "Fiction");
    }

    #[test]
    fn banned_categories_dropped() {
        let item = make_item("Dune", None, &["Ecology", "Fiction"]);
        assert_eq!(extract_genres(&item, &Heuristics::default()), "Fiction");
    }

    #[test]
    fn keywords_add_labels_and_collapse_duplicates() {
        let item = make_item(
            "Galactic Heroes",
            Some("An epic space adventure with magic"),
            &["Fantasy"],
        );
        assert_eq!(
            extract_genres(&item, &Heuristics::default()),
            "Adventure, Epic, Fantasy, Science Fiction"
        );
    }

    #[test]
    fn labels_sorted_lexicographically() {
        let item = make_item("A Dystopian Tale", None, &["Young Adult"]);
        assert_eq!(
            extract_genres(&item, &Heuristics::default()),
            "Dystopian, Young Adult"
        );
    }

    #[test]
    fn custom_rules_injected() {
        let heuristics = Heuristics {
            genre_keywords: vec![GenreRule {
                keyword: "detective".into(),
                label: "Mystery".into(),
            }],
            ..Default::default()
        };
        let item = make_item("The Detective", Some("fantasy"), &[]);
        assert_eq!(extract_genres(&item, &heuristics), "Mystery");
    }
}
