//! Station lookup by name or id.

use tracing::debug;

use crate::domain::Station;
use crate::index::{StationGraph, StationIndex, StationStore};

use super::error::SearchError;

/// Default maximum number of name-search results.
pub const DEFAULT_NAME_LIMIT: usize = 10;

/// Substring search over station names and ids.
pub struct NameSearch<'a, S: StationStore> {
    index: &'a StationIndex<S>,
}

impl<'a, S: StationStore> NameSearch<'a, S> {
    pub fn new(index: &'a StationIndex<S>) -> Self {
        Self { index }
    }

    /// Stations whose name or id contains `query`, ignoring case.
    ///
    /// Results are sorted alphabetically by name (case-insensitive, ties by
    /// id) and truncated to `limit`. A blank query matches nothing.
    pub fn search_stations(&self, query: &str, limit: usize) -> Result<Vec<Station>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let graph = self.index.snapshot()?;
        Ok(search_in(&graph, query, limit))
    }
}

/// Match `query` against every station in `graph`.
pub fn search_in(graph: &StationGraph, query: &str, limit: usize) -> Vec<Station> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(String, &Station)> = graph
        .stations()
        .filter_map(|s| {
            let name = s.name.to_lowercase();
            let hit = name.contains(&needle) || s.id.as_str().to_lowercase().contains(&needle);
            hit.then_some((name, s))
        })
        .collect();

    matches.sort_by(|(a_name, a), (b_name, b)| a_name.cmp(b_name).then_with(|| a.id.cmp(&b.id)));

    debug!(query, matches = matches.len(), "name search");

    matches
        .into_iter()
        .take(limit)
        .map(|(_, s)| s.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationInput, StationKind};
    use crate::index::MemoryStore;

    fn station(id: &str, name: &str) -> StationInput {
        StationInput {
            id: id.to_string(),
            name: name.to_string(),
            lat: 48.85,
            lon: 2.35,
            accessible: true,
            zone: None,
            kind: StationKind::Train,
        }
    }

    fn index() -> StationIndex {
        let index = StationIndex::new(MemoryStore::new());
        index
            .import(
                vec![
                    station("GDN", "Gare du Nord"),
                    station("GDL", "Gare de Lyon"),
                    station("GDE", "Gare de l'Est"),
                    station("CHT", "Châtelet"),
                    station("BIB", "Bibliothèque François Mitterrand"),
                    station("MTP", "Montparnasse"),
                ],
                vec![],
            )
            .unwrap();
        index
    }

    fn ids(results: &[Station]) -> Vec<&str> {
        results.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn substring_sorted_by_name() {
        let index = index();
        let search = NameSearch::new(&index);
        let results = search.search_stations("gare", 10).unwrap();
        assert_eq!(ids(&results), vec!["GDE", "GDL", "GDN"]);
    }

    #[test]
    fn case_insensitive() {
        let index = index();
        let search = NameSearch::new(&index);
        let lower = search.search_stations("gare", 10).unwrap();
        let upper = search.search_stations("GARE", 10).unwrap();
        assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn matches_id() {
        let index = index();
        let search = NameSearch::new(&index);
        let results = search.search_stations("mtp", 10).unwrap();
        assert_eq!(ids(&results), vec!["MTP"]);
    }

    #[test]
    fn non_ascii_names() {
        let index = index();
        let search = NameSearch::new(&index);
        let results = search.search_stations("CHÂTELET", 10).unwrap();
        assert_eq!(ids(&results), vec!["CHT"]);
    }

    #[test]
    fn truncates_to_limit() {
        let index = index();
        let search = NameSearch::new(&index);
        let results = search.search_stations("gare", 2).unwrap();
        assert_eq!(ids(&results), vec!["GDE", "GDL"]);
    }

    #[test]
    fn blank_query_is_empty_not_error() {
        let index = index();
        let search = NameSearch::new(&index);
        assert!(search.search_stations("", 10).unwrap().is_empty());
        assert!(search.search_stations("   ", 10).unwrap().is_empty());
    }

    #[test]
    fn no_match() {
        let index = index();
        let search = NameSearch::new(&index);
        assert!(search.search_stations("zzz", 10).unwrap().is_empty());
    }
}
