use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Champion as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub id: i64,
    pub name: String,
}

/// Read-only champion id -> display name lookup.
///
/// Built once at startup and shared behind an `Arc`. A newer patch produces a
/// new catalog value; an existing one is never mutated.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    names: HashMap<i64, String>,
}

impl ChampionCatalog {
    pub fn new(champions: impl IntoIterator<Item = Champion>) -> Self {
        let names = champions
            .into_iter()
            .map(|champion| (champion.id, champion.name))
            .collect();
        Self { names }
    }

    pub fn lookup(&self, champion_id: i64) -> Option<&str> {
        self.names.get(&champion_id).map(String::as_str)
    }

    /// Display name, or an empty string for ids missing from the catalog
    pub fn name_or_blank(&self, champion_id: i64) -> &str {
        self.lookup(champion_id).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Champions sorted by id
    pub fn champions(&self) -> Vec<Champion> {
        let mut champions: Vec<Champion> = self
            .names
            .iter()
            .map(|(id, name)| Champion {
                id: *id,
                name: name.clone(),
            })
            .collect();
        champions.sort_by_key(|c| c.id);
        champions
    }
}

impl<S: Into<String>> FromIterator<(i64, S)> for ChampionCatalog {
    fn from_iter<T: IntoIterator<Item = (i64, S)>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|(id, name)| Champion {
            id,
            name: name.into(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let catalog: ChampionCatalog = [(1, "Annie"), (103, "Ahri")].into_iter().collect();

        assert_eq!(catalog.lookup(103), Some("Ahri"));
        assert_eq!(catalog.lookup(2), None);
        assert_eq!(catalog.name_or_blank(2), "");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_champions_sorted_by_id() {
        let catalog: ChampionCatalog = [(86, "Garen"), (1, "Annie"), (103, "Ahri")].into_iter().collect();
        let ids: Vec<i64> = catalog.champions().iter().map(|c| c.id).collect();

        assert_eq!(ids, vec![1, 86, 103]);
    }
}
