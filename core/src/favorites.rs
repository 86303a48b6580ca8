// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

/// The user's favorited event ids, persisted as a JSON array of strings.
///
/// Persistence is best-effort on both ends: a missing or corrupt file loads
/// as an empty set, and save failures are logged and swallowed. Losing a
/// favorite is acceptable; failing the caller is not.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(%error, path = %path.display(), "failed to read favorites, starting empty");
                }
                return Self::default();
            }
        };
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(ids) => Self {
                ids: ids.into_iter().collect(),
            },
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "corrupt favorites file, starting empty");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        if let Some(parent) = path.parent()
            && let Err(error) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(%error, path = %parent.display(), "failed to create favorites directory");
            return;
        }
        let ids: Vec<&String> = self.ids.iter().collect();
        match serde_json::to_string(&ids) {
            Ok(json) => {
                if let Err(error) = std::fs::write(path, json) {
                    tracing::warn!(%error, path = %path.display(), "failed to save favorites");
                }
            }
            Err(error) => {
                tracing::warn!(%error, "failed to serialize favorites");
            }
        }
    }

    /// Flips membership of `id`, returning whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn toggle_flips_membership() {
        let mut favorites = Favorites::default();
        assert!(favorites.toggle("evt-1"));
        assert!(favorites.contains("evt-1"));
        assert!(!favorites.toggle("evt-1"));
        assert!(!favorites.contains("evt-1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = Favorites::default();
        favorites.toggle("evt-3");
        favorites.toggle("fw-1");
        favorites.save(&path);

        assert_eq!(Favorites::load(&path), favorites);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let favorites = Favorites::load(&dir.path().join("nope.json"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Favorites::load(&path).is_empty());
    }

    #[test]
    fn save_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be makes both
        // the directory creation and the write fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("favorites.json");

        let mut favorites = Favorites::default();
        favorites.toggle("evt-5");
        favorites.save(&path);

        assert!(Favorites::load(&path).is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/favorites.json");

        let mut favorites = Favorites::default();
        favorites.toggle("evt-9");
        favorites.save(&path);

        assert_eq!(Favorites::load(&path).len(), 1);
    }
}
