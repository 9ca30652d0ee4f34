//! In-memory profile collection backed by the JSON store
//!
//! Every mutation is saved immediately and only committed in memory once the
//! write succeeded, so the collection always matches what is on disk.
//! Entries are addressed by their position in the collection.

use crate::config::{LoadWarning, Profile, ProfileList, ProfileStore};
use crate::error::{ManagerError, Result};

const COPY_SUFFIX: &str = " (copy)";

pub struct ProfileCatalogue {
    store: ProfileStore,
    profiles: ProfileList,
    load_warning: Option<LoadWarning>,
}

impl ProfileCatalogue {
    /// Load the collection from `store`. Never fails: a bad file yields an
    /// empty catalogue and a warning.
    pub fn open(store: ProfileStore) -> Self {
        let outcome = store.load();
        Self {
            store,
            profiles: outcome.profiles,
            load_warning: outcome.warning,
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Why the stored document was ignored at startup, if it was
    pub fn load_warning(&self) -> Option<&LoadWarning> {
        self.load_warning.as_ref()
    }

    pub fn profiles(&self) -> &ProfileList {
        &self.profiles
    }

    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    /// Index of the first profile called `name`
    pub fn find(&self, name: &str) -> Option<usize> {
        self.profiles.position(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Matching entries with their indices; does not modify anything
    pub fn search(&self, term: &str) -> Vec<(usize, &Profile)> {
        self.profiles.search(term)
    }

    /// Append a new profile. Returns its index.
    pub fn add(&mut self, profile: Profile) -> Result<usize> {
        let profile = checked(profile)?;
        let name = profile.name.clone();

        let index = self.commit(|list| {
            list.push(profile);
            Ok(list.len() - 1)
        })?;

        tracing::debug!(index, name = %name, "profile added");
        Ok(index)
    }

    /// Replace the profile at `index` in place. Returns the stored profile.
    pub fn edit(&mut self, index: usize, updated: Profile) -> Result<&Profile> {
        let updated = checked(updated)?;

        self.commit(|list| {
            list.replace(index, updated)
                .map(|_| ())
                .ok_or_else(|| ManagerError::ProfileNotFound(format!("#{index}")))
        })?;

        tracing::debug!(index, "profile updated");
        self.profiles
            .get(index)
            .ok_or_else(|| ManagerError::ProfileNotFound(format!("#{index}")))
    }

    /// Remove the profile at `index`. Unknown indices are a no-op.
    pub fn delete(&mut self, index: usize) -> Result<Option<Profile>> {
        if self.profiles.get(index).is_none() {
            return Ok(None);
        }

        let removed = self.commit(|list| Ok(list.remove(index)))?;
        tracing::debug!(index, "profile deleted");
        Ok(removed)
    }

    /// Append a copy of the profile at `index` named `"<name> (copy)"`.
    /// Returns the new entry's index.
    pub fn duplicate(&mut self, index: usize) -> Result<usize> {
        let mut copy = self
            .profiles
            .get(index)
            .cloned()
            .ok_or_else(|| ManagerError::ProfileNotFound(format!("#{index}")))?;
        copy.name.push_str(COPY_SUFFIX);

        let new_index = self.commit(|list| {
            list.push(copy);
            Ok(list.len() - 1)
        })?;

        tracing::debug!(index, new_index, "profile duplicated");
        Ok(new_index)
    }

    /// Apply `change` to a copy of the collection, save it, then keep it
    fn commit<T>(&mut self, change: impl FnOnce(&mut ProfileList) -> Result<T>) -> Result<T> {
        let mut next = self.profiles.clone();
        let value = change(&mut next)?;
        self.store.save(&next)?;
        self.profiles = next;
        Ok(value)
    }
}

fn checked(profile: Profile) -> Result<Profile> {
    let profile = profile.normalized();
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::error::ValidationError;
    use tempfile::TempDir;

    fn catalogue(dir: &TempDir) -> ProfileCatalogue {
        ProfileCatalogue::open(ProfileStore::new(StoreConfig::new(dir.path())))
    }

    fn on_disk(dir: &TempDir) -> ProfileList {
        ProfileStore::new(StoreConfig::new(dir.path())).load().profiles
    }

    #[test]
    fn test_add_persists_immediately() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);

        let index = cat.add(Profile::new(" web ", " 10.0.0.5 ")).unwrap();
        assert_eq!(index, 0);
        assert_eq!(cat.get(0).unwrap().name, "web");
        assert_eq!(cat.get(0).unwrap().host, "10.0.0.5");
        assert_eq!(&on_disk(&dir), cat.profiles());
    }

    #[test]
    fn test_invalid_add_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);

        let err = cat.add(Profile::new("web", "   ")).unwrap_err();
        assert!(matches!(err, ManagerError::Validation(ValidationError::MissingHost)));
        assert!(cat.is_empty());
        assert!(!cat.store().path().exists());
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);
        cat.add(Profile::new("a", "h1")).unwrap();
        cat.add(Profile::new("b", "h2")).unwrap();
        cat.add(Profile::new("c", "h3")).unwrap();

        cat.edit(1, Profile::new("b2", "h2").with_port(2222)).unwrap();

        let names: Vec<_> = cat.profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b2", "c"]);
        assert_eq!(cat.get(1).unwrap().port, 2222);
        assert_eq!(&on_disk(&dir), cat.profiles());
    }

    #[test]
    fn test_edit_returns_stored_profile() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);
        cat.add(Profile::new("old", "h")).unwrap();

        let stored = cat.edit(0, Profile::new("  new  ", "h")).unwrap();
        assert_eq!(stored.name, "new");
        assert_eq!(cat.find("old"), None);
        assert_eq!(cat.find("new"), Some(0));
    }

    #[test]
    fn test_edit_validates_and_checks_index() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);
        cat.add(Profile::new("a", "h")).unwrap();

        assert!(matches!(
            cat.edit(0, Profile::new("", "h")),
            Err(ManagerError::Validation(ValidationError::MissingName))
        ));
        assert!(matches!(
            cat.edit(5, Profile::new("x", "h")),
            Err(ManagerError::ProfileNotFound(_))
        ));
        assert_eq!(cat.get(0).unwrap().name, "a");
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);
        cat.add(Profile::new("a", "h")).unwrap();
        cat.add(Profile::new("b", "h")).unwrap();

        let removed = cat.delete(0).unwrap().unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(cat.len(), 1);
        assert_eq!(on_disk(&dir).len(), 1);

        assert!(cat.delete(7).unwrap().is_none());
        assert_eq!(cat.len(), 1);
    }

    #[test]
    fn test_duplicate_appends_copy() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);
        let original = Profile::new("web", "h")
            .with_user("alice")
            .with_port(2222)
            .with_extra_args("-A");
        cat.add(original.clone()).unwrap();
        cat.add(Profile::new("other", "h")).unwrap();

        let index = cat.duplicate(0).unwrap();
        assert_eq!(index, 2);
        assert_eq!(cat.get(0).unwrap(), &original);

        let copy = cat.get(2).unwrap();
        assert_eq!(copy.name, "web (copy)");
        assert_eq!(copy, &Profile { name: "web (copy)".into(), ..original.clone() });

        cat.duplicate(0).unwrap();
        assert_eq!(cat.get(3).unwrap().name, "web (copy)");
        assert_eq!(on_disk(&dir).len(), 4);
    }

    #[test]
    fn test_failed_save_keeps_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let mut cat = ProfileCatalogue::open(ProfileStore::new(StoreConfig::new(&blocker)));
        assert!(cat.add(Profile::new("a", "h")).is_err());
        assert!(cat.is_empty());
    }

    #[test]
    fn test_search_does_not_mutate() {
        let dir = TempDir::new().unwrap();
        let mut cat = catalogue(&dir);
        cat.add(Profile::new("web", "h")).unwrap();
        cat.add(Profile::new("db", "h").with_jump_host("bastion")).unwrap();

        let hits = cat.search("BAST");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 1);
        assert_eq!(cat.len(), 2);
    }

    #[test]
    fn test_reopen_sees_saved_state() {
        let dir = TempDir::new().unwrap();
        {
            let mut cat = catalogue(&dir);
            cat.add(Profile::new("a", "h")).unwrap();
        }
        let cat = catalogue(&dir);
        assert_eq!(cat.find("a"), Some(0));
        assert!(cat.load_warning().is_none());
    }
}
