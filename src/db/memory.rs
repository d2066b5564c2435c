//! # In-Memory Member Store
//!
//! Store implementation backed by a mutex-guarded table, used by the test
//! suite in place of a live MySQL instance. Mirrors the MySQL store's
//! semantics: ids are assigned in insertion order starting at 1, updating a
//! nonexistent id affects zero rows but still succeeds, and deletion is
//! gated on referencing session ids.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::schema::{MemberDraft, MemberRecord};

use super::store::{DeleteOutcome, MemberStore, StoreError, StoreResult};

/// In-memory store for testing
pub struct InMemoryMemberStore {
    inner: Mutex<Inner>,
}

struct Inner {
    members: Vec<MemberRecord>,
    session_member_ids: Vec<u64>,
    next_id: i64,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                members: Vec::new(),
                session_member_ids: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Register a workout session referencing the given member id.
    ///
    /// Only existence matters to the delete gate, so no session content is
    /// stored.
    pub fn add_session(&self, member_id: u64) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.session_member_ids.push(member_id);
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }
}

impl Default for InMemoryMemberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn list_members(&self) -> StoreResult<Vec<MemberRecord>> {
        let inner = self.lock()?;
        Ok(inner.members.clone())
    }

    async fn find_member(&self, id: u64) -> StoreResult<Option<MemberRecord>> {
        let inner = self.lock()?;
        Ok(inner.members.iter().find(|m| m.id == id as i64).cloned())
    }

    async fn insert_member(&self, draft: &MemberDraft) -> StoreResult<()> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.members.push(MemberRecord {
            name: draft.name.clone(),
            age: draft.age.clone(),
            id,
        });
        Ok(())
    }

    async fn update_member(&self, id: u64, draft: &MemberDraft) -> StoreResult<()> {
        let mut inner = self.lock()?;
        if let Some(member) = inner.members.iter_mut().find(|m| m.id == id as i64) {
            member.name = draft.name.clone();
            member.age = draft.age.clone();
        }
        Ok(())
    }

    async fn remove_member(&self, id: u64) -> StoreResult<DeleteOutcome> {
        let mut inner = self.lock()?;
        if !inner.members.iter().any(|m| m.id == id as i64) {
            return Ok(DeleteOutcome::NotFound);
        }
        if inner.session_member_ids.contains(&id) {
            return Ok(DeleteOutcome::SessionExists);
        }
        inner.members.retain(|m| m.id != id as i64);
        Ok(DeleteOutcome::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, age: &str) -> MemberDraft {
        MemberDraft {
            name: name.to_string(),
            age: age.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryMemberStore::new();
        store.insert_member(&draft("Alice", "30")).await.unwrap();
        store.insert_member(&draft("Bob", "41")).await.unwrap();

        let members = store.list_members().await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, 1);
        assert_eq!(members[1].id, 2);
    }

    #[tokio::test]
    async fn test_update_unknown_id_succeeds_without_change() {
        let store = InMemoryMemberStore::new();
        store.insert_member(&draft("Alice", "30")).await.unwrap();

        store.update_member(999, &draft("Bob", "41")).await.unwrap();

        let members = store.list_members().await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_remove_outcomes() {
        let store = InMemoryMemberStore::new();
        store.insert_member(&draft("Alice", "30")).await.unwrap();
        store.insert_member(&draft("Bob", "41")).await.unwrap();
        store.add_session(2);

        assert_eq!(
            store.remove_member(999).await.unwrap(),
            DeleteOutcome::NotFound
        );
        assert_eq!(
            store.remove_member(2).await.unwrap(),
            DeleteOutcome::SessionExists
        );
        assert_eq!(
            store.remove_member(1).await.unwrap(),
            DeleteOutcome::Removed
        );
        assert!(store.find_member(1).await.unwrap().is_none());
    }
}
