//! # Notes
//!
//! A [`Note`] belongs to exactly one user through `owner_id`. Notes are never edited in
//! place; they are created and deleted. Every query in this module filters on the
//! owner, which is what keeps one user's notes invisible to everyone else.

use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

use crate::StoreResult;

/// Full note record from the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Note {
    pub id: i64,
    pub owner_id: i64,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl Note {
    pub async fn create(pool: &SqlitePool, owner_id: i64, content: &str) -> StoreResult<Note> {
        let note = sqlx::query_as(
            "INSERT INTO notes (owner_id, content) VALUES (?, ?)
             RETURNING id, owner_id, content, created_at",
        )
        .bind(owner_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(note)
    }

    /// All notes owned by `owner_id`, oldest first.
    pub async fn list_by_owner(pool: &SqlitePool, owner_id: i64) -> StoreResult<Vec<Note>> {
        let notes = sqlx::query_as(
            "SELECT id, owner_id, content, created_at FROM notes WHERE owner_id = ? ORDER BY id ASC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(notes)
    }

    /// Delete note `id` if, and only if, it belongs to `owner_id`.
    ///
    /// Returns `false` when nothing matched: the note does not exist or has another owner.
    pub async fn delete(pool: &SqlitePool, id: i64, owner_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{connect_in_memory, User};

    #[tokio::test]
    async fn test_notes_are_listed_in_creation_order() {
        let pool = connect_in_memory().await.unwrap();
        let alice = User::create(&pool, "alice", "hash").await.unwrap();

        Note::create(&pool, alice.id, "first").await.unwrap();
        Note::create(&pool, alice.id, "second").await.unwrap();
        Note::create(&pool, alice.id, "third").await.unwrap();

        let contents: Vec<String> = Note::list_by_owner(&pool, alice.id)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.content)
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let pool = connect_in_memory().await.unwrap();
        let alice = User::create(&pool, "alice", "hash").await.unwrap();
        let bob = User::create(&pool, "bob", "hash").await.unwrap();

        Note::create(&pool, alice.id, "alice's note").await.unwrap();
        Note::create(&pool, bob.id, "bob's note").await.unwrap();

        let notes = Note::list_by_owner(&pool, alice.id).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "alice's note");
        assert_eq!(notes[0].owner_id, alice.id);
    }

    #[tokio::test]
    async fn test_delete_requires_matching_owner() {
        let pool = connect_in_memory().await.unwrap();
        let alice = User::create(&pool, "alice", "hash").await.unwrap();
        let bob = User::create(&pool, "bob", "hash").await.unwrap();

        let bobs = Note::create(&pool, bob.id, "keep me").await.unwrap();

        // Alice cannot delete Bob's note.
        assert!(!Note::delete(&pool, bobs.id, alice.id).await.unwrap());
        assert_eq!(Note::list_by_owner(&pool, bob.id).await.unwrap(), vec![bobs.clone()]);

        // Bob can.
        assert!(Note::delete(&pool, bobs.id, bob.id).await.unwrap());
        assert!(Note::list_by_owner(&pool, bob.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_note_is_noop() {
        let pool = connect_in_memory().await.unwrap();
        let alice = User::create(&pool, "alice", "hash").await.unwrap();

        assert!(!Note::delete(&pool, 999, alice.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_note_requires_existing_owner() {
        let pool = connect_in_memory().await.unwrap();

        assert!(Note::create(&pool, 12345, "orphan").await.is_err());
    }
}
