use std::{collections::HashMap, path::PathBuf, sync::Arc};

use tokio::{fs, sync::RwLock};
use tracing::info;

use models::review::{validate_manager_notes, Review};

use crate::errors::ServiceError;

/// File-backed store for hosted reviews and their moderation state.
///
/// Keeps `review id -> Review` in memory behind an RwLock and rewrites the
/// JSON file after each mutation. Lightweight state where a database is
/// overkill; there are no guarantees beyond write-after-mutate.
#[derive(Clone)]
pub struct ReviewStore {
    inner: Arc<RwLock<HashMap<String, Review>>>,
    file_path: PathBuf,
}

impl ReviewStore {
    /// Load the store from the given path. A missing or unreadable file
    /// seeds the store with `seed` and writes it out, so moderation always
    /// starts from the fixture on a fresh deployment.
    pub async fn new<P: Into<PathBuf>>(
        path: P,
        seed: Vec<Review>,
    ) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<String, Review> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };

        let store = Self { inner: Arc::new(RwLock::new(map)), file_path };
        if store.inner.read().await.is_empty() && !seed.is_empty() {
            {
                let mut map = store.inner.write().await;
                for review in seed {
                    map.insert(review.id.clone(), review);
                }
            }
            store.save().await?;
            info!(path = %store.file_path.display(), "seeded review store from fixture");
        }
        Ok(Arc::new(store))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Snapshot of all reviews, newest first.
    pub async fn list(&self) -> Vec<Review> {
        let map = self.inner.read().await;
        let mut out: Vec<Review> = map.values().cloned().collect();
        out.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        out
    }

    pub async fn get(&self, id: &str) -> Option<Review> {
        let map = self.inner.read().await;
        map.get(id).cloned()
    }

    /// Replace the approval flag; returns the updated review.
    pub async fn set_approved(&self, id: &str, approved: bool) -> Result<Review, ServiceError> {
        self.mutate(id, |r| r.is_approved = approved).await
    }

    /// Replace the public/visibility flag; returns the updated review.
    pub async fn set_public(&self, id: &str, public: bool) -> Result<Review, ServiceError> {
        self.mutate(id, |r| r.is_public = public).await
    }

    /// Set or clear manager notes. Blank notes clear the field.
    pub async fn set_manager_notes(
        &self,
        id: &str,
        notes: Option<String>,
    ) -> Result<Review, ServiceError> {
        let notes = notes.filter(|n| !n.trim().is_empty());
        if let Some(n) = notes.as_deref() {
            validate_manager_notes(n)?;
        }
        self.mutate(id, move |r| r.manager_notes = notes).await
    }

    async fn mutate<F>(&self, id: &str, f: F) -> Result<Review, ServiceError>
    where
        F: FnOnce(&mut Review),
    {
        let mut map = self.inner.write().await;
        let review = map.get_mut(id).ok_or_else(|| ServiceError::not_found("review"))?;
        f(review);
        let updated = review.clone();
        drop(map);
        self.save().await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::mock::mock_reviews;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("review_store_{}.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn seeds_and_reloads_from_disk() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = ReviewStore::new(&tmp, mock_reviews()).await?;
        assert_eq!(store.list().await.len(), 6);

        // a second open must read the file, not the seed
        let store2 = ReviewStore::new(&tmp, vec![]).await?;
        assert_eq!(store2.list().await.len(), 6);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn moderation_flags_persist_across_reloads() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = ReviewStore::new(&tmp, mock_reviews()).await?;

        let updated = store.set_approved("rev-4", true).await?;
        assert!(updated.is_approved);
        let updated = store.set_public("rev-4", true).await?;
        assert!(updated.is_public);

        let reloaded = ReviewStore::new(&tmp, vec![]).await?;
        let review = reloaded.get("rev-4").await.expect("rev-4 present");
        assert!(review.is_approved && review.is_public);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = ReviewStore::new(&tmp, mock_reviews()).await?;
        let err = store.set_approved("rev-999", true).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn blank_notes_clear_the_field() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = ReviewStore::new(&tmp, mock_reviews()).await?;

        let updated = store.set_manager_notes("rev-1", Some("follow up on WiFi".into())).await?;
        assert_eq!(updated.manager_notes.as_deref(), Some("follow up on WiFi"));

        let updated = store.set_manager_notes("rev-1", Some("   ".into())).await?;
        assert!(updated.manager_notes.is_none());

        let too_long = "x".repeat(2001);
        let err = store.set_manager_notes("rev-1", Some(too_long)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn list_is_newest_first() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = ReviewStore::new(&tmp, mock_reviews()).await?;
        let list = store.list().await;
        for pair in list.windows(2) {
            assert!(pair[0].submitted_at >= pair[1].submitted_at);
        }
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
