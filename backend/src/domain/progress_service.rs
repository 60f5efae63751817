use anyhow::Result;
use log::{info, warn};
use shared::{DeleteResponse, EntityId, NewProgressPhoto, ProgressPhoto, ProgressPhotoListResponse};

use super::error::DomainError;
use super::validation::ValidationError;
use super::SharedStore;

/// Service for progress photos. Image data arrives already captured.
#[derive(Clone)]
pub struct ProgressService {
    store: SharedStore,
}

impl ProgressService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_photos(&self) -> ProgressPhotoListResponse {
        let store = self.store.lock().await;
        ProgressPhotoListResponse {
            photos: store.snapshot().progress_photos.items().to_vec(),
        }
    }

    pub async fn add_photo(&self, photo: NewProgressPhoto) -> Result<ProgressPhoto> {
        info!("Adding progress photo for {}", photo.date);

        let has_image = photo
            .image_url
            .as_deref()
            .map_or(false, |url| !url.trim().is_empty());
        if !has_image {
            warn!("Progress photo rejected: no image");
            return Err(DomainError::from(ValidationError::MissingImage).into());
        }

        let mut store = self.store.lock().await;
        let added = store
            .add_progress_photo(photo)
            .await
            .ok_or_else(|| DomainError::from(ValidationError::IdsExhausted("progress photos")))?;

        info!("Added progress photo with ID: {}", added.id);
        Ok(added)
    }

    pub async fn update_photo(&self, photo: ProgressPhoto) -> Result<ProgressPhoto> {
        info!("Updating progress photo: {}", photo.id);

        let mut store = self.store.lock().await;
        if !store.update_progress_photo(photo.clone()).await {
            warn!("Progress photo not found: {}", photo.id);
            return Err(DomainError::not_found("Progress photo", photo.id).into());
        }
        Ok(photo)
    }

    pub async fn delete_photo(&self, id: EntityId) -> Result<DeleteResponse> {
        info!("Deleting progress photo: {}", id);

        let mut store = self.store.lock().await;
        if !store.delete_progress_photo(id).await {
            warn!("Progress photo not found: {}", id);
            return Err(DomainError::not_found("Progress photo", id).into());
        }

        Ok(DeleteResponse {
            id,
            success_message: "Progress photo deleted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{shared_memory_store, test_today};

    #[tokio::test]
    async fn test_add_requires_image() {
        let (storage, store) = shared_memory_store().await;
        let service = ProgressService::new(store);

        for image_url in [None, Some(String::new())] {
            let err = service
                .add_photo(NewProgressPhoto {
                    date: test_today(),
                    image_url,
                    notes: None,
                })
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Please capture a photo first");
        }
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn test_add_update_delete() {
        let (_storage, store) = shared_memory_store().await;
        let service = ProgressService::new(store);

        let mut photo = service
            .add_photo(NewProgressPhoto {
                date: test_today(),
                image_url: Some("data:image/jpeg;base64,/9j/4AAQ".to_string()),
                notes: Some("Morning light".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(photo.id, 4);

        photo.notes = None;
        service.update_photo(photo.clone()).await.unwrap();
        assert_eq!(service.list_photos().await.photos.last(), Some(&photo));

        service.delete_photo(photo.id).await.unwrap();
        assert_eq!(service.list_photos().await.photos.len(), 3);
        assert!(service.delete_photo(photo.id).await.is_err());
    }
}
