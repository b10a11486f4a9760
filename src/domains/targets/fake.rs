//! In-memory [`TargetClient`] for tool tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::client::TargetClient;
use super::error::TargetError;
use super::model::{CreateTargetParams, ResourceType, Target, UpdateTargetParams};

/// Stores targets in a map and counts every call that reaches it.
#[derive(Default)]
pub struct FakeTargetClient {
    targets: Mutex<HashMap<String, Target>>,
    calls: AtomicUsize,
    updates: Mutex<Vec<(String, UpdateTargetParams)>>,
    next_id: AtomicUsize,
}

impl FakeTargetClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a target with a fixed timestamp.
    pub fn with_target(self, id: &str, scope: &str, resource_type: ResourceType) -> Self {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let target = Target {
            id: id.to_string(),
            scope: scope.to_string(),
            resource_type: resource_type.into(),
            provider_url: Some("http://provider.example.com".to_string()),
            status: "active".to_string(),
            status_description: None,
            token_expired_at: None,
            created_at: at,
            updated_at: at,
            extra: Default::default(),
        };
        self.targets.lock().unwrap().insert(id.to_string(), target);
        self
    }

    /// Number of client calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every update request received, in order.
    pub fn updates(&self) -> Vec<(String, UpdateTargetParams)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<Target> {
        self.targets.lock().unwrap().get(id).cloned()
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn not_found() -> TargetError {
        TargetError::NotFound("target not found".to_string())
    }
}

#[async_trait]
impl TargetClient for FakeTargetClient {
    async fn list_targets(&self) -> Result<Vec<Target>, TargetError> {
        self.hit();
        let mut targets: Vec<_> = self.targets.lock().unwrap().values().cloned().collect();
        targets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(targets)
    }

    async fn get_target(&self, id: &str) -> Result<Target, TargetError> {
        self.hit();
        self.get(id).ok_or_else(Self::not_found)
    }

    async fn create_target(&self, params: &CreateTargetParams) -> Result<Target, TargetError> {
        self.hit();
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let target = Target {
            id: format!("created-{}", n),
            scope: params.scope.clone(),
            resource_type: params.resource_type.into(),
            provider_url: params.provider_url.clone(),
            status: "active".to_string(),
            status_description: None,
            token_expired_at: None,
            created_at: now,
            updated_at: now,
            extra: Default::default(),
        };
        self.targets
            .lock()
            .unwrap()
            .insert(target.id.clone(), target.clone());
        Ok(target)
    }

    async fn update_target(
        &self,
        id: &str,
        params: &UpdateTargetParams,
    ) -> Result<Target, TargetError> {
        self.hit();
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), params.clone()));

        // Yield so concurrent calls actually interleave.
        tokio::task::yield_now().await;

        let mut targets = self.targets.lock().unwrap();
        let target = targets.get_mut(id).ok_or_else(Self::not_found)?;
        if let Some(resource_type) = params.resource_type {
            target.resource_type = resource_type.into();
        }
        if let Some(provider_url) = &params.provider_url {
            target.provider_url = Some(provider_url.clone());
        }
        target.updated_at = Utc::now();
        Ok(target.clone())
    }

    async fn delete_target(&self, id: &str) -> Result<(), TargetError> {
        self.hit();
        tokio::task::yield_now().await;
        self.targets
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(Self::not_found)
    }
}
