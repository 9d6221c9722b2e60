//! Session-backed user profile store
//!
//! Holds the current user's demographic/consent profile in memory and
//! mirrors it to an injected session storage slot. Constructed once at
//! process start and passed to whichever layer needs it.

use std::sync::Arc;

use shared::UserProfile;

use crate::error::{ClientError, ClientResult};
use crate::traits::SessionStorage;

/// Storage slot holding the JSON-encoded profile
pub const PROFILE_SLOT: &str = "userData";

/// In-memory profile state mirrored to durable session storage
pub struct ProfileStore {
    profile: Option<UserProfile>,
    storage: Arc<dyn SessionStorage>,
}

impl ProfileStore {
    /// Create an empty store over the given storage capability
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            profile: None,
            storage,
        }
    }

    /// Load a previously persisted profile from the session slot
    ///
    /// An absent slot yields `Ok(None)`. A malformed payload yields
    /// `ClientError::StorageParse` with the in-memory value left absent;
    /// the caller decides whether to log or surface it.
    pub async fn load(&mut self) -> ClientResult<Option<UserProfile>> {
        let Some(raw) = self.storage.read(PROFILE_SLOT).await? else {
            return Ok(None);
        };

        let profile = UserProfile::from_json(&raw).map_err(|e| ClientError::StorageParse {
            message: e.to_string(),
        })?;

        self.profile = Some(profile.clone());
        Ok(Some(profile))
    }

    /// Current in-memory profile, if any
    pub fn get(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Replace the profile and persist it to the session slot
    ///
    /// The whole record is replaced; fields are never patched in place.
    pub async fn set(&mut self, profile: UserProfile) -> ClientResult<()> {
        let encoded = profile.to_json()?;
        self.storage.write(PROFILE_SLOT, &encoded).await?;
        self.profile = Some(profile);

        tracing::debug!("💾 Profile persisted to session slot");
        Ok(())
    }

    /// Drop the profile and remove the persisted slot
    ///
    /// Idempotent: clearing twice is a no-op the second time.
    pub async fn clear(&mut self) -> ClientResult<()> {
        self.profile = None;
        self.storage.remove(PROFILE_SLOT).await?;

        tracing::debug!("🗑️ Profile cleared");
        Ok(())
    }

    /// Whether the stored profile is usable for a recommendation request
    ///
    /// Re-derived on every call: true iff a profile exists, privacy
    /// consent was given, and age is non-zero. `age == 0` counts as
    /// incomplete.
    pub fn is_complete(&self) -> bool {
        match &self.profile {
            Some(p) => p.is_privacy_agreed && p.age != 0,
            None => false,
        }
    }
}
