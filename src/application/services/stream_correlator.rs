use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::helix_api::HelixApi;
use crate::domain::models::{
    credential::Credential,
    join_key::{Correlatable, JoinKey},
    user_profile_record::UserProfileRecord,
};
use crate::error::HelixResult;

/// Attaches display name and profile image from `/users` to primary records.
pub struct StreamCorrelator {
    api: Arc<dyn HelixApi>,
}

impl StreamCorrelator {
    pub fn new(api: Arc<dyn HelixApi>) -> Self {
        Self { api }
    }

    /// Fetches the profiles for every distinct join key in one request and merges them.
    ///
    /// Output has the same length and order as `records`.
    pub async fn correlate<R>(
        &self,
        credential: &Credential,
        records: Vec<R>,
        key: JoinKey,
    ) -> HelixResult<Vec<R>>
    where
        R: Correlatable + Send,
    {
        let ids = distinct_join_keys(&records, key);
        if ids.is_empty() {
            debug!(records = records.len(), ?key, "No join keys, skipping profile lookup");
            return Ok(merge_profiles(records, &[], key));
        }

        let profiles = self.api.get_users(credential, &ids).await?;
        debug!(
            keys = ids.len(),
            profiles = profiles.len(),
            ?key,
            "Fetched profiles for correlation"
        );

        Ok(merge_profiles(records, &profiles, key))
    }
}

/// Join keys in first-seen order, without duplicates.
pub fn distinct_join_keys<R: Correlatable>(records: &[R], key: JoinKey) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| record.join_key(key))
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Pairs each record with the first profile whose id equals its join key.
pub fn merge_profiles<R: Correlatable>(
    mut records: Vec<R>,
    profiles: &[UserProfileRecord],
    key: JoinKey,
) -> Vec<R> {
    let mut by_id: HashMap<&str, &UserProfileRecord> = HashMap::with_capacity(profiles.len());
    for profile in profiles {
        by_id.entry(profile.id.as_str()).or_insert(profile);
    }

    for record in records.iter_mut() {
        let profile = record.join_key(key).and_then(|id| by_id.get(id).copied());
        record.attach_profile(profile);
    }

    records
}
