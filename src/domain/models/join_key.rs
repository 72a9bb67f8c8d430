use super::user_profile_record::UserProfileRecord;

/// Which field of a primary record is matched against `UserProfileRecord::id`.
///
/// `/streams` records carry the broadcaster in `user_id`, while `/search/channels`
/// records use their own `id` for the broadcaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKey {
    ByOwnerId,
    BySelfId,
}

/// A primary record that can receive profile metadata.
pub trait Correlatable {
    fn self_id(&self) -> &str;

    /// Owning-user identifier, if the record carries one.
    fn owner_id(&self) -> Option<&str>;

    /// Sets or clears the display name and profile image.
    fn attach_profile(&mut self, profile: Option<&UserProfileRecord>);

    fn join_key(&self, key: JoinKey) -> Option<&str> {
        match key {
            JoinKey::ByOwnerId => self.owner_id(),
            JoinKey::BySelfId => Some(self.self_id()),
        }
    }
}
