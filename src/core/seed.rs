//! Canned conversation data
//!
//! The mockup ships with a fixed conversation, a sidebar history, and a
//! profile, all embedded from the seed.toml file at build time. Nothing in
//! this module is ever persisted or written back.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::message::Message;

/// One row in the sidebar's past-conversation list. Reference data only;
/// entries are never selected, edited, or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub title: String,
    pub profile: Profile,
    pub messages: Vec<Message>,
    pub history: Vec<HistoryEntry>,
}

/// Load the canned data from the embedded seed file
pub fn load_seed() -> SeedData {
    const SEED_CONTENT: &str = include_str!("../seed.toml");

    toml::from_str(SEED_CONTENT).expect("Failed to parse seed.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;

    #[test]
    fn test_load_seed() {
        let seed = load_seed();
        assert_eq!(seed.title, "Company Chat Assistant");
        assert_eq!(seed.messages.len(), 4);
        assert_eq!(seed.history.len(), 3);
    }

    #[test]
    fn test_seed_conversation_shape() {
        let seed = load_seed();
        let roles: Vec<Role> = seed.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );

        // Only the opening question carries an attachment.
        assert_eq!(seed.messages[0].attachments.len(), 1);
        assert!(seed.messages[0].attachments[0].starts_with("https://"));
        for msg in &seed.messages[1..] {
            assert!(!msg.has_attachments());
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let seed = load_seed();
        let ids: Vec<u32> = seed.history.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        for pair in seed.history.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
    }

    #[test]
    fn test_profile_fields() {
        let seed = load_seed();
        assert_eq!(seed.profile.name, "Sarah Johnson");
        assert_eq!(seed.profile.title, "Product Manager");
    }
}
