// src/data.rs

use crate::achievements::Achievement;
use crate::catalog::Catalog;
use crate::error::Error;
use crate::model::{DashboardStats, UserProfile};
use crate::notifications::InboxItem;
use serde::Deserialize;

/// Datos iniciales de la sesión (no se guardan nunca)
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSeed {
    pub user: UserProfile,
    pub dashboard: DashboardStats,
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub inbox: Vec<InboxItem>,
}

impl SessionSeed {
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        serde_yaml::from_str(text).map_err(|source| Error::Parse {
            what: "session seed",
            source,
        })
    }
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_catalog_embedded() -> Result<Catalog, Error> {
    Catalog::from_yaml(include_str!("data/catalog.yaml"))
}

/// Carga el perfil, los logros y la bandeja desde el YAML embebido
pub fn read_session_embedded() -> Result<SessionSeed, Error> {
    SessionSeed::from_yaml(include_str!("data/session.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;

    #[test]
    fn embedded_catalog_is_valid_and_covers_every_topic() {
        let catalog = read_catalog_embedded().expect("embedded catalog");
        assert!(catalog.len() >= 3);
        for (topic, count) in catalog.topic_counts() {
            assert!(count > 0, "no questions for {topic}");
        }
        assert_eq!(catalog.get(1).map(|q| q.title.as_str()), Some("LRU Cache Implementation"));
        assert_eq!(catalog.by_topic(Topic::SystemDesign)[0].title, "Design Twitter Feed");
    }

    #[test]
    fn embedded_session_seed_parses() {
        let seed = read_session_embedded().expect("embedded session");
        assert_eq!(seed.user.first_name(), "Alex");
        assert_eq!(seed.user.level(), 12);
        assert_eq!(seed.dashboard.questions_solved, 156);
        assert!(seed.achievements.iter().any(|a| a.id == "first_submission"));
        assert!(!seed.inbox.is_empty());
    }
}
