use materia_core::{Error, FeatureDefaults, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recommender configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Neighbour count the index is fitted with (capped at the catalog size)
    pub fit_neighbors: usize,
    /// Number of recommendations returned per query
    pub result_count: usize,
    /// Per-feature fallbacks shared by the normalizer and the text vectorizer
    pub defaults: FeatureDefaults,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            fit_neighbors: 5,
            result_count: 3,
            defaults: FeatureDefaults::default(),
        }
    }
}

impl RecommenderConfig {
    /// Read a JSON configuration file; missing keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: RecommenderConfig =
            serde_json::from_str(r#"{"result_count": 5, "defaults": {"melting_point_C": 500}}"#)
                .unwrap();
        assert_eq!(config.result_count, 5);
        assert_eq!(config.fit_neighbors, 5);
        assert_eq!(config.defaults.melting_point_c, 500.0);
        assert_eq!(config.defaults.density_kg_m3, 2000.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RecommenderConfig::load("/nonexistent/materia.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
