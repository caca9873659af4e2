//! Built-in model registry
//!
//! This module loads the selectable models from the builtin_models.toml file
//! embedded at build time. The registry is static: no mutation, no
//! persistence, and no remote model discovery. Entries are keyed by a stable
//! short id; the display name exists only for presentation, so two entries
//! sharing a label can never shadow each other in lookups.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    pub id: String,
    pub api_id: String,
    pub display_name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct BuiltinModelsConfig {
    models: Vec<ModelSpec>,
}

pub struct ModelRegistry {
    models: Vec<ModelSpec>,
}

impl ModelRegistry {
    /// Load the registry from the embedded configuration.
    pub fn builtin() -> Self {
        const CONFIG_CONTENT: &str = include_str!("../builtin_models.toml");

        let config: BuiltinModelsConfig =
            toml::from_str(CONFIG_CONTENT).expect("Failed to parse builtin_models.toml");

        Self {
            models: config.models,
        }
    }

    /// Ordered list of selectable models.
    pub fn models(&self) -> &[ModelSpec] {
        &self.models
    }

    /// Look up a model by its stable id (case-insensitive).
    pub fn find(&self, id: &str) -> Option<&ModelSpec> {
        self.models.iter().find(|m| m.id.eq_ignore_ascii_case(id))
    }

    /// Presentation-layer lookup by display name. Callers must pass a name
    /// taken from this same registry, so a miss means a caller bug.
    pub fn find_by_display_name(&self, name: &str) -> Option<&ModelSpec> {
        self.models
            .iter()
            .find(|m| m.display_name.eq_ignore_ascii_case(name))
    }

    /// The model selected when neither config nor the command line names one.
    pub fn default_model(&self) -> &ModelSpec {
        self.models
            .first()
            .expect("builtin_models.toml defines no models")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_registry_is_populated() {
        let registry = ModelRegistry::builtin();
        assert!(!registry.models().is_empty());

        for model in registry.models() {
            assert!(!model.id.is_empty());
            assert!(!model.api_id.is_empty());
            assert!(!model.display_name.is_empty());
            assert!(!model.description.is_empty());
            // Gateway model identifiers are namespaced as vendor/model.
            assert!(model.api_id.contains('/'));
        }
    }

    #[test]
    fn ids_are_unique() {
        let registry = ModelRegistry::builtin();
        let ids: HashSet<&str> = registry.models().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), registry.models().len());
    }

    #[test]
    fn lookup_is_idempotent() {
        let registry = ModelRegistry::builtin();
        let first = registry.find("gpt-3.5-turbo").unwrap().api_id.clone();
        let second = registry.find("gpt-3.5-turbo").unwrap().api_id.clone();
        assert_eq!(first, second);
        assert_eq!(first, "openai/gpt-3.5-turbo");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = ModelRegistry::builtin();
        assert!(registry.find("Claude-Instant").is_some());
        assert!(registry.find_by_display_name("claude instant").is_some());
    }

    #[test]
    fn unknown_ids_return_none() {
        let registry = ModelRegistry::builtin();
        assert!(registry.find("nonexistent").is_none());
        assert!(registry.find_by_display_name("No Such Model").is_none());
    }

    #[test]
    fn display_name_lookup_matches_id_lookup() {
        let registry = ModelRegistry::builtin();
        for model in registry.models() {
            let by_name = registry.find_by_display_name(&model.display_name).unwrap();
            assert_eq!(by_name.id, model.id);
            assert_eq!(by_name.api_id, model.api_id);
        }
    }

    #[test]
    fn default_model_is_the_first_entry() {
        let registry = ModelRegistry::builtin();
        assert_eq!(registry.default_model().id, registry.models()[0].id);
    }
}
