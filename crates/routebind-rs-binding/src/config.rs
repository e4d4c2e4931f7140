//! Declarative binder configuration.
//!
//! Hosts that prefer configuration files over in-process registration can
//! describe their binders and ignored paths in TOML and load them into a
//! [`BinderRegistry`]. Binders are an array of tables so declaration order —
//! which decides the governing binder — survives the round trip:
//!
//! ```toml
//! ignored_paths = ["api", "admin"]
//!
//! [[binders]]
//! parameter = "user"
//! entity = "User@username"
//!
//! [[binders]]
//! parameter = "organization"
//! entity = "Organization@name"
//! ```
//!
//! Custom resolver functions cannot be expressed in a file; register those
//! through [`BinderRegistry::set_binders`] instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use routebind_rs_core::{BindError, BindResult};

use crate::registry::BinderRegistry;
use crate::spec::BinderSpec;

/// One declared binder: a route parameter and an entity spec string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinderDecl {
    /// The route parameter name the binder governs.
    pub parameter: String,
    /// The entity spec, `"Kind"` or `"Kind@field"`.
    pub entity: String,
}

/// The deserialized binder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Path prefixes exempt from binding-driven continuation.
    #[serde(default)]
    pub ignored_paths: Vec<String>,
    /// Binder declarations, in governing order.
    #[serde(default)]
    pub binders: Vec<BinderDecl>,
}

impl BindingConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ImproperlyConfigured`] on malformed TOML.
    pub fn from_toml_str(text: &str) -> BindResult<Self> {
        toml::from_str(text).map_err(|e| {
            BindError::ImproperlyConfigured(format!("Invalid binder configuration: {e}"))
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Io`] if the file cannot be read, or
    /// [`BindError::ImproperlyConfigured`] on malformed TOML.
    pub fn load(path: impl AsRef<Path>) -> BindResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds a [`BinderRegistry`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ImproperlyConfigured`] if any entity spec string
    /// fails to parse.
    pub fn into_registry(self) -> BindResult<BinderRegistry> {
        let mut binders = Vec::with_capacity(self.binders.len());
        for decl in self.binders {
            let spec: BinderSpec = decl.entity.parse()?;
            binders.push((decl.parameter, spec));
        }

        let mut registry = BinderRegistry::new();
        registry.set_binders(binders);
        registry.set_ignored_paths(self.ignored_paths);
        tracing::debug!(
            binders = registry.binders().len(),
            ignored = registry.ignored_paths().len(),
            "binder registry loaded from configuration"
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        ignored_paths = ["api", "admin"]

        [[binders]]
        parameter = "user"
        entity = "User@username"

        [[binders]]
        parameter = "organization"
        entity = "Organization@name"

        [[binders]]
        parameter = "page"
        entity = "Page"
    "#;

    #[test]
    fn test_parse_and_build_registry() {
        let config = BindingConfig::from_toml_str(SAMPLE).unwrap();
        let registry = config.into_registry().unwrap();

        assert_eq!(registry.binders().len(), 3);
        // Declaration order is governing order.
        assert_eq!(registry.binders()[0].0, "user");
        assert_eq!(registry.binders()[1].0, "organization");
        assert_eq!(registry.binders()[1].1.to_string(), "Organization@name");
        assert_eq!(registry.binders()[2].1.to_string(), "Page");
        assert!(registry.is_ignored("/api/users"));
        assert!(registry.is_ignored("/admin"));
    }

    #[test]
    fn test_empty_config() {
        let registry = BindingConfig::from_toml_str("")
            .unwrap()
            .into_registry()
            .unwrap();
        assert!(registry.binders().is_empty());
        assert!(registry.ignored_paths().is_empty());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = BindingConfig::from_toml_str("binders = 3").unwrap_err();
        assert!(err.to_string().contains("Improperly configured"));
    }

    #[test]
    fn test_bad_entity_spec_rejected() {
        let config = BindingConfig::from_toml_str(
            "[[binders]]\nparameter = \"user\"\nentity = \"@username\"\n",
        )
        .unwrap();
        assert!(config.into_registry().is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = BindingConfig::load("/nonexistent/binders.toml").unwrap_err();
        assert!(matches!(err, BindError::Io(_)));
    }
}
