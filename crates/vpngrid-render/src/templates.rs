//! Template loading and management for the chooser grid.
//!
//! Templates files are YAML with:
//! - Multiple named templates
//! - Handlebars syntax
//! - Optional example data per template

use serde::Deserialize;
use std::collections::HashMap;

/// Templates shipped with the crate
pub const BUILTIN_TEMPLATES: &str = include_str!("../templates/choices.yaml");

/// Template used when none is configured
pub const DEFAULT_TEMPLATE: &str = "choices_table";

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

/// Single-template file format
#[derive(Debug, Deserialize)]
pub struct LegacyTemplatesFile {
    pub template: String,
}

impl TemplatesFile {
    /// Templates bundled with this crate
    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(BUILTIN_TEMPLATES)
    }

    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file {}: {}", path, e))?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if let Ok(file) = serde_yaml::from_str::<TemplatesFile>(yaml) {
            return Ok(file);
        }

        // A bare `template:` stands in for the default table
        if let Ok(legacy) = serde_yaml::from_str::<LegacyTemplatesFile>(yaml) {
            let mut templates = HashMap::new();
            templates.insert(DEFAULT_TEMPLATE.to_string(), Template {
                description: "Default template".to_string(),
                template: legacy.template,
                example: None,
            });
            return Ok(TemplatesFile {
                version: "1.0".to_string(),
                templates,
            });
        }

        Err("Failed to parse templates YAML".to_string())
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates() {
        let file = TemplatesFile::builtin().unwrap();
        assert_eq!(file.list_templates(), vec!["choices_list", "choices_table"]);
        assert!(file.get(DEFAULT_TEMPLATE).unwrap().example.is_some());
    }

    #[test]
    fn test_legacy_format() {
        let yaml = r#"
template: "<TABLE>{{#each rows}}<TR></TR>{{/each}}</TABLE>"
"#;

        let file = TemplatesFile::from_yaml(yaml).unwrap();
        assert!(file.templates.contains_key(DEFAULT_TEMPLATE));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(TemplatesFile::from_yaml("- just\n- a list\n").is_err());
    }
}
