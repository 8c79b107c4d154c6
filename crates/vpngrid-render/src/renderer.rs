//! Template rendering for the chooser grid.
//!
//! Uses Handlebars. Variable output is escaped for `& < > " '` only, so
//! link queries keep their `=` characters readable.

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use vpngrid_core::Row;

use crate::templates::{TemplatesFile, DEFAULT_TEMPLATE};
use crate::RenderError;

/// Page-level values the templates need besides the rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub table_class: String,
    /// Prepended to each tile's link query
    pub link_prefix: String,
    /// Prepended to each tile's flag file
    pub flags_dir: String,
    pub onclick: String,
    /// Name of the template to render
    pub template: String,
    /// Templates file to use instead of the built-in one
    pub templates_path: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            table_class: "ChoicesTable".to_string(),
            link_prefix: ".?&vpnserver=".to_string(),
            flags_dir: "images/flags/".to_string(),
            onclick: "show_changing_vpn_message();".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            templates_path: None,
        }
    }
}

/// Compiled renderer
pub struct GridRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
    settings: RenderSettings,
}

impl<'a> GridRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile, settings: RenderSettings) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(escape_markup);

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", name, e)))?;
        }

        if !templates.templates.contains_key(&settings.template) {
            return Err(RenderError::Template(format!(
                "Unknown template: {}",
                settings.template
            )));
        }

        Ok(GridRenderer {
            handlebars,
            templates,
            settings,
        })
    }

    /// Build from the configured templates file, or the built-in templates
    pub fn from_settings(settings: RenderSettings) -> Result<Self, RenderError> {
        let templates = match &settings.templates_path {
            Some(path) => TemplatesFile::load(path),
            None => TemplatesFile::builtin(),
        }
        .map_err(RenderError::Template)?;

        Self::new(templates, settings)
    }

    /// Render rows with the configured template
    pub fn render(&self, rows: &[Row]) -> Result<String, RenderError> {
        self.render_with(&self.settings.template, rows)
    }

    /// Render rows with a named template
    pub fn render_with(&self, template_name: &str, rows: &[Row]) -> Result<String, RenderError> {
        self.handlebars
            .render(template_name, &self.context(rows))
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    /// Render arbitrary data, ex: a template's bundled example
    pub fn render_value(&self, template_name: &str, data: &Value) -> Result<String, RenderError> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn templates(&self) -> &TemplatesFile {
        &self.templates
    }

    fn context(&self, rows: &[Row]) -> Value {
        json!({
            "table_class": self.settings.table_class,
            "link_prefix": self.settings.link_prefix,
            "flags_dir": self.settings.flags_dir,
            "onclick": self.settings.onclick,
            "rows": rows,
        })
    }
}

/// Minimal HTML escaping for text and attribute values.
///
/// Unlike `handlebars::html_escape` this leaves `=` alone, so link queries stay readable.
pub fn escape_markup(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
