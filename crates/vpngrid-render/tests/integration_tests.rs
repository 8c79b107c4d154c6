//! Integration tests for vpngrid-render with the fixture catalogs.
//!
//! These tests run the full path from catalog documents on disk to the
//! chooser table markup.

use vpngrid_catalog::CatalogFiles;
use vpngrid_core::GridConfig;
use vpngrid_render::{render_choices, GridRenderer, RenderError, RenderSettings, TemplatesFile};

/// Fixture directory relative to the workspace root
const FIXTURES_DIR: &str = "testing/fixtures/vpnmgmt";

fn fixture(name: &str) -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(FIXTURES_DIR).join(name).to_string_lossy().to_string()
}

fn catalog() -> vpngrid_core::InMemoryCatalog {
    CatalogFiles::new(fixture("vpnservers.xml"), fixture("countryflags.xml"))
        .load()
        .unwrap()
}

/// Server names in the order their links appear in the markup
fn linked_servers(html: &str) -> Vec<String> {
    html.split("vpnserver=")
        .skip(1)
        .map(|rest| {
            rest.split(|c| c == '"' || c == '&')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

// =============================================================================
// Default table
// =============================================================================

#[test]
fn test_fixture_table() {
    let rendered = render_choices(&catalog(), &GridConfig::default(), &RenderSettings::default()).unwrap();

    assert_eq!(rendered.rows, 2);
    assert_eq!(rendered.tiles, 5);
    assert_eq!(rendered.html.matches("<TR>").count(), 2);
    assert_eq!(
        linked_servers(&rendered.html),
        vec!["de-fra-01", "se-sto-01", "us-nyc-01", "jp-tok-01", "br-sao-01"]
    );
}

#[test]
fn test_fixture_tile_contents() {
    let html = render_choices(&catalog(), &GridConfig::default(), &RenderSettings::default())
        .unwrap()
        .html;

    assert!(html.contains(r#"HREF=".?&amp;vpnserver=de-fra-01&amp;port=1194""#));
    assert!(html.contains(r#"HREF=".?&amp;vpnserver=se-sto-01""#));
    assert!(html.contains(r#"HREF=".?&amp;vpnserver=jp-tok-01&amp;port=443""#));
    assert!(html.contains(r#"SRC="images/flags/us.png""#));
    assert!(html.contains("<P>United States<br>(East Coast)</P>"));
    assert!(html.contains("<P>Sweden</P>"));
    assert!(!html.contains("Atlantis"));
    assert!(!html.contains("retired-01"));
}

#[test]
fn test_row_break_placement() {
    let html = render_choices(&catalog(), &GridConfig::default(), &RenderSettings::default())
        .unwrap()
        .html;

    let rows: Vec<Vec<String>> = html
        .split("<TR>")
        .skip(1)
        .map(linked_servers)
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["de-fra-01", "se-sto-01", "us-nyc-01"],
            vec!["jp-tok-01", "br-sao-01"],
        ]
    );
}

#[test]
fn test_columns_config() {
    let rendered = render_choices(&catalog(), &GridConfig::new(5), &RenderSettings::default()).unwrap();
    assert_eq!(rendered.rows, 1);
    assert_eq!(rendered.columns, 5);

    let rendered = render_choices(&catalog(), &GridConfig::new(1), &RenderSettings::default()).unwrap();
    assert_eq!(rendered.rows, 5);
}

// =============================================================================
// Settings and templates
// =============================================================================

#[test]
fn test_custom_settings() {
    let settings = RenderSettings {
        table_class: "Flags".to_string(),
        link_prefix: "/select?server=".to_string(),
        flags_dir: "/static/flags/".to_string(),
        ..RenderSettings::default()
    };
    let html = render_choices(&catalog(), &GridConfig::default(), &settings).unwrap().html;

    assert!(html.contains(r#"<TABLE class="Flags">"#));
    assert!(html.contains(r#"HREF="/select?server=br-sao-01""#));
    assert!(html.contains(r#"SRC="/static/flags/br.png""#));
}

#[test]
fn test_list_template() {
    let settings = RenderSettings {
        template: "choices_list".to_string(),
        ..RenderSettings::default()
    };
    let html = render_choices(&catalog(), &GridConfig::default(), &settings).unwrap().html;

    assert_eq!(html.matches("<LI>").count(), 5);
    assert!(html.contains("Brazil (Sao Paulo)"));
}

#[test]
fn test_missing_templates_file() {
    let settings = RenderSettings {
        templates_path: Some(fixture("no-such-templates.yaml")),
        ..RenderSettings::default()
    };
    let err = render_choices(&catalog(), &GridConfig::default(), &settings).unwrap_err();
    assert!(matches!(err, RenderError::Template(_)));
}

#[test]
fn test_inline_templates_file() {
    let templates = TemplatesFile::from_yaml(
        r#"
version: "1.0"
templates:
  choices_table:
    description: Compact
    template: "{{#each rows}}[{{#each tiles}}{{server_name}};{{/each}}]{{/each}}"
"#,
    )
    .unwrap();
    let renderer = GridRenderer::new(templates, RenderSettings::default()).unwrap();

    let grid = vpngrid_core::build_grid(&catalog(), &GridConfig::default()).unwrap();
    let out = renderer.render(&grid.rows).unwrap();
    assert_eq!(out, "[de-fra-01;se-sto-01;us-nyc-01;][jp-tok-01;br-sao-01;]");
}
