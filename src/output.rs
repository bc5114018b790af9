//! Output rendering
//!
//! Writes selected response values to stdout in the requested format.
//! Item sequences render one value per line in JSON mode so they
//! compose with line-oriented shell tooling.

use crate::error::Result;
use crate::types::JsonValue;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one value per line for item sequences)
    #[default]
    Json,
    /// Pretty-printed JSON
    Pretty,
    /// YAML
    Yaml,
}

/// Render a single value to a string
pub fn render_value(format: OutputFormat, value: &JsonValue) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
    };
    Ok(rendered)
}

/// Render a sequence of values to a string
pub fn render_items(format: OutputFormat, items: &[JsonValue]) -> Result<String> {
    match format {
        // One compact value per line
        OutputFormat::Json => Ok(items
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?
            .join("\n")),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(items)?.trim_end().to_string()),
    }
}

/// Write a single value to stdout
pub fn write_value(format: OutputFormat, value: &JsonValue) -> Result<()> {
    let rendered = render_value(format, value)?;
    writeln!(std::io::stdout(), "{rendered}")?;
    Ok(())
}

/// Write a sequence of values to stdout
pub fn write_items(format: OutputFormat, items: &[JsonValue]) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    let rendered = render_items(format, items)?;
    writeln!(std::io::stdout(), "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_value_json() {
        let value = json!({"name": "orders", "shards": 4});
        let rendered = render_value(OutputFormat::Json, &value).unwrap();
        assert_eq!(rendered, r#"{"name":"orders","shards":4}"#);
    }

    #[test]
    fn test_render_value_pretty() {
        let value = json!({"name": "orders"});
        let rendered = render_value(OutputFormat::Pretty, &value).unwrap();
        assert!(rendered.contains("\n"));
        assert!(rendered.contains("\"name\": \"orders\""));
    }

    #[test]
    fn test_render_value_yaml() {
        let value = json!({"name": "orders"});
        let rendered = render_value(OutputFormat::Yaml, &value).unwrap();
        assert_eq!(rendered, "name: orders");
    }

    #[test]
    fn test_render_items_json_is_line_oriented() {
        let items = vec![json!({"id": 1}), json!({"id": 2})];
        let rendered = render_items(OutputFormat::Json, &items).unwrap();
        assert_eq!(rendered, "{\"id\":1}\n{\"id\":2}");
    }

    #[test]
    fn test_render_items_yaml_sequence() {
        let items = vec![json!({"id": 1})];
        let rendered = render_items(OutputFormat::Yaml, &items).unwrap();
        assert!(rendered.starts_with("- id: 1"));
    }
}
