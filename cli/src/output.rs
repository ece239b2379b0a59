//! Output formatting for resolved option values.

use command_options_core::{Diagnostic, OptionSchema, Resolution};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

#[derive(Debug, Serialize)]
struct ResolvedOption<'a> {
    option: &'a str,
    value: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    options: Vec<ResolvedOption<'a>>,
    diagnostics: &'a [Diagnostic<'a>],
}

/// Formats a resolution in the requested output format.
pub fn format_resolution(
    schema: &OptionSchema,
    resolution: &Resolution<'_>,
    format: OutputFormat,
) -> Result<String, String> {
    let output = ResolveOutput {
        options: schema
            .iter()
            .zip(&resolution.values)
            .map(|(spec, value)| ResolvedOption {
                option: spec.long_name.as_str(),
                value: *value,
            })
            .collect(),
        diagnostics: &resolution.diagnostics,
    };

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&output).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(resolution_to_table(&output)),
    }
}

fn resolution_to_table(output: &ResolveOutput<'_>) -> String {
    let mut out = String::new();

    let max_name = output
        .options
        .iter()
        .map(|entry| entry.option.len())
        .max()
        .unwrap_or(6);

    for entry in &output.options {
        let value = entry.value.unwrap_or("-");
        out.push_str(&format!(
            "{:<width$}  {value}\n",
            entry.option,
            width = max_name
        ));
    }

    out
}

/// Formats values the way the demo program prints them.
pub fn format_demo_lines(schema: &OptionSchema, resolution: &Resolution<'_>) -> String {
    let mut out = String::new();
    for (i, (spec, value)) in schema.iter().zip(&resolution.values).enumerate() {
        match value {
            Some(value) => out.push_str(&format!(
                "Option #{i} ({}) is \"{value}\".\n",
                spec.long_name
            )),
            None => out.push_str(&format!("Option #{i} ({}) is not set.\n", spec.long_name)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use command_options_core::{OptionSpec, all_options};

    use super::*;

    fn schema() -> OptionSchema {
        OptionSchema::from_specs(vec![
            OptionSpec::new("file", Some('f'), Some("foo.txt")),
            OptionSpec::long_only("stuff", None),
        ])
    }

    #[test]
    fn test_table_pads_names_and_marks_absent() {
        let schema = schema();
        let resolution = all_options(&schema, &["-f", "baz.txt"]);
        let table = format_resolution(&schema, &resolution, OutputFormat::Table).unwrap();

        assert_eq!(table, "file   baz.txt\nstuff  -\n");
    }

    #[test]
    fn test_json_keeps_schema_order() {
        let schema = schema();
        let resolution = all_options(&schema, &["--stuff", "mine", "-q", "x"]);
        let raw = format_resolution(&schema, &resolution, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed["options"][0]["option"], "file");
        assert_eq!(parsed["options"][0]["value"], "foo.txt");
        assert_eq!(parsed["options"][1]["value"], "mine");
        assert_eq!(parsed["diagnostics"][0]["kind"], "unknown_option");
        assert_eq!(parsed["diagnostics"][0]["index"], 2);
    }

    #[test]
    fn test_demo_lines() {
        let schema = schema();
        let resolution = all_options(&schema, &[] as &[&str]);

        assert_eq!(
            format_demo_lines(&schema, &resolution),
            "Option #0 (file) is \"foo.txt\".\nOption #1 (stuff) is not set.\n"
        );
    }
}
