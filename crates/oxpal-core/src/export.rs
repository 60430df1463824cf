//! Palette Export Rendering
//!
//! Pure string builders for the supported palette syntaxes plus the
//! multi-file bundle. Nothing here touches the filesystem; renderings
//! come back as strings or named in-memory files and writing bytes
//! anywhere is the caller's concern.

use serde::Serialize;
use serde_json::json;

use crate::color::ColorValue;
use crate::cvd::simulate_cvd;
use crate::palette::Palette;
use crate::wcag::evaluate_palette_wcag;

/// Syntax of the main palette rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Css,
    Scss,
    #[default]
    Text,
}

impl ExportFormat {
    /// File extension of the main rendering
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Text => "txt",
        }
    }
}

/// Value notation attached alongside the hex form
///
/// CSS can express the rgb and hsl notations; Lab and LCh only appear as
/// data blocks in the JSON rendering and fall back to hex elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Lab,
    Lch,
}

/// Rendering options shared by every exporter
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Syntax of the main file in a bundle
    pub file_type: ExportFormat,
    /// Value notation for renderings that support one
    pub format: ValueFormat,
    /// Positional name overrides; colors past the end keep their own name
    pub custom_names: Vec<String>,
    pub include_wcag: bool,
    pub include_cvd: bool,
    pub include_lab: bool,
}

/// A named in-memory rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub name: String,
    pub content: String,
}

/// Pretty-printed JSON document with per-color entries
///
/// Each entry carries the display name and hex form, plus one extra
/// coordinate block when the value format asks for it. Lab and LCh
/// coordinates are rounded to 2 decimals.
pub fn to_json(palette: &Palette, options: &ExportOptions) -> String {
    let colors: Vec<serde_json::Value> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let mut entry = serde_json::Map::new();
            entry.insert("name".into(), json!(color_label(color, options, i)));
            entry.insert("hex".into(), json!(color.hex));
            match options.format {
                ValueFormat::Rgb => {
                    entry.insert("rgb".into(), json!(color.rgb));
                }
                ValueFormat::Hsl => {
                    entry.insert("hsl".into(), json!(color.hsl));
                }
                ValueFormat::Lab => {
                    entry.insert("lab".into(), lab_block(color));
                }
                ValueFormat::Lch => {
                    entry.insert("lch".into(), lch_block(color));
                }
                ValueFormat::Hex => {}
            }
            serde_json::Value::Object(entry)
        })
        .collect();

    let doc = json!({
        "name": palette.name,
        "created": palette.created_at,
        "colors": colors,
    });
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// CSS custom properties under `:root`, closed by a provenance comment
///
/// Property names come from the custom-name overrides (slugged) and fall
/// back to `--color-N`. The value renders as hex unless the rgb or hsl
/// notation is selected.
pub fn to_css(palette: &Palette, options: &ExportOptions) -> String {
    let vars: Vec<String> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            format!(
                "  --{}: {};",
                variable_name(options, i),
                css_value(color, options.format)
            )
        })
        .collect();
    format!(
        ":root {{\n{}\n}}\n\n/* Generated from palette: {} */",
        vars.join("\n"),
        palette.name
    )
}

/// SCSS variable lines under a provenance header, always hex-valued
pub fn to_scss(palette: &Palette, options: &ExportOptions) -> String {
    let vars: Vec<String> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("${}: {};", variable_name(options, i), color.hex))
        .collect();
    format!(
        "// Generated from palette: {}\n{}",
        palette.name,
        vars.join("\n")
    )
}

/// Numbered plain-text listing with HEX/RGB/HSL lines per color
pub fn to_text(palette: &Palette, options: &ExportOptions) -> String {
    let mut lines = vec![
        format!("Palette: {}", palette.name),
        format!("Created: {}", palette.created_at),
        String::new(),
    ];
    for (i, color) in palette.colors.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, color_label(color, options, i)));
        lines.push(format!("   HEX: {}", color.hex));
        lines.push(format!(
            "   RGB: {}, {}, {}",
            color.rgb.r, color.rgb.g, color.rgb.b
        ));
        lines.push(format!(
            "   HSL: {}°, {}%, {}%",
            color.hsl.h, color.hsl.s, color.hsl.l
        ));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// The main rendering plus the optional report documents
///
/// The accessibility reports are regenerated from the palette at render
/// time so the bundle is always self-consistent.
pub fn export_bundle(palette: &Palette, options: &ExportOptions) -> Vec<ExportFile> {
    let main = match options.file_type {
        ExportFormat::Json => to_json(palette, options),
        ExportFormat::Css => to_css(palette, options),
        ExportFormat::Scss => to_scss(palette, options),
        ExportFormat::Text => to_text(palette, options),
    };
    let mut files = vec![ExportFile {
        name: format!("{}.{}", palette.name, options.file_type.extension()),
        content: main,
    }];

    if options.include_wcag {
        let report = evaluate_palette_wcag(&palette.colors);
        files.push(json_file(
            format!("{}_wcag_report.json", palette.name),
            &report,
        ));
    }
    if options.include_cvd {
        let report = simulate_cvd(&palette.colors);
        files.push(json_file(
            format!("{}_cvd_report.json", palette.name),
            &report,
        ));
    }
    if options.include_lab {
        let entries: Vec<serde_json::Value> = palette
            .colors
            .iter()
            .map(|color| {
                json!({
                    "name": color.name,
                    "hex": color.hex,
                    "lab": lab_block(color),
                })
            })
            .collect();
        files.push(json_file(
            format!("{}_lab_values.json", palette.name),
            &entries,
        ));
    }

    files
}

fn json_file<T: Serialize>(name: String, value: &T) -> ExportFile {
    ExportFile {
        name,
        content: serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// Display label: positional override, else the color's own name, else hex
fn color_label(color: &ColorValue, options: &ExportOptions, index: usize) -> String {
    options
        .custom_names
        .get(index)
        .cloned()
        .or_else(|| color.name.clone())
        .unwrap_or_else(|| color.hex.clone())
}

/// Variable identifier: slugged override or the positional fallback
fn variable_name(options: &ExportOptions, index: usize) -> String {
    options
        .custom_names
        .get(index)
        .map(|name| slug(name))
        .unwrap_or_else(|| format!("color-{}", index + 1))
}

fn css_value(color: &ColorValue, format: ValueFormat) -> String {
    match format {
        ValueFormat::Rgb => format!("rgb({}, {}, {})", color.rgb.r, color.rgb.g, color.rgb.b),
        ValueFormat::Hsl => format!("hsl({}, {}%, {}%)", color.hsl.h, color.hsl.s, color.hsl.l),
        _ => color.hex.clone(),
    }
}

/// Lowercase with whitespace runs collapsed to single hyphens
fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn lab_block(color: &ColorValue) -> serde_json::Value {
    let lab = color.lab();
    json!({ "l": round2(lab.l), "a": round2(lab.a), "b": round2(lab.b) })
}

fn lch_block(color: &ColorValue) -> serde_json::Value {
    let lch = color.lch();
    json!({ "l": round2(lch.l), "c": round2(lch.c), "h": round2(lch.h) })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
