//! Output formatting for cheatsheets, listings and tags.

use std::fmt::Write as _;

use cheatsheet_core::{Cheatsheet, CopyKey, Icon};
use cheatsheet_db::FormatName;
use serde::Serialize;

use crate::error::ViewerError;

/// Marker shown next to a snippet that was just copied.
pub const COPIED_MARKER: &str = "✓ copié";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
    Yaml,
}

impl From<FormatName> for OutputFormat {
    fn from(name: FormatName) -> Self {
        match name {
            FormatName::Table => Self::Table,
            FormatName::Markdown => Self::Markdown,
            FormatName::Json => Self::Json,
            FormatName::Yaml => Self::Yaml,
        }
    }
}

/// One line of a listing.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    tags: &'a [String],
}

impl<'a> From<&'a Cheatsheet> for Summary<'a> {
    fn from(sheet: &'a Cheatsheet) -> Self {
        Self {
            name: &sheet.name,
            description: sheet.description.as_deref(),
            tags: &sheet.tags,
        }
    }
}

#[derive(Debug, Serialize)]
struct TagCount<'a> {
    tag: &'a str,
    count: usize,
}

/// Formats one cheatsheet. Snippets whose key is in `copied` get the
/// [`COPIED_MARKER`] in table and markdown output.
pub fn format_cheatsheet(
    sheet: &Cheatsheet,
    format: OutputFormat,
    copied: &[CopyKey],
) -> Result<String, ViewerError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sheet)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(sheet)?),
        OutputFormat::Markdown => Ok(cheatsheet_to_markdown(sheet, copied)),
        OutputFormat::Table => Ok(cheatsheet_to_table(sheet, copied)),
    }
}

/// Formats a list of cheatsheets as name, description and tags.
pub fn format_list(sheets: &[&Cheatsheet], format: OutputFormat) -> Result<String, ViewerError> {
    let summaries: Vec<Summary<'_>> = sheets.iter().map(|s| Summary::from(*s)).collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&summaries)?),
        OutputFormat::Markdown => {
            let mut out = String::new();
            out.push_str("| Cheatsheet | Description | Tags |\n");
            out.push_str("|------------|-------------|------|\n");
            for s in &summaries {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} |",
                    s.name,
                    s.description.unwrap_or(""),
                    s.tags.join(", ")
                );
            }
            Ok(out)
        }
        OutputFormat::Table => {
            let width = summaries.iter().map(|s| s.name.chars().count()).max().unwrap_or(4);
            let mut out = String::new();
            for (s, sheet) in summaries.iter().zip(sheets) {
                let glyph = Icon::lookup(sheet.icon.as_deref()).glyph();
                let _ = write!(out, "{glyph} {:<width$}  {}", s.name, s.description.unwrap_or(""));
                if !s.tags.is_empty() {
                    let _ = write!(out, "  [{}]", s.tags.join(", "));
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Formats tag counts, ascending by tag.
pub fn format_tags(counts: &[(&str, usize)], format: OutputFormat) -> Result<String, ViewerError> {
    let rows: Vec<TagCount<'_>> = counts
        .iter()
        .map(|&(tag, count)| TagCount { tag, count })
        .collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&rows)?),
        OutputFormat::Markdown => {
            let mut out = String::from("| Tag | Cheatsheets |\n|-----|-------------|\n");
            for row in &rows {
                let _ = writeln!(out, "| `{}` | {} |", row.tag, row.count);
            }
            Ok(out)
        }
        OutputFormat::Table => {
            let width = rows.iter().map(|r| r.tag.chars().count()).max().unwrap_or(3);
            let mut out = String::new();
            for row in &rows {
                let _ = writeln!(out, "{:<width$}  {}", row.tag, row.count);
            }
            Ok(out)
        }
    }
}

fn marker(copied: &[CopyKey], key: CopyKey) -> &'static str {
    if copied.contains(&key) {
        COPIED_MARKER
    } else {
        ""
    }
}

fn cheatsheet_to_table(sheet: &Cheatsheet, copied: &[CopyKey]) -> String {
    let mut out = String::new();
    let glyph = Icon::lookup(sheet.icon.as_deref()).glyph();

    let _ = writeln!(out, "{glyph} {}", sheet.name);
    if let Some(ref desc) = sheet.description {
        let _ = writeln!(out, "  {desc}");
    }
    if !sheet.tags.is_empty() {
        let _ = writeln!(out, "  tags: {}", sheet.tags.join(", "));
    }

    for (s, section) in sheet.sections.iter().enumerate() {
        let _ = writeln!(out, "\n== {} ==", section.title);
        for (i, item) in section.items.iter().enumerate() {
            let _ = writeln!(out, "  [{s}.{i}] {}", item.title);
            if !item.description.is_empty() {
                let _ = writeln!(out, "        {}", item.description);
            }
            if let Some(ref code) = item.code {
                let line = format!("        $ {code}  {}", marker(copied, CopyKey::code(s, i)));
                let _ = writeln!(out, "{}", line.trim_end());
            }
            for (e, example) in item.examples.iter().enumerate() {
                let line = format!(
                    "        {s}.{i}.{e}  {example}  {}",
                    marker(copied, CopyKey::example(s, i, e))
                );
                let _ = writeln!(out, "{}", line.trim_end());
            }
        }
    }

    out
}

fn cheatsheet_to_markdown(sheet: &Cheatsheet, copied: &[CopyKey]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", sheet.name);
    if let Some(ref desc) = sheet.description {
        let _ = writeln!(out, "{desc}\n");
    }
    if !sheet.tags.is_empty() {
        let tags: Vec<String> = sheet.tags.iter().map(|t| format!("`{t}`")).collect();
        let _ = writeln!(out, "**Tags:** {}\n", tags.join(", "));
    }

    for (s, section) in sheet.sections.iter().enumerate() {
        let _ = writeln!(out, "## {}\n", section.title);
        for (i, item) in section.items.iter().enumerate() {
            let _ = writeln!(out, "### {}\n", item.title);
            if !item.description.is_empty() {
                let _ = writeln!(out, "{}\n", item.description);
            }
            if let Some(ref code) = item.code {
                let _ = writeln!(out, "```sh\n{code}\n```");
                let mark = marker(copied, CopyKey::code(s, i));
                if !mark.is_empty() {
                    let _ = writeln!(out, "_{mark}_");
                }
                out.push('\n');
            }
            if !item.examples.is_empty() {
                for (e, example) in item.examples.iter().enumerate() {
                    let mark = marker(copied, CopyKey::example(s, i, e));
                    let line = format!("- `{example}` {mark}");
                    let _ = writeln!(out, "{}", line.trim_end());
                }
                out.push('\n');
            }
        }
    }

    out
}
