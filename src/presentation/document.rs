use crate::utils::format::{format_date, format_file_size};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A file uploaded by or for a user (passport, ticket, ...)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier of the document
    #[serde(default)]
    pub document_id: String,
    /// Original file name
    #[serde(default)]
    pub file_name: String,
    /// Document category
    #[serde(rename = "type", default)]
    pub document_type: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Upload timestamp (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: u64,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Document {
    /// Size in human readable units
    #[must_use]
    pub fn human_size(&self) -> String {
        format_file_size(self.file_size)
    }

    /// Upload day as `YYYY-MM-DD`, or `"unknown"`
    #[must_use]
    pub fn upload_day(&self) -> String {
        self.upload_date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Description, or a placeholder when empty
    #[must_use]
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "No description",
        }
    }
}
