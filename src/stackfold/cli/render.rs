//! # Rendering Module
//!
//! Turns command results into terminal text through the templates in
//! [`super::templates`]. Column widths are computed here because they need
//! Unicode-aware measuring; templates only pick styles.

use super::styles::{names, STACKFOLD_THEME};
use super::templates::{CONFIG_TEMPLATE, FILE_LIST_TEMPLATE, MESSAGES_TEMPLATE};
use serde::Serialize;
use stackfold::api::{CmdMessage, ListedFile, MessageLevel};
use stackfold::config::{StackfoldConfig, CONFIG_KEYS};
use stackfold::model::Category;
use stencil::render_with_color;
use unicode_width::UnicodeWidthStr;

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct FileLineData {
    name: String,
    padding: String,
    category: String,
    style: &'static str,
}

#[derive(Serialize)]
struct FileListData {
    files: Vec<FileLineData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_with_color(MESSAGES_TEMPLATE, &data, &STACKFOLD_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_file_list(files: &[ListedFile], use_color: bool) -> String {
    let width = files.iter().map(|f| f.name.width()).max().unwrap_or(0);
    let data = FileListData {
        files: files
            .iter()
            .map(|f| {
                let (category, style) = match f.category {
                    Some(Category::Parameters) => ("parameters".to_string(), names::PARAMETERS),
                    Some(Category::Outputs) => ("outputs".to_string(), names::OUTPUTS),
                    Some(Category::Resources) => ("resources".to_string(), names::RESOURCES),
                    None => ("ignored".to_string(), names::IGNORED),
                };
                FileLineData {
                    name: f.name.clone(),
                    padding: " ".repeat(width.saturating_sub(f.name.width())),
                    category,
                    style,
                }
            })
            .collect(),
    };
    render_with_color(FILE_LIST_TEMPLATE, &data, &STACKFOLD_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_config(config: &StackfoldConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: CONFIG_KEYS
            .into_iter()
            .map(|key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect(),
    };
    render_with_color(CONFIG_TEMPLATE, &data, &STACKFOLD_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}
