//! Terminal output templates.
//!
//! Kept as stand-alone files so they are easy to edit and diff. The files deliberately end
//! without a newline: every line a template emits carries its own line break.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const FILE_LIST_TEMPLATE: &str = include_str!("templates/file_list.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
