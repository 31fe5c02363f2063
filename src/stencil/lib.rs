//! # Stencil - Named Template Rendering
//!
//! A small layer over [minijinja](https://docs.rs/minijinja) that renders serializable data
//! into named templates. It serves two audiences:
//!
//! - **Documents**: infrastructure templates (YAML and friends) that must come out verbatim.
//!   No auto-escaping is ever applied and the template's final newline is preserved.
//! - **Terminal output**: short message templates that use a `style` filter backed by
//!   `console::Style`, with color switched off for pipes and `--no-color`.
//!
//! ## Quick Example
//!
//! ```rust
//! use stencil::Renderer;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data {
//!     items: Vec<String>,
//! }
//!
//! let mut renderer = Renderer::plain();
//! renderer
//!     .add_template("list.yml", "Items:\n{%- for i in items %}\n  - {{ i }}\n{%- endfor %}\n")
//!     .unwrap();
//!
//! let out = renderer
//!     .render("list.yml", &Data { items: vec!["a".into(), "b".into()] })
//!     .unwrap();
//! assert_eq!(out, "Items:\n  - a\n  - b\n");
//! ```
//!
//! ## Styled Output
//!
//! ```rust
//! use stencil::{render_with_color, Theme};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { status: String }
//!
//! let theme = Theme::new().add("ok", Style::new().green());
//! let plain = render_with_color(
//!     r#"{{ status | style("ok") }}"#,
//!     &Data { status: "done".into() },
//!     &theme,
//!     false,
//! ).unwrap();
//! assert_eq!(plain, "done");
//! ```

use console::{Style, Term};
use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;
use std::collections::HashMap;

pub use minijinja::{Error, ErrorKind};

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles applied through the `style` template filter.
///
/// When a style name is not found, a configurable indicator is prepended to the text
/// so typos in templates are visible (defaults to `(!?)`).
#[derive(Clone)]
pub struct Theme {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Theme {
    /// Creates an empty theme with the default missing style indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator prepended to text whose style is unknown. Empty disables it.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style, replacing any previous style with that name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style, emitting ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => self.flag_missing(text),
        }
    }

    /// Checks the style name but leaves the text unstyled.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.flag_missing(text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    fn flag_missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }
}

/// Returns whether stdout can display colors.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders an inline template with explicit color control.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut renderer = Renderer::with_theme(theme.clone(), use_color);
    renderer.add_template("_inline", template)?;
    renderer.render("_inline", data)
}

/// A set of named templates compiled once and rendered on demand.
///
/// Every renderer disables auto-escaping regardless of the template name's extension, and
/// keeps the trailing newline of the template source.
pub struct Renderer {
    env: Environment<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::plain()
    }
}

impl Renderer {
    /// A renderer for documents: no theme, no color.
    pub fn plain() -> Self {
        Self::with_theme(Theme::new().missing_indicator(""), false)
    }

    /// A renderer whose `style` filter uses `theme`.
    pub fn with_theme(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, theme, use_color);
        Self { env }
    }

    /// Registers a named template, compiling it immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not registered or evaluation fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    #[test]
    fn test_theme_new_is_empty() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
    }

    #[test]
    fn test_theme_add_and_has() {
        let theme = Theme::new()
            .add("error", Style::new().red())
            .add("ok", Style::new().green());
        assert!(theme.has("error"));
        assert!(theme.has("ok"));
        assert!(!theme.has("warning"));
        assert_eq!(theme.len(), 2);
    }

    #[test]
    fn test_apply_plain_unknown_shows_indicator() {
        let theme = Theme::new();
        assert_eq!(theme.apply_plain("typo", "Hello"), "(!?) Hello");
    }

    #[test]
    fn test_apply_unknown_with_empty_indicator() {
        let theme = Theme::new().missing_indicator("");
        assert_eq!(theme.apply("typo", "Hello"), "Hello");
    }

    #[test]
    fn test_apply_known_style_emits_ansi() {
        let theme = Theme::new().add("bold", Style::new().bold());
        let styled = theme.apply("bold", "x");
        assert!(styled.contains("\x1b["));
        assert!(styled.contains('x'));
    }

    #[test]
    fn test_render_with_color_false_no_ansi() {
        let theme = Theme::new().add("ok", Style::new().green());
        let output = render_with_color(
            r#"{{ message | style("ok") }}"#,
            &SimpleData {
                message: "done".into(),
            },
            &theme,
            false,
        )
        .unwrap();
        assert_eq!(output, "done");
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::plain();
        let result = renderer.render(
            "nonexistent",
            &SimpleData {
                message: "x".into(),
            },
        );
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TemplateNotFound);
    }

    #[test]
    fn test_renderer_does_not_escape_yaml_templates() {
        let mut renderer = Renderer::plain();
        renderer.add_template("doc.yml", "v: {{ value }}").unwrap();
        let out = renderer
            .render("doc.yml", &json!({ "value": "\"<a & b>\"" }))
            .unwrap();
        assert_eq!(out, "v: \"<a & b>\"");
    }

    #[test]
    fn test_renderer_keeps_trailing_newline() {
        let mut renderer = Renderer::plain();
        renderer.add_template("t", "{{ message }}\n").unwrap();
        let out = renderer
            .render(
                "t",
                &SimpleData {
                    message: "hi".into(),
                },
            )
            .unwrap();
        assert_eq!(out, "hi\n");
    }

    #[test]
    fn test_renderer_loop_with_whitespace_control() {
        let mut renderer = Renderer::plain();
        renderer
            .add_template(
                "list",
                "Items:\n{%- for i in items %}\n  {{ i | indent(2) }}\n{%- endfor %}\n",
            )
            .unwrap();
        let out = renderer
            .render("list", &json!({ "items": ["a:", "b:\n  c: d"] }))
            .unwrap();
        assert_eq!(out, "Items:\n  a:\n  b:\n    c: d\n");
    }

    #[test]
    fn test_missing_include_fails_at_render_time() {
        let mut renderer = Renderer::plain();
        renderer
            .add_template("broken", "{% include \"missing.yml\" %}")
            .unwrap();
        let result = renderer.render(
            "broken",
            &SimpleData {
                message: "x".into(),
            },
        );
        assert!(result.is_err());
    }
}
