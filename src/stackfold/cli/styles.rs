use console::Style;
use once_cell::sync::Lazy;
use stencil::Theme;

pub mod names {
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const PARAMETERS: &str = "parameters";
    pub const OUTPUTS: &str = "outputs";
    pub const RESOURCES: &str = "resources";
    pub const IGNORED: &str = "ignored";
    pub const CONFIG_KEY: &str = "config_key";
}

pub static STACKFOLD_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::PARAMETERS, Style::new().cyan())
        .add(names::OUTPUTS, Style::new().magenta())
        .add(names::RESOURCES, Style::new().green())
        .add(names::IGNORED, Style::new().dim().italic())
        .add(names::CONFIG_KEY, Style::new().bold())
});
