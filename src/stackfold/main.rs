use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use stackfold::api::{CmdMessage, ConfigAction, StackfoldApi, StackfoldPaths, TemplateOverrides};
use stackfold::config::StackfoldConfig;
use stackfold::error::Result;
use stackfold::logging::init_logging;
use stackfold::model::{ListingOrder, SplitMode};
use stackfold::workspace::fs::FsWorkspace;
use std::path::PathBuf;
use tracing::debug;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::render::{render_config, render_file_list, render_messages};

/// Overrides the user-wide config directory.
const GLOBAL_CONFIG_ENV: &str = "STACKFOLD_GLOBAL_CONFIG";

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StackfoldApi<FsWorkspace>,
    use_color: bool,
}

fn run(cli: Cli) -> Result<()> {
    let use_color = !cli.no_color && stencil::stdout_supports_color();
    init_logging(cli.verbose, !cli.no_color)?;
    let ctx = init_context(&cli, use_color)?;

    match cli.command {
        Commands::Template {
            service,
            output,
            blocks,
            sorted,
        } => handle_template(&ctx, &service, output, blocks, sorted),
        Commands::List { service } => handle_list(&ctx, &service),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli, use_color: bool) -> Result<AppContext> {
    let root = match &cli.workspace {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let global = std::env::var_os(GLOBAL_CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("dev", "stackfold", "stackfold")
                .map(|dirs| dirs.config_dir().to_path_buf())
        });
    let paths = StackfoldPaths {
        project: root.join(".stackfold"),
        global,
    };

    let config = StackfoldConfig::load_first(&paths.config_dirs())?;
    debug!(root = %root.display(), ?config, "loaded configuration");

    let workspace = FsWorkspace::new(root).with_addons_dir(&config.addons_dir);
    let api = StackfoldApi::new(workspace, config, paths);
    Ok(AppContext { api, use_color })
}

fn handle_template(
    ctx: &AppContext,
    service: &str,
    output: Option<PathBuf>,
    blocks: bool,
    sorted: bool,
) -> Result<()> {
    let overrides = TemplateOverrides {
        listing_order: sorted.then_some(ListingOrder::Sorted),
        split_mode: blocks.then_some(SplitMode::Blocks),
    };
    let mut result = ctx.api.addons_template(service, overrides)?;
    let template = result.template.take().unwrap_or_default();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &template)?;
            result.add_message(CmdMessage::success(format!(
                "Wrote template to {}",
                path.display()
            )));
            print_messages(&result.messages, ctx.use_color);
        }
        None => {
            // stdout carries the template, so status goes to stderr.
            print!("{}", template);
            eprint!("{}", render_messages(&result.messages, false));
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, service: &str) -> Result<()> {
    let result = ctx.api.list_addons(service)?;
    print!("{}", render_file_list(&result.listed_files, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}
