//! # CLI Layer
//!
//! The only place that:
//! - reads the terminal size
//! - writes to stdout
//! - decides between text and JSON output
//!
//! ## Responsibilities
//!
//! 1. **Argument parsing**: clap turns the command line into [`Cli`]
//! 2. **Context setup**: configuration, data source, viewport width
//! 3. **Dispatch**: each subcommand calls the matching [`RosterApi`] method
//! 4. **Output**: results are rendered as text or serialized as JSON

use clap::Parser;
use console::Term;
use rosterapp::api::RosterApi;
use rosterapp::commands::CmdResult;
use rosterapp::config::{global_config_path, RosterConfig};
use rosterapp::dashboard::DEFAULT_VIEWPORT_WIDTH;
use rosterapp::error::Result;
use rosterapp::source::bundled::BundledSource;
use rosterapp::source::file::JsonFileSource;
use std::io::{self, IsTerminal};

use super::logging::{init_logging, LogConfig, LogFormat};
use super::render::{self, RenderOptions};
use super::setup::{Cli, Commands, ListArgs};
use super::shell;

pub struct AppContext {
    pub api: RosterApi,
    pub render: RenderOptions,
    pub json: bool,
}

impl AppContext {
    fn init(cli: &Cli, config: &RosterConfig) -> Result<Self> {
        let data = cli.data.clone().or_else(|| config.data.clone());
        let mut api = match &data {
            Some(path) => RosterApi::load(&JsonFileSource::new(path), config)?,
            None => RosterApi::load(&BundledSource, config)?,
        };

        let width = cli
            .width
            .or_else(|| terminal_width(config.cell_px()))
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
        tracing::debug!(width, "viewport width");
        api.resize(width);

        Ok(Self {
            api,
            render: RenderOptions::from_config(config),
            json: cli.json,
        })
    }

    /// Print `result` as JSON or through `text`.
    pub fn print<F>(&self, result: &CmdResult, text: F) -> Result<()>
    where
        F: Fn(&CmdResult) -> String,
    {
        if self.json {
            println!("{}", render::render_json(result)?);
        } else {
            print!("{}", text(result));
        }
        Ok(())
    }
}

/// Terminal columns converted to pixels, when stdout is a terminal.
fn terminal_width(cell_px: u32) -> Option<u32> {
    let term = Term::stdout();
    if !term.is_term() {
        return None;
    }
    term.size_checked()
        .map(|(_rows, cols)| columns_to_px(cols, cell_px))
}

fn columns_to_px(cols: u16, cell_px: u32) -> u32 {
    u32::from(cols).saturating_mul(cell_px)
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_format(format));

    let cwd = std::env::current_dir()?;
    let config = RosterConfig::load(&cwd)?;

    if let Some(Commands::Config) = &cli.command {
        return handle_config(&config, cli.json);
    }

    let mut ctx = AppContext::init(&cli, &config)?;
    match cli.command {
        None => handle_list(&mut ctx, &ListArgs::default()),
        Some(Commands::List(args)) => handle_list(&mut ctx, &args),
        Some(Commands::Facets) => {
            let result = ctx.api.facets();
            ctx.print(&result, render::render_facets)
        }
        Some(Commands::Stats) => {
            let result = ctx.api.stats();
            ctx.print(&result, render::render_stats)
        }
        Some(Commands::Columns) => {
            let result = ctx.api.columns();
            ctx.print(&result, render::render_columns)
        }
        Some(Commands::Shell) => {
            let interactive = io::stdin().is_terminal();
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&mut ctx, stdin.lock(), &mut stdout, interactive)
        }
        Some(Commands::Config) => Ok(()),
    }
}

fn handle_list(ctx: &mut AppContext, args: &ListArgs) -> Result<()> {
    if let Some(text) = &args.search {
        ctx.api.search(text);
    }
    let mut messages = ctx.api.apply_filter_args(&args.filters)?;
    if let Some(sort) = &args.sort {
        ctx.api.sort_by(sort)?;
    }
    ctx.api.set_page(args.page);

    let mut result = ctx.api.list();
    messages.append(&mut result.messages);
    result.messages = messages;
    ctx.print(&result, |r| render::render_list(r, &ctx.render))
}

fn handle_config(config: &RosterConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    if let serde_json::Value::Object(values) = serde_json::to_value(config)? {
        for (key, value) in &values {
            match value {
                serde_json::Value::Null => println!("{key} = (unset)"),
                serde_json::Value::String(s) => println!("{key} = {s}"),
                other => println!("{key} = {other}"),
            }
        }
    }
    if let Some(path) = global_config_path() {
        println!("# global config: {}", path.display());
    }
    Ok(())
}
