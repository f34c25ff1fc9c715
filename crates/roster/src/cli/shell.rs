//! Line-oriented event loop.
//!
//! Each line is one command. Event commands feed the dashboard and re-render the listing:
//!
//! ```text
//! toggle FACET VALUE   flip an option in the pending selection (also FACET=VALUE)
//! apply                apply pending filter changes
//! clear                clear all filters
//! search [TEXT]        replace the search query (empty clears it)
//! resize PX            set the viewport width
//! page N               show grid page N
//! sort [COL[:dir]]     sort the grid (no argument removes the sort)
//! show | facets | stats | columns
//! help | quit
//! ```
//!
//! Bad input prints an error and the loop goes on; only I/O failures end it early.

use rosterapp::commands::{CmdMessage, CmdResult};
use rosterapp::dashboard::DashboardEvent;
use rosterapp::error::{Result, RosterError};
use std::io::{BufRead, Write};

use super::commands::AppContext;
use super::render;

const PROMPT: &str = "roster> ";

const HELP: &str = "\
toggle FACET VALUE   flip a filter option (pending until apply)
apply                apply pending filter changes
clear                clear all filters
search [TEXT]        search name, email, department, position, location
resize PX            set the viewport width in pixels
page N               show grid page N
sort [COL[:dir]]     sort the grid; no argument removes the sort
show                 list employees
facets               list facets and options
stats                show counts
columns              show the selected columns
quit                 leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Toggle { facet: String, value: String },
    Apply,
    Clear,
    Search(String),
    Resize(u32),
    Page(usize),
    Sort(Option<String>),
    Show,
    Facets,
    Stats,
    Columns,
    Help,
    Quit,
}

fn invalid(message: impl Into<String>) -> RosterError {
    RosterError::Api(message.into())
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "toggle" | "t" => {
            let (facet, value) = rest
                .split_once('=')
                .or_else(|| rest.split_once(char::is_whitespace))
                .ok_or_else(|| invalid("usage: toggle FACET VALUE"))?;
            let value = value.trim();
            if value.is_empty() {
                return Err(invalid("usage: toggle FACET VALUE"));
            }
            ShellCommand::Toggle {
                facet: facet.trim().to_string(),
                value: value.to_string(),
            }
        }
        "apply" => ShellCommand::Apply,
        "clear" => ShellCommand::Clear,
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "resize" => ShellCommand::Resize(
            rest.parse()
                .map_err(|_| invalid(format!("invalid width: '{rest}'")))?,
        ),
        "page" => ShellCommand::Page(
            rest.parse()
                .map_err(|_| invalid(format!("invalid page: '{rest}'")))?,
        ),
        "sort" => ShellCommand::Sort((!rest.is_empty()).then(|| rest.to_string())),
        "show" | "list" | "ls" => ShellCommand::Show,
        "facets" => ShellCommand::Facets,
        "stats" => ShellCommand::Stats,
        "columns" => ShellCommand::Columns,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(invalid(format!("unknown command: '{other}' (try help)"))),
    };
    Ok(Some(command))
}

fn emit<W, F>(ctx: &AppContext, out: &mut W, result: &CmdResult, text: F) -> Result<()>
where
    W: Write,
    F: Fn(&CmdResult) -> String,
{
    if ctx.json {
        writeln!(out, "{}", render::render_json(result)?)?;
    } else {
        write!(out, "{}", text(result))?;
    }
    Ok(())
}

/// Apply one command. Returns `false` when the session should end.
fn execute<W: Write>(ctx: &mut AppContext, command: ShellCommand, out: &mut W) -> Result<bool> {
    let listing = match command {
        ShellCommand::Quit => return Ok(false),
        ShellCommand::Help => {
            write!(out, "{HELP}")?;
            return Ok(true);
        }
        ShellCommand::Facets => {
            let result = ctx.api.facets();
            emit(ctx, out, &result, render::render_facets)?;
            return Ok(true);
        }
        ShellCommand::Stats => {
            let result = ctx.api.stats();
            emit(ctx, out, &result, render::render_stats)?;
            return Ok(true);
        }
        ShellCommand::Columns => {
            let result = ctx.api.columns();
            emit(ctx, out, &result, render::render_columns)?;
            return Ok(true);
        }
        ShellCommand::Toggle { facet, value } => ctx
            .api
            .dispatch(DashboardEvent::ToggleFacetOption { facet, value }),
        ShellCommand::Apply => ctx.api.dispatch(DashboardEvent::ApplyFilters),
        ShellCommand::Clear => ctx.api.dispatch(DashboardEvent::ClearAllFilters),
        ShellCommand::Search(text) => ctx.api.search(&text),
        ShellCommand::Resize(width) => ctx.api.resize(width),
        ShellCommand::Page(page) => {
            ctx.api.set_page(page);
            ctx.api.list()
        }
        ShellCommand::Sort(spec) => {
            match spec {
                Some(spec) => ctx.api.sort_by(&spec)?,
                None => ctx.api.set_sort(None),
            }
            ctx.api.list()
        }
        ShellCommand::Show => ctx.api.list(),
    };
    let options = ctx.render;
    emit(ctx, out, &listing, |r| render::render_list(r, &options))?;
    Ok(true)
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<R, W>(ctx: &mut AppContext, input: R, out: &mut W, interactive: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if interactive {
        writeln!(out, "Type help for commands, quit to leave.")?;
    }
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let outcome = parse_line(&line).and_then(|command| match command {
            Some(command) => execute(ctx, command, out),
            None => Ok(true),
        });
        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(RosterError::Io(e)) => return Err(RosterError::Io(e)),
            Err(e) => write!(
                out,
                "{}",
                render::render_messages(&[CmdMessage::error(e.to_string())])
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::render::RenderOptions;
    use rosterapp::api::RosterApi;
    use rosterapp::config::RosterConfig;
    use rosterapp::source::memory::fixtures::employee;
    use rosterapp::source::memory::MemorySource;

    fn context() -> AppContext {
        console::set_colors_enabled(false);
        let source = MemorySource::new(vec![
            employee(1).name("Ada", "Moss").department("Engineering").build(),
            employee(2)
                .name("Bruno", "Costa")
                .department("Human Resources")
                .active(false)
                .build(),
        ]);
        let config = RosterConfig::default();
        let mut api = RosterApi::load(&source, &config).unwrap();
        api.resize(2400);
        AppContext {
            api,
            render: RenderOptions::from_config(&config),
            json: false,
        }
    }

    fn session(script: &str) -> (AppContext, String) {
        let mut ctx = context();
        let mut out = Vec::new();
        run(&mut ctx, script.as_bytes(), &mut out, false).unwrap();
        (ctx, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line("toggle department Human Resources").unwrap(),
            Some(ShellCommand::Toggle {
                facet: "department".into(),
                value: "Human Resources".into()
            })
        );
        assert_eq!(
            parse_line("t isActive=Inactive").unwrap(),
            Some(ShellCommand::Toggle {
                facet: "isActive".into(),
                value: "Inactive".into()
            })
        );
        assert_eq!(parse_line("resize 400").unwrap(), Some(ShellCommand::Resize(400)));
        assert_eq!(parse_line("sort").unwrap(), Some(ShellCommand::Sort(None)));
        assert_eq!(parse_line("search").unwrap(), Some(ShellCommand::Search(String::new())));
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# note").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("toggle department").is_err());
        assert!(parse_line("resize wide").is_err());
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn toggles_apply_only_after_apply() {
        let (ctx, out) = session("toggle isActive Inactive\napply\n");
        assert!(out.contains("warning: Some filter changes have not been applied yet."));
        assert_eq!(ctx.api.dashboard().visible_count(), 1);
        assert!(out.ends_with("Showing 1-1 of 1 employees (filtered from 2) · page 1/1\n"));
    }

    #[test]
    fn clear_restores_everything() {
        let (ctx, _) = session("toggle department Engineering\napply\nclear\n");
        assert_eq!(ctx.api.dashboard().visible_count(), 2);
        assert!(ctx.api.dashboard().applied_selection().is_empty());
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (ctx, out) = session("dance\nsort skills\nsearch ada\n");
        assert!(out.contains("error: Api Error: unknown command: 'dance' (try help)"));
        assert!(out.contains("error: Api Error: Column skills is not sortable"));
        assert_eq!(ctx.api.dashboard().visible_count(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (ctx, out) = session("quit\nsearch ada\n");
        assert!(out.is_empty());
        assert_eq!(ctx.api.dashboard().visible_count(), 2);
    }

    #[test]
    fn resize_switches_to_compact_table() {
        let (ctx, out) = session("resize 500\n");
        assert!(ctx.api.dashboard().view().is_compact());
        assert!(out.contains("Showing 2 of 2 employees"));
    }

    #[test]
    fn empty_search_result_shows_empty_state() {
        let (_, out) = session("search zzz\n");
        assert!(out.starts_with(render::EMPTY_LIST));
    }
}
