use anyhow::{Context, Result};
use crossroads::app::Crossroads;
use crossroads::config::Config;
use crossroads::input::{parse_command, Command, HELP};
use crossroads::io::HistoryStack;
use crossroads::logging;
use std::env;
use std::io::{self, BufRead, Write};

fn print_status(app: &Crossroads, out: &mut impl Write) -> io::Result<()> {
    let fmt_opt = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    writeln!(
        out,
        "view: {}  link: {}  container: {}  thread: {}  history: {}",
        app.current(),
        fmt_opt(app.active_link().map(|v| v.to_string())),
        fmt_opt(app.visible_container().map(|v| v.to_string())),
        fmt_opt(app.highlighted_thread()),
        app.history_len(),
    )?;
    let levels: Vec<String> = app
        .thread_emphasis()
        .into_iter()
        .map(|(name, e)| format!("{name}={:.1}", e.opacity()))
        .collect();
    writeln!(out, "threads: {}", levels.join(" "))
}

fn print_history(app: &Crossroads, out: &mut impl Write) -> io::Result<()> {
    let history = app.navigator().history();
    for (idx, entry) in history.entries().enumerate() {
        let marker = if idx == history.index() { '>' } else { ' ' };
        match entry {
            Some(entry) => writeln!(out, "{marker} {idx}: {} {}", entry.view, entry.fragment)?,
            None => writeln!(out, "{marker} {idx}: (landing)")?,
        }
    }
    writeln!(out, "{} of {} entries pushed", history.pushed(), history.len())
}

fn main() -> Result<()> {
    let (config, warnings) = Config::load();
    logging::init(&config.logging);
    for warning in warnings {
        tracing::warn!("{warning}");
    }
    if let Err(e) = Config::create_default() {
        tracing::warn!("Could not write default config: {e}");
    }

    // Optional startup URL fragment, e.g. `crossroads '#venture'`
    let fragment = env::args().nth(1);
    let mut app =
        Crossroads::new(&config, fragment.as_deref()).context("invalid view configuration")?;
    tracing::info!(view = %app.current(), "The Crossroads initialized");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_status(&app, &mut out)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match parse_command(&line) {
            Ok(Command::Message(message)) => {
                app.update(message);
                print_status(&app, &mut out)?;
            }
            Ok(Command::Status) => print_status(&app, &mut out)?,
            Ok(Command::History) => print_history(&app, &mut out)?,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(e) => writeln!(out, "{e}")?,
        }
        out.flush()?;
    }

    Ok(())
}
