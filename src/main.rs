use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableFocusChange, EnableFocusChange, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;

use typeahead::app::App;
use typeahead::cli::{Args, Settings};
use typeahead::config::{self, ConfigResult};
use typeahead::input::RecordReader;
use typeahead::logging;
use typeahead::suggestion::SuggestionSource;
use typeahead::typeahead::lookup_once;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = logging::log_path()
        && let Err(e) = logging::init_logging(&path)
    {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    let settings = Settings::resolve(&args, &config)?;
    let records = RecordReader::read_records(args.file.as_deref())?;
    log::info!("Loaded {} records", records.len());

    let source: Arc<dyn SuggestionSource> = Arc::new(settings.catalog_source(records));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    if let Some(text) = &args.query {
        return runtime.block_on(print_suggestions(source.as_ref(), text, &settings));
    }

    let mut app = App::new(source, settings.target_prop.clone(), settings.options);
    if let Some(warning) = warning {
        app.set_status(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Focus loss blurs the input like Tab does
    let result = crossterm::execute!(io::stdout(), EnableFocusChange)
        .map_err(Into::into)
        .and_then(|()| runtime.block_on(run(terminal, app)));

    // Restore terminal before any error is reported
    if let Err(e) = crossterm::execute!(io::stdout(), DisableFocusChange) {
        log::warn!("Failed to disable focus reporting: {}", e);
    }
    ratatui::restore();

    result
}

/// `--query`: print one suggestion value per line
async fn print_suggestions(
    source: &dyn SuggestionSource,
    text: &str,
    settings: &Settings,
) -> Result<()> {
    let suggestions = lookup_once(
        source,
        text,
        &settings.target_prop,
        settings.options.min_length_for_suggestions,
    )
    .await;

    let mut stdout = io::stdout().lock();
    for suggestion in suggestions {
        writeln!(stdout, "{}", suggestion.value)?;
    }
    Ok(())
}

async fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        let deadline = app.typeahead.next_deadline();

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(event, Instant::now()),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(outcome) = app.typeahead.next_fetch_result() => {
                app.typeahead.apply_fetch_result(outcome);
            }
            _ = sleep_until(deadline) => {
                app.typeahead.tick(Instant::now());
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}
