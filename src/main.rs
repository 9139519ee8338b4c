use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tracing::{error, info};

use folio::app::App;
use folio::cli::{parse_args, run_cli_command, CliCommand};
use folio::config::StartupConfig;
use folio::error::UiError;
use folio::input::{action_for_mouse, KeybindingConfig};
use folio::logging::{init_file_logging, init_stderr_logging};
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

fn main() -> Result<()> {
    let config = StartupConfig::from_env();
    let command = parse_args(std::env::args());

    if command != CliCommand::RunTui {
        if let Err(e) = init_stderr_logging(&config) {
            eprintln!("Warning: {}", e.user_message());
        }
        if let Some(Err(e)) = run_cli_command(command, &mut io::stdout()) {
            error!(code = e.error_code(), category = %e.category(), "{}", e);
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
        return Ok(());
    }

    color_eyre::install()?;
    let _log_guard = match init_file_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: {}", e.user_message());
            None
        }
    };

    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);
    let size = manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    info!(version = folio::cli::VERSION, "starting");
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    manager.restore()?;
    info!("stopped");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let keybindings = KeybindingConfig::new();
    let mut event_stream = EventStream::new();
    let tick = Duration::from_millis(app.config().tick_ms);

    loop {
        if app.needs_redraw || app.is_animating() {
            terminal
                .draw(|f| ui::render(f, &mut *app))
                .map_err(|e| UiError::RenderFailed {
                    component: "frame".to_string(),
                    message: e.to_string(),
                })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(tick) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(action) = keybindings.action_for_key(&key) {
                            app.dispatch(action);
                        }
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        if let Some(action) = action_for_mouse(&mouse) {
                            app.dispatch(action);
                        }
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
