use battlelog::adapters::ReqwestSseTransport;
use battlelog::app::App;
use battlelog::cli::{parse_args, run_cli_command, CliCommand};
use battlelog::config::ClientConfig;
use battlelog::controller::ControllerEvent;
use battlelog::error::{ClientError, ClientResult};
use battlelog::logging::{init_logging, LogTarget};
use battlelog::terminal::{setup_panic_hook, TerminalManager};
use battlelog::traits::EventTransport;
use battlelog::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = match load_config() {
        Ok(Some(config)) => config,
        Ok(None) => return Ok(()),
        Err(err) => exit_on_startup_error(&err),
    };

    let log_file = config.resolved_log_file();
    if let LogTarget::Disabled(reason) = init_logging(&config.log_level, log_file.as_deref()) {
        eprintln!("Logging disabled: {}", reason);
    }

    let app = ReqwestSseTransport::new(config.connect_timeout)
        .map_err(ClientError::from)
        .and_then(|transport| App::new(&config, transport));
    let mut app = match app {
        Ok(app) => app,
        Err(err) => exit_on_startup_error(&err),
    };

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    app.connect_initial_room();
    let result = run_app(manager.terminal(), &mut app).await;

    app.quit();
    manager.restore()?;

    if let Err(e) = &result {
        warn!(error = %e, "Event loop exited with an error");
    }
    info!("Shut down");
    result
}

/// Flags over environment over defaults. `None` when a CLI command already ran.
fn load_config() -> ClientResult<Option<ClientConfig>> {
    let options = match parse_args(std::env::args())? {
        CliCommand::RunTui(options) => options,
        command => {
            run_cli_command(&command);
            return Ok(None);
        }
    };

    let config = options.apply(ClientConfig::from_env());
    config.validate()?;
    Ok(Some(config))
}

fn exit_on_startup_error(err: &ClientError) -> ! {
    error!(
        code = err.error_code(),
        category = %err.category(),
        error = %err,
        "Startup failed"
    );
    eprintln!("Error: {}", err.user_message());
    std::process::exit(1);
}

async fn run_app<B, T>(terminal: &mut Terminal<B>, app: &mut App<T>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    T: EventTransport,
{
    let mut event_stream = EventStream::new();

    // Take the controller event receiver (we need ownership for select!)
    let mut controller_rx: Option<mpsc::UnboundedReceiver<ControllerEvent>> =
        app.take_event_receiver();

    loop {
        if app.needs_redraw {
            let status = app.status_info();
            terminal.draw(|f| ui::render(f, &mut app.view, &status))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_terminal_event(event),
                    Some(Err(e)) => {
                        warn!(error = %e, "Terminal event error");
                    }
                    None => {
                        info!("Terminal event stream closed");
                        app.quit();
                    }
                }
            }

            event = async {
                match controller_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match event {
                    Some(event) => app.handle_controller_event(event),
                    None => controller_rx = None,
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
