use std::fs::File;
use std::io;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use taskdeck_service::HttpService;
use taskdeck_tui::app::App;
use taskdeck_tui::config::{TuiConfig, DEFAULT_PORT};
use taskdeck_tui::route::Route;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = TuiConfig::parse();
    if let Some(ref path) = config.log_file {
        init_logging(path)?;
    }

    let mut child = if config.spawns_server() {
        Some(spawn_server()?)
    } else {
        None
    };

    let result = run(&config);

    if let Some(ref mut child) = child {
        let _ = child.kill();
        let _ = child.wait();
    }

    result
}

fn init_logging(path: &std::path::Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to open {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck_tui=debug,taskdeck_service=debug".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(config: &TuiConfig) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let service = HttpService::new(config.server_url());
    wait_for_server(&rt, &service)?;
    tracing::info!("connected to {}", service.base_url());
    run_tui(rt, service, config.start.clone())
}

fn spawn_server() -> Result<Child> {
    // Prefer a taskdeck-server next to our own binary, then PATH
    let self_exe = std::env::current_exe().unwrap_or_default();
    let server_bin = self_exe
        .parent()
        .map(|d| d.join("taskdeck-server"))
        .filter(|p| p.exists())
        .unwrap_or_else(|| "taskdeck-server".into());

    let child = Command::new(&server_bin)
        .env("TASKDECK_BIND", "127.0.0.1")
        .env("TASKDECK_PORT", DEFAULT_PORT.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to start {}", server_bin.display()))?;

    Ok(child)
}

fn wait_for_server(rt: &Runtime, service: &HttpService) -> Result<()> {
    let start = Instant::now();
    let timeout = Duration::from_secs(10);

    loop {
        if rt.block_on(service.health_check()).is_ok() {
            return Ok(());
        }
        if start.elapsed() > timeout {
            bail!(
                "no server at {} within {}s",
                service.base_url(),
                timeout.as_secs()
            );
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

fn run_tui(rt: Runtime, service: HttpService, start: Option<Route>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_runtime(rt, Arc::new(service));
    if let Some(route) = start {
        app.navigate(route);
    }
    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            // q quits unless we're typing
            if key.code == KeyCode::Char('q') && !app.is_input_mode() {
                break;
            }
            app.handle_key(key);
        }
    }

    Ok(())
}
