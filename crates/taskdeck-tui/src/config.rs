use std::path::PathBuf;

use clap::Parser;

use crate::route::Route;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_URL: &str = "http://127.0.0.1:8080/api";

#[derive(Debug, Parser)]
#[command(name = "taskdeck", about = "Terminal task manager")]
pub struct TuiConfig {
    /// API root of a running server, e.g. http://127.0.0.1:8080/api.
    /// Without it a local taskdeck-server is started.
    #[arg(long, env = "TASKDECK_SERVER_URL")]
    pub server: Option<String>,

    /// Write logs to this file. The terminal is taken over by the UI, so
    /// nothing is logged without it.
    #[arg(long, env = "TASKDECK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// View to open first: `/`, `/create` or `/edit/{id}`.
    #[arg(long, env = "TASKDECK_START", value_parser = parse_route)]
    pub start: Option<Route>,
}

fn parse_route(path: &str) -> Result<Route, String> {
    Route::parse(path).ok_or_else(|| format!("unknown view path: {path}"))
}

impl TuiConfig {
    pub fn server_url(&self) -> &str {
        self.server.as_deref().unwrap_or(DEFAULT_URL)
    }

    /// Whether the TUI should start its own server.
    pub fn spawns_server(&self) -> bool {
        self.server.is_none()
    }
}
