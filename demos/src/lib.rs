//! Shared code for the `dungeon-walk` demo: argument parsing, logging setup
//! and report formatting.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use dungeon_map::Map;
use dungeon_paths::{Route, RouteConfig, RouteFinder};
use tracing_subscriber::EnvFilter;

/// Find the walk from `P` to `E` in a text map, via a chest `C` if possible.
#[derive(Debug, Parser)]
#[command(name = "dungeon-walk", version)]
pub struct Args {
    /// Map file: `#` wall, `.` floor, `P` entry, `E` exit, `C` chest.
    pub map: PathBuf,

    /// End each search once all its targets are found.
    #[arg(long)]
    pub stop_early: bool,

    /// Print only the route summary and moves, not the map.
    #[arg(long)]
    pub no_render: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn route_config(&self) -> RouteConfig {
        RouteConfig {
            stop_early: self.stop_early,
        }
    }
}

/// Install a stderr logger. `log` records from the library crates are
/// forwarded through the subscriber's log bridge.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Result of one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    pub text: String,
    pub reachable: bool,
}

/// Human-readable description of `route` on `map`.
pub fn report(map: &Map, route: &Route, render: bool) -> String {
    let mut out = match route {
        Route::Unreachable => return "no route to exit".to_string(),
        Route::ViaChest { chest, .. } => {
            format!("route: via chest {chest}, {} moves\n", route.move_count())
        }
        Route::Direct { .. } => format!("route: direct, {} moves\n", route.move_count()),
    };
    out.push_str("moves: ");
    out.extend(route.moves().iter().map(|m| m.letter()));
    if render {
        out.push('\n');
        out.push_str(&map.render(route.points()));
    }
    out
}

/// Load the map named by `args`, find its route and describe it.
pub fn run(args: &Args) -> Result<WalkReport, Box<dyn Error>> {
    let text = std::fs::read_to_string(&args.map)?;
    let map = Map::from_text(&text)?;
    log::info!(
        "{}: {}x{}, {} chests",
        args.map.display(),
        map.width(),
        map.height(),
        map.chests().len()
    );
    let route = RouteFinder::new(args.route_config()).find_route(&map);
    Ok(WalkReport {
        text: report(&map, &route, !args.no_render),
        reachable: route.is_reachable(),
    })
}
