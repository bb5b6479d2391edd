//! Print the route through a text dungeon map.
//!
//! Run: cargo run --bin dungeon-walk -- demos/maps/maze.txt

use clap::Parser;
use dungeon_demos::{Args, init_logging, run};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(report) => {
            println!("{}", report.text);
            if !report.reachable {
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
