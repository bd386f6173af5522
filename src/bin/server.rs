//! Standalone HTTP server for the grouping engine.

use clap::{value_parser, Arg, Command};
use grouper::server;
use tracing::info;

fn cli() -> Command {
    Command::new("grouper-server")
        .about("Constraint-aware group assignment over HTTP")
        .arg(
            Arg::new("port")
                .long("port")
                .help("Port to listen on")
                .default_value("3000")
                .value_parser(value_parser!(u16)),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let matches = cli().get_matches();
    let port = *matches.get_one::<u16>("port").unwrap();

    info!(port, "starting grouper-server");
    warp::serve(server::routes()).run(([0, 0, 0, 0], port)).await;
}
