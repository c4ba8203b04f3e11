use clap::Parser;
use gh_to_gitea::{gh_to_gitea_main, GhToGiteaCli};
use log::{debug, LevelFilter};
use std::process::exit;

/// Log level for the verbosity count
fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = GhToGiteaCli::parse();
    let transport_level = if args.verbose >= 3 {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level_filter(args.verbose))
        .filter_module("reqwest", transport_level)
        .filter_module("hyper", transport_level)
        .filter_module("hyper_util", transport_level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();
    debug!(concat!(
        env!("CARGO_PKG_NAME"),
        " ",
        env!("CARGO_PKG_VERSION")
    ));
    match gh_to_gitea_main(args).await {
        Ok(code) => {
            exit(code);
        }
        Err(e) => {
            eprintln!("{e}");
            exit(e.exit_code());
        }
    };
}
