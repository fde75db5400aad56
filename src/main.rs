mod actions;
mod authorize;
mod catalog;
mod config;
mod endpoints;
#[cfg(test)]
mod fake_spotify;
mod models;
mod routes;

use std::net::IpAddr;
use std::path::PathBuf;
use std::process::exit;

use clap::parser::MatchesError;
use clap::{value_parser, Arg, Command};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::catalog::SpotifyCatalog;
use crate::config::{AppConfig, CLIENT_ID_ENV, CLIENT_SECRET_ENV};

struct Args {
    config_path: Option<PathBuf>,
    address: Option<IpAddr>,
    port: Option<u16>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

fn parse_cli_args() -> Result<Args, MatchesError> {
    let cmd = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON config file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .help("Address to listen on [default: 127.0.0.1]")
                .value_parser(value_parser!(IpAddr)),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on [default: 3000]")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("client_id")
                .long("client-id")
                .env(CLIENT_ID_ENV)
                .hide_env_values(true),
        )
        .arg(
            Arg::new("client_secret")
                .long("client-secret")
                .env(CLIENT_SECRET_ENV)
                .hide_env_values(true),
        )
        .get_matches();

    let args = Args {
        config_path: cmd.try_get_one::<PathBuf>("config")?.cloned(),
        address: cmd.try_get_one::<IpAddr>("address")?.copied(),
        port: cmd.try_get_one::<u16>("port")?.copied(),
        client_id: cmd.try_get_one::<String>("client_id")?.cloned(),
        client_secret: cmd.try_get_one::<String>("client_secret")?.cloned(),
    };
    Ok(args)
}

fn load_config(args: Args) -> Result<AppConfig, config::ConfigError> {
    let config = match &args.config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    Ok(config.override_with(args.address, args.port, args.client_id, args.client_secret))
}

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or("spotify_artist_search=info,rocket=warn".into()),
        )
        .init();

    let args = parse_cli_args().unwrap_or_else(|err| {
        error!("Error parsing arguments: {}", err);
        exit(1);
    });
    let config = load_config(args).unwrap_or_else(|err| {
        error!("{}", err);
        exit(1);
    });

    let credentials = config.credentials();
    match &credentials {
        Some(credentials) => info!(client_id = credentials.client_id(), "using client credentials"),
        None => warn!(
            "{} and {} are not set, every search will fail",
            CLIENT_ID_ENV, CLIENT_SECRET_ENV
        ),
    }

    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port));
    let catalog = SpotifyCatalog::new(config.endpoints(), credentials);

    info!("Listening on http://{}:{}", config.address, config.port);
    if let Err(err) = routes::build_rocket(figment, Box::new(catalog))
        .launch()
        .await
    {
        error!("Server error: {}", err);
        exit(1);
    }
}
