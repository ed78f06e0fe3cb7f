use crate::config::DEFAULT_ENDPOINT;
use clap::{
    Arg, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

// Mirrors `config::DEFAULT_TIMEOUT_MS`.
const DEFAULT_TIMEOUT_ARG: &str = "10000";

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("userfetch")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Endpoint returning the JSON user list")
                .default_value(DEFAULT_ENDPOINT)
                .env("USERFETCH_URL"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("Request timeout in milliseconds")
                .default_value(DEFAULT_TIMEOUT_ARG)
                .env("USERFETCH_TIMEOUT_MS")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write a standalone HTML page to this file instead of printing the cards")
                .env("USERFETCH_OUTPUT"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERFETCH_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
