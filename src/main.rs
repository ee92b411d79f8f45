use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use activity::{Client, Config};
use clap::{builder::NonEmptyStringValueParser, Parser};
use tracing::debug;

static USAGE: &str = "Usage: github-activity <username>";

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    about = "List a GitHub user's recent public activity",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(
        value_parser = NonEmptyStringValueParser::new(),
        allow_hyphen_values = true
    )]
    username: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    util::init_tracing();

    let mut stdout = io::stdout().lock();

    let Some(cli) = parse_cli(std::env::args_os().collect()) else {
        let _ = writeln!(stdout, "{}", USAGE);
        return ExitCode::FAILURE;
    };

    let result = match Config::embedded() {
        Ok(config) => run(&config, &cli.username, &mut stdout).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        report(&e, &mut stdout);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

// exactly one argument, taken verbatim even when it looks like a flag
fn parse_cli(args: Vec<OsString>) -> Option<Cli> {
    let [program, username] = <[OsString; 2]>::try_from(args).ok()?;

    Cli::try_parse_from([program, OsString::from("--"), username]).ok()
}

async fn run<W: Write>(
    config: &Config,
    username: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    debug!(task = "load config", base_url = %config.base_url);

    let client = Client::new(config)?;
    let events = activity::fetch(&client, username).await?;

    activity::render(&events, out)?;

    Ok(())
}

fn report<W: Write>(err: &anyhow::Error, out: &mut W) {
    let _ = writeln!(out, "Error: {}", err);
}
