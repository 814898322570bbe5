// std imports
use std::{
    io::{BufRead, IsTerminal, stderr, stdin, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};

// local imports
use joker::{app, cli, error::*, settings::Settings};

const JOKER_DEBUG_LOG: &str = "JOKER_DEBUG_LOG";
const JOKER_DEBUG_LOG_STYLE: &str = "JOKER_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(JOKER_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(JOKER_DEBUG_LOG).write_style(JOKER_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse_from(wild::args());

    let settings = Settings::at(&opt.config).user_default().load()?;
    log::debug!("settings: {:?}", settings);

    let app = joker::App::new(app::Options {
        output_format: opt.output_format.map(Into::into).unwrap_or(settings.output_format),
        strict: opt.strict || settings.strict,
        quiet: opt.quiet || settings.quiet,
    });

    let mut output = stdout().lock();
    let mut warnings = stderr().lock();

    let result = if !opt.patterns.is_empty() {
        app.run(&opt.patterns, &mut output, &mut warnings)
    } else if stdin().is_terminal() {
        let mut cmd = cli::Opt::command();
        return cmd.print_help().map_err(Error::Io);
    } else {
        log::debug!("reading patterns from stdin");
        let patterns = stdin().lock().lines().collect::<std::io::Result<Vec<_>>>()?;
        app.run(patterns, &mut output, &mut warnings)
    };

    match result {
        Err(err) if err.is_broken_pipe() => Ok(()),
        result => result,
    }
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
