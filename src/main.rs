use anyhow::Context;
use clap::Parser;
use shortpath::cli::{Cli, Commands, RunArgs};
use shortpath::{render, repl, Config, Session};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};


/// Log filter comes from `RUST_LOG` when set, then `--verbose`, then the config file
fn init_logging(verbose: bool, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose { "debug" } else { config.log_filter.as_str() };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_repl(config: &Config) -> anyhow::Result<ExitCode> {
    let mut session = Session::new();
    let stdin = io::stdin();
    repl::run(&mut session, config, stdin.lock(), io::stdout().lock())
        .context("interactive session failed")?;
    Ok(ExitCode::SUCCESS)
}

/// One-shot: user errors print a message and exit with status 1
fn run_once(args: RunArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let mut session = Session::new();

    for spec in &args.edges {
        if let Err(e) = session.add_edge(&spec.a, &spec.b, &spec.weight) {
            eprintln!("error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    }
    for node in &args.nodes {
        session.add_node(node);
    }

    let result = match session.query(&args.start) {
        Ok(result) => result,
        Err(e) if e.is_user_error() => {
            eprintln!("error: {e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("shortest path computation failed"),
    };

    let format = args.format.unwrap_or(config.output);
    let text = render::report(format, session.graph(), &result, args.paths, &config.render)
        .context("cannot render report")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("cannot load configuration")?;
    init_logging(cli.verbose, &config);

    tracing::debug!("shortpath v{}", env!("CARGO_PKG_VERSION"));
    // logged only once the subscriber is installed
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "config loaded");
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(&config),
        Commands::Run(args) => run_once(args, &config),
    }
}
