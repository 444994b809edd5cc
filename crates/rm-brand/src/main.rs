//! rm-brand - export brand tokens and theme, audit contrast

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rm_brand::tokens::{ColorMode, Tokens, css_variables, stylesheet};
use rm_brand::{Config, Page};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "rm-brand", version, about = "RM brand tokens, theme and contrast audit")]
struct Cli {
    /// Single-line JSON output
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the component theme configuration as JSON
    Theme,
    /// Print the token table
    Tokens {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[arg(long, default_value = "light")]
        mode: ColorMode,
    },
    /// Print the brand stylesheet with light and dark custom properties
    Css,
    /// Audit contrast of the custom properties for a color mode
    Verify {
        #[arg(long, default_value = "light")]
        mode: ColorMode,
        /// Exit with an error when any check fails
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Css,
}

fn print_json(value: &serde_json::Value, config: &Config) -> anyhow::Result<()> {
    let out = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn verify(config: &Config) -> anyhow::Result<()> {
    #[cfg_attr(not(feature = "devtools"), allow(unused_mut))]
    let mut page = Page::new(config);

    #[cfg(feature = "devtools")]
    let reports = {
        let reports = page.audit().context("running contrast audit")?;
        if let Some(table) = page.console.last() {
            print!("{}", table.message);
        }
        reports
    };

    #[cfg(not(feature = "devtools"))]
    let reports = {
        let reports = page.verify();
        for r in &reports {
            println!("{:<26} {:>6.2} {:>4} {}", r.name, r.ratio, r.minimum, if r.pass { "pass" } else { "FAIL" });
        }
        reports
    };

    let failed: Vec<&str> = reports.iter().filter(|r| !r.pass).map(|r| r.name.as_str()).collect();
    if failed.is_empty() {
        tracing::info!(mode = config.mode.as_str(), "all contrast checks pass");
    } else if config.strict {
        bail!("{} contrast check(s) failed in {} mode: {}", failed.len(), config.mode.as_str(), failed.join(", "));
    } else {
        tracing::warn!(mode = config.mode.as_str(), failed = failed.len(), "contrast checks failed");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config {
        pretty: !cli.compact,
        ..Config::default()
    };
    tracing::debug!(version = rm_brand::VERSION, ?cli, "rm-brand starting");

    match cli.command {
        Command::Theme => {
            let theme = rm_brand::theme::theme_config(&Tokens::for_mode(ColorMode::Light))
                .context("building theme configuration")?;
            print_json(&theme.to_json(), &config)?;
        }
        Command::Tokens { format, mode } => {
            config.mode = mode;
            let tokens = Tokens::for_mode(mode);
            match format {
                Format::Json => print_json(&tokens.to_json(), &config)?,
                Format::Css => {
                    for (name, value) in css_variables(&tokens) {
                        println!("{name}: {value};");
                    }
                }
            }
        }
        Command::Css => print!("{}", stylesheet()),
        Command::Verify { mode, strict } => {
            config.mode = mode;
            config.strict = strict;
            verify(&config)?;
        }
    }
    Ok(())
}
