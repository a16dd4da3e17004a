use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use propkit_util::to_html;

mod replay;
mod script;

use replay::ReplayClock;
use script::ComponentKind;

#[derive(Debug, Parser)]
#[command(name = "propkit", version, about = "Drive propkit components with a scripted owner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a script of interactions and print notifications and the final render
    Replay {
        /// Path to the JSON script
        script: PathBuf,
        /// Pin the clock to this many milliseconds since the epoch (advances 1ms per event)
        #[arg(long)]
        fixed_clock: Option<i64>,
        /// Print the final render as HTML instead of the JSON report
        #[arg(long)]
        html: bool,
    },
    /// Render a component from a JSON props file
    Render {
        #[arg(value_enum)]
        component: ComponentKind,
        /// Path to the JSON props object
        props: PathBuf,
        /// Print HTML markup instead of the element description
        #[arg(long)]
        html: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            fixed_clock,
            html,
        } => {
            let script = script::load(&script)?;
            let clock = fixed_clock.map(ReplayClock::fixed).unwrap_or(ReplayClock::System);
            let report = replay::run(script, &clock)?;
            if html {
                println!("{}", to_html(&report.rendered));
            } else {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Command::Render { component, props, html } => {
            let element = replay::render(component, script::load_props(&props)?)?;
            if html {
                println!("{}", to_html(&element));
            } else {
                println!("{}", serde_json::to_string_pretty(&element)?);
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
