use anyhow::Result;
use clap::Parser;

use word_guru::cli::commands::{query, setup};
use word_guru::cli::{Args, Command, SetupCommand, exit_code};
use word_guru::expert::print_languages;
use word_guru::output::{self, OutputConfig};
use word_guru::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match &args.command {
        Command::Languages => print_languages(),
        Command::Setup { command: None } => setup::print_config()?,
        Command::Setup {
            command: Some(SetupCommand::Init),
        } => setup::init()?,
        command => {
            if let Some((operation, payload, languages)) = command.query() {
                let options = query::QueryOptions {
                    operation,
                    payload,
                    languages,
                    model: args.model.clone(),
                    endpoint: args.endpoint.clone(),
                    no_cache: args.no_cache,
                };
                query::run_query(options).await?;
            }
        }
    }

    Ok(())
}
