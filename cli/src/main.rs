use clap::Parser;
use rpub_cli::Cli;
use rpub_cli::command::Commands;
use rpub_cli::errors::CliResult;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match cli.commands {
        Commands::Debug(debug) => debug.debug()?,
        Commands::Cat(cat) => cat.cat()?,
    }

    Ok(())
}
