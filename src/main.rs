use clap::Parser;
use projprops::cli::commands::Cli;
use projprops::cli::handlers;
use projprops::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
