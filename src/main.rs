use clap::Parser;

mod cmd;

use cmd::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let res = match cli.command {
        Commands::Minimize(a) => a.run(),
        Commands::Primes(a) => a.run(),
        Commands::Stress(a) => a.run(),
    };
    if let Err(e) = res {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
