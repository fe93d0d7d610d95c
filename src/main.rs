use broadside::{init_logging, init_logging_at, Console};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Grid combat against the machine", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,

    #[arg(long, help = "Log level on stderr (off, error, warn, info, debug, trace); overrides BROADSIDE_LOG")]
    log_level: Option<log::LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.log_level {
        Some(level) => init_logging_at(level),
        None => init_logging(),
    }

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (games will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), rng);
    console.run()
}
