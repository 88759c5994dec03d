use clap::Parser;
use rock_paper_scissor::{init_tracing, run, AppError, Config};

fn main() -> Result<(), AppError> {
    let config = Config::parse();
    init_tracing(&config.log_level)?;
    run(&config)?;
    Ok(())
}
