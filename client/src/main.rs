mod app;
mod config;
mod demo;
mod input;
mod state;
mod ui;

use clap::Parser;
use std::io;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::BotType;
use tictactoe_common::{log, logger};

use app::App;
use state::GameMode;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-Tac-Toe in the terminal, with a minimax AI")]
struct Args {
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    /// Skip the menu and start a round right away.
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    #[arg(long, value_parser = parse_bot_type)]
    bot: Option<BotType>,

    /// Search depth in plies; omit for full lookahead.
    #[arg(long)]
    depth: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn parse_bot_type(value: &str) -> Result<BotType, String> {
    match value.to_ascii_lowercase().as_str() {
        "minimax" => Ok(BotType::Minimax),
        "random" => Ok(BotType::Random),
        other => Err(format!("unknown bot type '{}' (expected minimax or random)", other)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = config::get_config_manager(&args.config).get_config()?;
    if let Some(bot) = args.bot {
        config.bot_type = bot;
    }
    if args.depth.is_some() {
        config.search_depth = args.depth;
    }
    config.verbose |= args.verbose;
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.verbose);

    let rng = SessionRng::from_seed_or_random(args.seed);
    log!(
        "Starting with config '{}', bot {:?}, depth {:?}, seed {}",
        args.config,
        config.bot_type,
        config.search_depth,
        rng.seed()
    );

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout(), config, rng);
    if let Some(mode) = args.mode {
        app.start(mode)?;
    }
    app.run()?;

    log!("Exiting");
    Ok(())
}
