use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use rust_roller::roll::DEFAULT_MAX_ROLLS;
use rust_roller::{split_words, Bot, BotConfig};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Reads one chat message per line and prints the bot's reply.
///
/// Lines without the command prefix are rolled directly.
#[derive(Parser, Debug)]
#[command(name = "repl")]
struct Args {
    /// Seed the dice for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
    /// Character that marks a line as a command.
    #[arg(long, default_value_t = '!')]
    prefix: char,
    /// Most dice one roll may draw; 0 removes the limit.
    #[arg(long, default_value_t = DEFAULT_MAX_ROLLS)]
    max_rolls: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let bot = Bot::new(BotConfig {
        prefix: args.prefix,
        max_rolls: Some(args.max_rolls).filter(|&max| max != 0),
    });

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            let reply = match bot.handle(&line, &mut rng) {
                Some(reply) => reply,
                None => bot.roll(&split_words(&line), &mut rng),
            };
            println!("{}", reply);
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
