use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use roshambot::game::action::Move;
use roshambot::game::tournament::Tournament;
use roshambot::players::constant::Constant;
use roshambot::players::cycle::Cycle;
use roshambot::players::human::Human;
use roshambot::players::markov::Markov;
use roshambot::players::mirror::Mirror;
use roshambot::players::player::Player;
use roshambot::players::random::Random;
use std::path::Path;
use std::path::PathBuf;

/// round-robin rock-paper-scissors between pluggable strategy agents
#[derive(Parser)]
struct Args {
    /// rounds per game
    #[arg(long, default_value_t = roshambot::ROUNDS)]
    rounds: usize,
    /// games per matchup
    #[arg(long, default_value_t = roshambot::GAMES)]
    games: usize,
    /// seats in the tournament (prompted when absent)
    #[arg(long)]
    seats: Option<usize>,
    /// round history file, reloaded by adaptive agents each session
    #[arg(long, default_value = roshambot::HISTORY)]
    history: PathBuf,
}

fn main() -> Result<()> {
    roshambot::log();
    let args = Args::parse();
    let seats = match args.seats {
        Some(n) => n,
        None => Input::new()
            .with_prompt("number of players")
            .validate_with(|n: &usize| match *n >= 2 {
                true => Ok(()),
                false => Err("need at least two players"),
            })
            .interact()?,
    };
    let roster = (1..=seats)
        .map(|position| seat(position, &args.history))
        .collect::<Result<Vec<Box<dyn Player>>>>()?;
    Tournament::new(roster, args.games, args.rounds, &args.history)?.play()
}

fn seat(position: usize, history: &Path) -> Result<Box<dyn Player>> {
    println!("{}", format!("\nconfiguring player {}", position).cyan());
    let name = Input::<String>::new().with_prompt("name").interact()?;
    let choice = Select::new()
        .with_prompt("strategy")
        .items(&["human", "random", "mirror", "cycle", "markov", "constant"])
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => Box::new(Human::from(name)),
        1 => Box::new(Random::from(name)),
        2 => Box::new(Mirror::from(name)),
        3 => Box::new(Cycle::from(name)),
        4 => Box::new(Markov::recall(name, history)),
        5 => Box::new(Constant::from((name, held()?))),
        _ => unreachable!("selection is closed over the listed strategies"),
    })
}

fn held() -> Result<Move> {
    let choice = Select::new()
        .with_prompt("which move, always")
        .items(Move::all())
        .default(0)
        .interact()?;
    Ok(Move::from(choice as u8))
}
