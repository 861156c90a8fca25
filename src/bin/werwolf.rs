//! Line-oriented harness around the werwolf engine.
//!
//! Reads one command per line from stdin and prints the resulting state.
//! Type `help` for the command list.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use werwolf::core::{GameRng, PlayerId, RandomIds, Role, RosterSettings};
use werwolf::round::{RevealPhase, RoundAssigner, RoundAssignment};
use werwolf::roster::RosterConfig;
use werwolf::session::Session;

#[derive(Debug, StructOpt)]
#[structopt(name = "werwolf", about = "Set up a Werewolf game and reveal roles one player at a time.")]
struct Opt {
    /// Seed for dealing roles (random if omitted)
    #[structopt(long)]
    seed: Option<u64>,

    /// Prefix for auto-generated player names
    #[structopt(long, default_value = "Player")]
    prefix: String,

    /// Number of players to start with
    #[structopt(long, default_value = "2")]
    players: usize,

    /// Minimum number of players needed to start a round (at least 2)
    #[structopt(long, default_value = "2")]
    min_players: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Show,
    Add,
    Remove(Vec<usize>),
    Move { from: Vec<usize>, to: usize },
    Rename { target: Target, name: String },
    Increment(Role),
    Decrement(Role),
    Start,
    Next,
    Restart,
    Reshuffle,
    End,
    Dump,
    Help,
    Quit,
}

/// A player named either by list position or by id.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    Index(usize),
    Id(PlayerId),
}

/// Everything `dump` prints.
#[derive(Serialize)]
struct Dump<'a> {
    roster: &'a RosterConfig,
    round: Option<&'a RoundAssignment>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("missing argument: {0}")]
    Missing(&'static str),
    #[error("not a number: `{0}`")]
    BadNumber(String),
    #[error("unknown role `{0}`")]
    BadRole(String),
    #[error("not a player index or id: `{0}`")]
    BadTarget(String),
}

const HELP: &str = "\
commands:
  show                      print roster or round
  add                       add an auto-named player
  remove <i> [<i> ...]      remove players by position
  move <i>[,<i> ...] <to>   move players before position <to>
  rename <i|id> <name>      rename a player
  inc <role> / dec <role>   adjust werewolf, fortuneteller, witch, amor
  start                     deal roles and begin the reveal
  next                      reveal the next player
  restart                   reveal again from the first player, same roles
  reshuffle                 deal a fresh shuffle from the same roster
  end                       discard the round and edit the roster
  dump                      print the session as JSON
  quit";

fn parse_index(s: &str) -> Result<usize, CommandError> {
    s.parse().map_err(|_| CommandError::BadNumber(s.to_string()))
}

fn parse_role(s: Option<&str>) -> Result<Role, CommandError> {
    let s = s.ok_or(CommandError::Missing("role"))?;
    Role::from_key(s).ok_or_else(|| CommandError::BadRole(s.to_string()))
}

fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "show" | "ls" => Command::Show,
        "add" => Command::Add,
        "remove" | "rm" => {
            let indices = words.map(parse_index).collect::<Result<Vec<_>, _>>()?;
            if indices.is_empty() {
                return Err(CommandError::Missing("index"));
            }
            Command::Remove(indices)
        }
        "move" | "mv" => {
            let from = words.next().ok_or(CommandError::Missing("source index"))?;
            let to = words.next().ok_or(CommandError::Missing("destination"))?;
            Command::Move {
                from: from.split(',').map(parse_index).collect::<Result<Vec<_>, _>>()?,
                to: parse_index(to)?,
            }
        }
        "rename" => {
            let target = words.next().ok_or(CommandError::Missing("player"))?;
            let target = match target.parse::<usize>() {
                Ok(i) => Target::Index(i),
                Err(_) => Target::Id(
                    target
                        .parse()
                        .map_err(|_| CommandError::BadTarget(target.to_string()))?,
                ),
            };
            let name = words.collect::<Vec<_>>().join(" ");
            Command::Rename { target, name }
        }
        "inc" | "+" => Command::Increment(parse_role(words.next())?),
        "dec" | "-" => Command::Decrement(parse_role(words.next())?),
        "start" => Command::Start,
        "next" | "n" => Command::Next,
        "restart" => Command::Restart,
        "reshuffle" => Command::Reshuffle,
        "end" | "back" => Command::End,
        "dump" => Command::Dump,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn print_roster(roster: &RosterConfig) {
    for (i, player) in roster.players().iter().enumerate() {
        println!("  {i:>2}  {:<20} {}", player.name, player.id());
    }
    let counts = roster.role_counts();
    for (role, count) in counts.iter() {
        let marker = if roster.can_increment(role) { "+" } else { " " };
        println!("  {marker} {:<15} {count}", role.label());
    }
    println!(
        "  {} of {} roles assigned, {}",
        roster.total_assigned(),
        roster.players().len(),
        if roster.can_start_game() { "ready" } else { "not ready" }
    );
}

fn print_state(session: &Session) {
    let Some(round) = session.round() else {
        print_roster(session.roster());
        return;
    };

    match (round.phase(), round.current_player()) {
        (RevealPhase::Revealing, Some(player)) => {
            let progress = round.progress();
            println!(
                "  Player {} of {}: {} is {}",
                progress.position,
                progress.total,
                player.name,
                player.role().map_or("?", Role::label)
            );
            if round.is_last_player() {
                println!("  (last player)");
            }
        }
        _ => println!("  All {} players have seen their role.", round.len()),
    }
}

fn run(session: &mut Session, command: Command) -> bool {
    match command {
        Command::Show => {}
        Command::Add => {
            if let Some(roster) = session.roster_mut() {
                roster.add_player();
            }
        }
        Command::Remove(indices) => {
            if let Some(roster) = session.roster_mut() {
                roster.remove_players(indices);
            }
        }
        Command::Move { from, to } => {
            if let Some(roster) = session.roster_mut() {
                roster.move_players(from, to);
            }
        }
        Command::Rename { target, name } => {
            if let Some(roster) = session.roster_mut() {
                let id = match target {
                    Target::Id(id) => Some(id),
                    Target::Index(i) => roster.players().get(i).map(|p| p.id()),
                };
                if !id.is_some_and(|id| roster.update_player_name(id, &name)) {
                    println!("  no such player");
                }
            }
        }
        Command::Increment(role) => {
            session.increment(role);
        }
        Command::Decrement(role) => {
            session.decrement(role);
        }
        Command::Start => {
            if let Err(err) = session.start_round() {
                println!("  cannot start: {err}");
            }
        }
        Command::Next => {
            session.advance();
        }
        Command::Restart => {
            session.restart_round();
        }
        Command::Reshuffle => {
            if let Err(err) = session.reshuffle_round() {
                println!("  cannot reshuffle: {err}");
            }
        }
        Command::End => {
            session.end_round();
        }
        Command::Dump => {
            let dump = Dump {
                roster: session.roster(),
                round: session.round(),
            };
            match serde_json::to_string_pretty(&dump) {
                Ok(text) => println!("{text}"),
                Err(err) => println!("  cannot serialize: {err}"),
            }
            return true;
        }
        Command::Help => {
            println!("{HELP}");
            return true;
        }
        Command::Quit => return false,
    }
    print_state(session);
    true
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opt = Opt::from_args();
    let settings = RosterSettings::new()
        .with_name_prefix(opt.prefix)
        .with_initial_players(opt.players)
        .with_min_players(opt.min_players);
    let rng = opt.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::info!(seed = rng.seed(), "dealing seed");

    let mut session = Session::new(
        RosterConfig::with_settings(settings, RandomIds),
        RoundAssigner::new(rng),
    );
    print_state(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(Some(command)) => {
                if !run(&mut session, command) {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => println!("  {err}"),
        }
    }
    Ok(())
}
