use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use clap::Parser;
use memorama_core::*;

use command::{Command, HELP};
use render::{EventPrinter, render};
use settings::Settings;

mod command;
mod render;
mod settings;

type Controller = GameController<ImagePool, WallClock, TimerQueue, EventPrinter>;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board size: small, medium, large or WxH
    #[arg(long)]
    size: Option<BoardSize>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long a revealed pair stays face up before it is compared, in milliseconds
    #[arg(long)]
    delay_ms: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(size) = args.size {
        settings.game.size = size;
    }
    if let Some(delay_ms) = args.delay_ms {
        settings.game.resolve_delay_ms = delay_ms;
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}, config: {:?}", settings.game);

    let mut ctrl: Controller = GameController::new(
        settings.game,
        seed,
        settings.image_pool(),
        WallClock::new(),
        TimerQueue::new(),
        EventPrinter,
    );
    ctrl.start_game(settings.game.size)?;
    println!("{HELP}");
    show(&ctrl);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                prompt()?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Board => show(&ctrl),
            Command::Flip(target) => {
                flip(&mut ctrl, target);
                show(&ctrl);
            }
            Command::New(size) => {
                ctrl.abandon();
                match ctrl.start_game(size.unwrap_or(settings.game.size)) {
                    Ok(()) => show(&ctrl),
                    Err(err) => println!("{err}"),
                }
            }
            Command::Restart => match ctrl.restart() {
                Ok(()) => println!("Cleared, type \"new\" to deal again."),
                Err(err) => println!("{err}, use \"abandon\" to drop it."),
            },
            Command::Abandon => {
                if ctrl.abandon() {
                    println!("Game abandoned, type \"new\" to deal again.");
                }
            }
        }
        prompt()?;
    }

    Ok(())
}

fn flip(ctrl: &mut Controller, target: command::Target) {
    let Some(size) = ctrl.board().map(Board::size) else {
        println!("No game in progress, type \"new\" to deal.");
        return;
    };
    let Some(index) = target.to_index(size) else {
        println!("{target:?} is off the {size} board.");
        return;
    };

    if let RevealOutcome::Scheduled(_) = ctrl.request_reveal(index) {
        show(ctrl);
        settle(ctrl);
    }
}

/// Waits out every pending resolution in real time.
fn settle(ctrl: &mut Controller) {
    while let Some(wait) = ctrl.scheduler().next_due_in() {
        thread::sleep(wait);
        for handle in ctrl.scheduler_mut().advance(wait) {
            ctrl.resolve(handle);
        }
    }
}

fn show(ctrl: &Controller) {
    if let Some(obs) = ctrl.observe() {
        println!("{}", render(&obs));
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
