use std::io::{self, BufRead};
use std::process::ExitCode;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use api_demo::{ApiDemo, Command, DemoContext, Flow, DEFAULT_SEED};
use glass_core::LogSoundPlayer;
use glass_runtime_std::StdRuntime;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Text-driven gallery of Glass card toolkit samples.
#[derive(Parser, Debug)]
#[command(name = "api-demo")]
struct Args {
    /// Seed for the random action given to inserted cards
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

/// Pumps frames until the visible card animation is over.
fn settle(runtime: &StdRuntime, demo: &ApiDemo) {
    runtime.pump_frame();
    while demo.is_animating() {
        thread::sleep(FRAME_INTERVAL);
        runtime.pump_frame();
    }
}

fn run_for(runtime: &StdRuntime, duration: Duration) {
    let deadline = Instant::now() + duration;
    runtime.pump_frame();
    while Instant::now() < deadline {
        thread::sleep(FRAME_INTERVAL.min(deadline.saturating_duration_since(Instant::now())));
        runtime.pump_frame();
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    log::debug!("starting with seed {}", args.seed);

    println!("=== Glass API demo ===");
    println!("Commands: tap, next, prev, back, say <command>, wait <ms>, show, quit");
    println!();

    let runtime = StdRuntime::new();
    let context = DemoContext::new(runtime.runtime_handle(), Rc::new(LogSoundPlayer), args.seed);
    let mut demo = ApiDemo::new(context);
    println!("{}", demo.describe());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::warn!("ignoring input `{}`: {err}", line.trim());
                eprintln!("{err}");
                continue;
            }
        };
        match demo.handle(command) {
            Flow::Continue => settle(&runtime, &demo),
            Flow::Wait(millis) => run_for(&runtime, Duration::from_millis(millis)),
            Flow::Quit => break,
        }
        println!("{}", demo.describe());
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_defaults_and_parses() {
        let args = Args::try_parse_from(["api-demo"]).expect("no arguments");
        assert_eq!(args.seed, DEFAULT_SEED);
        let args = Args::try_parse_from(["api-demo", "--seed", "42"]).expect("valid seed");
        assert_eq!(args.seed, 42);
    }

    #[test]
    fn seed_errors_are_reported() {
        assert!(Args::try_parse_from(["api-demo", "--seed"]).is_err());
        assert!(Args::try_parse_from(["api-demo", "--seed", "x"]).is_err());
        assert!(Args::try_parse_from(["api-demo", "--verbose"]).is_err());
    }
}
