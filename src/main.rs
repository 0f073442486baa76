// sortty: Step-by-Step Sorting Visualizer for the Terminal

mod algorithms;
mod controller;
mod snapshot;
mod ui;

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use algorithms::Algorithm;
use ui::App;

struct Options {
    size: usize,
    seed: u64,
    speed: u32,
    algorithm: Algorithm,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --size <N>          number of bars, 5..=200 (default 40)");
    eprintln!("      --seed <N>          rng seed; 0 or absent uses OS entropy");
    eprintln!("      --speed <N>         playback speed in steps/second, 1..=60 (default 10)");
    eprintln!("  -a, --algorithm <NAME>  bubble | selection | insertion | merge | quick");
    eprintln!();
    eprintln!("Keys: space run/stop, right/s step, enter finish, backspace reset,");
    eprintln!("      r shuffle, tab/1-5 algorithm, +/- size, [/] speed, q quit");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        size: 40,
        seed: 0,
        speed: 10,
        algorithm: Algorithm::Bubble,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--size" | "-n" => {
                let value = iter
                    .next()
                    .ok_or_else(|| String::from("--size needs a value"))?;
                opts.size = value
                    .parse()
                    .map_err(|_| format!("invalid size '{}'", value))?;
            }
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| String::from("--seed needs a value"))?;
                opts.seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed '{}'", value))?;
            }
            "--speed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| String::from("--speed needs a value"))?;
                opts.speed = value
                    .parse()
                    .map_err(|_| format!("invalid speed '{}'", value))?;
            }
            "--algorithm" | "-a" => {
                let value = iter
                    .next()
                    .ok_or_else(|| String::from("--algorithm needs a value"))?;
                opts.algorithm = Algorithm::from_name(value)
                    .ok_or_else(|| format!("unknown algorithm '{}'", value))?;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(opts)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(program);
        return Ok(());
    }

    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(program);
            process::exit(1);
        }
    };

    // Seed 0 (or no --seed) draws from OS entropy; anything else reproduces
    // the same array sequence run after run
    let rng = if opts.seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(opts.seed)
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(opts.algorithm, rng, opts.size, opts.speed);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
