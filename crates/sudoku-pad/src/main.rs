mod app;
mod board;
mod engine;
mod render;
mod theme;

use app::{App, AppAction};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use sudoku_engine::{Engine, Grid};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sudoku-pad", about = "Interactive sudoku board editor")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a serialized puzzle (81 digits, 0 = empty) and print the result
    Solve { puzzle: String },
    /// Run the engine's internal benchmark
    Bench,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Some(Command::Solve { puzzle }) => solve_once(&puzzle),
        Some(Command::Bench) => bench_once(),
        None => run_editor(),
    }
}

fn solve_once(puzzle: &str) -> io::Result<()> {
    let board = match Grid::from_wire(puzzle) {
        Some(board) => board,
        None => {
            println!("Couldn't read sudoku from input");
            return Ok(());
        }
    };
    println!("Solving the following sudoku:\n{}", board);

    let engine = Engine::new();
    let start = Instant::now();
    match engine.solve(puzzle) {
        Some(solution) => {
            let elapsed = start.elapsed();
            let solved = Grid::from_wire(&solution).expect("engine returns well-formed boards");
            println!("Solved in {:.3}ms:\n{}", elapsed.as_secs_f64() * 1000.0, solved);
        }
        None => println!("Couldn't solve sudoku"),
    }
    Ok(())
}

fn bench_once() -> io::Result<()> {
    let mut app = App::new(Engine::new());
    app.run_internal_benchmark();
    println!("{}", app.status().unwrap_or_default());
    Ok(())
}

fn run_editor() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_loop(&mut stdout);

    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    result
}

fn run_loop(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut app = App::new(Engine::new());

    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key).map_err(io::Error::other)? {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                    AppAction::BoardBenchmark => {
                        // The render loop is the scheduler the benchmark
                        // yields back to after every cycle.
                        app.run_board_benchmark(|state| {
                            render::render(stdout, state)?;
                            stdout.flush()
                        })?;
                    }
                }
            }
        }
    }

    Ok(())
}
