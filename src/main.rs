use clap::Parser;
use minefield::{Action, Board, Game, GameError, GameState, Level, Position};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Difficulty preset
    #[arg(short, long, value_enum, default_value_t = Level::Easy)]
    level: Level,

    /// Override the preset's row count
    #[arg(long)]
    rows: Option<usize>,

    /// Override the preset's column count
    #[arg(long)]
    cols: Option<usize>,

    /// Override the preset's mine count
    #[arg(long)]
    mines: Option<usize>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    match run_game(&args) {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game(args: &Args) -> Result<(), GameError> {
    let rows = args.rows.unwrap_or(args.level.rows());
    let cols = args.cols.unwrap_or(args.level.cols());
    let mines = args.mines.unwrap_or(args.level.mines());
    let board = match args.seed {
        Some(seed) => Board::seeded(rows, cols, mines, seed)?,
        None => Board::new(rows, cols, mines)?,
    };
    let mut game = Game::with_board(board);

    while game.state() == GameState::Playing {
        print_board(&game, false);

        let Some(input) = read_line() else {
            return Ok(());
        };
        if let Some((pos, action)) = parse_command(&input) {
            if let Err(e) = game.perform_action(pos, action) {
                println!("Error: {}", e);
            }
        }
    }

    print_board(&game, true);
    match game.state() {
        GameState::Won => println!("Congratulations! You won!"),
        GameState::Lost => println!("Game Over!"),
        GameState::Playing => unreachable!(),
    }

    Ok(())
}

fn print_board(game: &Game, show_mines: bool) {
    let (rows, cols) = game.dimensions();

    // Column numbers
    print!("    ");
    for col in 0..cols {
        print!("{:>2} ", col);
    }
    println!();

    for row in 0..rows {
        print!("{:>2}  ", row);
        for col in 0..cols {
            let pos = Position::new(row, col);
            let Ok(cell) = game.get_cell(pos) else {
                continue;
            };
            let glyph = if cell.is_revealed() {
                match cell.adjacent_mine_count() {
                    Some(0) | None => " ".to_string(),
                    Some(n) => n.to_string(),
                }
            } else if show_mines && cell.is_mine() {
                let mine = if game.triggered_mine() == Some(pos) { "✸" } else { "*" };
                mine.to_string()
            } else if cell.is_flagged() {
                "⚑".to_string()
            } else {
                "□".to_string()
            };
            print!("{:>2} ", glyph);
        }
        println!();
    }
    println!("Mines left: {}", game.mines_left());
}

fn read_line() -> Option<String> {
    print!("Enter command (row col [r/f]): ");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

fn parse_command(input: &str) -> Option<(Position, Action)> {
    let mut parts = input.split_whitespace();

    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let action = match parts.next().and_then(|s| s.chars().next()) {
        None | Some('r') => Action::Reveal,
        Some('f') => Action::Flag,
        Some(_) => {
            println!("Invalid action. Use 'r' to reveal or 'f' to flag");
            return None;
        }
    };

    Some((Position::new(row, col), action))
}
