//! Command-line front end for the analysis engine
//!
//! Settings come from `uttt.toml` (see `uttt::config`); `--depth` overrides
//! the configured search depth. Logging is controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use uttt::notation::{encode, replay_from};
use uttt::{load_config, AnalysisEngine, BoardState, EngineConfig, Searcher};

/// Position analysis for nine-subboard tic-tac-toe
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth in plies (defaults to the configured depth)
    #[arg(short, long, global = true)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an 83-digit position
    Eval {
        position: String,
    },
    /// Replay a move list and print the resulting position
    Replay {
        moves: String,
        /// Base position (defaults to the configured start position)
        #[arg(short, long)]
        start: Option<String>,
    },
    /// Find the best move in an 83-digit position
    Best {
        position: String,
    },
    /// Generate a random opening with one X and one O per subboard
    Random {
        /// Seed for a reproducible opening
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Merge several move lists into one variation tree and print it
    Tree {
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = load_config();
    if let Some(depth) = args.depth {
        config.search_depth = depth;
    }
    info!(depth = config.search_depth, routing = ?config.routing, "configuration loaded");

    match args.command {
        Command::Eval { position } => eval(&config, &position),
        Command::Replay { moves, start } => replay(&config, &moves, start.as_deref()),
        Command::Best { position } => best(&config, &position),
        Command::Random { seed } => random(seed),
        Command::Tree { moves } => tree(config, &moves),
    }
}

fn parse_position(text: &str) -> Result<BoardState> {
    text.trim()
        .parse()
        .with_context(|| format!("invalid position {:?}", text.trim()))
}

fn print_result(state: &BoardState, score: i32) {
    println!("{state}");
    match state.winner() {
        Some(mark) => println!("winner: {}", mark.to_char()),
        None => println!("winner: none"),
    }
    println!("score: {score}");
}

fn eval(config: &EngineConfig, position: &str) -> Result<()> {
    let state = parse_position(position)?;
    let mut searcher = Searcher::with_rules(config.rules());
    let score = searcher.get_evaluation(&state, config.search_depth);
    print_result(&state, score);
    println!("nodes: {}", searcher.stats().nodes);
    Ok(())
}

fn replay(config: &EngineConfig, moves: &str, start: Option<&str>) -> Result<()> {
    let base = match start {
        Some(text) => parse_position(text)?,
        None => config.start_state().context("invalid configured start position")?,
    };
    let replayed = replay_from(&base, moves.trim(), &config.rules())
        .with_context(|| format!("cannot replay {:?}", moves.trim()))?;

    let mut searcher = Searcher::with_rules(config.rules());
    let score = searcher.get_evaluation(&replayed.state, config.search_depth);
    print_result(&replayed.state, score);
    match encode(&replayed.state) {
        Ok(text) => println!("position: {text}"),
        Err(e) => println!("position: unavailable ({e})"),
    }
    Ok(())
}

fn best(config: &EngineConfig, position: &str) -> Result<()> {
    let state = parse_position(position)?;
    let mut searcher = Searcher::with_rules(config.rules());
    let result = searcher.best_move(&state, config.search_depth);

    println!("{state}");
    match result.best_move {
        Some(mv) => println!("best: board {} cell {}", mv.board, mv.cell),
        None => println!("best: none"),
    }
    println!("score: {}", result.score);
    println!(
        "nodes: {} (cutoffs {}, first-move {:.1}%)",
        result.nodes,
        result.stats.beta_cutoffs,
        result.stats.first_move_rate()
    );
    Ok(())
}

fn random(seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let state = BoardState::random_opening(&mut rng);
    println!("{state}");
    println!("position: {}", encode(&state)?);
    Ok(())
}

fn tree(config: EngineConfig, lists: &[String]) -> Result<()> {
    let mut session = AnalysisEngine::with_config(config).context("invalid configuration")?;
    for list in lists {
        let root = session.tree().root();
        session
            .tree_mut()
            .add_move_list(root, list.trim())
            .with_context(|| format!("cannot add {:?}", list.trim()))?;
    }

    let tree = session.tree();
    println!("{tree}");
    let main_end = tree.main_line().last().copied().unwrap_or(tree.root());
    println!("main line: {}", tree.move_list(main_end));
    println!("nodes: {}", tree.len());
    Ok(())
}
