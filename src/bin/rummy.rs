use anyhow::Context;
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use rummy_rs::dealer::{DealConfig, Dealer};
use rummy_rs::evaluator::EvalConfig;
use rummy_rs::report::render_plain;
use rummy_rs::tui::{app::AppState, controller};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(version, about = "Deal a hand and split it into straights and sets.")]
struct Cli {
    /// Cards per hand.
    #[clap(long, default_value_t = DealConfig::DEFAULT_HAND_SIZE)]
    hand_size: usize,
    /// Deals to try before giving up on a hand with a straight and a set.
    #[clap(long, default_value_t = DealConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
    /// Upper bound on set candidates per evaluation.
    #[clap(long, default_value_t = EvalConfig::DEFAULT_MAX_SET_CANDIDATES)]
    max_sets: usize,
    /// Seed for reproducible shuffles.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Keep the first deal even without a straight and a set.
    #[clap(long)]
    any: bool,
    /// Print one deal as text instead of starting the TUI.
    #[clap(long)]
    plain: bool,
}

impl Cli {
    fn deal_config(&self) -> DealConfig {
        DealConfig {
            hand_size: self.hand_size,
            max_attempts: self.max_attempts,
            require_satisfying: !self.any,
            seed: self.seed,
            eval: EvalConfig { max_set_candidates: self.max_sets },
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Plain text goes to stdout; otherwise the TUI owns the terminal.
fn plain_output(cli: &Cli, stdout_is_terminal: bool) -> bool {
    cli.plain || !stdout_is_terminal
}

/// Log to stderr. Only safe when the TUI is not drawing.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let plain = plain_output(&cli, io::stdout().is_terminal());
    if plain {
        init_logger();
    }

    let dealer = Dealer::new(cli.deal_config()).context("invalid deal settings")?;

    if plain {
        let deal = dealer.deal()?;
        print!("{}", render_plain(&deal));
        return Ok(());
    }

    let mut terminal = setup_terminal().context("terminal setup failed")?;
    let mut app = AppState::new(dealer);
    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    Ok(())
}
