//! Console entry point: two players share one terminal.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use plum_referee::console::console_top::run_stdio_loop;
use plum_referee::utils::render_game_state::BoardStyle;

#[derive(Parser, Debug)]
#[command(name = "plum_referee", version, about = "Two-player chess referee for the terminal")]
struct Args {
    /// Draw pieces with letters instead of Unicode glyphs.
    #[arg(long)]
    ascii: bool,

    /// Log filter used when RUST_LOG is unset (e.g. `debug`, `plum_referee=trace`).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let style = if args.ascii {
        BoardStyle::Ascii
    } else {
        BoardStyle::Unicode
    };
    run_stdio_loop(style)?;
    Ok(())
}
