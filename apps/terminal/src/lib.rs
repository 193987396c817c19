//! # Storefront Terminal Library
//!
//! The terminal front-end: reads one command per line, runs it against the
//! store, prints the redraw.
//!
//! ## Module Organization
//! ```text
//! storefront_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Owns the Store
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing & dispatch
//! │   ├── product.rs  ◄─── Product list/lookup/new-product commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Payment command
//! │   ├── currency.rs ◄─── Currency picker
//! │   └── config.rs   ◄─── Config & JSON snapshot
//! ├── view.rs         ◄─── Text rendering
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Output Streams
//! The storefront is drawn on stdout. Logs go to stderr, so
//! `storefront 2>/dev/null` shows only the store.

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{Command, Reply};
use error::AppError;
use state::{ConfigState, StoreState};

/// Runs the terminal storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr            │
/// │     • Default: info, debug for storefront crates; RUST_LOG overrides   │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOREFRONT_* environment variables over defaults                 │
/// │     • Invalid values stop the program here                             │
/// │                                                                         │
/// │  3. Stock the Store ──────────────────────────────────────────────────► │
/// │     • Full catalog, or a random selection (seeded or from entropy)     │
/// │                                                                         │
/// │  4. Command Loop ─────────────────────────────────────────────────────► │
/// │     • Draw storefront, then one command per line until quit or EOF     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting storefront");

    let config = ConfigState::from_env()?;
    info!(
        store = %config.store_name,
        currency = %config.currency,
        random = config.random_storefront,
        "Configuration loaded"
    );

    let mut state = StoreState::open(&config);
    info!(products = state.store().products().len(), "Store stocked");

    let stdin = io::stdin();
    let stdout = io::stdout();
    command_loop(&config, &mut state, stdin.lock(), stdout.lock())?;

    info!("Storefront closed");
    Ok(())
}

/// Reads commands from `input` until `quit` or end of input, writing every
/// redraw to `output`.
///
/// Command errors are printed and the loop goes on; only I/O failures end it.
pub fn command_loop<R, W>(
    config: &ConfigState,
    state: &mut StoreState,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", view::draw_storefront(config, state.store()))?;
    writeln!(output, "\nType 'help' for commands.")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;

        let result = Command::parse(&line).and_then(|command| match command {
            Some(command) => commands::execute(command, config, state).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(reply)) => {
                writeln!(output, "{}", view::render(&reply, config, state.store()))?;
                if matches!(reply, Reply::Quit) {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!(code = ?err.code, input = %line.trim(), "Command rejected");
                writeln!(output, "error: {}", err.message)?;
            }
        }
        prompt(&mut output)?;
    }

    debug!("End of input");
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "\n> ")?;
    output.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: info, debug for storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use storefront_core::Store;

    fn session(script: &str) -> (String, StoreState) {
        let config = ConfigState::default();
        let mut state = StoreState::new(Store::seeded());
        let mut output = Vec::new();

        command_loop(&config, &mut state, Cursor::new(script), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), state)
    }

    #[test]
    fn test_session_buys_two_apples() {
        let (output, state) = session("add 100\nadd 100\npay 0.50\npay 0.50\n");

        assert!(output.contains("Remaining balance: $0.50"));
        assert!(output.contains("Paid in full. Change due: $0.00"));
        assert!(state.store().amount_paid().is_zero());
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (output, state) = session("dance\nadd apple\n\nadd 200\n");

        assert!(output.contains("error: unknown command 'dance'"));
        assert!(output.contains("error: 'apple' is not a product id"));
        assert_eq!(state.store().cart_ids().len(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (output, state) = session("quit\nadd 100\n");

        assert!(output.contains("Farewell"));
        assert!(state.store().is_cart_empty());
    }

    #[test]
    fn test_currency_switch_redraws_prices() {
        let (output, _) = session("currency EUR\n");
        assert!(output.contains("currency: EUR"));
        assert!(output.contains("€0.47"));
    }
}
