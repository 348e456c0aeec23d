//! Command handlers

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rust_decimal_macros::dec;
use tracing::warn;

use renta_app::config::Config;
use renta_app::fleet;
use renta_app::input::{parse_bounded_amount, parse_bounded_int};
use renta_app::session::{Action, SessionController};
use renta_store::{AccountDirectory, Snapshot, SnapshotStore, VehicleCatalog};
use renta_types::{Error, Money, OutputFormat, Result, MAX_RENTAL_DAYS};

use crate::cli::{Cli, Commands};
use crate::output::{render_outcome, render_vehicles};

pub fn execute(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Run { fresh } => {
            run_session(&with_store_override(config, cli.store_dir), format, fresh)
        }
        Commands::Vehicles => list_fleet(&with_store_override(config, cli.store_dir), format),
        Commands::Snapshot { export, import } => {
            manage_snapshot(&with_store_override(config, cli.store_dir), export, import)
        }
        Commands::Config {
            show,
            set_output,
            set_store_dir,
            reset,
        } => manage_config(config, show, set_output, set_store_dir, reset),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Apply a `--store-dir` override for this invocation only.
fn with_store_override(mut config: Config, store_dir: Option<PathBuf>) -> Config {
    if store_dir.is_some() {
        config.store_dir = store_dir;
    }
    config
}

fn load_state(
    config: &Config,
    fresh: bool,
) -> Result<(SnapshotStore, VehicleCatalog, AccountDirectory)> {
    let store = SnapshotStore::open(config.store_dir()?)?;
    if !fresh && store.exists() {
        let (catalog, directory) = store.load()?.restore()?;
        return Ok((store, catalog, directory));
    }
    let catalog = if config.seed_demo_fleet {
        fleet::seed_catalog()?
    } else {
        VehicleCatalog::new()
    };
    Ok((store, catalog, AccountDirectory::new()))
}

fn run_session(config: &Config, format: OutputFormat, fresh: bool) -> Result<()> {
    let (store, catalog, directory) = load_state(config, fresh)?;
    let mut session = SessionController::new(catalog, directory);

    let stdin = io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());

    loop {
        let keep_going = if session.is_logged_in() {
            logged_in_menu(&mut session, &mut tokens, format)
        } else {
            logged_out_menu(&mut session, &mut tokens, format)
        };
        if !keep_going {
            break;
        }
    }

    let (catalog, directory) = session.into_parts();
    if let Err(e) = store.save(&Snapshot::capture(&catalog, &directory)) {
        // a failed dump must not block shutdown
        warn!(error = %e, "failed to save snapshot on exit");
    }
    println!("Exiting.");
    Ok(())
}

fn logged_out_menu(
    session: &mut SessionController,
    tokens: &mut TokenReader<impl BufRead>,
    format: OutputFormat,
) -> bool {
    println!();
    println!("===== RENTAL DESK =====");
    println!("1) Login");
    println!("2) Register");
    println!("3) Exit");

    let Some(choice) = prompt_menu_choice(tokens, 3) else {
        return false;
    };
    let action = match choice {
        1 => {
            let Some(id) = prompt_token(tokens, "UserID") else {
                return false;
            };
            let Some(password) = prompt_token(tokens, "Password") else {
                return false;
            };
            Action::Login { id, password }
        }
        2 => {
            let Some(id) = prompt_token(tokens, "ID") else {
                return false;
            };
            let Some(name) = prompt_token(tokens, "Name") else {
                return false;
            };
            let Some(password) = prompt_token(tokens, "Password") else {
                return false;
            };
            Action::Register { id, name, password }
        }
        _ => return false,
    };
    report(session, action, format);
    true
}

fn logged_in_menu(
    session: &mut SessionController,
    tokens: &mut TokenReader<impl BufRead>,
    format: OutputFormat,
) -> bool {
    let name = session
        .current_customer()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    println!();
    println!("===== USER MENU: {} =====", name);
    println!("1) Rent Vehicle");
    println!("2) Return Vehicle");
    println!("3) Request Loan");
    println!("4) Transfer Loan");
    println!("5) Show History");
    println!("6) Sort History");
    println!("7) Delete Account");
    println!("8) Logout");

    let Some(choice) = prompt_menu_choice(tokens, 8) else {
        return false;
    };
    let action = match choice {
        1 => {
            if let Err(e) = render_vehicles(format, session.catalog().list()) {
                println!("Error: {}", e);
            }
            let Some(vehicle_id) = prompt_token(tokens, "VehicleID") else {
                return false;
            };
            let Some(days) = prompt_bounded_int(tokens, "Days", 1, MAX_RENTAL_DAYS as i64) else {
                return false;
            };
            Action::Rent {
                vehicle_id,
                days: days as u32,
            }
        }
        2 => {
            let Some(token) = prompt_token(tokens, "VehicleID ('-' for most recent)") else {
                return false;
            };
            let vehicle_id = if token == "-" { None } else { Some(token) };
            Action::Return { vehicle_id }
        }
        3 => {
            let Some(amount) = prompt_amount(tokens, "Amount") else {
                return false;
            };
            Action::RequestLoan { amount }
        }
        4 => {
            let Some(to_id) = prompt_token(tokens, "TargetID") else {
                return false;
            };
            let Some(amount) = prompt_amount(tokens, "Amount") else {
                return false;
            };
            Action::TransferLoan { to_id, amount }
        }
        5 => Action::ShowHistory,
        6 => Action::SortHistory,
        7 => Action::DeleteAccount,
        _ => Action::Logout,
    };
    report(session, action, format);
    true
}

/// Run one action and print either the outcome or the error; session
/// errors never end the loop.
fn report(session: &mut SessionController, action: Action, format: OutputFormat) {
    let rendered = session
        .handle(action)
        .and_then(|outcome| render_outcome(format, &outcome));
    if let Err(e) = rendered {
        println!("Error: {}", e);
    }
}

fn list_fleet(config: &Config, format: OutputFormat) -> Result<()> {
    let (_, catalog, _) = load_state(config, false)?;
    render_vehicles(format, catalog.list())
}

fn manage_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_store_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
    }

    let mut changed = false;
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        changed = true;
    }
    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || (!changed && !reset) {
        print!("{}", config);
    }
    Ok(())
}

fn manage_snapshot(
    config: &Config,
    export: Option<PathBuf>,
    import: Option<PathBuf>,
) -> Result<()> {
    let store = SnapshotStore::open(config.store_dir()?)?;

    if let Some(path) = import {
        let snapshot = SnapshotStore::at_path(path.clone()).load()?;
        // restore first so a bad file never clobbers the store
        let (catalog, directory) = snapshot.restore()?;
        store.save(&Snapshot::capture(&catalog, &directory))?;
        println!(
            "Imported snapshot from {} ({} vehicles, {} accounts)",
            path.display(),
            catalog.count(),
            directory.count()
        );
        return Ok(());
    }

    if let Some(path) = export {
        if !store.exists() {
            return Err(Error::InvalidState(
                "no snapshot to export; run a session first".to_string(),
            ));
        }
        let snapshot = store.load()?;
        SnapshotStore::at_path(path.clone()).save(&snapshot)?;
        println!("Exported snapshot to {}", path.display());
        return Ok(());
    }

    if store.exists() {
        let snapshot = store.load()?;
        println!("Snapshot:  {}", store.path().display());
        println!("Saved at:  {}", snapshot.saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
        println!("Vehicles:  {}", snapshot.vehicles.len());
        println!("Accounts:  {}", snapshot.customers.len());
    } else {
        println!("No snapshot at {}", store.path().display());
    }
    Ok(())
}

/// Whitespace-delimited tokens from a blocking reader. `None` means
/// end of input; menus treat it as Exit.
struct TokenReader<R: BufRead> {
    reader: R,
    buffer: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: VecDeque::new(),
        }
    }

    fn next(&mut self) -> Option<String> {
        while self.buffer.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line).ok()? == 0 {
                return None;
            }
            self.buffer
                .extend(line.split_whitespace().map(String::from));
        }
        self.buffer.pop_front()
    }
}

fn prompt_token(tokens: &mut TokenReader<impl BufRead>, label: &str) -> Option<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    tokens.next()
}

fn prompt_menu_choice(tokens: &mut TokenReader<impl BufRead>, hi: i64) -> Option<i64> {
    prompt_bounded_int(tokens, "Choice", 1, hi)
}

fn prompt_bounded_int(
    tokens: &mut TokenReader<impl BufRead>,
    label: &str,
    lo: i64,
    hi: i64,
) -> Option<i64> {
    loop {
        let token = prompt_token(tokens, label)?;
        match parse_bounded_int(&token, lo, hi) {
            Ok(value) => return Some(value),
            Err(e) => println!("{}", e),
        }
    }
}

fn prompt_amount(tokens: &mut TokenReader<impl BufRead>, label: &str) -> Option<Money> {
    loop {
        let token = prompt_token(tokens, label)?;
        match parse_bounded_amount(&token, dec!(0.01), dec!(1000000)) {
            Ok(value) => return Some(value),
            Err(e) => println!("{}", e),
        }
    }
}
