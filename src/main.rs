// rimpvar: Reversible Variable Stepper

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use rimpvar::cli::{usage, CliArgs};
use rimpvar::config::DebugConfig;
use rimpvar::memory::ReversibleVariable;
use rimpvar::trace::TraceLog;
use rimpvar::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "rimpvar".to_string());

    let cli = match CliArgs::parse(args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(1);
        }
    };

    let config = DebugConfig::from_env();

    if cli.print {
        init_logging(config);
        return run_print(&cli, config);
    }

    // stderr belongs to the alternate screen, so traces go to the in-memory log
    let variable = ReversibleVariable::with_sink(&cli.name, config.enabled, TraceLog::new());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(variable, cli.targets);
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

fn init_logging(config: DebugConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Assign every target, then unwind them all, printing the variable after each step
fn run_print(cli: &CliArgs, config: DebugConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut variable = ReversibleVariable::new(&cli.name, config.enabled);
    println!("{}", variable.inspect());

    for &target in &cli.targets {
        variable.assign(target);
        println!("{}", variable.inspect());
    }

    while variable.can_unassign() {
        variable.unassign()?;
        println!("{}", variable.inspect());
    }

    println!("{} = {}", variable.name(), variable.get());
    Ok(())
}
