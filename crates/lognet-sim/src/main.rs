//! CLI entry point for the lognet simulator.
//!
//! `show` and `repl` print human-readable text; `apply` writes the final
//! state as JSON to stdout. Logs go to stderr.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use lognet_core::SimConfig;
use lognet_sim::command::{parse_assignment, ReplCommand, HELP};
use lognet_sim::render;
use lognet_sim::Simulator;

#[derive(Parser)]
#[command(name = "lognet")]
#[command(about = "Logical network simulator: recolor nodes, watch propagation and conflicts")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: lognet).
    #[arg(short, long, default_value = "lognet", global = true)]
    config: String,

    /// Seed graph JSON file (overrides sim.seed_path).
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the starting graph, conflicts and history.
    Show,
    /// Apply changes in order and print the resulting state as JSON.
    Apply {
        /// Changes as ID=COLOR, e.g. A=red B=blue.
        #[arg(required = true)]
        changes: Vec<String>,
    },
    /// Interactive session reading commands from stdin.
    Repl,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut sim_config = SimConfig::load(&cli.config)?;
    if let Some(seed) = &cli.seed {
        sim_config.seed_path = Some(seed.clone());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&sim_config.log_level));
    if cli.json_logs {
        fmt().with_env_filter(filter).json().with_writer(std::io::stderr).init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    let mut sim = Simulator::from_config(&sim_config)?;
    tracing::info!(
        nodes = sim.graph().node_count(),
        session_id = %sim.history().session_id(),
        "Session started"
    );

    match cli.command {
        Command::Show => print_state(&sim, &sim_config),
        Command::Apply { ref changes } => {
            for raw in changes {
                let (id, color) = parse_assignment(raw)?;
                sim.apply_user_change(&id, color)?;
            }
            println!("{}", serde_json::to_string_pretty(&sim.view())?);
        }
        Command::Repl => run_repl(&mut sim, &sim_config)?,
    }

    Ok(())
}

fn print_state(sim: &Simulator, config: &SimConfig) {
    print!("{}", render::render_graph(&sim.snapshot()));
    println!();
    print!("{}", render::render_conflicts(&sim.conflict_labels()));
    print_history(sim, config);
}

fn print_history(sim: &Simulator, config: &SimConfig) {
    let entries = match config.history_limit {
        Some(n) => sim.history().tail(n),
        None => sim.history().entries(),
    };
    print!("{}", render::render_history(entries));
}

fn run_repl(sim: &mut Simulator, config: &SimConfig) -> anyhow::Result<()> {
    println!("{HELP}");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match ReplCommand::parse(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            ReplCommand::Set(id, color) => match sim.apply_user_change(&id, color) {
                Ok(outcome) => {
                    print!("{}", render::render_outcome(&outcome));
                    print!("{}", render::render_conflicts(&sim.conflict_labels()));
                    for event in sim.drain_events() {
                        tracing::debug!(seq = event.change_seq, payload = ?event.payload, "Event");
                    }
                }
                Err(e) => println!("{e}"),
            },
            ReplCommand::Show => print!("{}", render::render_graph(&sim.snapshot())),
            ReplCommand::Conflicts => {
                print!("{}", render::render_conflicts(&sim.conflict_labels()))
            }
            ReplCommand::History => print_history(sim, config),
            ReplCommand::Verify => {
                let record = sim.seal_history();
                match record.verify() {
                    Ok(()) => println!(
                        "session {}: {} entries, hash {}",
                        record.id,
                        record.entries.len(),
                        record.content_hash.as_deref().unwrap_or_default()
                    ),
                    Err(e) => println!("{e}"),
                }
            }
            ReplCommand::Reset => {
                sim.reset();
                println!("Seed restored.");
            }
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Quit => break,
        }
    }

    Ok(())
}
