//! Run the business case projection (and optionally Monte Carlo) from the command line
//!
//! Prints the key metrics and writes the monthly statement as CSV

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use integration_case::{
    assumptions::load_assumptions,
    projection::write_statement_csv,
    Assumptions, CaseReport, MonteCarloConfig, ScenarioRequest, ScenarioRunner,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_case", about = "Integration business case projection")]
struct Args {
    /// JSON assumptions file (omitted fields use the standard scenario)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Run the Monte Carlo simulation
    #[arg(short, long)]
    simulate: bool,

    /// Number of Monte Carlo trials
    #[arg(short, long, default_value_t = 1000)]
    trials: u32,

    /// Base seed for reproducible simulation runs
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials on a single thread
    #[arg(long)]
    serial: bool,

    /// Write the monthly statement to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Calendar date of month 1, adds a Period column to the CSV
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Print the full report as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let assumptions = match &args.params {
        Some(path) => load_assumptions(path)
            .with_context(|| format!("Failed to load assumptions from {}", path.display()))?,
        None => Assumptions::default(),
    };

    let simulation = args.simulate.then(|| MonteCarloConfig {
        trials: args.trials,
        seed: args.seed,
        parallel: !args.serial,
        ..Default::default()
    });

    let request = ScenarioRequest {
        assumptions,
        simulation,
    };
    let report = ScenarioRunner::run(&request).context("Scenario evaluation failed")?;

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_statement_csv(&report.statement, args.start_date, BufWriter::new(file))
            .context("Failed to write statement CSV")?;
        log::info!("Statement written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
        println!("\nTotal time: {:?}", start.elapsed());
    }

    Ok(())
}

fn print_summary(report: &CaseReport) {
    if let Some(simulation) = &report.simulation {
        let stats = &simulation.summary;
        println!("Monte Carlo Simulation Results ({} trials, seed {})", simulation.trials.len(), simulation.seed);
        println!("  Expected Total Revenue: ${:.0}", stats.mean_total_revenue);
        println!("  Expected Total Costs:   ${:.0}", stats.mean_total_cost);
        println!("  Expected NPV:           ${:.0}", stats.mean_npv);
        println!("  NPV Range (95% CI):     ${:.0} - ${:.0}", stats.npv_ci_low, stats.npv_ci_high);
        println!();
    }

    println!("Key Metrics ({} months)", report.statement.len());
    println!("  Total Revenue:               ${:.0}", report.totals.total_revenue);
    println!("  Total Costs:                 ${:.0}", report.totals.total_costs);
    println!("  Total Net Present Value:     ${:.0}", report.totals.total_npv);

    println!("\n{:<6} {:>14} {:>14} {:>14} {:>14}", "Month", "Revenue", "Costs", "NetIncome", "CumNPV");
    for (row, cum_npv) in report.statement.rows.iter().zip(&report.cumulative_npv) {
        if row.month == 1 || row.month % 12 == 0 {
            println!(
                "{:<6} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
                row.month,
                row.total_revenue,
                row.total_costs(),
                row.net_income,
                cum_npv
            );
        }
    }
}
