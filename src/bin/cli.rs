use bloomset::{
    common::bits2hr, expected_false_positive_rate, optimal_bit_vector_size,
    optimal_num_hashes,
    stats::{FprReport, run_fpr_experiment},
};
use clap::{Parser, Subcommand};
use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dimensions of a filter for the given capacity and rate
    Size {
        /// Expected number of distinct elements
        #[arg(short, long, default_value = "10000")]
        capacity: usize,

        /// False positive rate (between 0 and 1)
        #[arg(short, long, default_value = "0.01")]
        fpr: f64,
    },

    /// Measure false positive rate and latency for a set of capacities
    Bench {
        /// Capacities to test; each run uses as many cycles as its capacity
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_values_t = [10usize, 100, 1_000, 10_000, 1_000_000]
        )]
        capacities: Vec<usize>,

        /// False positive rate (between 0 and 1)
        #[arg(short, long, default_value = "0.01")]
        fpr: f64,

        /// Hash seed
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_size(capacity: usize, fpr: f64) -> Result<(), Box<dyn std::error::Error>> {
    let m = optimal_bit_vector_size(capacity, fpr)?;
    let k = optimal_num_hashes(m, capacity)?;

    println!("Capacity:            {capacity}");
    println!("Target FPR:          {fpr}");
    println!("Bit vector size (m): {m}");
    println!("Hash functions (k):  {k}");
    println!("Memory:              {}", bits2hr(m));
    println!(
        "Expected FPR at capacity: {:.6}",
        expected_false_positive_rate(m, k, capacity)
    );
    Ok(())
}

fn format_latency(report: Option<bloomset::stats::LatencySummary>) -> String {
    match report {
        Some(s) => format!("{:.0} ns (var {:.0})", s.median_ns, s.variance_ns),
        None => "-".to_string(),
    }
}

fn render_reports(reports: &[FprReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Capacity").set_alignment(CellAlignment::Center),
            Cell::new("m / k").set_alignment(CellAlignment::Center),
            Cell::new("Target FPR").set_alignment(CellAlignment::Center),
            Cell::new("Observed FPR").set_alignment(CellAlignment::Center),
            Cell::new("Expected FPR").set_alignment(CellAlignment::Center),
            Cell::new("Insert median").set_alignment(CellAlignment::Center),
            Cell::new("Query median").set_alignment(CellAlignment::Center),
            Cell::new("Elapsed").set_alignment(CellAlignment::Center),
        ]);

    for r in reports {
        table.add_row(vec![
            Cell::new(r.capacity).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} / {}", r.bit_vector_size, r.num_hashes)),
            Cell::new(format!("{:.4}", r.target_fpr)),
            Cell::new(format!(
                "{:.4} ({}/{})",
                r.observed_fpr, r.false_positives, r.absent_probes
            )),
            Cell::new(format!("{:.4}", r.expected_fpr)),
            Cell::new(format_latency(r.insert_latency)),
            Cell::new(format_latency(r.query_latency)),
            Cell::new(format!("{:?}", r.elapsed)),
        ]);
    }
    table
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Size { capacity, fpr } => print_size(capacity, fpr)?,
        Commands::Bench {
            capacities,
            fpr,
            seed,
        } => {
            let mut reports = Vec::with_capacity(capacities.len());
            for capacity in capacities {
                info!(capacity, fpr, "running false positive experiment");
                reports.push(run_fpr_experiment(capacity, fpr, capacity, seed)?);
            }
            println!("{}", render_reports(&reports));
        }
    }
    Ok(())
}
