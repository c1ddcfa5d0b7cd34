use clap::{Args, Parser, Subcommand};
use pvt_app::{
    AppResult, CurveReport, CurveRequest, case_service, compare_methods, curve_to_csv,
    load_reference_table, plot_series_json, run_case, run_curve, write_curve_csv,
};
use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};
use pvt_curve::DEFAULT_SAMPLE_COUNT;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "pvt-cli")]
#[command(about = "PVT Curves CLI - Black-oil Bo/Rs curves from Glaso and Standing correlations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a curve from reservoir parameters given on the command line
    Curve {
        #[command(flatten)]
        reservoir: ReservoirArgs,
        /// Rs correlation (Glaso or Standing)
        #[arg(long, default_value = "Glaso")]
        rs: RsMethod,
        /// Bo correlation (Glaso or Standing)
        #[arg(long, default_value = "Glaso")]
        bo: BoMethod,
        /// Number of sweep points from max pressure down to 0 psia
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        samples: usize,
        #[command(flatten)]
        output: OutputArgs,
        /// Reference CSV with measured Bo to overlay
        #[arg(long)]
        reference: Option<PathBuf>,
        /// Pressure column in the reference CSV
        #[arg(long, default_value = "Pressure")]
        pressure_column: String,
        /// FVF column in the reference CSV
        #[arg(long, default_value = "FVF")]
        fvf_column: String,
    },
    /// Run a case file
    Run {
        /// Path to the case YAML/JSON file
        case_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Validate case file syntax and values
    Validate {
        /// Path to the case YAML/JSON file
        case_path: PathBuf,
    },
    /// Write a starter case file
    Init {
        /// Where to write the case (YAML, or JSON for .json)
        case_path: PathBuf,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Bubble-point values for every Rs/Bo correlation pairing
    Compare {
        #[command(flatten)]
        reservoir: ReservoirArgs,
        /// Number of sweep points
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        samples: usize,
    },
    /// List available correlations
    Methods,
}

#[derive(Args)]
struct ReservoirArgs {
    /// Bubble point pressure in psia
    #[arg(long, default_value_t = 5868.0)]
    pb: f64,
    /// Max sweep pressure in psia
    #[arg(long, default_value_t = 6899.0)]
    pmax: f64,
    /// Stock-tank oil API gravity
    #[arg(long, default_value_t = 42.002)]
    api: f64,
    /// Gas specific gravity (air = 1)
    #[arg(long, default_value_t = 0.709)]
    gas_sg: f64,
    /// Reservoir temperature in °F
    #[arg(long, default_value_t = 292.1)]
    temp: f64,
}

impl ReservoirArgs {
    fn to_inputs(&self) -> AppResult<ReservoirInputs> {
        Ok(ReservoirInputs::new(
            self.pb, self.pmax, self.api, self.gas_sg, self.temp,
        )?)
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Write the curve as CSV to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print plot series as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Curve {
            reservoir,
            rs,
            bo,
            samples,
            output,
            reference,
            pressure_column,
            fvf_column,
        } => cmd_curve(
            &reservoir,
            rs,
            bo,
            samples,
            &output,
            reference.as_deref().map(|path| (path, pressure_column.as_str(), fvf_column.as_str())),
        ),
        Commands::Run { case_path, output } => cmd_run(&case_path, &output),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Init { case_path, force } => cmd_init(&case_path, force),
        Commands::Compare { reservoir, samples } => cmd_compare(&reservoir, samples),
        Commands::Methods => cmd_methods(),
    }
}

fn cmd_curve(
    reservoir: &ReservoirArgs,
    rs: RsMethod,
    bo: BoMethod,
    samples: usize,
    output: &OutputArgs,
    reference: Option<(&Path, &str, &str)>,
) -> AppResult<()> {
    let request = CurveRequest::new(reservoir.to_inputs()?, rs, bo).with_sample_count(samples);
    let mut report = run_curve(&request)?;

    if let Some((path, pressure_column, fvf_column)) = reference {
        let table = load_reference_table(path, pressure_column, fvf_column)?;
        report = report.with_reference(table);
    }

    emit_report(&report, output)
}

fn cmd_run(case_path: &Path, output: &OutputArgs) -> AppResult<()> {
    debug!(path = %case_path.display(), "running case");
    let report = run_case(case_path)?;
    emit_report(&report, output)
}

fn emit_report(report: &CurveReport, output: &OutputArgs) -> AppResult<()> {
    if let Some(path) = &output.output {
        write_curve_csv(path, &report.curve)?;
    }

    if output.json {
        println!("{}", plot_series_json(report)?);
        return Ok(());
    }

    if output.output.is_none() && report.curve.len() <= 50 {
        // Short sweeps are easier to read inline
        print!("{}", curve_to_csv(&report.curve));
    }

    print_summary(report, output.output.as_deref());
    Ok(())
}

fn print_summary(report: &CurveReport, exported: Option<&Path>) {
    if let Some(name) = &report.name {
        println!("Case: {}", name);
    }
    let request = &report.request;
    println!(
        "Correlations: Rs = {}, Bo = {}",
        request.rs_method, request.bo_method
    );
    println!(
        "Sweep: {:.1} -> 0 psia ({} points)",
        request.inputs.pmax,
        report.curve.len()
    );

    let bp = &report.bubble_point;
    println!("Bubble Point Pressure: {:.2} psia", bp.pb);
    println!("FVF at Bubble Point: {:.4} bbl/STB", bp.bo_at_pb);
    println!("Rs at Bubble Point: {:.1} scf/STB", bp.rs_at_pb);
    println!(
        "  Nearest sample: {:.2} psia, FVF {:.4} bbl/STB",
        bp.sample_pressure, bp.sample_bo
    );

    if let Some(table) = &report.reference {
        println!(
            "Reference points: {} ('{}' vs '{}')",
            table.len(),
            table.pressure_column,
            table.fvf_column
        );
    }

    if let Some(path) = exported {
        println!("✓ Exported {} points to {}", report.curve.len(), path.display());
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    let resolved = case_service::resolve_case(&case)?;
    println!("✓ Case is valid");
    println!(
        "  {}: Rs = {}, Bo = {}, {} points",
        resolved.name, resolved.rs_method, resolved.bo_method, resolved.sample_count
    );
    Ok(())
}

fn cmd_init(case_path: &Path, force: bool) -> AppResult<()> {
    let case = case_service::init_case(case_path, force)?;
    println!("✓ Wrote case '{}' to {}", case.name, case_path.display());
    Ok(())
}

fn cmd_compare(reservoir: &ReservoirArgs, samples: usize) -> AppResult<()> {
    let inputs = reservoir.to_inputs()?;
    let summaries = compare_methods(&inputs, samples)?;

    println!(
        "{:<10} {:<10} {:>14} {:>14} {:>14}",
        "Rs", "Bo", "Rs@Pb scf/STB", "Bo@Pb bbl/STB", "Bo@Pmax"
    );
    for s in summaries {
        println!(
            "{:<10} {:<10} {:>14.1} {:>14.4} {:>14.4}",
            s.rs_method.name(),
            s.bo_method.name(),
            s.rs_at_pb,
            s.bo_at_pb,
            s.bo_at_pmax
        );
    }
    Ok(())
}

fn cmd_methods() -> AppResult<()> {
    println!("Rs correlations:");
    for method in RsMethod::ALL {
        println!("  {}", method);
    }
    println!("Bo correlations:");
    for method in BoMethod::ALL {
        println!("  {}", method);
    }
    Ok(())
}
