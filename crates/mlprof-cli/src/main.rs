use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use miette::Context;

use mlprof_analysis::{RuntimeClassifier, UnresolvedSession, UsageAnalysis};
use mlprof_plan::{ComputePlan, dump_plan};
use mlprof_provider::{
    ComputeUnits, LoadConfig, ProviderError, ProviderRegistry, SnapshotCompiler, load_blocking,
    locate_model,
};
use mlprof_report::{
    DEFAULT_CHART_WIDTH, ReportKind, ReportStyle, Section, model_specs, operator_table,
    usage_chart, usage_summary,
};

/// mlprof: show which compute device each model operation runs on
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a .mlpackage or .mlmodelc model
    model_path: PathBuf,

    /// Report to print: usage, chart, operators, all, or specs
    #[arg(short, long, default_value = "chart", value_parser = parse_report)]
    report: ReportKind,

    /// List available functions in the model and exit
    #[arg(short, long)]
    list_functions: bool,

    /// Function to analyze (default: main, predict, forward, then the first)
    #[arg(short, long)]
    function: Option<String>,

    /// Compute plan provider
    #[arg(long, default_value = "snapshot")]
    provider: String,

    /// Seconds to wait for the compute plan (at least 1)
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Compute units: all, cpu-only, cpu-and-gpu, or cpu-and-ne
    #[arg(long, default_value = "all", value_parser = parse_compute_units)]
    compute_units: ComputeUnits,

    /// Bar chart width in characters
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    chart_width: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Dump the loaded compute plan to stderr before reporting
    #[arg(long)]
    emit_plan: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_report(s: &str) -> Result<ReportKind, String> {
    s.parse()
}

fn parse_compute_units(s: &str) -> Result<ComputeUnits, String> {
    s.parse()
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 1. Validate the model path, compiling a package if needed.
    let model = locate_model(&cli.model_path, &SnapshotCompiler).map_err(|e| match e {
        ProviderError::FileNotFound(_) => miette::miette!(
            help = "Please check the file path and make sure the model exists.",
            "{e}"
        ),
        other => miette::miette!("{other}"),
    })?;

    // 2. Load the compute plan.
    let registry = ProviderRegistry::with_builtins();
    let provider = registry.find(&cli.provider).ok_or_else(|| {
        let available = registry.list_names().join(", ");
        miette::miette!("unknown provider '{}' (available: {})", cli.provider, available)
    })?;
    let config = LoadConfig {
        timeout: Duration::from_secs(cli.timeout),
        compute_units: cli.compute_units,
    };
    let plan = load_blocking(provider, &model, &config)
        .map_err(|e| miette::miette!("{e}"))
        .wrap_err_with(|| format!("failed to load {}", model.path().display()))?;

    // 3. Optionally dump the plan to stderr.
    if cli.emit_plan {
        eprintln!("{}", dump_plan(&plan));
    }

    let session = UnresolvedSession::new(plan, cli.function.clone());

    // 4. Function listing bypasses analysis.
    if cli.list_functions {
        println!("\nAvailable functions:");
        println!("{}", session.function_names().join("\n"));
        return Ok(());
    }

    // 5. Analyze once, then print every selected section.
    let style = ReportStyle {
        color: !cli.no_color,
        chart_width: cli.chart_width,
    };
    if cli.report.needs_analysis() {
        let analyzed = session
            .analyze(&RuntimeClassifier)
            .map_err(|e| miette::miette!("{e}"))
            .wrap_err("device usage analysis failed")?;
        log::info!(
            "analyzed function '{}' ({})",
            analyzed.function_name(),
            analyzed.resolution()
        );
        let analysis = analyzed.analysis();
        if analysis.heuristic_ops > 0 {
            log::warn!(
                "{} of {} operations had no device usage; using fallback heuristic",
                analysis.heuristic_ops,
                analysis.operators.len()
            );
        }
        // Specs list the function that was analyzed, not a fresh resolution.
        let function = Some(analyzed.function_name());
        print_sections(
            cli.report,
            analyzed.plan(),
            function,
            Some(analysis),
            &style,
        )
    } else {
        let requested = cli.function.as_deref();
        print_sections(cli.report, session.plan(), requested, None, &style)
    }
}

fn print_sections(
    kind: ReportKind,
    plan: &ComputePlan,
    requested: Option<&str>,
    analysis: Option<&UsageAnalysis>,
    style: &ReportStyle,
) -> miette::Result<()> {
    for &section in kind.sections() {
        let body = render_section(section, plan, requested, analysis, style)?;
        println!("\n{}", section.heading());
        println!("{body}");
    }
    Ok(())
}

fn render_section(
    section: Section,
    plan: &ComputePlan,
    requested: Option<&str>,
    analysis: Option<&UsageAnalysis>,
    style: &ReportStyle,
) -> miette::Result<String> {
    Ok(match (section, analysis) {
        (Section::Specs, _) => model_specs(plan, requested),
        (Section::Usage, Some(analysis)) => usage_summary(&analysis.counts),
        (Section::Chart, Some(analysis)) => usage_chart(&analysis.counts, style),
        (Section::Operators, Some(analysis)) => operator_table(&analysis.operators),
        (section, None) => {
            return Err(miette::miette!(
                "'{}' requires a usage analysis",
                section.heading()
            ));
        }
    })
}
