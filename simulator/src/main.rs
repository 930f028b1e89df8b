use anyhow::Context;
use clap::Parser;
use generator::profile::{build_survey_from_config, GeneratorConfig};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::VisualizationModel;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use swathcore::Side;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

fn parse_side(value: &str) -> Result<Side, String> {
    value.parse::<Side>().map_err(|err| err.to_string())
}

#[derive(Parser)]
#[command(author, version, about = "Survey driver for swath decimation")]
struct Args {
    /// Decimate a synthetic survey once and write a JSON report
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Load the synthetic survey description from YAML
    #[arg(long)]
    survey: Option<PathBuf>,
    #[arg(long, default_value_t = 10.0)]
    interval: f64,
    /// Side whose narrowest swath bounds coverage (port or starboard)
    #[arg(long, default_value = "starboard", value_parser = parse_side)]
    output_side: Side,
    #[arg(long, default_value_t = 0.0)]
    min_swath: f64,
    #[arg(long, default_value = "tools/data/swath_report.json")]
    report: PathBuf,
    /// Keep the HTTP bridge alive for incoming survey lines
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow.as_ref() {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.interval, args.output_side, args.min_swath)
    };
    let survey_config = if let Some(path) = args.survey.as_ref() {
        GeneratorConfig::load(path)?
    } else {
        GeneratorConfig::default()
    };

    let runner = Runner::new(workflow_config);
    let gui_bridge = args
        .serve
        .then(|| GuiBridge::new(Arc::new(runner.clone())));

    if args.offline {
        let survey = build_survey_from_config(&survey_config)?;
        let result = runner.execute(&survey).context("decimating survey")?;

        println!(
            "Offline run -> lines {}, valid {}, kept {} of {} records",
            result.lines.len(),
            result.valid_lines(),
            result.retained_count(),
            result.input_count()
        );

        if let Some(bridge) = gui_bridge.as_ref() {
            bridge.publish(&VisualizationModel::from_result(
                &result,
                survey_config.scenario.clone(),
            ));
            bridge.publish_status("Offline survey results ready.");
        }

        if let Some(parent) = args.report.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let report = serde_json::to_string_pretty(&result).context("serializing report")?;
        fs::write(&args.report, report)
            .with_context(|| format!("writing report {}", args.report.display()))?;
    }
    if let Some(bridge) = gui_bridge.as_ref() {
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
