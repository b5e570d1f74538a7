//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading with CLI overrides, and
//! the single pipeline run both the report and chart renderers consume.

use std::time::Duration;

use tracing::{debug, info};

use crate::app::services::aggregator::aggregate;
use crate::app::services::pos_csv_parser::{ParseStats, PosCsvParser};
use crate::app::models::SalesSummary;
use crate::cli::args::PipelineArgs;
use crate::config::Config;
use crate::Result;

/// Outcome of one analysis run, for reporting and exit handling
#[derive(Debug, Clone)]
pub struct RunStats {
    /// The aggregated summary handed to the renderer
    pub summary: SalesSummary,

    /// Row-level parsing statistics
    pub parse_stats: ParseStats,

    /// Wall-clock time of the full run
    pub elapsed: Duration,
}

/// Set up structured logging based on verbosity flags
pub fn setup_logging(args: &PipelineArgs) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pos_analyzer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> CLI args)
pub fn load_configuration(args: &PipelineArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &PipelineArgs) {
    if let Some(delimiter) = args.delimiter {
        config.input.delimiter = delimiter;
    }
    if let Some(locale) = args.locale {
        config.input.locale = locale;
    }
    if let Some(ceiling) = args.revenue_ceiling {
        config.limits.revenue_ceiling = ceiling;
    }

    // Extra exclusions extend the configured vocabulary rather than
    // replacing it
    config
        .rules
        .excluded_labels
        .extend(args.extra_exclusions.iter().cloned());
}

/// Run the full pipeline for one export file
///
/// Locate header, extract and classify rows, aggregate into a summary.
/// This is the single shared implementation behind both renderers.
pub fn run_pipeline(args: &PipelineArgs, top_n: usize) -> Result<RunStats> {
    let start = std::time::Instant::now();

    let config = load_configuration(args)?;
    debug!("Effective configuration: {:?}", config);

    let parser = PosCsvParser::new(config);
    let result = parser.parse_file(&args.input)?;

    let summary = aggregate(&result.items, top_n, &args.input.display().to_string())?;

    Ok(RunStats {
        summary,
        parse_stats: result.stats,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::NumberLocale;
    use std::path::PathBuf;

    fn pipeline_args() -> PipelineArgs {
        PipelineArgs {
            input: PathBuf::from("report.csv"),
            config_file: None,
            delimiter: None,
            locale: None,
            revenue_ceiling: None,
            extra_exclusions: Vec::new(),
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_cli_overrides_applied() {
        let mut config = Config::default();
        let mut args = pipeline_args();
        args.delimiter = Some(',');
        args.locale = Some(NumberLocale::DecimalPoint);
        args.revenue_ceiling = Some(500.0);
        args.extra_exclusions = vec!["pfand".to_string()];

        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.input.delimiter, ',');
        assert_eq!(config.input.locale, NumberLocale::DecimalPoint);
        assert_eq!(config.limits.revenue_ceiling, 500.0);
        assert!(config.rules.excluded_labels.contains(&"pfand".to_string()));
        // Built-in vocabulary still present
        assert!(config.rules.excluded_labels.contains(&"visa".to_string()));
    }

    #[test]
    fn test_overrides_are_no_ops_when_unset() {
        let mut config = Config::default();
        let before = config.rules.excluded_labels.len();
        apply_cli_overrides(&mut config, &pipeline_args());
        assert_eq!(config.input.delimiter, ';');
        assert_eq!(config.rules.excluded_labels.len(), before);
    }
}
