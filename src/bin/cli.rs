//! TWH Dashboard CLI
//!
//! Command-line access to the dashboard summary:
//! - Print the summary for a revenue period
//! - Render the sales chart page
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use twh_dashboard::chart::{ChartRenderer, CurrencyFormat, HtmlSurface, RenderOutcome};
use twh_dashboard::config::{generate_default_config, Config};
use twh_dashboard::dashboard::{DashboardController, DashboardViewState, LoadOutcome};
use twh_dashboard::summary::{OdooRpcClient, PeriodKey, SummaryProvider};
use twh_dashboard::telemetry;

#[derive(Parser)]
#[command(name = "twh-dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the TWH dashboard summary from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard lookup locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dashboard summary
    Summary {
        /// Revenue period (month, year, all)
        #[arg(short, long, default_value = "month")]
        period: String,
    },

    /// Render the monthly sales chart page
    Render {
        /// Revenue period (month, year, all)
        #[arg(short, long, default_value = "month")]
        period: String,
        /// Output directory (default: configured chart directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
    }

    if cli.verbose {
        config.logging.level = "debug".to_string();
        config.logging.file = None;
        telemetry::init(&config.logging).context("failed to initialize logging")?;
    }

    match cli.command {
        Commands::Summary { period } => {
            let period = PeriodKey::from(period);
            let client = OdooRpcClient::new(config.backend.backend_config())?;

            let summary = client
                .fetch_summary(&period)
                .await
                .with_context(|| format!("failed to load summary from {}", client.endpoint()))?;
            let state = DashboardViewState::from(summary);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
                OutputFormat::Table => print_summary(&state),
            }
        }

        Commands::Render { period, out } => {
            let period = PeriodKey::from(period);
            let dir = out.unwrap_or_else(|| PathBuf::from(&config.chart.output_dir));
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {:?}", dir))?;

            let client = OdooRpcClient::new(config.backend.backend_config())?;
            let surface = HtmlSurface::new(&dir, config.chart.library_url.clone());
            let page = surface.page_path(&config.chart.target);
            let renderer = ChartRenderer::new(Box::new(surface), config.chart.target.clone())
                .with_style(config.chart.style());

            let controller = DashboardController::new(
                Arc::new(client),
                renderer,
                config.dashboard.controller_config(),
            );

            match controller.on_period_change(period).await {
                LoadOutcome::Applied {
                    render: RenderOutcome::Drawn { points },
                } => {
                    let state = controller.state();
                    match cli.format {
                        OutputFormat::Json => println!(
                            "{}",
                            serde_json::json!({
                                "page": page,
                                "points": points,
                                "period": state.revenue_period,
                            })
                        ),
                        OutputFormat::Table => println!(
                            "Rendered {} points ({}) to {:?}",
                            points, state.revenue_period_label, page
                        ),
                    }
                }
                LoadOutcome::Applied {
                    render: RenderOutcome::Skipped { reason },
                } => bail!("chart not rendered: {}", reason),
                LoadOutcome::Failed { error } => bail!("failed to load summary: {}", error),
                LoadOutcome::Superseded => bail!("load superseded"),
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_summary(state: &DashboardViewState) {
    let rows: [(&str, String); 11] = [
        ("Total products", state.total_products.to_string()),
        ("Total customers", state.total_customers.to_string()),
        ("Unpaid invoices", state.unpaid_invoices.to_string()),
        ("Outstanding", state.total_outstanding.clone()),
        ("Overdue", state.overdue_count.to_string()),
        ("Partially paid", state.partial_count.to_string()),
        ("Revenue", state.total_revenue.clone()),
        ("Period", state.revenue_period_label.clone()),
        ("Payments", state.revenue_payment_count.to_string()),
        ("Invoices", state.revenue_invoice_count.to_string()),
        ("Chart points", state.monthly_sales.len().to_string()),
    ];

    for (label, value) in rows {
        println!("{:<16} | {}", label, value);
    }

    if state.monthly_sales.is_empty() {
        return;
    }

    let currency = CurrencyFormat::rupiah();
    println!();
    println!("{:<12} | {:>18}", "Month", "Sales");
    println!("{}", "-".repeat(33));
    for point in &state.monthly_sales {
        println!("{:<12} | {:>18}", point.month, currency.format(point.amount));
    }
    println!("{:<12} | {:>18}", "Total", currency.format(state.sales_total()));
}
