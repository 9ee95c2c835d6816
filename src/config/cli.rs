use crate::config::toml_config::TomlConfig;
use crate::config::PipelineSettings;
use crate::core::reporter::DEFAULT_TOP;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "etl-vouchers")]
#[command(about = "Builds voucher records from orders and barcodes csv files")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate, join and persist vouchers
    Etl(EtlArgs),
    /// Print barcodes that are not linked to any order
    UnusedBarcodes(SourceArgs),
    /// Print the customers with the most vouchers
    TopCustomers(TopCustomersArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Orders csv file (customer_id, order_id)
    #[arg(long)]
    pub orders: String,

    /// Barcodes csv file (barcode, order_id)
    #[arg(long)]
    pub barcodes: String,
}

#[derive(Debug, Clone, Args)]
pub struct EtlArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output directory, defaults to the current directory
    #[arg(long)]
    pub dest: Option<String>,

    /// Settings file, overridden by the flags given here
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Skip writing the output file")]
    pub transform_only: bool,

    #[arg(long, help = "Suppress validator diagnostics")]
    pub silent: bool,

    #[arg(long, help = "Leave out orders without barcodes")]
    pub disallow_useless: bool,

    #[arg(long, help = "Keep barcode rows with an empty barcode cell")]
    pub lenient_barcodes: bool,

    #[arg(long, help = "Print the reports after the run")]
    pub report: bool,

    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct TopCustomersArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,
}

impl EtlArgs {
    /// Defaults, then the settings file, then command line flags.
    pub fn resolve(&self) -> Result<PipelineSettings> {
        let mut settings = PipelineSettings::new(&self.sources.orders, &self.sources.barcodes);

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            file.apply_to(&mut settings);
            tracing::debug!("Loaded settings from {}", path);
        }

        if let Some(dest) = &self.dest {
            settings.dest_path = Some(dest.clone());
        }
        settings.transform_only |= self.transform_only;
        settings.silent |= self.silent;
        settings.report |= self.report;
        if self.disallow_useless {
            settings.allow_useless_vouchers = false;
        }
        if self.lenient_barcodes {
            settings.strict_barcodes = false;
        }
        if let Some(top) = self.top {
            settings.top = top;
        }

        settings.validate()?;
        Ok(settings)
    }
}
