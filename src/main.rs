use anyhow::Context;
use clap::Parser;
use etl_vouchers::config::cli::{Command, EtlArgs, SourceArgs};
use etl_vouchers::core::statistic::print_report;
use etl_vouchers::utils::logger;
use etl_vouchers::{CliConfig, EtlEngine, LocalStorage, VoucherError, VoucherPipeline, VoucherStatistic};

fn run_etl(args: &EtlArgs) -> anyhow::Result<()> {
    let settings = args.resolve()?;
    tracing::debug!("Pipeline settings: {:?}", settings);

    let report = settings.report;
    let top = settings.top;
    let engine = EtlEngine::new(VoucherPipeline::new(LocalStorage::new(), settings));
    let response = engine.run()?;

    match &response.output_filepath {
        Some(path) => println!("Output saved to {}", path),
        None => println!("Built {} vouchers, no output file written", response.vouchers.len()),
    }

    if report {
        print_report(&response, top);
    }
    Ok(())
}

fn statistic(sources: &SourceArgs) -> VoucherStatistic<LocalStorage> {
    VoucherStatistic::new(LocalStorage::new(), &sources.orders, &sources.barcodes)
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting etl-vouchers");

    let outcome = match &config.command {
        Command::Etl(args) => run_etl(args),
        Command::UnusedBarcodes(sources) => statistic(sources)
            .unused_barcodes()
            .map(|_| ())
            .context("unused barcodes report"),
        Command::TopCustomers(args) => statistic(&args.sources)
            .top_customers(args.top)
            .map(|_| ())
            .context("top customers report"),
    };

    if let Err(e) = outcome {
        println!("Failed with: {:#}", e);

        match e.downcast_ref::<VoucherError>() {
            Some(err) => {
                tracing::error!("{:#} (Category: {:?})", e, err.category());
                eprintln!("{}", err.user_friendly_message());
                eprintln!("Suggestion: {}", err.recovery_suggestion());
            }
            None => tracing::error!("{:#}", e),
        }
        std::process::exit(1);
    }
}
