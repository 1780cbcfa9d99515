use bitdash_demo::application::dashboard::DashboardService;
use bitdash_demo::application::demos::{
    DemoKind, GENERATION_STEP, payment_preview, portfolio_preview,
};
use bitdash_demo::config::DemoConfig;
use bitdash_demo::domain::context::LocaleContext;
use bitdash_demo::domain::ports::Translator;
use bitdash_demo::domain::risk::RiskDisclosure;
use bitdash_demo::domain::trading::MarginLevels;
use bitdash_demo::domain::wizard::{FieldValue, StepStatus};
use bitdash_demo::infrastructure::ids::RandomIdGenerator;
use bitdash_demo::infrastructure::in_memory::InMemoryTradeHistory;
use bitdash_demo::infrastructure::scheduler::TokioScheduler;
use bitdash_demo::infrastructure::translation::{CatalogTranslator, FallbackTranslator};
use bitdash_demo::interfaces::csv::trade_reader::TradeReader;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Translation catalog (flat JSON object of key -> text)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Locale used for text direction
    #[arg(long, global = true, default_value = "en")]
    locale: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through a demo wizard and print the generated link
    Demo {
        /// merchant, investor or stock
        kind: String,

        /// Business or investor name entered on the sign-up step
        #[arg(long)]
        name: String,

        /// Extra form values as key=value
        #[arg(long = "set", value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// Simulated generation latency in milliseconds
        #[arg(long, default_value_t = 1500)]
        delay_ms: u64,

        /// Domain the mock link is issued under
        #[arg(long)]
        host: Option<String>,
    },
    /// Summarise a trade history CSV
    Dashboard {
        /// Input trades CSV file (id,symbol,created_at,profit_loss)
        input: PathBuf,

        #[arg(long)]
        margin_level: Option<Decimal>,

        #[arg(long)]
        margin_call_level: Option<Decimal>,

        #[arg(long)]
        stop_out_level: Option<Decimal>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the risk disclosure for a platform
    Risk {
        /// Platform name, e.g. BitLDN
        #[arg(long)]
        platform: String,

        /// Account type, e.g. retail or merchant
        #[arg(long)]
        account_type: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let translator = load_translator(cli.catalog.as_deref())?;
    let context = LocaleContext::new(cli.locale);

    match cli.command {
        Command::Demo {
            kind,
            name,
            fields,
            delay_ms,
            host,
        } => {
            let mut config = DemoConfig::default().with_delay_ms(delay_ms);
            if let Some(host) = host {
                config = config.with_host(host);
            }
            let kind: DemoKind = kind.parse().into_diagnostic()?;
            run_demo(kind, &name, &fields, &config, translator.as_ref()).await
        }
        Command::Dashboard {
            input,
            margin_level,
            margin_call_level,
            stop_out_level,
            json,
        } => {
            let margin = MarginLevels {
                margin_level,
                margin_call_level,
                stop_out_level,
            };
            run_dashboard(&input, margin, json).await
        }
        Command::Risk {
            platform,
            account_type,
        } => {
            run_risk(&platform, account_type.as_deref(), &context, translator.as_ref());
            Ok(())
        }
    }
}

fn load_translator(catalog: Option<&Path>) -> Result<Box<dyn Translator>> {
    match catalog {
        Some(path) => Ok(Box::new(CatalogTranslator::load(path).into_diagnostic()?)),
        None => Ok(Box::new(FallbackTranslator)),
    }
}

fn parse_field(raw: &str) -> Result<(String, FieldValue)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| miette!("Invalid field '{raw}', expected KEY=VALUE"))?;
    let value = match value.trim().parse::<Decimal>() {
        Ok(number) => FieldValue::Number(number),
        Err(_) => FieldValue::from(value),
    };
    Ok((key.trim().to_string(), value))
}

async fn run_demo(
    kind: DemoKind,
    name: &str,
    fields: &[String],
    config: &DemoConfig,
    translator: &dyn Translator,
) -> Result<()> {
    let wizard = kind
        .wizard(
            config,
            translator,
            Arc::new(TokioScheduler),
            Arc::new(RandomIdGenerator::new()),
        )
        .into_diagnostic()?;

    wizard.set_field(kind.name_field(), name).await;
    for raw in fields {
        let (key, value) = parse_field(raw)?;
        wizard.set_field(key, value).await;
    }

    while wizard.current_step().await < GENERATION_STEP {
        if !wizard.next().await {
            let step = wizard.current_step().await;
            return Err(miette!(
                "Wizard cannot advance past step {}: '{}' is required",
                step + 1,
                kind.name_field()
            ));
        }
    }

    wizard.generate().await;
    wizard.wait_for_generation().await;
    wizard.next().await;

    let session = wizard.snapshot().await;
    for (index, step) in session.definition().steps().iter().enumerate() {
        let marker = match session.step_status(index) {
            StepStatus::Complete => "[x]",
            StepStatus::Active => "[>]",
            StepStatus::Incomplete => "[ ]",
        };
        println!("{marker} {} - {}", step.title, step.description);
    }

    let link = session
        .artifact()
        .ok_or_else(|| miette!("No link was generated"))?;
    println!("Link: {link}");
    let preview = match kind {
        DemoKind::Merchant => payment_preview(&session, translator),
        DemoKind::Investor | DemoKind::Stock => portfolio_preview(&session, translator),
    };
    println!("{preview}");

    Ok(())
}

async fn run_dashboard(input: &Path, margin: MarginLevels, json: bool) -> Result<()> {
    let service = DashboardService::new(Box::new(InMemoryTradeHistory::new())).with_margin(margin);

    let file = File::open(input).into_diagnostic()?;
    let reader = TradeReader::new(file);
    for trade_result in reader.trades() {
        match trade_result {
            Ok(trade) => {
                if let Err(e) = service.record_trade(trade).await {
                    eprintln!("Error recording trade: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading trade: {}", e);
            }
        }
    }

    let summary = service.into_summary().await.into_diagnostic()?;

    if json {
        let out = serde_json::to_string_pretty(&summary).into_diagnostic()?;
        println!("{out}");
        return Ok(());
    }

    let stats = &summary.stats;
    println!("Total trades: {}", stats.total_trades);
    println!("Winning trades: {}", stats.winning_trades);
    println!("Losing trades: {}", stats.losing_trades);
    println!("Total profit: {}", stats.total_profit);
    println!("Total loss: {}", stats.total_loss);
    println!("Net P&L: {}", stats.net_profit_loss);
    println!("Average per trade: {:.2}", stats.average_profit_per_trade);
    println!("Win rate: {:.2}%", stats.win_rate);
    println!("Margin health: {:.2}%", summary.margin_health);
    if summary.margin_call {
        println!("Margin call: yes");
    }
    println!("date,pnl,cumulative_pnl,trades");
    for day in &summary.daily {
        println!("{},{},{},{}", day.date, day.pnl, day.cumulative_pnl, day.trades);
    }

    Ok(())
}

fn run_risk(
    platform: &str,
    account_type: Option<&str>,
    context: &LocaleContext,
    translator: &dyn Translator,
) {
    let mut disclosure = RiskDisclosure::new(Some(platform), account_type, true);
    disclosure.open();

    println!(
        "{} - {} ({}, {})",
        translator.translate("riskDisclosureTitle", "Risk Disclosure", &[]),
        platform,
        context.locale,
        context.direction()
    );
    println!();
    println!("{}", disclosure.introduction(translator));

    let general = disclosure.general_statement(translator);
    println!();
    println!("## {}", general.title);
    println!("{}", general.content);

    if let Some(statement) = disclosure.specific_statement(translator) {
        println!();
        println!("## {}", statement.title);
        println!("{}", statement.content);
    }

    for risk in disclosure.risks(translator) {
        println!();
        println!("## {}", risk.title);
        println!("{}", risk.content);
    }

    let disclaimers = disclosure.disclaimers(translator);
    if !disclaimers.is_empty() {
        println!();
        let heading = translator.translate("importantDisclaimers", "Important Disclaimers", &[]);
        println!("## {heading}");
        for disclaimer in disclaimers {
            println!("- {disclaimer}");
        }
    }
}
