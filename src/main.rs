use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use storecheckout::application::controller::CheckoutController;
use storecheckout::config::CheckoutConfig;
use storecheckout::domain::payment_method::PaymentMethod;
use storecheckout::domain::ports::{CartRepository, SharedCartRepository};
use storecheckout::domain::state::CheckoutState;
use storecheckout::error::CheckoutError;
use storecheckout::infrastructure::in_memory::InMemoryCartRepository;
use storecheckout::interfaces::csv::cart_reader::CartReader;
use storecheckout::interfaces::report::{CheckoutReport, ReportWriter};
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cart CSV file (product_id, name, price, discount, quantity)
    #[arg(required_unless_present = "list_methods")]
    input: Option<PathBuf>,

    /// Payment method id to check out with (apple, master, visa)
    #[arg(long)]
    payment_method: Option<String>,

    /// Simulated payment processing delay in milliseconds
    #[arg(long, default_value_t = 5000)]
    delay_ms: u64,

    /// Print the available payment methods and exit
    #[arg(long)]
    list_methods: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    if cli.list_methods {
        writer.write_report(PaymentMethod::all()).into_diagnostic()?;
        return Ok(());
    }

    let Some(input) = cli.input else {
        miette::bail!("a cart CSV file is required");
    };

    // Load the cart snapshot
    let repo = InMemoryCartRepository::new();
    let file = File::open(input).into_diagnostic()?;
    for item in CartReader::new(file).items() {
        match item {
            Ok(item) => repo.add_item(item).await.into_diagnostic()?,
            Err(e) => tracing::warn!(error = %e, "skipping cart row"),
        }
    }

    let cart: SharedCartRepository = Arc::new(repo.clone());
    let config = CheckoutConfig::with_delay(Duration::from_millis(cli.delay_ms));
    let mut controller = CheckoutController::new(cart, config);

    let items = repo.cart_items().await.into_diagnostic()?;
    controller.recompute_subtotal(&items);
    if let Some(id) = cli.payment_method {
        controller.select_payment_method(id);
    }

    let (tx, rx) = oneshot::channel();
    let mut failure = None;
    controller.attempt_checkout(
        move || {
            let _ = tx.send(());
        },
        |token| failure = Some(token),
    );

    if failure.is_none() {
        rx.await.into_diagnostic()?;
    }

    let report = CheckoutReport {
        payment_method: controller.selected_payment_method_id(),
        payment_label: controller.selected_payment_method().map(|m| m.title),
        subtotal: controller.subtotal().to_string(),
        state: controller.state(),
        message: failure,
        remaining_items: repo.cart_items().await.into_diagnostic()?.len(),
    };
    writer.write_report(&report).into_diagnostic()?;

    match controller.state() {
        CheckoutState::Error(reason) => Err::<(), _>(CheckoutError::from(reason)).into_diagnostic(),
        _ => Ok(()),
    }
}
