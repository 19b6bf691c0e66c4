use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use lawncare::core::*;
use miette::{IntoDiagnostic, Result, miette};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Customer name
    #[arg(long, default_value = "")]
    name: String,

    /// Street address
    #[arg(long, default_value = "")]
    street: String,

    /// City
    #[arg(long, default_value = "")]
    city: String,

    /// Phone number, 999-999-9999
    #[arg(long, default_value = "")]
    phone: String,

    /// Total square feet of the lot (whole number)
    #[arg(long, default_value = "")]
    sq_feet: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON rate table to use instead of the standard rates
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Issue date printed on the invoice (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

/// Command-line host: the form comes from arguments, the outcome is kept
/// for `main` to print.
struct CliHost {
    form: InvoiceForm,
    issue_date: Option<NaiveDate>,
    alert: Option<String>,
    invoice: Option<Invoice>,
}

impl InvoiceHost for CliHost {
    fn read_form(&self) -> InvoiceForm {
        self.form.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn show_invoice(&mut self, invoice: &Invoice) {
        let invoice = match self.issue_date {
            Some(date) => invoice.clone().with_issue_date(date),
            None => invoice.clone(),
        };
        self.invoice = Some(invoice);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so stdout carries only the invoice.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let rates = match &cli.rates {
        Some(path) => {
            let json = fs::read_to_string(path).into_diagnostic()?;
            let rates = lawncare::json::rates_from_json(&json).into_diagnostic()?;
            info!(path = %path.display(), "loaded rate table");
            rates
        }
        None => RateTable::STANDARD,
    };

    let mut host = CliHost {
        form: InvoiceForm::new(cli.name, cli.street, cli.city, cli.phone, cli.sq_feet),
        issue_date: cli.date,
        alert: None,
        invoice: None,
    };
    generate_invoice_with(&mut host, &rates);

    if let Some(message) = host.alert {
        eprintln!("{message}");
        return Ok(ExitCode::FAILURE);
    }
    let invoice = host
        .invoice
        .ok_or_else(|| miette!("no invoice was produced"))?;

    let mut rendered = match cli.format {
        Format::Text => lawncare::render::to_text(&invoice),
        Format::Html => lawncare::html::to_html(&invoice).into_diagnostic()?,
        Format::Json => lawncare::json::to_json(&invoice).into_diagnostic()?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes()).into_diagnostic()?;
    info!(
        customer = %invoice.customer.name,
        total = %format_money(invoice.charges.total),
        "invoice written"
    );

    Ok(ExitCode::SUCCESS)
}
