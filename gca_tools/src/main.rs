use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use gca_tools::{
    checkout::{BillingDetails, CheckoutFlow, CheckoutOutcome, DisplayOptions},
    client::{AwardsServerClient, DEFAULT_SERVER_URL},
    console_widget::ConsoleWidget,
    formatting::{format_nomination, format_nominations, format_order, format_verified_payment},
};
use nomination_engine::NominationForm;
use razorpay_tools::{payment_signature, PaymentConfirmation};
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about = "Command line client for the GCA awards server")]
pub struct Arguments {
    /// The awards server to talk to
    #[arg(short, long, default_value = DEFAULT_SERVER_URL, env = "GCA_SERVER_URL")]
    server: Url,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(name = "health", about = "Check that the server is up")]
    Health,
    #[clap(name = "nominate", about = "Submit a nomination from a JSON file")]
    Nominate {
        /// A JSON file with the nomination form fields
        #[arg(short, long)]
        file: PathBuf,
    },
    #[clap(name = "nominations", about = "List every nomination, newest first")]
    Nominations {
        #[arg(short = 'k', long = "admin-key", env = "GCA_ADMIN_API_KEY", hide_env_values = true)]
        admin_key: String,
    },
    #[clap(name = "order", about = "Create a payment order")]
    Order {
        /// The nomination this payment is for
        #[arg(short, long)]
        nomination: Option<i64>,
    },
    #[clap(name = "verify", about = "Ask the server to verify a completed payment")]
    Verify(ConfirmationParams),
    #[clap(name = "sign", about = "Compute the gateway signature for a payment, for testing")]
    Sign {
        #[arg(short, long)]
        order: String,
        #[arg(short, long)]
        payment: String,
        /// The gateway key secret
        #[arg(short, long, env = "GCA_RAZORPAY_KEY_SECRET", hide_env_values = true)]
        secret: String,
    },
    #[clap(name = "checkout", about = "Run a checkout in the terminal")]
    Checkout(CheckoutParams),
}

#[derive(Debug, Args)]
pub struct ConfirmationParams {
    #[arg(short, long)]
    order: String,
    #[arg(short, long)]
    payment: String,
    #[arg(short = 'g', long)]
    signature: String,
}

#[derive(Debug, Args)]
pub struct CheckoutParams {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    address: String,
    /// The nomination this payment is for
    #[arg(short, long)]
    nomination: Option<i64>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Arguments::parse();
    if let Err(e) = run(args).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Arguments) -> Result<()> {
    let client = AwardsServerClient::new(args.server)?;
    match args.command {
        Command::Health => {
            let response = client.health().await?;
            print!("{response}");
        },
        Command::Nominate { file } => {
            let contents = std::fs::read_to_string(&file)
                .map_err(|e| anyhow!("Could not read {}. {e}", file.display()))?;
            let form: NominationForm = serde_json::from_str(&contents)?;
            let nomination = client.submit_nomination(&form).await?;
            println!("{}", format_nomination(&nomination)?);
        },
        Command::Nominations { admin_key } => {
            let nominations = client.list_nominations(&admin_key).await?;
            println!("{}", format_nominations(&nominations));
        },
        Command::Order { nomination } => {
            let order = client.create_order(nomination).await?;
            println!("{}", format_order(&order)?);
        },
        Command::Verify(params) => {
            let confirmation = PaymentConfirmation {
                razorpay_order_id: params.order,
                razorpay_payment_id: params.payment,
                razorpay_signature: params.signature,
            };
            let verified = client.verify_payment(&confirmation).await?;
            println!("{}", format_verified_payment(&verified));
        },
        Command::Sign { order, payment, secret } => {
            println!("{}", payment_signature(&secret, &order, &payment));
        },
        Command::Checkout(params) => checkout(client, params).await?,
    }
    Ok(())
}

async fn checkout(client: AwardsServerClient, params: CheckoutParams) -> Result<()> {
    let billing = BillingDetails::new(&params.name, &params.email, &params.phone, &params.address);
    let mut flow = CheckoutFlow::new(client, ConsoleWidget::stdin(), DisplayOptions::from_env_or_default());
    if let Some(id) = params.nomination {
        flow = flow.for_nomination(id);
    }
    match flow.submit(&billing).await? {
        CheckoutOutcome::Paid { payment_id, redirect } => {
            println!("Payment {payment_id} succeeded.");
            println!("Continue at {}", redirect.follow().await);
        },
        CheckoutOutcome::Dismissed => println!("Checkout cancelled"),
        CheckoutOutcome::Failed { message } => return Err(anyhow!(message)),
    }
    Ok(())
}
