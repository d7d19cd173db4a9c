//! A stand-in for the hosted widget that runs in a terminal.
//!
//! It prints the options the real widget would be opened with and waits for the payer to paste the confirmation
//! JSON the gateway produced. An empty line closes the widget without paying.
use razorpay_tools::PaymentConfirmation;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::checkout::{HostedWidget, WidgetOptions, WidgetOutcome};

pub struct ConsoleWidget<R> {
    input: R,
}

impl ConsoleWidget<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self { input: BufReader::new(tokio::io::stdin()) }
    }
}

impl<R: AsyncBufRead + Unpin> ConsoleWidget<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

/// Interprets one line of payer input.
pub fn parse_response(line: &str) -> WidgetOutcome {
    let line = line.trim();
    if line.is_empty() {
        return WidgetOutcome::Dismissed;
    }
    match serde_json::from_str::<PaymentConfirmation>(line) {
        Ok(confirmation) => WidgetOutcome::Completed(confirmation),
        Err(e) => WidgetOutcome::Failed(format!("Unreadable payment confirmation. {e}")),
    }
}

impl<R: AsyncBufRead + Unpin> HostedWidget for ConsoleWidget<R> {
    async fn open(&mut self, options: WidgetOptions) -> WidgetOutcome {
        match serde_json::to_string_pretty(&options) {
            Ok(json) => println!("Checkout options:\n{json}"),
            Err(e) => return WidgetOutcome::Failed(format!("Could not display checkout options. {e}")),
        }
        println!("Paste the payment confirmation JSON, or press enter to cancel:");
        let mut line = String::new();
        match self.input.read_line(&mut line).await {
            Ok(_) => parse_response(&line),
            Err(e) => WidgetOutcome::Failed(format!("Could not read the payment confirmation. {e}")),
        }
    }
}
