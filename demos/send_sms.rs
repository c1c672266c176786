// ABOUTME: Example application demonstrating the send pipeline with a dry-run transport
// ABOUTME: Shows segmentation, UDH construction and result reporting without a live gateway

pub(crate) use argh::FromArgs;
use ipx_sms::{
    ClientBuilder, SendOptions, SmsTransmitter, SoapTransport, SubmitRequest, SubmitResponse,
    TransportConfig, TransportFault,
};
use std::error::Error;

/// Example application sending a message through a dry-run transport
#[derive(FromArgs)]
struct CliArgs {
    /// the gateway endpoint URL (default: a placeholder)
    #[argh(option)]
    endpoint: Option<String>,

    /// the gateway account username
    #[argh(option)]
    username: Option<String>,

    /// the gateway account password
    #[argh(option)]
    password: Option<String>,

    /// the message to send
    #[argh(option, short = 'm')]
    message: String,

    /// recipient number, repeatable for multiple recipients
    #[argh(option, short = 't')]
    to: Vec<String>,

    /// the originating address shown to recipients
    #[argh(option, short = 'f')]
    from: String,

    /// send as a class-0 flash message
    #[argh(switch)]
    flash: bool,

    /// request delivery reports
    #[argh(switch, short = 'r')]
    delivery_report: bool,
}

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Transport that prints every request and accepts it, standing in for a
/// real SOAP stack. A real implementation would feed the config into its
/// SOAP client construction.
struct DryRunTransport {
    config: TransportConfig,
    calls: u32,
}

impl SoapTransport for DryRunTransport {
    async fn call(&mut self, request: &SubmitRequest) -> Result<SubmitResponse, TransportFault> {
        self.calls += 1;
        println!(
            "-> [{}] to {} dcs {} udh {:?}",
            self.config.endpoint, request.destination_address, request.dcs, request.user_data_header
        );
        println!("   {:?}", request.user_data);
        Ok(SubmitResponse {
            message_id: format!("dry-run-{}", self.calls),
            response_code: 0,
            response_message: "OK".to_owned(),
            ..Default::default()
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let username = cli_args.username.unwrap_or_default();
    let password = cli_args.password.unwrap_or_default();

    let mut options = SendOptions::new();
    if cli_args.flash {
        options = options.flash();
    }
    if cli_args.delivery_report {
        options = options.with_delivery_report();
    }

    let endpoint = cli_args
        .endpoint
        .unwrap_or_else(|| "https://sms.gateway.example/soap".to_owned());
    let config = TransportConfig::new(endpoint).with_connect_attempts(2);
    let transport = DryRunTransport { config, calls: 0 };

    let mut client = ClientBuilder::quick_client(transport, username, password);

    let report = client
        .send_sms(&cli_args.message, &cli_args.to, &cli_args.from, &options)
        .await;

    for result in &report.results {
        match result.receipt() {
            Some(receipt) => println!(
                "accepted as {} ({})",
                receipt.message_id,
                receipt.response_description()
            ),
            None => eprintln!("failed: {}", result.error().unwrap()),
        }
    }
    println!("live recipients: {:?}", report.recipients);

    match report.first_error() {
        Some(error) => Err(Box::<dyn Error>::from(error.to_string())),
        None => Ok(()),
    }
}
