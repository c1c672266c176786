// ABOUTME: Client module providing the send pipeline over a pluggable SOAP transport
// ABOUTME: Exports traits, builder, error types and the gateway client implementation

//! IPX Gateway Client Module
//!
//! This module provides the sending half of the SDK:
//!
//! * **Native async traits** - Uses Rust 1.75+ async fn in traits (no async_trait dependency)
//! * **Pluggable transport** - The SOAP stack is a collaborator behind [`SoapTransport`]
//! * **Structured outcomes** - Per-part tagged results, never uncaught faults
//! * **Partial-success reconciliation** - Failed recipients are pruned between parts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipx_sms::client::{ClientBuilder, SendOptions, SmsTransmitter};
//! # use ipx_sms::client::SoapTransport;
//! # use ipx_sms::datatypes::{SubmitRequest, SubmitResponse, TransportFault};
//! # struct WsdlTransport;
//! # impl SoapTransport for WsdlTransport {
//! #     async fn call(
//! #         &mut self,
//! #         _request: &SubmitRequest,
//! #     ) -> Result<SubmitResponse, TransportFault> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! # async fn example() {
//! let mut client = ClientBuilder::quick_client(WsdlTransport, "account", "secret");
//!
//! let recipients = vec!["+358401234567".to_owned()];
//! let report = client
//!     .send_sms("Your code is 1234", &recipients, "Acme", &SendOptions::default())
//!     .await;
//!
//! if report.is_success() {
//!     for result in &report.results {
//!         let receipt = result.receipt().unwrap();
//!         println!("accepted as {}", receipt.message_id);
//!     }
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! * [`SoapTransport`] - one-operation contract the caller's SOAP stack implements
//! * [`SmsTransmitter`] - sending operations, including the UTF-8 gated byte variant
//! * [`IpxClient`] - the orchestrator walking message parts sequentially
//! * [`ClientBuilder`] - credential/transport assembly
//!
//! Retry policy is the caller's: a transport fault or a hard gateway error
//! aborts the remaining parts, and the returned
//! [`SendReport`] says which recipients are still live.

pub mod builder;
pub mod error;
pub mod gateway;
pub mod traits;
pub mod types;

// Re-export the main types for easy access
pub use builder::ClientBuilder;
pub use error::{IpxError, IpxResult};
pub use gateway::IpxClient;
pub use traits::{SmsTransmitter, SoapTransport};
pub use types::{
    Credentials, MessageReceipt, SendOptions, SendReport, SendResult, TransportConfig,
    DEFAULT_TARIFF_CLASS, NO_VALIDITY,
};
