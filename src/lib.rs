//! Fetch TRON transactions by ID and reshape them into human-readable records.
//!
//! The sole entry point is [`fetch::get_transaction_by_id`]: it accepts one transaction ID or
//! several joined by commas, looks every ID up concurrently against a TronGrid API server, and
//! returns formatted records. Protocol-layer concerns live in the [`tronda`] crate.
//!
//! ```no_run
//! use tronview::client::{TronClient, MAINNET_API};
//! use tronview::fetch::{get_transaction_by_id, Options};
//!
//! fn main() -> anyhow::Result<()> {
//!     let client = TronClient::new(MAINNET_API)?;
//!     let options = Options {
//!         include_no_decimal_amount: true,
//!         log: true,
//!     };
//!     let txid = "d0807adb3c5412aa150787b944c96ee898c997debdc27e2f6a643c771edb5933";
//!
//!     let data = get_transaction_by_id(&client, txid, &options)?;
//!
//!     println!("{data:#?}");
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub use tronda;

pub mod client;
pub mod display;
pub mod fetch;
