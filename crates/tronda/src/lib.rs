//! A [TronGrid] client, [sans I/O]. (Bring your own sync/async HTTP client!)
//!
//! This library handles the protocol-layer aspects of the TronGrid wallet API, including ser-de
//! and request-response abstractions.
//!
//! [TronGrid]: https://developers.tron.network/reference/gettransactionbyid
//! [sans I/O]: https://sans-io.readthedocs.io/how-to-sans-io.html
//!
//! # Async example with `reqwest`
//!
//! ```no_run
//! use tronda::trongrid::{Trongrid, TxLookup};
//! use reqwest::Client;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::new();
//!     let trongrid = Trongrid::new("https://api.trongrid.io/")?;
//!     let txid = "d0807adb3c5412aa150787b944c96ee898c997debdc27e2f6a643c771edb5933";
//!
//!     let resp = client.execute(trongrid.get_tx(&txid.parse()?).try_into()?).await?;
//!
//!     let tx: TxLookup = resp.json().await?;
//!
//!     println!("{tx:#?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sync example with `ureq`
//!
//! ```no_run
//! use tronda::trongrid::{Trongrid, TxLookup};
//!
//! fn main() -> anyhow::Result<()> {
//!     let agent = ureq::agent();
//!     let trongrid = Trongrid::new("https://api.trongrid.io/")?;
//!     let txid = "d0807adb3c5412aa150787b944c96ee898c997debdc27e2f6a643c771edb5933";
//!
//!     let mut resp = agent.run(trongrid.get_tx(&txid.parse()?))?;
//!
//!     let tx: TxLookup = resp.body_mut().read_json()?;
//!
//!     println!("{tx:#?}");
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub use chrono;
pub use http;
pub use rust_decimal;

pub mod trongrid;

/// A TronGrid lookup is an HTTP POST whose body carries the query as JSON.
pub type Req = http::Request<String>;

/// Append a path to the request.
pub(crate) fn append_path(req: &mut Req, path: String) {
    // The `http` crate has really bad ergonomics for updating paths.
    // SEE: https://github.com/hyperium/http/issues/594
    let req_uri = req.uri_mut();
    let mut uri_parts = req_uri.clone().into_parts();
    let root = req_uri.path();
    uri_parts.path_and_query = Some(format!("{root}{path}").parse().unwrap());
    *req_uri = http::Uri::from_parts(uri_parts).unwrap();
}
