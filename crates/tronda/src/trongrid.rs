//! An implementation of the TronGrid wallet protocol. The main type is the [`Trongrid`] client.

pub use self::tx::{Error, Transaction, TxId, TxLookup};
use crate::{append_path, Req};
use http::{header, Request, Uri};
use serde_json::json;

mod tx;

/// The main TronGrid client.
#[derive(Clone, Debug)]
pub struct Trongrid {
    req: Req,
}

impl Trongrid {
    /// TronGrid client constructor.
    ///
    /// The API endpoint string must be a valid [`Uri`].
    ///
    /// # Example
    ///
    /// ```
    /// # use tronda::trongrid::Trongrid;
    /// # fn main() -> anyhow::Result<()> {
    /// let trongrid = Trongrid::new("https://api.trongrid.io/")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Panics
    ///
    /// This function asserts that the API server URL has both a scheme and host component. This
    /// disallows the use of relative URIs like `/hello/world` and non-network URIs like `data:` and
    /// `mailto:`.
    pub fn new<U>(api: U) -> Result<Self, http::Error>
    where
        U: TryInto<Uri>,
        <U as TryInto<Uri>>::Error: Into<http::Error>,
    {
        let req = Request::post(api)
            .header(header::CONTENT_TYPE, "application/json")
            .body(String::new())?;
        assert!(req.uri().scheme().is_some());
        assert!(req.uri().host().is_some());

        Ok(Self { req })
    }

    /// Get a [`Transaction`] by [`TxId`].
    ///
    /// Returns a [`Req`] which can be sent by your preferred HTTP client. The request body is the
    /// JSON query `{"value": "<txid>"}` expected by the `wallet/gettransactionbyid` endpoint.
    ///
    /// The response can be deserialized from JSON into a [`TxLookup`].
    pub fn get_tx(&self, txid: &TxId) -> Req {
        let mut req = self.req.clone();
        append_path(&mut req, "wallet/gettransactionbyid".to_string());
        *req.body_mut() = json!({ "value": txid }).to_string();

        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tx() {
        let client = Trongrid::new("https://api.trongrid.io/").unwrap();
        let txid = "d0807adb3c5412aa150787b944c96ee898c997debdc27e2f6a643c771edb5933";
        let req = client.get_tx(&txid.parse().unwrap());
        let uri = req.uri();

        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(uri.scheme_str(), Some("https"));
        assert_eq!(uri.host(), Some("api.trongrid.io"));
        assert_eq!(uri.path(), "/wallet/gettransactionbyid");
        assert!(uri.query().is_none());
        assert_eq!(
            req.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            req.body(),
            r#"{"value":"d0807adb3c5412aa150787b944c96ee898c997debdc27e2f6a643c771edb5933"}"#
        );
    }

    #[test]
    fn test_empty_path() {
        let client = Trongrid::new("http://localhost:9090").unwrap();
        let txid = "5ad16406d77dfcb36c6a21290fc86771d038f08609efc40ddbf4a1bf2e9d80d9";
        let req = client.get_tx(&txid.parse().unwrap());
        let uri = req.uri();

        assert_eq!(uri.scheme_str(), Some("http"));
        assert_eq!(uri.host(), Some("localhost"));
        assert_eq!(uri.port_u16(), Some(9090));
        assert_eq!(uri.path(), "/wallet/gettransactionbyid");
        assert!(uri.query().is_none());
    }

    #[test]
    fn test_unvalidated_txid() {
        // Malformed IDs must still produce a request. The provider is the authority on validity
        // and reports rejections in-band.
        let client = Trongrid::new("https://api.trongrid.io/").unwrap();
        let req = client.get_tx(&"not-a-txid".parse().unwrap());

        assert_eq!(req.body(), r#"{"value":"not-a-txid"}"#);
    }
}
