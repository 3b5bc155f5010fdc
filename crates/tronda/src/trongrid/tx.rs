//! TRON transfer transactions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Decimal shift between SUN (the base unit) and TRX.
const TRX_DECIMALS: u32 = 6;

/// JSON parsing errors for [`TxLookup`].
#[derive(Debug, Error)]
pub enum Error {
    /// Missing `txID` field.
    #[error("Missing `txID` field")]
    TxId,

    /// Missing `raw_data` field.
    #[error("Missing `raw_data` field")]
    RawData,

    /// Missing or empty `raw_data.contract` list.
    #[error("Missing or empty `raw_data.contract` list")]
    Contract,

    /// Missing or invalid `raw_data.timestamp` field.
    #[error("Missing or invalid `raw_data.timestamp` field")]
    Time,

    /// Missing `parameter.value.amount` field.
    #[error("Missing `parameter.value.amount` field")]
    Amount,

    /// Missing `parameter.value.owner_address` field.
    #[error("Missing `parameter.value.owner_address` field")]
    OwnerAddress,

    /// Missing `parameter.value.to_address` field.
    #[error("Missing `parameter.value.to_address` field")]
    ToAddress,
}

/// Opaque TRON transaction identifier.
///
/// Deliberately unvalidated: the provider is the authority on which IDs exist, and a lookup for a
/// malformed ID must still reach the provider so that its error text can be surfaced.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TxId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TxId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for TxId {
    type Err = Infallible;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Ok(Self(id.to_string()))
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The provider's answer to a transaction lookup.
///
/// TronGrid reports lookup failures in-band with an `Error` string field instead of an HTTP status
/// code, so a well-formed response body is either a transaction or a rejection.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "JsonTx")]
pub enum TxLookup {
    /// The provider rejected the lookup, e.g. for a malformed or unknown ID.
    Rejected(String),

    /// The provider found the transaction.
    Found(Transaction),
}

/// A transfer of TRX value, validated at the boundary.
///
/// TronGrid nests the transfer under `raw_data.contract[0].parameter.value`; this type flattens
/// the first contract entry into a single record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    /// Transaction ID.
    pub txid: TxId,

    /// Absolute timestamp for the transaction, from `raw_data.timestamp` (epoch milliseconds).
    pub timestamp: DateTime<Utc>,

    /// Transfer amount. Denominated in SUN.
    pub amount: i64,

    /// Sender address, hex encoded.
    pub owner_address: String,

    /// Recipient address, hex encoded.
    pub to_address: String,
}

impl Transaction {
    /// Returns the transfer amount denominated in TRX.
    ///
    /// Exact fixed-point arithmetic, never binary floating point. One TRX is 10^6 SUN.
    pub fn amount_trx(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.amount as i128, TRX_DECIMALS)
    }
}

#[derive(Debug, Deserialize)]
struct JsonTx {
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "txID")]
    txid: Option<TxId>,
    raw_data: Option<JsonRawData>,
}

#[derive(Debug, Deserialize)]
struct JsonRawData {
    timestamp: Option<i64>,
    #[serde(default)]
    contract: Vec<JsonContract>,
}

#[derive(Debug, Deserialize)]
struct JsonContract {
    parameter: JsonParameter,
}

#[derive(Debug, Deserialize)]
struct JsonParameter {
    value: JsonTransferValue,
}

#[derive(Debug, Deserialize)]
struct JsonTransferValue {
    amount: Option<i64>,
    owner_address: Option<String>,
    to_address: Option<String>,
}

impl TryFrom<JsonTx> for TxLookup {
    type Error = Error;

    fn try_from(value: JsonTx) -> Result<Self, Error> {
        if let Some(reason) = value.error {
            return Ok(TxLookup::Rejected(reason));
        }

        let txid = value.txid.ok_or(Error::TxId)?;
        let raw_data = value.raw_data.ok_or(Error::RawData)?;
        let transfer = raw_data
            .contract
            .into_iter()
            .next()
            .ok_or(Error::Contract)?
            .parameter
            .value;

        Ok(TxLookup::Found(Transaction {
            txid,
            timestamp: raw_data
                .timestamp
                .and_then(DateTime::from_timestamp_millis)
                .ok_or(Error::Time)?,
            amount: transfer.amount.ok_or(Error::Amount)?,
            owner_address: transfer.owner_address.ok_or(Error::OwnerAddress)?,
            to_address: transfer.to_address.ok_or(Error::ToAddress)?,
        }))
    }
}
