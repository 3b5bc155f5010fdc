//! The transaction fetch pipeline: normalize input, fan out lookups, reshape results.

use crate::client::{ClientApi, ClientError};
use crate::display::{render_table, FormattedTransaction};
use error_iter::ErrorIter as _;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use tronda::trongrid::{TxId, TxLookup};

/// Options for [`get_transaction_by_id`]. All options default to off.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// Also report the amount scaled to TRX (raw amount divided by 10^6), as an exact decimal
    /// string.
    pub include_no_decimal_amount: bool,

    /// Print the result set to the console as a table before returning, and print any error.
    pub log: bool,
}

/// The shape of a successful fetch depends on input cardinality.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TxData {
    /// Exactly one ID was requested: a bare record, not a one-element sequence.
    Single(FormattedTransaction),

    /// Two or more IDs were requested: one slot per ID, in input order. A slot is `None` when the
    /// provider rejected that ID; the rest of the batch is unaffected.
    Batch(Vec<Option<FormattedTransaction>>),
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider rejected a sole-ID lookup. The message is the provider's error text,
    /// verbatim.
    #[error("{0}")]
    Provider(String),

    /// The input contained no transaction IDs after trimming.
    #[error("No transaction IDs in input")]
    NoTransactionIds,

    /// A lookup failed in transport or parsing. This fails the whole call, batch or not.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Get a transaction or list of transactions by transaction ID.
///
/// `transaction_id` holds one ID, or several joined by commas. Every ID is fetched from the
/// provider concurrently; the call returns once all lookups settle.
///
/// A sole ID yields [`TxData::Single`]; two or more yield [`TxData::Batch`] in input order, with
/// provider-rejected IDs as `None` slots. A provider rejection of a sole ID, or a transport or
/// parse failure anywhere, fails the whole call.
pub fn get_transaction_by_id<C>(
    client: &C,
    transaction_id: &str,
    options: &Options,
) -> Result<TxData, FetchError>
where
    C: ClientApi,
{
    let result = fetch(client, transaction_id, options);

    if options.log {
        if let Err(err) = &result {
            eprintln!("Error: {err}");
            for source in err.sources().skip(1) {
                eprintln!("  Caused by: {source}");
            }
        }
    }

    result
}

fn fetch<C>(client: &C, transaction_id: &str, options: &Options) -> Result<TxData, FetchError>
where
    C: ClientApi,
{
    // Normalize the input into a working set of IDs: split on commas, trim, drop empty pieces.
    // Order is preserved and duplicates are kept.
    let txids: Vec<TxId> = transaction_id
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(TxId::from)
        .collect();

    if txids.is_empty() {
        return Err(FetchError::NoTransactionIds);
    }

    debug!("Fetching {} transaction(s)", txids.len());

    let mut lookups = Vec::with_capacity(txids.len());
    for result in client.get_transactions(&txids) {
        lookups.push(result?);
    }

    if lookups.len() == 1 {
        // A sole-ID lookup fails the whole call on a provider rejection.
        let row = match lookups.remove(0) {
            TxLookup::Rejected(reason) => return Err(FetchError::Provider(reason)),
            TxLookup::Found(tx) => FormattedTransaction::new(&tx, options.include_no_decimal_amount),
        };

        if options.log {
            println!(
                "{}",
                render_table([Some(&row)], options.include_no_decimal_amount)
            );
        }

        return Ok(TxData::Single(row));
    }

    // Within a batch, provider rejections become empty slots and the batch continues.
    let rows: Vec<Option<FormattedTransaction>> = lookups
        .into_iter()
        .zip(&txids)
        .map(|(lookup, txid)| match lookup {
            TxLookup::Rejected(reason) => {
                warn!("Provider rejected TxId `{txid}`: {reason}");
                None
            }
            TxLookup::Found(tx) => Some(FormattedTransaction::new(
                &tx,
                options.include_no_decimal_amount,
            )),
        })
        .collect();

    if options.log {
        println!(
            "{}",
            render_table(
                rows.iter().map(Option::as_ref),
                options.include_no_decimal_amount
            )
        );
    }

    Ok(TxData::Batch(rows))
}
