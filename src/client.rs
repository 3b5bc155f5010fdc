use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use std::{env, time::Instant};
use thiserror::Error;
use tracing::{info, trace};
use tronda::http;
use tronda::trongrid::{Trongrid, TxId, TxLookup};
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;

// We are choosing 32 threads by default, but really we can use as many as the TronGrid server can
// handle.
const DEFAULT_THREADPOOL_SIZE: usize = 32;

/// The public TronGrid mainnet API server.
pub const MAINNET_API: &str = "https://api.trongrid.io/";

pub type TxResult = Result<TxLookup, ClientError>;

/// The public interface for the client API.
///
/// Exists as a trait so that unit tests can mock the client responses.
pub trait ClientApi {
    /// Get a list of transaction lookups by [`TxId`].
    ///
    /// The returned `Vec` is positionally aligned with `txids`: the result at index `i` answers
    /// the ID at index `i`, regardless of which network response arrived first.
    fn get_transactions(&self, txids: &[TxId]) -> Vec<TxResult>;
}

#[derive(Debug, Error)]
pub enum TronClientError {
    #[error("Invalid TronGrid URI")]
    TrongridUri(#[from] http::Error),

    #[error("Error parsing RAYON_NUM_THREADS")]
    RayonThreadPoolSize(#[source] std::num::ParseIntError),

    #[error("Rayon thread pool error")]
    RayonThreadPoolInit(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Clone, Debug, Error)]
pub enum ClientError {
    #[error("Error requesting TxId `{0}`: {1}")]
    Tx(TxId, String),
}

/// A simple, concurrent TronGrid client.
///
/// Every lookup is an independent HTTP request; there is no shared state between them, no
/// retries, and no caching.
pub struct TronClient {
    agent: Agent,
    trongrid: Trongrid,
    pool: ThreadPool,
}

impl TronClient {
    /// Create a new TronGrid client with the provided API server URI.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), tronview::client::TronClientError> {
    /// # use tronview::client::{TronClient, MAINNET_API};
    /// let client = TronClient::new(MAINNET_API)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_server: &str) -> Result<Self, TronClientError> {
        let (num_threads, pool) = create_thread_pool()?;

        let agent = Agent::from(
            Agent::config_builder()
                .max_idle_connections_per_host(num_threads)
                .tls_config(
                    TlsConfig::builder()
                        .provider(TlsProvider::NativeTls)
                        .build(),
                )
                .build(),
        );
        let trongrid = Trongrid::new(api_server)?;

        Ok(Self {
            agent,
            trongrid,
            pool,
        })
    }
}

impl ClientApi for TronClient {
    fn get_transactions(&self, txids: &[TxId]) -> Vec<TxResult> {
        self.pool.in_place_scope(|_scope| {
            txids
                .par_iter()
                .map(|txid| fetch_tx(&self.agent, &self.trongrid, txid))
                .collect()
        })
    }
}

fn create_thread_pool() -> Result<(usize, ThreadPool), TronClientError> {
    // Configure the Rayon thread pool for high I/O concurrency.
    let num_threads = env::var("RAYON_NUM_THREADS")
        .unwrap_or_else(|_| DEFAULT_THREADPOOL_SIZE.to_string())
        .parse()
        .map_err(TronClientError::RayonThreadPoolSize)?;

    let pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;

    Ok((num_threads, pool))
}

/// Run a single transaction lookup against the provider.
///
/// Transport and JSON parsing failures are stringified into [`ClientError::Tx`]; a provider-side
/// rejection is a successful lookup ([`TxLookup::Rejected`]) and is judged by the caller.
fn fetch_tx(agent: &Agent, trongrid: &Trongrid, txid: &TxId) -> TxResult {
    let thread_id = std::thread::current().id();

    info!("Fetching TxId `{txid}` on {thread_id:?}");

    let start = Instant::now();
    let req = trongrid.get_tx(txid);
    let mut resp = agent
        .run(req)
        .map_err(|err| ClientError::Tx(txid.clone(), err.to_string()))?;
    let lookup: TxLookup = resp
        .body_mut()
        .read_json()
        .map_err(|err| ClientError::Tx(txid.clone(), err.to_string()))?;
    let dur = start.elapsed();

    info!("TxId `{txid}` received in {dur:?}");
    trace!("{lookup:#?}");

    Ok(lookup)
}
