use std::env;
use tronda::trongrid::{Trongrid, TxId, TxLookup};
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;

fn main() -> anyhow::Result<()> {
    let agent = Agent::from(
        Agent::config_builder()
            .tls_config(
                TlsConfig::builder()
                    .provider(TlsProvider::NativeTls)
                    .build(),
            )
            .build(),
    );
    let api_server =
        env::var("TRONGRID_URL").unwrap_or_else(|_| "https://api.trongrid.io/".to_string());
    let trongrid = Trongrid::new(api_server)?;

    let txid: TxId = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Missing TxId"))?
        .parse()?;

    let mut resp = agent.run(trongrid.get_tx(&txid))?;

    let tx: TxLookup = resp.body_mut().read_json()?;

    println!("{tx:#?}");

    Ok(())
}
