use tronda::trongrid::{Trongrid, TxLookup};
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
    let trongrid = Trongrid::new("https://api.trongrid.io/")?;
    let txid = "d0807adb3c5412aa150787b944c96ee898c997debdc27e2f6a643c771edb5933";

    let mut resp = agent.run(trongrid.get_tx(&txid.parse()?))?;

    let tx: TxLookup = resp.body_mut().read_json()?;

    println!("{tx:#?}");

    Ok(())
}
