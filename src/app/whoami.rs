use alonzo_lib::Client;
use clap::Parser;

#[derive(Debug, Parser, Clone, Copy)]
pub struct Whoami;

impl Whoami {
    pub async fn run(&self, client: &Client) -> anyhow::Result<()> {
        let identity = client.whoami().await?;

        println!("{}", serde_json::to_string_pretty(&identity)?);
        Ok(())
    }
}
