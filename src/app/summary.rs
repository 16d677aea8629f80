use alonzo_lib::Client;
use clap::Parser;
use futures_util::future::try_join;
use tracing::{instrument, Level};

use super::{balance, pots};

#[derive(Debug, Parser, Clone, Copy)]
pub struct Summary;

impl Summary {
    #[instrument(skip(self, client))]
    pub async fn run(&self, client: &Client) -> anyhow::Result<()> {
        for account in client.accounts().await? {
            let balance_fut = client.balance(Some(account.id.as_str()));
            let pots_fut = client.pots(Some(account.id.as_str()));
            let (balance, pots) = try_join(balance_fut, pots_fut).await?;

            tracing::event!(Level::DEBUG, "received account data");

            println!("{}", account);
            println!("  {}", balance::format(&balance)?);
            for line in pots::lines(&pots)? {
                println!("  {}", line);
            }
        }

        Ok(())
    }
}
