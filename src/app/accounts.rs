use alonzo_lib::Client;
use clap::Parser;

#[derive(Debug, Parser, Clone, Copy)]
pub struct Accounts;

impl Accounts {
    pub async fn run(&self, client: &Client) -> anyhow::Result<()> {
        for account in client.accounts().await? {
            let status = if account.is_active() { "open" } else { "closed" };

            println!(
                "{} {} ({}, {}, created {})",
                account.id,
                account.description,
                account.account_type,
                status,
                account.created.format("%Y-%m-%d"),
            );
        }

        Ok(())
    }
}
