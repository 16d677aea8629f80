use alonzo_lib::Client;
use anyhow::Context;
use clap::Parser;
use serde_json::Value;

#[derive(Debug, Parser)]
pub struct Pots {
    /// The account to query. Defaults to the first open account
    #[clap(long, short)]
    account_id: Option<String>,
}

impl Pots {
    pub async fn run(&self, client: &Client) -> anyhow::Result<()> {
        let pots = client.pots(self.account_id.as_deref()).await?;

        for line in lines(&pots)? {
            println!("{}", line);
        }

        Ok(())
    }
}

/// Render one line per pot in a raw pots response
///
/// Deleted pots are filtered out.
pub(super) fn lines(pots: &Value) -> anyhow::Result<Vec<String>> {
    let pots = pots
        .get("pots")
        .and_then(Value::as_array)
        .context("no 'pots' field in the response")?;

    pots.iter()
        .filter(|pot| !pot.get("deleted").and_then(Value::as_bool).unwrap_or(false))
        .map(line)
        .collect()
}

fn line(pot: &Value) -> anyhow::Result<String> {
    let name = pot
        .get("name")
        .and_then(Value::as_str)
        .context("pot without a 'name'")?;
    let balance = pot
        .get("balance")
        .and_then(Value::as_i64)
        .context("pot without a 'balance'")?;
    let currency = pot
        .get("currency")
        .and_then(Value::as_str)
        .context("pot without a 'currency'")?;

    Ok(format!("{}: {}", name, super::format_currency(balance, currency)))
}
