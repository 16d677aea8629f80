use alonzo_lib::Client;
use anyhow::Context;
use clap::Parser;
use serde_json::Value;

#[derive(Debug, Parser)]
pub struct Balance {
    /// The account to query. Defaults to the first open account
    #[clap(long, short)]
    account_id: Option<String>,
}

impl Balance {
    pub async fn run(&self, client: &Client) -> anyhow::Result<()> {
        let balance = client.balance(self.account_id.as_deref()).await?;

        println!("{}", format(&balance)?);
        if let Some(spend) = spend_today(&balance) {
            println!("spent today: {}", spend);
        }

        Ok(())
    }
}

/// Render the `balance` field of a raw balance response
pub(super) fn format(balance: &Value) -> anyhow::Result<String> {
    let amount = balance
        .get("balance")
        .and_then(Value::as_i64)
        .context("no 'balance' field in the response")?;
    let currency = balance
        .get("currency")
        .and_then(Value::as_str)
        .context("no 'currency' field in the response")?;

    Ok(super::format_currency(amount, currency))
}

fn spend_today(balance: &Value) -> Option<String> {
    let amount = balance.get("spend_today").and_then(Value::as_i64)?;
    let currency = balance.get("currency").and_then(Value::as_str)?;

    Some(super::format_currency(amount, currency))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn balance_is_rendered_from_minor_units() {
        let response = json!({
            "balance": 5000,
            "total_balance": 6000,
            "currency": "GBP",
            "spend_today": -130,
        });

        assert_eq!(super::format(&response).unwrap(), "£50.00");
    }

    #[test]
    fn malformed_response_is_an_error() {
        let response = json!({ "currency": "GBP" });

        assert!(super::format(&response).is_err());
    }
}
