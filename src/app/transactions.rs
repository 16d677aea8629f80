use alonzo_lib::Client;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Transactions {
    /// The account to query. Defaults to the first open account
    #[clap(long, short)]
    account_id: Option<String>,

    /// Include transactions from this date onwards, e.g. 2022-01-01.
    /// Defaults to one week ago
    #[clap(long)]
    since: Option<NaiveDate>,

    /// Include transactions up to this date
    #[clap(long)]
    before: Option<NaiveDate>,

    /// Fetch the complete history instead of a time window
    #[clap(long)]
    full: bool,
}

impl Transactions {
    pub async fn run(&self, client: &Client) -> anyhow::Result<()> {
        let transactions = client
            .transactions(
                self.account_id.as_deref(),
                self.since.map(midnight),
                self.before.map(midnight),
                self.full,
            )
            .await?;

        for transaction in transactions {
            println!("{}", transaction);
        }

        Ok(())
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
