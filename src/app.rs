use alonzo_lib::Client;
use clap::{Parser, Subcommand};

use crate::{config, logging};

mod accounts;
mod auth;
mod balance;
mod pots;
mod summary;
mod transactions;
mod whoami;

#[derive(Debug, Parser)]
#[clap(about = "A bare-bones command line for the Monzo API", version)]
pub struct App {
    /// Use this access token instead of the stored one
    #[clap(long, short = 't', global = true)]
    access_token: Option<String>,

    /// Logging verbosity (may be repeated)
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Store an access token for later invocations
    Auth(auth::Auth),

    /// Check the access token and show who it belongs to
    Whoami(whoami::Whoami),

    /// List accounts, open and closed
    Accounts(accounts::Accounts),

    /// Show the balance of an account
    Balance(balance::Balance),

    /// List the pots of an account
    Pots(pots::Pots),

    /// List transactions on an account
    Transactions(transactions::Transactions),

    /// Show every account together with its balance and pots
    Summary(summary::Summary),
}

impl App {
    pub fn from_cli() -> Self {
        let app = Self::parse();
        logging::set_up(app.verbose);
        app
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Auth(cmd) => cmd.run(),
            Command::Whoami(cmd) => cmd.run(&self.client()?).await,
            Command::Accounts(cmd) => cmd.run(&self.client()?).await,
            Command::Balance(cmd) => cmd.run(&self.client()?).await,
            Command::Pots(cmd) => cmd.run(&self.client()?).await,
            Command::Transactions(cmd) => cmd.run(&self.client()?).await,
            Command::Summary(cmd) => cmd.run(&self.client()?).await,
        }
    }

    fn client(&self) -> anyhow::Result<Client> {
        let access_token = match &self.access_token {
            Some(token) => token.clone(),
            None => config::auth()?.access_token,
        };

        Ok(Client::new(access_token))
    }
}

/// Format a minor-unit amount for display, falling back to a bare
/// `CODE amount` when the currency code is not a known ISO currency
fn format_currency(amount: i64, currency: &str) -> String {
    match rusty_money::iso::find(currency) {
        Some(iso) => rusty_money::Money::from_minor(amount, iso).to_string(),
        None => format!("{} {}", currency, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn known_currencies_are_formatted_from_minor_units() {
        assert_eq!(format_currency(5000, "GBP"), "£50.00");
    }

    #[test]
    fn unknown_currencies_fall_back_to_the_raw_amount() {
        assert_eq!(format_currency(5000, "ZZZ"), "ZZZ 5000");
    }
}
