use clap::Parser;

use crate::config;

#[derive(Debug, Parser)]
pub struct Auth {
    /// The access token, obtained from <https://developers.monzo.com>
    access_token: String,
}

impl Auth {
    pub fn run(&self) -> anyhow::Result<()> {
        config::save_auth(&config::Auth {
            access_token: self.access_token.clone(),
        })?;

        println!("access token stored");
        Ok(())
    }
}
