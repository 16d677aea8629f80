use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{instrument, Level};

use crate::{time, Account, Result, Transaction};

static DEFAULT_BASE_URL: &str = "https://api.monzo.com";

/// Query parameters for a single request. Built fresh per call, never
/// shared between invocations.
type Params = Vec<(&'static str, String)>;

/// A client to the Monzo API
///
/// The access token is sent verbatim as a bearer credential with every
/// request for the lifetime of the client. It is never validated locally;
/// an invalid token only shows up when a call fails at the server.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl Client {
    /// Create a client that talks to the production Monzo API
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Point the client at a different base URL, such as a local mock
    /// server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the underlying HTTP client
    ///
    /// Use this to configure default headers or timeouts. Default headers
    /// are sent with every request, except that `Authorization` is always
    /// overwritten with the client's own bearer token.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// The access token this client authenticates with
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Check the access token and describe its properties
    ///
    /// Returns the raw JSON response.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be completed, or the response body is
    /// not valid JSON
    #[instrument(skip(self))]
    pub async fn whoami(&self) -> Result<Value> {
        self.get("ping/whoami", &[]).await
    }

    /// List all of the accounts, open and closed, of the user associated
    /// with this token, in the order the server returns them
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be completed, or the response cannot be
    /// decoded
    #[instrument(skip(self))]
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        #[derive(Deserialize)]
        struct Accounts {
            accounts: Vec<Account>,
        }

        let response: Accounts = self.get("accounts", &[]).await?;
        Ok(response.accounts)
    }

    /// Retrieve the balance of the given account, or of the default
    /// account when none is given
    ///
    /// Returns the raw JSON response. Amounts are in minor units of the
    /// account currency; no conversion is applied.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be completed, or the response body is
    /// not valid JSON
    #[instrument(skip(self))]
    pub async fn balance(&self, account_id: Option<&str>) -> Result<Value> {
        let params = account_params(self.resolve_account_id(account_id).await?);
        self.get("balance", &params).await
    }

    /// Retrieve the pots associated with the given account, or with the
    /// default account when none is given
    ///
    /// Returns the raw JSON response.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be completed, or the response body is
    /// not valid JSON
    #[instrument(skip(self))]
    pub async fn pots(&self, account_id: Option<&str>) -> Result<Value> {
        let params = account_params(self.resolve_account_id(account_id).await?);
        self.get("pots", &params).await
    }

    /// List the transactions of the given account, or of the default
    /// account when none is given, in the order the server returns them
    ///
    /// Unless `full` is set the query is windowed: `since` falls back to
    /// one week ago when not supplied, and `before` is included only when
    /// supplied. When `full` is set no time filters are sent and the
    /// server returns the complete history.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be completed, or the response cannot be
    /// decoded
    #[instrument(skip(self))]
    pub async fn transactions(
        &self,
        account_id: Option<&str>,
        since: Option<DateTime<Utc>>,
        before: Option<DateTime<Utc>>,
        full: bool,
    ) -> Result<Vec<Transaction>> {
        #[derive(Deserialize)]
        struct Transactions {
            transactions: Vec<Transaction>,
        }

        let account_id = self.resolve_account_id(account_id).await?;
        let params = transaction_params(account_id, since, before, full, Utc::now().date_naive());

        let response: Transactions = self.get("transactions", &params).await?;
        Ok(response.transactions)
    }

    /// Use the caller's account ID where one was supplied, otherwise fall
    /// back to the default account
    async fn resolve_account_id(&self, account_id: Option<&str>) -> Result<Option<String>> {
        match account_id {
            Some(id) => Ok(Some(id.to_string())),
            None => self.default_account_id().await,
        }
    }

    /// The ID of the first open account in server order, if there is one
    ///
    /// When every account is closed no ID is produced and the dependent
    /// request is issued without an `account_id` parameter; the resulting
    /// server-side error is passed through like any other.
    async fn default_account_id(&self) -> Result<Option<String>> {
        let accounts = self.accounts().await?;
        let id = first_active(&accounts).map(ToString::to_string);

        if id.is_none() {
            tracing::event!(Level::WARN, "no open account to use as a default");
        }

        Ok(id)
    }

    /// Perform a GET against the given endpoint and decode the JSON body
    async fn get<T>(&self, endpoint: &str, params: &[(&'static str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(params)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        Ok(response.json().await?)
    }
}

/// The ID of the first account in the list whose `closed` flag is unset
fn first_active(accounts: &[Account]) -> Option<&str> {
    accounts
        .iter()
        .find(|account| account.is_active())
        .map(|account| account.id.as_str())
}

fn account_params(account_id: Option<String>) -> Params {
    account_id.into_iter().map(|id| ("account_id", id)).collect()
}

/// Build the query for a transaction listing
///
/// A windowed query always carries `since` (defaulting to one week before
/// `today`); a full-history query carries no time filters at all.
fn transaction_params(
    account_id: Option<String>,
    since: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
    full: bool,
    today: NaiveDate,
) -> Params {
    let mut params = account_params(account_id);

    if !full {
        let since = since.unwrap_or_else(|| time::week_before(today));
        params.push(("since", time::rfc3339(since)));

        if let Some(before) = before {
            params.push(("before", time::rfc3339(before)));
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, Utc};
    use test_case::test_case;

    use super::{account_params, transaction_params, Account, Client};

    fn account(id: &str, closed: bool) -> Account {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "description": "test account",
            "created": "2020-01-01T00:00:00Z",
            "type": "uk_retail",
            "closed": closed,
            "owners": [],
        }))
        .unwrap()
    }

    #[test_case(&[("acc_1", false), ("acc_2", false)] => Some("acc_1".to_string()); "first open account wins")]
    #[test_case(&[("acc_1", true), ("acc_2", false)] => Some("acc_2".to_string()); "closed accounts are skipped")]
    #[test_case(&[("acc_1", true), ("acc_2", true)] => None; "every account closed")]
    #[test_case(&[] => None; "no accounts at all")]
    fn first_active(accounts: &[(&str, bool)]) -> Option<String> {
        let accounts: Vec<Account> = accounts
            .iter()
            .map(|(id, closed)| account(id, *closed))
            .collect();

        super::super::first_active(&accounts).map(ToString::to_string)
    }

    #[test]
    fn unresolved_account_sends_no_account_id() {
        assert!(account_params(None).is_empty());
    }

    #[test]
    fn windowed_query_defaults_since_to_a_week_ago() {
        let today = NaiveDate::from_ymd_opt(2022, 1, 20).unwrap();
        let params = transaction_params(Some("acc_1".to_string()), None, None, false, today);

        assert_eq!(
            params,
            vec![
                ("account_id", "acc_1".to_string()),
                ("since", "2022-01-13T00:00:00Z".to_string()),
            ]
        );
    }

    #[test]
    fn windowed_query_keeps_explicit_bounds() {
        let today = NaiveDate::from_ymd_opt(2022, 1, 20).unwrap();
        let midnight = |date: NaiveDate| date.and_time(NaiveTime::MIN).and_utc();
        let since = midnight(NaiveDate::from_ymd_opt(2021, 12, 1).unwrap());
        let before = midnight(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());

        let params = transaction_params(
            Some("acc_1".to_string()),
            Some(since),
            Some(before),
            false,
            today,
        );

        assert_eq!(
            params,
            vec![
                ("account_id", "acc_1".to_string()),
                ("since", "2021-12-01T00:00:00Z".to_string()),
                ("before", "2022-01-01T00:00:00Z".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn transport_errors_are_passed_through() {
        // nothing listens on the discard port, so the request fails at the
        // transport level and the error surfaces untranslated
        let client = Client::new("token").with_base_url("http://127.0.0.1:9");

        assert!(client.whoami().await.is_err());
    }

    #[test]
    fn full_history_query_sends_no_time_filters() {
        let params = transaction_params(
            Some("acc_1".to_string()),
            Some(Utc::now()),
            Some(Utc::now()),
            true,
            Utc::now().date_naive(),
        );

        assert_eq!(params, vec![("account_id", "acc_1".to_string())]);
    }
}
