/// The error returned by [`Client`](crate::Client) operations
///
/// The client adds no taxonomy of its own: transport failures, non-success
/// status codes (whose bodies are still parsed as JSON, and may fail there),
/// and JSON decoding failures all surface as the underlying [`reqwest`]
/// error, untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A failure in the underlying HTTP transport or body decoding
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
