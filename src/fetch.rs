//! Request construction and the fetch command.
//!
//! A fetch cycle is a single GET against the configured endpoint with the
//! current query text in the configured parameter, decoded as JSON. The
//! command resolves to [`FetchedMsg`] on success or [`FetchErrMsg`] on a
//! transport or decode failure; structural problems inside the body are not
//! this module's concern and are handled downstream by the extractor.

use crate::fetchlist::{Config, FetchErrMsg, FetchedMsg};
use bubbletea_rs::{Cmd, Msg};
use once_cell::sync::Lazy;
use url::Url;

/// One shared client for every widget instance; reqwest clients pool
/// connections internally.
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Builds the request target for a fetch cycle.
///
/// The query parameter is set only when `query` is non-empty; an empty input
/// requests the endpoint's unfiltered option list.
///
/// # Examples
///
/// ```rust
/// use bubbletea_fetchlist::fetch::request_url;
/// use bubbletea_fetchlist::fetchlist::Config;
///
/// let config = Config::builder()
///     .url("https://api.example.com/cities")
///     .param("q")
///     .build()
///     .unwrap();
/// assert_eq!(
///     request_url(&config, "par").as_str(),
///     "https://api.example.com/cities?q=par"
/// );
/// assert_eq!(
///     request_url(&config, "").as_str(),
///     "https://api.example.com/cities"
/// );
/// ```
pub fn request_url(config: &Config, query: &str) -> Url {
    let mut url = config.endpoint().clone();
    if !query.is_empty() {
        url.query_pairs_mut().append_pair(config.param(), query);
    }
    url
}

/// Returns a command that fetches options for `query`.
///
/// The resulting message carries the widget `id` for instance filtering and
/// the fetch `generation` so stale responses arriving out of order can be
/// discarded by the model.
pub fn fetch(config: &Config, query: &str, id: i64, generation: u64) -> Cmd {
    let url = request_url(config, query);
    Box::pin(async move {
        match request_json(url).await {
            Ok(data) => Some(Box::new(FetchedMsg {
                id,
                generation,
                data,
            }) as Msg),
            Err(error) => Some(Box::new(FetchErrMsg { id, error }) as Msg),
        }
    })
}

async fn request_json(url: Url) -> Result<serde_json::Value, String> {
    let response = CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::builder()
            .url("https://api.example.com/cities")
            .param("q")
            .build()
            .unwrap()
    }

    #[test]
    fn test_request_url_sets_query_parameter() {
        let url = request_url(&config(), "lyo");
        assert_eq!(url.as_str(), "https://api.example.com/cities?q=lyo");
    }

    #[test]
    fn test_empty_query_omits_parameter() {
        let url = request_url(&config(), "");
        assert_eq!(url.as_str(), "https://api.example.com/cities");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_query_text_is_percent_encoded() {
        let url = request_url(&config(), "san fran");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/cities?q=san+fran"
        );
    }

    #[test]
    fn test_relative_endpoint_resolves_against_base() {
        let config = Config::builder()
            .base("https://app.example.com/page")
            .url("/api/cities")
            .param("q")
            .build()
            .unwrap();
        let url = request_url(&config, "x");
        assert_eq!(url.as_str(), "https://app.example.com/api/cities?q=x");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_resolves_to_error_message() {
        // Port 9 on localhost is the discard service, virtually never open.
        let config = Config::builder()
            .url("http://127.0.0.1:9/options")
            .param("q")
            .build()
            .unwrap();
        let msg = fetch(&config, "x", 7, 1).await.expect("fetch always yields a message");
        let err = msg
            .downcast_ref::<FetchErrMsg>()
            .expect("transport failure becomes FetchErrMsg");
        assert_eq!(err.id, 7);
        assert!(!err.error.is_empty());
    }
}
