//! Pipeline orchestration: the async entry point consumed by callers

use crate::config::Config;
use crate::decoder::decode_items;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::ordering::{order_for_display, retain_named};
use crate::types::{Item, LoadToken};

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Outcome of one successful `load` invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadResult {
    /// Token issued when this invocation started
    pub token: LoadToken,

    /// Items filtered and ordered for display
    pub items: Vec<Item>,
}

impl LoadResult {
    /// Whether this result is still the most recent one issued by `loader`
    ///
    /// Overlapping `load` calls race: whichever completes last would
    /// otherwise silently overwrite the caller's current state. Checking
    /// currency before accepting a result discards stale completions.
    pub fn is_current(&self, loader: &ItemLoader) -> bool {
        self.token == loader.latest_token()
    }
}

/// Loads the remote item list, filtered and deterministically ordered
///
/// The loader composes the pipeline stages strictly in sequence: fetch the
/// payload bytes, decode them into items, drop blank-named items, and order
/// the survivors by category then id. Only the fetch suspends; the remaining
/// stages are synchronous and pure.
///
/// Invocations are independent — the loader keeps no intermediate state
/// between calls, and a failed call never disturbs the results of an earlier
/// successful one. Each call is tagged with a strictly increasing
/// [`LoadToken`] so a consumer can detect and discard results from
/// superseded calls (see [`LoadResult::is_current`]).
///
/// # Examples
///
/// ```no_run
/// use itemfeed::{Config, ItemLoader};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let loader = ItemLoader::new(Config::default())?;
///
///     let result = loader.load().await?;
///     if result.is_current(&loader) {
///         for item in &result.items {
///             println!("{} [{}] {}", item.id, item.list_id, item.name);
///         }
///     }
///     Ok(())
/// }
/// ```
pub struct ItemLoader {
    fetcher: Fetcher,

    /// Highest token issued so far; 0 means no load has been requested
    issued: AtomicU64,
}

impl ItemLoader {
    /// Create a loader for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid absolute URL or the
    /// HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(&config)?,
            issued: AtomicU64::new(0),
        })
    }

    /// The most recent token issued by [`load`](ItemLoader::load)
    pub fn latest_token(&self) -> LoadToken {
        LoadToken(self.issued.load(Ordering::SeqCst))
    }

    /// Fetch, decode, filter, and order the item list
    ///
    /// Delivers the ordered sequence exactly once on success. On failure the
    /// invocation yields the failing stage's error and produces nothing —
    /// whatever the caller currently displays is left untouched.
    ///
    /// # Errors
    ///
    /// [`NetworkError`](crate::NetworkError) if the fetch fails,
    /// [`DecodeError`](crate::DecodeError) if the payload is malformed.
    pub async fn load(&self) -> Result<LoadResult> {
        let token = LoadToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1);
        debug!(%token, "load started");

        let bytes = self.fetcher.fetch().await.inspect_err(|e| {
            warn!(%token, error = %e, "load failed while fetching");
        })?;

        let items = decode_items(&bytes).inspect_err(|e| {
            warn!(%token, error = %e, "load failed while decoding");
        })?;

        let items = order_for_display(retain_named(items));
        debug!(%token, items = items.len(), "load complete");

        Ok(LoadResult { token, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, Error, NetworkError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE_PAYLOAD: &str = r#"[
        {"id": 1, "listId": 2, "name": ""},
        {"id": 2, "listId": 1, "name": "Item 2"},
        {"id": 3, "listId": 1, "name": "Item 3"},
        {"id": 4, "listId": 2, "name": "Item 4"}
    ]"#;

    async fn loader_for(server: &MockServer) -> ItemLoader {
        let config = Config {
            endpoint: format!("{}/hiring.json", server.uri()),
            ..Default::default()
        };
        ItemLoader::new(config).unwrap()
    }

    async fn mount_payload(server: &MockServer, body: &str) {
        Mock::given(method("GET"))
            .and(path("/hiring.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_load_filters_and_orders() {
        let server = MockServer::start().await;
        mount_payload(&server, SAMPLE_PAYLOAD).await;

        let loader = loader_for(&server).await;
        let result = loader.load().await.unwrap();

        let keys: Vec<(i64, i64, &str)> = result
            .items
            .iter()
            .map(|i| (i.list_id, i.id, i.name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![(1, 2, "Item 2"), (1, 3, "Item 3"), (2, 4, "Item 4")]
        );
    }

    #[tokio::test]
    async fn test_load_twice_is_idempotent() {
        let server = MockServer::start().await;
        mount_payload(&server, SAMPLE_PAYLOAD).await;

        let loader = loader_for(&server).await;
        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();
        assert_eq!(first.items, second.items);
    }

    #[tokio::test]
    async fn test_tokens_increase_and_stale_results_are_detectable() {
        let server = MockServer::start().await;
        mount_payload(&server, SAMPLE_PAYLOAD).await;

        let loader = loader_for(&server).await;
        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();

        assert!(first.token < second.token);
        assert!(!first.is_current(&loader));
        assert!(second.is_current(&loader));
    }

    #[tokio::test]
    async fn test_load_decode_failure_yields_decode_error() {
        let server = MockServer::start().await;
        mount_payload(&server, r#"[{"listId": 1, "name": "no id"}]"#).await;

        let loader = loader_for(&server).await;
        let result = loader.load().await;
        assert!(matches!(result, Err(Error::Decode(DecodeError::Json(_)))));
    }

    #[tokio::test]
    async fn test_load_http_failure_yields_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hiring.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let loader = loader_for(&server).await;
        let result = loader.load().await;
        assert!(matches!(
            result,
            Err(Error::Network(NetworkError::HttpStatus { status: 404 }))
        ));
    }

    #[tokio::test]
    async fn test_failed_load_still_consumes_a_token() {
        let server = MockServer::start().await;
        mount_payload(&server, "not json").await;

        let loader = loader_for(&server).await;
        assert_eq!(loader.latest_token(), LoadToken(0));
        let _ = loader.load().await;
        assert_eq!(loader.latest_token(), LoadToken(1));
    }
}
