//! Typed configuration for the fetchlist widget.
//!
//! One immutable [`Config`] per widget instance, validated once at
//! construction. A missing endpoint or parameter name is a setup error and
//! fails fast here, never at first fetch.

use crate::extract::ExtractPaths;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default minimum interval between two fetch triggers.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(500);

/// Immutable per-instance widget configuration.
///
/// Built through [`Config::builder`]; a successfully built config is always
/// valid. Optional behaviors default to off and the throttle window defaults
/// to [`DEFAULT_THROTTLE`]. `Config::default()` provides a placeholder
/// endpoint for standalone use of the widget.
///
/// # Examples
///
/// ```rust
/// use bubbletea_fetchlist::fetchlist::Config;
///
/// let config = Config::builder()
///     .url("https://api.example.com/cities")
///     .param("q")
///     .list_path("results")
///     .value_path("name")
///     .remove_stale(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.param(), "q");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: Url,
    param: String,
    paths: ExtractPaths,
    title_case: bool,
    auto_select: bool,
    initial_fetch: bool,
    remove_stale: bool,
    throttle: Duration,
}

impl Config {
    /// Starts building a configuration.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The absolute endpoint URL options are fetched from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Name of the query parameter carrying the input text.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Paths locating option values inside a response.
    pub fn paths(&self) -> &ExtractPaths {
        &self.paths
    }

    /// Whether incoming query text is title-cased.
    pub fn title_case(&self) -> bool {
        self.title_case
    }

    /// Whether Enter selects the best-matching option.
    pub fn auto_select(&self) -> bool {
        self.auto_select
    }

    /// Whether one fetch cycle runs immediately on mount.
    pub fn initial_fetch(&self) -> bool {
        self.initial_fetch
    }

    /// Whether options absent from the latest fetch are removed from the
    /// rendered list.
    pub fn remove_stale(&self) -> bool {
        self.remove_stale
    }

    /// Minimum interval between two fetch triggers.
    pub fn throttle(&self) -> Duration {
        self.throttle
    }
}

// Endpoint used by `Config::default()`. Standalone runs against it simply
// surface a fetch error; real applications configure their own.
const PLACEHOLDER_ENDPOINT: &str = "http://localhost/options";

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: Url::parse(PLACEHOLDER_ENDPOINT).expect("placeholder endpoint parses"),
            param: "q".to_string(),
            paths: ExtractPaths::default(),
            title_case: false,
            auto_select: false,
            initial_fetch: false,
            remove_stale: false,
            throttle: DEFAULT_THROTTLE,
        }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    url: Option<String>,
    base: Option<String>,
    param: Option<String>,
    check: Option<String>,
    list_path: Option<String>,
    value_path: Option<String>,
    label_path: Option<String>,
    title_case: bool,
    auto_select: bool,
    initial_fetch: bool,
    remove_stale: bool,
    throttle: Option<Duration>,
}

impl Builder {
    /// Endpoint to fetch options from. Required. May be relative when a
    /// [`base`](Self::base) is set.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Origin to resolve a relative endpoint against.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Name of the query parameter carrying the input text. Required.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Path to a value gating the response as successful.
    pub fn check(mut self, check: impl Into<String>) -> Self {
        self.check = Some(check.into());
        self
    }

    /// Path to the array of option items within a response.
    pub fn list_path(mut self, list_path: impl Into<String>) -> Self {
        self.list_path = Some(list_path.into());
        self
    }

    /// Path within each item to its value.
    pub fn value_path(mut self, value_path: impl Into<String>) -> Self {
        self.value_path = Some(value_path.into());
        self
    }

    /// Path within each item to its label. Requires a value path.
    pub fn label_path(mut self, label_path: impl Into<String>) -> Self {
        self.label_path = Some(label_path.into());
        self
    }

    /// Title-case incoming query text.
    pub fn title_case(mut self, on: bool) -> Self {
        self.title_case = on;
        self
    }

    /// Select the best-matching option on Enter.
    pub fn auto_select(mut self, on: bool) -> Self {
        self.auto_select = on;
        self
    }

    /// Run one fetch cycle immediately on mount.
    pub fn initial_fetch(mut self, on: bool) -> Self {
        self.initial_fetch = on;
        self
    }

    /// Remove options absent from the latest fetch from the rendered list.
    pub fn remove_stale(mut self, on: bool) -> Self {
        self.remove_stale = on;
        self
    }

    /// Override the throttle window.
    pub fn throttle(mut self, window: Duration) -> Self {
        self.throttle = Some(window);
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let url = self
            .url
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let param = self
            .param
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingParam)?;
        if self.label_path.is_some() && self.value_path.is_none() {
            return Err(ConfigError::LabelWithoutValue);
        }

        let endpoint = match &self.base {
            Some(base) => Url::parse(base).and_then(|b| b.join(&url)),
            None => Url::parse(&url),
        }
        .map_err(ConfigError::InvalidUrl)?;

        Ok(Config {
            endpoint,
            param,
            paths: ExtractPaths {
                check: self.check,
                list_path: self.list_path,
                value_path: self.value_path,
                label_path: self.label_path,
            },
            title_case: self.title_case,
            auto_select: self.auto_select,
            initial_fetch: self.initial_fetch,
            remove_stale: self.remove_stale,
            throttle: self.throttle.unwrap_or(DEFAULT_THROTTLE),
        })
    }
}

/// A configuration precondition violation, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No endpoint URL was given.
    MissingUrl,
    /// No query parameter name was given.
    MissingParam,
    /// A label path was given without a value path.
    LabelWithoutValue,
    /// The endpoint (or base) did not parse as a URL.
    InvalidUrl(url::ParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUrl => write!(f, "missing required endpoint url"),
            Self::MissingParam => write!(f, "missing required query parameter name"),
            Self::LabelWithoutValue => {
                write!(f, "label path is only meaningful together with a value path")
            }
            Self::InvalidUrl(err) => write!(f, "invalid endpoint url: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}
