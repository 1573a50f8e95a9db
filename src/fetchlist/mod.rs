//! Auto-suggest widget backed by a remote JSON endpoint.
//!
//! The fetchlist widget binds a suggestion list to a text input: as the
//! query text changes, it fetches candidate values from a configured
//! endpoint, extracts them from the arbitrary-shaped JSON response via
//! configurable paths, and reconciles them into the rendered list with a
//! minimal add/remove diff.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_fetchlist::fetchlist::{new, Config};
//!
//! let config = Config::builder()
//!     .url("https://api.example.com/cities")
//!     .param("q")
//!     .list_path("results")
//!     .value_path("name")
//!     .label_path("country")
//!     .remove_stale(true)
//!     .build()
//!     .unwrap();
//!
//! let mut widget = new(config);
//! // Feed query text from your input component; the widget throttles the
//! // fetch triggers and returns commands for the bubbletea runtime.
//! let cmd = widget.set_query("par");
//! ```
//!
//! # Pipeline
//!
//! Query change → throttle gate → fetch command → extraction → set
//! reconciliation → rendered datalist. Transport failures surface as
//! [`FetchErrMsg`]; malformed response bodies degrade to an empty
//! suggestion set and are never an error.

pub mod config;
pub mod keymap;
pub mod model;
pub mod sink;
pub mod types;
pub mod view;


pub use config::{Builder, Config, ConfigError, DEFAULT_THROTTLE};
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, to_title_case, Model};
pub use sink::{apply_diff, Datalist, SuggestionSink};
pub use types::{FetchErrMsg, FetchedMsg, QueryChangedMsg, SelectedMsg};
pub use view::{default_styles, Styles};
