#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-fetchlist/")]

//! # bubbletea-fetchlist
//!
//! A remote-backed auto-suggest input component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! terminal applications: as the user types, the widget fetches candidate
//! values from a JSON endpoint, extracts them via configurable dotted paths,
//! and reconciles them into a suggestion list with a minimal add/remove diff.
//!
//! ## Overview
//!
//! The crate is built around the option-resolution pipeline:
//!
//! - [`throttle`] — collapses bursty input events to a bounded request volume
//! - [`fetch`] — builds the request URL and issues the GET as a bubbletea
//!   command
//! - [`path`] — total, never-failing dotted-path lookup into untrusted JSON
//! - [`extract`] — turns a raw response into a validated, de-duplicated
//!   sequence of suggestions
//! - [`reconcile`] — diffs the new suggestions against the tracked option
//!   set instead of rebuilding the rendered list wholesale
//!
//! The [`fetchlist`] module ties the pipeline into an Elm-architecture
//! widget with `update()` and `view()` methods, a typed validated
//! configuration, and a [`fetchlist::SuggestionSink`] seam for custom
//! rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_fetchlist::prelude::*;
//!
//! let config = Config::builder()
//!     .url("https://api.example.com/cities")
//!     .param("q")
//!     .list_path("results")
//!     .value_path("name")
//!     .remove_stale(true)
//!     .build()
//!     .unwrap();
//!
//! let mut widget = fetchlist_new(config);
//! let fetch_cmd = widget.set_query("par");
//! // Hand fetch_cmd to the bubbletea runtime; the response comes back
//! // through widget.update() as a FetchedMsg.
//! ```
//!
//! ## Error model
//!
//! A malformed or unexpectedly shaped response never errors — extraction
//! degrades to an empty suggestion set, because a bad response must not
//! crash the input the user is typing into. Transport and decode failures,
//! by contrast, surface as [`fetchlist::FetchErrMsg`]: the widget records
//! the error but leaves the message observable to the embedding
//! application.

pub mod extract;
pub mod fetch;
pub mod fetchlist;
pub mod key;
pub mod path;
pub mod reconcile;
pub mod throttle;

pub use extract::{extract, ExtractPaths, Suggestion};
pub use fetchlist::{
    apply_diff, default_key_map as fetchlist_default_key_map,
    default_styles as fetchlist_default_styles, new as fetchlist_new, Builder, Config,
    ConfigError, Datalist, FetchErrMsg, FetchedMsg, KeyMap as FetchListKeyMap,
    Model as FetchList, QueryChangedMsg, SelectedMsg, Styles as FetchListStyles, SuggestionSink,
    DEFAULT_THROTTLE,
};
pub use key::Binding;
pub use reconcile::{Diff, OptionSet};
pub use throttle::Throttle;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_fetchlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::extract::{extract, ExtractPaths, Suggestion};
    pub use crate::fetchlist::{
        apply_diff, new as fetchlist_new, Builder, Config, ConfigError, Datalist, FetchErrMsg,
        FetchedMsg, KeyMap as FetchListKeyMap, Model as FetchList, QueryChangedMsg, SelectedMsg,
        Styles as FetchListStyles, SuggestionSink, DEFAULT_THROTTLE,
    };
    pub use crate::key::Binding;
    pub use crate::reconcile::{Diff, OptionSet};
    pub use crate::throttle::Throttle;
}
