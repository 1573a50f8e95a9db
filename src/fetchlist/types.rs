//! Messages exchanged between the widget and its collaborators.
//!
//! Every message carries the id of the widget instance it targets, so
//! several fetchlist widgets can coexist in one program without crosstalk.

use bubbletea_rs::Msg;
use serde_json::Value;

/// Notification that the query text changed.
///
/// Sent by whatever input surface feeds the widget — its host application's
/// text input or an external one; the widget does not care which. Triggers a
/// throttled fetch cycle.
#[derive(Debug, Clone)]
pub struct QueryChangedMsg {
    /// Target widget instance.
    pub id: i64,
    /// The new query text.
    pub value: String,
}

/// Successful fetch cycle payload: the response body decoded as JSON.
#[derive(Debug, Clone)]
pub struct FetchedMsg {
    /// Widget instance that started the fetch.
    pub id: i64,
    /// Fetch generation, used to discard responses arriving out of order.
    pub generation: u64,
    /// The raw response; no shape is assumed beyond what the extractor
    /// tolerates.
    pub data: Value,
}

/// Transport or JSON-decode failure of a fetch cycle.
///
/// The widget records the error but does not consume it; the embedding
/// application sees the same message and may handle it however it likes.
#[derive(Debug, Clone)]
pub struct FetchErrMsg {
    /// Widget instance that started the fetch.
    pub id: i64,
    /// Human-readable failure description.
    pub error: String,
}

/// Auto-select outcome: the value the input surface should adopt.
#[derive(Debug, Clone)]
pub struct SelectedMsg {
    /// Widget instance that selected the value.
    pub id: i64,
    /// The selected option value.
    pub value: String,
}

impl From<QueryChangedMsg> for Msg {
    fn from(msg: QueryChangedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<FetchedMsg> for Msg {
    fn from(msg: FetchedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<FetchErrMsg> for Msg {
    fn from(msg: FetchErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<SelectedMsg> for Msg {
    fn from(msg: SelectedMsg) -> Self {
        Box::new(msg) as Msg
    }
}
