//! Core model for the fetchlist widget.

use super::config::Config;
use super::keymap::{default_key_map, KeyMap};
use super::sink::{apply_diff, Datalist};
use super::types::{FetchErrMsg, FetchedMsg, QueryChangedMsg, SelectedMsg};
use super::view::{default_styles, Styles};
use crate::extract::{extract, Suggestion};
use crate::fetch;
use crate::reconcile::OptionSet;
use crate::throttle::Throttle;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::atomic::{AtomicI64, Ordering};
use unicode_segmentation::UnicodeSegmentation;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// The fetchlist widget model: one input's suggestion set, fed from one
/// remote JSON endpoint.
///
/// The model owns the full option-resolution pipeline. A query change passes
/// the throttle gate and becomes a fetch command; the fetched response is
/// extracted into suggestions, reconciled against the tracked option set,
/// and the resulting diff is applied to the rendered datalist. State is
/// created empty with the model and discarded with it; nothing is shared
/// across instances.
///
/// # Examples
///
/// ```rust
/// use bubbletea_fetchlist::fetchlist::{new, Config};
///
/// let config = Config::builder()
///     .url("https://api.example.com/cities")
///     .param("q")
///     .list_path("results")
///     .value_path("name")
///     .remove_stale(true)
///     .build()
///     .unwrap();
/// let mut widget = new(config);
///
/// // First keystroke opens a fetch cycle; the next within the throttle
/// // window is dropped.
/// assert!(widget.set_query("par").is_some());
/// assert!(widget.set_query("pari").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Last fetch error, if any. Recorded from [`FetchErrMsg`] without
    /// consuming the message.
    pub err: Option<String>,
    /// Key bindings for widget actions.
    pub key_map: KeyMap,
    /// Styles used to render the suggestion list.
    pub styles: Styles,
    /// Maximum rendered width in cells; 0 means unlimited.
    pub width: i32,

    config: Config,
    id: i64,
    query: String,
    gate: Throttle,
    options: OptionSet,
    datalist: Datalist,
    generation: u64,
    applied_generation: u64,
}

/// Creates a widget model from a validated configuration.
pub fn new(config: Config) -> Model {
    let gate = Throttle::new(config.throttle());
    Model {
        err: None,
        key_map: default_key_map(),
        styles: default_styles(),
        width: 0,
        config,
        id: next_id(),
        query: String::new(),
        gate,
        options: OptionSet::new(),
        datalist: Datalist::new(),
        generation: 0,
        applied_generation: 0,
    }
}

impl Model {
    /// The unique identifier of this widget instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The immutable configuration this instance was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The tracked option values, in order. Reflects the latest applied
    /// fetch, which may diverge from the rendered list when stale removal
    /// is disabled.
    pub fn options(&self) -> &[String] {
        self.options.values()
    }

    /// The rendered suggestion list.
    pub fn datalist(&self) -> &Datalist {
        &self.datalist
    }

    /// Command for the initial fetch cycle, when configured.
    ///
    /// Consumes the throttle gate like any other trigger, so a keystroke
    /// arriving inside the first window is dropped.
    pub fn init_cmd(&mut self) -> Option<Cmd> {
        if !self.config.initial_fetch() {
            return None;
        }
        self.trigger()
    }

    /// Updates the query text and, if the throttle gate is open, starts a
    /// fetch cycle.
    ///
    /// The query is stored either way; a trigger dropped by the gate is not
    /// queued or replayed. With `title_case` enabled the text is normalized
    /// before it is stored or sent.
    pub fn set_query(&mut self, text: &str) -> Option<Cmd> {
        self.query = if self.config.title_case() {
            to_title_case(text)
        } else {
            text.to_string()
        };
        self.trigger()
    }

    fn trigger(&mut self) -> Option<Cmd> {
        if !self.gate.allow() {
            return None;
        }
        self.generation += 1;
        Some(fetch::fetch(&self.config, &self.query, self.id, self.generation))
    }

    /// Extracts, reconciles and renders a fetched response.
    ///
    /// Responses older than the newest one already applied are discarded,
    /// so two racing fetches cannot reintroduce stale options.
    fn apply_response(&mut self, msg: &FetchedMsg) {
        if msg.generation < self.applied_generation {
            return;
        }
        self.applied_generation = msg.generation;
        let suggestions = extract(self.config.paths(), &msg.data);
        let diff = self.options.reconcile(&suggestions, self.config.remove_stale());
        apply_diff(&mut self.datalist, &diff);
    }

    /// The rendered entry that best matches the current query.
    ///
    /// Ranked by fuzzy score; ties keep the earlier entry. Entries the
    /// matcher rejects outright fall back to the first entry containing the
    /// query as a substring, which also makes an empty query select the
    /// first entry.
    pub fn best_match(&self) -> Option<&Suggestion> {
        let matcher = SkimMatcherV2::default();
        let mut best: Option<(i64, &Suggestion)> = None;
        for entry in self.datalist.entries() {
            if let Some(score) = matcher.fuzzy_match(&entry.value, &self.query) {
                let better = best.map_or(true, |(top, _)| score > top);
                if better {
                    best = Some((score, entry));
                }
            }
        }
        best.map(|(_, entry)| entry)
            .or_else(|| self.datalist.first_containing(&self.query))
    }

    fn select_cmd(&self) -> Option<Cmd> {
        let value = self.best_match()?.value.clone();
        let id = self.id;
        Some(Box::pin(async move {
            Some(Box::new(SelectedMsg { id, value }) as Msg)
        }))
    }

    /// Processes a message and optionally returns a follow-up command.
    ///
    /// Handled messages: [`QueryChangedMsg`] (throttled fetch trigger),
    /// [`FetchedMsg`] (extract → reconcile → render), [`FetchErrMsg`]
    /// (recorded in [`Model::err`], left observable to the application) and,
    /// with auto-select enabled, the select key binding. Messages for other
    /// widget instances are ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(changed) = msg.downcast_ref::<QueryChangedMsg>() {
            if changed.id != self.id {
                return None;
            }
            let value = changed.value.clone();
            return self.set_query(&value);
        }

        if let Some(fetched) = msg.downcast_ref::<FetchedMsg>() {
            if fetched.id == self.id {
                self.apply_response(fetched);
            }
            return None;
        }

        if let Some(err) = msg.downcast_ref::<FetchErrMsg>() {
            if err.id == self.id {
                self.err = Some(err.error.clone());
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.config.auto_select() && self.key_map.select.matches(key_msg) {
                return self.select_cmd();
            }
        }

        None
    }
}

// Standalone use. The widget is typically embedded and built from an
// application config; init() starts from the placeholder defaults.
impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(Config::default());
        let cmd = model.init_cmd();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Converts a string to title case: the first letter of every word is
/// upper-cased, the rest lowered. Word boundaries are Unicode-aware and
/// separators are preserved.
///
/// # Examples
///
/// ```rust
/// use bubbletea_fetchlist::fetchlist::to_title_case;
///
/// assert_eq!(to_title_case("new  york"), "New  York");
/// assert_eq!(to_title_case("SAN FRANCISCO"), "San Francisco");
/// ```
pub fn to_title_case(value: &str) -> String {
    value
        .split_word_bounds()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                _ => word.to_string(),
            }
        })
        .collect()
}
