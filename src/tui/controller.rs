//! Interaction controller for the jump widget.
//!
//! The controller is a single task that owns every piece of mutable widget
//! state: the selection state machine, the query debouncer, the blur grace
//! timer and the dispatch sequence counter. Raw UI events, fetch completions
//! and timer firings all funnel through one `tokio::select!` loop and are
//! handled one at a time, so no two of them ever interleave.
//!
//! The rendering layer talks to it through a [`ControllerHandle`]: events go
//! in over a bounded channel and read-only [`SelectionState`] snapshots come
//! back over a `watch` channel. Fetch completions arrive on their own
//! unbounded channel, so a flooded UI queue never costs a result set.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::navigate::docs_url;
use crate::search::{Debouncer, Fetcher, Query, QuerySeq, ResultSet, SearchResult, sanitize};

use super::selection::{SelectionEvent, SelectionState, reduce};

const CHANNEL_CAPACITY: usize = 256;

/// Raw events from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The input text changed; carries the unsanitized text
    Input(String),
    Focus,
    Blur,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    PointerOver(usize),
    /// Primary press on a result row
    RowClicked(usize),
    /// Leave the widget without navigating
    Quit,
}

/// How the widget session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigate { url: Url, result: SearchResult },
    Cancelled,
}

/// A successful fetch, tagged with the dispatch it answers.
#[derive(Debug)]
struct Completion {
    seq: QuerySeq,
    query: Query,
    results: ResultSet,
}

/// Timing and destination settings for a controller.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub debounce: Duration,
    pub blur_grace: Duration,
    pub docs_base: Url,
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            debounce: config.debounce_delay(),
            blur_grace: config.blur_grace(),
            docs_base: config.docs_url()?,
        })
    }
}

/// Sending half for UI events plus a view of the latest published state.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    tx: mpsc::Sender<UiEvent>,
    snapshots: watch::Receiver<SelectionState>,
}

impl ControllerHandle {
    /// Queue an event for the controller.
    ///
    /// Returns false if the controller has already finished or the queue is
    /// full; a full queue drops the event with a warning.
    pub fn send(&self, event: UiEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(event)) => {
                tracing::warn!("Event queue is full, dropping {event:?}");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> SelectionState {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every published change. It reports an
    /// error from `changed()` once the controller has finished.
    pub fn subscribe(&self) -> watch::Receiver<SelectionState> {
        self.snapshots.clone()
    }
}

/// The widget's event loop. Build one with [`Controller::new`] and drive it
/// with [`Controller::run`].
pub struct Controller {
    state: SelectionState,
    last_seq: QuerySeq,
    query_timer: Debouncer<Query>,
    grace_timer: Debouncer<()>,
    fetcher: Fetcher,
    docs_base: Url,
    rx: mpsc::Receiver<UiEvent>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    snapshots: watch::Sender<SelectionState>,
}

impl Controller {
    pub fn new(fetcher: Fetcher, settings: ControllerSettings) -> (Self, ControllerHandle) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(SelectionState::default());

        let controller = Self {
            state: SelectionState::default(),
            last_seq: QuerySeq::NONE,
            query_timer: Debouncer::new(settings.debounce),
            grace_timer: Debouncer::new(settings.blur_grace),
            fetcher,
            docs_base: settings.docs_base,
            rx,
            completions_tx,
            completions_rx,
            snapshots,
        };
        let handle = ControllerHandle {
            tx,
            snapshots: snapshot_rx,
        };
        (controller, handle)
    }

    /// Process events until the user activates a result or quits.
    ///
    /// Dropping every [`ControllerHandle`] also ends the loop with
    /// [`Outcome::Cancelled`].
    pub async fn run(mut self) -> Outcome {
        loop {
            let outcome = tokio::select! {
                event = self.rx.recv() => match event {
                    Some(event) => self.handle_ui(event),
                    None => Some(Outcome::Cancelled),
                },
                Some(completion) = self.completions_rx.recv() => {
                    self.complete(completion);
                    None
                }
                query = self.query_timer.elapsed() => {
                    self.dispatch(query);
                    None
                }
                () = self.grace_timer.elapsed() => {
                    self.apply(SelectionEvent::Unfocus);
                    None
                }
            };

            if let Some(outcome) = outcome {
                tracing::debug!("Widget finished: {outcome:?}");
                return outcome;
            }
            self.publish();
        }
    }

    fn complete(&mut self, completion: Completion) {
        let Completion {
            seq,
            query,
            results,
        } = completion;
        if self.state.is_current(seq) {
            tracing::debug!("{} result(s) for '{query}' ({seq})", results.len());
            self.apply(SelectionEvent::ResultsArrived { seq, results });
        } else {
            tracing::debug!(
                "Dropping stale results for '{query}' ({seq}, latest {})",
                self.state.latest_dispatched()
            );
        }
    }

    fn handle_ui(&mut self, event: UiEvent) -> Option<Outcome> {
        match event {
            UiEvent::Input(raw) => {
                self.query_timer.trigger(sanitize(&raw));
            }
            UiEvent::Focus => {
                self.grace_timer.cancel();
                self.apply(SelectionEvent::Focus);
            }
            UiEvent::Blur => {
                self.grace_timer.trigger(());
            }
            UiEvent::ArrowUp => self.apply(SelectionEvent::ArrowUp),
            UiEvent::ArrowDown => self.apply(SelectionEvent::ArrowDown),
            UiEvent::Escape => {
                self.grace_timer.cancel();
                self.apply(SelectionEvent::Escape);
            }
            UiEvent::PointerOver(index) => self.apply(SelectionEvent::PointerOver(index)),
            UiEvent::RowClicked(index) => {
                self.grace_timer.cancel();
                self.apply(SelectionEvent::Focus);
                self.apply(SelectionEvent::PointerOver(index));
                return self.activate();
            }
            UiEvent::Enter => return self.activate(),
            UiEvent::Quit => return Some(Outcome::Cancelled),
        }
        None
    }

    fn apply(&mut self, event: SelectionEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Send the debounced query, tagged with a fresh sequence number.
    fn dispatch(&mut self, query: Query) {
        let seq = self.last_seq.next();
        self.last_seq = seq;
        self.apply(SelectionEvent::QueryDispatched(seq));

        if query.is_blank() {
            tracing::debug!("Blank query ({seq}), clearing results");
            self.apply(SelectionEvent::ResultsArrived {
                seq,
                results: ResultSet::empty(),
            });
            return;
        }

        tracing::debug!("Dispatching '{query}' ({seq})");
        let completions = self.completions_tx.clone();
        let tagged = query.clone();
        self.fetcher.fetch(query, move |results| {
            // Fails only once the controller has finished
            let _ = completions.send(Completion {
                seq,
                query: tagged,
                results,
            });
        });
    }

    fn activate(&self) -> Option<Outcome> {
        let result = self.state.activation_target()?;
        match docs_url(&self.docs_base, result) {
            Ok(url) => Some(Outcome::Navigate {
                url,
                result: result.clone(),
            }),
            Err(e) => {
                tracing::warn!("Cannot navigate to {}: {e}", result.project_label());
                None
            }
        }
    }

    fn publish(&self) {
        self.snapshots.send_if_modified(|current| {
            if *current == self.state {
                false
            } else {
                *current = self.state.clone();
                true
            }
        });
    }
}
