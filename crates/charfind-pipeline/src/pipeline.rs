//! The input pipeline: debounce, distinct-consecutive filtering and
//! switch-latest lookup dispatch, expressed as an explicit state
//! machine rather than stream combinators.
//!
//! Raw edits arrive on an unbounded channel. A value that survives the
//! debounce window unchanged and differs from the previously forwarded
//! value triggers exactly one lookup. Every lookup captures a
//! monotonically increasing sequence number when it is spawned; a
//! completion whose number is no longer the latest is discarded, so
//! the outcome stream always reflects the newest settled query and is
//! never reordered by a slow older request.
//!
//! A separate undebounced leg updates the control state on every
//! keystroke; clearing the field resets the control immediately, long
//! before the empty value settles.

use std::sync::Arc;
use std::time::Duration;

use charfind_core::control::ControlState;
use charfind_core::traits::Lookup;
use charfind_core::types::SearchOutcome;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Handle to a running pipeline.
///
/// [`SearchPipeline::shutdown`] closes the input channel and waits for
/// the worker to drain: a pending debounce window elapses and the final
/// in-flight lookup resolves before the outcome channel closes.
pub struct SearchPipeline {
    input_tx: mpsc::UnboundedSender<String>,
    control_rx: watch::Receiver<ControlState>,
    worker: JoinHandle<()>,
}

impl SearchPipeline {
    /// Spawn the pipeline worker.
    ///
    /// Returns the handle plus the outcome stream; control-state
    /// snapshots are read through [`SearchPipeline::control`].
    pub fn spawn<L>(
        lookup: Arc<L>,
        debounce: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SearchOutcome>)
    where
        L: Lookup + 'static,
    {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (control_tx, control_rx) = watch::channel(ControlState::pristine());
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(Worker {
            lookup,
            debounce,
            input_rx,
            control_tx,
            outcome_tx,
            pending: None,
            deadline: None,
            last_forwarded: None,
            seq: 0,
            inflight: None,
        }));
        (
            Self {
                input_tx,
                control_rx,
                worker,
            },
            outcome_rx,
        )
    }

    /// Feed one raw edit: the full field value after the keystroke.
    pub fn input(&self, raw: impl Into<String>) {
        // Can only fail after shutdown, which consumes the handle.
        let _ = self.input_tx.send(raw.into());
    }

    /// Snapshot stream of the field control state.
    pub fn control(&self) -> watch::Receiver<ControlState> {
        self.control_rx.clone()
    }

    /// Close the input channel and wait for the worker to drain.
    pub async fn shutdown(self) {
        let Self {
            input_tx,
            control_rx,
            worker,
        } = self;
        drop(input_tx);
        drop(control_rx);
        let _ = worker.await;
    }
}

struct Worker<L> {
    lookup: Arc<L>,
    debounce: Duration,
    input_rx: mpsc::UnboundedReceiver<String>,
    control_tx: watch::Sender<ControlState>,
    outcome_tx: mpsc::UnboundedSender<SearchOutcome>,
    /// Value currently waiting out the debounce window.
    pending: Option<String>,
    /// When the pending value settles; restarted on every keystroke.
    deadline: Option<Instant>,
    /// Last value forwarded past the distinct-consecutive filter.
    last_forwarded: Option<String>,
    /// Sequence number of the most recently dispatched lookup.
    seq: u64,
    /// Sequence number of the lookup whose result is still awaited.
    inflight: Option<u64>,
}

async fn run_worker<L>(mut worker: Worker<L>)
where
    L: Lookup + 'static,
{
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(u64, SearchOutcome)>();
    let mut input_open = true;
    loop {
        if !input_open && worker.deadline.is_none() && worker.inflight.is_none() {
            break;
        }
        tokio::select! {
            raw = worker.input_rx.recv(), if input_open => match raw {
                Some(raw) => worker.on_input(&raw),
                None => input_open = false,
            },
            () = sleep_until_deadline(worker.deadline), if worker.deadline.is_some() => {
                worker.on_settled(&done_tx);
            }
            Some((seq, outcome)) = done_rx.recv() => {
                worker.on_lookup_done(seq, outcome);
            }
        }
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

impl<L> Worker<L>
where
    L: Lookup + 'static,
{
    /// Undebounced leg: update the control on every keystroke (the
    /// empty-string reset rule lives in the transition) and restart
    /// the debounce window for the new value.
    fn on_input(&mut self, raw: &str) {
        self.control_tx
            .send_modify(|state| *state = state.apply_input(raw));
        self.pending = Some(raw.to_string());
        self.deadline = Some(Instant::now() + self.debounce);
    }

    /// The debounce window elapsed: forward the settled value unless
    /// it equals the previously forwarded one, then dispatch a lookup
    /// tagged with the next sequence number.
    fn on_settled(&mut self, done_tx: &mpsc::UnboundedSender<(u64, SearchOutcome)>) {
        self.deadline = None;
        let Some(value) = self.pending.take() else {
            return;
        };
        if self.last_forwarded.as_deref() == Some(value.as_str()) {
            tracing::debug!(value = %value, "settled value unchanged, skipping lookup");
            return;
        }
        self.last_forwarded = Some(value.clone());
        self.seq += 1;
        let seq = self.seq;
        self.inflight = Some(seq);
        let lookup = Arc::clone(&self.lookup);
        let done = done_tx.clone();
        tokio::spawn(async move {
            let outcome = lookup.search(&value).await;
            // The worker may already have moved on; it decides.
            let _ = done.send((seq, outcome));
        });
    }

    /// A lookup completed. Deliver it only if it is still the latest;
    /// anything older was superseded while in flight.
    fn on_lookup_done(&mut self, seq: u64, outcome: SearchOutcome) {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "discarding stale lookup result");
            return;
        }
        self.inflight = None;
        let _ = self.outcome_tx.send(outcome);
    }
}
