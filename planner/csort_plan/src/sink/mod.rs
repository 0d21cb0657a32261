//! Where planned pickups go.
//!
//! The sink owns transmission: batching, throttling, confirmation and retry
//! are its business, not the planner's. The one thing a sink must never do is
//! reorder or drop events, because every pickup's effect depends on what the
//! cursor holds after the previous one.

/// Why the planner asks the sink to send what it has queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerType {
    /// A batch that must be confirmed by the remote side before anything
    /// queued after it is sent (stack consolidation).
    GuiConfirm,
    /// Periodic send; the end of a sort invocation.
    Tick,
}

/// Ordered consumer of pickup events.
pub trait InteractionSink<E> {
    /// Queue one event.
    fn push(&mut self, event: E);

    /// Queue several events as one unit, in order.
    fn push_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        for event in events {
            self.push(event);
        }
    }

    /// Send everything queued so far.
    fn trigger_send(&mut self, trigger: TriggerType);
}

/// One entry of a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Emitted<E> {
    Event(E),
    Trigger(TriggerType),
}

/// Sink that records everything it is given, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingSink<E> {
    entries: Vec<Emitted<E>>,
}

impl<E> RecordingSink<E> {
    pub fn new() -> Self {
        RecordingSink {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[Emitted<E>] {
        &self.entries
    }

    /// Events only, skipping triggers.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().filter_map(|entry| match entry {
            Emitted::Event(event) => Some(event),
            Emitted::Trigger(_) => None,
        })
    }

    pub fn triggers(&self) -> impl Iterator<Item = TriggerType> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            Emitted::Trigger(trigger) => Some(*trigger),
            Emitted::Event(_) => None,
        })
    }
}

impl<E> Default for RecordingSink<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InteractionSink<E> for RecordingSink<E> {
    fn push(&mut self, event: E) {
        self.entries.push(Emitted::Event(event));
    }

    fn trigger_send(&mut self, trigger: TriggerType) {
        self.entries.push(Emitted::Trigger(trigger));
    }
}

/// Events sent together, and what sent them.
///
/// `trigger` is `None` for a trailing batch nobody flushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch<E> {
    pub events: Vec<E>,
    pub trigger: Option<TriggerType>,
}

/// Sink that groups events into the batches a transport would send.
#[derive(Clone, Debug)]
pub struct InteractionQueue<E> {
    pending: Vec<E>,
    batches: Vec<Batch<E>>,
}

impl<E> InteractionQueue<E> {
    pub fn new() -> Self {
        InteractionQueue {
            pending: Vec::new(),
            batches: Vec::new(),
        }
    }

    /// Events queued but not yet sent.
    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    /// Batches sent so far.
    pub fn batches(&self) -> &[Batch<E>] {
        &self.batches
    }

    /// Close the queue, turning unsent events into a final untriggered batch.
    pub fn into_batches(mut self) -> Vec<Batch<E>> {
        if !self.pending.is_empty() {
            self.batches.push(Batch {
                events: std::mem::take(&mut self.pending),
                trigger: None,
            });
        }
        self.batches
    }
}

impl<E> Default for InteractionQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InteractionSink<E> for InteractionQueue<E> {
    fn push(&mut self, event: E) {
        self.pending.push(event);
    }

    fn trigger_send(&mut self, trigger: TriggerType) {
        if self.pending.is_empty() {
            return;
        }
        tracing::debug!(events = self.pending.len(), ?trigger, "sending batch");
        self.batches.push(Batch {
            events: std::mem::take(&mut self.pending),
            trigger: Some(trigger),
        });
    }
}
