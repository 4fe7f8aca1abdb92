//! The task list store: collection ownership, derived tally, and event
//! fan-out.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::list::{
    domain::{ListEvent, LoadedTask, NewTask, RecordChange, RecordId, TaskRecord},
    ports::{RemoteTaskApi, TaskDraft},
};

/// Typed observer of list events.
type EventObserver = Box<dyn FnMut(&ListEvent)>;

/// Normalized outward change handler registered by the view layer.
type ChangeHandler = Box<dyn FnMut()>;

/// Ordered collection of task records with a derived incomplete tally.
///
/// The store is the single writer of its state: records are mutated only
/// through store methods, every record change funnels into one dispatch
/// path, and each resulting event is broadcast exactly once. Outward
/// handlers receive no payload; they re-query the store for current state
/// after the mutating call returns.
///
/// The model is single-threaded and event-driven. The only suspension
/// point is the remote call inside [`add_item`](Self::add_item); because
/// the store is mutably borrowed across that await, no other store method
/// can interleave with an in-flight addition.
pub struct TaskListStore<R: RemoteTaskApi> {
    items: Vec<TaskRecord>,
    next_local_id: u64,
    incomplete_count: usize,
    remote: Arc<R>,
    observers: Vec<EventObserver>,
    change_handlers: Vec<ChangeHandler>,
}

impl<R: RemoteTaskApi> TaskListStore<R> {
    /// Creates an empty store backed by the given remote API.
    #[must_use]
    pub fn new(remote: Arc<R>) -> Self {
        Self::with_records(remote, Vec::new())
    }

    /// Creates a store seeded with already-materialised records.
    ///
    /// Records are trusted as loaded: identifiers are not re-validated
    /// for uniqueness. The incomplete tally and the provisional-id
    /// counter are seeded from the supplied records.
    #[must_use]
    pub fn with_records(remote: Arc<R>, records: Vec<TaskRecord>) -> Self {
        let mut store = Self {
            items: Vec::with_capacity(records.len()),
            next_local_id: 0,
            incomplete_count: 0,
            remote,
            observers: Vec::new(),
            change_handlers: Vec::new(),
        };
        for record in records {
            store.wire_record(record);
        }
        store
    }

    /// Returns the live ordered sequence of records.
    ///
    /// Insertion order is display order. The slice borrows the store's
    /// own collection; there is no defensive copy.
    #[must_use]
    pub fn items(&self) -> &[TaskRecord] {
        &self.items
    }

    /// Returns the number of records whose completion flag is unset.
    #[must_use]
    pub const fn incomplete_count(&self) -> usize {
        self.incomplete_count
    }

    /// Returns the number of records in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the record with the given identifier, if present.
    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&TaskRecord> {
        self.index_of(id).and_then(|idx| self.items.get(idx))
    }

    /// Registers a typed observer for every list event.
    ///
    /// Teardown listeners subscribe here to see
    /// [`ListEvent::ItemRemoving`] before a record leaves the list.
    pub fn on_event(&mut self, observer: impl FnMut(&ListEvent) + 'static) -> &mut Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Registers the normalized outward change notification.
    ///
    /// The handler runs, without payload, after a record is added or
    /// removed, after a completion flag toggles, and after any other
    /// field edit. Whatever context the handler needs it captures itself.
    pub fn on_change(&mut self, handler: impl FnMut() + 'static) -> &mut Self {
        self.change_handlers.push(Box::new(handler));
        self
    }

    /// Creates a task locally and synchronises it with the remote
    /// service.
    ///
    /// The record is visible in [`items`](Self::items) and counted before
    /// the remote call resolves, and [`ListEvent::ItemAdded`] fires at
    /// insertion time. On success the identifier is patched to the
    /// server-assigned value and [`ListEvent::ItemsChanged`] fires; no
    /// second `ItemAdded` is emitted. On failure the record keeps its
    /// provisional identifier: no rollback, no retry.
    ///
    /// Returns the record's identifier — the confirmed one when the
    /// remote call succeeded, the provisional one otherwise.
    pub async fn add_item(&mut self, new: NewTask) -> RecordId {
        let provisional = RecordId::new(self.next_local_id);
        let record = TaskRecord::from_new(provisional, new);
        let draft = TaskDraft {
            text: record.text().to_owned(),
            is_ready: record.is_ready(),
        };
        self.wire_record(record);
        debug!(id = %provisional, "task added locally");
        self.emit(&ListEvent::ItemAdded(provisional));

        let remote = Arc::clone(&self.remote);
        match remote.add_task(draft).await {
            Ok(response) => {
                self.patch_id(provisional, response.id);
                response.id
            }
            Err(err) => {
                warn!(
                    id = %provisional,
                    error = %err,
                    "remote add failed; record stays provisional"
                );
                provisional
            }
        }
    }

    /// Appends a record reconstructed from already-persisted fields.
    ///
    /// The identifier is trusted and no remote call is made;
    /// [`ListEvent::ItemAdded`] fires synchronously.
    pub fn add_loaded(&mut self, loaded: LoadedTask) -> &mut Self {
        let record = TaskRecord::from_loaded(loaded);
        let id = record.id();
        self.wire_record(record);
        debug!(id = %id, "persisted task loaded");
        self.emit(&ListEvent::ItemAdded(id));
        self
    }

    /// Removes the record with the given identifier.
    ///
    /// Emits [`ListEvent::ItemRemoving`] before the record leaves the
    /// list and [`ListEvent::ItemRemoved`] after. A missing identifier is
    /// a silent no-op; removal is idempotent by contract.
    pub fn remove_item(&mut self, id: RecordId) -> &mut Self {
        let Some(idx) = self.index_of(id) else {
            debug!(id = %id, "remove for an unknown identifier ignored");
            return self;
        };
        let was_incomplete = self.items.get(idx).is_some_and(|record| !record.is_ready());
        if was_incomplete {
            self.tally_decrement();
        }
        self.emit(&ListEvent::ItemRemoving(id));
        self.items.remove(idx);
        debug!(id = %id, "task removed");
        self.emit(&ListEvent::ItemRemoved);
        self
    }

    /// Removes every record whose completion flag is set.
    ///
    /// Operates over a snapshot of the completed identifiers taken before
    /// iterating, so in-loop removal cannot corrupt the traversal. Order
    /// of the remaining records is preserved; with nothing completed this
    /// is a no-op.
    pub fn clear_completed(&mut self) -> &mut Self {
        let completed: Vec<RecordId> = self
            .items
            .iter()
            .filter(|record| record.is_ready())
            .map(TaskRecord::id)
            .collect();
        for id in completed {
            self.remove_item(id);
        }
        self
    }

    /// Sets a record's display text.
    ///
    /// An unknown identifier or an unchanged value is a silent no-op.
    pub fn set_text(&mut self, id: RecordId, text: impl Into<String>) -> &mut Self {
        let new_text = text.into();
        let Some(idx) = self.index_of(id) else {
            return self;
        };
        let Some(record) = self.items.get_mut(idx) else {
            return self;
        };
        if record.text() == new_text {
            return self;
        }
        record.set_text(new_text);
        self.apply(id, RecordChange::FieldEdited);
        self
    }

    /// Sets a record's completion flag.
    ///
    /// An unknown identifier or an unchanged flag is a silent no-op, so
    /// the tally never moves twice for one logical toggle.
    pub fn set_ready(&mut self, id: RecordId, ready: bool) -> &mut Self {
        let Some(idx) = self.index_of(id) else {
            return self;
        };
        let Some(record) = self.items.get_mut(idx) else {
            return self;
        };
        if record.is_ready() == ready {
            return self;
        }
        record.set_ready(ready);
        self.apply(id, RecordChange::CompletionToggled { now_ready: ready });
        self
    }

    /// Marks a record deleted, removing it through the dispatch path.
    ///
    /// An unknown identifier is a silent no-op.
    pub fn mark_deleted(&mut self, id: RecordId) -> &mut Self {
        if self.index_of(id).is_none() {
            return self;
        }
        self.apply(id, RecordChange::Deleted);
        self
    }

    /// Shared insertion path for both creation origins.
    ///
    /// Counts the record into the incomplete tally, keeps the provisional
    /// counter ahead of trusted identifiers, and appends in display
    /// order.
    fn wire_record(&mut self, record: TaskRecord) {
        if !record.is_ready() {
            self.incomplete_count += 1;
        }
        self.reserve_past(record.id());
        self.items.push(record);
    }

    /// Advances the provisional counter past the given identifier.
    fn reserve_past(&mut self, id: RecordId) {
        self.next_local_id = self.next_local_id.max(id.value().saturating_add(1));
    }

    /// Replaces a provisional identifier with the server-assigned one.
    ///
    /// Fields already displayed are untouched. A miss degrades to a
    /// logged no-op, in line with the store's silent-failure policy.
    fn patch_id(&mut self, provisional: RecordId, confirmed: RecordId) {
        let Some(idx) = self.index_of(provisional) else {
            debug!(id = %provisional, "id patch for a record no longer present");
            return;
        };
        if let Some(record) = self.items.get_mut(idx) {
            record.set_id(confirmed);
        }
        self.reserve_past(confirmed);
        debug!(provisional = %provisional, confirmed = %confirmed, "task id confirmed");
        self.emit(&ListEvent::ItemsChanged);
    }

    /// Locates a record by identifier, scanning from the end of the list.
    ///
    /// Last-inserted-first order only matters if duplicate identifiers
    /// ever slip in; the uniqueness invariant makes the direction
    /// unobservable.
    fn index_of(&self, id: RecordId) -> Option<usize> {
        self.items.iter().rposition(|record| record.id() == id)
    }

    /// Routes a record change to its reaction.
    fn apply(&mut self, id: RecordId, change: RecordChange) {
        match change {
            RecordChange::CompletionToggled { now_ready } => {
                self.react_completion_toggled(now_ready);
            }
            RecordChange::Deleted => self.react_deleted(id),
            RecordChange::FieldEdited => self.react_field_edited(),
        }
    }

    /// Reaction to a completion toggle: moves the tally one step, then
    /// broadcasts the content change.
    fn react_completion_toggled(&mut self, now_ready: bool) {
        if now_ready {
            self.tally_decrement();
        } else {
            self.incomplete_count += 1;
        }
        self.emit(&ListEvent::ItemsChanged);
    }

    /// Reaction to a deletion marker: runs the removal path, which
    /// adjusts the tally itself, then broadcasts the content change.
    fn react_deleted(&mut self, id: RecordId) {
        self.remove_item(id);
        self.emit(&ListEvent::ItemsChanged);
    }

    /// Reaction to any other field edit: broadcast only.
    fn react_field_edited(&mut self) {
        self.emit(&ListEvent::ItemsChanged);
    }

    /// Decrements the incomplete tally, guarding the zero floor.
    fn tally_decrement(&mut self) {
        if self.incomplete_count > 0 {
            self.incomplete_count -= 1;
        }
    }

    /// Broadcasts an event to the typed observers and, for outward-facing
    /// kinds, to the normalized change handlers.
    ///
    /// Every event flows through here exactly once.
    fn emit(&mut self, event: &ListEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
        if event.is_outward() {
            for handler in &mut self.change_handlers {
                handler();
            }
        }
    }
}
