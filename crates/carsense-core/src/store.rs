// ── Reactive widget state ──
//
// Two watch-backed slots: the live entity-state snapshot and the
// resolved role mapping. Both are replaced wholesale via `send_modify`,
// so readers always see either the previous or the next complete value,
// never a half-written one. Last write wins on racing resolutions.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use crate::model::{EntityId, EntityState};
use crate::resolver::ResolvedEntities;

/// Snapshot-style store for everything the card reads while rendering.
///
/// All reads are synchronous; only the owning component writes each slot
/// (the host bridge writes states, the resolver writes the role mapping).
pub struct StateStore {
    states: watch::Sender<Arc<HashMap<EntityId, EntityState>>>,
    resolved: watch::Sender<Arc<ResolvedEntities>>,
}

impl StateStore {
    pub fn new() -> Self {
        let (states, _) = watch::channel(Arc::new(HashMap::new()));
        let (resolved, _) = watch::channel(Arc::new(ResolvedEntities::empty()));
        Self { states, resolved }
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Replace the full entity-state snapshot.
    pub fn apply_states<I>(&self, states: I)
    where
        I: IntoIterator<Item = (EntityId, EntityState)>,
    {
        let map: HashMap<EntityId, EntityState> = states.into_iter().collect();
        debug!(entities = map.len(), "state snapshot applied");
        self.states.send_modify(|snap| *snap = Arc::new(map));
    }

    /// Replace the resolved role mapping in one atomic write.
    pub fn set_resolved(&self, resolved: ResolvedEntities) {
        self.resolved.send_modify(|snap| *snap = Arc::new(resolved));
    }

    // ── Snapshot reads ───────────────────────────────────────────────

    /// The current resolved role mapping (cheap `Arc` clone).
    pub fn resolved(&self) -> Arc<ResolvedEntities> {
        self.resolved.borrow().clone()
    }

    /// Subscribe to resolved-mapping replacements.
    pub fn subscribe_resolved(&self) -> watch::Receiver<Arc<ResolvedEntities>> {
        self.resolved.subscribe()
    }

    /// Subscribe to state-snapshot replacements.
    pub fn subscribe_states(&self) -> watch::Receiver<Arc<HashMap<EntityId, EntityState>>> {
        self.states.subscribe()
    }

    // ── Per-entity reads (absent sentinel: `None`) ───────────────────

    /// The full state row for an entity. The placeholder (empty) id and
    /// unknown ids both read as absent.
    pub fn state(&self, id: &EntityId) -> Option<EntityState> {
        if id.is_empty() {
            return None;
        }
        self.states.borrow().get(id).cloned()
    }

    /// The raw state string.
    pub fn value(&self, id: &EntityId) -> Option<String> {
        self.state(id).map(|s| s.value)
    }

    /// Binary-sensor convenience: true iff the state is `"on"`.
    pub fn is_on(&self, id: &EntityId) -> bool {
        self.state(id).is_some_and(|s| s.is_on())
    }

    /// The state parsed as a number.
    pub fn numeric(&self, id: &EntityId) -> Option<f64> {
        self.state(id).and_then(|s| s.numeric())
    }

    /// The entity's unit of measurement, empty when unknown.
    pub fn unit(&self, id: &EntityId) -> String {
        self.state(id).map(|s| s.unit().to_owned()).unwrap_or_default()
    }

    /// The entity's icon attribute.
    pub fn icon(&self, id: &EntityId) -> Option<String> {
        self.state(id).and_then(|s| s.icon().map(str::to_owned))
    }

    /// When the entity last changed.
    pub fn last_changed(&self, id: &EntityId) -> Option<DateTime<Utc>> {
        self.state(id).and_then(|s| s.last_changed)
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
