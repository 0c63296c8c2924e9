//! The snapshot comparator: shallow dirty checking over named fields

use tracing::{debug, trace};

use crate::context::DetectContext;
use crate::dirty::{DirtySet, FieldChange};
use crate::error::{DetectError, Result};
use crate::object::Observable;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone)]
enum State {
    Uninitialized,
    Ready(Snapshot),
}

/// Shallow change detector bound to one observed object.
///
/// Every successful pass compares the object against the previous snapshot
/// and then replaces that snapshot, so two passes in a row with nothing
/// reassigned in between report nothing the second time.
///
/// A primitive field is dirty when its value differs. A composite field is
/// dirty only when it holds a different container than last time: appending
/// to a list in place goes unnoticed, while reassigning the field to a fresh
/// list with identical contents does not.
///
/// # Example
///
/// ```
/// use snapwatch::{ListRef, ObservedObject, SnapshotComparator};
///
/// let players = ListRef::default();
/// let mut obj = ObservedObject::new()
///     .with_field("name", "Match 0")
///     .with_field("playerNames", players.clone());
///
/// let mut cmp = SnapshotComparator::new();
/// cmp.initialize(&obj).unwrap();
///
/// players.push("Bob0");
/// assert!(cmp.detect_changes(&obj).unwrap().is_empty());
///
/// obj.set("playerNames", players.deep_clone());
/// assert!(cmp.detect_changes(&obj).unwrap().contains("playerNames"));
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotComparator {
    state: State,
    context: DetectContext,
    passes: u64,
}

impl Default for SnapshotComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotComparator {
    /// Create an uninitialized comparator with default settings.
    pub fn new() -> Self {
        Self::with_context(DetectContext::default())
    }

    /// Create an uninitialized comparator with a custom context.
    pub fn with_context(context: DetectContext) -> Self {
        Self {
            state: State::Uninitialized,
            context,
            passes: 0,
        }
    }

    /// Record the baseline snapshot of `obj`.
    ///
    /// Calling this again re-baselines, which is also how a caller adopts a
    /// changed field set.
    pub fn initialize<O: Observable + ?Sized>(&mut self, obj: &O) -> Result<()> {
        let snapshot = Snapshot::capture(obj)?;
        debug!(fields = snapshot.len(), "comparator initialized");
        self.state = State::Ready(snapshot);
        Ok(())
    }

    /// Run one detection pass and return the names of the dirty fields.
    pub fn detect_changes<O: Observable + ?Sized>(&mut self, obj: &O) -> Result<DirtySet> {
        Ok(self
            .detect_field_changes(obj)?
            .into_iter()
            .map(|change| change.field)
            .collect())
    }

    /// Run one detection pass and report whether anything was dirty.
    pub fn is_any_dirty<O: Observable + ?Sized>(&mut self, obj: &O) -> Result<bool> {
        Ok(!self.detect_changes(obj)?.is_empty())
    }

    /// Run one detection pass, returning previous and current values for
    /// each dirty field in schema order.
    ///
    /// On error the stored snapshot is left as it was.
    pub fn detect_field_changes<O: Observable + ?Sized>(
        &mut self,
        obj: &O,
    ) -> Result<Vec<FieldChange>> {
        let previous = match &self.state {
            State::Uninitialized => return Err(DetectError::UninitializedState),
            State::Ready(snapshot) => snapshot,
        };

        let (missing, unexpected) = previous.schema().diff(&obj.schema());
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(DetectError::SchemaMismatch {
                missing,
                unexpected,
            });
        }

        let current = Snapshot::capture(obj)?;
        let nan = self.context.nan_policy;
        let mut changes = Vec::new();

        for (name, before) in previous.iter() {
            let Some(now) = current.get(name) else {
                return Err(DetectError::missing(vec![name.to_string()]));
            };
            if before.identical_under(now, nan) {
                continue;
            }
            if self.context.trace {
                trace!(
                    field = name,
                    from = before.type_name(),
                    to = now.type_name(),
                    "field dirty"
                );
            }
            changes.push(FieldChange {
                field: name.to_string(),
                previous: before.clone(),
                current: now.clone(),
            });
        }

        self.passes += 1;
        debug!(
            pass = self.passes,
            fields = current.len(),
            dirty = changes.len(),
            "detection pass complete"
        );
        self.state = State::Ready(current);
        Ok(changes)
    }

    /// Whether a baseline snapshot has been recorded.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// The snapshot the next pass will compare against.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match &self.state {
            State::Uninitialized => None,
            State::Ready(snapshot) => Some(snapshot),
        }
    }

    /// Number of completed detection passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// The context this comparator runs with.
    pub fn context(&self) -> &DetectContext {
        &self.context
    }
}
