//! Watchers: detection plus per-binding notification

use std::sync::mpsc::Sender;

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::comparator::SnapshotComparator;
use crate::context::DetectContext;
use crate::dirty::DirtySet;
use crate::error::{DetectError, Result};
use crate::object::Observable;
use crate::schema::FieldName;

/// Something that reacts to dirty fields.
pub trait ChangeListener {
    /// Called with the dirty fields this listener's binding watches.
    fn on_change(&mut self, changed: &DirtySet);
}

impl<F> ChangeListener for F
where
    F: FnMut(&DirtySet),
{
    fn on_change(&mut self, changed: &DirtySet) {
        self(changed)
    }
}

/// Forwards each notification over a channel.
///
/// A dropped receiver is logged and otherwise ignored.
impl ChangeListener for Sender<DirtySet> {
    fn on_change(&mut self, changed: &DirtySet) {
        if self.send(changed.clone()).is_err() {
            warn!(fields = %changed, "change receiver disconnected");
        }
    }
}

/// Handle returned by [`Watcher::bind`], used to unbind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

enum Scope {
    All,
    Fields(Vec<FieldName>),
}

struct Binding {
    id: BindingId,
    scope: Scope,
    listener: Box<dyn ChangeListener>,
}

/// A comparator plus the bindings that react to it.
///
/// Bindings are granular: each one names the fields it displays and is only
/// told about those. A pass that dirties nothing a binding watches leaves
/// that binding alone.
///
/// # Example
///
/// ```
/// use std::sync::mpsc;
/// use snapwatch::{DirtySet, ObservedObject, Watcher};
///
/// let mut obj = ObservedObject::new()
///     .with_field("name", "Match 0")
///     .with_field("round", 1i64);
///
/// let mut watcher = Watcher::new(&obj).unwrap();
/// let (tx, rx) = mpsc::channel::<DirtySet>();
/// watcher.bind(["name"], tx).unwrap();
///
/// obj.set("round", 2i64);
/// watcher.check(&obj).unwrap();
/// assert!(rx.try_recv().is_err());
///
/// obj.set("name", "Match 1");
/// watcher.check(&obj).unwrap();
/// assert!(rx.try_recv().unwrap().contains("name"));
/// ```
pub struct Watcher {
    comparator: SnapshotComparator,
    bindings: Vec<Binding>,
    next_id: u64,
}

impl Watcher {
    /// Create a watcher initialized from `obj`.
    pub fn new<O: Observable + ?Sized>(obj: &O) -> Result<Self> {
        Self::with_context(obj, DetectContext::default())
    }

    /// Create a watcher with a custom detection context.
    pub fn with_context<O: Observable + ?Sized>(obj: &O, context: DetectContext) -> Result<Self> {
        let mut comparator = SnapshotComparator::with_context(context);
        comparator.initialize(obj)?;
        Ok(Self {
            comparator,
            bindings: Vec::new(),
            next_id: 0,
        })
    }

    /// Bind a listener to specific fields.
    ///
    /// Every field must be tracked by the current snapshot, and at least one
    /// is required; use [`Watcher::bind_all`] to watch everything. Repeated
    /// names are kept once.
    pub fn bind<I, S, L>(&mut self, fields: I, listener: L) -> Result<BindingId>
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldName>,
        L: ChangeListener + 'static,
    {
        let fields: IndexSet<FieldName> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(DetectError::EmptyBinding);
        }
        if let Some(snapshot) = self.comparator.snapshot() {
            if let Some(unknown) = fields.iter().find(|f| !snapshot.schema().contains(f)) {
                return Err(DetectError::UnknownField(unknown.clone()));
            }
        }
        Ok(self.push_binding(
            Scope::Fields(fields.into_iter().collect()),
            Box::new(listener),
        ))
    }

    /// Bind a listener to every field.
    pub fn bind_all<L>(&mut self, listener: L) -> BindingId
    where
        L: ChangeListener + 'static,
    {
        self.push_binding(Scope::All, Box::new(listener))
    }

    /// Remove a binding. Returns false if it was already gone.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        self.bindings.len() != before
    }

    /// Number of live bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Run one detection pass and notify the affected bindings.
    ///
    /// Returns the full dirty set regardless of who was notified.
    pub fn check<O: Observable + ?Sized>(&mut self, obj: &O) -> Result<DirtySet> {
        let dirty = self.comparator.detect_changes(obj)?;
        if dirty.is_empty() {
            return Ok(dirty);
        }

        let mut notified = 0usize;
        for binding in &mut self.bindings {
            let relevant = match &binding.scope {
                Scope::All => dirty.clone(),
                Scope::Fields(fields) => dirty.restrict_to(fields.iter().map(String::as_str)),
            };
            if !relevant.is_empty() {
                binding.listener.on_change(&relevant);
                notified += 1;
            }
        }
        debug!(dirty = %dirty, notified, "bindings notified");
        Ok(dirty)
    }

    /// The underlying comparator.
    pub fn comparator(&self) -> &SnapshotComparator {
        &self.comparator
    }

    fn push_binding(&mut self, scope: Scope, listener: Box<dyn ChangeListener>) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding {
            id,
            scope,
            listener,
        });
        id
    }
}
