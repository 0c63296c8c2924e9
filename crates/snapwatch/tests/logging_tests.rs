//! Logging tests: capture tracing events emitted during detection

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use snapwatch::*;

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    message: String,
    field: Option<String>,
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    field: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "field" {
            self.field = Some(value.to_string());
        }
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Ok(mut events) = self.events.lock() {
            events.push(Captured {
                level: *event.metadata().level(),
                message: visitor.message,
                field: visitor.field,
            });
        }
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().map(|e| e.clone()).unwrap_or_default();
    captured
}

#[test]
fn test_pass_emits_debug_summary() {
    let events = capture(|| {
        let mut obj = ObservedObject::new().with_field("name", "Match 0");
        let mut cmp = SnapshotComparator::new();
        cmp.initialize(&obj).unwrap();
        obj.set("name", "Match 1");
        cmp.detect_changes(&obj).unwrap();
    });

    assert!(events
        .iter()
        .any(|e| e.level == Level::DEBUG && e.message == "comparator initialized"));
    assert!(events
        .iter()
        .any(|e| e.level == Level::DEBUG && e.message == "detection pass complete"));
    assert!(events.iter().all(|e| e.level != Level::TRACE));
}

#[test]
fn test_trace_context_emits_per_field_events() {
    let events = capture(|| {
        let mut obj = ObservedObject::new()
            .with_field("name", "Match 0")
            .with_field("playerNames", ListRef::default());
        let mut cmp = SnapshotComparator::with_context(DetectContext::with_trace());
        cmp.initialize(&obj).unwrap();
        obj.set("playerNames", ListRef::default());
        cmp.detect_changes(&obj).unwrap();
    });

    let traced: Vec<_> = events
        .iter()
        .filter(|e| e.level == Level::TRACE)
        .filter_map(|e| e.field.clone())
        .collect();
    assert_eq!(traced, vec!["playerNames".to_string()]);
}

#[test]
fn test_disconnected_receiver_warns() {
    let events = capture(|| {
        let mut obj = ObservedObject::new().with_field("round", 0i64);
        let mut watcher = Watcher::new(&obj).unwrap();
        let (tx, rx) = std::sync::mpsc::channel::<DirtySet>();
        watcher.bind_all(tx);
        drop(rx);
        obj.set("round", 1i64);
        watcher.check(&obj).unwrap();
    });

    assert!(events
        .iter()
        .any(|e| e.level == Level::WARN && e.message == "change receiver disconnected"));
}
