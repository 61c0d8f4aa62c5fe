#![forbid(unsafe_code)]

//! Diagnostic tracing integration tests.
//!
//! With the `tracing` feature, the engine emits trace/debug events at
//! transition commits and no-op aborts:
//!
//!   cargo test -p laneboard --features tracing --test tracing_tests
//!
//! Without the feature, the same call paths must run with no subscriber
//! interaction at all:
//!
//!   cargo test -p laneboard --test tracing_tests -- zero_overhead

use laneboard::{Board, DragEngine, Id};

#[cfg(feature = "tracing")]
mod capture {
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::Context;

    /// A tracing layer that records the target of every event it sees.
    pub struct EventCapture {
        pub targets: Arc<Mutex<Vec<String>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.targets
                .lock()
                .unwrap()
                .push(event.metadata().target().to_string());
        }
    }
}

#[cfg(feature = "tracing")]
fn captured_targets(run: impl FnOnce()) -> Vec<String> {
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::prelude::*;

    let targets = Arc::new(Mutex::new(Vec::new()));
    let layer = capture::EventCapture {
        targets: targets.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, run);

    let targets = targets.lock().unwrap();
    targets.clone()
}

#[cfg(feature = "tracing")]
#[test]
fn stale_identifier_emits_diagnostic() {
    let targets = captured_targets(|| {
        let mut engine = DragEngine::new(Board::seed("todo", "done", ["a", "b"]));
        engine.on_drag_over(&Id::new("ghost"), Some(&Id::new("done")));
    });
    assert!(
        targets.iter().any(|t| t.starts_with("laneboard")),
        "expected a laneboard diagnostic, got {targets:?}"
    );
}

#[cfg(feature = "tracing")]
#[test]
fn committed_move_emits_diagnostic() {
    let targets = captured_targets(|| {
        let mut engine = DragEngine::new(Board::seed("todo", "done", ["a", "b"]));
        engine.on_drag_start(Id::new("1"));
        engine.on_drag_over(&Id::new("1"), Some(&Id::new("done")));
    });
    assert!(
        targets.iter().any(|t| t.starts_with("laneboard")),
        "expected a laneboard diagnostic, got {targets:?}"
    );
}

#[test]
fn zero_overhead_lifecycle_without_feature() {
    // Same call sequence as the gated tests; must behave identically with
    // tracing compiled out.
    let mut engine = DragEngine::new(Board::seed("todo", "done", ["a", "b"]));
    engine.on_drag_start(Id::new("1"));
    engine.on_drag_over(&Id::new("ghost"), Some(&Id::new("done")));
    engine.on_drag_over(&Id::new("1"), Some(&Id::new("done")));
    engine.on_drag_end(&Id::new("1"), Some(&Id::new("done")));

    assert!(engine.active_id().is_none());
    assert_eq!(
        engine
            .board()
            .container(&Id::new("done"))
            .map(|lane| lane.len()),
        Some(1)
    );
}
