//! Events emitted with the `tracing` feature.
//!
//! Run with: cargo nextest run --package envbind --features tracing tracing_events

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use envbind::{Binder, EnvBind, MapProvider};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Debug, Default)]
struct Captured {
    level: Option<Level>,
    message: String,
    fields: Vec<(String, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Visit for Captured {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        let rendered = format!("{value:?}");

        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.fields.push((field.name().to_string(), rendered));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = Captured {
            level: Some(*event.metadata().level()),
            ..Captured::default()
        };
        event.record(&mut captured);
        self.events.lock().unwrap().push(captured);
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());

    tracing::subscriber::with_default(subscriber, f);

    std::mem::take(&mut *recorder.events.lock().unwrap())
}

#[derive(Debug, Default, EnvBind)]
struct Db {
    #[env(var = "PASSWORD")]
    password: String,

    #[env(var = "POOL", default = "8")]
    pool: u8,
}

#[derive(Debug, Default, EnvBind)]
struct App {
    #[env(var = "NAME")]
    name: String,

    #[env(prefix = "DB_")]
    db: Db,
}

#[test]
fn test_bind_emits_debug_event() {
    let provider = MapProvider::new()
        .with("APP_NAME", "svc")
        .with("APP_DB_PASSWORD", "hunter2");

    let events = capture(|| {
        let mut app = App::default();
        Binder::with_prefix("APP_")
            .parse_from(&provider, &mut app)
            .unwrap();
    });

    let start = events
        .iter()
        .find(|e| e.message == "binding configuration")
        .expect("bind start event");

    assert_eq!(start.level, Some(Level::DEBUG));
    assert_eq!(start.field("prefix"), Some("APP_"));
    assert_eq!(start.field("provider"), Some("map"));
}

#[test]
fn test_resolution_events_name_variables() {
    let provider = MapProvider::new()
        .with("APP_NAME", "svc")
        .with("APP_DB_PASSWORD", "hunter2");

    let events = capture(|| {
        let mut app = App::default();
        Binder::with_prefix("APP_")
            .parse_from(&provider, &mut app)
            .unwrap();
    });

    let resolved: Vec<&Captured> = events
        .iter()
        .filter(|e| e.message == "resolved variable")
        .collect();
    let vars: Vec<&str> = resolved.iter().filter_map(|e| e.field("var")).collect();

    assert_eq!(vars, ["APP_NAME", "APP_DB_PASSWORD", "APP_DB_POOL"]);
    assert!(resolved.iter().all(|e| e.level == Some(Level::TRACE)));
    assert_eq!(resolved[2].field("from_default"), Some("true"));
    assert_eq!(resolved[0].field("from_default"), Some("false"));

    let group = events
        .iter()
        .find(|e| e.message == "entering nested group")
        .expect("nested group event");
    assert_eq!(group.field("prefix"), Some("APP_DB_"));
}

#[test]
fn test_values_are_never_logged() {
    let provider = MapProvider::new()
        .with("APP_NAME", "svc")
        .with("APP_DB_PASSWORD", "hunter2");

    let events = capture(|| {
        let mut app = App::default();
        Binder::with_prefix("APP_")
            .parse_from(&provider, &mut app)
            .unwrap();
    });

    assert!(!events.is_empty());

    for event in &events {
        for (key, value) in &event.fields {
            assert!(!value.contains("hunter2"), "{key} leaked a value");
        }
    }
}
