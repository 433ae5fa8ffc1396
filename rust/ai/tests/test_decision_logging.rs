use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use calpoker_ai::config::load_weights;
use calpoker_ai::discard::best_discard;
use calpoker_engine::cards::parse_cards;
use calpoker_engine::selector::select_best_cards;
use serial_test::serial;
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, Registry};

#[derive(Debug, Clone)]
struct LogEntry {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct Captured {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Captured {
    fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    fn find(&self, message: &str) -> Option<LogEntry> {
        self.entries().into_iter().find(|e| e.message == message)
    }
}

struct CaptureLayer<S> {
    captured: Captured,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for CaptureLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.captured.entries.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Captured) {
    let captured = Captured::default();
    let layer = CaptureLayer::<Registry> {
        captured: captured.clone(),
        _phantom: PhantomData,
    };
    let registry = Registry::default().with(layer);
    let out = tracing::subscriber::with_default(registry, f);
    (out, captured)
}

fn field<'a>(entry: &'a LogEntry, name: &str) -> Option<&'a str> {
    entry
        .fields
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn discard_decision_is_logged_with_indices_and_score() {
    let pool = parse_cards("7c 2d 7h 9s 7s 3c 4h Jd").unwrap();
    let (choice, captured) = capture(|| best_discard(&pool).unwrap());

    let entry = captured.find("chose discards").expect("decision logged");
    assert_eq!(entry.level, Level::DEBUG);
    assert_eq!(field(&entry, "discard"), Some("[1, 3, 5, 6]"));
    assert_eq!(field(&entry, "keep"), Some("[0, 2, 4, 7]"));
    assert_eq!(field(&entry, "score"), Some("1118"));
    assert_eq!(choice.indices(), &[1, 3, 5, 6]);

    let scored = captured
        .entries()
        .into_iter()
        .filter(|e| e.level == Level::TRACE && e.message == "scored keep set")
        .count();
    assert_eq!(scored, 70);
}

#[test]
fn selection_is_logged() {
    let pool = parse_cards("5d 5c 6d Tc 9h 5h 3s").unwrap();
    let (_, captured) = capture(|| select_best_cards(&pool, 5).unwrap());
    let entry = captured.find("selected best hand").expect("selection logged");
    assert_eq!(entry.level, Level::DEBUG);
    assert_eq!(field(&entry, "indices"), Some("[0, 1, 3, 4, 5]"));
}

#[test]
#[serial]
fn rejected_weight_is_warned() {
    unsafe {
        std::env::remove_var(calpoker_ai::config::WEIGHTS_PATH_VAR);
        std::env::set_var("CALPOKER_AI_THREE_SUITED_BONUS", "many");
    }
    let (result, captured) = capture(load_weights);
    unsafe {
        std::env::remove_var("CALPOKER_AI_THREE_SUITED_BONUS");
    }
    assert!(result.is_err());
    let warned = captured.entries().into_iter().any(|e| {
        e.level == Level::WARN
            && field(&e, "var").is_some_and(|v| v.contains("CALPOKER_AI_THREE_SUITED_BONUS"))
    });
    assert!(warned);
}
