//! Panic capture through the logging front-end.
//!
//! The default panic hook reports to stderr only, which never reaches the
//! configured sinks or the remote export pipeline. This module replaces it
//! with a hook that records the panic as a single error-severity event and
//! then delegates to the previous hook, so the default report (and the
//! platform's post-hook behaviour) is preserved rather than suppressed.
//!
//! Rust's panic hook is process-wide and already covers every thread, so one
//! installation stands in for both a main-thread and a per-thread handler.
//! The hook holds no state of its own and may run concurrently from
//! independently panicking threads.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::PanicHookInfo;
use std::sync::Once;

static INSTALL: Once = Once::new();

/// Install the panic-recording hook, chaining the previously installed hook.
///
/// Idempotent: the hook is installed once per process, and later calls leave
/// the existing (equivalent) installation in place. Installing twice must not
/// chain the recorder onto itself, or one panic would be recorded twice.
pub fn install_panic_hook() {
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            record_panic(info);
            previous(info);
        }));
    });
}

/// Record one panic as a single error event. Must never panic itself.
fn record_panic(info: &PanicHookInfo<'_>) {
    let backtrace = Backtrace::capture();
    let (backtrace, note) = match backtrace.status() {
        BacktraceStatus::Captured => (Some(backtrace), None),
        BacktraceStatus::Disabled => {
            (None, Some("run with RUST_BACKTRACE=1 to capture backtraces"))
        }
        _ => (None, Some("backtraces are not supported on this platform")),
    };

    let thread = std::thread::current();
    let location = info.location().map(ToString::to_string);

    tracing::error!(
        panic.payload = payload_message(info.payload()),
        panic.location = location,
        panic.thread = thread.name().unwrap_or("<unnamed>"),
        panic.backtrace = backtrace.map(tracing::field::display),
        panic.note = note,
        "uncaught panic",
    );
}

/// Best-effort extraction of the human-readable panic message.
fn payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::{Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts error-level events and remembers their rendered fields.
    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                let mut rendered = String::new();
                let mut visitor = Render(&mut rendered);
                event.record(&mut visitor);
                self.events.lock().unwrap().push(rendered);
            }
        }
    }

    struct Render<'a>(&'a mut String);

    impl tracing::field::Visit for Render<'_> {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            use std::fmt::Write;
            let _ = write!(self.0, "{}={:?} ", field.name(), value);
        }
    }

    #[test]
    fn payload_message_handles_str_and_string() {
        let s: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(payload_message(s.as_ref()), "boom");

        let s: Box<dyn Any + Send> = Box::new(String::from("formatted boom"));
        assert_eq!(payload_message(s.as_ref()), "formatted boom");

        let s: Box<dyn Any + Send> = Box::new(17_u32);
        assert_eq!(payload_message(s.as_ref()), "<non-string panic payload>");
    }

    #[test]
    fn hook_records_exactly_one_error_event() {
        install_panic_hook();
        // A second install must not chain the recorder onto itself.
        install_panic_hook();

        let capture = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            let _ = std::panic::catch_unwind(|| panic!("boom"));
        });

        let events = capture.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("boom"));
        assert!(events[0].contains("panic.location"));
    }
}
