//! Shared test utilities used across grafo crates.

pub mod tracing {
    //! A `tracing` layer that keeps closed spans and emitted events so tests
    //! can assert on instrumentation by span name and event message.
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Field values keyed by field name, rendered the way a formatter would
    /// print them (strings unquoted, `%` values via `Display`).
    pub type Fields = BTreeMap<&'static str, String>;

    /// Captures spans when they close and events as they are emitted.
    ///
    /// Clones share one log, so a test keeps a clone while the subscriber owns
    /// the other.
    ///
    /// ```
    /// use grafo_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("grafo.demo", vertices = 3).entered();
    ///     tracing::info!(weight = 7, "accepted edge");
    /// });
    ///
    /// let span = layer.span_named("grafo.demo").expect("span closed");
    /// assert_eq!(span.field("vertices"), Some("3"));
    /// assert_eq!(layer.events_with_message("accepted edge")[0].field("weight"), Some("7"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        log: Arc<Mutex<Log>>,
    }

    #[derive(Default)]
    struct Log {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    impl RecordingLayer {
        fn log(&self) -> MutexGuard<'_, Log> {
            self.log.lock().expect("recording log poisoned")
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.log().spans.iter().find(|span| span.name == name).cloned()
        }

        /// Every recorded event in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.log().events.clone()
        }

        /// Events whose `message` equals `message`, in emission order.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            self.filter_events(|event| event.message() == Some(message))
        }

        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            self.filter_events(|event| event.level == level)
        }

        fn filter_events(&self, keep: impl Fn(&EventRecord) -> bool) -> Vec<EventRecord> {
            self.log()
                .events
                .iter()
                .filter(|event| keep(event))
                .cloned()
                .collect()
        }
    }

    /// A closed span with every field recorded at creation or later through
    /// `Span::record`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        pub name: &'static str,
        pub fields: Fields,
    }

    impl SpanRecord {
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        pub level: Level,
        pub fields: Fields,
    }

    impl EventRecord {
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }

        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut record = SpanRecord {
                name: attrs.metadata().name(),
                fields: Fields::new(),
            };
            attrs.record(&mut FieldCollector(&mut record.fields));
            span.extensions_mut().insert(record);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(record) = span.extensions_mut().get_mut::<SpanRecord>() {
                values.record(&mut FieldCollector(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(record) = span.extensions_mut().remove::<SpanRecord>() else {
                return;
            };
            self.log().spans.push(record);
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldCollector(&mut fields));
            self.log().events.push(EventRecord {
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    struct FieldCollector<'a>(&'a mut Fields);

    impl Visit for FieldCollector<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name(), value.to_owned());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name(), format!("{value:?}"));
        }
    }

}

pub mod ci;
