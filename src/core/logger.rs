use std::fmt;
use std::fmt::{Display, Formatter};
use serde_json::{Map, Value};
use crate::core::context::RequestContext;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Level {
    Info,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

// Field is a single structured key/value attached to a diagnostic event
#[derive(Debug, PartialEq, Clone)]
pub struct Field {
    pub key: &'static str,
    pub value: Value,
}

impl Field {
    pub fn string(key: &'static str, value: &str) -> Self {
        Field { key, value: Value::String(value.to_string()) }
    }

    pub fn int(key: &'static str, value: i64) -> Self {
        Field { key, value: Value::from(value) }
    }
}

// Logger is the diagnostic capability injected into the service. Calls are
// fire-and-forget, nothing is returned to the caller.
pub trait Logger: Sync + Send {
    fn log(&self, ctx: &RequestContext, level: Level, message: &str, fields: &[Field]);

    fn info(&self, ctx: &RequestContext, message: &str, fields: &[Field]) {
        self.log(ctx, Level::Info, message, fields)
    }

    fn error(&self, ctx: &RequestContext, message: &str, fields: &[Field]) {
        self.log(ctx, Level::Error, message, fields)
    }
}

// TracingLogger forwards diagnostic events to the tracing subscriber installed by the binary
#[derive(Debug, Default, Clone)]
pub struct TracingLogger {}

impl TracingLogger {
    pub fn new() -> Self {
        Self {}
    }
}

impl Logger for TracingLogger {
    fn log(&self, ctx: &RequestContext, level: Level, message: &str, fields: &[Field]) {
        let fields = Value::Object(fields.iter()
            .map(|f| (f.key.to_string(), f.value.clone()))
            .collect::<Map<String, Value>>());
        match level {
            Level::Info => {
                tracing::info!(request_id = ctx.request_id(), fields = %fields, "{}", message);
            }
            Level::Error => {
                tracing::error!(request_id = ctx.request_id(), fields = %fields, "{}", message);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;
    use crate::core::context::RequestContext;
    use crate::core::logger::{Field, Level, Logger};

    #[derive(Debug, PartialEq, Clone)]
    pub(crate) struct LogEvent {
        pub request_id: String,
        pub level: Level,
        pub message: String,
        pub fields: Vec<Field>,
    }

    // RecordingLogger keeps every event in memory so tests can assert on them
    #[derive(Debug, Default)]
    pub(crate) struct RecordingLogger {
        events: Mutex<Vec<LogEvent>>,
    }

    impl RecordingLogger {
        pub(crate) fn events(&self) -> Vec<LogEvent> {
            self.events.lock().expect("log lock").clone()
        }

        pub(crate) fn events_at(&self, level: Level) -> Vec<LogEvent> {
            self.events().into_iter().filter(|e| e.level == level).collect()
        }
    }

    impl Logger for RecordingLogger {
        fn log(&self, ctx: &RequestContext, level: Level, message: &str, fields: &[Field]) {
            self.events.lock().expect("log lock").push(LogEvent {
                request_id: ctx.request_id().to_string(),
                level,
                message: message.to_string(),
                fields: fields.to_vec(),
            });
        }
    }
}
