use std::sync::Arc;

use super::message::DiagnosticMessage;

/// Destination for classified diagnostic messages.
///
/// Sinks may be invoked from inside a device call (synchronous driver
/// output). Implementations must not panic, must not call back into the
/// device, and must deliver in arrival order without buffering.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, message: &DiagnosticMessage);
}

/// Forwards every message to the `log` facade at the message's level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, message: &DiagnosticMessage) {
        log::log!(target: "glsk::diag", message.level, "{message}");
    }
}

/// Cheap, clonable handle to the diagnostic channel.
///
/// The same handle is given to the windowing layer (error callback), the
/// driver (debug message callback) and the shader compiler.
#[derive(Clone)]
pub struct DiagnosticReporter {
    sink: Arc<dyn DiagnosticSink>,
}

impl DiagnosticReporter {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Reporter writing to the global logger.
    pub fn logging() -> Self {
        Self::new(LogSink)
    }

    pub fn report(&self, message: DiagnosticMessage) {
        self.sink.emit(&message);
    }

    /// Driver debug callback entry point.
    pub fn driver_message(&self, source: u32, kind: u32, id: u32, severity: u32, body: &str) {
        self.report(DiagnosticMessage::driver(source, kind, id, severity, body));
    }

    /// Windowing layer error callback entry point.
    pub fn windowing_error(&self, code: i32, description: &str) {
        self.report(DiagnosticMessage::windowing(code, description));
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::logging()
    }
}

impl std::fmt::Debug for DiagnosticReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticReporter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CaptureSink;

    #[test]
    fn messages_arrive_in_delivery_order() {
        let sink = CaptureSink::default();
        let reporter = DiagnosticReporter::new(sink.clone());

        reporter.windowing_error(1, "first");
        reporter.driver_message(
            glow::DEBUG_SOURCE_SHADER_COMPILER,
            glow::DEBUG_TYPE_PERFORMANCE,
            2,
            glow::DEBUG_SEVERITY_LOW,
            "second",
        );
        reporter.windowing_error(3, "third");

        assert_eq!(
            sink.lines(),
            vec![
                "[WINDOW] (1) first".to_string(),
                "[GL][SHADER_COMPILER][PERFORMANCE][LOW] (2) second".to_string(),
                "[WINDOW] (3) third".to_string(),
            ]
        );
    }

    #[test]
    fn clones_share_one_sink() {
        let sink = CaptureSink::default();
        let reporter = DiagnosticReporter::new(sink.clone());
        let driver_side = reporter.clone();

        driver_side.driver_message(0, 0, 0, 0, "nested");
        reporter.windowing_error(0, "outer");

        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn log_sink_accepts_every_level() {
        let reporter = DiagnosticReporter::logging();
        for severity in [
            glow::DEBUG_SEVERITY_HIGH,
            glow::DEBUG_SEVERITY_MEDIUM,
            glow::DEBUG_SEVERITY_LOW,
            glow::DEBUG_SEVERITY_NOTIFICATION,
            0,
        ] {
            reporter.driver_message(glow::DEBUG_SOURCE_API, glow::DEBUG_TYPE_OTHER, 0, severity, "x");
        }
    }
}
