use std::fmt;

use super::classify::{DebugSeverity, DebugSource, DebugType};

/// Where a diagnostic message came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Windowing layer (window/surface/context creation, presentation).
    Windowing,

    /// Graphics driver debug output.
    Driver {
        source: DebugSource,
        kind: DebugType,
        severity: DebugSeverity,
    },

    /// Shader compilation, tagged with the resource that produced it.
    Shader { label: String },

    /// The starter kit itself (bootstrap progress and failures).
    Starter,
}

/// One classified message on the diagnostic channel.
///
/// Rendered as a single line; see the `Display` impl for the tag order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub origin: Origin,
    pub id: Option<i64>,
    pub body: String,
    pub level: log::Level,
}

impl DiagnosticMessage {
    /// Classifies raw driver callback arguments. Never fails on unknown codes.
    pub fn driver(source: u32, kind: u32, id: u32, severity: u32, body: &str) -> Self {
        let severity = DebugSeverity::from_raw(severity);
        Self {
            origin: Origin::Driver {
                source: DebugSource::from_raw(source),
                kind: DebugType::from_raw(kind),
                severity,
            },
            id: Some(i64::from(id)),
            body: one_line(body),
            level: severity.level(),
        }
    }

    pub fn windowing(code: i32, description: &str) -> Self {
        Self {
            origin: Origin::Windowing,
            id: Some(i64::from(code)),
            body: one_line(description),
            level: log::Level::Error,
        }
    }

    pub fn shader(label: impl Into<String>, body: &str, level: log::Level) -> Self {
        Self {
            origin: Origin::Shader {
                label: label.into(),
            },
            id: None,
            body: one_line(body),
            level,
        }
    }

    pub fn starter(body: impl Into<String>, level: log::Level) -> Self {
        let body: String = body.into();
        Self {
            origin: Origin::Starter,
            id: None,
            body: one_line(&body),
            level,
        }
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Origin::Windowing => f.write_str("[WINDOW]")?,
            Origin::Driver {
                source,
                kind,
                severity,
            } => write!(
                f,
                "[GL][{}][{}][{}]",
                source.tag(),
                kind.tag(),
                severity.tag()
            )?,
            Origin::Shader { label } => write!(f, "[SHADER][{label}]")?,
            Origin::Starter => f.write_str("[GLSK]")?,
        }

        if let Some(id) = self.id {
            write!(f, " ({id})")?;
        }

        write!(f, " {}", self.body)
    }
}

/// Separator for the lines of a multi-line body.
const LINE_JOIN: &str = " | ";

/// The channel is one line per message. Compiler logs carry one line per
/// error, so interior lines are joined and blank ones dropped.
fn one_line(text: &str) -> String {
    text.trim_end_matches(['\n', '\r', '\0'])
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(LINE_JOIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_line_carries_all_four_tags_id_and_body() {
        let msg = DiagnosticMessage::driver(
            glow::DEBUG_SOURCE_API,
            glow::DEBUG_TYPE_ERROR,
            1280,
            glow::DEBUG_SEVERITY_HIGH,
            "GL_INVALID_ENUM in glClear(mask)\n",
        );
        assert_eq!(
            msg.to_string(),
            "[GL][API][ERROR][HIGH] (1280) GL_INVALID_ENUM in glClear(mask)"
        );
        assert_eq!(msg.level, log::Level::Error);
    }

    #[test]
    fn driver_line_with_unknown_codes_still_formats() {
        let msg = DiagnosticMessage::driver(7, 8, 9, 10, "odd");
        assert_eq!(msg.to_string(), "[GL][UNKNOWN][UNKNOWN][UNKNOWN] (9) odd");
        assert_eq!(msg.level, log::Level::Warn);
    }

    #[test]
    fn windowing_line() {
        let msg = DiagnosticMessage::windowing(65543, "requested OpenGL version unavailable");
        assert_eq!(
            msg.to_string(),
            "[WINDOW] (65543) requested OpenGL version unavailable"
        );
    }

    #[test]
    fn shader_line_is_tagged_with_label_and_has_no_id() {
        let msg = DiagnosticMessage::shader(
            "assets/shaders/triangle.vert",
            "0:3(1): error: syntax error\n",
            log::Level::Error,
        );
        assert_eq!(
            msg.to_string(),
            "[SHADER][assets/shaders/triangle.vert] 0:3(1): error: syntax error"
        );
    }

    #[test]
    fn multi_line_compiler_log_stays_on_one_line() {
        let msg = DiagnosticMessage::shader(
            "assets/shaders/triangle.vert",
            "0:3(1): error: A\r\n\n0:4(1): error: B\n",
            log::Level::Error,
        );
        let line = msg.to_string();
        assert_eq!(line.lines().count(), 1);
        assert_eq!(
            line,
            "[SHADER][assets/shaders/triangle.vert] 0:3(1): error: A | 0:4(1): error: B"
        );
    }

    #[test]
    fn driver_and_starter_bodies_are_joined_too() {
        let driver = DiagnosticMessage::driver(0, 0, 1, 0, "first\nsecond");
        assert_eq!(driver.body, "first | second");

        let starter = DiagnosticMessage::starter("failed:\n  cause", log::Level::Error);
        assert_eq!(starter.to_string(), "[GLSK] failed: |   cause");
    }

    #[test]
    fn starter_line() {
        let msg = DiagnosticMessage::starter("failed to create window", log::Level::Error);
        assert_eq!(msg.to_string(), "[GLSK] failed to create window");
    }
}
