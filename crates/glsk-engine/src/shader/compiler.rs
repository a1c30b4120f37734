use crate::device::Device;
use crate::diag::{DiagnosticMessage, DiagnosticReporter};

use super::info_log::InfoLog;
use super::registry::ShaderStage;
use super::source::{assemble, SourceFragment};

/// Recorded outcome of a compile attempt.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompileStatus {
    Compiled,
    /// Compiler rejected the source; the log was reported.
    Failed,
    /// The device could not allocate the object; nothing was compiled.
    Unallocated,
}

/// Device-resident shader object.
///
/// Always returned by the compiler, whatever the outcome. Deleted exactly
/// once when dropped, and borrows the device so it cannot outlive the
/// context.
pub struct ShaderObject<'d, D: Device> {
    device: &'d D,
    raw: Option<D::Shader>,
    label: String,
    stage: ShaderStage,
    status: CompileStatus,
}

impl<'d, D: Device> ShaderObject<'d, D> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn status(&self) -> CompileStatus {
        self.status
    }

    pub fn is_compiled(&self) -> bool {
        self.status == CompileStatus::Compiled
    }

    pub fn raw(&self) -> Option<D::Shader> {
        self.raw
    }
}

impl<D: Device> Drop for ShaderObject<'_, D> {
    fn drop(&mut self) {
        if let Some(raw) = self.raw.take() {
            self.device.delete_shader(raw);
        }
    }
}

impl<D: Device> std::fmt::Debug for ShaderObject<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderObject")
            .field("label", &self.label)
            .field("stage", &self.stage)
            .field("status", &self.status)
            .field("raw", &self.raw)
            .finish()
    }
}

/// Compiles a single source buffer.
///
/// `length` follows [`SourceFragment`]: negative for NUL-terminated,
/// otherwise the declared byte count.
pub fn compile<'d, D: Device>(
    device: &'d D,
    reporter: &DiagnosticReporter,
    label: &str,
    stage: ShaderStage,
    source: &[u8],
    length: isize,
) -> ShaderObject<'d, D> {
    compile_fragments(device, reporter, label, stage, &[SourceFragment::new(source, length)])
}

/// Compiles one shader object from `fragments`, in order.
///
/// Never fails: allocation and compile failures are recorded in the
/// returned object's status and reported once, tagged with `label`.
pub fn compile_fragments<'d, D: Device>(
    device: &'d D,
    reporter: &DiagnosticReporter,
    label: &str,
    stage: ShaderStage,
    fragments: &[SourceFragment<'_>],
) -> ShaderObject<'d, D> {
    let mut object = ShaderObject {
        device,
        raw: None,
        label: label.to_string(),
        stage,
        status: CompileStatus::Unallocated,
    };

    let raw = match device.create_shader(stage) {
        Ok(raw) => raw,
        Err(e) => {
            reporter.report(DiagnosticMessage::shader(
                label,
                &e.to_string(),
                log::Level::Error,
            ));
            return object;
        }
    };
    object.raw = Some(raw);

    device.shader_source(raw, &assemble(fragments));
    device.compile_shader(raw);

    if device.compile_status(raw) {
        log::debug!("compiled {stage:?} shader {label}");
        object.status = CompileStatus::Compiled;
        return object;
    }

    let mut info = InfoLog::new();
    info.capture(&device.shader_info_log(raw));

    let body = match (info.is_empty(), info.is_truncated()) {
        (true, _) => "compilation failed (no compiler log)".to_string(),
        (false, true) => format!("{} [log truncated]", info.as_str()),
        (false, false) => info.as_str().to_string(),
    };
    reporter.report(DiagnosticMessage::shader(label, &body, log::Level::Error));

    object.status = CompileStatus::Failed;
    object
}
