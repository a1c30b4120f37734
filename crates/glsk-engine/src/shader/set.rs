use crate::device::Device;
use crate::diag::{DiagnosticMessage, DiagnosticReporter};
use crate::fs;

use super::compiler::{compile, ShaderObject};
use super::registry::ShaderRegistry;

/// Shader objects compiled from a registry, in declaration order.
///
/// Compile failures are collected rather than short-circuited so that a
/// later link step can deal with the whole program in one place.
pub struct ShaderSet<'d, D: Device> {
    objects: Vec<ShaderObject<'d, D>>,
    skipped: usize,
}

impl<'d, D: Device> ShaderSet<'d, D> {
    /// Loads and compiles every stage registered with a file.
    ///
    /// A registered file that is missing or empty is reported as a warning
    /// and the stage is skipped.
    pub fn compile(device: &'d D, registry: &ShaderRegistry, reporter: &DiagnosticReporter) -> Self {
        let mut objects = Vec::new();
        let mut skipped = 0;

        for (id, stage, path) in registry.files() {
            let label = path.display().to_string();

            let Some(source) = fs::load(path) else {
                reporter.report(DiagnosticMessage::shader(
                    label,
                    &format!("{id:?} {stage:?} source is missing or empty; stage skipped"),
                    log::Level::Warn,
                ));
                skipped += 1;
                continue;
            };

            objects.push(compile(
                device,
                reporter,
                &label,
                stage,
                &source,
                source.len() as isize,
            ));
        }

        log::info!(
            "shaders: {} compiled, {} failed, {} skipped",
            objects.iter().filter(|o| o.is_compiled()).count(),
            objects.iter().filter(|o| !o.is_compiled()).count(),
            skipped
        );

        Self { objects, skipped }
    }

    pub fn objects(&self) -> &[ShaderObject<'d, D>] {
        &self.objects
    }

    pub fn compiled(&self) -> usize {
        self.objects.iter().filter(|o| o.is_compiled()).count()
    }

    pub fn failed(&self) -> usize {
        self.objects.len() - self.compiled()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
