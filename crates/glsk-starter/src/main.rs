use std::process::ExitCode;

use anyhow::Result;
use glsk_engine::core::{Session, SessionReport, StarterConfig, SHADER_DIR_ENV};
use glsk_engine::diag::DiagnosticReporter;
use glsk_engine::logging::{init_logging, LoggingConfig};
use glsk_engine::platform::WinitPlatform;

/// Shaders shipped with this crate, found regardless of the working directory.
const BUNDLED_SHADERS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/shaders");

/// Environment config, with the bundled shaders unless `GLSK_SHADER_DIR`
/// points elsewhere.
fn starter_config(shader_dir_override: bool) -> StarterConfig {
    let config = StarterConfig::from_env();
    if shader_dir_override {
        config
    } else {
        config.with_shader_root(BUNDLED_SHADERS)
    }
}

fn run() -> Result<SessionReport> {
    let overridden = std::env::var_os(SHADER_DIR_ENV).is_some_and(|dir| !dir.is_empty());
    let config = starter_config(overridden);
    let reporter = DiagnosticReporter::logging();

    log::info!(
        "starting '{}' (OpenGL {}.{} core, shaders from {})",
        config.context.title,
        config.context.api_version.major,
        config.context.api_version.minor,
        config.shader_root.display()
    );

    Session::run(WinitPlatform::new(), &config, &reporter)
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(report) => {
            log::info!(
                "clean exit: {} frames, shaders {} ok / {} failed / {} skipped, diagnostics {:?}",
                report.frames.frames,
                report.shaders_compiled,
                report.shaders_failed,
                report.stages_skipped,
                report.diagnostics
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glsk_engine::shader::{ShaderId, ShaderRegistry, ShaderStage};

    #[test]
    fn default_root_holds_the_triangle_shader() {
        let config = starter_config(false);
        assert_eq!(config.shader_root, std::path::Path::new(BUNDLED_SHADERS));

        let registry = ShaderRegistry::builtin(&config.shader_root);
        let vert = registry.path_for(ShaderId::Triangle, ShaderStage::Vertex);
        assert!(vert.is_file(), "{} is missing", vert.display());

        let files: Vec<_> = registry.files().collect();
        assert_eq!(files.len(), 1);
        assert!(files.iter().all(|(_, _, path)| path.is_file()));
    }
}
