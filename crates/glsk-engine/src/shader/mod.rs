//! Shader sources and compilation.
//!
//! Logical shader identifiers form a closed set and are mapped to files by
//! an explicit registry. Compilation always hands back an object; failure
//! is a recorded status plus one tagged report on the diagnostic channel.

mod compiler;
mod info_log;
mod registry;
mod set;
mod source;

pub use compiler::{compile, compile_fragments, CompileStatus, ShaderObject};
pub use info_log::{InfoLog, INFO_LOG_CAPACITY};
pub use registry::{ShaderId, ShaderRegistry, ShaderStage, StageSource};
pub use set::ShaderSet;
pub use source::SourceFragment;
