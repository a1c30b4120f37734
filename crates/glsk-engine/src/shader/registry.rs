use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Logical shader identifiers. Closed set; each maps to source files by
/// name + stage extension.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderId {
    Triangle,
}

impl ShaderId {
    pub const ALL: [ShaderId; 1] = [ShaderId::Triangle];

    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
        }
    }
}

/// Pipeline stage a shader object targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 3] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Geometry,
    ];

    /// File extension reserved for sources of this stage.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
            Self::Geometry => "geom",
        }
    }
}

/// Declared source of one `(ShaderId, ShaderStage)` pair.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StageSource {
    File(PathBuf),
    /// Intentionally not provided; the stage is skipped without a report.
    Absent,
}

/// Explicit mapping from shader identifiers and stages to source files.
///
/// Every pair must be declared, either with a file or as absent; see
/// [`ShaderRegistry::validate`].
#[derive(Debug, Clone)]
pub struct ShaderRegistry {
    root: PathBuf,
    entries: HashMap<(ShaderId, ShaderStage), StageSource>,
}

impl ShaderRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    /// Built-in set: the triangle's vertex stage. Fragment and geometry
    /// stages are declared absent until sources exist for them.
    pub fn builtin(root: impl Into<PathBuf>) -> Self {
        Self::new(root)
            .with_file(ShaderId::Triangle, ShaderStage::Vertex)
            .without(ShaderId::Triangle, ShaderStage::Fragment)
            .without(ShaderId::Triangle, ShaderStage::Geometry)
    }

    /// Registers `<root>/<id>.<ext>` for the pair.
    pub fn with_file(mut self, id: ShaderId, stage: ShaderStage) -> Self {
        let path = self.path_for(id, stage);
        self.entries.insert((id, stage), StageSource::File(path));
        self
    }

    pub fn without(mut self, id: ShaderId, stage: ShaderStage) -> Self {
        self.entries.insert((id, stage), StageSource::Absent);
        self
    }

    pub fn path_for(&self, id: ShaderId, stage: ShaderStage) -> PathBuf {
        self.root
            .join(format!("{}.{}", id.name(), stage.extension()))
    }

    pub fn get(&self, id: ShaderId, stage: ShaderStage) -> Option<&StageSource> {
        self.entries.get(&(id, stage))
    }

    /// Checks that every identifier/stage pair has been declared.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = ShaderId::ALL
            .iter()
            .flat_map(|&id| ShaderStage::ALL.iter().map(move |&stage| (id, stage)))
            .filter(|pair| !self.entries.contains_key(pair))
            .map(|(id, stage)| format!("{}.{}", id.name(), stage.extension()))
            .collect();

        anyhow::ensure!(
            missing.is_empty(),
            "shader registry has undeclared stages: {}",
            missing.join(", ")
        );
        Ok(())
    }

    /// Registered files in declaration order (identifier, then stage).
    pub fn files(&self) -> impl Iterator<Item = (ShaderId, ShaderStage, &Path)> + '_ {
        ShaderId::ALL.into_iter().flat_map(move |id| {
            ShaderStage::ALL.into_iter().filter_map(move |stage| match self.get(id, stage) {
                Some(StageSource::File(path)) => Some((id, stage, path.as_path())),
                _ => None,
            })
        })
    }
}
