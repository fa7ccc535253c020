//! Size of the built artifact on disk.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{Context, InfoProvider, Summary};
use crate::error::{Result, TrendError};
use crate::formatters::format_bytes;

/// Arguments for [`ArtifactSizeProvider`]: where the built artifact lives.
/// Discovering the artifact is the caller's job.
#[derive(Debug, Clone)]
pub struct ArtifactSizeArgs {
    pub path: PathBuf,
}

impl ArtifactSizeArgs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Measures the byte size of the build's output artifact (archive, binary,
/// bundle). Growth is flagged unfavorable.
///
/// Requires [`ArtifactSizeArgs`] naming the artifact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactSizeProvider {
    size: u64,
}

impl ArtifactSizeProvider {
    /// The measured size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl InfoProvider for ArtifactSizeProvider {
    type Args = ArtifactSizeArgs;
    const IDENTIFIER: &'static str = "artifact_size";

    fn extract(_context: &mut Context, args: Option<&Self::Args>) -> Result<Self> {
        let args = args.ok_or_else(|| {
            TrendError::extraction("artifact_size requires the artifact path argument")
        })?;
        let metadata = fs::metadata(&args.path).map_err(|err| {
            TrendError::extraction(format!(
                "artifact not found at {}: {err}",
                args.path.display()
            ))
        })?;
        Ok(Self {
            size: metadata.len(),
        })
    }

    fn summary(&self, previous: Option<&Self>, _args: Option<&Self::Args>) -> Summary {
        Summary::generic(
            "📦 Artifact size",
            self.size,
            previous.map(|p| p.size),
            true,
            format_bytes,
        )
    }
}
