//! Shared inputs seeded into the context before a run begins.
//!
//! These are the "ambient" values providers may request through the context
//! without any provider having produced them. How they are obtained, by
//! reading a plist, a manifest, or a log file on disk, is collaborator
//! territory; the engine only sees the finished values.

use std::fmt;

/// Identity of the project being measured.
///
/// # Example
///
/// ```rust
/// use buildtrend::providers::ProjectInfo;
///
/// let project = ProjectInfo::new("Clipboard", "2.3.11", "347");
/// assert_eq!(project.to_string(), "Clipboard 2.3.11 (347)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub build_number: String,
}

impl ProjectInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        build_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            build_number: build_number.into(),
        }
    }
}

impl fmt::Display for ProjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.version, self.build_number)
    }
}

/// Raw contents of the compiler/build log for the measured build.
#[derive(Debug, Clone)]
pub struct BuildLog {
    contents: String,
}

impl BuildLog {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}
