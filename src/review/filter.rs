//! Glob-based exclusion of diff paths.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, ReviewError};

/// Set of glob patterns; matching files are left out of a review.
#[derive(Debug, Clone)]
pub struct PathFilter {
    globs: GlobSet,
    patterns: Vec<String>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            globs: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }
}

impl PathFilter {
    /// Compile exclusion globs.
    ///
    /// # Returns
    ///
    /// * `Ok(PathFilter)` - All globs compiled
    /// * `Err(ReviewError::UserError)` - A glob is invalid
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = Glob::new(&pattern.replace('\\', "/")).map_err(|e| {
                ReviewError::UserError(format!(
                    "invalid glob pattern in exclude: '{}' - {}\n\
                     Fix: edit the config file and correct or remove this pattern.",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        let globs = builder
            .build()
            .map_err(|e| ReviewError::UserError(format!("failed to compile exclude globs: {}", e)))?;

        Ok(Self {
            globs,
            patterns: patterns.to_vec(),
        })
    }

    /// Whether `path` (forward slashes) matches any exclusion glob.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.globs.is_match(path)
    }

    /// The source patterns.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
