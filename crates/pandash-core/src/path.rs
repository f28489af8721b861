//! Path resolution against the virtual filesystem.

use crate::error::PathError;
use crate::filesystem::VirtualFs;

/// Resolves command targets against a working directory.
///
/// Rules, first match wins:
/// 1. no target or `~` resolves to home
/// 2. `..` pops one segment of the working directory (root stays root)
/// 3. an absolute target must be a directory key
/// 4. anything else is joined onto the working directory and must be a key
#[derive(Clone, Copy, Debug)]
pub struct PathResolver<'a> {
    fs: &'a VirtualFs,
    home: &'a str,
}

impl<'a> PathResolver<'a> {
    pub fn new(fs: &'a VirtualFs, home: &'a str) -> Self {
        Self { fs, home }
    }

    pub fn resolve(&self, current: &str, target: Option<&str>) -> Result<String, PathError> {
        let target = match target {
            None | Some("~") => return Ok(self.home.to_string()),
            Some("..") => return Ok(VirtualFs::parent(current)),
            Some(target) => target,
        };

        let trimmed = match target.trim_end_matches('/') {
            "" => "/",
            t => t,
        };

        let candidate = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            VirtualFs::join(current, trimmed)
        };

        if self.fs.exists(&candidate) {
            Ok(candidate)
        } else {
            Err(PathError::NotFound(target.to_string()))
        }
    }
}
