//
//  insightly-rs
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Small helpers used by [`Config`](super::Config) to touch the file system.
//! Write operations create missing parent directories; read operations return
//! the raw file content.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be opened, or is not
/// valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes content to a configuration file, creating parent directories.
///
/// Existing files are overwritten.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Checks if a configuration file exists.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
