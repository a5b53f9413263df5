use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::assets;
use crate::render::render;

/// What one generation run wrote to disk
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub android: Vec<PathBuf>,
    pub ios: Vec<PathBuf>,
    /// Set when the iOS asset catalog was absent and nothing was written there
    pub ios_skipped: bool,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.android.len() + self.ios.len()
    }
}

pub fn android_res_dir(base_dir: &Path) -> PathBuf {
    assets::ANDROID_RES_DIR
        .iter()
        .fold(base_dir.to_path_buf(), |dir, part| dir.join(part))
}

pub fn ios_icon_dir(base_dir: &Path) -> PathBuf {
    assets::IOS_APPICONSET_DIR
        .iter()
        .fold(base_dir.to_path_buf(), |dir, part| dir.join(part))
}

/// Render every Android density bucket, then the iOS asset catalog if the project has one
pub fn generate_all(base_dir: &Path, config: &Config) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    let res_dir = android_res_dir(base_dir);
    for entry in &config.android {
        let output_dir = res_dir.join(&entry.name);
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("Failed to create Android resource directory: {}", output_dir.display())
        })?;

        let output_path = output_dir.join(assets::ANDROID_ICON_NAME);
        render(entry.size, &output_path)?;
        report.android.push(output_path);
    }

    // The asset catalog belongs to the Xcode project; never create it here
    let ios_dir = ios_icon_dir(base_dir);
    if ios_dir.is_dir() {
        for entry in &config.ios {
            let output_path = ios_dir.join(&entry.name);
            render(entry.size, &output_path)?;
            report.ios.push(output_path);
        }
    } else {
        report.ios_skipped = true;
    }

    println!("\nApp icons generated successfully!");

    Ok(report)
}
