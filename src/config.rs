use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Largest edge length accepted from a config file
pub const MAX_ICON_SIZE: u32 = 4096;

/// One output target: a destination name and the edge length rendered there
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub name: String,
    pub size: u32,
}

impl IconEntry {
    fn new(name: &str, size: u32) -> Self {
        IconEntry {
            name: name.to_string(),
            size,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Density bucket directory -> launcher size
    #[serde(default = "default_android")]
    pub android: Vec<IconEntry>,
    /// Asset catalog filename -> icon size
    #[serde(default = "default_ios")]
    pub ios: Vec<IconEntry>,
}

fn default_android() -> Vec<IconEntry> {
    vec![
        IconEntry::new("mipmap-mdpi", 48),
        IconEntry::new("mipmap-hdpi", 72),
        IconEntry::new("mipmap-xhdpi", 96),
        IconEntry::new("mipmap-xxhdpi", 144),
        IconEntry::new("mipmap-xxxhdpi", 192),
    ]
}

fn default_ios() -> Vec<IconEntry> {
    vec![
        IconEntry::new("Icon-App-20x20@1x.png", 20),
        IconEntry::new("Icon-App-20x20@2x.png", 40),
        IconEntry::new("Icon-App-20x20@3x.png", 60),
        IconEntry::new("Icon-App-29x29@1x.png", 29),
        IconEntry::new("Icon-App-29x29@2x.png", 58),
        IconEntry::new("Icon-App-29x29@3x.png", 87),
        IconEntry::new("Icon-App-40x40@1x.png", 40),
        IconEntry::new("Icon-App-40x40@2x.png", 80),
        IconEntry::new("Icon-App-40x40@3x.png", 120),
        IconEntry::new("Icon-App-60x60@2x.png", 120),
        IconEntry::new("Icon-App-60x60@3x.png", 180),
        IconEntry::new("Icon-App-76x76@1x.png", 76),
        IconEntry::new("Icon-App-76x76@2x.png", 152),
        IconEntry::new("Icon-App-83.5x83.5@2x.png", 167),
        IconEntry::new("Icon-App-1024x1024@1x.png", 1024),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            android: default_android(),
            ios: default_ios(),
        }
    }
}

impl Config {
    /// Read a YAML size table; sections left out keep the built-in entries
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_table("android", &self.android)?;
        validate_table("ios", &self.ios)?;
        Ok(())
    }
}

fn validate_table(table: &str, entries: &[IconEntry]) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        if entry.name.is_empty() {
            bail!("{} entry name cannot be empty", table);
        }
        if entry.size == 0 {
            bail!("{} entry '{}' size must be greater than 0", table, entry.name);
        }
        if entry.size > MAX_ICON_SIZE {
            bail!(
                "{} entry '{}' size must be <= {}",
                table,
                entry.name,
                MAX_ICON_SIZE
            );
        }
        if !seen.insert(entry.name.as_str()) {
            bail!("{} entry '{}' is listed more than once", table, entry.name);
        }
    }

    Ok(())
}
