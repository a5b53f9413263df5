use anyhow::{bail, Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

use crate::constants::{colors, layout, waveform};
use crate::raster::{fill_dot, fill_rounded_rect, stroke_segment};

/// Pixel geometry of one icon, derived from its edge length with integer division only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub padding: u32,
    pub corner_radius: u32,
    pub line_width: u32,
    pub margin: u32,
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        IconLayout {
            size,
            padding: size / 8,
            corner_radius: size / 4,
            line_width: (size / 40).max(layout::MIN_LINE_WIDTH),
            margin: size / 6,
        }
    }

    /// Top-left corner of the background, inclusive
    pub fn background_start(&self) -> u32 {
        self.padding / 2
    }

    /// Bottom-right corner of the background, inclusive
    pub fn background_end(&self) -> u32 {
        self.size - self.padding / 2
    }

    /// Radius of the caps drawn over every waveform vertex
    pub fn joint_radius(&self) -> u32 {
        self.line_width / 2
    }

    /// Side length of the square the waveform is scaled into
    fn plot_extent(&self) -> f32 {
        self.size.saturating_sub(2 * self.margin) as f32
    }
}

/// Scale the normalized EKG trace into absolute pixel coordinates for `layout`
pub fn waveform_points(layout: &IconLayout) -> Vec<(f32, f32)> {
    let margin = layout.margin as f32;
    let extent = layout.plot_extent();

    waveform::POINTS
        .iter()
        .map(|&(px, py)| (margin + px * extent, margin + py * extent))
        .collect()
}

/// Draw the EKG icon: teal rounded square with a white heartbeat trace
pub fn create_ekg_icon(size: u32) -> Result<RgbaImage> {
    if size == 0 {
        bail!("icon size must be greater than 0");
    }

    let layout = IconLayout::for_size(size);
    let mut img = RgbaImage::from_pixel(size, size, Rgba(colors::TRANSPARENT));

    let start = layout.background_start() as i32;
    let end = layout.background_end() as i32;
    fill_rounded_rect(
        &mut img,
        start,
        start,
        end,
        end,
        layout.corner_radius,
        Rgba(colors::BACKGROUND),
    );

    let stroke = Rgba(colors::STROKE);
    let points = waveform_points(&layout);

    for pair in points.windows(2) {
        stroke_segment(&mut img, pair[0], pair[1], layout.line_width, stroke);
    }

    // Square segment ends leave notches at every vertex
    for &point in &points {
        fill_dot(&mut img, point, layout.joint_radius(), stroke);
    }

    Ok(img)
}

/// Render a `size`x`size` icon and write it as PNG to `output_path`, replacing any existing file
pub fn render(size: u32, output_path: &Path) -> Result<()> {
    let img = create_ekg_icon(size)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create icon directory: {}", parent.display())
            })?;
        }
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .with_context(|| format!("Failed to write icon: {}", output_path.display()))?;

    println!("Created: {}", output_path.display());

    Ok(())
}
