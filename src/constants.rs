/// Fixed artwork and asset-layout constants for the EKG launcher icon

pub mod colors {
    /// Teal background: #0D9488
    pub const BACKGROUND: [u8; 4] = [13, 148, 136, 255];

    /// Waveform stroke
    pub const STROKE: [u8; 4] = [255, 255, 255, 255];

    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
}

pub mod waveform {
    /// Normalized EKG trace in [0,1] x [0,1], y grows downward
    pub const POINTS: [(f32, f32); 13] = [
        (0.0, 0.5),   // start
        (0.2, 0.5),   // baseline
        (0.25, 0.45), // P wave
        (0.3, 0.5),
        (0.35, 0.5),
        (0.4, 0.6),   // Q
        (0.45, 0.15), // R spike (main peak)
        (0.5, 0.75),  // S
        (0.55, 0.5),
        (0.65, 0.5),
        (0.7, 0.38),  // T wave
        (0.8, 0.5),
        (1.0, 0.5),   // end
    ];
}

pub mod layout {
    /// Thinnest stroke drawn at any size
    pub const MIN_LINE_WIDTH: u32 = 2;
}

pub mod assets {
    /// Launcher icon filename inside every Android density bucket
    pub const ANDROID_ICON_NAME: &str = "ic_launcher.png";

    pub const ANDROID_RES_DIR: [&str; 5] = ["android", "app", "src", "main", "res"];

    pub const IOS_APPICONSET_DIR: [&str; 4] =
        ["ios", "Runner", "Assets.xcassets", "AppIcon.appiconset"];
}
