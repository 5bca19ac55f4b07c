/// Application-wide constants for icon layout, colors, and output locations

pub mod canvas {
    /// Largest square canvas the renderer will allocate (16384 x 16384 RGBA = 1 GiB)
    pub const MAX_PIXEL_SIZE: u32 = 16384;

    /// Corner radius of the preview mask, as a fraction of the canvas size
    pub const CORNER_RADIUS: f32 = 0.20;
}

pub mod wordmark {
    /// Text drawn at the top of the icon
    pub const TEXT: &str = "I RIZE";

    /// Target cap height as a fraction of the canvas (the design's 35% font size)
    pub const CAP_HEIGHT: f32 = 0.35;

    /// The wordmark is shrunk until it fits inside this fraction of the canvas width
    pub const MAX_WIDTH: f32 = 0.90;

    /// Vertical center of the wordmark, as a fraction of the canvas
    pub const CENTER_Y: f32 = 0.22;
}

pub mod sun {
    /// Sun center, as fractions of the canvas
    pub const CENTER_X: f32 = 0.50;
    pub const CENTER_Y: f32 = 0.60;

    /// Radius of the half disc
    pub const RADIUS: f32 = 0.25;

    /// Ray thickness and length
    pub const RAY_WIDTH: f32 = 0.06;
    pub const RAY_LENGTH: f32 = 0.12;

    /// Distance from the sun center to the inner end of each ray
    pub const RAY_OFFSET: f32 = 0.08;

    /// Ray angles in degrees from vertical, 15° apart
    pub const RAY_ANGLES_DEG: [f32; 7] = [-45.0, -30.0, -15.0, 0.0, 15.0, 30.0, 45.0];
}

pub mod colors {
    /// Neon "retro digital clock" green
    pub const DEFAULT_ACCENT_HEX: &str = "#00FF41";

    pub const BACKGROUND: [u8; 3] = [0, 0, 0];
}

pub mod paths {
    /// Asset catalog directory, relative to the project checkout
    pub const DEFAULT_PRIMARY_DIR: &str = "IRize/IRize/Assets.xcassets/AppIcon.appiconset";

    /// Folder created under the user's documents directory when the catalog is not writable
    pub const FALLBACK_DIR_NAME: &str = "IRizeIcons";

    /// Asset catalog manifest file
    pub const MANIFEST_FILE_NAME: &str = "Contents.json";
}
