//! Canonical table of app-icon images required by the iOS asset catalog
//!
//! Every slot of the `AppIcon.appiconset` has exactly one entry here, in the
//! order Xcode lists them: iPhone, iPad, then the App Store icon.

use anyhow::{Context, Result};

/// Device family an icon slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idiom {
    IPhone,
    IPad,
    Marketing,
}

impl Idiom {
    /// Name used by the asset catalog's Contents.json
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::IPhone => "iphone",
            Idiom::IPad => "ipad",
            Idiom::Marketing => "ios-marketing",
        }
    }
}

/// One required output image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    /// Output filename stem, unique within the table
    pub identifier: &'static str,
    /// Width and height in pixels
    pub pixel_size: u32,
    /// Human-readable label, informational only
    pub description: &'static str,
    pub idiom: Idiom,
    /// Size in points (83.5 for the iPad Pro slot)
    pub point_size: f32,
    /// Display scale factor (1, 2 or 3)
    pub scale: u8,
}

impl IconSpec {
    /// Filename written to the asset catalog
    pub fn file_name(&self) -> String {
        format!("{}.png", self.identifier)
    }

    /// Point size as Contents.json writes it: "20x20", "83.5x83.5"
    pub fn size_label(&self) -> String {
        let points = if self.point_size.fract() == 0.0 {
            format!("{}", self.point_size as u32)
        } else {
            format!("{}", self.point_size)
        };
        format!("{}x{}", points, points)
    }

    /// Scale as Contents.json writes it: "2x"
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

const fn spec(
    identifier: &'static str,
    pixel_size: u32,
    description: &'static str,
    idiom: Idiom,
    point_size: f32,
    scale: u8,
) -> IconSpec {
    IconSpec {
        identifier,
        pixel_size,
        description,
        idiom,
        point_size,
        scale,
    }
}

static APP_ICON_SPECS: [IconSpec; 18] = [
    // iPhone
    spec("Icon-20@2x", 40, "iPhone Notification 20pt @2x", Idiom::IPhone, 20.0, 2),
    spec("Icon-20@3x", 60, "iPhone Notification 20pt @3x", Idiom::IPhone, 20.0, 3),
    spec("Icon-29@2x", 58, "iPhone Settings 29pt @2x", Idiom::IPhone, 29.0, 2),
    spec("Icon-29@3x", 87, "iPhone Settings 29pt @3x", Idiom::IPhone, 29.0, 3),
    spec("Icon-40@2x", 80, "iPhone Spotlight 40pt @2x", Idiom::IPhone, 40.0, 2),
    spec("Icon-40@3x", 120, "iPhone Spotlight 40pt @3x", Idiom::IPhone, 40.0, 3),
    spec("Icon-60@2x", 120, "iPhone App 60pt @2x", Idiom::IPhone, 60.0, 2),
    spec("Icon-60@3x", 180, "iPhone App 60pt @3x", Idiom::IPhone, 60.0, 3),
    // iPad
    spec("Icon-iPad-20", 20, "iPad Notification 20pt @1x", Idiom::IPad, 20.0, 1),
    spec("Icon-iPad-20@2x", 40, "iPad Notification 20pt @2x", Idiom::IPad, 20.0, 2),
    spec("Icon-iPad-29", 29, "iPad Settings 29pt @1x", Idiom::IPad, 29.0, 1),
    spec("Icon-iPad-29@2x", 58, "iPad Settings 29pt @2x", Idiom::IPad, 29.0, 2),
    spec("Icon-iPad-40", 40, "iPad Spotlight 40pt @1x", Idiom::IPad, 40.0, 1),
    spec("Icon-iPad-40@2x", 80, "iPad Spotlight 40pt @2x", Idiom::IPad, 40.0, 2),
    spec("Icon-iPad-76", 76, "iPad App 76pt @1x", Idiom::IPad, 76.0, 1),
    spec("Icon-iPad-76@2x", 152, "iPad App 76pt @2x", Idiom::IPad, 76.0, 2),
    spec("Icon-iPad-83.5@2x", 167, "iPad Pro App 83.5pt @2x", Idiom::IPad, 83.5, 2),
    // App Store
    spec("Icon-1024", 1024, "App Store 1024pt @1x", Idiom::Marketing, 1024.0, 1),
];

/// Every icon the asset catalog requires, in stable order
pub fn app_icon_specs() -> &'static [IconSpec] {
    &APP_ICON_SPECS
}

/// Look up a table entry by identifier
pub fn find_spec(identifier: &str) -> Option<&'static IconSpec> {
    APP_ICON_SPECS.iter().find(|s| s.identifier == identifier)
}

/// Table entries for `identifiers`, in the order given, each at most once
///
/// An empty list selects the whole table.
pub fn select_specs<S: AsRef<str>>(identifiers: &[S]) -> Result<Vec<IconSpec>> {
    if identifiers.is_empty() {
        return Ok(APP_ICON_SPECS.to_vec());
    }

    let mut selected: Vec<IconSpec> = Vec::new();
    for id in identifiers {
        let id = id.as_ref();
        let spec = find_spec(id)
            .with_context(|| format!("unknown icon identifier: {}", id))?;
        if !selected.iter().any(|s| s.identifier == spec.identifier) {
            selected.push(*spec);
        }
    }

    Ok(selected)
}
