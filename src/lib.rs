// Library exports for the icon binaries and tests
pub mod alarm;
pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod glyphs;
pub mod icon_spec;
pub mod logging;
pub mod manifest;
pub mod render;
pub mod writer;

pub use generate::{generate_all, generate_all_icons, GenerationReport, Generator};
pub use icon_spec::{app_icon_specs, IconSpec};
