//! Visual theme for the APOD gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
