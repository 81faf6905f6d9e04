//! Visual theme: global stylesheet and status colors.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
