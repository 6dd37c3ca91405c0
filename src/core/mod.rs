//! Pure, platform-free logic shared by the web adapters. These modules avoid
//! `crate::` paths and web APIs so host-side tests can include them directly.

pub mod form;
pub mod pill;
pub mod silk;
pub mod stack;
pub mod text;

// Shaders bundled as string constants
pub static SILK_WGSL: &str = include_str!("../../shaders/silk.wgsl");
