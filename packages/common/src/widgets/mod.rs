//! Interaction state for the gallery front end, kept as explicit state
//! objects with transition methods.

mod album_filter;
mod comparison;
mod counter;
mod menu;
mod viewer;

pub use album_filter::{AlbumCount, AlbumFilter, AlbumSelection};
pub use comparison::ComparisonSlider;
pub use counter::{CounterAnimation, ease_out_cubic};
pub use menu::MenuToggle;
pub use viewer::{ImageViewer, ScrollEffect, ViewerEvent, ViewerState};
