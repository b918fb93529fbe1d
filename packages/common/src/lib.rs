pub mod catalog;
pub mod config;
pub mod site;
pub mod storage;
pub mod widgets;

pub use catalog::{Category, ImageRecord, ObservatoryCode, StaticCatalog, TravelPhotoRecord};
