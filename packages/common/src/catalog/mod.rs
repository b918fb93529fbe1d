//! Gallery data model, reference lists, and the embedded catalog.

mod category;
mod embedded;
mod observatory;
mod records;
mod stats;

pub use category::{CATEGORIES, CategoryInfo, category_info};
pub use embedded::{CatalogError, StaticCatalog};
pub use observatory::{OBSERVATORIES, Observatory, find_observatory, observatory_label};
pub use records::{
    Category, ImageRecord, ObservatoryCode, REMOTE_ID_PREFIX, TravelPhotoRecord, UnknownCategory,
};
pub use stats::{AVERAGE_DISTANCES, HOURS_PER_OBJECT, SkyStats};
