pub mod image;
pub mod travel_photo;
