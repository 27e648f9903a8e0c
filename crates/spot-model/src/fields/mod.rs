//! Value objects making up a study spot
//!
//! Each field validates its raw text on construction and carries a fixed
//! constraints message reported when validation fails.

mod address;
mod amenity;
mod name;
mod operating_hours;
mod rating;
mod studied_hours;
mod tag;

pub use address::Address;
pub use amenity::Amenity;
pub use name::Name;
pub use operating_hours::{OperatingHours, TimeRange};
pub use rating::Rating;
pub use studied_hours::StudiedHours;
pub use tag::Tag;
