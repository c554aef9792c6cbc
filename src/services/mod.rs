//! Lookup services built on the search sources and the ranker.

mod image_finder;
mod lookup;
mod spec_sheet;

pub use image_finder::{ImageFinder, ImageMiss};
pub use lookup::EquipmentLookup;
pub use spec_sheet::SpecSheetFinder;
