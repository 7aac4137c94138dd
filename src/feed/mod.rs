//! GTFS static feed input.
//!
//! Record structs for the tables this pipeline consumes and CSV
//! readers for loading them from an extracted feed directory.

pub mod reader;
pub mod records;

pub use reader::{Feed, read_feed, read_routes, read_stops, read_trips};
pub use records::{Route, Stop, Trip};
