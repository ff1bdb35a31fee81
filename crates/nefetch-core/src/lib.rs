pub mod config;
pub mod logging;

pub mod dataset;
pub mod fetch;
pub mod geojson;
pub mod status;
pub mod sync;
