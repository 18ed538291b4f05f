#![forbid(unsafe_code)]

mod output;

pub use output::{init_tracing, summarize, write_geojson};
