pub mod duration;
mod fetch;
mod heuristic;
mod normalizer;
mod query;
mod root;
mod structured;

pub use fetch::{Fetcher, Importer, parse_url};
pub use normalizer::normalize;
pub use query::*;
pub use root::*;
