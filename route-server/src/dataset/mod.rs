//! Edge dataset loading.
//!
//! The network is described by a table of segments, one row per physical
//! connection between two stations on a line:
//!
//! ```text
//! id1,id2,name1,name2,length,line
//! 0101,0102,Xinzhuang,Waihuanlu,1560,L1
//! ```
//!
//! The same table is also accepted as a JSON array of objects with those
//! keys, whose values may be strings or numbers. Optionally a second table
//! maps tourist attractions to the station that serves them.

mod attractions;
mod error;
mod loader;
mod record;

pub use attractions::{AttractionIndex, AttractionRecord};
pub use error::DatasetError;
pub use loader::{DatasetFormat, load_attractions, load_edges, read_csv, read_edges_json, read_json};
pub use record::EdgeRecord;
