//! Summaries of ESRI shapefiles.
//!
//! [`summarize`] opens a `.shp` file and reports three facts:
//!
//! - the geometry type declared in its header, as a [`GeometryType`]
//! - the number of geometry records
//! - the attribute columns of the sibling `.dbf` table
//!
//! ```no_run
//! use bootcore_shp::summarize;
//!
//! let summary = summarize("parcels.shp")?;
//! for name in summary.field_names() {
//!     println!("{name}");
//! }
//! # Ok::<(), bootcore_shp::ShpError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod geometry;
mod summary;

pub use error::{ShpError, ShpResult};
pub use geometry::{GeometryType, UNKNOWN_NAME};
pub use summary::{summarize, FieldDescriptor, ShapefileSummary};
