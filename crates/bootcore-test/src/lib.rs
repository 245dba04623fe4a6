//! # Bootcore Test
//!
//! On-disk fixtures for testing bootcore crates without checked-in binary
//! files.
//!
//! - [`ConfigDir`] - a temporary directory holding a `config.yaml`
//! - [`ShapefileFixture`] - writes a `.shp`/`.shx`/`.dbf` point layer
//!
//! ## Example
//!
//! ```
//! use bootcore_test::{ConfigDir, ShapefileFixture};
//!
//! let dir = ConfigDir::with_config("server:\n  port: 8080\n").unwrap();
//! assert!(dir.config_path().exists());
//!
//! let shp = ShapefileFixture::points(&[(1.0, 2.0), (3.0, 4.0)])
//!     .with_character_field("NAME", 16)
//!     .write(dir.path(), "cities")
//!     .unwrap();
//! assert!(shp.with_extension("dbf").exists());
//! ```

#![doc(html_root_url = "https://docs.rs/bootcore-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config_dir;
mod shapefile;

pub use config_dir::ConfigDir;
pub use crate::shapefile::{ShapefileFixture, SHAPE_TYPE_POINT};
