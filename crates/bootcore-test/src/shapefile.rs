//! Shapefile fixtures written with the `shapefile` and `dbase` writers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use shapefile::{Point, ShapeWriter};

/// Shape type code of a 2D point.
pub const SHAPE_TYPE_POINT: i32 = 1;

// Offset of the little-endian shape type in `.shp` and `.shx` headers.
const SHAPE_TYPE_OFFSET: usize = 32;

/// Builder for a throwaway point layer.
///
/// # Example
///
/// ```
/// use bootcore_test::ShapefileFixture;
///
/// let dir = tempfile::tempdir().unwrap();
/// let shp = ShapefileFixture::points(&[(1.0, 2.0)])
///     .with_character_field("NAME", 8)
///     .write(dir.path(), "single")
///     .unwrap();
/// assert!(shp.with_extension("shx").exists());
/// assert!(shp.with_extension("dbf").exists());
/// ```
#[derive(Debug, Clone)]
pub struct ShapefileFixture {
    points: Vec<(f64, f64)>,
    declared_type: Option<i32>,
    fields: Vec<(String, u8)>,
    write_dbf: bool,
}

impl ShapefileFixture {
    /// A point layer with one record per coordinate pair.
    pub fn points(points: &[(f64, f64)]) -> Self {
        Self {
            points: points.to_vec(),
            declared_type: None,
            fields: Vec::new(),
            write_dbf: true,
        }
    }

    /// Overwrite the shape type code in the `.shp` and `.shx` headers.
    ///
    /// Records keep their point type, so this can produce a header that
    /// declares a code no reader recognizes.
    pub fn declared_type(mut self, code: i32) -> Self {
        self.declared_type = Some(code);
        self
    }

    /// Add a character (`C`) attribute column.
    ///
    /// Names longer than the dBase limit of 10 bytes are truncated. Each
    /// record stores `r{index}` in every column.
    pub fn with_character_field(mut self, name: &str, length: u8) -> Self {
        let name: String = name.chars().take(10).collect();
        self.fields.push((name, length));
        self
    }

    /// Skip writing the `.dbf` file.
    pub fn without_dbf(mut self) -> Self {
        self.write_dbf = false;
        self
    }

    /// Number of records that will be written.
    pub fn record_count(&self) -> usize {
        self.points.len()
    }

    /// Write `<stem>.shp` and `<stem>.shx` into `dir`, plus `<stem>.dbf`
    /// when at least one column is declared and the table is not disabled.
    /// Returns the `.shp` path.
    pub fn write(&self, dir: &Path, stem: &str) -> io::Result<PathBuf> {
        let shp_path = dir.join(format!("{stem}.shp"));

        let shapes: Vec<Point> = self.points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let writer = ShapeWriter::from_path(&shp_path).map_err(io::Error::other)?;
        writer.write_shapes(&shapes).map_err(io::Error::other)?;

        if let Some(code) = self.declared_type {
            patch_shape_type(&shp_path, code)?;
            patch_shape_type(&shp_path.with_extension("shx"), code)?;
        }

        if self.write_dbf && !self.fields.is_empty() {
            self.write_table(&shp_path.with_extension("dbf"))?;
        }

        Ok(shp_path)
    }

    fn write_table(&self, path: &Path) -> io::Result<()> {
        let mut builder = TableWriterBuilder::new();
        for (name, length) in &self.fields {
            let field_name = FieldName::try_from(name.as_str()).map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidInput, format!("{name}: {e:?}"))
            })?;
            builder = builder.add_character_field(field_name, *length);
        }

        let records: Vec<Record> = (0..self.points.len())
            .map(|index| {
                let mut record = Record::default();
                for (name, _) in &self.fields {
                    record.insert(
                        name.clone(),
                        FieldValue::Character(Some(format!("r{index}"))),
                    );
                }
                record
            })
            .collect();

        let writer = builder
            .build_with_file_dest(path)
            .map_err(io::Error::other)?;
        writer.write_records(&records).map_err(io::Error::other)?;
        Ok(())
    }
}

fn patch_shape_type(path: &Path, code: i32) -> io::Result<()> {
    let mut bytes = fs::read(path)?;
    let Some(slot) = bytes.get_mut(SHAPE_TYPE_OFFSET..SHAPE_TYPE_OFFSET + 4) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} is shorter than a shapefile header", path.display()),
        ));
    };
    slot.copy_from_slice(&code.to_le_bytes());
    fs::write(path, bytes)
}
