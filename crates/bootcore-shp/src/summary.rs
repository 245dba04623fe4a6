//! Reading a shapefile's geometry type, record count and attribute fields.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{ShpError, ShpResult};
use crate::geometry::GeometryType;

const HEADER_LEN: usize = 100;
const FILE_CODE: i32 = 9994;
const SHAPE_TYPE_OFFSET: usize = 32;
const RECORD_HEADER_LEN: usize = 8;

/// One attribute column declared in the `.dbf` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Column name.
    pub name: String,
    /// dBase field type, e.g. `Character` or `Numeric`.
    pub field_type: String,
    /// Declared width in bytes.
    pub length: u8,
}

/// Basic facts about a shapefile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapefileSummary {
    /// Geometry type declared in the main file header.
    pub geometry_type: GeometryType,
    /// Number of geometry records.
    pub record_count: usize,
    /// Attribute columns, empty when there is no `.dbf`.
    pub fields: Vec<FieldDescriptor>,
}

impl ShapefileSummary {
    /// Column names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

/// Summarize the shapefile at `path` (the `.shp` file).
///
/// The attribute table is looked up next to it with a `.dbf` extension.
/// Every record in the main file is counted. When the declared geometry
/// type is missing from the ESRI table the records cannot be decoded, so
/// they are counted from their record headers instead.
///
/// # Errors
///
/// Returns `ShpError` if the main file cannot be opened, its header is
/// invalid, a record cannot be decoded or runs past the end of the file,
/// or an existing `.dbf` cannot be read. No partial summary is returned.
///
/// # Example
///
/// ```no_run
/// let summary = bootcore_shp::summarize("data/roads.shp")?;
/// println!("{} x {}", summary.record_count, summary.geometry_type);
/// # Ok::<(), bootcore_shp::ShpError>(())
/// ```
pub fn summarize(path: impl AsRef<Path>) -> ShpResult<ShapefileSummary> {
    let path = path.as_ref();

    let geometry_type = read_geometry_type(path)?;
    let fields = read_fields(&path.with_extension("dbf"))?;
    let record_count = if geometry_type.is_known() {
        count_records(path)?
    } else {
        debug!(
            path = %path.display(),
            code = geometry_type.code(),
            "unrecognized shape type, counting record headers"
        );
        count_record_headers(path)?
    };

    debug!(
        path = %path.display(),
        geometry_type = %geometry_type,
        record_count,
        fields = fields.len(),
        "summarized shapefile"
    );

    Ok(ShapefileSummary {
        geometry_type,
        record_count,
        fields,
    })
}

// Read the declared type straight from the header so that codes the
// shapefile reader rejects still produce a summary.
fn read_geometry_type(path: &Path) -> ShpResult<GeometryType> {
    let mut file = File::open(path).map_err(|e| ShpError::io(path, e))?;
    let mut header = [0u8; HEADER_LEN];
    file.read_exact(&mut header).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            ShpError::invalid_header(path, "file is shorter than the 100-byte header")
        } else {
            ShpError::io(path, e)
        }
    })?;

    let file_code = i32::from_be_bytes([header[0], header[1], header[2], header[3]]);
    if file_code != FILE_CODE {
        return Err(ShpError::invalid_header(
            path,
            format!("file code {file_code}, expected {FILE_CODE}"),
        ));
    }

    let at = SHAPE_TYPE_OFFSET;
    let code = i32::from_le_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]]);
    Ok(GeometryType::from_code(code))
}

fn count_records(path: &Path) -> ShpResult<usize> {
    let mut reader =
        shapefile::ShapeReader::from_path(path).map_err(|e| ShpError::shapefile(path, e))?;

    let mut count = 0;
    for shape in reader.iter_shapes() {
        shape.map_err(|e| ShpError::shapefile(path, e))?;
        count += 1;
    }
    Ok(count)
}

// Each record starts with an 8-byte header: big-endian record number, then
// big-endian content length in 16-bit words.
fn count_record_headers(path: &Path) -> ShpResult<usize> {
    let bytes = fs::read(path).map_err(|e| ShpError::io(path, e))?;

    let mut offset = HEADER_LEN;
    let mut count = 0;
    while offset < bytes.len() {
        let Some(header) = bytes.get(offset..offset + RECORD_HEADER_LEN) else {
            return Err(ShpError::invalid_record(
                path,
                offset,
                "truncated record header",
            ));
        };
        let words = i32::from_be_bytes([header[4], header[5], header[6], header[7]]);
        let Ok(words) = usize::try_from(words) else {
            return Err(ShpError::invalid_record(
                path,
                offset,
                format!("negative content length {words}"),
            ));
        };

        let end = offset + RECORD_HEADER_LEN + words * 2;
        if end > bytes.len() {
            return Err(ShpError::invalid_record(
                path,
                offset,
                format!("content of {} bytes runs past end of file", words * 2),
            ));
        }
        offset = end;
        count += 1;
    }
    Ok(count)
}

fn read_fields(dbf_path: &Path) -> ShpResult<Vec<FieldDescriptor>> {
    if !exists(dbf_path)? {
        debug!(path = %dbf_path.display(), "no attribute table");
        return Ok(Vec::new());
    }

    let reader =
        dbase::Reader::from_path(dbf_path).map_err(|e| ShpError::dbase(dbf_path, e))?;

    Ok(reader
        .fields()
        .iter()
        .map(|field| FieldDescriptor {
            name: field.name().to_string(),
            field_type: format!("{:?}", field.field_type()),
            length: field.length(),
        })
        .collect())
}

fn exists(path: &Path) -> ShpResult<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ShpError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootcore_test::ShapefileFixture;

    #[test]
    fn test_point_layer() {
        let dir = tempfile::tempdir().unwrap();
        let shp = ShapefileFixture::points(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)])
            .write(dir.path(), "cities")
            .unwrap();

        let summary = summarize(&shp).unwrap();
        assert_eq!(summary.geometry_type, GeometryType::Point);
        assert_eq!(summary.record_count, 3);
        assert!(summary.fields.is_empty());
    }

    #[test]
    fn test_short_header() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("short.shp");
        fs::write(&shp, [0u8; 40]).unwrap();

        assert!(matches!(
            summarize(&shp),
            Err(ShpError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_wrong_file_code() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("bogus.shp");
        fs::write(&shp, [0xFFu8; HEADER_LEN]).unwrap();

        let err = summarize(&shp).unwrap_err();
        assert!(err.to_string().contains("expected 9994"));
    }

    fn point_record(number: i32) -> Vec<u8> {
        let mut record = Vec::new();
        record.extend_from_slice(&number.to_be_bytes());
        record.extend_from_slice(&10i32.to_be_bytes());
        record.extend_from_slice(&1i32.to_le_bytes());
        record.extend_from_slice(&[0u8; 16]);
        record
    }

    fn header_with_type(code: i32) -> Vec<u8> {
        let mut header = vec![0u8; HEADER_LEN];
        header[..4].copy_from_slice(&FILE_CODE.to_be_bytes());
        header[SHAPE_TYPE_OFFSET..SHAPE_TYPE_OFFSET + 4].copy_from_slice(&code.to_le_bytes());
        header
    }

    #[test]
    fn test_counts_record_headers() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("walk.shp");
        let mut bytes = header_with_type(42);
        for number in 1..=3 {
            bytes.extend(point_record(number));
        }
        fs::write(&shp, bytes).unwrap();

        assert_eq!(count_record_headers(&shp).unwrap(), 3);
        let summary = summarize(&shp).unwrap();
        assert_eq!(summary.geometry_type, GeometryType::Unknown(42));
        assert_eq!(summary.record_count, 3);
    }

    #[test]
    fn test_header_only_has_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("bare.shp");
        fs::write(&shp, header_with_type(42)).unwrap();

        assert_eq!(count_record_headers(&shp).unwrap(), 0);
    }

    #[test]
    fn test_truncated_record_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("cut.shp");
        let mut bytes = header_with_type(42);
        bytes.extend(point_record(1));
        bytes.extend(&point_record(2)[..12]);
        fs::write(&shp, bytes).unwrap();

        let err = count_record_headers(&shp).unwrap_err();
        assert!(matches!(err, ShpError::InvalidRecord { offset: 128, .. }));
    }

    #[test]
    fn test_negative_content_length_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("neg.shp");
        let mut bytes = header_with_type(42);
        bytes.extend_from_slice(&1i32.to_be_bytes());
        bytes.extend_from_slice(&(-4i32).to_be_bytes());
        fs::write(&shp, bytes).unwrap();

        let err = summarize(&shp).unwrap_err();
        assert!(err.to_string().contains("negative content length -4"));
    }

    #[test]
    fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(exists(dir.path()).unwrap());
        assert!(!exists(&dir.path().join("nope.dbf")).unwrap());
    }
}
