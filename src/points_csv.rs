//! Reading query points from, and writing matches to, CSV files.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::{debug, info};

use crate::dms::{self, Direction};
use crate::error::{ClosestError, Result};
use crate::geo::Coordinate;
use crate::input::{parse_number, Format};
use crate::nearest::Match;

/// Column layout of a points file.
///
/// For [`Format::Decimal`] the columns are `lat_col` and `lon_col` themselves. For
/// [`Format::Dms`] each is a prefix of four columns: `_deg`, `_min`, `_sec`, `_dir`.
#[derive(Clone, Debug)]
pub struct Columns {
    pub lat_col: String,
    pub lon_col: String,
    pub format: Format,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            lat_col: String::from("latitude"),
            lon_col: String::from("longitude"),
            format: Format::Decimal,
        }
    }
}

/// A located header: its position and its name for error messages.
struct Column {
    index: usize,
    name: String,
}

impl Column {
    fn locate(headers: &StringRecord, name: &str) -> Result<Self> {
        let index = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ClosestError::InvalidInput(format!("missing column {:?}", name)))?;
        Ok(Self {
            index,
            name: name.to_string(),
        })
    }

    fn cell<'r>(&self, record: &'r StringRecord, row: usize) -> Result<&'r str> {
        record
            .get(self.index)
            .map(str::trim)
            .ok_or_else(|| ClosestError::InvalidInput(format!("row {}: missing column {:?}", row, self.name)))
    }

    fn number(&self, record: &StringRecord, row: usize) -> Result<f32> {
        parse_number(self.cell(record, row)?, &format!("row {} column {:?}", row, self.name))
    }
}

enum Axis {
    Decimal(Column),
    Dms {
        deg: Column,
        min: Column,
        sec: Column,
        dir: Column,
    },
}

impl Axis {
    fn locate(headers: &StringRecord, prefix: &str, format: Format) -> Result<Self> {
        match format {
            Format::Decimal => Ok(Axis::Decimal(Column::locate(headers, prefix)?)),
            Format::Dms => Ok(Axis::Dms {
                deg: Column::locate(headers, &format!("{}_deg", prefix))?,
                min: Column::locate(headers, &format!("{}_min", prefix))?,
                sec: Column::locate(headers, &format!("{}_sec", prefix))?,
                dir: Column::locate(headers, &format!("{}_dir", prefix))?,
            }),
        }
    }

    fn value(&self, record: &StringRecord, row: usize) -> Result<f32> {
        match self {
            Axis::Decimal(column) => column.number(record, row),
            Axis::Dms { deg, min, sec, dir } => {
                let direction = dir.cell(record, row)?.parse::<Direction>().map_err(|err| {
                    ClosestError::InvalidInput(format!("row {} column {:?}: {}", row, dir.name, err))
                })?;
                Ok(dms::to_decimal(
                    deg.number(record, row)?,
                    min.number(record, row)?,
                    sec.number(record, row)?,
                    direction,
                ))
            }
        }
    }
}

/// Reads every row of a headed CSV into a coordinate.
pub fn read_points<R: Read>(reader: R, columns: &Columns) -> Result<Vec<Coordinate>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let lat = Axis::locate(&headers, &columns.lat_col, columns.format)?;
    let lon = Axis::locate(&headers, &columns.lon_col, columns.format)?;

    let mut points = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based, header excluded.
        let row = row + 1;
        points.push(Coordinate::new(lat.value(&record, row)?, lon.value(&record, row)?));
    }
    debug!(count = points.len(), "read points");
    Ok(points)
}

pub fn read_points_from_path(path: &str, columns: &Columns) -> Result<Vec<Coordinate>> {
    let file = std::fs::File::open(path)?;
    read_points(file, columns)
}

pub fn write_matches<W: Write>(writer: W, matches: &[Match]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record([
        "query_index",
        "query_lat",
        "query_lon",
        "closest_index",
        "closest_lat",
        "closest_lon",
        "distance",
    ])?;
    for m in matches {
        wtr.write_record(&[
            m.query_index.to_string(),
            m.query.lat.to_string(),
            m.query.lon.to_string(),
            m.nearest.index.to_string(),
            m.nearest.point.lat.to_string(),
            m.nearest.point.lon.to_string(),
            format!("{:.6}", m.nearest.distance),
        ])?;
    }
    wtr.flush()?;
    info!(rows = matches.len(), "wrote matches");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Metric;
    use crate::nearest::closest_points;
    use crate::reference::REFERENCE_POINTS;

    #[test]
    fn decimal_columns() {
        let data = "latitude,longitude\n42.3601,-71.0589\n40.7128,-74.0060\n";
        let points = read_points(data.as_bytes(), &Columns::default()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Coordinate::new(40.7128, -74.0060));
    }

    #[test]
    fn dms_columns() {
        let data = "\
latitude_deg,latitude_min,latitude_sec,latitude_dir,longitude_deg,longitude_min,longitude_sec,longitude_dir
42,21,36,N,71,3,32,W
40,42,46,N,74,0,22,W
";
        let columns = Columns {
            format: Format::Dms,
            ..Columns::default()
        };
        let points = read_points(data.as_bytes(), &columns).unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[0].lat - 42.36).abs() < 0.005);
        assert!((points[0].lon - -71.059).abs() < 0.0005);
    }

    #[test]
    fn custom_column_names() {
        let data = "name,lat,lng\nhome,37.0,-122.0\n";
        let columns = Columns {
            lat_col: "lat".into(),
            lon_col: "lng".into(),
            format: Format::Decimal,
        };
        let points = read_points(data.as_bytes(), &columns).unwrap();
        assert_eq!(points, vec![Coordinate::new(37.0, -122.0)]);
    }

    #[test]
    fn missing_column() {
        let data = "lat,lon\n1,2\n";
        let err = read_points(data.as_bytes(), &Columns::default()).unwrap_err();
        assert!(matches!(err, ClosestError::InvalidInput(msg) if msg.contains("latitude")));
    }

    #[test]
    fn bad_cell() {
        let data = "latitude,longitude\n1.0,2.0\nnorth,2.0\n";
        let err = read_points(data.as_bytes(), &Columns::default()).unwrap_err();
        assert!(matches!(err, ClosestError::InvalidInput(msg) if msg.contains("row 2")));
    }

    #[test]
    fn nan_cell() {
        let data = "latitude,longitude\n1.0,2.0\n3.0,NaN\n";
        let err = read_points(data.as_bytes(), &Columns::default()).unwrap_err();
        assert!(matches!(err, ClosestError::InvalidInput(msg) if msg.contains("row 2") && msg.contains("longitude")));
    }

    #[test]
    fn dms_error_names_the_column() {
        let data = "\
latitude_deg,latitude_min,latitude_sec,latitude_dir,longitude_deg,longitude_min,longitude_sec,longitude_dir
42,21,x,N,71,3,32,W
";
        let columns = Columns {
            format: Format::Dms,
            ..Columns::default()
        };
        let err = read_points(data.as_bytes(), &columns).unwrap_err();
        assert!(matches!(err, ClosestError::InvalidInput(msg) if msg.contains("row 1") && msg.contains("latitude_sec")));
    }

    #[test]
    fn written_rows() {
        let queries = [Coordinate::new(37.0, -122.0), Coordinate::new(40.0, -74.0)];
        let matches = closest_points(&queries, &REFERENCE_POINTS, Metric::Haversine).unwrap();
        let mut out = Vec::new();
        write_matches(&mut out, &matches).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("query_index,"));
        assert!(lines[1].starts_with("0,37,-122,0,37.7749,-122.4194,"));
        assert!(lines[2].starts_with("1,40,-74,2,40.7128,-74.006,"));
    }
}
