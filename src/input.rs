use std::io::{self, BufRead};

use crate::dms::{self, Direction};
use crate::error::{ClosestError, Result};
use crate::geo::Coordinate;

/// How a coordinate is written on input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `lat lon` in decimal degrees.
    #[default]
    Decimal,
    /// `lat_deg lat_min lat_sec lat_dir lon_deg lon_min lon_sec lon_dir`.
    Dms,
}

impl Format {
    pub fn from(string: &str) -> Result<Self> {
        match string {
            "decimal" => Ok(Format::Decimal),
            "dms" => Ok(Format::Dms),
            _ => Err(ClosestError::UnknownOption {
                kind: "format",
                value: string.to_string(),
                options: "(\"decimal\", \"dms\")",
            }),
        }
    }

    pub fn token_count(&self) -> usize {
        match self {
            Format::Decimal => 2,
            Format::Dms => 8,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Format::Decimal => "Enter the latitude and longitude of the point: ",
            Format::Dms => "Enter the point as: lat_deg lat_min lat_sec lat_dir lon_deg lon_min lon_sec lon_dir (e.g. 42 21 36 N 71 3 32 W): ",
        }
    }
}

/// `f32::from_str` also accepts `nan` and `inf`; neither is a coordinate.
pub(crate) fn parse_number(token: &str, what: &str) -> Result<f32> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ClosestError::InvalidInput(format!(
            "{} must be a finite number, got {:?}",
            what, token
        ))),
    }
}

/// Parses exactly `format.token_count()` tokens into a coordinate.
pub fn parse_tokens(tokens: &[&str], format: Format) -> Result<Coordinate> {
    if tokens.len() != format.token_count() {
        return Err(ClosestError::InvalidInput(format!(
            "expected {} values, got {}",
            format.token_count(),
            tokens.len()
        )));
    }
    match format {
        Format::Decimal => Ok(Coordinate::new(
            parse_number(tokens[0], "latitude")?,
            parse_number(tokens[1], "longitude")?,
        )),
        Format::Dms => {
            let lat = dms::to_decimal(
                parse_number(tokens[0], "latitude degrees")?,
                parse_number(tokens[1], "latitude minutes")?,
                parse_number(tokens[2], "latitude seconds")?,
                tokens[3].parse::<Direction>()?,
            );
            let lon = dms::to_decimal(
                parse_number(tokens[4], "longitude degrees")?,
                parse_number(tokens[5], "longitude minutes")?,
                parse_number(tokens[6], "longitude seconds")?,
                tokens[7].parse::<Direction>()?,
            );
            Ok(Coordinate::new(lat, lon))
        }
    }
}

pub fn parse_line(line: &str, format: Format) -> Result<Coordinate> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    parse_tokens(&tokens, format)
}

/// Reads whitespace-separated tokens, across line breaks if needed, until one
/// coordinate's worth has been collected. Tokens after that on the same line are
/// rejected.
pub fn read_coordinate<R: BufRead>(reader: &mut R, format: Format) -> Result<Coordinate> {
    let mut buffer = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => ClosestError::InvalidInput(format!("input is not valid UTF-8: {}", err)),
            _ => ClosestError::Io(err),
        })?;
        buffer.push_str(&line);
        let count = buffer.split_whitespace().count();
        if count >= format.token_count() {
            return parse_line(&buffer, format);
        }
        if read == 0 {
            return Err(ClosestError::InvalidInput(format!(
                "input ended after {} of {} values",
                count,
                format.token_count()
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decimal_line() {
        let c = parse_line("37.0 -122.0", Format::Decimal).unwrap();
        assert_eq!(c, Coordinate::new(37.0, -122.0));
    }

    #[test]
    fn dms_line() {
        let c = parse_line("42 21 36 N 71 3 32 W", Format::Dms).unwrap();
        assert!((c.lat - 42.36).abs() < 0.005);
        assert!((c.lon - -71.059).abs() < 0.0005);
    }

    #[test]
    fn non_numeric_is_invalid_input() {
        assert!(matches!(
            parse_line("abc 12", Format::Decimal),
            Err(ClosestError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_line("42 21 36 X 71 3 32 W", Format::Dms),
            Err(ClosestError::InvalidInput(_))
        ));
    }

    #[test]
    fn nan_and_infinity_are_invalid_input() {
        for line in ["nan nan", "inf 0", "NaN 0", "infinity 5", "1.0 -inf"] {
            assert!(
                matches!(parse_line(line, Format::Decimal), Err(ClosestError::InvalidInput(_))),
                "{:?} was accepted",
                line
            );
        }
        assert!(matches!(
            parse_line("42 21 nan N 71 3 32 W", Format::Dms),
            Err(ClosestError::InvalidInput(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_invalid_input() {
        let mut input = Cursor::new(vec![0xff, b' ', b'1', b'\n']);
        let err = read_coordinate(&mut input, Format::Decimal).unwrap_err();
        assert!(matches!(err, ClosestError::InvalidInput(_)));
    }

    #[test]
    fn wrong_token_count() {
        assert!(parse_line("1.0", Format::Decimal).is_err());
        assert!(parse_line("1.0 2.0 3.0", Format::Decimal).is_err());
    }

    #[test]
    fn read_across_lines() {
        let mut input = Cursor::new("  37.0\n-122.0\n");
        let c = read_coordinate(&mut input, Format::Decimal).unwrap();
        assert_eq!(c, Coordinate::new(37.0, -122.0));
    }

    #[test]
    fn read_hits_eof() {
        let mut input = Cursor::new("37.0");
        let err = read_coordinate(&mut input, Format::Decimal).unwrap_err();
        assert!(matches!(err, ClosestError::InvalidInput(_)));

        let mut empty = Cursor::new("");
        assert!(read_coordinate(&mut empty, Format::Decimal).is_err());
    }

    #[test]
    fn format_from_str() {
        assert_eq!(Format::from("dms").unwrap(), Format::Dms);
        assert!(Format::from("utm").is_err());
    }
}
