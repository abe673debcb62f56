use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::geo::LatLon;

#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { kind: "FeatureCollection", features }
    }
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: Geometry,
    pub properties: Properties,
    /// Source line, kept for debugging in downstream viewers.
    pub raw: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    LineString { coordinates: Vec<[f64; 2]> },
}

impl Geometry {
    /// Exactly 4 corners close into a quadrilateral ring; any other count
    /// stays a line through the points in input order.
    fn from_path(coords: &[LatLon]) -> Geometry {
        let positions: Vec<[f64; 2]> = coords.iter().map(|c| c.position()).collect();
        if positions.len() == 4 {
            let mut ring = positions;
            ring.push(ring[0]);
            Geometry::Polygon { coordinates: vec![ring] }
        } else {
            Geometry::LineString { coordinates: positions }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Properties {
    pub airport: String,
    pub runway: String,
    pub taxitime: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<Vec<String>>,
}

// Taxitime is opaque to the conversion: a whole number stays an integer, a
// decimal stays a number, anything else rides along as text.
fn taxitime_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::from(f);
    }
    Value::from(raw)
}

/// Build a Feature from one apron/taxi record. Blank lines, comments and
/// lines with fewer than 3 fields are skipped, not errors.
pub fn line_to_feature(line: &str) -> Result<Option<Feature>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split(':').collect();
    if parts.len() < 3 {
        return Ok(None);
    }

    let airport = parts[0].trim();
    let runway = parts[1].trim();
    let mut rest = &parts[2..];

    // Remarks always live in the last field, flagged by a comma.
    let mut remarks = None;
    if let Some(last) = rest.last() {
        if last.contains(',') {
            let listed: Vec<String> = last
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect();
            remarks = Some(listed);
            rest = &rest[..rest.len() - 1];
        }
    }
    if rest.is_empty() {
        return Ok(None);
    }

    let taxitime = rest[rest.len() - 1].trim();
    let coord_tokens = &rest[..rest.len() - 1];

    if coord_tokens.len() < 4 || coord_tokens.len() % 2 != 0 {
        return Err(Error::FieldCount {
            message: format!("Bad coordinate token count on line: {:?}", line),
        });
    }

    let mut coords = Vec::with_capacity(coord_tokens.len() / 2);
    for (lat_s, lon_s) in coord_tokens.iter().tuples() {
        let lat = parse_float(lat_s, line)?;
        let lon = parse_float(lon_s, line)?;
        coords.push(LatLon::new(lat, lon));
    }

    Ok(Some(Feature {
        kind: "Feature",
        geometry: Geometry::from_path(&coords),
        properties: Properties {
            airport: airport.to_string(),
            runway: runway.to_string(),
            taxitime: taxitime_value(taxitime),
            remarks,
        },
        raw: line.to_string(),
    }))
}

fn parse_float(token: &str, line: &str) -> Result<f64> {
    token.trim().parse().map_err(|_| Error::Format {
        message: format!("Non-numeric coordinate value {:?} in line: {:?}", token, line),
    })
}

/// Convert a whole input file. All-or-nothing: the first bad line aborts the
/// conversion with its 1-based line number.
pub fn collection_from_text(text: &str) -> Result<FeatureCollection> {
    let mut features = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        match line_to_feature(line) {
            Ok(Some(feature)) => features.push(feature),
            Ok(None) => (),
            Err(e) => return Err(e.at_line(idx + 1)),
        }
    }
    Ok(FeatureCollection::new(features))
}
