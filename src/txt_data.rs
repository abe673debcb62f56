use std::ops::Range;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::geo::{self, Axis, Direction, Dms};

/// Positions of the 8 coordinate fields in a runway record, alternating
/// lat/lon starting with latitude.
pub const COORD_FIELDS: Range<usize> = 2..10;

/// Convert the coordinate fields of a generic `id:rw:lat:lon:...:tail` record
/// from decimal degrees to hemisphere DMS.
///
/// Blank and comment lines yield `None` and are dropped from output, unlike
/// the runway tools which pass them through.
pub fn convert_generic_line(line: &str) -> Result<Option<String>> {
    let stripped = line.trim();
    if stripped.is_empty() || stripped.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = stripped.split(':').collect();
    if parts.len() < 5 {
        return Err(Error::FieldCount {
            message: format!("Line doesn't look like expected format (too few fields): {:?}", line),
        });
    }

    let head = &parts[..2];
    let tail = parts[parts.len() - 1];
    let coord_fields = &parts[2..parts.len() - 1];

    if coord_fields.len() % 2 != 0 {
        return Err(Error::FieldCount {
            message: format!("Odd number of coordinate fields (lat/lon pairs expected): {:?}", line),
        });
    }

    let mut out: Vec<String> = head.iter().map(|s| s.to_string()).collect();
    for (lat_s, lon_s) in coord_fields.iter().tuples() {
        let parsed = (lat_s.trim().parse::<f64>(), lon_s.trim().parse::<f64>());
        let (lat, lon) = match parsed {
            (Ok(lat), Ok(lon)) => (lat, lon),
            _ => {
                return Err(Error::Format {
                    message: format!(
                        "Non-numeric coordinate value(s) {:?}, {:?} in line: {:?}",
                        lat_s, lon_s, line
                    ),
                });
            }
        };
        out.push(Dms::from_decimal(lat, Axis::Lat).to_string());
        out.push(Dms::from_decimal(lon, Axis::Lon).to_string());
    }
    out.push(tail.to_string());

    Ok(Some(out.join(":")))
}

/// Split a runway record and enforce its fixed schema: 11 fields, or 12 when
/// a remarks field is appended.
pub fn runway_fields(line: &str) -> Result<Vec<&str>> {
    let parts: Vec<&str> = line.trim().split(':').collect();
    if parts.len() != 11 && parts.len() != 12 {
        return Err(Error::FieldCount {
            message: format!(
                "Unexpected field count {} (expected 11 or 12) in line: {:?}",
                parts.len(),
                line
            ),
        });
    }
    Ok(parts)
}

/// Convert the 8 coordinate fields of a runway record in place. Taxitime and
/// remarks are carried through untouched.
pub fn convert_runway_fields(
    fields: &[&str],
    direction: Direction,
    places: usize,
) -> Result<String> {
    let mut out: Vec<String> = fields.iter().map(|s| s.to_string()).collect();

    for (j, idx) in COORD_FIELDS.enumerate() {
        let axis = if j % 2 == 0 { Axis::Lat } else { Axis::Lon };
        let raw = fields[idx].trim();
        out[idx] = match direction {
            Direction::Reverse => {
                geo::format_decimal(Dms::parse(raw, axis)?.to_decimal(), places)
            }
            Direction::Forward => {
                let dec: f64 = raw.parse().map_err(|_| Error::Format {
                    message: format!("Non-numeric coordinate value {:?}", raw),
                })?;
                Dms::from_decimal(dec, axis).to_string()
            }
        };
    }

    Ok(out.join(":"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FORWARD_RECORD: &str = "EBBR:25R:50.9008489:4.4756856:50.9008489:4.4756856:\
                                  50.9008489:4.4756856:50.9008489:4.4756856:12";
    const REVERSE_RECORD: &str = "EBBR:25R:N050.54.03.056:E004.28.32.468:N050.54.03.056:\
                                  E004.28.32.468:N050.54.03.056:E004.28.32.468:\
                                  N050.54.03.056:E004.28.32.468:12";

    #[test]
    fn generic_record_converts_pairs_in_place() {
        let out = convert_generic_line("KXYZ:09:50.9008489:4.4756856:TAIL").unwrap();
        assert_eq!(out, Some("KXYZ:09:N050.54.03.056:E004.28.32.468:TAIL".to_string()));
    }

    #[test]
    fn generic_record_takes_any_even_pair_count() {
        let out = convert_generic_line("KXYZ:09:50.9008489:4.4756856:-50.9008489:-4.4756856:TAIL")
            .unwrap();
        assert_eq!(
            out,
            Some(
                "KXYZ:09:N050.54.03.056:E004.28.32.468:S050.54.03.056:W004.28.32.468:TAIL"
                    .to_string()
            )
        );
    }

    #[test]
    fn generic_comment_and_blank_lines_are_dropped() {
        assert_eq!(convert_generic_line("# note").unwrap(), None);
        assert_eq!(convert_generic_line("   ").unwrap(), None);
        assert_eq!(convert_generic_line("").unwrap(), None);
    }

    #[test]
    fn generic_too_few_fields_is_a_field_count_error() {
        let err = convert_generic_line("KXYZ:09:50.9008489:TAIL").unwrap_err();
        match err {
            Error::FieldCount { message } => assert!(message.contains("too few fields")),
            other => panic!("wrong variant: {}", other),
        }
    }

    #[test]
    fn generic_odd_coordinate_count_is_a_field_count_error() {
        let err = convert_generic_line("KXYZ:09:1.0:2.0:3.0:TAIL").unwrap_err();
        match err {
            Error::FieldCount { message } => {
                assert!(message.contains("Odd number of coordinate fields"))
            }
            other => panic!("wrong variant: {}", other),
        }
    }

    #[test]
    fn generic_non_numeric_pair_quotes_both_tokens() {
        let err = convert_generic_line("KXYZ:09:abc:4.4756856:TAIL").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"abc\""));
        assert!(message.contains("\"4.4756856\""));
    }

    #[test]
    fn runway_forward_converts_only_coordinate_fields() {
        let fields = runway_fields(FORWARD_RECORD).unwrap();
        let out = convert_runway_fields(&fields, Direction::Forward, 7).unwrap();
        assert_eq!(out, REVERSE_RECORD);
    }

    #[test]
    fn runway_reverse_reproduces_the_decimal_record() {
        let fields = runway_fields(REVERSE_RECORD).unwrap();
        let out = convert_runway_fields(&fields, Direction::Reverse, 7).unwrap();
        assert_eq!(out, FORWARD_RECORD);
    }

    #[test]
    fn runway_remarks_field_is_untouched() {
        let line = format!("{}:GATE A1,HOLD SHORT", FORWARD_RECORD);
        let fields = runway_fields(&line).unwrap();
        let out = convert_runway_fields(&fields, Direction::Forward, 7).unwrap();
        assert!(out.ends_with(":12:GATE A1,HOLD SHORT"));
    }

    #[test]
    fn runway_rejects_wrong_field_counts() {
        assert!(runway_fields("EBBR:25R:1:2:3:4:5:6:7:8").is_err());
        let err = runway_fields("EBBR:25R:1:2:3").unwrap_err();
        assert!(err.to_string().contains("Unexpected field count 5"));
    }

    #[test]
    fn runway_reverse_propagates_dms_parse_errors() {
        let line = REVERSE_RECORD.replace("E004.28.32.468", "4.47");
        let fields = runway_fields(&line).unwrap();
        let err = convert_runway_fields(&fields, Direction::Reverse, 7).unwrap_err();
        assert!(err.to_string().contains("Longitude must start with E or W"));
    }
}
