use std::fmt;

use crate::error::{Error, Result};

/// Which hemisphere alphabet a coordinate uses: N/S for latitude, E/W for
/// longitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Lat,
    Lon,
}

/// Conversion direction. Forward is decimal degrees to hemisphere DMS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    /// Zero maps to the positive hemisphere (N/E).
    pub fn of(value: f64, axis: Axis) -> Hemisphere {
        match axis {
            Axis::Lat => {
                if value >= 0.0 {
                    Hemisphere::N
                } else {
                    Hemisphere::S
                }
            }
            Axis::Lon => {
                if value >= 0.0 {
                    Hemisphere::E
                } else {
                    Hemisphere::W
                }
            }
        }
    }

    pub fn letter(self) -> char {
        match self {
            Hemisphere::N => 'N',
            Hemisphere::S => 'S',
            Hemisphere::E => 'E',
            Hemisphere::W => 'W',
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Hemisphere::S | Hemisphere::W => true,
            Hemisphere::N | Hemisphere::E => false,
        }
    }

    fn from_letter(c: char, axis: Axis) -> Option<Hemisphere> {
        match (c.to_ascii_uppercase(), axis) {
            ('N', Axis::Lat) => Some(Hemisphere::N),
            ('S', Axis::Lat) => Some(Hemisphere::S),
            ('E', Axis::Lon) => Some(Hemisphere::E),
            ('W', Axis::Lon) => Some(Hemisphere::W),
            _ => None,
        }
    }
}

/// Hemisphere-prefixed DMS coordinate, the aviation `HDDD.MM.SS.mmm` form.
///
/// Invariants: min < 60, sec < 60, msec < 1000. Degrees carry no upper bound;
/// values of 1000 or more overflow the 3-digit field silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dms {
    pub hem: Hemisphere,
    pub deg: u32,
    pub min: u32,
    pub sec: u32,
    pub msec: u32,
}

/// Normalize a raw (degree, minute, seconds) split into integral DMS fields.
///
/// Seconds are rounded half-up to 3 decimals. Seconds that round to 60.000
/// carry into the minute and minutes into the degree; the millisecond split
/// gets the same cascade a second time in case its own rounding overflows.
fn normalize(mut deg: u32, mut minute: u32, seconds: f64) -> (u32, u32, u32, u32) {
    let mut seconds = (seconds * 1000.0).round() / 1000.0;
    if seconds >= 60.0 {
        seconds -= 60.0;
        minute += 1;
    }
    if minute >= 60 {
        minute -= 60;
        deg += 1;
    }

    let mut sec = seconds.trunc() as u32;
    let mut msec = ((seconds - f64::from(sec)) * 1000.0).round() as u32;
    if msec == 1000 {
        msec = 0;
        sec += 1;
        if sec >= 60 {
            sec = 0;
            minute += 1;
            if minute >= 60 {
                minute = 0;
                deg += 1;
            }
        }
    }

    (deg, minute, sec, msec)
}

impl Dms {
    pub fn from_decimal(value: f64, axis: Axis) -> Dms {
        let hem = Hemisphere::of(value, axis);

        let v = value.abs();
        let deg = v.trunc() as u32;
        let minutes_full = (v - f64::from(deg)) * 60.0;
        let minute = minutes_full.trunc() as u32;
        let seconds = (minutes_full - f64::from(minute)) * 60.0;

        let (deg, min, sec, msec) = normalize(deg, minute, seconds);
        Dms { hem, deg, min, sec, msec }
    }

    /// Parse `HDDD.MM.SS.mmm`. The hemisphere letter must match the axis.
    pub fn parse(text: &str, axis: Axis) -> Result<Dms> {
        let s = text.trim();
        if s.len() < 2 {
            return Err(Error::Format { message: format!("Too short for DMS: {:?}", text) });
        }

        let first = s.chars().next().unwrap();
        let hem = Hemisphere::from_letter(first, axis).ok_or_else(|| {
            let expected = match axis {
                Axis::Lat => "Latitude must start with N or S",
                Axis::Lon => "Longitude must start with E or W",
            };
            Error::Format { message: format!("{}, got {:?}", expected, text) }
        })?;

        let groups: Vec<&str> = s[first.len_utf8()..].split('.').collect();
        if groups.len() != 4 {
            return Err(Error::Format {
                message: format!("DMS must look like HDDD.MM.SS.mmm, got {:?}", text),
            });
        }

        let parse_group = |g: &str| -> Result<u32> {
            g.parse().map_err(|_| Error::Format {
                message: format!("Non-numeric DMS components in {:?}", text),
            })
        };
        let deg = parse_group(groups[0])?;
        let min = parse_group(groups[1])?;
        let sec = parse_group(groups[2])?;
        let msec = parse_group(groups[3])?;

        if min >= 60 {
            return Err(Error::Range { message: format!("Minutes out of range in {:?}", text) });
        }
        if sec >= 60 {
            return Err(Error::Range { message: format!("Seconds out of range in {:?}", text) });
        }
        if msec >= 1000 {
            return Err(Error::Range {
                message: format!("Milliseconds out of range in {:?}", text),
            });
        }

        Ok(Dms { hem, deg, min, sec, msec })
    }

    pub fn to_decimal(self) -> f64 {
        let seconds = f64::from(self.sec) + f64::from(self.msec) / 1000.0;
        let dec = f64::from(self.deg) + f64::from(self.min) / 60.0 + seconds / 3600.0;
        if self.hem.is_negative() {
            -dec
        } else {
            dec
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{:03}.{:02}.{:02}.{:03}",
            self.hem.letter(),
            self.deg,
            self.min,
            self.sec,
            self.msec
        )
    }
}

/// Render a decimal coordinate with a fixed number of decimal places.
pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

/// Ordered latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    /// GeoJSON positions are [lon, lat].
    pub fn position(self) -> [f64; 2] {
        [self.1, self.0]
    }
}
