use lazy_static::lazy_static;
use regex::Regex;

use crate::geo::Direction;

/// Minimum hit count for the majority vote over the 8 coordinate fields of a
/// runway record. Tunable, but the tools expect exactly this threshold.
pub const DETECT_MAJORITY: usize = 4;

lazy_static! {
    static ref DMS_REGEX: Regex =
        Regex::new(r"(?i)^[NSEW]\d{3}\.\d{2}\.\d{2}\.\d{3}$").unwrap();
}

pub fn looks_like_dms(s: &str) -> bool {
    DMS_REGEX.is_match(s.trim())
}

pub fn looks_like_decimal(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}

/// Guess the conversion direction from a record's coordinate fields.
///
/// Unanimous fields decide outright. Mixed fields fall back to a majority
/// vote so a few hand-mangled tokens don't flip the whole record; anything
/// below the threshold is undecidable.
pub fn detect_direction(coords: &[&str]) -> Option<Direction> {
    let dms_hits = coords.iter().filter(|s| looks_like_dms(s)).count();
    let dec_hits = coords.iter().filter(|s| looks_like_decimal(s)).count();

    if dms_hits == coords.len() && dec_hits == 0 {
        return Some(Direction::Reverse);
    }
    if dec_hits == coords.len() && dms_hits == 0 {
        return Some(Direction::Forward);
    }

    if dms_hits > dec_hits && dms_hits >= DETECT_MAJORITY {
        return Some(Direction::Reverse);
    }
    if dec_hits > dms_hits && dec_hits >= DETECT_MAJORITY {
        return Some(Direction::Forward);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DMS: &str = "N050.54.03.056";
    const DEC: &str = "50.9008489";

    #[test]
    fn dms_probe_matches_the_fixed_width_form() {
        assert!(looks_like_dms("N050.54.03.056"));
        assert!(looks_like_dms("e004.28.32.468"));
        assert!(looks_like_dms("  W004.28.32.468  "));
        assert!(!looks_like_dms("N50.54.03.056"));
        assert!(!looks_like_dms("N050.54.03.56"));
        assert!(!looks_like_dms("X050.54.03.056"));
        assert!(!looks_like_dms("50.9008489"));
    }

    #[test]
    fn decimal_probe_is_a_bare_float_parse() {
        assert!(looks_like_decimal("50.9008489"));
        assert!(looks_like_decimal("-4.4756856"));
        assert!(looks_like_decimal(" 12 "));
        assert!(!looks_like_decimal("N050.54.03.056"));
        assert!(!looks_like_decimal("abc"));
    }

    #[test]
    fn all_dms_detects_reverse() {
        let coords = [DMS; 8];
        assert_eq!(detect_direction(&coords), Some(Direction::Reverse));
    }

    #[test]
    fn all_decimal_detects_forward() {
        let coords = [DEC; 8];
        assert_eq!(detect_direction(&coords), Some(Direction::Forward));
    }

    #[test]
    fn majority_of_five_wins() {
        let coords = [DMS, DMS, DMS, DMS, DMS, DEC, DEC, DEC];
        assert_eq!(detect_direction(&coords), Some(Direction::Reverse));
        let coords = [DEC, DEC, DEC, DEC, DEC, DMS, DMS, DMS];
        assert_eq!(detect_direction(&coords), Some(Direction::Forward));
    }

    #[test]
    fn even_split_is_undecidable() {
        let coords = [DMS, DMS, DMS, DMS, DEC, DEC, DEC, DEC];
        assert_eq!(detect_direction(&coords), None);
    }

    #[test]
    fn junk_heavy_records_are_undecidable() {
        let coords = [DMS, DMS, DMS, "junk", "junk", "junk", "junk", "junk"];
        assert_eq!(detect_direction(&coords), None);
    }
}
