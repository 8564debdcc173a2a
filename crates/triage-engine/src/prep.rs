//! Bowel preparation adequacy.

use triage_model::BowelPrepScore;

/// Minimum acceptable BBPS total.
pub const MIN_TOTAL_SCORE: u8 = 6;
/// Minimum acceptable score for each colon segment. An acceptable total
/// can mask one poorly-prepped segment where lesions could be missed, so
/// each segment floor is enforced independently.
pub const MIN_SEGMENT_SCORE: u8 = 2;

/// Returns true when the preparation is adequate for surveillance.
pub fn is_adequate(score: &BowelPrepScore) -> bool {
    score.total >= MIN_TOTAL_SCORE
        && score.right >= MIN_SEGMENT_SCORE
        && score.transverse >= MIN_SEGMENT_SCORE
        && score.left >= MIN_SEGMENT_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(total: u8, right: u8, transverse: u8, left: u8) -> BowelPrepScore {
        BowelPrepScore {
            total,
            right,
            transverse,
            left,
        }
    }

    #[test]
    fn adequate_at_the_floors() {
        assert!(is_adequate(&score(6, 2, 2, 2)));
        assert!(is_adequate(&score(9, 3, 3, 3)));
    }

    #[test]
    fn one_poor_segment_fails_despite_good_total() {
        assert!(!is_adequate(&score(7, 3, 3, 1)));
        assert!(!is_adequate(&score(8, 1, 3, 3)));
    }

    #[test]
    fn low_total_fails() {
        assert!(!is_adequate(&score(5, 2, 2, 2)));
    }
}
