//! Fixed classification thresholds applied on top of raw scores.
//! These mirror the gauges in the results view and are deliberately
//! not configurable.

/// Polarity above this reads as positive.
pub const POSITIVE_THRESHOLD: f32 = 0.05;
/// Polarity below this reads as negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.05;
/// Subjectivity above this reads as personal rather than analytical.
pub const SUBJECTIVITY_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarityLabel {
    Positive,
    Neutral,
    Negative,
}

impl PolarityLabel {
    pub fn from_score(polarity: f32) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            PolarityLabel::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            PolarityLabel::Negative
        } else {
            PolarityLabel::Neutral
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            PolarityLabel::Positive => "Positive",
            PolarityLabel::Neutral => "Neutral",
            PolarityLabel::Negative => "Negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PolarityLabel::Positive => "💗",
            PolarityLabel::Neutral => "😶",
            PolarityLabel::Negative => "💔",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectivityLabel {
    Subjective,
    Objective,
}

impl SubjectivityLabel {
    pub fn from_score(subjectivity: f32) -> Self {
        if subjectivity > SUBJECTIVITY_THRESHOLD {
            SubjectivityLabel::Subjective
        } else {
            SubjectivityLabel::Objective
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            SubjectivityLabel::Subjective => "Highly subjective",
            SubjectivityLabel::Objective => "Objective",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_boundaries() {
        assert_eq!(PolarityLabel::from_score(0.06), PolarityLabel::Positive);
        assert_eq!(PolarityLabel::from_score(0.05), PolarityLabel::Neutral);
        assert_eq!(PolarityLabel::from_score(0.0), PolarityLabel::Neutral);
        assert_eq!(PolarityLabel::from_score(-0.05), PolarityLabel::Neutral);
        assert_eq!(PolarityLabel::from_score(-0.06), PolarityLabel::Negative);
    }

    #[test]
    fn polarity_extremes() {
        assert_eq!(PolarityLabel::from_score(1.0), PolarityLabel::Positive);
        assert_eq!(PolarityLabel::from_score(-1.0), PolarityLabel::Negative);
    }

    #[test]
    fn subjectivity_boundary() {
        assert_eq!(SubjectivityLabel::from_score(0.51), SubjectivityLabel::Subjective);
        assert_eq!(SubjectivityLabel::from_score(0.5), SubjectivityLabel::Objective);
        assert_eq!(SubjectivityLabel::from_score(0.0), SubjectivityLabel::Objective);
    }
}
