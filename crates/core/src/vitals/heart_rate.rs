use super::{classify_rate, Condition, RateBand, RateFinding};

const HEART_RATE_BANDS: [RateBand; 5] = [
    RateBand {
        below_age: Some(1),
        lower: 100,
        upper: 170,
    },
    RateBand {
        below_age: Some(3),
        lower: 80,
        upper: 150,
    },
    RateBand {
        below_age: Some(6),
        lower: 70,
        upper: 130,
    },
    RateBand {
        below_age: Some(13),
        lower: 65,
        upper: 120,
    },
    RateBand {
        below_age: None,
        lower: 60,
        upper: 100,
    },
];

/// Tachycardia above the age band's upper bound, bradycardia below its lower bound.
pub fn classify(bpm: i32, age_years: u32) -> Option<Condition> {
    classify_rate(&HEART_RATE_BANDS, bpm, age_years).map(|finding| match finding {
        RateFinding::Above => Condition::Tachycardia,
        RateFinding::Below => Condition::Bradycardia,
    })
}
