use super::{classify_rate, Condition, RateBand, RateFinding};

const RESPIRATORY_RATE_BANDS: [RateBand; 5] = [
    RateBand {
        below_age: Some(1),
        lower: 30,
        upper: 60,
    },
    RateBand {
        below_age: Some(3),
        lower: 24,
        upper: 40,
    },
    RateBand {
        below_age: Some(6),
        lower: 20,
        upper: 34,
    },
    RateBand {
        below_age: Some(13),
        lower: 15,
        upper: 30,
    },
    RateBand {
        below_age: None,
        lower: 12,
        upper: 20,
    },
];

/// Tachypnea above the age band's upper bound, bradypnea below its lower bound.
pub fn classify(breaths_per_minute: i32, age_years: u32) -> Option<Condition> {
    classify_rate(&RESPIRATORY_RATE_BANDS, breaths_per_minute, age_years).map(|finding| {
        match finding {
            RateFinding::Above => Condition::Tachypnea,
            RateFinding::Below => Condition::Bradypnea,
        }
    })
}
