use super::Condition;

const HIGH_FEVER_CELSIUS: f64 = 39.4;
const MODERATE_FEVER_CELSIUS: f64 = 38.0;
const HYPOTHERMIA_CELSIUS: f64 = 35.0;

/// Sex- and age-independent. High fever is checked before moderate fever.
pub fn classify(celsius: f64) -> Option<Condition> {
    if celsius >= HIGH_FEVER_CELSIUS {
        Some(Condition::HighFever)
    } else if celsius >= MODERATE_FEVER_CELSIUS {
        Some(Condition::ModerateFever)
    } else if celsius < HYPOTHERMIA_CELSIUS {
        Some(Condition::Hypothermia)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fever_thresholds_are_inclusive() {
        assert_eq!(classify(39.4), Some(Condition::HighFever));
        assert_eq!(classify(39.5), Some(Condition::HighFever));
        assert_eq!(classify(38.0), Some(Condition::ModerateFever));
        assert_eq!(classify(39.3), Some(Condition::ModerateFever));
    }

    #[test]
    fn normal_and_hypothermia() {
        assert_eq!(classify(37.9), None);
        assert_eq!(classify(35.0), None);
        assert_eq!(classify(34.9), Some(Condition::Hypothermia));
    }
}
