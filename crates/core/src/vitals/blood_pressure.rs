//! Blood pressure classification.
//!
//! Adults (13 and over) go through a severity cascade where the first matching
//! rule wins:
//!
//! | rule | condition |
//! |---|---|
//! | systolic < 90 | hypotension |
//! | systolic >= 140 or diastolic >= 90 | hypertension stage 2 |
//! | systolic >= 130 or diastolic >= 80 | hypertension stage 1 |
//! | systolic >= 120 | elevated |
//!
//! Children (0 to 12) are compared against per-age, per-sex tables.

use super::Condition;
use crate::constants::ADULT_AGE_YEARS;
use clinic_types::Sex;

const MALE_SYSTOLIC_HYPERTENSION: [i32; 13] =
    [104, 101, 104, 105, 107, 110, 109, 111, 113, 115, 117, 119, 120];
const MALE_DIASTOLIC_HYPERTENSION: [i32; 13] = [56, 54, 58, 61, 64, 67, 73, 74, 75, 75, 76, 77, 78];
const OTHER_SYSTOLIC_HYPERTENSION: [i32; 13] =
    [104, 102, 106, 107, 108, 110, 108, 110, 112, 114, 116, 118, 120];
const OTHER_DIASTOLIC_HYPERTENSION: [i32; 13] =
    [56, 58, 62, 65, 67, 70, 73, 74, 75, 76, 77, 78, 78];

pub fn classify(systolic: i32, diastolic: i32, sex: Sex, age_years: u32) -> Option<Condition> {
    if age_years >= ADULT_AGE_YEARS {
        adult(systolic, diastolic)
    } else {
        pediatric(systolic, diastolic, sex, age_years)
    }
}

fn adult(systolic: i32, diastolic: i32) -> Option<Condition> {
    if systolic < 90 {
        Some(Condition::Hypotension)
    } else if systolic >= 140 || diastolic >= 90 {
        Some(Condition::HypertensionStage2)
    } else if systolic >= 130 || diastolic >= 80 {
        Some(Condition::HypertensionStage1)
    } else if systolic >= 120 {
        Some(Condition::ElevatedBloodPressure)
    } else {
        None
    }
}

/// Systolic below `min(70 + 2 * age, 90)` is hypotension; either reading at or
/// above the table value for the age is hypertension.
///
/// # Panics
///
/// If `age_years` is 13 or more. The tables only cover ages 0 through 12.
fn pediatric(systolic: i32, diastolic: i32, sex: Sex, age_years: u32) -> Option<Condition> {
    let index = age_years as usize;
    let (systolic_table, diastolic_table) = match sex {
        Sex::Male => (&MALE_SYSTOLIC_HYPERTENSION, &MALE_DIASTOLIC_HYPERTENSION),
        Sex::Female | Sex::Unspecified => {
            (&OTHER_SYSTOLIC_HYPERTENSION, &OTHER_DIASTOLIC_HYPERTENSION)
        }
    };
    let systolic_hypertension = systolic_table[index];
    let diastolic_hypertension = diastolic_table[index];
    let hypotension = (70 + 2 * age_years as i32).min(90);

    if systolic < hypotension {
        Some(Condition::Hypotension)
    } else if systolic >= systolic_hypertension || diastolic >= diastolic_hypertension {
        Some(Condition::Hypertension)
    } else {
        None
    }
}
