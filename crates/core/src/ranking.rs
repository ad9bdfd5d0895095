//! Patient ranking.
//!
//! Patients are ordered by alert count, highest first, with a top-down merge
//! sort. When the heads of the two runs have equal keys the left head is taken,
//! which keeps equal patients in their input order.

use crate::patient::Patient;

/// Rank patients by alert count, descending. Ties keep their input order.
pub fn rank_by_alerts<'a, I>(patients: I) -> Vec<&'a Patient>
where
    I: IntoIterator<Item = &'a Patient>,
{
    let patients: Vec<&Patient> = patients.into_iter().collect();
    merge_sort_descending_by(patients, |p| p.num_alerts())
}

/// Stable merge sort in descending order of `key`.
pub fn merge_sort_descending_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);

    let left = merge_sort_descending_by(left, key);
    let right = merge_sort_descending_by(right, key);
    merge(left, right, key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l) >= key(r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::NaiveDate;
    use clinic_types::Sex;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn patient_with_alerts(id: u64, alerts: usize) -> Patient {
        let today = ymd(2025, 6, 1);
        let mut patient = Patient::new(id, &format!("P{id}"), Sex::Female, ymd(1990, 1, 1), today)
            .expect("valid patient");
        for _ in 0..alerts {
            patient.add_record(Record::temperature(ymd(2025, 5, 1), 40.0), today);
        }
        patient
    }

    #[test]
    fn empty_and_single_inputs_are_sorted() {
        let none: Vec<u32> = merge_sort_descending_by(Vec::new(), |x: &u32| *x);
        assert!(none.is_empty());
        assert_eq!(merge_sort_descending_by(vec![5], |x: &u32| *x), vec![5]);
    }

    #[test]
    fn sorts_descending_and_keeps_ties_in_input_order() {
        let input = vec![(1, 'a'), (3, 'b'), (1, 'c'), (2, 'd'), (3, 'e'), (1, 'f'), (2, 'g')];
        let sorted = merge_sort_descending_by(input, |&(k, _)| k);
        assert_eq!(
            sorted,
            vec![(3, 'b'), (3, 'e'), (2, 'd'), (2, 'g'), (1, 'a'), (1, 'c'), (1, 'f')]
        );
    }

    #[test]
    fn all_equal_keys_preserve_order() {
        let input: Vec<(u8, usize)> = (0..9).map(|i| (7, i)).collect();
        let sorted = merge_sort_descending_by(input.clone(), |&(k, _)| k);
        assert_eq!(sorted, input);
    }

    #[test]
    fn result_is_permutation_with_non_increasing_keys() {
        let input: Vec<u32> = vec![4, 9, 0, 4, 1, 7, 7, 3, 9, 2, 0, 5, 6];
        let sorted = merge_sort_descending_by(input.clone(), |x| *x);

        assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
        let mut a = input;
        let mut b = sorted.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn ranks_patients_by_alert_count() {
        let patients = vec![
            patient_with_alerts(1, 0),
            patient_with_alerts(2, 2),
            patient_with_alerts(3, 1),
            patient_with_alerts(4, 2),
        ];
        let ids: Vec<u64> = rank_by_alerts(&patients).iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }
}
