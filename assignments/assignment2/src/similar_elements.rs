// Shared elements of two fixed-length sequences.
//
// Expected values are kept in ascending order; the original fixtures leaked
// the source language's set iteration order, which means nothing here.
use std::collections::{HashMap, HashSet};

use harness::{Case, Exercise, Report};

type Input = (Vec<i64>, Vec<i64>);

pub fn exercise() -> Exercise<Input, Vec<i64>> {
    Exercise::new("similar_elements")
        .candidate("iteration_0", |(first, second): &Input| {
            iteration_0(first, second)
        })
        .candidate("iteration_2", |(first, second): &Input| {
            iteration_2(first, second)
        })
}

// Set intersection, deduplicated and sorted.
fn iteration_0(first: &[i64], second: &[i64]) -> Vec<i64> {
    let pool: HashSet<i64> = second.iter().copied().collect();
    let mut shared: Vec<i64> = first.iter().copied().filter(|v| pool.contains(v)).collect();
    shared.sort_unstable();
    shared.dedup();
    shared
}

// Generated attempt that keeps an element only when it appears the same
// number of times on both sides, which is stricter than membership.
fn iteration_2(first: &[i64], second: &[i64]) -> Vec<i64> {
    let mut first_counts: HashMap<i64, usize> = HashMap::new();
    for &value in first {
        *first_counts.entry(value).or_insert(0) += 1;
    }
    let mut second_counts: HashMap<i64, usize> = HashMap::new();
    for &value in second {
        *second_counts.entry(value).or_insert(0) += 1;
    }

    let mut shared: Vec<i64> = first_counts
        .into_iter()
        .filter(|(value, count)| second_counts.get(value) == Some(count))
        .map(|(value, _)| value)
        .collect();
    shared.sort_unstable();
    shared
}

fn case(first: [i64; 4], second: [i64; 4], expected: &[i64]) -> Case<Input, Vec<i64>> {
    Case::new((first.to_vec(), second.to_vec()), expected.to_vec())
}

pub fn cases() -> Vec<Case<Input, Vec<i64>>> {
    vec![
        case([3, 4, 5, 6], [5, 7, 4, 10], &[4, 5]),
        case([1, 2, 3, 4], [5, 4, 3, 7], &[3, 4]),
        case([11, 12, 14, 13], [17, 15, 14, 13], &[13, 14]),
        case([7, 1, 6, 7], [7, 2, 5, 7], &[7]),
        case([1, 7, 5, 11], [7, 10, 7, 8], &[7]),
        case([7, 6, 6, 2], [3, 2, 4, 13], &[2]),
        case([3, 1, 6, 9], [3, 7, 6, 8], &[3, 6]),
        case([8, 5, 4, 9], [7, 3, 8, 7], &[8]),
        case([2, 8, 2, 1], [3, 4, 4, 12], &[]),
        case([3, 9, 9, 3], [4, 11, 6, 14], &[]),
        case([1, 8, 8, 1], [4, 12, 5, 7], &[]),
        case([6, 3, 6, 11], [7, 6, 7, 14], &[6]),
        case([4, 1, 3, 10], [6, 5, 7, 13], &[]),
        case([7, 8, 7, 7], [2, 6, 7, 7], &[7]),
        case([6, 2, 4, 1], [9, 9, 2, 9], &[2]),
        case([2, 2, 5, 6], [3, 12, 3, 9], &[]),
        case([5, 1, 2, 11], [1, 4, 3, 13], &[1]),
        case([6, 8, 9, 3], [6, 2, 7, 8], &[6, 8]),
        case([6, 1, 4, 3], [6, 4, 3, 9], &[3, 4, 6]),
        case([3, 3, 4, 3], [7, 3, 4, 10], &[3, 4]),
        case([5, 4, 3, 10], [8, 4, 4, 15], &[4]),
        case([4, 5, 9, 3], [4, 7, 7, 15], &[4]),
        case([3, 3, 3, 7], [9, 4, 7, 11], &[7]),
        case([3, 7, 1, 1], [8, 6, 8, 7], &[7]),
        case([6, 2, 4, 10], [3, 10, 4, 14], &[4, 10]),
        case([2, 8, 5, 9], [2, 6, 7, 11], &[2]),
        case([2, 2, 10, 5], [10, 5, 5, 13], &[5, 10]),
        case([5, 9, 2, 7], [10, 2, 5, 9], &[2, 5, 9]),
        case([3, 7, 6, 11], [1, 8, 2, 14], &[]),
        case([4, 2, 5, 8], [6, 5, 5, 11], &[5]),
        case([3, 5, 4, 9], [10, 3, 1, 7], &[3]),
        case([5, 5, 6, 4], [5, 4, 1, 5], &[4, 5]),
        case([7, 1, 1, 11], [2, 7, 3, 10], &[7]),
        case([4, 7, 5, 1], [1, 8, 5, 6], &[1, 5]),
        case([5, 4, 1, 4], [10, 11, 1, 6], &[1]),
        case([3, 5, 1, 5], [5, 10, 8, 10], &[5]),
        case([6, 4, 3, 1], [1, 2, 3, 3], &[1, 3]),
        case([6, 6, 7, 2], [7, 6, 6, 6], &[6, 7]),
        case([5, 7, 5, 6], [1, 9, 6, 12], &[6]),
        case([1, 4, 8, 2], [6, 4, 8, 5], &[4, 8]),
        case([5, 2, 8, 4], [5, 8, 8, 7], &[5, 8]),
        case([3, 7, 3, 6], [9, 1, 2, 8], &[]),
        case([4, 3, 1, 8], [1, 8, 6, 12], &[1, 8]),
        case([5, 2, 4, 7], [9, 9, 4, 10], &[4]),
        case([2, 1, 3, 2], [9, 1, 2, 9], &[1, 2]),
        case([4, 3, 4, 9], [9, 1, 4, 11], &[4, 9]),
        case([3, 6, 8, 8], [4, 9, 4, 7], &[]),
        case([2, 5, 4, 9], [8, 9, 6, 2], &[2, 9]),
        case([5, 3, 4, 5], [3, 4, 1, 12], &[3, 4]),
        case([6, 4, 5, 2], [1, 7, 4, 2], &[2, 4]),
        case([1, 7, 4, 6], [8, 2, 1, 8], &[1]),
        case([4, 7, 6, 4], [5, 4, 7, 8], &[4, 7]),
        case([6, 7, 1, 2], [3, 9, 8, 6], &[6]),
        case([2, 5, 3, 3], [2, 4, 6, 10], &[2]),
        case([6, 7, 7, 5], [1, 1, 7, 4], &[7]),
        case([1, 3, 7, 7], [6, 8, 8, 10], &[]),
        case([6, 5, 6, 3], [9, 4, 1, 9], &[]),
        case([5, 6, 5, 9], [5, 9, 7, 5], &[5, 9]),
        case([4, 7, 4, 4], [10, 8, 1, 7], &[7]),
        case([1, 1, 2, 4], [7, 9, 6, 6], &[]),
        case([5, 3, 2, 6], [8, 5, 6, 7], &[5, 6]),
        case([2, 2, 2, 2], [6, 6, 2, 4], &[2]),
        case([3, 2, 6, 3], [8, 7, 2, 8], &[2]),
        case([2, 1, 1, 3], [6, 5, 5, 2], &[2]),
        case([2, 3, 3, 9], [8, 1, 8, 11], &[]),
        case([5, 6, 2, 5], [6, 8, 4, 8], &[6]),
        case([2, 4, 6, 3], [1, 1, 3, 4], &[3, 4]),
        case([5, 5, 5, 9], [7, 2, 1, 7], &[]),
        case([2, 1, 5, 3], [4, 2, 3, 11], &[2, 3]),
        case([6, 7, 18, 15], [21, 10, 11, 12], &[]),
        case([14, 8, 18, 11], [17, 13, 18, 16], &[18]),
        case([13, 12, 10, 10], [18, 20, 10, 8], &[10]),
        case([14, 15, 19, 14], [21, 19, 17, 11], &[19]),
        case([9, 7, 9, 14], [22, 16, 10, 15], &[]),
        case([10, 10, 16, 8], [16, 14, 16, 12], &[16]),
        case([6, 7, 10, 10], [12, 13, 10, 15], &[10]),
        case([7, 7, 19, 17], [14, 20, 19, 13], &[19]),
        case([14, 11, 11, 8], [21, 14, 14, 17], &[14]),
        case([15, 9, 17, 15], [19, 19, 10, 15], &[15]),
        case([8, 17, 11, 14], [14, 15, 19, 12], &[14]),
        case([13, 11, 9, 11], [20, 13, 14, 15], &[13]),
        case([8, 12, 13, 18], [14, 16, 19, 9], &[]),
        case([9, 17, 13, 18], [21, 15, 17, 15], &[17]),
        case([6, 10, 9, 8], [17, 10, 10, 18], &[10]),
        case([14, 11, 17, 13], [17, 18, 12, 15], &[17]),
        case([14, 9, 16, 17], [21, 18, 19, 17], &[17]),
        case([7, 7, 13, 8], [17, 17, 9, 16], &[]),
        case([11, 10, 11, 12], [18, 20, 18, 16], &[]),
        case([8, 8, 18, 15], [18, 19, 16, 16], &[18]),
        case([6, 10, 15, 18], [12, 13, 11, 16], &[]),
        case([13, 12, 15, 14], [17, 17, 11, 14], &[14]),
        case([14, 17, 18, 18], [22, 12, 9, 18], &[18]),
        case([10, 16, 14, 9], [13, 20, 19, 8], &[]),
        case([7, 9, 10, 15], [21, 12, 13, 16], &[]),
        case([6, 8, 12, 14], [17, 10, 14, 11], &[14]),
        case([7, 10, 10, 12], [21, 17, 18, 17], &[]),
        case([12, 12, 13, 18], [14, 17, 16, 15], &[]),
        case([13, 7, 17, 11], [18, 20, 9, 10], &[]),
        case([10, 11, 14, 13], [16, 19, 9, 13], &[13]),
        case([8, 17, 15, 10], [19, 12, 9, 14], &[]),
        case([9, 10, 13, 8], [14, 10, 19, 17], &[10]),
        case([11, 14, 17, 10], [15, 15, 10, 11], &[10, 11]),
    ]
}

pub fn grade() -> Vec<Report> {
    harness::grade(&exercise(), &cases())
}

#[cfg(test)]
mod tests {
    use super::*;
    use harness::Failure;

    fn report(name: &str) -> Report {
        grade().into_iter().find(|r| r.candidate == name).unwrap()
    }

    #[test]
    fn set_intersection_passes_every_case() {
        let report = report("iteration_0");
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn multiplicity_attempt_fails_where_counts_differ() {
        let report = report("iteration_2");
        assert_eq!(report.failure_count(), 23);
        assert!(
            report
                .failures()
                .iter()
                .all(|f| matches!(f, Failure::Mismatch { .. }))
        );
    }

    #[test]
    fn repeated_values_still_count_as_shared() {
        assert_eq!(iteration_0(&[2, 2, 2, 2], &[6, 6, 2, 4]), vec![2]);
        assert_eq!(iteration_2(&[2, 2, 2, 2], &[6, 6, 2, 4]), Vec::<i64>::new());
    }
}
