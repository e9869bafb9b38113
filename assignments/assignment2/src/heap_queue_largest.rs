// The k largest values of a list, largest first.
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use harness::{Case, Exercise, Report};

type Input = (Vec<i64>, usize);

pub fn exercise() -> Exercise<Input, Vec<i64>> {
    Exercise::new("heap_queue_largest")
        .rejected("iteration_0", "prints the sorted values and returns nothing")
        .candidate("iteration_1", |(numbers, count): &Input| {
            iteration_1(numbers, *count)
        })
        .candidate("iteration_2", |(numbers, count): &Input| {
            iteration_2(numbers, *count)
        })
}

// Generated attempt that replays push-then-pop against a min-heap it never
// seeds: the heap stays empty, so nothing is ever kept.
fn iteration_1(numbers: &[i64], _count: usize) -> Vec<i64> {
    let mut smallest: BinaryHeap<Reverse<i64>> = BinaryHeap::new();
    for &number in numbers {
        if let Some(Reverse(top)) = smallest.peek().copied() {
            if top < number {
                smallest.pop();
                smallest.push(Reverse(number));
            }
        }
    }
    let mut kept: Vec<i64> = smallest.into_iter().map(|Reverse(v)| v).collect();
    kept.sort_unstable();
    kept
}

// Max-heap of everything, then pop the top k.
fn iteration_2(numbers: &[i64], count: usize) -> Vec<i64> {
    let mut heap: BinaryHeap<i64> = numbers.iter().copied().collect();
    let mut largest = Vec::with_capacity(count);
    while largest.len() < count {
        match heap.pop() {
            Some(value) => largest.push(value),
            None => break,
        }
    }
    largest
}

fn case(numbers: &[i64], count: usize, expected: &[i64]) -> Case<Input, Vec<i64>> {
    Case::new((numbers.to_vec(), count), expected.to_vec())
}

pub fn cases() -> Vec<Case<Input, Vec<i64>>> {
    vec![
        case(&[25, 35, 22, 85, 14, 65, 75, 22, 58], 3, &[85, 75, 65]),
        case(&[25, 35, 22, 85, 14, 65, 75, 22, 58], 2, &[85, 75]),
        case(&[25, 35, 22, 85, 14, 65, 75, 22, 58], 5, &[85, 75, 65, 58, 35]),
        case(&[29, 39, 20, 87, 19, 64, 72, 27, 61], 4, &[87, 72, 64, 61]),
        case(&[23, 39, 18, 83, 14, 65, 71, 20, 62], 1, &[83]),
        case(&[28, 34, 25, 89, 12, 66, 77, 27, 56], 5, &[89, 77, 66, 56, 34]),
        case(&[21, 36, 22, 84, 13, 67, 78, 25, 54], 3, &[84, 78, 67]),
        case(&[28, 38, 20, 85, 11, 68, 72, 18, 59], 6, &[85, 72, 68, 59, 38, 28]),
        case(&[26, 30, 20, 81, 9, 61, 73, 19, 53], 6, &[81, 73, 61, 53, 30, 26]),
        case(&[25, 32, 23, 86, 14, 60, 73, 23, 54], 6, &[86, 73, 60, 54, 32, 25]),
        case(&[22, 33, 22, 80, 19, 64, 77, 24, 53], 3, &[80, 77, 64]),
        case(&[28, 39, 25, 84, 17, 61, 77, 19, 53], 5, &[84, 77, 61, 53, 39]),
        case(&[30, 38, 17, 89, 18, 62, 80, 23, 60], 7, &[89, 80, 62, 60, 38, 30, 23]),
        case(&[27, 40, 27, 86, 16, 66, 79, 24, 59], 7, &[86, 79, 66, 59, 40, 27, 27]),
        case(&[30, 36, 27, 81, 19, 66, 78, 23, 59], 8, &[81, 78, 66, 59, 36, 30, 27, 23]),
        case(&[23, 37, 20, 83, 18, 61, 75, 21, 55], 8, &[83, 75, 61, 55, 37, 23, 21, 20]),
        case(&[29, 36, 17, 83, 13, 65, 78, 23, 59], 5, &[83, 78, 65, 59, 36]),
        case(&[27, 31, 23, 85, 10, 67, 77, 21, 57], 5, &[85, 77, 67, 57, 31]),
        case(&[25, 39, 22, 83, 15, 68, 75, 25, 53], 3, &[83, 75, 68]),
        case(&[30, 37, 22, 85, 11, 68, 77, 19, 62], 8, &[85, 77, 68, 62, 37, 30, 22, 19]),
        case(&[22, 31, 24, 89, 9, 63, 70, 27, 57], 5, &[89, 70, 63, 57, 31]),
        case(&[24, 40, 26, 88, 16, 68, 79, 20, 63], 4, &[88, 79, 68, 63]),
        case(&[22, 40, 23, 89, 15, 65, 74, 20, 62], 5, &[89, 74, 65, 62, 40]),
        case(&[23, 31, 21, 90, 14, 63, 78, 22, 59], 2, &[90, 78]),
        case(&[23, 30, 20, 85, 19, 69, 73, 18, 55], 8, &[85, 73, 69, 55, 30, 23, 20, 19]),
        case(&[20, 37, 21, 81, 11, 64, 79, 17, 59], 3, &[81, 79, 64]),
        case(&[25, 40, 21, 84, 11, 68, 71, 27, 56], 4, &[84, 71, 68, 56]),
        case(&[25, 31, 19, 90, 15, 64, 79, 26, 57], 1, &[90]),
        case(&[21, 31, 17, 80, 19, 69, 77, 27, 63], 1, &[80]),
        case(&[30, 36, 20, 87, 12, 69, 80, 27, 60], 4, &[87, 80, 69, 60]),
        case(&[28, 30, 22, 80, 12, 60, 70, 27, 58], 7, &[80, 70, 60, 58, 30, 28, 27]),
        case(&[30, 30, 26, 87, 12, 66, 78, 19, 55], 4, &[87, 78, 66, 55]),
        case(&[26, 39, 21, 82, 12, 60, 78, 24, 57], 7, &[82, 78, 60, 57, 39, 26, 24]),
        case(&[24, 34, 23, 87, 14, 61, 70, 19, 55], 7, &[87, 70, 61, 55, 34, 24, 23]),
        case(&[30, 35, 21, 86, 14, 63, 76, 21, 54], 7, &[86, 76, 63, 54, 35, 30, 21]),
        case(&[29, 30, 25, 80, 15, 66, 72, 21, 63], 3, &[80, 72, 66]),
        case(&[23, 32, 23, 88, 12, 65, 70, 26, 60], 3, &[88, 70, 65]),
        case(&[29, 37, 19, 85, 11, 67, 73, 23, 62], 3, &[85, 73, 67]),
        case(&[28, 38, 22, 88, 19, 68, 70, 18, 61], 2, &[88, 70]),
        case(&[30, 32, 25, 89, 11, 67, 74, 25, 54], 7, &[89, 74, 67, 54, 32, 30, 25]),
        case(&[23, 35, 24, 89, 15, 69, 70, 24, 60], 2, &[89, 70]),
        case(&[21, 36, 24, 84, 10, 61, 71, 24, 63], 7, &[84, 71, 63, 61, 36, 24, 24]),
        case(&[23, 39, 27, 84, 13, 67, 71, 20, 62], 1, &[84]),
        case(&[21, 36, 27, 85, 10, 65, 79, 21, 54], 2, &[85, 79]),
        case(&[23, 40, 19, 84, 16, 68, 80, 27, 63], 3, &[84, 80, 68]),
        case(&[22, 40, 17, 80, 11, 60, 76, 19, 53], 6, &[80, 76, 60, 53, 40, 22]),
        case(&[30, 40, 19, 87, 17, 70, 77, 24, 55], 1, &[87]),
        case(&[30, 36, 19, 87, 12, 62, 74, 17, 62], 1, &[87]),
        case(&[26, 33, 21, 86, 13, 64, 74, 19, 58], 4, &[86, 74, 64, 58]),
        case(&[29, 33, 22, 90, 11, 69, 76, 25, 54], 5, &[90, 76, 69, 54, 33]),
        case(&[26, 37, 23, 83, 11, 63, 70, 22, 53], 3, &[83, 70, 63]),
        case(&[23, 30, 20, 87, 18, 62, 72, 19, 62], 1, &[87]),
        case(&[28, 38, 25, 87, 18, 62, 78, 24, 63], 5, &[87, 78, 63, 62, 38]),
        case(&[23, 40, 27, 82, 9, 66, 80, 23, 55], 1, &[82]),
        case(&[23, 40, 18, 83, 13, 61, 75, 24, 55], 5, &[83, 75, 61, 55, 40]),
        case(&[28, 39, 26, 81, 15, 67, 80, 27, 60], 7, &[81, 80, 67, 60, 39, 28, 27]),
        case(&[22, 40, 23, 86, 15, 70, 78, 27, 63], 1, &[86]),
        case(&[24, 40, 18, 84, 19, 61, 71, 25, 62], 2, &[84, 71]),
        case(&[21, 30, 20, 87, 19, 61, 71, 26, 53], 7, &[87, 71, 61, 53, 30, 26, 21]),
        case(&[30, 40, 20, 90, 9, 70, 77, 21, 62], 2, &[90, 77]),
        case(&[22, 33, 18, 81, 12, 67, 71, 25, 58], 6, &[81, 71, 67, 58, 33, 25]),
        case(&[21, 36, 24, 86, 13, 66, 79, 21, 56], 2, &[86, 79]),
        case(&[30, 34, 17, 85, 9, 60, 74, 25, 63], 4, &[85, 74, 63, 60]),
        case(&[29, 37, 22, 90, 19, 67, 72, 19, 60], 7, &[90, 72, 67, 60, 37, 29, 22]),
        case(&[25, 36, 21, 86, 12, 66, 78, 26, 54], 1, &[86]),
        case(&[24, 33, 27, 82, 10, 60, 76, 26, 55], 2, &[82, 76]),
        case(&[27, 34, 23, 83, 18, 65, 80, 25, 58], 6, &[83, 80, 65, 58, 34, 27]),
        case(&[23, 40, 19, 85, 11, 62, 73, 25, 53], 4, &[85, 73, 62, 53]),
        case(&[20, 32, 17, 89, 10, 62, 77, 21, 53], 7, &[89, 77, 62, 53, 32, 21, 20]),
        case(&[23, 31, 17, 80, 13, 64, 72, 17, 55], 2, &[80, 72]),
        case(&[25, 40, 17, 83, 11, 69, 77, 26, 61], 3, &[83, 77, 69]),
        case(&[22, 39, 17, 89, 16, 65, 70, 23, 60], 6, &[89, 70, 65, 60, 39, 23]),
        case(&[30, 40, 20, 80, 12, 69, 75, 27, 58], 7, &[80, 75, 69, 58, 40, 30, 27]),
        case(&[23, 33, 19, 90, 13, 67, 70, 17, 59], 1, &[90]),
        case(&[29, 38, 27, 86, 15, 63, 80, 23, 63], 9, &[86, 80, 63, 63, 38, 29, 27, 23, 15]),
        case(&[30, 38, 24, 84, 13, 68, 75, 23, 61], 3, &[84, 75, 68]),
        case(&[22, 35, 18, 84, 12, 70, 76, 19, 60], 2, &[84, 76]),
        case(&[20, 35, 20, 86, 14, 63, 80, 22, 56], 4, &[86, 80, 63, 56]),
        case(&[29, 32, 18, 87, 15, 65, 70, 26, 59], 9, &[87, 70, 65, 59, 32, 29, 26, 18, 15]),
        case(&[30, 40, 24, 81, 10, 64, 71, 23, 55], 8, &[81, 71, 64, 55, 40, 30, 24, 23]),
        case(&[29, 33, 20, 87, 10, 61, 80, 21, 57], 10, &[87, 80, 61, 57, 33, 29, 21, 20, 10]),
        case(&[28, 31, 27, 88, 9, 70, 79, 25, 59], 8, &[88, 79, 70, 59, 31, 28, 27, 25]),
        case(&[29, 39, 20, 84, 15, 65, 72, 21, 63], 5, &[84, 72, 65, 63, 39]),
        case(&[20, 37, 17, 86, 13, 67, 80, 24, 63], 5, &[86, 80, 67, 63, 37]),
        case(&[21, 37, 17, 83, 18, 65, 74, 20, 61], 4, &[83, 74, 65, 61]),
        case(&[30, 38, 26, 82, 10, 67, 79, 25, 55], 10, &[82, 79, 67, 55, 38, 30, 26, 25, 10]),
        case(&[24, 39, 24, 83, 11, 62, 71, 17, 59], 9, &[83, 71, 62, 59, 39, 24, 24, 17, 11]),
        case(&[28, 30, 20, 80, 17, 66, 78, 25, 62], 10, &[80, 78, 66, 62, 30, 28, 25, 20, 17]),
        case(&[24, 40, 26, 89, 17, 62, 70, 24, 61], 5, &[89, 70, 62, 61, 40]),
        case(&[20, 34, 26, 87, 18, 68, 76, 21, 61], 10, &[87, 76, 68, 61, 34, 26, 21, 20, 18]),
        case(&[26, 31, 19, 80, 19, 70, 78, 21, 58], 4, &[80, 78, 70, 58]),
        case(&[29, 30, 18, 82, 16, 67, 73, 22, 53], 1, &[82]),
        case(&[30, 37, 20, 83, 19, 69, 77, 19, 60], 5, &[83, 77, 69, 60, 37]),
        case(&[29, 31, 17, 81, 13, 67, 77, 21, 62], 4, &[81, 77, 67, 62]),
        case(&[30, 32, 20, 89, 11, 62, 78, 27, 54], 1, &[89]),
        case(&[25, 35, 17, 89, 15, 67, 71, 22, 56], 8, &[89, 71, 67, 56, 35, 25, 22, 17]),
        case(&[27, 33, 24, 88, 19, 62, 73, 25, 61], 7, &[88, 73, 62, 61, 33, 27, 25]),
        case(&[30, 38, 25, 89, 11, 68, 72, 21, 56], 9, &[89, 72, 68, 56, 38, 30, 25, 21, 11]),
        case(&[20, 36, 17, 82, 15, 61, 78, 17, 55], 4, &[82, 78, 61, 55]),
        case(&[27, 33, 23, 85, 11, 62, 73, 26, 61], 7, &[85, 73, 62, 61, 33, 27, 26]),
        case(&[26, 40, 22, 84, 16, 65, 77, 17, 57], 8, &[84, 77, 65, 57, 40, 26, 22, 17]),
        case(&[23, 33, 24, 84, 17, 70, 79, 21, 53], 5, &[84, 79, 70, 53, 33]),
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
    fn max_heap_selection_passes_every_case() {
        let report = report("iteration_2");
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn empty_heap_attempt_returns_nothing_everywhere() {
        let report = report("iteration_1");
        assert_eq!(report.failure_count(), cases().len());
        assert!(
            report
                .failures()
                .iter()
                .all(|f| matches!(f, Failure::Mismatch { .. }))
        );
    }

    #[test]
    fn printing_attempt_is_rejected() {
        assert!(report("iteration_0").is_rejected());
    }

    #[test]
    fn largest_values_come_back_descending() {
        assert_eq!(
            iteration_2(&[25, 35, 22, 85, 14, 65, 75, 22, 58], 3),
            vec![85, 75, 65]
        );
    }
}
