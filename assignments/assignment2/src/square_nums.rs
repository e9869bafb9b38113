// Element-wise squares of a list.
use harness::{Case, Exercise, Report};

pub fn exercise() -> Exercise<Vec<i64>, Vec<i64>> {
    Exercise::new("square_nums").candidate("iteration_0", |numbers: &Vec<i64>| {
        iteration_0(numbers)
    })
}

fn iteration_0(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().map(|n| n * n).collect()
}

fn case(numbers: &[i64], expected: &[i64]) -> Case<Vec<i64>, Vec<i64>> {
    Case::new(numbers.to_vec(), expected.to_vec())
}

pub fn cases() -> Vec<Case<Vec<i64>, Vec<i64>>> {
    vec![
        case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &[1, 4, 9, 16, 25, 36, 49, 64, 81, 100]),
        case(&[10, 20, 30], &[100, 400, 900]),
        case(&[12, 15], &[144, 225]),
        case(&[3, 5, 7, 8, 4, 11, 10, 13, 14, 11], &[9, 25, 49, 64, 16, 121, 100, 169, 196, 121]),
        case(&[2, 3, 4, 2, 1, 8, 2, 3, 5, 11], &[4, 9, 16, 4, 1, 64, 4, 9, 25, 121]),
        case(&[2, 3, 6, 3, 7, 9, 3, 11, 12, 7], &[4, 9, 36, 9, 49, 81, 9, 121, 144, 49]),
        case(&[5, 2, 8, 6, 5, 9, 4, 11, 7, 7], &[25, 4, 64, 36, 25, 81, 16, 121, 49, 49]),
        case(&[6, 1, 2, 9, 9, 7, 6, 10, 5, 9], &[36, 1, 4, 81, 81, 49, 36, 100, 25, 81]),
        case(&[1, 6, 8, 8, 9, 2, 5, 12, 6, 12], &[1, 36, 64, 64, 81, 4, 25, 144, 36, 144]),
        case(&[2, 2, 6, 2, 6, 4, 11, 6, 12, 5], &[4, 4, 36, 4, 36, 16, 121, 36, 144, 25]),
        case(&[1, 4, 7, 7, 10, 9, 12, 5, 4, 14], &[1, 16, 49, 49, 100, 81, 144, 25, 16, 196]),
        case(&[4, 3, 2, 8, 9, 2, 5, 3, 12, 11], &[16, 9, 4, 64, 81, 4, 25, 9, 144, 121]),
        case(&[1, 6, 4, 2, 2, 1, 6, 11, 8, 10], &[1, 36, 16, 4, 4, 1, 36, 121, 64, 100]),
        case(&[3, 1, 4, 6, 10, 1, 12, 12, 11, 8], &[9, 1, 16, 36, 100, 1, 144, 144, 121, 64]),
        case(&[6, 6, 6, 9, 7, 7, 4, 12, 9, 13], &[36, 36, 36, 81, 49, 49, 16, 144, 81, 169]),
        case(&[6, 2, 1, 3, 10, 2, 6, 12, 9, 9], &[36, 4, 1, 9, 100, 4, 36, 144, 81, 81]),
        case(&[1, 2, 6, 8, 5, 5, 10, 10, 14, 11], &[1, 4, 36, 64, 25, 25, 100, 100, 196, 121]),
        case(&[5, 1, 2, 6, 6, 7, 8, 6, 6, 14], &[25, 1, 4, 36, 36, 49, 64, 36, 36, 196]),
        case(&[3, 2, 3, 6, 5, 6, 3, 12, 4, 15], &[9, 4, 9, 36, 25, 36, 9, 144, 16, 225]),
        case(&[4, 5, 2, 9, 8, 2, 9, 10, 5, 14], &[16, 25, 4, 81, 64, 4, 81, 100, 25, 196]),
        case(&[2, 1, 5, 8, 6, 1, 4, 9, 4, 9], &[4, 1, 25, 64, 36, 1, 16, 81, 16, 81]),
        case(&[4, 2, 2, 1, 4, 4, 4, 10, 7, 7], &[16, 4, 4, 1, 16, 16, 16, 100, 49, 49]),
        case(&[6, 3, 2, 7, 6, 11, 10, 8, 14, 8], &[36, 9, 4, 49, 36, 121, 100, 64, 196, 64]),
        case(&[4, 6, 7, 5, 3, 10, 12, 9, 7, 9], &[16, 36, 49, 25, 9, 100, 144, 81, 49, 81]),
        case(&[3, 1, 7, 4, 6, 9, 3, 3, 4, 8], &[9, 1, 49, 16, 36, 81, 9, 9, 16, 64]),
        case(&[6, 4, 8, 9, 8, 6, 8, 5, 14, 11], &[36, 16, 64, 81, 64, 36, 64, 25, 196, 121]),
        case(&[2, 6, 2, 1, 8, 1, 5, 6, 4, 7], &[4, 36, 4, 1, 64, 1, 25, 36, 16, 49]),
        case(&[1, 2, 5, 1, 8, 8, 5, 9, 6, 15], &[1, 4, 25, 1, 64, 64, 25, 81, 36, 225]),
        case(&[1, 5, 4, 7, 2, 3, 10, 4, 14, 13], &[1, 25, 16, 49, 4, 9, 100, 16, 196, 169]),
        case(&[6, 4, 1, 6, 2, 1, 7, 7, 14, 15], &[36, 16, 1, 36, 4, 1, 49, 49, 196, 225]),
        case(&[6, 5, 3, 2, 6, 11, 7, 3, 7, 5], &[36, 25, 9, 4, 36, 121, 49, 9, 49, 25]),
        case(&[6, 2, 4, 6, 2, 9, 11, 4, 10, 12], &[36, 4, 16, 36, 4, 81, 121, 16, 100, 144]),
        case(&[3, 2, 8, 2, 3, 9, 9, 8, 4, 13], &[9, 4, 64, 4, 9, 81, 81, 64, 16, 169]),
        case(&[6, 3, 7, 1, 5, 8, 9, 4, 12, 6], &[36, 9, 49, 1, 25, 64, 81, 16, 144, 36]),
        case(&[4, 6, 4, 5, 9, 8, 3, 4, 5, 13], &[16, 36, 16, 25, 81, 64, 9, 16, 25, 169]),
        case(&[4, 7, 3, 9, 4, 5, 9, 8, 8, 5], &[16, 49, 9, 81, 16, 25, 81, 64, 64, 25]),
        case(&[14, 17, 27], &[196, 289, 729]),
        case(&[6, 16, 32], &[36, 256, 1024]),
        case(&[13, 23, 30], &[169, 529, 900]),
        case(&[14, 19, 32], &[196, 361, 1024]),
        case(&[9, 21, 34], &[81, 441, 1156]),
        case(&[6, 22, 26], &[36, 484, 676]),
        case(&[12, 21, 27], &[144, 441, 729]),
        case(&[13, 20, 28], &[169, 400, 784]),
        case(&[12, 23, 26], &[144, 529, 676]),
        case(&[8, 16, 32], &[64, 256, 1024]),
        case(&[9, 22, 27], &[81, 484, 729]),
        case(&[15, 18, 25], &[225, 324, 625]),
        case(&[12, 15, 26], &[144, 225, 676]),
        case(&[12, 19, 35], &[144, 361, 1225]),
        case(&[9, 17, 35], &[81, 289, 1225]),
        case(&[7, 18, 27], &[49, 324, 729]),
        case(&[12, 16, 29], &[144, 256, 841]),
        case(&[6, 17, 34], &[36, 289, 1156]),
        case(&[15, 18, 35], &[225, 324, 1225]),
        case(&[15, 23, 32], &[225, 529, 1024]),
        case(&[10, 25, 29], &[100, 625, 841]),
        case(&[8, 18, 29], &[64, 324, 841]),
        case(&[11, 18, 26], &[121, 324, 676]),
        case(&[14, 17, 32], &[196, 289, 1024]),
        case(&[13, 16, 28], &[169, 256, 784]),
        case(&[10, 21, 29], &[100, 441, 841]),
        case(&[9, 15, 31], &[81, 225, 961]),
        case(&[7, 24, 28], &[49, 576, 784]),
        case(&[11, 18, 35], &[121, 324, 1225]),
        case(&[10, 15, 32], &[100, 225, 1024]),
        case(&[10, 21, 30], &[100, 441, 900]),
        case(&[6, 17, 29], &[36, 289, 841]),
        case(&[5, 20, 28], &[25, 400, 784]),
        case(&[12, 17], &[144, 289]),
        case(&[16, 13], &[256, 169]),
        case(&[16, 12], &[256, 144]),
        case(&[9, 18], &[81, 324]),
        case(&[10, 19], &[100, 361]),
        case(&[8, 12], &[64, 144]),
        case(&[13, 19], &[169, 361]),
        case(&[10, 11], &[100, 121]),
        case(&[7, 18], &[49, 324]),
        case(&[7, 20], &[49, 400]),
        case(&[17, 18], &[289, 324]),
        case(&[10, 19], &[100, 361]),
        case(&[16, 10], &[256, 100]),
        case(&[15, 15], &[225, 225]),
        case(&[10, 10], &[100, 100]),
        case(&[11, 16], &[121, 256]),
        case(&[15, 17], &[225, 289]),
        case(&[11, 20], &[121, 400]),
        case(&[17, 14], &[289, 196]),
        case(&[16, 10], &[256, 100]),
        case(&[7, 20], &[49, 400]),
        case(&[8, 17], &[64, 289]),
        case(&[13, 10], &[169, 100]),
        case(&[13, 17], &[169, 289]),
        case(&[14, 18], &[196, 324]),
        case(&[15, 20], &[225, 400]),
        case(&[16, 14], &[256, 196]),
        case(&[10, 13], &[100, 169]),
        case(&[16, 13], &[256, 169]),
        case(&[10, 13], &[100, 169]),
        case(&[12, 17], &[144, 289]),
        case(&[9, 15], &[81, 225]),
        case(&[8, 13], &[64, 169]),
    ]
}

pub fn grade() -> Vec<Report> {
    harness::grade(&exercise(), &cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squaring_passes_every_case() {
        let report = grade().into_iter().next().unwrap();
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn squares_keep_input_order() {
        assert_eq!(iteration_0(&[10, 20, 30]), vec![100, 400, 900]);
    }
}
