// Whether two integers differ in exactly one bit position.
use harness::{Case, Exercise, Report};

type Input = (u64, u64);

pub fn exercise() -> Exercise<Input, bool> {
    Exercise::new("differ_at_one_bit_pos").candidate("iteration_0", |&(a, b): &Input| {
        iteration_0(a, b)
    })
}

// The xor of the two numbers keeps exactly the differing bits; one
// differing bit means the xor is a power of two.
fn iteration_0(a: u64, b: u64) -> bool {
    let difference = a ^ b;
    difference != 0 && difference & (difference - 1) == 0
}

fn case(a: u64, b: u64, expected: bool) -> Case<Input, bool> {
    Case::new((a, b), expected)
}

pub fn cases() -> Vec<Case<Input, bool>> {
    vec![
        case(13, 9, true),
        case(15, 8, false),
        case(2, 4, false),
        case(14, 9, false),
        case(17, 9, false),
        case(15, 7, true),
        case(8, 7, false),
        case(13, 13, false),
        case(16, 5, false),
        case(17, 10, false),
        case(17, 10, false),
        case(9, 14, false),
        case(17, 14, false),
        case(11, 9, true),
        case(18, 7, false),
        case(18, 6, false),
        case(9, 10, false),
        case(12, 6, false),
        case(12, 12, false),
        case(13, 10, false),
        case(15, 7, true),
        case(12, 11, false),
        case(15, 10, false),
        case(8, 12, true),
        case(9, 13, true),
        case(10, 5, false),
        case(15, 11, true),
        case(14, 11, false),
        case(9, 10, false),
        case(16, 11, false),
        case(18, 10, false),
        case(15, 11, true),
        case(14, 7, false),
        case(12, 8, true),
        case(10, 4, false),
        case(16, 12, false),
        case(11, 9, true),
        case(13, 4, false),
        case(18, 12, false),
        case(13, 13, false),
        case(19, 7, false),
        case(16, 9, false),
        case(13, 5, true),
        case(20, 8, false),
        case(16, 12, false),
        case(16, 12, false),
        case(14, 13, false),
        case(20, 6, false),
        case(12, 3, false),
        case(13, 4, false),
        case(19, 12, false),
        case(19, 9, false),
        case(11, 10, true),
        case(16, 13, false),
        case(14, 7, false),
        case(14, 10, true),
        case(14, 7, false),
        case(13, 11, false),
        case(10, 12, false),
        case(17, 11, false),
        case(14, 3, false),
        case(15, 12, false),
        case(19, 9, false),
        case(19, 4, false),
        case(14, 12, true),
        case(17, 3, false),
        case(14, 9, false),
        case(20, 5, false),
        case(11, 10, true),
        case(4, 1, false),
        case(4, 3, false),
        case(4, 6, true),
        case(4, 5, true),
        case(1, 4, false),
        case(7, 9, false),
        case(4, 1, false),
        case(2, 4, false),
        case(4, 6, true),
        case(5, 6, false),
        case(7, 9, false),
        case(3, 8, false),
        case(7, 2, false),
        case(5, 7, true),
        case(6, 1, false),
        case(6, 9, false),
        case(2, 4, false),
        case(4, 2, false),
        case(2, 6, true),
        case(2, 3, true),
        case(6, 8, false),
        case(3, 8, false),
        case(5, 7, true),
        case(1, 1, false),
        case(1, 2, false),
        case(5, 5, false),
        case(4, 3, false),
        case(6, 3, false),
        case(3, 1, true),
        case(1, 1, false),
        case(5, 1, true),
        case(4, 4, false),
        case(1, 9, true),
    ]
}

pub fn grade() -> Vec<Report> {
    harness::grade(&exercise(), &cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_xor_passes_every_case() {
        let report = grade().into_iter().next().unwrap();
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn equal_numbers_differ_in_no_bit() {
        assert!(iteration_0(13, 9));
        assert!(!iteration_0(15, 8));
        assert!(!iteration_0(6, 6));
    }
}
