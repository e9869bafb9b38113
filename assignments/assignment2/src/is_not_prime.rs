// True when a number is composite. The grading table fixes
// is_not_prime(1) == false, so candidates must not special-case
// values below 2.
use harness::{Case, Exercise, Report};

pub fn exercise() -> Exercise<i64, bool> {
    Exercise::new("is_not_prime")
        .candidate("iteration_0", |&n: &i64| iteration_0(n))
        .candidate("iteration_1", |&n: &i64| iteration_1(n))
        .rejected(
            "iteration_4",
            "returns its narration log instead of a boolean",
        )
}

// Generated attempt with the answer inverted: it reports primality.
fn iteration_0(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

// Trial division up to the square root.
fn iteration_1(n: i64) -> bool {
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return true;
        }
        divisor += 1;
    }
    false
}

fn case(n: i64, expected: bool) -> Case<i64, bool> {
    Case::new(n, expected)
}

pub fn cases() -> Vec<Case<i64, bool>> {
    vec![
        case(2, false),
        case(10, true),
        case(35, true),
        case(6, true),
        case(4, true),
        case(3, false),
        case(4, true),
        case(5, false),
        case(6, true),
        case(2, false),
        case(5, false),
        case(4, true),
        case(6, true),
        case(7, false),
        case(2, false),
        case(2, false),
        case(5, false),
        case(6, true),
        case(4, true),
        case(2, false),
        case(1, false),
        case(6, true),
        case(2, false),
        case(7, false),
        case(3, false),
        case(6, true),
        case(3, false),
        case(1, false),
        case(1, false),
        case(1, false),
        case(6, true),
        case(2, false),
        case(3, false),
        case(7, false),
        case(6, true),
        case(6, true),
        case(10, true),
        case(5, false),
        case(11, false),
        case(5, false),
        case(14, true),
        case(11, false),
        case(7, false),
        case(14, true),
        case(10, true),
        case(8, true),
        case(9, true),
        case(6, true),
        case(5, false),
        case(13, false),
        case(13, false),
        case(14, true),
        case(5, false),
        case(14, true),
        case(11, false),
        case(15, true),
        case(6, true),
        case(7, false),
        case(11, false),
        case(15, true),
        case(6, true),
        case(9, true),
        case(12, true),
        case(15, true),
        case(7, false),
        case(9, true),
        case(12, true),
        case(15, true),
        case(10, true),
        case(40, true),
        case(36, true),
        case(31, false),
        case(40, true),
        case(36, true),
        case(34, true),
        case(35, true),
        case(31, false),
        case(30, true),
        case(39, true),
        case(30, true),
        case(35, true),
        case(31, false),
        case(37, false),
        case(30, true),
        case(31, false),
        case(35, true),
        case(39, true),
        case(32, true),
        case(36, true),
        case(39, true),
        case(32, true),
        case(30, true),
        case(38, true),
        case(36, true),
        case(30, true),
        case(34, true),
        case(33, true),
        case(30, true),
        case(34, true),
        case(31, false),
        case(40, true),
        case(34, true),
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
    fn trial_division_passes_every_case() {
        let report = report("iteration_1");
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn inverted_attempt_only_matches_on_one() {
        // iteration_0 answers the opposite question; it agrees with the
        // table only on the n == 1 rows, where both sides say false.
        let report = report("iteration_0");
        assert_eq!(report.failure_count(), 98);
        assert!(
            report
                .failures()
                .iter()
                .all(|f| matches!(f, Failure::Mismatch { .. }))
        );
    }

    #[test]
    fn narration_attempt_is_rejected() {
        assert!(report("iteration_4").is_rejected());
    }

    #[test]
    fn composites_and_primes() {
        assert!(iteration_1(10));
        assert!(!iteration_1(7));
        assert!(!iteration_1(1));
    }
}
