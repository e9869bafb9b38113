// Ways to tile a 3-by-n board with 2x1 dominoes. Odd widths leave an odd
// number of cells, so they admit no tiling at all.
use harness::{Case, Exercise, Report};

pub fn exercise() -> Exercise<u64, u64> {
    Exercise::new("count_ways")
        .candidate("iteration_0", |&width: &u64| iteration_0(width))
        .candidate("iteration_1", |&width: &u64| iteration_1(width))
        .candidate("iteration_3", |&width: &u64| iteration_3(width))
        .rejected(
            "iteration_4",
            "counts lattice paths over an n-by-m board; the table passes a single width",
        )
}

// Generated attempt whose final answer reads a row its loops never fill,
// so every width comes back as zero.
fn iteration_0(width: u64) -> u64 {
    const MODULUS: u64 = 1_000_000_007;
    let n = width as usize;
    let mut dp = vec![vec![[0u64; 2]; n + 1]; 4];
    for i in (1..=3).rev() {
        for j in (1..=n).rev() {
            dp[i][j][0] = 1;
        }
    }
    for i in (1..=3).rev() {
        for j in (1..=n).rev() {
            dp[i][j][0] = (dp[i][j][0] + dp[i - 1][j][1] + dp[i - 1][j - 1][0]) % MODULUS;
            dp[i][j][1] = (dp[i][j][1] + dp[i - 1][j][0]) % MODULUS;
        }
    }
    dp[0][n][1]
}

// f(n) = 4 f(n-2) - f(n-4), the standard linear recurrence for 3xN
// domino tilings.
fn iteration_1(width: u64) -> u64 {
    if width % 2 == 1 {
        return 0;
    }
    if width == 0 {
        return 1;
    }
    let mut before_previous = 1; // f(0)
    let mut previous = 3; // f(2)
    for _ in 1..(width / 2) {
        let next = 4 * previous - before_previous;
        before_previous = previous;
        previous = next;
    }
    previous
}

// Generated attempt built on a pairs-of-steps recurrence unrelated to
// domino tilings; it does return zero for odd widths.
fn iteration_3(width: u64) -> u64 {
    let n = width as usize;
    let mut dp = vec![vec![0u64; n + 1]; n + 1];
    dp[n][0] = 1;
    for i in (0..n).rev() {
        dp[i][0] = 1;
        for j in 1..=i {
            dp[i][j] = dp[i + 1][j];
            if j >= 2 {
                dp[i][j] += dp[i][j - 2];
            }
        }
    }
    dp[0][n]
}

fn case(width: u64, expected: u64) -> Case<u64, u64> {
    Case::new(width, expected)
}

pub fn cases() -> Vec<Case<u64, u64>> {
    vec![
        case(2, 3),
        case(8, 153),
        case(12, 2131),
        case(4, 11),
        case(2, 3),
        case(4, 11),
        case(7, 0),
        case(2, 3),
        case(5, 0),
        case(1, 0),
        case(4, 11),
        case(1, 0),
        case(6, 41),
        case(2, 3),
        case(3, 0),
        case(4, 11),
        case(5, 0),
        case(2, 3),
        case(1, 0),
        case(2, 3),
        case(2, 3),
        case(6, 41),
        case(5, 0),
        case(2, 3),
        case(7, 0),
        case(3, 0),
        case(3, 0),
        case(7, 0),
        case(3, 0),
        case(2, 3),
        case(4, 11),
        case(7, 0),
        case(1, 0),
        case(3, 0),
        case(2, 3),
        case(3, 0),
        case(3, 0),
        case(4, 11),
        case(4, 11),
        case(10, 571),
        case(7, 0),
        case(10, 571),
        case(7, 0),
        case(7, 0),
        case(8, 153),
        case(4, 11),
        case(10, 571),
        case(8, 153),
        case(9, 0),
        case(11, 0),
        case(6, 41),
        case(4, 11),
        case(6, 41),
        case(8, 153),
        case(9, 0),
        case(13, 0),
        case(11, 0),
        case(6, 41),
        case(13, 0),
        case(13, 0),
        case(13, 0),
        case(12, 2131),
        case(5, 0),
        case(8, 153),
        case(6, 41),
        case(5, 0),
        case(7, 0),
        case(3, 0),
        case(13, 0),
        case(10, 571),
        case(10, 571),
        case(15, 0),
        case(17, 0),
        case(16, 29681),
        case(9, 0),
        case(17, 0),
        case(9, 0),
        case(17, 0),
        case(13, 0),
        case(12, 2131),
        case(7, 0),
        case(14, 7953),
        case(9, 0),
        case(13, 0),
        case(11, 0),
        case(15, 0),
        case(16, 29681),
        case(7, 0),
        case(14, 7953),
        case(12, 2131),
        case(9, 0),
        case(11, 0),
        case(14, 7953),
        case(12, 2131),
        case(11, 0),
        case(11, 0),
        case(7, 0),
        case(12, 2131),
        case(17, 0),
        case(9, 0),
        case(12, 2131),
        case(8, 153),
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
    fn recurrence_passes_every_case() {
        let report = report("iteration_1");
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn unfilled_row_attempt_fails_every_even_width() {
        // Always returning zero happens to match the odd-width rows.
        let report = report("iteration_0");
        assert_eq!(report.failure_count(), 48);
        assert!(
            report
                .failures()
                .iter()
                .all(|f| matches!(f, Failure::Mismatch { .. }))
        );
    }

    #[test]
    fn unrelated_recurrence_fails_every_even_width() {
        let report = report("iteration_3");
        assert_eq!(report.failure_count(), 48);
    }

    #[test]
    fn two_argument_attempt_is_rejected() {
        assert!(report("iteration_4").is_rejected());
    }

    #[test]
    fn known_tiling_counts() {
        assert_eq!(iteration_1(0), 1);
        assert_eq!(iteration_1(2), 3);
        assert_eq!(iteration_1(8), 153);
        assert_eq!(iteration_1(7), 0);
    }
}
