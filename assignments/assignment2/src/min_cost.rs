// Minimum cost of reaching a target cell of a cost grid from the top-left,
// moving right, down, or diagonally down-right.
use harness::{Case, Exercise, Report};

type Input = (Vec<Vec<i64>>, usize, usize);

pub fn exercise() -> Exercise<Input, i64> {
    Exercise::new("min_cost")
        .candidate("iteration_0", |(cost, row, col): &Input| {
            iteration_0(cost, *row, *col)
        })
        .candidate("iteration_1", |(cost, row, col): &Input| {
            iteration_1(cost, *row, *col)
        })
        .rejected(
            "iteration_2",
            "takes the grid alone; the grading table also passes a target cell",
        )
        .candidate("iteration_3", |(cost, row, col): &Input| {
            iteration_3(cost, *row, *col)
        })
}

// DP over the sub-grid up to the target: each cell's best cost comes from
// its upper, left, or upper-left neighbor.
fn iteration_0(cost: &[Vec<i64>], target_row: usize, target_col: usize) -> i64 {
    let mut best = vec![vec![0i64; target_col + 1]; target_row + 1];
    for row in 0..=target_row {
        for col in 0..=target_col {
            if row == 0 && col == 0 {
                best[0][0] = cost[0][0];
                continue;
            }
            let mut cheapest = i64::MAX;
            if row > 0 {
                cheapest = cheapest.min(best[row - 1][col]);
            }
            if col > 0 {
                cheapest = cheapest.min(best[row][col - 1]);
            }
            if row > 0 && col > 0 {
                cheapest = cheapest.min(best[row - 1][col - 1]);
            }
            best[row][col] = cheapest + cost[row][col];
        }
    }
    best[target_row][target_col]
}

// Generated attempt that only ever accumulates along a row, then reads one
// row past the end of its own DP table.
fn iteration_1(cost: &[Vec<i64>], target_row: usize, target_col: usize) -> i64 {
    let mut dp = vec![vec![i64::MAX; target_col]; target_row];
    dp[0][0] = 0;
    for row in 0..target_row {
        for col in 0..target_col {
            dp[row][col] = if col > 0 {
                cost[row][col] + dp[row][col - 1]
            } else {
                cost[row][col]
            };
        }
    }
    dp[target_row][target_col]
}

// Generated attempt that only considers downward moves, folds unvisited
// sentinel cells into its sums, and ends on the same off-by-one read.
fn iteration_3(cost: &[Vec<i64>], target_row: usize, target_col: usize) -> i64 {
    let mut dp = vec![vec![i64::MAX; target_col]; target_row];
    dp[0][0] = cost[0][0];
    for row in 1..target_row {
        dp[row][0] = dp[row][0].min(dp[row - 1][0] + cost[row][0]);
        for col in 1..target_col {
            dp[row][col] = dp[row][col].min(dp[row - 1][col] + cost[row][col]);
        }
    }
    dp[target_row][target_col]
}

fn case(cost: [[i64; 3]; 3], row: usize, col: usize, expected: i64) -> Case<Input, i64> {
    Case::new(
        (cost.iter().map(|r| r.to_vec()).collect(), row, col),
        expected,
    )
}

pub fn cases() -> Vec<Case<Input, i64>> {
    vec![
        case([[1, 2, 3], [4, 8, 2], [1, 5, 3]], 2, 2, 8),
        case([[2, 3, 4], [5, 9, 3], [2, 6, 4]], 2, 2, 12),
        case([[3, 4, 5], [6, 10, 4], [3, 7, 5]], 2, 2, 16),
        case([[4, 5, 7], [6, 8, 1], [5, 9, 5]], 2, 1, 19),
        case([[6, 6, 1], [4, 10, 3], [1, 1, 1]], 2, 2, 12),
        case([[1, 3, 6], [8, 3, 3], [1, 2, 7]], 1, 2, 7),
        case([[2, 1, 4], [3, 13, 5], [1, 1, 1]], 2, 1, 6),
        case([[4, 2, 3], [6, 12, 1], [5, 5, 7]], 1, 1, 16),
        case([[4, 3, 4], [6, 12, 7], [3, 7, 7]], 1, 2, 14),
        case([[4, 3, 8], [3, 6, 5], [6, 4, 1]], 2, 1, 11),
        case([[5, 4, 7], [5, 4, 5], [6, 3, 3]], 2, 1, 12),
        case([[2, 4, 5], [9, 13, 5], [6, 10, 4]], 2, 1, 21),
        case([[6, 3, 8], [6, 9, 7], [1, 1, 7]], 1, 1, 15),
        case([[4, 2, 5], [2, 10, 3], [5, 3, 5]], 2, 2, 14),
        case([[2, 5, 4], [5, 3, 1], [4, 6, 8]], 1, 1, 5),
        case([[3, 6, 6], [3, 10, 7], [5, 5, 7]], 1, 1, 13),
        case([[6, 5, 8], [7, 4, 1], [3, 4, 4]], 2, 2, 14),
        case([[1, 1, 8], [9, 6, 7], [3, 7, 1]], 1, 1, 7),
        case([[1, 1, 1], [1, 13, 7], [6, 2, 4]], 2, 2, 8),
        case([[2, 1, 8], [7, 11, 7], [6, 6, 5]], 2, 1, 15),
        case([[3, 2, 5], [6, 3, 2], [5, 5, 7]], 1, 2, 7),
        case([[2, 3, 8], [1, 6, 7], [4, 2, 8]], 2, 1, 5),
        case([[2, 6, 6], [4, 6, 1], [2, 2, 7]], 1, 2, 9),
        case([[4, 2, 3], [4, 8, 5], [1, 5, 5]], 2, 1, 13),
        case([[4, 2, 5], [6, 11, 6], [2, 9, 7]], 2, 2, 19),
        case([[2, 5, 2], [6, 13, 5], [1, 7, 8]], 1, 2, 12),
        case([[5, 1, 4], [1, 7, 2], [6, 6, 2]], 2, 1, 12),
        case([[5, 6, 8], [4, 5, 4], [5, 3, 4]], 2, 1, 12),
        case([[1, 3, 1], [7, 6, 5], [4, 8, 4]], 2, 1, 15),
        case([[2, 7, 6], [7, 12, 2], [3, 3, 7]], 2, 2, 18),
        case([[4, 6, 2], [4, 13, 5], [4, 10, 4]], 1, 1, 17),
        case([[6, 5, 5], [6, 10, 4], [5, 5, 4]], 1, 1, 16),
        case([[6, 6, 4], [9, 11, 7], [3, 10, 7]], 2, 2, 24),
        case([[6, 3, 2], [8, 5, 3], [2, 1, 4]], 2, 1, 12),
        case([[4, 6, 2], [9, 7, 4], [1, 3, 6]], 1, 1, 11),
        case([[4, 7, 4], [9, 7, 6], [6, 1, 7]], 1, 1, 11),
        case([[2, 5, 6], [10, 11, 7], [7, 3, 4]], 2, 1, 15),
        case([[3, 6, 1], [7, 4, 3], [7, 11, 7]], 2, 2, 14),
        case([[2, 4, 3], [1, 12, 7], [5, 6, 6]], 2, 1, 9),
        case([[5, 5, 6], [8, 11, 1], [6, 11, 8]], 1, 1, 16),
        case([[6, 8, 5], [2, 14, 5], [2, 8, 1]], 2, 1, 16),
        case([[6, 8, 9], [9, 7, 3], [5, 2, 9]], 2, 2, 22),
        case([[3, 2, 7], [7, 9, 8], [1, 6, 3]], 2, 1, 16),
        case([[4, 3, 1], [7, 8, 1], [3, 11, 8]], 1, 1, 12),
        case([[1, 5, 8], [4, 11, 6], [7, 10, 3]], 1, 2, 12),
        case([[2, 7, 8], [5, 6, 7], [2, 3, 2]], 2, 1, 10),
        case([[2, 5, 9], [7, 13, 8], [5, 3, 7]], 2, 2, 19),
        case([[3, 1, 7], [4, 5, 7], [4, 5, 3]], 2, 1, 12),
        case([[4, 7, 5], [2, 13, 1], [6, 5, 4]], 1, 1, 17),
        case([[5, 7, 4], [3, 6, 7], [1, 2, 1]], 2, 2, 11),
        case([[3, 4, 5], [2, 6, 1], [4, 2, 9]], 2, 2, 16),
        case([[4, 7, 2], [1, 4, 4], [4, 11, 2]], 1, 2, 12),
        case([[1, 6, 1], [3, 7, 1], [5, 1, 3]], 1, 2, 8),
        case([[3, 6, 4], [1, 6, 6], [5, 11, 3]], 2, 2, 12),
        case([[5, 7, 5], [9, 6, 8], [5, 8, 1]], 2, 2, 12),
        case([[7, 4, 3], [2, 11, 2], [3, 4, 6]], 2, 2, 19),
        case([[3, 1, 8], [8, 5, 6], [4, 1, 5]], 2, 1, 9),
        case([[7, 4, 6], [10, 8, 5], [2, 1, 2]], 2, 2, 17),
        case([[2, 2, 7], [3, 4, 7], [4, 3, 9]], 1, 1, 6),
        case([[7, 3, 1], [2, 12, 4], [5, 8, 7]], 2, 1, 17),
        case([[4, 5, 2], [7, 14, 2], [5, 7, 4]], 2, 2, 15),
        case([[3, 5, 6], [7, 13, 6], [1, 1, 5]], 2, 2, 16),
        case([[1, 7, 2], [4, 7, 1], [3, 11, 9]], 1, 1, 8),
        case([[5, 2, 5], [3, 4, 2], [6, 9, 1]], 1, 2, 9),
        case([[4, 8, 9], [7, 10, 4], [5, 5, 9]], 1, 1, 14),
        case([[5, 4, 4], [7, 6, 1], [7, 6, 7]], 2, 1, 17),
        case([[3, 3, 4], [7, 11, 6], [3, 11, 1]], 1, 2, 12),
        case([[1, 4, 4], [1, 11, 6], [3, 2, 3]], 1, 1, 12),
        case([[1, 2, 6], [5, 4, 3], [2, 5, 6]], 1, 1, 5),
        case([[6, 4, 3], [1, 14, 6], [5, 6, 10]], 1, 2, 16),
        case([[6, 5, 7], [4, 13, 7], [6, 9, 4]], 1, 2, 18),
        case([[7, 7, 10], [1, 7, 3], [8, 2, 4]], 1, 2, 17),
        case([[3, 6, 9], [3, 5, 5], [2, 7, 6]], 1, 2, 13),
        case([[7, 5, 6], [7, 8, 1], [4, 5, 9]], 1, 2, 13),
        case([[4, 4, 4], [3, 15, 2], [4, 6, 6]], 2, 1, 13),
        case([[7, 7, 10], [1, 14, 5], [4, 9, 7]], 1, 1, 21),
        case([[8, 4, 8], [5, 11, 8], [1, 4, 7]], 2, 1, 17),
        case([[1, 8, 7], [5, 15, 3], [6, 4, 3]], 2, 2, 13),
        case([[1, 8, 7], [7, 10, 3], [1, 11, 7]], 1, 1, 11),
        case([[3, 5, 8], [9, 5, 6], [8, 10, 8]], 2, 2, 16),
        case([[5, 1, 9], [11, 12, 1], [8, 8, 8]], 2, 2, 15),
        case([[4, 1, 7], [2, 13, 6], [5, 9, 2]], 2, 1, 15),
        case([[2, 3, 7], [2, 9, 1], [4, 6, 7]], 1, 2, 6),
        case([[6, 6, 3], [8, 9, 3], [8, 11, 6]], 1, 1, 15),
        case([[2, 9, 9], [11, 12, 9], [6, 12, 4]], 2, 1, 25),
        case([[1, 9, 2], [5, 15, 5], [5, 3, 2]], 1, 2, 15),
        case([[3, 2, 10], [4, 5, 6], [3, 8, 3]], 1, 2, 11),
        case([[8, 5, 1], [7, 9, 2], [2, 8, 4]], 2, 2, 19),
        case([[5, 1, 2], [6, 10, 8], [2, 11, 7]], 1, 1, 15),
        case([[6, 5, 8], [9, 6, 4], [7, 10, 9]], 2, 2, 21),
        case([[1, 6, 5], [3, 5, 7], [3, 5, 7]], 1, 2, 13),
        case([[4, 2, 5], [2, 12, 3], [6, 7, 4]], 2, 2, 13),
        case([[8, 7, 9], [11, 9, 9], [6, 2, 6]], 2, 1, 19),
        case([[8, 9, 2], [1, 5, 3], [5, 2, 3]], 2, 2, 14),
        case([[4, 2, 4], [2, 6, 7], [4, 2, 10]], 1, 2, 13),
        case([[7, 6, 3], [4, 8, 5], [7, 8, 1]], 2, 1, 19),
        case([[8, 9, 4], [8, 5, 9], [6, 8, 6]], 2, 1, 21),
        case([[3, 5, 6], [2, 9, 9], [1, 3, 4]], 2, 2, 12),
        case([[7, 9, 8], [7, 13, 2], [7, 7, 7]], 2, 1, 21),
        case([[7, 2, 2], [6, 15, 1], [8, 4, 2]], 1, 1, 22),
        case([[5, 6, 8], [8, 10, 2], [7, 3, 8]], 1, 2, 13),
        case([[8, 9, 2], [6, 5, 7], [3, 8, 8]], 2, 2, 21),
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
    fn full_dp_passes_every_case() {
        let report = report("iteration_0");
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn row_walk_attempt_panics_past_its_table() {
        let report = report("iteration_1");
        assert_eq!(report.failure_count(), cases().len());
        assert!(
            report
                .failures()
                .iter()
                .all(|f| matches!(f, Failure::Panicked { .. }))
        );
    }

    #[test]
    fn wrong_arity_attempt_is_rejected() {
        assert!(report("iteration_2").is_rejected());
    }

    #[test]
    fn downward_only_attempt_panics_past_its_table() {
        let report = report("iteration_3");
        assert_eq!(report.failure_count(), cases().len());
        assert!(
            report
                .failures()
                .iter()
                .all(|f| matches!(f, Failure::Panicked { .. }))
        );
    }

    #[test]
    fn diagonal_step_beats_edge_walks() {
        let grid = vec![vec![1, 2, 3], vec![4, 8, 2], vec![1, 5, 3]];
        assert_eq!(iteration_0(&grid, 2, 2), 8);
    }
}
