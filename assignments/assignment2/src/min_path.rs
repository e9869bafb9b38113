// Lexicographically smallest k-step walk over an n-by-n grid of distinct
// values: start on the cell holding 1, then keep stepping to the smallest
// orthogonal neighbor.
use harness::{Case, Exercise, Report};

type Input = (Vec<Vec<i64>>, usize);

/// Recorded when a step has nowhere in-bounds to go. The original attempt
/// appended infinity here, and the 1x1-grid fixture bakes that in.
pub const NO_STEP: i64 = i64::MAX;

pub fn exercise() -> Exercise<Input, Vec<i64>> {
    Exercise::new("min_path").candidate("iteration_0", |(grid, steps): &Input| {
        iteration_0(grid, *steps)
    })
}

fn iteration_0(grid: &[Vec<i64>], steps: usize) -> Vec<i64> {
    let size = grid.len();
    if size == 0 {
        return Vec::new();
    }

    let mut position = None;
    'scan: for row in 0..size {
        for col in 0..size {
            if grid[row][col] == 1 {
                position = Some((row, col));
                break 'scan;
            }
        }
    }

    let mut path = vec![1];
    for _ in 1..steps {
        let mut smallest = NO_STEP;
        let mut next = None;
        if let Some((row, col)) = position {
            for (delta_row, delta_col) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
                let neighbor_row = row.wrapping_add_signed(delta_row);
                let neighbor_col = col.wrapping_add_signed(delta_col);
                if neighbor_row < size
                    && neighbor_col < size
                    && grid[neighbor_row][neighbor_col] < smallest
                {
                    smallest = grid[neighbor_row][neighbor_col];
                    next = Some((neighbor_row, neighbor_col));
                }
            }
        }
        path.push(smallest);
        position = next;
    }
    path
}

fn case(grid: &[&[i64]], steps: usize, expected: &[i64]) -> Case<Input, Vec<i64>> {
    Case::new(
        (grid.iter().map(|row| row.to_vec()).collect(), steps),
        expected.to_vec(),
    )
}

pub fn cases() -> Vec<Case<Input, Vec<i64>>> {
    vec![
        case(&[&[1, 2, 3][..], &[4, 5, 6][..], &[7, 8, 9][..]], 3, &[1, 2, 1]),
        case(&[&[5, 9, 3][..], &[4, 1, 6][..], &[7, 8, 2][..]], 1, &[1]),
        case(&[&[1, 2, 3, 4][..], &[5, 6, 7, 8][..], &[9, 10, 11, 12][..], &[13, 14, 15, 16][..]], 4, &[1, 2, 1, 2]),
        case(&[&[6, 4, 13, 10][..], &[5, 7, 12, 1][..], &[3, 16, 11, 15][..], &[8, 14, 9, 2][..]], 7, &[1, 10, 1, 10, 1, 10, 1]),
        case(&[&[8, 14, 9, 2][..], &[6, 4, 13, 15][..], &[5, 7, 1, 12][..], &[3, 10, 11, 16][..]], 5, &[1, 7, 1, 7, 1]),
        case(&[&[11, 8, 7, 2][..], &[5, 16, 14, 4][..], &[9, 3, 15, 6][..], &[12, 13, 10, 1][..]], 9, &[1, 6, 1, 6, 1, 6, 1, 6, 1]),
        case(&[&[12, 13, 10, 1][..], &[9, 3, 15, 6][..], &[5, 16, 14, 4][..], &[11, 8, 7, 2][..]], 12, &[1, 6, 1, 6, 1, 6, 1, 6, 1, 6, 1, 6]),
        case(&[&[2, 7, 4][..], &[3, 1, 5][..], &[6, 8, 9][..]], 8, &[1, 3, 1, 3, 1, 3, 1, 3]),
        case(&[&[6, 1, 5][..], &[3, 8, 9][..], &[2, 7, 4][..]], 8, &[1, 5, 1, 5, 1, 5, 1, 5]),
        case(&[&[1, 2][..], &[3, 4][..]], 10, &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2]),
        case(&[&[1, 3][..], &[3, 2][..]], 10, &[1, 3, 1, 3, 1, 3, 1, 3, 1, 3]),
        case(&[], 5, &[]),
        case(&[&[1][..]], 1, &[1]),
        case(&[&[1, 2][..], &[3, 4][..]], 0, &[1]),
        case(&[&[5, 2, 3][..], &[4, 1, 6][..], &[7, 8, 9][..]], 4, &[1, 2, 1, 2]),
        case(&[&[2, 1][..], &[3, 4][..]], 3, &[1, 2, 1]),
        case(&[&[2, 3][..], &[1, 4][..]], 3, &[1, 2, 1]),
        case(&[&[2, 3][..], &[4, 1][..]], 3, &[1, 3, 1]),
        case(&[&[5, 1, 6][..], &[2, 3, 4][..], &[7, 8, 9][..]], 4, &[1, 3, 1, 3]),
        case(&[&[5, 2, 6][..], &[1, 3, 4][..], &[7, 8, 9][..]], 4, &[1, 3, 1, 3]),
        // A 1x1 grid has nowhere to go: every further step records NO_STEP.
        case(&[&[1]], 5, &[1, NO_STEP, NO_STEP, NO_STEP, NO_STEP]),
    ]
}

pub fn grade() -> Vec<Report> {
    harness::grade(&exercise(), &cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_walk_passes_every_case() {
        let report = grade().into_iter().next().unwrap();
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn walk_oscillates_between_one_and_its_best_neighbor() {
        let grid = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(iteration_0(&grid, 6), vec![1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn zero_steps_still_reports_the_start() {
        let grid = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(iteration_0(&grid, 0), vec![1]);
    }
}
