// Generated candidate solutions for the second assignment's exercises,
// one module per exercise. Every module carries its candidates, its
// literal grading table, and a registry entry for the harness.

pub mod count_ways;
pub mod differ_at_one_bit_pos;
pub mod find_char_long;
pub mod find_rotations;
pub mod heap_queue_largest;
pub mod is_not_prime;
pub mod min_cost;
pub mod min_path;
pub mod similar_elements;
pub mod small_nnum;
pub mod square_nums;

use harness::ExerciseSet;

pub fn exercises() -> ExerciseSet {
    ExerciseSet::new("assignment2")
        .add("min_cost", min_cost::grade)
        .add("similar_elements", similar_elements::grade)
        .add("is_not_prime", is_not_prime::grade)
        .add("heap_queue_largest", heap_queue_largest::grade)
        .add("count_ways", count_ways::grade)
        .add("differ_at_one_bit_pos", differ_at_one_bit_pos::grade)
        .add("find_char_long", find_char_long::grade)
        .add("square_nums", square_nums::grade)
        .add("find_rotations", find_rotations::grade)
        .add("small_nnum", small_nnum::grade)
        .add("min_path", min_path::grade)
}
