// Generated candidate solutions for the third assignment.

pub mod numerical_letter_grade;

use harness::ExerciseSet;

pub fn exercises() -> ExerciseSet {
    ExerciseSet::new("assignment3").add("numerical_letter_grade", numerical_letter_grade::grade)
}
