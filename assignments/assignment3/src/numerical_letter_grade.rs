// Map each GPA in a list to its letter grade on the fixed thirteen-step
// scale: 4.0 is A+, anything at or below 0.0 is E, and each step in
// between is an open lower bound.
use harness::{Case, Exercise, Report};

pub fn exercise() -> Exercise<Vec<f64>, Vec<&'static str>> {
    Exercise::new("numerical_letter_grade")
        .candidate("problem_1", |gpas: &Vec<f64>| problem_1(gpas))
}

fn problem_1(gpas: &[f64]) -> Vec<&'static str> {
    gpas.iter().map(|&gpa| letter_for(gpa)).collect()
}

fn letter_for(gpa: f64) -> &'static str {
    if gpa == 4.0 {
        "A+"
    } else if gpa > 3.7 {
        "A"
    } else if gpa > 3.3 {
        "A-"
    } else if gpa > 3.0 {
        "B+"
    } else if gpa > 2.7 {
        "B"
    } else if gpa > 2.3 {
        "B-"
    } else if gpa > 2.0 {
        "C+"
    } else if gpa > 1.7 {
        "C"
    } else if gpa > 1.3 {
        "C-"
    } else if gpa > 1.0 {
        "D+"
    } else if gpa > 0.7 {
        "D"
    } else if gpa > 0.0 {
        "D-"
    } else {
        "E"
    }
}

fn case(gpas: &[f64], expected: &[&'static str]) -> Case<Vec<f64>, Vec<&'static str>> {
    Case::new(gpas.to_vec(), expected.to_vec())
}

pub fn cases() -> Vec<Case<Vec<f64>, Vec<&'static str>>> {
    vec![
        case(&[4.0, 3.0, 1.7, 2.0, 3.5], &["A+", "B", "C-", "C", "A-"]),
        case(&[1.2], &["D+"]),
        case(&[0.5], &["D-"]),
        case(&[0.0], &["E"]),
        case(&[1.0, 0.3, 1.5, 2.8, 3.3], &["D", "D-", "C-", "B", "B+"]),
        case(&[0.0, 0.7], &["E", "D-"]),
        case(&[3.8, 2.4, 2.1, -1.0], &["A", "B-", "C+", "E"]),
        case(&[4.0], &["A+"]),
        case(&[2.8, 3.0], &["B", "B"]),
        case(&[4.0, 3.8, 3.4, 3.1, 2.9], &["A+", "A", "A-", "B+", "B"]),
    ]
}

pub fn grade() -> Vec<Report> {
    harness::grade(&exercise(), &cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_mapping_passes_every_case() {
        let report = grade().into_iter().next().unwrap();
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn boundaries_fall_to_the_lower_grade() {
        assert_eq!(letter_for(4.0), "A+");
        assert_eq!(letter_for(3.7), "A-");
        assert_eq!(letter_for(2.0), "C");
        assert_eq!(letter_for(0.0), "E");
        assert_eq!(letter_for(-1.0), "E");
    }
}
