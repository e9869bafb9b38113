use std::any::Any;
use std::fmt::Debug;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::{Duration, Instant};

/// One literal input/expected-output pair from an exercise's grading table.
pub struct Case<I, O> {
    pub input: I,
    pub expected: O,
}

impl<I, O> Case<I, O> {
    pub fn new(input: I, expected: O) -> Self {
        Self { input, expected }
    }
}

enum Entry<I, O> {
    Runnable {
        name: &'static str,
        run: Box<dyn Fn(&I) -> O>,
    },
    Rejected {
        name: &'static str,
        reason: &'static str,
    },
}

/// A named exercise and its registered candidate implementations.
///
/// Candidates that cannot be invoked against the exercise's signature at all
/// (wrong arity, incompatible return type, code that does not compile) are
/// registered as rejected so the grading report still accounts for them.
pub struct Exercise<I, O> {
    name: &'static str,
    entries: Vec<Entry<I, O>>,
}

impl<I, O> Exercise<I, O> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    pub fn candidate(mut self, name: &'static str, run: impl Fn(&I) -> O + 'static) -> Self {
        self.entries.push(Entry::Runnable {
            name,
            run: Box::new(run),
        });
        self
    }

    pub fn rejected(mut self, name: &'static str, reason: &'static str) -> Self {
        self.entries.push(Entry::Rejected { name, reason });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A single failed case for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Mismatch {
        case: usize,
        expected: String,
        actual: String,
    },
    Panicked {
        case: usize,
        message: String,
    },
}

impl Failure {
    pub fn case(&self) -> usize {
        match self {
            Failure::Mismatch { case, .. } | Failure::Panicked { case, .. } => *case,
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Graded {
        cases: usize,
        failures: Vec<Failure>,
        duration: Duration,
    },
    Rejected {
        reason: &'static str,
    },
}

/// Grading result for one candidate.
#[derive(Debug)]
pub struct Report {
    pub candidate: &'static str,
    pub outcome: Outcome,
}

impl Report {
    /// A candidate passes only if it was graded and no case failed.
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, Outcome::Graded { failures, .. } if failures.is_empty())
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected { .. })
    }

    pub fn failures(&self) -> &[Failure] {
        match &self.outcome {
            Outcome::Graded { failures, .. } => failures,
            Outcome::Rejected { .. } => &[],
        }
    }

    pub fn failure_count(&self) -> usize {
        self.failures().len()
    }
}

/// Run every case against every registered candidate.
///
/// All failures are collected rather than stopping at the first: a wrong
/// answer becomes a `Mismatch`, a panicking candidate (out-of-bounds index,
/// arithmetic overflow) becomes a `Panicked` failure for that case and
/// grading moves on to the next case. Rejected registrations are logged and
/// skipped.
pub fn grade<I, O>(exercise: &Exercise<I, O>, cases: &[Case<I, O>]) -> Vec<Report>
where
    O: PartialEq + Debug,
{
    exercise
        .entries
        .iter()
        .map(|entry| match *entry {
            Entry::Rejected { name, reason } => {
                log::warn!("skipping {}/{name}: {reason}", exercise.name);
                Report {
                    candidate: name,
                    outcome: Outcome::Rejected { reason },
                }
            }
            Entry::Runnable { name, ref run } => {
                let start = Instant::now();
                let mut failures = Vec::new();
                for (index, case) in cases.iter().enumerate() {
                    match catch_unwind(AssertUnwindSafe(|| run(&case.input))) {
                        Ok(actual) => {
                            if actual != case.expected {
                                failures.push(Failure::Mismatch {
                                    case: index,
                                    expected: format!("{:?}", case.expected),
                                    actual: format!("{actual:?}"),
                                });
                            }
                        }
                        Err(payload) => failures.push(Failure::Panicked {
                            case: index,
                            message: panic_message(payload.as_ref()),
                        }),
                    }
                }
                log::debug!(
                    "{}/{name}: {} of {} cases failed",
                    exercise.name,
                    failures.len(),
                    cases.len()
                );
                Report {
                    candidate: name,
                    outcome: Outcome::Graded {
                        cases: cases.len(),
                        failures,
                        duration: start.elapsed(),
                    },
                }
            }
        })
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

const SHOWN_FAILURES: usize = 5;

/// Print one candidate line per report plus a closing tally.
/// Returns true when every graded candidate passed all cases.
pub fn print_reports(exercise: &str, reports: &[Report]) -> bool {
    println!("Grading {} candidates for {}...", reports.len(), exercise);

    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for report in reports {
        match &report.outcome {
            Outcome::Rejected { reason } => {
                println!("- {}: SKIPPED ({})", report.candidate, reason);
                skipped += 1;
            }
            Outcome::Graded {
                cases,
                failures,
                duration,
            } if failures.is_empty() => {
                println!(
                    "✓ {}: PASSED ({} cases, {:.2}s)",
                    report.candidate,
                    cases,
                    duration.as_secs_f64()
                );
                passed += 1;
            }
            Outcome::Graded {
                cases, failures, ..
            } => {
                println!(
                    "✗ {}: FAILED ({} of {} cases)",
                    report.candidate,
                    failures.len(),
                    cases
                );
                for failure in failures.iter().take(SHOWN_FAILURES) {
                    match failure {
                        Failure::Mismatch {
                            case,
                            expected,
                            actual,
                        } => {
                            println!("    case {}: expected {}, got {}", case, expected, actual);
                        }
                        Failure::Panicked { case, message } => {
                            println!("    case {}: panicked: {}", case, message);
                        }
                    }
                }
                if failures.len() > SHOWN_FAILURES {
                    println!("    ... and {} more", failures.len() - SHOWN_FAILURES);
                }
                failed += 1;
            }
        }
    }

    println!("\nResults: {passed} passed, {failed} failed, {skipped} skipped");
    failed == 0
}

/// Static registry mapping exercise names to their graders.
///
/// This replaces the original per-exercise file globbing: every exercise is
/// registered once, by name, with a monomorphic grading entry point.
pub struct ExerciseSet {
    name: &'static str,
    entries: Vec<(&'static str, fn() -> Vec<Report>)>,
}

impl ExerciseSet {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    pub fn add(mut self, exercise: &'static str, grader: fn() -> Vec<Report>) -> Self {
        self.entries.push((exercise, grader));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Grade one exercise by name and print its report.
    pub fn run(&self, exercise: &str) -> bool {
        match self.entries.iter().find(|(name, _)| *name == exercise) {
            Some((name, grader)) => print_reports(name, &grader()),
            None => {
                log::error!("no exercise named '{exercise}' in {}", self.name);
                println!("Available exercises: {}", self.names().join(", "));
                false
            }
        }
    }

    /// Grade every registered exercise; true only if all of them pass.
    pub fn run_all(&self) -> bool {
        let mut all_passed = true;
        for (name, grader) in &self.entries {
            if !print_reports(name, &grader()) {
                all_passed = false;
            }
            println!();
        }
        all_passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parity() -> Exercise<i64, bool> {
        Exercise::new("parity")
            .candidate("even_ok", |n: &i64| n % 2 == 0)
            .candidate("always_true", |_: &i64| true)
            .candidate("panics_on_zero", |n: &i64| {
                if *n == 0 {
                    panic!("zero is unsupported");
                }
                n % 2 == 0
            })
            .rejected("wrong_shape", "returns a string instead of a boolean")
    }

    fn table() -> Vec<Case<i64, bool>> {
        vec![
            Case::new(0, true),
            Case::new(1, false),
            Case::new(2, true),
            Case::new(3, false),
        ]
    }

    fn report_for(name: &str) -> Report {
        grade(&parity(), &table())
            .into_iter()
            .find(|r| r.candidate == name)
            .unwrap()
    }

    #[test]
    fn correct_candidate_passes() {
        let report = report_for("even_ok");
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn every_mismatch_is_collected() {
        let report = report_for("always_true");
        let failed: Vec<usize> = report.failures().iter().map(Failure::case).collect();
        assert_eq!(failed, vec![1, 3]);
        assert!(matches!(
            report.failures()[0],
            Failure::Mismatch { case: 1, .. }
        ));
    }

    #[test]
    fn panic_becomes_a_failure_and_grading_continues() {
        let report = report_for("panics_on_zero");
        assert_eq!(report.failure_count(), 1);
        match &report.failures()[0] {
            Failure::Panicked { case, message } => {
                assert_eq!(*case, 0);
                assert_eq!(message, "zero is unsupported");
            }
            other => panic!("expected a panic failure, got {other:?}"),
        }
    }

    #[test]
    fn rejected_candidate_is_reported_not_graded() {
        let report = report_for("wrong_shape");
        assert!(report.is_rejected());
        assert!(!report.passed());
        assert_eq!(report.failure_count(), 0);
    }

    #[test]
    fn unknown_exercise_fails_the_run() {
        let set = ExerciseSet::new("toy").add("parity", || grade(&parity(), &table()));
        assert!(!set.run("missing"));
        assert_eq!(set.names(), vec!["parity"]);
    }
}
