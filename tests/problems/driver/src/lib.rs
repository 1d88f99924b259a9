
use anyhow::{Context, Result};
use std::{fmt::Debug, io::Write};

pub use protocol::Status;

/// Message reported when a solution returns `None`.
pub const RETURNED_NOTHING: &str = "Returned nothing";

/// Judgement of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(String),
}

/// Outcome of one case as it was reported on the protocol stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// 1-based position in the case table.
    pub index: usize,
    pub status: Status,
    pub message: String,
}

/// Ordered outcomes of a complete pass over a case table.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub outcomes: Vec<CaseOutcome>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == Status::Pass)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit code the driver contract prescribes for this run.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }
}

/// Runs every case in order and writes one protocol record per case to `out`.
///
/// `solve` produces the solution's answer for a case (`None` is the absent
/// result) and `judge` compares a produced answer with the case's expectation.
/// The answer is dropped right after judging. A failing case never stops the
/// pass; only I/O errors on `out` do.
pub fn run_cases<C, T, W>(
    out: &mut W,
    cases: &[C],
    mut solve: impl FnMut(&C) -> Option<T>,
    mut judge: impl FnMut(&C, &T) -> Verdict,
) -> Result<RunSummary>
where
    W: Write,
{
    let mut summary = RunSummary::default();
    for (offset, case) in cases.iter().enumerate() {
        let index = offset + 1;
        let verdict = match solve(case) {
            Some(answer) => judge(case, &answer),
            None => Verdict::Fail(RETURNED_NOTHING.to_string()),
        };
        let outcome = match verdict {
            Verdict::Pass => CaseOutcome {
                index,
                status: Status::Pass,
                message: String::new(),
            },
            Verdict::Fail(message) => CaseOutcome {
                index,
                status: Status::Fail,
                message,
            },
        };
        protocol::write_case(out, outcome.index, outcome.status, &outcome.message)
            .with_context(|| format!("failed to report test {index}"))?;
        summary.outcomes.push(outcome);
    }
    out.flush().context("failed to flush protocol output")?;
    Ok(summary)
}

/// Compares the first `expected.len()` elements of `actual` with `expected`.
///
/// A shorter `actual` is a mismatch. The failure message prints both slices
/// in full.
pub fn judge_prefix<T>(expected: &[T], actual: &[T]) -> Verdict
where
    T: PartialEq + Debug,
{
    let matches = actual
        .get(..expected.len())
        .is_some_and(|head| head == expected);
    if matches {
        Verdict::Pass
    } else {
        Verdict::Fail(format!("Expected {expected:?}, Got {actual:?}"))
    }
}

/// Exact string comparison.
pub fn judge_str(expected: &str, actual: &str) -> Verdict {
    if expected == actual {
        Verdict::Pass
    } else {
        Verdict::Fail(format!("Expected '{expected}', Got '{actual}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Case {
        input: i32,
        expected: &'static [i32],
    }

    const CASES: &[Case] = &[
        Case {
            input: 1,
            expected: &[1, 2],
        },
        Case {
            input: 2,
            expected: &[2, 3],
        },
        Case {
            input: 3,
            expected: &[3, 4],
        },
    ];

    fn judge(case: &Case, answer: &Vec<i32>) -> Verdict {
        judge_prefix(case.expected, answer)
    }

    #[test]
    fn every_case_passes_with_a_correct_solution() {
        let mut out = Vec::new();
        let summary = run_cases(&mut out, CASES, |c| Some(vec![c.input, c.input + 1]), judge)
            .expect("run cases");

        assert!(summary.all_passed());
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "TEST_1_STATUS=PASS\nTEST_1_MESSAGE=\n\
             TEST_2_STATUS=PASS\nTEST_2_MESSAGE=\n\
             TEST_3_STATUS=PASS\nTEST_3_MESSAGE=\n"
        );
    }

    #[test]
    fn absent_result_fails_without_stopping_the_run() {
        let mut out = Vec::new();
        let summary = run_cases(
            &mut out,
            CASES,
            |c| (c.input != 2).then(|| vec![c.input, c.input + 1]),
            judge,
        )
        .expect("run cases");

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.outcomes[1].message, RETURNED_NOTHING);
        assert_eq!(summary.outcomes[2].status, Status::Pass);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("TEST_2_STATUS=FAIL\nTEST_2_MESSAGE=Returned nothing\n"));
    }

    #[test]
    fn prefix_judge_ignores_trailing_elements() {
        assert_eq!(judge_prefix(&[0, 1], &[0, 1, 7]), Verdict::Pass);
    }

    #[test]
    fn prefix_judge_rejects_short_answers() {
        assert_eq!(
            judge_prefix(&[0, 1], &[0]),
            Verdict::Fail("Expected [0, 1], Got [0]".into())
        );
    }

    #[test]
    fn prefix_judge_reports_all_elements() {
        assert_eq!(
            judge_prefix(&[1, 2, 3], &[1, 2, 4]),
            Verdict::Fail("Expected [1, 2, 3], Got [1, 2, 4]".into())
        );
    }

    #[test]
    fn string_judge_quotes_both_values() {
        assert_eq!(judge_str("fl", "fl"), Verdict::Pass);
        assert_eq!(
            judge_str("fl", "flow"),
            Verdict::Fail("Expected 'fl', Got 'flow'".into())
        );
    }
}
