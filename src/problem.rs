use std::{io::Write, path::Path, path::PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use duel_driver::RunSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Problem {
    #[value(name = "two-sum")]
    TwoSum,
    #[value(name = "longest-common-prefix")]
    LongestCommonPrefix,
}

impl Problem {
    pub const ALL: [Problem; 2] = [Problem::TwoSum, Problem::LongestCommonPrefix];

    pub fn slug(&self) -> &'static str {
        match self {
            Problem::TwoSum => "two-sum",
            Problem::LongestCommonPrefix => "longest-common-prefix",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Problem::TwoSum => "Two Sum",
            Problem::LongestCommonPrefix => "Longest Common Prefix",
        }
    }

    /// Signature submitted code has to define.
    pub fn signature(&self) -> &'static str {
        match self {
            Problem::TwoSum => "pub fn two_sum(nums: &[i32], target: i32) -> Option<Vec<usize>>",
            Problem::LongestCommonPrefix => {
                "pub fn longest_common_prefix(strs: &[&str]) -> Option<String>"
            }
        }
    }

    pub fn template_file(&self) -> &'static str {
        match self {
            Problem::TwoSum => "two_sum.rs",
            Problem::LongestCommonPrefix => "longest_common_prefix.rs",
        }
    }

    pub fn template_path(&self, templates_root: &Path) -> PathBuf {
        templates_root.join(self.template_file())
    }

    /// Runs the reference solution through the driver, reporting on `out`.
    pub fn run_reference<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        match self {
            Problem::TwoSum => duel_cases::check_two_sum(out, duel_cases::two_sum),
            Problem::LongestCommonPrefix => duel_cases::check_longest_common_prefix(
                out,
                duel_cases::longest_common_prefix,
            ),
        }
    }
}
