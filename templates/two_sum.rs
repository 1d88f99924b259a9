// Test driver for `two_sum`.
//
// The submitted code must define:
//     pub fn two_sum(nums: &[i32], target: i32) -> Option<Vec<usize>>

// --- USER CODE START ---
{user_code}
// --- USER CODE END ---

pub struct TestCase {
    pub nums: &'static [i32],
    pub target: i32,
    pub expected: &'static [usize],
}

pub const TESTS: &[TestCase] = &[
    TestCase {
        nums: &[2, 7, 11, 15],
        target: 9,
        expected: &[0, 1],
    },
    TestCase {
        nums: &[3, 2, 4],
        target: 6,
        expected: &[1, 2],
    },
    TestCase {
        nums: &[3, 3],
        target: 6,
        expected: &[0, 1],
    },
    TestCase {
        nums: &[-1, -2, -3, -4, -5],
        target: -8,
        expected: &[2, 4],
    },
    TestCase {
        nums: &[1, 5, 1, 5],
        target: 10,
        expected: &[1, 3],
    },
];

fn main() {
    let stdout = std::io::stdout();
    match run_tests(&mut stdout.lock()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("failed to write results: {err}");
            std::process::exit(1);
        }
    }
}

pub fn run_tests(out: &mut impl std::io::Write) -> std::io::Result<bool> {
    let mut all_passed = true;

    for (i, test) in TESTS.iter().enumerate() {
        let n = i + 1;
        let Some(result) = two_sum(test.nums, test.target) else {
            writeln!(out, "TEST_{n}_STATUS=FAIL")?;
            writeln!(out, "TEST_{n}_MESSAGE=Returned nothing")?;
            all_passed = false;
            continue;
        };

        let passed = result.get(..test.expected.len()) == Some(test.expected);
        if passed {
            writeln!(out, "TEST_{n}_STATUS=PASS")?;
            writeln!(out, "TEST_{n}_MESSAGE=")?;
        } else {
            writeln!(out, "TEST_{n}_STATUS=FAIL")?;
            writeln!(
                out,
                "TEST_{n}_MESSAGE=Expected {:?}, Got {:?}",
                test.expected, result
            )?;
            all_passed = false;
        }
    }

    out.flush()?;
    Ok(all_passed)
}
