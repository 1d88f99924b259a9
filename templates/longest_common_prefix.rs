// Test driver for `longest_common_prefix`.
//
// The submitted code must define:
//     pub fn longest_common_prefix(strs: &[&str]) -> Option<String>

// --- USER CODE START ---
{user_code}
// --- USER CODE END ---

pub struct TestCase {
    pub strs: &'static [&'static str],
    pub expected: &'static str,
}

pub const TESTS: &[TestCase] = &[
    TestCase {
        strs: &["flower", "flow", "flight"],
        expected: "fl",
    },
    TestCase {
        strs: &["dog", "racecar", "car"],
        expected: "",
    },
    TestCase {
        strs: &[],
        expected: "",
    },
    TestCase {
        strs: &["x"],
        expected: "x",
    },
    TestCase {
        strs: &["interspecies", "interstellar", "interstate"],
        expected: "inters",
    },
    TestCase {
        strs: &["añejo", "añil"],
        expected: "añ",
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
        let Some(result) = longest_common_prefix(test.strs) else {
            writeln!(out, "TEST_{n}_STATUS=FAIL")?;
            writeln!(out, "TEST_{n}_MESSAGE=Returned nothing")?;
            all_passed = false;
            continue;
        };

        if result == test.expected {
            writeln!(out, "TEST_{n}_STATUS=PASS")?;
            writeln!(out, "TEST_{n}_MESSAGE=")?;
        } else {
            writeln!(out, "TEST_{n}_STATUS=FAIL")?;
            writeln!(
                out,
                "TEST_{n}_MESSAGE=Expected '{}', Got '{}'",
                test.expected.replace(['\r', '\n'], " "),
                result.replace(['\r', '\n'], " ")
            )?;
            all_passed = false;
        }
    }

    out.flush()?;
    Ok(all_passed)
}
