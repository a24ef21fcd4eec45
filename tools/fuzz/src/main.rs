use afl::fuzz;
use inn_validation::{Inn, RussianInnChecksum, Validator};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let text_result = RussianInnChecksum.validate(input.into());

    // the typed parser must accept exactly what the boolean validator accepts
    assert_eq!(text_result, input.parse::<Inn>().is_ok());

    let digits: Option<Vec<u32>> = input.chars().map(|c| c.to_digit(10)).collect();
    if let Some(digits) = digits {
        assert_eq!(text_result, RussianInnChecksum.validate((&digits).into()));
    } else {
        assert!(!text_result);
    }

    #[cfg(feature = "manual_test")]
    {
        println!("Valid: {:?}", text_result);
    }
}
