use bit_calc::Session;
use bit_num::BitUint;

fn run(input: &str, a: Option<BitUint>, b: Option<BitUint>) -> anyhow::Result<String> {
    let mut output = Vec::new();
    Session::new(input.as_bytes(), &mut output).run(a, b)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn prompts_for_both_values() {
    let output = run("5\n3\n", None, None).unwrap();
    assert_eq!(
        output,
        "Please input an integer a: The base-2 representation of a is: (101)_2\n\
         Please input an integer b: The base-2 representation of b is: (11)_2\n\
         a + b = 8 = (1000)_2\n\
         a * b = 15 = (1111)_2\n\
         a != b\n\
         a >= b\n\
         a > b\n"
    );
}

#[test]
fn equal_values_print_every_non_strict_comparison() {
    let output = run("", Some(BitUint::from(255u8)), Some(BitUint::from(255u8))).unwrap();
    let comparisons: Vec<&str> = output.lines().skip(4).collect();
    assert_eq!(comparisons, ["a <= b", "a == b", "a >= b"]);
}

#[test]
fn smaller_first_operand() {
    let output = run("7\n", Some(BitUint::from(6u8)), None).unwrap();
    assert!(output.starts_with("The base-2 representation of a is: (110)_2\nPlease input an integer b: "));
    assert!(output.contains("a * b = 42 = (101010)_2\n"));
    assert!(output.ends_with("a < b\na <= b\na != b\n"));
}

#[test]
fn values_past_native_width() {
    let output = run("340282366920938463463374607431768211456\n  1  \n", None, None).unwrap();
    assert!(output.contains("a + b = 340282366920938463463374607431768211457 = "));
    assert!(output.contains("a * b = 340282366920938463463374607431768211456 = "));
}

#[test]
fn zero_operands() {
    let output = run("0\n0\n", None, None).unwrap();
    assert!(output.contains("The base-2 representation of a is: (0)_2\n"));
    assert!(output.contains("a + b = 0 = (0)_2\n"));
    assert!(output.contains("a * b = 0 = (0)_2\n"));
}

#[test]
fn rejects_bad_input() {
    let err = run("12x\n", None, None).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid digit 'x' at position 2"));

    let err = run("1\n", None, None).unwrap_err();
    assert!(err.to_string().contains("input ended"));
}

#[test]
fn values_split_by_any_whitespace() {
    let expected = run("5\n3\n", None, None).unwrap();
    assert_eq!(run("5 3\n", None, None).unwrap(), expected);
    assert_eq!(run("\n5\n\n3\n", None, None).unwrap(), expected);
    assert_eq!(run("  5\t\n \n 3", None, None).unwrap(), expected);
}

#[test]
fn blank_lines_before_end_of_input() {
    let err = run("5\n\n\n", None, None).unwrap_err();
    assert!(err.to_string().contains("input ended before a value for b"));
}
