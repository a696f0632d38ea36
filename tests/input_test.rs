mod common;
use common::*;

#[test]
fn test_input_prompt() {
    let s = "INPUT \"Number? \", n\nPRINT n * 2";
    assert_eq!(exec_with_input(s, "21\n"), "Number? 42\n");
}

#[test]
fn test_input_by_suffix() {
    let s = "INPUT a, b%, c$\nPRINT a, b%, c$";
    assert_eq!(exec_with_input(s, "1 2.5 hi\n"), "1\n2.5\nhi\n");
    assert_eq!(exec_with_input(s, "1\n\n2.5\n  hi  \n"), "1\n2.5\nhi\n");
}

#[test]
fn test_input_across_statements() {
    let s = "INPUT a\nINPUT b\nPRINT a + b";
    assert_eq!(exec_with_input(s, "3 4"), "7\n");
}

#[test]
fn test_bad_input() {
    assert_eq!(
        exec_with_input("INPUT a", "x"),
        "?BAD INPUT IN 1; EXPECTED INTEGER, GOT \"x\"\n"
    );
    assert_eq!(
        exec_with_input("INPUT a", "1.5"),
        "?BAD INPUT IN 1; EXPECTED INTEGER, GOT \"1.5\"\n"
    );
    assert_eq!(
        exec_with_input("INPUT \"? \", a%", "one"),
        "? ?BAD INPUT IN 1; EXPECTED FLOAT, GOT \"one\"\n"
    );
    assert_eq!(exec("INPUT a"), "?BAD INPUT IN 1; END OF INPUT\n");
}
