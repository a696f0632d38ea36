use super::*;

#[test]
fn test_gosub_resumes_after_call() {
    let s = r#"
x = 1
GOSUB test
PRINT y
END
test: y = x + 3
RETURN
"#;
    assert_eq!(run(s), "4\n");
}

#[test]
fn test_nested_gosub() {
    let s = r#"
GOSUB first
PRINT "back"
END
first: PRINT "first "
GOSUB second
RETURN
second: PRINT "second "
RETURN
"#;
    assert_eq!(run(s), "first second back");
}

#[test]
fn test_return_without_gosub() {
    assert_eq!(run("PRINT \"a\"\nRETURN\n"), "a?RETURN WITHOUT GOSUB IN 2\n");
}

#[test]
fn test_undefined_label() {
    assert_eq!(
        run("GOSUB nowhere\n"),
        "?UNDEFINED LABEL IN 1; nowhere\n"
    );
}

#[test]
fn test_falls_into_subroutine_without_end() {
    let s = "x = 2\nsub: PRINT x\nRETURN\n";
    assert_eq!(run(s), "2\n?RETURN WITHOUT GOSUB IN 3\n");
}
