use super::*;

#[test]
fn test_step_stops_at_end_bound() {
    let s = "FOR i = 0 TO 30 STEP 10\nPRINT i\nNEXT\nPRINT \"done\"\n";
    assert_eq!(run(s), "0\n10\n20\ndone");
}

#[test]
fn test_default_step() {
    assert_eq!(run("FOR i = 1 TO 4\nPRINT i\nNEXT\n"), "1\n2\n3\n");
}

#[test]
fn test_negative_step() {
    let s = "FOR i = 3 TO 0 STEP 0 - 1\nPRINT i\nNEXT\n";
    assert_eq!(run(s), "3\n2\n1\n");
}

#[test]
fn test_body_skipped_when_already_past_end() {
    let s = "FOR i = 5 TO 1\nPRINT i\nNEXT\nPRINT \"after\"\n";
    assert_eq!(run(s), "after");
}

#[test]
fn test_nested_loops() {
    let s = r#"
FOR i = 0 TO 2
FOR j = 0 TO 2
PRINT i * 10 + j
NEXT
NEXT
PRINT "done"
"#;
    assert_eq!(run(s), "0\n1\n10\n11\ndone");
}

#[test]
fn test_next_with_variable_closes_inner_loop() {
    let s = r#"
FOR i = 0 TO 2
FOR j = 0 TO 5
PRINT j
NEXT i
PRINT i
"#;
    assert_eq!(run(s), "0\n0\n2\n");
}

#[test]
fn test_loop_run_again_from_the_top() {
    let s = r#"
FOR k = 0 TO 2
GOSUB inner
NEXT
END
inner: FOR i = 0 TO 2
PRINT i
NEXT
RETURN
"#;
    assert_eq!(run(s), "0\n1\n0\n1\n");
}

#[test]
fn test_next_without_for() {
    assert_eq!(run("NEXT\n"), "?NEXT WITHOUT FOR IN 1\n");
    assert_eq!(
        run("FOR i = 0 TO 3\nNEXT q\n"),
        "?NEXT WITHOUT FOR IN 2; q\n"
    );
}

#[test]
fn test_for_without_next() {
    assert_eq!(run("FOR i = 5 TO 1\nPRINT i\n"), "?FOR WITHOUT NEXT IN 1\n");
}

#[test]
fn test_loop_variable_must_be_integer() {
    assert_eq!(
        run("FOR i% = 0.0 TO 1.0\nNEXT\n"),
        "?TYPE MISMATCH IN 1; FOR NEEDS AN INTEGER VARIABLE\n"
    );
}

#[test]
fn test_outer_next_runs_when_inner_loop_ends() {
    let s = r#"
FOR i = 0 TO 3
PRINT i
FOR j = 0 TO 1
NEXT i
PRINT "end"
"#;
    assert_eq!(run(s), "0\n1\n2\nend");
    let s = r#"
FOR i = 0 TO 3
PRINT i
FOR j = 5 TO 1
NEXT i
PRINT "end"
"#;
    assert_eq!(run(s), "0\n1\n2\nend");
}

#[test]
fn test_skipped_inner_loop_with_outer_next_and_no_outer_loop() {
    assert_eq!(
        run("FOR j = 5 TO 1\nNEXT i\n"),
        "?NEXT WITHOUT FOR IN 2; i\n"
    );
}
