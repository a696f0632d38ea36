mod common;
use common::*;

#[test]
fn test_read_all_data() {
    assert_eq!(exec("DATA 1, 2, 3\nREAD a, b, c\nPRINT a, b, c"), "1\n2\n3\n");
    let s = "READ n$, x%\nPRINT n$, x%\nDATA \"NUGGET\", 3.5";
    assert_eq!(exec(s), "NUGGET\n3.5\n");
}

#[test]
fn test_read_count_must_match() {
    assert_eq!(
        exec("DATA 1, 2, 3\nREAD a, b"),
        "?OUT OF DATA IN 2; READ OF 2 WITH 3 DATA LEFT\n"
    );
    assert_eq!(
        exec("DATA 1\nREAD a\nREAD b"),
        "?OUT OF DATA IN 3; READ OF 1 WITH 0 DATA LEFT\n"
    );
    assert_eq!(exec("READ a"), "?OUT OF DATA IN 1; READ OF 1 WITH 0 DATA LEFT\n");
}

#[test]
fn test_read_type_mismatch() {
    assert_eq!(
        exec("DATA 1.5\nREAD a"),
        "?TYPE MISMATCH IN 2; a CANNOT READ 1.5\n"
    );
    assert_eq!(
        exec("DATA 7\nREAD a$"),
        "?TYPE MISMATCH IN 2; a$ CANNOT READ 7\n"
    );
}

#[test]
fn test_only_first_data_counts() {
    assert_eq!(exec("DATA 1\nDATA 2\nREAD a\nPRINT a"), "1\n");
}

#[test]
fn test_data_is_skipped_when_run() {
    assert_eq!(exec("PRINT 1\nDATA 5\nPRINT 2"), "1\n2\n");
}
