//! Test-harness features: plain pass, ignored, expected panic, runtime skip.

#[test]
fn our_first_test() {
    assert_eq!(1, 1);
}

#[test]
#[ignore = "always skipped; run with --ignored to see it fail"]
fn should_be_skipped() {
    assert_eq!(1, 2);
}

#[test]
#[should_panic]
fn should_be_ok_if_fails() {
    assert_eq!(1, 2);
}

#[test]
fn should_be_skipped_if() {
    // 条件跳过：条件成立时直接返回
    if 4 > 1 {
        eprintln!("skipped because 4 > 1");
        return;
    }
    assert_eq!(1, 2);
}
