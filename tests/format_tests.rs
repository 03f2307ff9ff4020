use indoc::indoc;
use textchain::{Conv, Error, Value, convert, format, textf};

#[test]
fn multi_line_invoice_template() {
    let template = indoc! {"
        Invoice %s
        Items: %d
        Total: %.2f
        Paid: %t
    "};
    let text = textf!(template, "A-17", 3u8, 99.999, false).unwrap();
    assert_eq!(
        text,
        indoc! {"
            Invoice A-17
            Items: 3
            Total: 100.00
            Paid: false
        "}
    );
}

#[test]
fn template_with_missing_and_extra_arguments() {
    assert_eq!(textf!("%s-%s", "a").unwrap(), "a-(MISSING)");
    assert_eq!(textf!("%s", "a", "b", 3).unwrap(), "a");
    assert_eq!(textf!("100%% done").unwrap(), "100% done");
}

#[test]
fn unresolvable_directive_is_reported() {
    assert!(matches!(format("%y", &[]), Err(Error::BadDirective(d)) if d == "%y"));
    assert_eq!(format("%y", &[Value::from(1)]).unwrap(), "%y");
}

#[test]
fn conv_format_appends_in_accumulator() {
    let lines = Conv::new()
        .format("%s=%d\n", &[Value::from("a"), Value::from(1)])
        .format("%s=%d\n", &[Value::from("b"), Value::from(2)])
        .string();
    assert_eq!(lines, "a=1\nb=2\n");
}

#[test]
fn conv_format_replaces_scalar_and_continues() {
    let out = convert("ignored")
        .format("%v %v", &[Value::from("Señor"), Value::from(vec!["López", "Ñ"])])
        .remove_tilde()
        .to_snake_case_upper()
        .string();
    assert_eq!(out, "SENOR_LOPEZ_N");
}

#[test]
fn sequence_argument_renders_space_joined() {
    assert_eq!(textf!("[%s]", vec!["a", "b"]).unwrap(), "[a b]");
}
