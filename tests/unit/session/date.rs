use super::*;

#[test]
fn pads_month_and_day() {
    let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(date_label(d), "03.07.2025");
}

#[test]
fn two_digit_fields_are_kept() {
    let d = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    assert_eq!(date_label(d), "12.31.1999");
}

#[test]
fn today_has_the_stamp_shape() {
    let s = today_label();
    let parts: Vec<&str> = s.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(
        parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
        vec![2, 2, 4]
    );
    assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
}
