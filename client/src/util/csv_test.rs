use super::*;
use crate::content::registrations::registrations;
use crate::state::registrations::{PaymentStatus, RegistrationFilter};

#[test]
fn plain_fields_pass_through() {
    assert_eq!(escape_field("REG-1001"), "REG-1001");
    assert_eq!(escape_field(""), "");
}

#[test]
fn fields_with_delimiters_are_quoted() {
    assert_eq!(escape_field("A, B"), "\"A, B\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
}

#[test]
fn header_row_is_fixed() {
    let csv = registrations_csv(&[]);
    assert_eq!(csv, "ID,Name,Email,Phone,Event,Team Members,Amount,Status,Date");
}

#[test]
fn record_count_is_rows_plus_header() {
    let rows = registrations();
    for filter in [
        RegistrationFilter::default(),
        RegistrationFilter { status: Some(PaymentStatus::Pending), ..RegistrationFilter::default() },
        RegistrationFilter { search: "nobody-matches".to_owned(), ..RegistrationFilter::default() },
    ] {
        let shown = filter.apply(&rows);
        let csv = registrations_csv(&shown);
        assert_eq!(csv.lines().count(), shown.len() + 1);
    }
}

#[test]
fn team_members_with_commas_stay_one_field() {
    let rows = registrations();
    let shown = vec![&rows[0]];
    let csv = registrations_csv(&shown);
    let record = csv.lines().nth(1).unwrap_or_default();
    assert_eq!(
        record,
        "REG-1010,Priyanka Sharma,priyanka.s@example.edu,+91 98100 10010,AETHER Hackathon 2026,\
         \"Priyanka Sharma, Aditya Kumar, Zoya Ali\",600,paid,2026-10-18"
    );
}

#[test]
fn export_filename_includes_date() {
    assert_eq!(export_filename("2026-10-19"), "registrations-2026-10-19.csv");
    assert_eq!(export_filename(" "), "registrations.csv");
}

#[test]
fn export_date_is_utc_calendar_day() {
    // 2026-10-19T23:59:59Z
    assert_eq!(export_date(1_792_454_399_000), "2026-10-19");
    assert_eq!(export_date(0), "1970-01-01");
}

#[test]
fn export_date_out_of_range_is_blank() {
    assert_eq!(export_date(i64::MAX), "");
}
