//! Mock registrations for the admin table.

use crate::state::registrations::{PaymentStatus, Registration};

#[allow(clippy::too_many_arguments)]
fn registration(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    event: &str,
    team_members: &str,
    amount: u32,
    status: PaymentStatus,
    date: &str,
) -> Registration {
    Registration {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        event: event.to_owned(),
        team_members: team_members.to_owned(),
        amount,
        status,
        date: date.to_owned(),
    }
}

/// Registration rows, newest first.
pub fn registrations() -> Vec<Registration> {
    const HACK: &str = "AETHER Hackathon 2026";
    const TALKS: &str = "Tech Talk Series: Winter Edition";
    const SUMMIT: &str = "Climate Tech Summit";
    vec![
        registration("REG-1010", "Priyanka Sharma", "priyanka.s@example.edu", "+91 98100 10010", HACK, "Priyanka Sharma, Aditya Kumar, Zoya Ali", 600, PaymentStatus::Paid, "2026-10-18"),
        registration("REG-1009", "Harsh Vardhan", "harsh.v@example.edu", "+91 98100 10009", SUMMIT, "Harsh Vardhan", 250, PaymentStatus::Pending, "2026-10-17"),
        registration("REG-1008", "Sneha Pillai", "sneha.p@example.edu", "+91 98100 10008", HACK, "Sneha Pillai, Manav Jain", 400, PaymentStatus::Failed, "2026-10-16"),
        registration("REG-1007", "Yash Agarwal", "yash.a@example.edu", "+91 98100 10007", TALKS, "Yash Agarwal", 100, PaymentStatus::Paid, "2026-10-15"),
        registration("REG-1006", "Fatima Sheikh", "fatima.s@example.edu", "+91 98100 10006", HACK, "Fatima Sheikh, Rhea Kapoor, Omkar Patil, Jay Shah", 800, PaymentStatus::Paid, "2026-10-14"),
        registration("REG-1005", "Kunal Bhatt", "kunal.b@example.edu", "+91 98100 10005", TALKS, "Kunal Bhatt", 100, PaymentStatus::Pending, "2026-10-12"),
        registration("REG-1004", "Aditi Menon", "aditi.m@example.edu", "+91 98100 10004", SUMMIT, "Aditi Menon, Varun Rao", 500, PaymentStatus::Paid, "2026-10-10"),
        registration("REG-1003", "Siddharth Roy", "sid.roy@example.edu", "+91 98100 10003", HACK, "Siddharth Roy, Neha Singh", 400, PaymentStatus::Pending, "2026-10-08"),
        registration("REG-1002", "Lavanya Krishnan", "lavanya.k@example.edu", "+91 98100 10002", TALKS, "Lavanya Krishnan", 100, PaymentStatus::Failed, "2026-10-05"),
        registration("REG-1001", "Mohit Chauhan", "mohit.c@example.edu", "+91 98100 10001", SUMMIT, "Mohit Chauhan", 250, PaymentStatus::Paid, "2026-10-02"),
    ]
}
