//! Admin registrations: records, filters and summary counters.
//!
//! DESIGN
//! ======
//! Filtering borrows from the source slice and returns references, so the
//! bundled table is never copied or reordered. Each predicate is independent
//! and the combined filter is their conjunction.

#[cfg(test)]
#[path = "registrations_test.rs"]
mod registrations_test;

/// Payment state of a registration, as the mock data and CSV spell it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Paid, Self::Pending, Self::Failed];

    /// Wire and CSV spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }

    /// Parse a select value. `"all"`, blank and unknown values mean no filter.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event: String,
    /// Member names joined into one display string.
    pub team_members: String,
    /// Amount in whole rupees.
    pub amount: u32,
    pub status: PaymentStatus,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
}

/// Current values of the three admin filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFilter {
    pub search: String,
    pub status: Option<PaymentStatus>,
    pub event: Option<String>,
}

impl RegistrationFilter {
    /// Case-insensitive substring match over name, email and id.
    pub fn matches_search(&self, row: &Registration) -> bool {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&row.name, &row.email, &row.id]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn matches_status(&self, row: &Registration) -> bool {
        self.status.is_none_or(|status| row.status == status)
    }

    pub fn matches_event(&self, row: &Registration) -> bool {
        self.event.as_deref().is_none_or(|event| row.event == event)
    }

    pub fn matches(&self, row: &Registration) -> bool {
        self.matches_search(row) && self.matches_status(row) && self.matches_event(row)
    }

    /// Rows passing every filter, in source order.
    pub fn apply<'a>(&self, rows: &'a [Registration]) -> Vec<&'a Registration> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}

/// Distinct event names in first-seen order, for the event select.
pub fn event_names(rows: &[Registration]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in rows {
        if !names.iter().any(|name| *name == row.event) {
            names.push(row.event.clone());
        }
    }
    names
}

/// Counters shown above the table for the current filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistrationSummary {
    pub shown: usize,
    pub paid: usize,
    pub paid_amount: u64,
}

pub fn summarize(rows: &[&Registration]) -> RegistrationSummary {
    rows.iter().fold(
        RegistrationSummary { shown: rows.len(), ..RegistrationSummary::default() },
        |mut summary, row| {
            if row.status == PaymentStatus::Paid {
                summary.paid += 1;
                summary.paid_amount += u64::from(row.amount);
            }
            summary
        },
    )
}

/// Rupee amount with thousands grouping, e.g. `₹12,500`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}
