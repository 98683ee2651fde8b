//! Hana vs client reconciliation
//!
//! For every person in the Hana series that also appears in the client
//! series, each Hana day is matched with the first client observation for the
//! same day. A row is emitted when the hours differ, or when both sides are
//! zero (a day nobody booked still needs a look).

use crate::types::{LeaveFlag, LeaveRecord, PersonSeries, ReconciliationRow};

/// True when a day must appear in the report
pub fn needs_review(hana_hours: f64, client_hours: f64) -> bool {
    hana_hours != client_hours || (hana_hours == 0.0 && client_hours == 0.0)
}

/// Flag disagreeing days, in Hana row order then day order
pub fn reconcile(
    hana: &PersonSeries,
    client: &PersonSeries,
    leaves: &LeaveRecord,
) -> Vec<ReconciliationRow> {
    let mut rows = Vec::new();

    for (person, hana_days) in hana.iter() {
        let Some(client_days) = client.get(person) else {
            continue;
        };

        for hana_day in hana_days {
            let Some(client_day) = client_days.iter().find(|o| o.day == hana_day.day) else {
                continue;
            };

            if needs_review(hana_day.hours, client_day.hours) {
                rows.push(ReconciliationRow {
                    person: person.to_string(),
                    day: hana_day.day,
                    hana_hours: hana_day.hours,
                    client_hours: client_day.hours,
                    leave: LeaveFlag::from(leaves.is_on_leave(person, hana_day.day)),
                });
            }
        }
    }

    rows
}
