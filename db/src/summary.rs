use chrono::{Datelike, Local, Month};
use common::misc::BookingStatus;

use crate::{Store, models::summary::MonthlySummary};

/// Twelve monthly aggregates for the current local year, January first.
pub fn get_monthly_booking_summary(store: &Store) -> Vec<MonthlySummary> {
    get_monthly_booking_summary_for_year(store, Local::now().year())
}

/// Aggregates bookings whose `start_date` falls in `year`.
///
/// Revenue only counts approved bookings. Bookings from other years are
/// ignored entirely.
pub fn get_monthly_booking_summary_for_year(store: &Store, year: i32) -> Vec<MonthlySummary> {
    let mut summary = Vec::with_capacity(12);
    let mut month = Month::January;
    for _ in 0..12 {
        summary.push(MonthlySummary {
            month: month.name().to_string(),
            total: 0,
            approved: 0,
            rejected: 0,
            pending: 0,
            revenue: 0.0,
        });
        month = month.succ();
    }

    for booking in store.bookings.read().iter() {
        if booking.start_date.year() != year {
            continue;
        }
        let entry = &mut summary[booking.start_date.month0() as usize];
        entry.total += 1;
        match booking.status {
            BookingStatus::Approved => {
                entry.approved += 1;
                entry.revenue += booking.total_price;
            }
            BookingStatus::Rejected => entry.rejected += 1,
            BookingStatus::Pending => entry.pending += 1,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        booking::{insert_booking, update_booking_status},
        dtos::booking::BookingCreateRequest,
    };
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn book(store: &Store, date: NaiveDate, price: f64, status: BookingStatus) {
        let booking = insert_booking(
            store,
            BookingCreateRequest {
                building_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                start_date: date,
                end_date: date.succ_opt().unwrap(),
                payment_proof: None,
                total_price: price,
                google_calendar_event_id: None,
            },
        );
        if status != BookingStatus::Pending {
            update_booking_status(store, booking.id, status);
        }
    }

    #[test]
    fn march_fixture_in_current_year() {
        let store = Store::new();
        let year = Local::now().year();
        book(&store, NaiveDate::from_ymd_opt(year, 3, 15).unwrap(), 1000.0, BookingStatus::Approved);
        book(&store, NaiveDate::from_ymd_opt(year, 3, 20).unwrap(), 750.0, BookingStatus::Pending);

        let summary = get_monthly_booking_summary(&store);
        assert_eq!(summary.len(), 12);

        let march = &summary[2];
        assert_eq!(march.month, "March");
        assert_eq!(march.total, 2);
        assert_eq!(march.approved, 1);
        assert_eq!(march.pending, 1);
        assert_eq!(march.rejected, 0);
        assert_eq!(march.revenue, 1000.0);

        for (index, entry) in summary.iter().enumerate() {
            if index != 2 {
                assert_eq!(entry.total, 0, "{}", entry.month);
                assert_eq!(entry.revenue, 0.0, "{}", entry.month);
            }
        }
    }

    #[test]
    fn months_come_in_calendar_order() {
        let summary = get_monthly_booking_summary_for_year(&Store::new(), 2024);
        let names: Vec<&str> = summary.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(names.first(), Some(&"January"));
        assert_eq!(names.get(5), Some(&"June"));
        assert_eq!(names.last(), Some(&"December"));
    }

    #[test]
    fn other_years_are_excluded() {
        let store = Store::new();
        book(&store, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), 400.0, BookingStatus::Approved);
        book(&store, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 500.0, BookingStatus::Approved);
        book(&store, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 600.0, BookingStatus::Approved);

        let summary = get_monthly_booking_summary_for_year(&store, 2024);
        assert_eq!(summary[0].total, 1);
        assert_eq!(summary[0].revenue, 500.0);
        assert_eq!(summary[11].total, 0);
        assert_eq!(summary.iter().map(|m| m.total).sum::<usize>(), 1);
    }

    #[test]
    fn rejected_bookings_count_but_earn_nothing() {
        let store = Store::new();
        book(&store, NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(), 900.0, BookingStatus::Rejected);
        book(&store, NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(), 100.0, BookingStatus::Approved);

        let july = &get_monthly_booking_summary_for_year(&store, 2024)[6];
        assert_eq!(july.total, 2);
        assert_eq!(july.rejected, 1);
        assert_eq!(july.approved, 1);
        assert_eq!(july.revenue, 100.0);
    }
}
