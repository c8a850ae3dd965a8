//! Tiered time-based tariff calculation
//!
//! Fees are computed from whole billed hours (ceiling of the elapsed time,
//! floored to a minimum of one hour) against a four-tier table:
//!
//! | billed hours `h` | fee                                   |
//! |------------------|---------------------------------------|
//! | `h <= 1`         | first hour rate                       |
//! | `1 < h < 12`     | first hour + (h - 1) * additional     |
//! | `h == 12`        | twelve-hour package (flat override)   |
//! | `h > 12`         | daily rate (flat cap)                 |
//!
//! All amounts are integer cents. The calculator is pure and safe to call
//! from any thread without synchronization.

use crate::error::{ParkingError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four tariff constants, in cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRates {
    #[serde(default = "default_first_hour")]
    pub first_hour_cents: i64,
    #[serde(default = "default_additional_hour")]
    pub additional_hour_cents: i64,
    #[serde(default = "default_twelve_hour_package")]
    pub twelve_hour_package_cents: i64,
    #[serde(default = "default_daily_rate")]
    pub daily_rate_cents: i64,
}

fn default_first_hour() -> i64 {
    1000
}

fn default_additional_hour() -> i64 {
    800
}

fn default_twelve_hour_package() -> i64 {
    3500
}

fn default_daily_rate() -> i64 {
    4000
}

impl Default for TariffRates {
    fn default() -> Self {
        Self {
            first_hour_cents: default_first_hour(),
            additional_hour_cents: default_additional_hour(),
            twelve_hour_package_cents: default_twelve_hour_package(),
            daily_rate_cents: default_daily_rate(),
        }
    }
}

/// Computes the parking fee in cents for a stay
///
/// # Errors
///
/// Returns [`ParkingError::InvalidInterval`] when `exit_time` precedes
/// `entry_time`.
pub fn compute_fee(
    rates: &TariffRates,
    entry_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
) -> Result<i64> {
    if exit_time < entry_time {
        return Err(ParkingError::InvalidInterval {
            entry: entry_time,
            exit: exit_time,
        });
    }

    let hours = billed_hours(entry_time, exit_time);
    let fee = if hours <= 1 {
        rates.first_hour_cents
    } else if hours < 12 {
        rates.first_hour_cents + (hours - 1) * rates.additional_hour_cents
    } else if hours == 12 {
        rates.twelve_hour_package_cents
    } else {
        rates.daily_rate_cents
    };

    Ok(fee)
}

/// Whole billed hours: ceiling of the elapsed time, minimum 1
fn billed_hours(entry_time: DateTime<Utc>, exit_time: DateTime<Utc>) -> i64 {
    let seconds = (exit_time - entry_time).num_seconds();
    let hours = (seconds + 3599) / 3600;
    hours.max(1)
}

/// Formats an amount in cents as a decimal string, e.g. `1000` -> `"10.00"`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
