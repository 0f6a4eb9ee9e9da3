use crate::entities::{Driver, DriverOption};

/// Prices every driver for `distance_km` and orders the options cheapest
/// first. Equal prices keep catalog order.
pub fn rank_options(drivers: Vec<Driver>, distance_km: f64) -> Vec<DriverOption> {
    let mut options: Vec<DriverOption> = drivers
        .into_iter()
        .map(|driver| DriverOption::new(driver, distance_km))
        .collect();

    // sort_by is stable
    options.sort_by(|a, b| a.value.amount().total_cmp(&b.value.amount()));

    options
}

/// Eligibility is checked on whole kilometres.
pub fn eligibility_distance(distance_km: f64) -> i32 {
    distance_km.round() as i32
}
