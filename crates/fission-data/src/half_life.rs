use fission_types::species::Species;

/// Seconds per minute.
pub const MINUTE_S: f64 = 60.0;
/// Seconds per hour.
pub const HOUR_S: f64 = 3600.0;
/// Seconds per day.
pub const DAY_S: f64 = 86400.0;
/// Seconds per (365-day) year.
pub const YEAR_S: f64 = 31_536_000.0;

/// Alpha-decay half-lives [s].
pub const ALPHA_S: [(Species, f64); 10] = [
    (Species::Th232, 14.05e9 * YEAR_S),
    (Species::U233, 159.2e3 * YEAR_S),
    (Species::U235, 703.8e6 * YEAR_S),
    (Species::U236, 2.342e7 * YEAR_S),
    (Species::U238, 4.468e9 * YEAR_S),
    (Species::Np237, 2.144e6 * YEAR_S),
    (Species::Pu238, 87.7 * YEAR_S),
    (Species::Pu239, 2.411e4 * YEAR_S),
    (Species::Pu240, 16.561e3 * YEAR_S),
    (Species::Pu241, 14.29 * YEAR_S),
];

/// Beta-minus half-lives [s].
pub const BETA_MINUS_S: [(Species, f64); 14] = [
    (Species::Th233, 22.3 * MINUTE_S),
    (Species::Pa233, 26.975 * DAY_S),
    (Species::U237, 6.75 * DAY_S),
    (Species::U239, 23.45 * MINUTE_S),
    (Species::U240, 14.1 * HOUR_S),
    (Species::Np238, 2.117 * DAY_S),
    (Species::Np239, 2.356 * DAY_S),
    (Species::Np240, 61.9 * HOUR_S),
    (Species::I135, 6.57 * HOUR_S),
    (Species::Xe135, 9.14 * HOUR_S),
    (Species::Pu241, 14.29 * YEAR_S),
    (Species::Pu243, 4.956 * HOUR_S),
    (Species::Am242, 16.02 * HOUR_S),
    (Species::Am244, 10.1 * HOUR_S),
];
