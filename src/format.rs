//! Human-readable formatting of workout measurements
//!
//! All output is locale-agnostic: ASCII digits, `.` as the decimal separator
//! and fixed unit labels taken from the active [`UnitSystem`].

use crate::units::UnitSystem;

/// Long distance values start at this many display units
const LONG_DISTANCE_THRESHOLD: f64 = 1000.0;

/// Round `value` to `decimals` fractional digits, ties away from zero.
///
/// `round(2.355, 2) == 2.36` and `round(-2.5, 0) == -3.0`. Note that
/// `2.345 * 100.0` is `234.50000000000003` in binary floating point, so
/// `round(2.345, 2)` is `2.35`. A result of zero is always positive zero:
/// `round(-0.04, 1)` is `0.0`, not `-0.0`.
pub fn round(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    // -0.0 + 0.0 == +0.0
    (value * scale).round() / scale + 0.0
}

/// Render a decimal in plain positional notation with at least one
/// fractional digit (`1.0`, `2.35`, `360000000000000000.0`).
///
/// Non-finite values render as `NaN`, `inf` and `-inf`.
fn decimal(value: f64) -> String {
    let rendered = value.to_string();
    if value.is_finite() && !rendered.contains('.') {
        format!("{}.0", rendered)
    } else {
        rendered
    }
}

/// Pad a clock component to two digits
fn two_digits(value: i64) -> String {
    if value < 10 {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

/// Render a duration as whole hours and minutes: `"1 h 5 m"` or `"42 min"`
pub fn duration_short(millis: i64) -> String {
    let minutes = millis / 1000 / 60;
    let hours = minutes / 60;
    let remaining_minutes = minutes % 60;

    if hours > 0 {
        format!("{} h {} m", hours, remaining_minutes)
    } else {
        format!("{} min", remaining_minutes)
    }
}

/// Render a duration as a clock value: `"1:01:01"`, hours unbounded
pub fn duration_long(millis: i64) -> String {
    let total_seconds = millis / 1000;
    let total_minutes = total_seconds / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let seconds = total_seconds % 60;

    format!("{}:{}:{}", hours, two_digits(minutes), two_digits(seconds))
}

/// Formats canonical measurements in one unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasurementFormatter {
    system: UnitSystem,
}

impl MeasurementFormatter {
    pub fn new(system: UnitSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn duration_short(&self, millis: i64) -> String {
        duration_short(millis)
    }

    pub fn duration_long(&self, millis: i64) -> String {
        duration_long(millis)
    }

    /// Format a pace given in minutes per kilometer
    pub fn pace(&self, minutes_per_kilometer: f64) -> String {
        let one = self.system.distance_from_kilometers(1.0);
        format!(
            "{} min/{}",
            decimal(round(minutes_per_kilometer / one, 1)),
            self.system.long_distance_unit()
        )
    }

    /// Format energy consumption given in kcal per kilometer
    pub fn relative_energy(&self, kcal_per_kilometer: f64) -> String {
        let one = self.system.distance_from_kilometers(1.0);
        format!(
            "{} kcal/{}",
            decimal(round(kcal_per_kilometer / one, 2)),
            self.system.long_distance_unit()
        )
    }

    /// Format a distance given in meters.
    ///
    /// Below 1000 display units the value is truncated to a whole number of
    /// short units; from 1000 upward it is divided by 1000 and shown with one
    /// decimal in the long unit.
    pub fn distance(&self, meters: i64) -> String {
        let units = self.system.distance_from_meters(meters as f64);
        if units >= LONG_DISTANCE_THRESHOLD {
            format!(
                "{} {}",
                decimal(round(units / LONG_DISTANCE_THRESHOLD, 1)),
                self.system.long_distance_unit()
            )
        } else {
            format!("{} {}", units.trunc() as i64, self.system.short_distance_unit())
        }
    }

    /// Format a speed given in meters per second
    pub fn speed(&self, meters_per_second: f64) -> String {
        format!(
            "{} {}",
            decimal(round(self.system.speed_from_meters_per_second(meters_per_second), 1)),
            self.system.speed_unit()
        )
    }

    /// Format an absolute energy amount
    pub fn energy(&self, kcal: i64) -> String {
        format!("{} kcal", kcal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric() -> MeasurementFormatter {
        MeasurementFormatter::new(UnitSystem::Metric)
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round(2.345, 2), 2.35);
        assert_eq!(round(2.355, 2), 2.36);
        assert_eq!(round(4.25, 1), 4.3);
        assert_eq!(round(-2.5, 0), -3.0);
        assert_eq!(round(-0.25, 1), -0.3);
        assert_eq!(round(3.14159, 2), 3.14);
    }

    #[test]
    fn test_round_to_zero_is_positive() {
        let rounded = round(-0.04, 1);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert!(round(-0.4, 0).is_sign_positive());
    }

    #[test]
    fn test_small_negative_values_format_as_zero() {
        let f = metric();
        assert_eq!(f.speed(-0.01), "0.0 km/h");
        assert_eq!(f.pace(-0.04), "0.0 min/km");
        assert_eq!(f.relative_energy(-0.001), "0.0 kcal/km");
        assert_eq!(f.speed(-1.0), "-3.6 km/h");
    }

    #[test]
    fn test_decimal_rendering() {
        assert_eq!(decimal(1.0), "1.0");
        assert_eq!(decimal(2.35), "2.35");
        assert_eq!(decimal(-3.0), "-3.0");
        assert_eq!(decimal(0.0), "0.0");
    }

    #[test]
    fn test_large_values_stay_positional() {
        assert_eq!(decimal(1e17), "100000000000000000.0");
        assert_eq!(metric().speed(1e17), "360000000000000000.0 km/h");
        assert!(!metric().distance(i64::MAX / 2).contains('e'));
    }

    #[test]
    fn test_non_finite_rendering() {
        assert_eq!(decimal(f64::NAN), "NaN");
        assert_eq!(decimal(f64::INFINITY), "inf");
        assert_eq!(metric().relative_energy(f64::INFINITY), "inf kcal/km");
    }

    #[test]
    fn test_duration_short() {
        assert_eq!(duration_short(59 * 60 * 1000), "59 min");
        assert_eq!(duration_short(60 * 60 * 1000), "1 h 0 m");
        assert_eq!(duration_short(3_725_000), "1 h 2 m");
        assert_eq!(duration_short(59_999), "0 min");
        assert_eq!(duration_short(0), "0 min");
    }

    #[test]
    fn test_duration_long() {
        assert_eq!(duration_long(3_661_000), "1:01:01");
        assert_eq!(duration_long(0), "0:00:00");
        assert_eq!(duration_long(600_000), "0:10:00");
        assert_eq!(duration_long(100 * 3600 * 1000 + 59_999), "100:00:59");
    }

    #[test]
    fn test_duration_long_negative_uses_same_rules() {
        // -61 s: minutes and seconds are both -1, which is below ten
        assert_eq!(duration_long(-61_000), "0:0-1:0-1");
    }

    #[test]
    fn test_metric_distance() {
        let f = metric();
        assert_eq!(f.distance(1000), "1.0 km");
        assert_eq!(f.distance(999), "999 m");
        assert_eq!(f.distance(12_345), "12.3 km");
        assert_eq!(f.distance(-5), "-5 m");
    }

    #[test]
    fn test_zero_distance_uses_short_unit() {
        for system in UnitSystem::ALL {
            let f = MeasurementFormatter::new(system);
            assert_eq!(f.distance(0), format!("0 {}", system.short_distance_unit()));
        }
    }

    #[test]
    fn test_imperial_distance() {
        let yards = MeasurementFormatter::new(UnitSystem::ImperialYards);
        // 914 m is 999.56 yd, truncated
        assert_eq!(yards.distance(914), "999 yd");
        // Imperial systems break unit consistency: the long unit is reached by
        // dividing the short value by 1000, not 1760, so 5000 m (5468 yd)
        // reads as 5.5 mi (really 3.1 mi).
        assert_eq!(yards.distance(5000), "5.5 mi");

        let meters = MeasurementFormatter::new(UnitSystem::ImperialMeters);
        assert_eq!(meters.distance(500), "500 m");
        // Same rule with meters as the short unit: 1500 m reads as 1.5 mi
        assert_eq!(meters.distance(1500), "1.5 mi");
    }

    #[test]
    fn test_speed() {
        assert_eq!(metric().speed(2.5), "9.0 km/h");
        assert_eq!(
            MeasurementFormatter::new(UnitSystem::MetricPhysical).speed(2.5),
            "2.5 m/s"
        );
        assert_eq!(
            MeasurementFormatter::new(UnitSystem::ImperialYards).speed(3.0),
            "6.7 mph"
        );
    }

    #[test]
    fn test_pace() {
        assert_eq!(metric().pace(5.0), "5.0 min/km");
        assert_eq!(
            MeasurementFormatter::new(UnitSystem::ImperialMeters).pace(5.0),
            "8.0 min/mi"
        );
    }

    #[test]
    fn test_relative_energy() {
        assert_eq!(metric().relative_energy(65.0), "65.0 kcal/km");
        assert_eq!(metric().relative_energy(61.237), "61.24 kcal/km");
        assert_eq!(
            MeasurementFormatter::new(UnitSystem::ImperialYards).relative_energy(60.0),
            "96.56 kcal/mi"
        );
    }

    #[test]
    fn test_energy() {
        assert_eq!(metric().energy(412), "412 kcal");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_formatting_is_idempotent(
            system_index in 0usize..4,
            meters in -10_000i64..1_000_000,
            speed in 0.0f64..50.0,
            millis in 0i64..100_000_000,
        ) {
            let f = MeasurementFormatter::new(UnitSystem::ALL[system_index]);
            prop_assert_eq!(f.distance(meters), f.distance(meters));
            prop_assert_eq!(f.speed(speed), f.speed(speed));
            prop_assert_eq!(f.pace(speed), f.pace(speed));
            prop_assert_eq!(f.duration_long(millis), f.duration_long(millis));
        }

        #[test]
        fn test_short_distance_is_whole_number(meters in 0i64..900) {
            let rendered = MeasurementFormatter::new(UnitSystem::ImperialYards).distance(meters);
            prop_assert!(rendered.ends_with(" yd"));
            prop_assert!(!rendered.contains('.'));
        }
    }
}
