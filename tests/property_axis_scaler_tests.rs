use proptest::prelude::*;
use xyplot_rs::core::AxisRange;
use xyplot_rs::scaling::{SAFETY_FACTOR, scale_range};

// Rounded bounds may sit inside the data by the safety margin, measured
// against the larger magnitude of the range.
fn containment_tolerance(range: AxisRange) -> f64 {
    let magnitude = range.lower.abs().max(range.upper.abs());
    magnitude * ((1.0 / SAFETY_FACTOR - 1.0) + 1e-12)
}

proptest! {
    #[test]
    fn scaled_range_contains_the_data(
        lower in -1.0e6f64..1.0e6,
        width in 1.0e-3f64..1.0e6
    ) {
        let range = AxisRange::new(lower, lower + width);
        let planned = scale_range(range);
        let tolerance = containment_tolerance(range);

        prop_assert!(planned.ticks.major > 0);
        prop_assert!(planned.range.lower < planned.range.upper);
        prop_assert!(planned.range.lower <= range.lower + tolerance);
        prop_assert!(planned.range.upper >= range.upper - tolerance);
    }

    #[test]
    fn mixed_sign_range_has_a_major_tick_at_zero(
        lower in -1.0e6f64..-1.0e-3,
        upper in 1.0e-3f64..1.0e6
    ) {
        let planned = scale_range(AxisRange::new(lower, upper));
        prop_assert!(planned.ticks.major > 0);
        prop_assert!(planned.range.lower < 0.0 && planned.range.upper > 0.0);

        let zero_index = -planned.range.lower / planned.step();
        prop_assert!((zero_index - zero_index.round()).abs() <= 1e-6);
    }

    #[test]
    fn bound_order_does_not_matter(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6
    ) {
        prop_assert_eq!(
            scale_range(AxisRange::new(a, b)),
            scale_range(AxisRange::new(b, a))
        );
    }

    #[test]
    fn zero_crossing_plans_never_exceed_a_folded_grid(
        lower in -1.0e3f64..-1.0e-2,
        upper in 1.0e-2f64..1.0e3
    ) {
        let planned = scale_range(AxisRange::new(lower, upper));
        prop_assert!(planned.ticks.major <= 2 * xyplot_rs::scaling::MAX_MAJOR_TICKS);
        prop_assert_eq!(planned.ticks.minor, 5);
    }
}
