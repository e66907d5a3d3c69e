use linechart_rs::core::select_ticks;
use proptest::prelude::*;

proptest! {
    #[test]
    fn ticks_are_increasing_and_inside_the_domain(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 1.0f64..1_000_000.0,
        axis_span_px in 300.0f64..2000.0,
        target_spacing_px in 40.0f64..100.0
    ) {
        let domain_end = domain_start + domain_span;
        let ticks = select_ticks(domain_start, domain_end, axis_span_px, target_spacing_px)
            .expect("ticks");

        prop_assert!(!ticks.is_empty());
        let tolerance = domain_span * 1e-9;
        for pair in ticks.windows(2) {
            prop_assert!(pair[1].value > pair[0].value);
        }
        for tick in &ticks {
            prop_assert!(tick.value >= domain_start - tolerance);
            prop_assert!(tick.value <= domain_end + tolerance);
            prop_assert!(!tick.label.is_empty());
        }
    }

    #[test]
    fn tick_spacing_is_uniform(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 1.0f64..10_000.0
    ) {
        let domain_end = domain_start + domain_span;
        let ticks = select_ticks(domain_start, domain_end, 800.0, 80.0).expect("ticks");

        if ticks.len() >= 3 {
            let step = ticks[1].value - ticks[0].value;
            for pair in ticks.windows(2) {
                let gap = pair[1].value - pair[0].value;
                prop_assert!((gap - step).abs() <= step * 1e-6);
            }
        }
    }
}
