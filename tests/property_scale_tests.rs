use linechart_rs::core::{DataPoint, LinearScale, Series};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        extent_px in 100.0f64..4000.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end).expect("valid scale");

        let px = scale.domain_to_pixel(value, extent_px).expect("to pixel");
        let recovered = scale.pixel_to_domain(px, extent_px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn bounds_contain_every_point_property(
        points in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..64)
    ) {
        let points: Vec<DataPoint> = points
            .into_iter()
            .map(|(x, y)| DataPoint::new(x, y))
            .collect();
        let series = Series::from_points(points.clone()).expect("series");
        let bounds = series.bounds();

        prop_assert!(bounds.x_min < bounds.x_max);
        prop_assert!(bounds.y_min < bounds.y_max);
        for point in &points {
            prop_assert!(point.x >= bounds.x_min && point.x <= bounds.x_max);
            prop_assert!(point.y >= bounds.y_min && point.y <= bounds.y_max);
        }
    }
}
