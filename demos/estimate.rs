use hitmiss::estimators::hit_or_miss;
use hitmiss::shapes::ShapeKind;

use rand_pcg::Pcg64;

fn main() {
    env_logger::init();

    // Initialize the random number generator.
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let shapes = vec![
        ShapeKind::Circle { radius: 1.0 },
        ShapeKind::Rectangle {
            width: 3.0,
            height: 2.0,
        },
        ShapeKind::Triangle {
            base: 3.0,
            height: 4.0,
        },
        ShapeKind::Square { side: 1.5 },
        ShapeKind::Ellipse {
            semi_major: 2.0,
            semi_minor: 1.0,
        },
        ShapeKind::Hexagon { side: 1.0 },
    ];

    for shape in shapes {
        let result = hit_or_miss::estimate(&shape, &mut rng, 100_000).unwrap();

        println!(
            "{: <9} N={} inside={} ratio={:.4} |B|={:.4} A={:.6} \u{b1} {:.6} (exact {:.6}, error {:.4}%)",
            shape.name(),
            result.calls(),
            result.points_inside(),
            result.ratio(),
            result.bounding_area(),
            result.estimate(),
            result.std(),
            result.exact_area(),
            result.error_percentage()
        );
    }
}
