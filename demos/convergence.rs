use hitmiss::callbacks::SimpleCallback;
use hitmiss::convergence;
use hitmiss::shapes::ShapeKind;

use rand_pcg::Pcg64;

fn main() {
    env_logger::init();

    // Initialize the random number generator.
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let shape = ShapeKind::Hexagon { side: 1.0 };

    // print every entry as soon as it is finished
    let callback = SimpleCallback {};

    let series = convergence::analyze(
        &shape,
        &mut rng,
        &callback,
        &[100, 500, 1000, 5000, 10_000, 50_000, 100_000],
    )
    .unwrap();

    println!("\n--------------------------------------");
    println!(
        "best:  N={} at {:.4}% error",
        series.best().calls(),
        series.best().result().error_percentage()
    );
    println!(
        "worst: N={} at {:.4}% error",
        series.worst().calls(),
        series.worst().result().error_percentage()
    );

    println!("\n{}", serde_json::to_string_pretty(&series).unwrap());
}
