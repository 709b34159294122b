use linreg_cost::{best_point, cost_curve, linspace, LinearModel, SampleSet};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Size in 1000 sqft, price in 1000s of dollars.
    let samples = SampleSet::new(
        vec![1.0, 1.7, 2.0, 2.5, 3.0, 3.2],
        vec![250.0, 300.0, 480.0, 430.0, 630.0, 730.0],
    )?;

    let model = LinearModel::new(200.0, 100.0);
    info!("prediction for 1200 sqft: ${:.0} thousand", model.predict(1.2));
    info!("J(w={}, b={}) = {:.2}", model.w, model.b, model.cost(&samples));

    let curve = cost_curve(&samples, &linspace(0.0, 400.0, 81), 100.0);
    if let Some(best) = best_point(&curve) {
        info!("lowest cost on b={} sweep: w={} J={:.2}", best.b, best.w, best.cost);
    }

    Ok(())
}
