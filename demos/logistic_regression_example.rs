use ndarray::{Axis, concatenate};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tabular_fit::metrics::accuracy;
use tabular_fit::predict::{predict_labels, predict_proba};
use tabular_fit::{Matrix, Vector, Verbosity, logistic_regression, reg_logistic_regression};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Logistic Regression Classification Example ===\n");

    // Two Gaussian blobs; interleave them so every mini-batch sees both classes
    let mut rng = StdRng::seed_from_u64(7);
    let n_per_class = 150;
    let noise = Normal::new(0.0, 0.6)?;
    let positives = Matrix::random_using((n_per_class, 2), noise, &mut rng) + 1.0;
    let negatives = Matrix::random_using((n_per_class, 2), noise, &mut rng) - 1.0;

    let stacked = concatenate(Axis(0), &[positives.view(), negatives.view()])?;
    let order: Vec<usize> = (0..n_per_class).flat_map(|i| [i, n_per_class + i]).collect();
    let x = stacked.select(Axis(0), &order);
    let y = Vector::from_iter((0..2 * n_per_class).map(|i| if i % 2 == 0 { 1.0 } else { 0.0 }));

    println!("Training samples: {}", x.nrows());

    let initial_w = Vector::zeros(2);
    let fit = logistic_regression(&y, &x, &initial_w, 30, 0.1, Verbosity::Info)?;

    println!("\nLogistic regression:");
    println!("Weights: {:.4}, bias: {:.4}", fit.weights, fit.bias);
    println!("First/last epoch loss: {:.4} -> {:.4}", fit.losses[0], fit.losses[29]);
    let labels = predict_labels(&x, &fit.weights, fit.bias)?;
    println!("Training accuracy: {:.2}%", accuracy(&y, &labels)? * 100.0);

    for lambda in [0.01, 0.1, 1.0] {
        let reg = reg_logistic_regression(&y, &x, lambda, &initial_w, 30, 0.1, Verbosity::Silent)?;
        let labels = predict_labels(&x, &reg.weights, reg.bias)?;
        println!(
            "λ={:<4}: w = {:.4}, final loss = {:.4}, accuracy = {:.2}%",
            lambda,
            reg.weights,
            reg.final_loss().unwrap_or(f64::NAN),
            accuracy(&y, &labels)? * 100.0
        );
    }

    println!("\nProbabilities on new points:");
    let new_points = Matrix::from_shape_vec((3, 2), vec![-2.0, -1.5, 0.0, 0.1, 1.8, 2.2])?;
    let probabilities = predict_proba(&new_points, &fit.weights, fit.bias)?;
    for (point, p) in new_points.outer_iter().zip(probabilities.iter()) {
        println!("{:?} -> P(class 1) = {:.3}", point.to_vec(), p);
    }

    Ok(())
}
