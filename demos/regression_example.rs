use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tabular_fit::metrics::{mean_squared_error, r2_score};
use tabular_fit::predict::predict_linear;
use tabular_fit::{
    Matrix, Vector, Verbosity, least_squares, least_squares_gd, least_squares_sgd,
    ridge_regression,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Least Squares Regression Example ===\n");

    // y = 3 x0 - 1.5 x1 + 0.5 x2 + small noise
    let mut rng = StdRng::seed_from_u64(2024);
    let x = Matrix::random_using((500, 3), Uniform::new(-1.0, 1.0), &mut rng);
    let true_w = Vector::from(vec![3.0, -1.5, 0.5]);
    let noise = Vector::random_using(500, Uniform::new(-0.05, 0.05), &mut rng);
    let y = x.dot(&true_w) + noise;

    println!("True weights: {:?}", true_w);

    let (w, loss) = least_squares(&y, &x)?;
    println!("\nLeast squares:   w = {:.4}, loss = {:.6}", w, loss);

    for lambda in [0.0, 0.001, 0.01, 0.1] {
        let (w, loss) = ridge_regression(&y, &x, lambda)?;
        println!("Ridge (λ={:<5}): w = {:.4}, loss = {:.6}", lambda, w, loss);
    }

    let initial_w = Vector::zeros(3);
    let (w_gd, loss_gd) = least_squares_gd(&y, &x, &initial_w, 200, 0.5, Verbosity::Silent)?;
    println!("\nGradient descent (200 iters): w = {:.4}, loss = {:.6}", w_gd, loss_gd);

    // prints one progress line per iteration
    let (w_sgd, loss_sgd) =
        least_squares_sgd(&y, &x, &initial_w, 20, 0.2, Verbosity::Info, &mut rng)?;
    println!("SGD (20 iters): w = {:.4}, loss = {:.6}", w_sgd, loss_sgd);

    let predictions = predict_linear(&x, &w_gd)?;
    println!("\nGD fit quality:");
    println!("MSE: {:.6}", mean_squared_error(&y, &predictions)?);
    println!("R²:  {:.4}", r2_score(&y, &predictions)?);

    Ok(())
}
