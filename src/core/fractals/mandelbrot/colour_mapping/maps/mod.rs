pub mod fire_gradient;
pub mod polynomial_gradient;
