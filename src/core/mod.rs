pub mod config;
pub mod helpers;
pub mod integrand;
pub mod integrate;
pub mod parsing;
pub mod rules;
