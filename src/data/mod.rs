// Network access to the prediction service

pub mod client;

pub use client::{ApiError, PredictionClient};
