pub mod estimator;
pub mod outlook;
pub mod percentile;
pub mod sampler;

pub use self::{
    estimator::{Estimator, SimulationResult},
    outlook::Outlook,
    percentile::Percentile,
    sampler::{RngSampler, Sampler},
};
