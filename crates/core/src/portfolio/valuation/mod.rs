pub mod valuation_calculator;
pub mod valuation_model;
pub mod valuation_traits;

pub use valuation_calculator::*;
pub use valuation_model::*;
pub use valuation_traits::ValuationSourceTrait;
