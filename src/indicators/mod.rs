pub mod error;
pub mod overlay;
pub mod parser;
pub mod registry;
pub mod series;
pub mod snapshot;
pub mod validation;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
pub use overlay::*;
pub use parser::*;
pub use registry::*;
pub use series::*;
pub use validation::*;
