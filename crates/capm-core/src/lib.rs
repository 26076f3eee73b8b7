pub mod capm;
pub mod error;
pub mod rank;
pub mod regression;
pub mod returns;
pub mod types;

pub use capm::*;
pub use error::*;
pub use rank::*;
pub use regression::*;
pub use returns::*;
pub use types::*;
