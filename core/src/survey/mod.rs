pub mod record;
pub mod side;

pub use record::{SwathPoint, SwathRecord};
pub use side::Side;
