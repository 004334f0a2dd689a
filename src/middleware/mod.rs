pub mod logging;
pub mod session;

pub use logging::*;
pub use session::*;
