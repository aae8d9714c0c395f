pub mod dispatcher;
pub mod use_cases;

pub use dispatcher::*;
pub use use_cases::*;
