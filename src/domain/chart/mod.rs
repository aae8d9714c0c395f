//! Chart aggregate: scales, transitions, labels and the retained scene.

pub mod entities;
pub mod scene;
pub mod services;
pub mod transition;
pub mod value_objects;

pub use entities::*;
pub use scene::*;
pub use services::*;
pub use transition::*;
pub use value_objects::*;
