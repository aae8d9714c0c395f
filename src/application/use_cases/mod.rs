pub mod load_dataset;
pub mod render_sync;
pub mod tooltip_binder;

pub use load_dataset::*;
pub use render_sync::*;
pub use tooltip_binder::*;
