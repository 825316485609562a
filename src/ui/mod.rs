pub mod preview;

pub use preview::GridWidget;
