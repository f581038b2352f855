#[doc(inline)]
pub use quadrant_scan::{self, *};
