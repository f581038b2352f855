#[doc(inline)]
pub use bisect::{self, *};
#[doc(inline)]
pub use invertf::{self, *};
