#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod carousel;
pub use carousel::*;

mod error;
pub use error::*;

mod layout;
pub use layout::*;

mod model;
pub use model::*;

mod price;
pub use price::*;

mod rating;
pub use rating::*;

mod selection;
pub use selection::*;
