//! The board and its spaces.
//!
//! - `FeeStrategy`: how a company's usage fee is computed
//! - `Space`: property, company or special space, with landing resolution
//! - `SpecialEffect`: what a special space does
//! - `Board`: the wrapping ring of spaces

pub mod effect;
pub mod fee;
pub mod layout;
pub mod space;

pub use effect::{EffectFn, SpecialEffect};
pub use fee::FeeStrategy;
pub use layout::Board;
pub use space::{Company, Property, Space, SpecialSpace};
