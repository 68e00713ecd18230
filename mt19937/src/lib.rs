// https://en.wikipedia.org/wiki/Mersenne_Twister
//
// One generation step of the MT19937 state: the twist recurrence over all 624
// words followed by tempering. Seeding and output extraction belong to the caller.

pub mod advance;
pub use advance::{advance, advance_into, advance_state, state_from_slice, temper, temper_in_place, twist, STATE_LEN};

pub mod error;
pub use error::TwisterError;

#[cfg(feature = "ffi")]
pub mod ffi;
