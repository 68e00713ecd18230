use crate::error::TwisterError;
use tracing::{debug, trace};

pub const STATE_LEN: usize = 624; // n: degree of recurrence
const M: usize = 397; // middle word, an offset used in the recurrence relation defining the series x, 1 ≤ m < n
const A: u32 = 0x9908B0DF; // coefficients of the rational normal form twist matrix
const U: u32 = 0xB;
const S: u32 = 0x7;
const B: u32 = 0x9D2C5680;
const T: u32 = 0xF;
const C: u32 = 0xEFC60000;
const L: u32 = 0x12;
const LOWER_MASK: u32 = 0x7FFFFFFF;
const UPPER_MASK: u32 = !LOWER_MASK;

/// Views a caller supplied buffer as a generator state, failing unless it holds exactly
/// [`STATE_LEN`] words.
pub fn state_from_slice(state: &mut [u32]) -> Result<&mut [u32; STATE_LEN], TwisterError> {
    let len = state.len();
    state.try_into().map_err(|_| {
        debug!(len, expected = STATE_LEN, "rejecting state buffer");
        TwisterError::InvalidStateLength { len }
    })
}

/// Advances `state` by one generation in place: twist, then temper every word.
///
/// The length is checked before any element is read or written, so a rejected buffer
/// is left untouched.
///
/// Tempering overwrites the untempered recurrence values. Calling this again on the
/// same buffer does not continue the canonical MT19937 sequence; use [`advance_into`]
/// when the state has to survive.
pub fn advance(state: &mut [u32]) -> Result<(), TwisterError> {
    advance_state(state_from_slice(state)?);
    Ok(())
}

/// Infallible form of [`advance`] for callers already holding a full state array.
pub fn advance_state(state: &mut [u32; STATE_LEN]) {
    twist(state);
    temper_in_place(state);
    trace!("advanced state in place");
}

/// Twists `state` in place and writes the tempered words of the new generation to
/// `output`, leaving the untempered state ready for the next call.
pub fn advance_into(state: &mut [u32; STATE_LEN], output: &mut [u32; STATE_LEN]) {
    twist(state);
    for (out, &y) in output.iter_mut().zip(state.iter()) {
        *out = temper(y);
    }
    trace!("advanced state into output buffer");
}

/// The MT19937 recurrence over the whole state.
///
/// Updates run in index order and the `i + M` term reads words already rewritten in this
/// pass once `i + M` wraps, so the loop must not be reordered or snapshotted.
pub fn twist(mt: &mut [u32; STATE_LEN]) {
    for i in 0..STATE_LEN {
        let x = (mt[i] & UPPER_MASK) | (mt[(i + 1) % STATE_LEN] & LOWER_MASK);
        let t = match x & 1 == 0 {
            true => x >> 1,
            false => (x >> 1) ^ A,
        };
        mt[i] = mt[(i + M) % STATE_LEN] ^ t;
    }
}

pub fn temper(y: u32) -> u32 {
    let mut y = y;
    y ^= y >> U;
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^ y >> L
}

pub fn temper_in_place(state: &mut [u32; STATE_LEN]) {
    for y in state.iter_mut() {
        *y = temper(*y);
    }
}
