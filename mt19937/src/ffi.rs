/*
 * module: ffi
 */

use crate::advance::{advance_state, STATE_LEN};
use tracing::debug;

pub const MT19937_OK: i32 = 0;
pub const MT19937_NULL_STATE: i32 = -1;
pub const MT19937_INVALID_STATE_LENGTH: i32 = -2;

/// Advances a host owned state buffer by one generation, in place.
///
/// Returns [`MT19937_OK`], or an error code without touching the buffer.
///
/// # Safety
///
/// `state` must be null or point to `len` initialized, writable `u32`s that nothing else
/// reads or writes for the duration of the call. Concurrent calls on the same buffer are a
/// data race; the host serializes them.
#[no_mangle]
pub unsafe extern "C" fn mt19937_advance(state: *mut u32, len: usize) -> i32 {
    if state.is_null() {
        debug!("null state pointer");
        return MT19937_NULL_STATE;
    }
    if len != STATE_LEN {
        debug!(len, expected = STATE_LEN, "rejecting state buffer");
        return MT19937_INVALID_STATE_LENGTH;
    }

    // SAFETY: non-null and exactly STATE_LEN words per the contract above
    let state = unsafe { &mut *state.cast::<[u32; STATE_LEN]>() };
    advance_state(state);
    MT19937_OK
}
