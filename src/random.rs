//! Wrappers for the engine's two pseudo-random number generators.
//!
//! Both are instance-independent utility entry points of the native library;
//! neither touches an engine handle.

use std::ptr;

use csnd_sys as raw;
use libc::c_int;

/// Simple linear congruential generator: `seed = seed * 742938285 % 2147483647`.
///
/// The seed is advanced in place on every call, so feeding the same starting
/// seed replays the same sequence.
/// # Returns
/// The next value in the range 1 to 2147483646, or an error if the seed is
/// outside that range.
pub fn rand31(seed: &mut i32) -> Result<i32, &'static str> {
    match *seed {
        1..=2_147_483_646 => {
            let ptr: *mut i32 = seed;
            Ok(unsafe { raw::csoundRand31(ptr as *mut c_int) as i32 })
        }
        _ => Err("invalid seed value"),
    }
}

/// Mersenne Twister (MT19937) generator state.
///
/// The native state record is caller-allocated: the seeding call fills a
/// struct the host provides and the library keeps no reference to it, so the
/// state is plain owned data and is released by `Drop` like any other value.
pub struct RandMT {
    state: raw::CsoundRandMTState,
}

impl RandMT {
    /// Seeds the generator from a key sequence.
    /// An empty key falls back to the scalar seeding path with the
    /// generator's default seed.
    pub fn from_key(key: &[u32]) -> RandMT {
        if key.is_empty() {
            return RandMT::from_seed(5489);
        }
        let mut state = raw::CsoundRandMTState::default();
        unsafe {
            raw::csoundSeedRandMT(&mut state, key.as_ptr(), key.len() as u32);
        }
        RandMT { state }
    }

    /// Seeds the generator from a single scalar value.
    pub fn from_seed(seed: u32) -> RandMT {
        let mut state = raw::CsoundRandMTState::default();
        unsafe {
            raw::csoundSeedRandMT(&mut state, ptr::null(), seed);
        }
        RandMT { state }
    }

    /// Advances the state and returns the next value in the sequence.
    pub fn next_u32(&mut self) -> u32 {
        unsafe { raw::csoundRandMT(&mut self.state) }
    }
}

impl Iterator for RandMT {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
