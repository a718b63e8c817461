//! The PCG hash family from
//! <https://www.reedbeta.com/blog/hash-functions-for-gpu-rendering/>.
//!
//! All arithmetic wraps modulo 2^32.

pub const MULTIPLIER: u32 = 747_796_405;
pub const INCREMENT: u32 = 2_891_336_453;
pub const MIX_MULTIPLIER: u32 = 277_803_737;

/// Bit pattern of the `[0, 2^32) -> [0, 1)` scale, `2^-32 * (1 + 2^-21)`.
pub const UNIT_SCALE_BITS: u32 = 0x2f80_0004;
/// Bit pattern of the largest `f32` below one.
pub const UNIT_MAX_BITS: u32 = 0x3f7f_ffff;

/// One step of the underlying linear congruential generator.
#[inline]
pub const fn lcg_step(state: u32) -> u32 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
}

/// RXS-M-XS output permutation. A bijection on `u32` with `mix(0) == 0`.
#[inline]
pub const fn mix(state: u32) -> u32 {
    let word = ((state >> ((state >> 28) + 4)) ^ state).wrapping_mul(MIX_MULTIPLIER);
    (word >> 22) ^ word
}

/// Hashes a seed into an initial state.
#[inline]
pub const fn pcg_hash(seed: u32) -> u32 {
    mix(lcg_step(seed))
}

/// Advances `state` and returns the hash of its value before the step.
#[inline]
pub fn rand_pcg(state: &mut u32) -> u32 {
    let (next, output) = advance(*state);
    *state = next;
    output
}

/// Value form of [`rand_pcg`]: `(next_state, output)`.
#[inline]
pub const fn advance(state: u32) -> (u32, u32) {
    (lcg_step(state), mix(state))
}

/// Advances `state` and returns a float in `[0, 1)`.
///
/// The hashed output becomes the carried state, so repeated calls walk
/// `s -> mix(s)` rather than the LCG sequence.
#[inline]
pub fn rand(state: &mut u32) -> f32 {
    let x = rand_pcg(state);
    *state = x;
    to_unit_float(x)
}

/// Scales a raw word into `[0, 1)`.
///
/// Inputs from `0xffff_f780` upwards round to one or just above it under the
/// exact scale and are clamped to [`UNIT_MAX_BITS`].
#[inline]
pub fn to_unit_float(x: u32) -> f32 {
    (x as f32 * f32::from_bits(UNIT_SCALE_BITS)).min(f32::from_bits(UNIT_MAX_BITS))
}
