//! PCG hash random numbers for per-invocation GPU work.
//!
//! Every invocation (pixel, particle, ray) seeds its own 32-bit state with
//! [`pcg_hash`] and advances it privately with [`rand_pcg`] or [`rand`].
//! Nothing is shared between invocations and nothing allocates, so the same
//! code runs on the host and inside SPIR-V shaders.
#![cfg_attr(target_arch = "spirv", no_std)]

#[cfg(not(target_arch = "spirv"))]
pub mod glsl;
pub mod pcg;
mod state;

pub use pcg::{advance, pcg_hash, rand, rand_pcg};
pub use state::Rng;
