use glam::{vec2, vec3, Vec2, Vec3};

#[cfg(not(target_arch = "spirv"))]
use serde::{Deserialize, Serialize};

use crate::pcg;

/// A per-invocation generator. Owns one 32-bit state word and never shares it.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    not(target_arch = "spirv"),
    derive(Debug, bytemuck::Pod, bytemuck::Zeroable, Deserialize, Serialize)
)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub const fn from_seed(seed: u32) -> Self {
        Self { state: pcg::pcg_hash(seed) }
    }

    /// Wraps an already hashed state, e.g. one read back from a buffer.
    pub const fn from_state(state: u32) -> Self {
        Self { state }
    }

    pub const fn state(&self) -> u32 {
        self.state
    }

    pub fn next(&mut self) -> u32 {
        pcg::rand_pcg(&mut self.state)
    }

    pub fn next_float(&mut self) -> f32 {
        pcg::rand(&mut self.state)
    }

    pub fn next_vec2(&mut self) -> Vec2 {
        let x = self.next_float();
        vec2(x, self.next_float())
    }

    pub fn next_vec3(&mut self) -> Vec3 {
        let xy = self.next_vec2();
        vec3(xy.x, xy.y, self.next_float())
    }
}

// A zeroed state is a fixed point of `next_float`.
impl Default for Rng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}
