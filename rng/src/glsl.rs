//! GLSL versions of the generator for shaders that are not written in Rust.

use glsl::{uint_hex_literal, uint_literal, GlslFunction, GlslParam};

use crate::pcg::{INCREMENT, MIX_MULTIPLIER, MULTIPLIER, UNIT_MAX_BITS, UNIT_SCALE_BITS};

const BANNER: &str = "// AUTO-GENERATED: do not edit\n\n";

fn lcg_step(var: &str) -> String {
    format!("{var} * {} + {}", uint_literal(MULTIPLIER), uint_literal(INCREMENT))
}

fn mix_lines(var: &str) -> [String; 2] {
    [
        format!(
            "uint word = (({var} >> (({var} >> 28u) + 4u)) ^ {var}) * {};",
            uint_literal(MIX_MULTIPLIER)
        ),
        String::from("return (word >> 22u) ^ word;"),
    ]
}

pub fn pcg_functions() -> [GlslFunction; 3] {
    let [hash_word, hash_return] = mix_lines("state");
    let pcg_hash = GlslFunction::new::<u32>("pcg_hash")
        .comment("Used as initial seed to the PRNG.")
        .param(GlslParam::new::<u32>("seed"))
        .line(format!("uint state = {};", lcg_step("seed")))
        .line(hash_word)
        .line(hash_return);

    let [advance_word, advance_return] = mix_lines("state");
    let rand_pcg = GlslFunction::new::<u32>("rand_pcg")
        .comment("Advances the PCG state and returns the hash of its previous value.")
        .param(GlslParam::inout::<u32>("rng_state"))
        .line("uint state = rng_state;")
        .line(format!("rng_state = {};", lcg_step("rng_state")))
        .line(advance_word)
        .line(advance_return);

    let rand = GlslFunction::new::<f32>("rand")
        .comment("Advances the PRNG state and returns the corresponding float in [0, 1).")
        .param(GlslParam::inout::<u32>("state"))
        .line("uint x = rand_pcg(state);")
        .line("state = x;")
        .line(format!(
            "return min(float(x) * uintBitsToFloat({}), uintBitsToFloat({}));",
            uint_hex_literal(UNIT_SCALE_BITS),
            uint_hex_literal(UNIT_MAX_BITS)
        ));

    [pcg_hash, rand_pcg, rand]
}

pub fn header() -> String {
    let definitions = pcg_functions()
        .iter()
        .map(GlslFunction::glsl_function_definition)
        .collect::<Vec<_>>();
    String::from(BANNER) + &definitions.join("\n")
}
