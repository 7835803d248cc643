//! Hitsplat type-code resolution.
//!
//! The game tags every on-screen damage/status indicator with a small
//! integer type code. The table below covers the codes the client emits
//! today; anything else resolves to a synthesized `Unknown_<code>` label
//! so new client codes surface in logs without breaking anything.

/// Known hitsplat type codes and their canonical names.
static HITSPLAT_NAMES: phf::Map<i32, &'static str> = phf::phf_map! {
    2_i32 => "POISON",
    4_i32 => "DISEASE",
    5_i32 => "VENOM",
    6_i32 => "HEAL",
    12_i32 => "BLOCK_ME",
    13_i32 => "BLOCK_OTHER",
    16_i32 => "DAMAGE_ME",
    17_i32 => "DAMAGE_OTHER",
    18_i32 => "DAMAGE_ME_CYAN",
    19_i32 => "DAMAGE_OTHER_CYAN",
    20_i32 => "DAMAGE_ME_ORANGE",
    21_i32 => "DAMAGE_OTHER_ORANGE",
    22_i32 => "DAMAGE_ME_YELLOW",
    23_i32 => "DAMAGE_OTHER_YELLOW",
    24_i32 => "DAMAGE_ME_WHITE",
    25_i32 => "DAMAGE_OTHER_WHITE",
    43_i32 => "DAMAGE_MAX_ME",
    44_i32 => "DAMAGE_MAX_ME_CYAN",
    45_i32 => "DAMAGE_MAX_ME_ORANGE",
    46_i32 => "DAMAGE_MAX_ME_YELLOW",
    47_i32 => "DAMAGE_MAX_ME_WHITE",
};

/// Resolve a hitsplat type code to its display name.
///
/// Total over all inputs: unregistered codes (including zero and
/// negatives) yield `Unknown_<code>` rather than an error.
pub fn hitsplat_name(code: i32) -> String {
    match HITSPLAT_NAMES.get(&code) {
        Some(name) => (*name).to_string(),
        None => format!("Unknown_{}", code),
    }
}
