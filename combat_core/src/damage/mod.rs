//! Damage system - per-attack resolution and scale suppression

mod calculation;
mod scale;

pub use calculation::{
    calculate_damage, calculate_damage_with_rng, BASE_CRIT_CHANCE, CRIT_MULTIPLIER,
    ENERGY_VS_SHIELDS, STATUS_EFFECT_CHANCE, VOID_DEFENSE_FACTOR,
};
pub use scale::scale_multiplier;
