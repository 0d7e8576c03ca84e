pub mod legacy_mods;
pub mod play;
pub mod profile;
pub mod ruleset;
