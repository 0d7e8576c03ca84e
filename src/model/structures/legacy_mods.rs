use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Legacy modifier bits. Only decoded for display; the performance engine
/// receives the raw bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[repr(u32)]
pub enum LegacyMod {
    NoFail = 1 << 0,
    Easy = 1 << 1,
    TouchDevice = 1 << 2,
    Hidden = 1 << 3,
    HardRock = 1 << 4,
    SuddenDeath = 1 << 5,
    DoubleTime = 1 << 6,
    Relax = 1 << 7,
    HalfTime = 1 << 8,
    Nightcore = 1 << 9,
    Flashlight = 1 << 10,
    Autoplay = 1 << 11,
    SpunOut = 1 << 12,
    Autopilot = 1 << 13,
    Perfect = 1 << 14,
    Key4 = 1 << 15,
    Key5 = 1 << 16,
    Key6 = 1 << 17,
    Key7 = 1 << 18,
    Key8 = 1 << 19,
    FadeIn = 1 << 20,
    Random = 1 << 21,
    Cinema = 1 << 22,
    Target = 1 << 23,
    Key9 = 1 << 24,
    KeyCoop = 1 << 25,
    Key1 = 1 << 26,
    Key3 = 1 << 27,
    Key2 = 1 << 28,
    ScoreV2 = 1 << 29,
    Mirror = 1 << 30
}

impl LegacyMod {
    pub fn bit(&self) -> u32 {
        *self as u32
    }

    pub fn acronym(&self) -> &'static str {
        match self {
            LegacyMod::NoFail => "NF",
            LegacyMod::Easy => "EZ",
            LegacyMod::TouchDevice => "TD",
            LegacyMod::Hidden => "HD",
            LegacyMod::HardRock => "HR",
            LegacyMod::SuddenDeath => "SD",
            LegacyMod::DoubleTime => "DT",
            LegacyMod::Relax => "RX",
            LegacyMod::HalfTime => "HT",
            LegacyMod::Nightcore => "NC",
            LegacyMod::Flashlight => "FL",
            LegacyMod::Autoplay => "AT",
            LegacyMod::SpunOut => "SO",
            LegacyMod::Autopilot => "AP",
            LegacyMod::Perfect => "PF",
            LegacyMod::Key4 => "4K",
            LegacyMod::Key5 => "5K",
            LegacyMod::Key6 => "6K",
            LegacyMod::Key7 => "7K",
            LegacyMod::Key8 => "8K",
            LegacyMod::FadeIn => "FI",
            LegacyMod::Random => "RD",
            LegacyMod::Cinema => "CN",
            LegacyMod::Target => "TP",
            LegacyMod::Key9 => "9K",
            LegacyMod::KeyCoop => "DS",
            LegacyMod::Key1 => "1K",
            LegacyMod::Key3 => "3K",
            LegacyMod::Key2 => "2K",
            LegacyMod::ScoreV2 => "SV2",
            LegacyMod::Mirror => "MR"
        }
    }
}

/// Decodes the set bits into mods. Nightcore and Perfect are stored alongside
/// the bits they imply (DoubleTime, SuddenDeath); the implied mod is dropped.
pub fn decode(bits: u32) -> Vec<LegacyMod> {
    let has = |m: LegacyMod| bits & m.bit() != 0;

    LegacyMod::iter()
        .filter(|m| has(*m))
        .filter(|m| match m {
            LegacyMod::DoubleTime => !has(LegacyMod::Nightcore),
            LegacyMod::SuddenDeath => !has(LegacyMod::Perfect),
            _ => true
        })
        .collect()
}

/// Display string for a set of legacy mods, e.g. `"HD, DT"`, or `"None"`.
pub fn summary(bits: u32) -> String {
    let mods = decode(bits);

    if mods.is_empty() {
        return "None".to_string();
    }

    mods.iter().map(|m| m.acronym()).join(", ")
}
