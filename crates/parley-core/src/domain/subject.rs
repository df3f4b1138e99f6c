//! The actor whose state conditions read and effects mutate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two alignment counters a subject carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Good deeds.
    Chivalry,
    /// Evil deeds.
    Darkness,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chivalry => write!(f, "Chivalry"),
            Self::Darkness => write!(f, "Darkness"),
        }
    }
}

/// Attributes and mutators of the active subject (typically the player).
pub trait Subject {
    /// The name shown to other characters.
    fn display_name(&self) -> &str;
    /// The subject's legal, internal name.
    fn real_name(&self) -> &str;
    /// Character level.
    fn level(&self) -> i64;
    /// Character class name.
    fn class(&self) -> &str;
    /// Character race name.
    fn race(&self) -> &str;
    /// Gold carried.
    fn gold(&self) -> i64;
    /// Accumulated experience.
    fn experience(&self) -> i64;
    /// Current hit points.
    fn hp(&self) -> i64;
    /// Maximum hit points.
    fn max_hp(&self) -> i64;
    /// Current value of one alignment counter.
    fn alignment(&self, side: Alignment) -> i64;
    /// Lifetime number of deeds recorded on one alignment side.
    fn deeds(&self, side: Alignment) -> u32;
    /// Whether the subject carries an item.
    fn has_item(&self, item: &str) -> bool;

    /// Add `amount` (possibly negative) to an alignment counter.
    fn adjust_alignment(&mut self, side: Alignment, amount: i64);
    /// Count one more deed on an alignment side.
    fn record_deed(&mut self, side: Alignment);
    /// Add `amount` (possibly negative) gold.
    fn adjust_gold(&mut self, amount: i64);
    /// Add `amount` experience.
    fn adjust_experience(&mut self, amount: i64);
    /// Overwrite current hit points. Callers clamp.
    fn set_hp(&mut self, hp: i64);
    /// Put an item into the subject's inventory.
    fn give_item(&mut self, item: &str);

    /// Chivalry minus darkness.
    fn net_alignment(&self) -> i64 {
        self.alignment(Alignment::Chivalry)
            .saturating_sub(self.alignment(Alignment::Darkness))
    }
}

/// An in-memory player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Legal name.
    pub real_name: String,
    /// Character level.
    pub level: i64,
    /// Class name.
    pub class: String,
    /// Race name.
    pub race: String,
    /// Gold carried.
    pub gold: i64,
    /// Experience points.
    pub experience: i64,
    /// Current hit points.
    pub hp: i64,
    /// Maximum hit points.
    pub max_hp: i64,
    /// Chivalry counter.
    pub chivalry: i64,
    /// Darkness counter.
    pub darkness: i64,
    /// Lifetime chivalry deeds.
    pub chivalry_deeds: u32,
    /// Lifetime darkness deeds.
    pub darkness_deeds: u32,
    /// Items carried, in the order received.
    pub inventory: Vec<String>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: "Wanderer".to_string(),
            real_name: "Wanderer".to_string(),
            level: 1,
            class: "Warrior".to_string(),
            race: "Human".to_string(),
            gold: 0,
            experience: 0,
            hp: 100,
            max_hp: 100,
            chivalry: 0,
            darkness: 0,
            chivalry_deeds: 0,
            darkness_deeds: 0,
            inventory: Vec::new(),
        }
    }
}

impl Player {
    /// Create a level 1 player with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            real_name: name.clone(),
            name,
            ..Self::default()
        }
    }

    /// Set the level.
    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    /// Set the class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set the race.
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    /// Set the gold carried.
    pub fn with_gold(mut self, gold: i64) -> Self {
        self.gold = gold;
        self
    }
}

impl Subject for Player {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn real_name(&self) -> &str {
        &self.real_name
    }

    fn level(&self) -> i64 {
        self.level
    }

    fn class(&self) -> &str {
        &self.class
    }

    fn race(&self) -> &str {
        &self.race
    }

    fn gold(&self) -> i64 {
        self.gold
    }

    fn experience(&self) -> i64 {
        self.experience
    }

    fn hp(&self) -> i64 {
        self.hp
    }

    fn max_hp(&self) -> i64 {
        self.max_hp
    }

    fn alignment(&self, side: Alignment) -> i64 {
        match side {
            Alignment::Chivalry => self.chivalry,
            Alignment::Darkness => self.darkness,
        }
    }

    fn deeds(&self, side: Alignment) -> u32 {
        match side {
            Alignment::Chivalry => self.chivalry_deeds,
            Alignment::Darkness => self.darkness_deeds,
        }
    }

    fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    fn adjust_alignment(&mut self, side: Alignment, amount: i64) {
        match side {
            Alignment::Chivalry => self.chivalry = self.chivalry.saturating_add(amount),
            Alignment::Darkness => self.darkness = self.darkness.saturating_add(amount),
        }
    }

    fn record_deed(&mut self, side: Alignment) {
        match side {
            Alignment::Chivalry => self.chivalry_deeds = self.chivalry_deeds.saturating_add(1),
            Alignment::Darkness => self.darkness_deeds = self.darkness_deeds.saturating_add(1),
        }
    }

    fn adjust_gold(&mut self, amount: i64) {
        self.gold = self.gold.saturating_add(amount);
    }

    fn adjust_experience(&mut self, amount: i64) {
        self.experience = self.experience.saturating_add(amount);
    }

    fn set_hp(&mut self, hp: i64) {
        self.hp = hp;
    }

    fn give_item(&mut self, item: &str) {
        self.inventory.push(item.to_string());
    }
}
