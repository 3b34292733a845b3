use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest and highest value any skill rating can take.
pub const SKILL_MIN: u8 = 1;
pub const SKILL_MAX: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    CB,
    S,
    K,
    P,
}

impl Position {
    pub const ALL: [Position; 11] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::OL,
        Position::DL,
        Position::LB,
        Position::CB,
        Position::S,
        Position::K,
        Position::P,
    ];

    /// Typical number of players carried at this position on a 53-man roster.
    pub fn roster_slots(&self) -> usize {
        match self {
            Position::QB => 3,
            Position::RB => 4,
            Position::WR => 6,
            Position::TE => 3,
            Position::OL => 9,
            Position::DL => 9,
            Position::LB => 7,
            Position::CB => 6,
            Position::S => 4,
            Position::K => 1,
            Position::P => 1,
        }
    }

    pub fn is_specialist(&self) -> bool {
        matches!(self, Position::K | Position::P)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Speed,
    Strength,
    Agility,
    Awareness,
    Technique,
    Stamina,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Speed,
        Skill::Strength,
        Skill::Agility,
        Skill::Awareness,
        Skill::Technique,
        Skill::Stamina,
    ];

    /// Physical skills peak early and erode first with age.
    pub fn is_physical(&self) -> bool {
        matches!(self, Skill::Speed | Skill::Strength | Skill::Agility | Skill::Stamina)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InjuryStatus {
    #[default]
    Healthy,
    Injured { description: String, weeks_out: u8 },
}

impl InjuryStatus {
    pub fn healthy() -> Self {
        InjuryStatus::Healthy
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, InjuryStatus::Healthy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub age: u8,
    pub experience: u8,
    /// 0 = fully rested
    pub fatigue: u8,
    /// 0..=100
    pub morale: u8,
    #[serde(default)]
    pub injury: InjuryStatus,
    pub potential: u8,
    pub skills: BTreeMap<Skill, u8>,
    /// `None` means free agent
    #[serde(default)]
    pub contract_id: Option<String>,
}

impl Player {
    /// Mean of all skill ratings, rounded.
    pub fn overall(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.values().map(|&v| v as u32).sum();
        ((total as f32) / (self.skills.len() as f32)).round() as u8
    }

    pub fn skill(&self, skill: Skill) -> u8 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    pub fn is_free_agent(&self) -> bool {
        self.contract_id.is_none()
    }
}
