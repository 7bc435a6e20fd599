//! Leveling guide
//!
//! Recommended rune level ranges for the main areas, in the order a
//! character usually visits them.

use serde::Serialize;

/// Area of the map with its recommended level range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub min_level: i64,
    pub max_level: i64,
    /// Recommended regular weapon upgrade (+N)
    pub upgrade_level: u8,
    pub description: &'static str,
    pub bosses: &'static [&'static str],
}

/// All zones in progression order
pub const ZONES: &[Zone] = &[
    Zone {
        id: "limgrave-west",
        name: "Limgrave (West)",
        min_level: 1,
        max_level: 15,
        upgrade_level: 1,
        description: "The starting area. Lush fields, roaming trolls, and the first step of the journey.",
        bosses: &[
            "Tree Sentinel",
            "Beastman of Farum Azula",
            "Margit the Fell Omen (Stormveil Gate)",
        ],
    },
    Zone {
        id: "limgrave-east",
        name: "Limgrave (East) & Mistwood",
        min_level: 10,
        max_level: 20,
        upgrade_level: 2,
        description: "The dense forests to the east. Beware the giant bears.",
        bosses: &["Runebear", "Bloodhound Knight Darriwil"],
    },
    Zone {
        id: "weeping-peninsula",
        name: "Weeping Peninsula",
        min_level: 20,
        max_level: 30,
        upgrade_level: 3,
        description: "South of Limgrave. A rainy, melancholic land with a large castle at the tip.",
        bosses: &["Leonine Misbegotten", "Erdtree Avatar"],
    },
    Zone {
        id: "stormveil-castle",
        name: "Stormveil Castle",
        min_level: 30,
        max_level: 40,
        upgrade_level: 4,
        description: "The first major legacy dungeon. Home of Godrick the Grafted.",
        bosses: &["Margit, the Fell Omen", "Godrick the Grafted"],
    },
    Zone {
        id: "liurnia-south",
        name: "Liurnia of the Lakes (South)",
        min_level: 40,
        max_level: 50,
        upgrade_level: 6,
        description: "A sinking land of magic and scholars. Enter after defeating Godrick.",
        bosses: &["Glintstone Dragon Smarag", "Adan, Thief of Fire"],
    },
    Zone {
        id: "raya-lucaria",
        name: "Academy of Raya Lucaria",
        min_level: 50,
        max_level: 60,
        upgrade_level: 8,
        description: "The great school of sorcery. Requires a Glintstone Key to enter.",
        bosses: &["Red Wolf of Radagon", "Rennala, Queen of the Full Moon"],
    },
    Zone {
        id: "caelid-south",
        name: "Caelid (South)",
        min_level: 60,
        max_level: 70,
        upgrade_level: 10,
        description: "A rot-infested hellscape. Best left until later.",
        bosses: &["Commander O'Neil", "Starscourge Radahn (Festival)"],
    },
    Zone {
        id: "altus-plateau",
        name: "Altus Plateau",
        min_level: 60,
        max_level: 80,
        upgrade_level: 12,
        description: "The golden plains leading to the capital. Accessible via the Lift of Dectus.",
        bosses: &["Elemer of the Briar", "Ancient Dragon Lansseax"],
    },
    Zone {
        id: "leyndell",
        name: "Leyndell, Royal Capital",
        min_level: 80,
        max_level: 100,
        upgrade_level: 15,
        description: "The seat of the Erdtree. A massive maze of holy knights and secrets.",
        bosses: &["Godfrey, First Elden Lord (Shade)", "Morgott, the Omen King"],
    },
    Zone {
        id: "mountaintops",
        name: "Mountaintops of the Giants",
        min_level: 100,
        max_level: 120,
        upgrade_level: 20,
        description: "The frozen peaks. Only accessible after defeating Morgott.",
        bosses: &["Fire Giant", "Commander Niall"],
    },
    Zone {
        id: "farum-azula",
        name: "Crumbling Farum Azula",
        min_level: 120,
        max_level: 150,
        upgrade_level: 24,
        description: "A city suspended in time and storm. The beginning of the end.",
        bosses: &["Godskin Duo", "Maliketh, the Black Blade"],
    },
];

/// Levels below a zone's minimum that still count as on level
pub const UNDER_LEVEL_MARGIN: i64 = 5;
/// Levels above a zone's maximum that still count as on level
pub const OVER_LEVEL_MARGIN: i64 = 10;

/// How a character's level compares to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    UnderLeveled,
    OnLevel,
    OverLeveled,
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnderLeveled => write!(f, "under-leveled"),
            Self::OnLevel => write!(f, "on level"),
            Self::OverLeveled => write!(f, "over-leveled"),
        }
    }
}

/// Get zone by id
pub fn zone_by_id(id: &str) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.id == id)
}

pub fn zone_status(zone: &Zone, level: i64) -> ZoneStatus {
    if level < zone.min_level - UNDER_LEVEL_MARGIN {
        ZoneStatus::UnderLeveled
    } else if level > zone.max_level + OVER_LEVEL_MARGIN {
        ZoneStatus::OverLeveled
    } else {
        ZoneStatus::OnLevel
    }
}

/// Zones to show for a level, with their status.
///
/// Unless `show_all` is set, over-leveled zones are hidden when they sit
/// more than one place before the first zone the character has not yet
/// reached the minimum level for, so a little finished content stays
/// visible for context.
pub fn recommend(level: i64, show_all: bool) -> Vec<(&'static Zone, ZoneStatus)> {
    // position of the first zone above the character, -1 when past them all
    let next_zone = ZONES
        .iter()
        .position(|z| z.min_level > level)
        .map_or(-1, |i| i as i64);

    ZONES
        .iter()
        .enumerate()
        .map(|(i, zone)| (i as i64, zone, zone_status(zone, level)))
        .filter(|&(i, _, status)| {
            show_all || status != ZoneStatus::OverLeveled || i >= next_zone - 1
        })
        .map(|(_, zone, status)| (zone, status))
        .collect()
}
