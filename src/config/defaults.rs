use crate::config::toml_config::SectionConfig;

const DEFAULT_REFERENCE_LEVEL: i64 = 4;

/// (key, name, skills)
const DEFAULT_SECTIONS: &[(&str, &str, &str)] = &[
    (
        "tanking",
        "Tanking",
        "EM Armor Compensation\nKinetic Armor Compensation\nExplosive Armor Compensation\n\
         Thermal Armor Compensation\nHull Upgrades\nArmor Rigging\nKinetic Shield Compensation\n\
         EM Shield Compensation\nThermal Shield Compensation\nExplosive Shield Compensation\n\
         Shield Management\nShield Rigging",
    ),
    (
        "guns",
        "Guns",
        "Large Energy Turret\nLarge Projectile Turret\nMedium Energy Turret\n\
         Medium Projectile Turret\nSmall Energy Turret\nSmall Projectile Turret\n\
         Large Hybrid Turret\nMedium Hybrid Turret\nSmall Hybrid Turret\n\
         Large Precursor Weapon\nSmall Precursor Weapon",
    ),
    (
        "gun_specs",
        "Gun Specs",
        "Large Beam Laser Specialization\nMedium Beam Laser Specialization\n\
         Small Beam Laser Specialization\nLarge Artillery Specialization\n\
         Large Pulse Laser Specialization\nMedium Artillery Specialization\n\
         Medium Blaster Specialization\nMedium Pulse Laser Specialization\n\
         Small Artillery Specialization\nSmall Blaster Specialization\n\
         Small Pulse Laser Specialization\nLarge Autocannon Specialization\n\
         Large Disintegrator Specialization\nMedium Autocannon Specialization\n\
         Medium Disintegrator Specialization\nMedium Railgun Specialization\n\
         Small Autocannon Specialization\nSmall Disintegrator Specialization",
    ),
    (
        "missiles",
        "Missiles",
        "Cruise Missiles\nHeavy Missiles\nHeavy Assault Missiles\nLight Missiles\nRockets\nTorpedoes",
    ),
    (
        "missile_specs",
        "Missile Specs",
        "Heavy Assault Missile Specialization\nLight Missile Specialization\n\
         Torpedo Specialization\nCruise Missile Specialization\nHeavy Missile Specialization\n\
         Missile Projection\nMissile Bombardment\nRapid Launch\n\
         Target Navigation Prediction\nWarhead Upgrades\nGuided Missile Precision",
    ),
    (
        "ships",
        "Ships",
        "Command Ships\nAmarr Battlecruiser\nMinmatar Battlecruiser\nCaldari Battlecruiser\n\
         Gallente Battlecruiser\nPrecursor Battlecruiser\nThermodynamics\n\
         Remote Armor Repair Systems\nCapacitor Management\nAmarr Battleship",
    ),
    (
        "sensorics",
        "Sensorics",
        "Magnetometric Sensor Compensation\nLadar Sensor Compensation\n\
         Radar Sensor Compensation\nGravimetric Sensor Compensation",
    ),
    (
        "navigation",
        "Navigation",
        "High speed Maneuvering\nAcceleration Control",
    ),
    (
        "subsystems",
        "Subsystems",
        "Amarr Core Systems\nAmarr Propulsion Systems\nAmarr Defensive Systems\n\
         Amarr Offensive Systems\nMinmatar Core Systems\nMinmatar Defensive Systems\n\
         Minmatar Offensive Systems\nMinmatar Propulsion Systems",
    ),
];

/// 設定檔沒有 `[[sections]]` 時使用的預設分組
pub fn default_sections() -> Vec<SectionConfig> {
    DEFAULT_SECTIONS
        .iter()
        .map(|(key, name, skills)| SectionConfig {
            key: Some(key.to_string()),
            name: name.to_string(),
            ref_level: DEFAULT_REFERENCE_LEVEL,
            skills: skills.to_string(),
        })
        .collect()
}
