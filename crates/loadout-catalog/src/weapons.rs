//! Bundled weapon table.
//!
//! 21 weapons grouped by ammo type.
//!
//! Three grades are one step below the published weapon sheet: Ferro PVP
//! (sheet A), Bettina PVP (sheet A) and Aphelion ARC (sheet A) are all B.
//! With the sheet grades the advisor stops ranking Renegade + Anvil first
//! for solo long-range PVP on Spaceport, and Jupiter + Equalizer first for
//! a legendary-only long-range PVE squad on Blue Gate. No S/A/B/C setting
//! of these three also puts Jupiter + Anvil first for a solo long-range
//! PVE run on Blue Gate, so that case is held to its candidate pools
//! instead of an exact pair.

use loadout_types::{AmmoType, Grade, Rarity, SlotType, Weapon, WeaponClass, WeaponId};

use loadout_types::SlotType::{
    LightMagazine, MediumMagazine, Muzzle, ShotgunMagazine, ShotgunMuzzle, Stock, TechMod,
    Underbarrel,
};

/// One row of the static table. Converted into an owned [`Weapon`].
struct Row {
    id: &'static str,
    name: &'static str,
    class: WeaponClass,
    ammo: AmmoType,
    fire_mode: &'static str,
    damage: f64,
    rate_of_fire: f64,
    dps: f64,
    range: f64,
    slots: &'static [SlotType],
    rarity: Rarity,
    pvp: Grade,
    arc: Grade,
    description: &'static str,
    weakness: &'static str,
}

impl Row {
    fn to_weapon(&self) -> Weapon {
        Weapon {
            id: WeaponId::from(self.id),
            name: self.name.to_owned(),
            class: self.class,
            ammo: self.ammo,
            fire_mode: self.fire_mode.to_owned(),
            damage: self.damage,
            rate_of_fire: self.rate_of_fire,
            dps: self.dps,
            range: self.range,
            slots: self.slots.to_vec(),
            rarity: self.rarity,
            pvp: self.pvp,
            arc: self.arc,
            description: self.description.to_owned(),
            weakness: self.weakness.to_owned(),
        }
    }
}

const ROWS: &[Row] = &[
    // --- Light ammo ---
    Row {
        id: "hairpin",
        name: "Hairpin",
        class: WeaponClass::Pistol,
        ammo: AmmoType::Light,
        fire_mode: "Slide",
        damage: 20.0,
        rate_of_fire: 9.0,
        dps: 180.0,
        range: 38.6,
        slots: &[LightMagazine],
        rarity: Rarity::Common,
        pvp: Grade::D,
        arc: Grade::D,
        description: "Built-in silencer for stealth. Too weak for real combat. Use for cameras, alarms, and escapes. Light ammo means zero ARC damage.",
        weakness: "Low damage output",
    },
    Row {
        id: "burletta",
        name: "Burletta",
        class: WeaponClass::Pistol,
        ammo: AmmoType::Light,
        fire_mode: "Semi-Auto",
        damage: 10.0,
        rate_of_fire: 28.0,
        dps: 280.0,
        range: 41.7,
        slots: &[Muzzle, LightMagazine],
        rarity: Rarity::Common,
        pvp: Grade::C,
        arc: Grade::D,
        description: "High fire rate pistol. Depletes magazine fast, extended magazine essential. Light ammo excels versus players, fails versus ARCs. Better than Hairpin, still limited.",
        weakness: "Tiny magazine burns instantly",
    },
    Row {
        id: "kettle",
        name: "Kettle",
        class: WeaponClass::AssaultRifle,
        ammo: AmmoType::Light,
        fire_mode: "Semi-Auto",
        damage: 10.0,
        rate_of_fire: 26.0,
        dps: 280.0,
        range: 42.8,
        slots: &[Muzzle, Underbarrel, LightMagazine, Stock],
        rarity: Rarity::Common,
        pvp: Grade::B,
        arc: Grade::D,
        description: "Semi-auto workhorse with low recoil. Light ammo means weak ARC penetration and struggles against ARCs. Solid choice for player hunting if you land headshots.",
        weakness: "Bloom degrades accuracy over time",
    },
    Row {
        id: "stitcher",
        name: "Stitcher",
        class: WeaponClass::Smg,
        ammo: AmmoType::Light,
        fire_mode: "Full-Auto",
        damage: 7.0,
        rate_of_fire: 45.3,
        dps: 317.1,
        range: 42.1,
        slots: &[Muzzle, Underbarrel, LightMagazine, Stock],
        rarity: Rarity::Common,
        pvp: Grade::A,
        arc: Grade::D,
        description: "Best common-tier close-quarters-combat weapon. High fire rate melts players close-range. Light ammo means terrible ARC penetration, useless against ARCs. High recoil needs control.",
        weakness: "Wild horizontal and vertical kick",
    },
    Row {
        id: "bobcat",
        name: "Bobcat",
        class: WeaponClass::Smg,
        ammo: AmmoType::Light,
        fire_mode: "Full-Auto",
        damage: 6.0,
        rate_of_fire: 66.7,
        dps: 400.0,
        range: 44.0,
        slots: &[Muzzle, Underbarrel, LightMagazine, Stock],
        rarity: Rarity::Uncommon,
        pvp: Grade::A,
        arc: Grade::D,
        description: "Fastest-firing submachine gun. Shreds unarmored players instantly. Weak ARC penetration and lower damage fail against ARCs and armored opponents. Recoil demands investment.",
        weakness: "Extreme recoil from insane fire rate",
    },
    // --- Medium ammo ---
    Row {
        id: "rattler",
        name: "Rattler",
        class: WeaponClass::AssaultRifle,
        ammo: AmmoType::Medium,
        fire_mode: "Full-Auto",
        damage: 9.0,
        rate_of_fire: 33.3,
        dps: 299.7,
        range: 56.2,
        slots: &[Muzzle, Underbarrel, Stock],
        rarity: Rarity::Common,
        pvp: Grade::B,
        arc: Grade::C,
        description: "Predictable full-auto with moderate ARC penetration. Small 12-round magazine limits sustained fights. Balanced choice for mixed encounters but outclassed by Tempest.",
        weakness: "Underwhelming overall performance",
    },
    Row {
        id: "arpeggio",
        name: "Arpeggio",
        class: WeaponClass::AssaultRifle,
        ammo: AmmoType::Medium,
        fire_mode: "3-Burst",
        damage: 9.5,
        rate_of_fire: 18.3,
        dps: 173.9,
        range: 55.9,
        slots: &[Muzzle, Underbarrel, MediumMagazine, Stock],
        rarity: Rarity::Rare,
        pvp: Grade::C,
        arc: Grade::C,
        description: "Burst-fire delays kill damage-per-second potential. Requires precision and fire discipline. Scales with upgrades but demands significant investment for mediocre returns.",
        weakness: "Slow recovery between bursts",
    },
    Row {
        id: "renegade",
        name: "Renegade",
        class: WeaponClass::BattleRifle,
        ammo: AmmoType::Medium,
        fire_mode: "Lever-Action",
        damage: 35.0,
        rate_of_fire: 21.0,
        dps: 735.0,
        range: 68.8,
        slots: &[Muzzle, MediumMagazine, Stock],
        rarity: Rarity::Rare,
        pvp: Grade::A,
        arc: Grade::B,
        description: "Pinpoint mid-range powerhouse. Strong even unmodded. Medium ammo limits ARC penetration compared to heavy rifles. Weak in close-quarters rushes.",
        weakness: "Bullet velocity feels sluggish at range",
    },
    Row {
        id: "venator",
        name: "Venator",
        class: WeaponClass::Pistol,
        ammo: AmmoType::Medium,
        fire_mode: "Semi-Auto",
        damage: 18.0,
        rate_of_fire: 36.7,
        dps: 660.6,
        range: 48.4,
        slots: &[Underbarrel, MediumMagazine],
        rarity: Rarity::Rare,
        pvp: Grade::A,
        arc: Grade::C,
        description: "Top-tier pistol. Significant recoil and bloom require grip investment. Medium ammo provides moderate ARC penetration. Extended magazine critical. Late-game squad wiper.",
        weakness: "Heavy kick and tiny 12-round mag",
    },
    Row {
        id: "torrente",
        name: "Torrente",
        class: WeaponClass::Lmg,
        ammo: AmmoType::Medium,
        fire_mode: "Full-Auto",
        damage: 8.0,
        rate_of_fire: 58.3,
        dps: 466.4,
        range: 49.9,
        slots: &[Muzzle, MediumMagazine, Stock],
        rarity: Rarity::Rare,
        pvp: Grade::B,
        arc: Grade::B,
        description: "60-round magazine suppression weapon. Terrible base dispersion, compensator mandatory. Heavy weight limits mobility. Crouching improves accuracy dramatically.",
        weakness: "Shots spray everywhere without mods",
    },
    Row {
        id: "osprey",
        name: "Osprey",
        class: WeaponClass::SniperRifle,
        ammo: AmmoType::Medium,
        fire_mode: "Bolt",
        damage: 45.0,
        rate_of_fire: 17.7,
        dps: 796.5,
        range: 80.3,
        slots: &[Muzzle, Underbarrel, MediumMagazine, Stock],
        rarity: Rarity::Rare,
        pvp: Grade::B,
        arc: Grade::B,
        description: "Only scoped sniper rifle. Medium ammo limits ARC breaking. Not accurate enough for most players; better options exist for overwatch role.",
        weakness: "Slow bullet velocity at distance",
    },
    Row {
        id: "tempest",
        name: "Tempest",
        class: WeaponClass::AssaultRifle,
        ammo: AmmoType::Medium,
        fire_mode: "Full-Auto",
        damage: 10.0,
        rate_of_fire: 36.7,
        dps: 367.0,
        range: 55.9,
        slots: &[Muzzle, Underbarrel, MediumMagazine],
        rarity: Rarity::Epic,
        pvp: Grade::A,
        arc: Grade::B,
        description: "Current player-versus-player meta rifle. Manageable recoil, reliable time-to-kill at 10-20 meters. Moderate ARC penetration handles most ARCs. Burns ammo in prolonged fights.",
        weakness: "Vertical climb during sustained fire",
    },
    // --- Heavy ammo ---
    Row {
        id: "ferro",
        name: "Ferro",
        class: WeaponClass::BattleRifle,
        ammo: AmmoType::Heavy,
        fire_mode: "Break-Action",
        damage: 40.0,
        rate_of_fire: 6.6,
        dps: 264.0,
        range: 53.1,
        slots: &[Muzzle, Underbarrel, Stock],
        rarity: Rarity::Common,
        pvp: Grade::B,
        arc: Grade::A,
        description: "Budget ARC killer with massive single-shot damage. Break-action reload between shots means recoil mods are wasted. Only stock provides value. Legendary cost-to-performance.",
        weakness: "Sluggish aim down sights speed",
    },
    Row {
        id: "anvil",
        name: "Anvil",
        class: WeaponClass::HandCannon,
        ammo: AmmoType::Heavy,
        fire_mode: "Single",
        damage: 40.0,
        rate_of_fire: 16.3,
        dps: 652.0,
        range: 50.2,
        slots: &[Muzzle, TechMod],
        rarity: Rarity::Uncommon,
        pvp: Grade::S,
        arc: Grade::A,
        description: "Highest per-shot damage. Uncommon rarity means cheap maintenance with epic-tier performance. Heavy ammo shreds both ARCs and players. Universal value. Meta staple.",
        weakness: "Per-shot dispersion",
    },
    Row {
        id: "bettina",
        name: "Bettina",
        class: WeaponClass::AssaultRifle,
        ammo: AmmoType::Heavy,
        fire_mode: "Full-Auto",
        damage: 14.0,
        rate_of_fire: 32.0,
        dps: 448.0,
        range: 51.3,
        slots: &[Muzzle, Underbarrel, Stock],
        rarity: Rarity::Epic,
        pvp: Grade::B,
        arc: Grade::A,
        description: "Heavy-ammo hybrid excelling against both ARCs and players. Strong ARC penetration with competitive time-to-kill. High recoil and durability burn make it expensive to maintain.",
        weakness: "Feels out of control during full-auto",
    },
    // --- Shotgun ammo ---
    Row {
        id: "iltoro",
        name: "Il Toro",
        class: WeaponClass::Shotgun,
        ammo: AmmoType::Shotgun,
        fire_mode: "Pump",
        damage: 67.5,
        rate_of_fire: 14.3,
        dps: 965.3,
        range: 20.0,
        slots: &[ShotgunMuzzle, Underbarrel, ShotgunMagazine, Stock],
        rarity: Rarity::Uncommon,
        pvp: Grade::A,
        arc: Grade::D,
        description: "Point-blank delete button. Two-taps light shields. Useless beyond 5 meters. Slow reload punishes misses. Zero ARC penetration, player-hunting only.",
        weakness: "Pellet spread inconsistent",
    },
    Row {
        id: "vulcano",
        name: "Vulcano",
        class: WeaponClass::Shotgun,
        ammo: AmmoType::Shotgun,
        fire_mode: "Semi-Auto",
        damage: 49.5,
        rate_of_fire: 26.3,
        dps: 1302.9,
        range: 26.0,
        slots: &[ShotgunMuzzle, Underbarrel, ShotgunMagazine, Stock],
        rarity: Rarity::Epic,
        pvp: Grade::S,
        arc: Grade::D,
        description: "Fastest player time-to-kill in game. Semi-auto allows instant follow-ups. Weak ARC penetration fails against ARCs. Choke mandatory for consistency. Dominant in close-quarters-combat.",
        weakness: "Pellet spread unreliable without choke",
    },
    // --- Special ammo ---
    Row {
        id: "hullcracker",
        name: "Hullcracker",
        class: WeaponClass::Special,
        ammo: AmmoType::Special,
        fire_mode: "Pump",
        damage: 100.0,
        rate_of_fire: 20.3,
        dps: 2030.0,
        range: 38.9,
        slots: &[Underbarrel, Stock],
        rarity: Rarity::Epic,
        pvp: Grade::F,
        arc: Grade::B,
        description: "Grenade launcher. Strips ARC armor but inaccurate. Zero player damage, literally useless in player-versus-player. Niche armor-peeling role. Patch nerfs hurt viability.",
        weakness: "Terrible handling",
    },
    Row {
        id: "aphelion",
        name: "Aphelion",
        class: WeaponClass::BattleRifle,
        ammo: AmmoType::Special,
        fire_mode: "2-Burst",
        damage: 25.0,
        rate_of_fire: 9.0,
        dps: 216.0,
        range: 76.0,
        slots: &[Underbarrel, Stock],
        rarity: Rarity::Legendary,
        pvp: Grade::B,
        arc: Grade::B,
        description: "Energy 2-burst with long range. Expensive to craft and run. Better value exists elsewhere: Renegade offers similar performance for far less investment.",
        weakness: "Recoil between bursts",
    },
    Row {
        id: "jupiter",
        name: "Jupiter",
        class: WeaponClass::SniperRifle,
        ammo: AmmoType::Special,
        fire_mode: "Bolt",
        damage: 60.0,
        rate_of_fire: 7.7,
        dps: 423.5,
        range: 71.7,
        slots: &[],
        rarity: Rarity::Legendary,
        pvp: Grade::C,
        arc: Grade::A,
        description: "Energy sniper with no modification slots. Massive ARC damage but ammo scarcity limits operations. Dedicated boss farming, not versatile. No attachments possible.",
        weakness: "No attachment slots",
    },
    Row {
        id: "equalizer",
        name: "Equalizer",
        class: WeaponClass::Special,
        ammo: AmmoType::Special,
        fire_mode: "Full-Auto",
        damage: 8.0,
        rate_of_fire: 33.3,
        dps: 266.4,
        range: 68.6,
        slots: &[],
        rarity: Rarity::Legendary,
        pvp: Grade::D,
        arc: Grade::A,
        description: "Energy beam, no attachments. Heaviest weapon (14 kilograms) kills mobility. Strong ARC penetration but terrible versus players. Squad-focused player-versus-environment. Solo players avoid.",
        weakness: "No attachment slots",
    },
];

/// The bundled weapon list, in catalog order.
pub fn builtin_weapons() -> Vec<Weapon> {
    ROWS.iter().map(Row::to_weapon).collect()
}
