//! Built-in geographic datasets: intelligence hotspots, shipping
//! chokepoints, conflict zones, cyber threat regions, military bases,
//! nuclear facilities, undersea cable routes, sanction tiers, and the
//! regions used for news-density estimation.
//!
//! These are curated seed data, compiled in. Coordinates are approximate
//! label positions, not survey-grade.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::store::Theme;

/// Fixed geopolitical location of intelligence interest.
#[derive(Debug, Clone)]
pub struct Hotspot {
    pub id: &'static str,
    pub name: &'static str,
    pub subtext: &'static str,
    pub coord: Coordinate,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub agencies: &'static [&'static str],
    pub status: &'static str,
}

/// Strategic shipping/logistics constriction point.
#[derive(Debug, Clone)]
pub struct Chokepoint {
    pub id: &'static str,
    pub name: &'static str,
    pub coord: Coordinate,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub traffic: &'static str,
    pub region: &'static str,
    /// Physical metadata; only some chokepoints carry the full sheet.
    pub dimensions: Option<&'static str>,
    pub controlled_by: Option<&'static str>,
    pub cargo: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Polygon-bounded active-conflict region with narrative metadata.
#[derive(Debug, Clone)]
pub struct ConflictZone {
    pub id: &'static str,
    pub name: &'static str,
    pub intensity: Intensity,
    /// Closed ring of (lon, lat) vertices.
    pub ring: &'static [(f64, f64)],
    pub label: Coordinate,
    pub keywords: &'static [&'static str],
    pub start_date: &'static str,
    pub parties: &'static [&'static str],
    pub casualties: &'static str,
    pub displaced: &'static str,
    pub description: &'static str,
    pub key_events: &'static [&'static str],
}

/// State-linked cyber threat region.
#[derive(Debug, Clone)]
pub struct CyberRegion {
    pub id: &'static str,
    pub code: &'static str,
    pub country: &'static str,
    pub coord: Coordinate,
    pub group: &'static str,
    pub aliases: &'static str,
    pub sponsor: &'static str,
    pub description: &'static str,
    pub targets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseAffiliation {
    UsNato,
    China,
    Russia,
}

#[derive(Debug, Clone)]
pub struct MilitaryBase {
    pub id: &'static str,
    pub name: &'static str,
    pub coord: Coordinate,
    pub affiliation: BaseAffiliation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NuclearKind {
    Plant,
    Enrichment,
    Weapons,
    Reprocessing,
}

impl NuclearKind {
    /// Weapons-relevant sites get the hazard styling on the map.
    pub fn is_weapons_related(self) -> bool {
        matches!(self, NuclearKind::Weapons | NuclearKind::Enrichment)
    }
}

#[derive(Debug, Clone)]
pub struct NuclearFacility {
    pub id: &'static str,
    pub name: &'static str,
    pub coord: Coordinate,
    pub kind: NuclearKind,
    pub status: &'static str,
}

#[derive(Debug, Clone)]
pub struct CableRoute {
    pub id: &'static str,
    pub name: &'static str,
    pub major: bool,
    /// (lon, lat) waypoints.
    pub waypoints: &'static [(f64, f64)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanctionTier {
    Severe,
    High,
    Moderate,
    Low,
}

impl SanctionTier {
    /// Country fill color for the given UI theme.
    pub fn fill_color(self, theme: Theme) -> &'static str {
        match (theme, self) {
            (Theme::Light, SanctionTier::Severe) => "#fecaca",
            (Theme::Light, SanctionTier::High) => "#fed7aa",
            (Theme::Light, SanctionTier::Moderate) => "#fef08a",
            (Theme::Light, SanctionTier::Low) => "#bbf7d0",
            (Theme::Dark, SanctionTier::Severe) => "#4a1515",
            (Theme::Dark, SanctionTier::High) => "#3d2a15",
            (Theme::Dark, SanctionTier::Moderate) => "#2d2d18",
            (Theme::Dark, SanctionTier::Low) => "#1e2820",
        }
    }
}

/// Broad region used for news-density blobs.
#[derive(Debug, Clone)]
pub struct NewsRegion {
    pub id: &'static str,
    pub name: &'static str,
    pub coord: Coordinate,
    /// Base blob radius in pixels; scaled up by density level.
    pub radius: f64,
    pub keywords: &'static [&'static str],
}

/// Palette offered for custom monitors. No uniqueness enforcement.
pub const MONITOR_COLORS: &[&str] = &[
    "#00ff88", "#ff6600", "#00aaff", "#ff00ff", "#ffcc00", "#ff3366", "#33ccff", "#99ff33",
    "#ff6699", "#00ffcc",
];

pub const HOTSPOTS: &[Hotspot] = &[
    Hotspot {
        id: "dc",
        name: "DC",
        subtext: "Pentagon Pizza Index",
        coord: Coordinate::new(38.9, -77.0),
        keywords: &[
            "pentagon",
            "white house",
            "washington",
            "us military",
            "cia",
            "nsa",
            "biden",
            "trump",
        ],
        description: "US national security hub. Pentagon, CIA, NSA, State Dept. Monitor for late-night activity spikes.",
        agencies: &["Pentagon", "CIA", "NSA", "State Dept"],
        status: "Active monitoring",
    },
    Hotspot {
        id: "moscow",
        name: "Moscow",
        subtext: "Kremlin Activity",
        coord: Coordinate::new(55.75, 37.6),
        keywords: &["russia", "putin", "kremlin", "moscow", "russian"],
        description: "Russian political and military command center. FSB, GRU, Presidential Administration.",
        agencies: &["FSB", "GRU", "SVR", "Kremlin"],
        status: "High activity",
    },
    Hotspot {
        id: "beijing",
        name: "Beijing",
        subtext: "PLA/MSS Activity",
        coord: Coordinate::new(39.9, 116.4),
        keywords: &["china", "beijing", "chinese", "xi jinping", "taiwan strait", "pla"],
        description: "Chinese Communist Party headquarters. PLA command, MSS intelligence operations.",
        agencies: &["PLA", "MSS", "CCP Politburo"],
        status: "Medium posture",
    },
    Hotspot {
        id: "kyiv",
        name: "Kyiv",
        subtext: "Conflict Zone",
        coord: Coordinate::new(50.45, 30.5),
        keywords: &["ukraine", "kyiv", "zelensky", "ukrainian", "donbas", "crimea"],
        description: "Ukrainian capital under wartime conditions. Government, military coordination center.",
        agencies: &["SBU", "GUR", "Armed Forces"],
        status: "Active conflict",
    },
    Hotspot {
        id: "taipei",
        name: "Taipei",
        subtext: "Strait Watch",
        coord: Coordinate::new(25.03, 121.5),
        keywords: &["taiwan", "taipei", "taiwanese", "strait"],
        description: "Taiwan government and military HQ. ADIZ violations and PLA exercises tracked.",
        agencies: &["NSB", "MND", "AIT"],
        status: "Heightened alert",
    },
    Hotspot {
        id: "tehran",
        name: "Tehran",
        subtext: "IRGC Activity",
        coord: Coordinate::new(35.7, 51.4),
        keywords: &["iran", "tehran", "iranian", "irgc", "hezbollah", "nuclear"],
        description: "Iranian regime center. IRGC Quds Force, nuclear program oversight, proxy coordination.",
        agencies: &["IRGC", "MOIS", "AEOI"],
        status: "Proxy operations active",
    },
    Hotspot {
        id: "jerusalem",
        name: "Tel Aviv",
        subtext: "Mossad/IDF",
        coord: Coordinate::new(32.07, 34.78),
        keywords: &["israel", "israeli", "gaza", "hamas", "idf", "netanyahu", "mossad"],
        description: "Israeli security apparatus. IDF operations, Mossad intel, Shin Bet domestic security.",
        agencies: &["Mossad", "IDF", "Shin Bet", "Aman"],
        status: "Active operations",
    },
    Hotspot {
        id: "pyongyang",
        name: "Pyongyang",
        subtext: "DPRK Watch",
        coord: Coordinate::new(39.03, 125.75),
        keywords: &["north korea", "kim jong", "pyongyang", "dprk", "korean missile"],
        description: "North Korean leadership compound. Nuclear/missile program, regime stability indicators.",
        agencies: &["RGB", "KPA", "SSD"],
        status: "Missile tests ongoing",
    },
    Hotspot {
        id: "london",
        name: "London",
        subtext: "GCHQ/MI6",
        coord: Coordinate::new(51.5, -0.12),
        keywords: &["uk", "britain", "british", "mi6", "gchq", "london"],
        description: "UK intelligence community hub. Five Eyes partner, SIGINT, foreign intelligence.",
        agencies: &["MI6", "GCHQ", "MI5"],
        status: "Normal operations",
    },
    Hotspot {
        id: "brussels",
        name: "Brussels",
        subtext: "NATO HQ",
        coord: Coordinate::new(50.85, 4.35),
        keywords: &["nato", "eu", "european union", "brussels"],
        description: "NATO headquarters and EU institutions. Alliance coordination, Article 5 readiness.",
        agencies: &["NATO", "EU Commission", "EEAS"],
        status: "Enhanced readiness",
    },
    Hotspot {
        id: "caracas",
        name: "Caracas",
        subtext: "Venezuela Crisis",
        coord: Coordinate::new(10.5, -66.9),
        keywords: &["venezuela", "maduro", "caracas", "guaido", "venezuelan", "pdvsa"],
        description: "Venezuelan political crisis center. Maduro regime, opposition movements, oil politics.",
        agencies: &["SEBIN", "DGCIM", "GNB"],
        status: "Political instability",
    },
    Hotspot {
        id: "greenland",
        name: "Nuuk",
        subtext: "Arctic Dispute",
        coord: Coordinate::new(64.18, -51.7),
        keywords: &["greenland", "denmark", "arctic", "nuuk", "thule", "rare earth"],
        description: "Arctic strategic territory. US military presence, rare earth minerals, sovereignty questions.",
        agencies: &["Danish Defence", "US Space Force", "Arctic Council"],
        status: "Diplomatic tensions",
    },
];

pub const CHOKEPOINTS: &[Chokepoint] = &[
    Chokepoint {
        id: "suez",
        name: "Suez Canal",
        coord: Coordinate::new(30.0, 32.5),
        keywords: &["suez", "red sea", "houthi", "canal"],
        description: "Critical waterway connecting Mediterranean to Red Sea. ~12% of global trade. Currently threatened by Houthi attacks.",
        traffic: "~50 ships/day",
        region: "Egypt",
        dimensions: None,
        controlled_by: None,
        cargo: &[],
    },
    Chokepoint {
        id: "panama",
        name: "Panama Canal",
        coord: Coordinate::new(9.1, -79.7),
        keywords: &["panama canal", "panama"],
        description: "Links Atlantic and Pacific oceans. ~5% of global trade. Facing drought-related capacity restrictions.",
        traffic: "~40 ships/day",
        region: "Panama",
        dimensions: None,
        controlled_by: None,
        cargo: &[],
    },
    Chokepoint {
        id: "hormuz",
        name: "Strait of Hormuz",
        coord: Coordinate::new(26.5, 56.3),
        keywords: &["hormuz", "strait of hormuz", "persian gulf"],
        description: "Only sea route from Persian Gulf to open ocean. ~21% of global oil passes through daily.",
        traffic: "~20 tankers/day",
        region: "Iran/Oman",
        dimensions: None,
        controlled_by: None,
        cargo: &[],
    },
    Chokepoint {
        id: "malacca",
        name: "Malacca Strait",
        coord: Coordinate::new(2.5, 101.5),
        keywords: &["malacca", "singapore strait"],
        description: "Main shipping route between Indian and Pacific oceans. ~25% of global trade including ~25% of oil.",
        traffic: "~80 ships/day",
        region: "Malaysia/Singapore",
        dimensions: None,
        controlled_by: None,
        cargo: &[],
    },
    Chokepoint {
        id: "bosphorus",
        name: "Bosphorus Strait",
        coord: Coordinate::new(41.1, 29.0),
        keywords: &["bosphorus", "black sea", "turkish strait", "istanbul", "dardanelles"],
        description: "Only route between Black Sea and Mediterranean. Critical for Russian/Ukrainian grain exports and energy shipments.",
        traffic: "~45,000 ships/year",
        region: "Turkey",
        dimensions: Some("31 km long, 0.7-3.5 km wide, 36-124 m deep"),
        controlled_by: Some("Turkey (Montreux Convention 1936)"),
        cargo: &["Grain", "Oil/Gas", "Coal", "Metals", "Containers"],
    },
];

pub const CONFLICT_ZONES: &[ConflictZone] = &[
    ConflictZone {
        id: "ukraine",
        name: "Ukraine Conflict",
        intensity: Intensity::High,
        ring: &[
            (37.5, 47.0),
            (38.5, 47.5),
            (39.0, 48.5),
            (38.0, 49.5),
            (37.0, 49.0),
            (36.0, 48.5),
            (35.5, 47.5),
            (36.5, 47.0),
        ],
        label: Coordinate::new(48.0, 37.5),
        keywords: &["ukraine", "russia", "zelensky", "putin", "donbas", "crimea", "bakhmut", "kursk"],
        start_date: "Feb 24, 2022",
        parties: &["Russia", "Ukraine", "NATO (support)"],
        casualties: "500,000+ (est.)",
        displaced: "6.5M+ refugees",
        description: "Full-scale Russian invasion of Ukraine. Active frontlines in Donetsk, Luhansk, Zaporizhzhia, and Kherson oblasts. Heavy artillery, drone warfare, and trench combat.",
        key_events: &[
            "Battle of Bakhmut",
            "Kursk incursion",
            "Black Sea drone strikes",
            "Infrastructure attacks",
        ],
    },
    ConflictZone {
        id: "gaza",
        name: "Gaza Conflict",
        intensity: Intensity::High,
        ring: &[(34.2, 31.6), (34.6, 31.6), (34.6, 31.2), (34.2, 31.2)],
        label: Coordinate::new(31.4, 34.4),
        keywords: &["gaza", "israel", "hamas", "idf", "netanyahu", "hostage", "rafah", "hezbollah"],
        start_date: "Oct 7, 2023",
        parties: &["Israel (IDF)", "Hamas", "Palestinian Islamic Jihad"],
        casualties: "45,000+ (Gaza), 1,200+ (Israel)",
        displaced: "2M+ internally displaced",
        description: "Israeli military operation in Gaza following Oct 7 Hamas attacks. Urban warfare, humanitarian crisis, regional escalation with Hezbollah and Houthis.",
        key_events: &[
            "Oct 7 attacks",
            "Ground invasion",
            "Rafah operation",
            "Hostage negotiations",
        ],
    },
    ConflictZone {
        id: "sudan",
        name: "Sudan Civil War",
        intensity: Intensity::Medium,
        ring: &[
            (32.0, 16.0),
            (34.0, 16.5),
            (35.0, 15.0),
            (33.5, 13.5),
            (31.5, 14.0),
            (31.0, 15.5),
        ],
        label: Coordinate::new(15.0, 32.5),
        keywords: &["sudan", "khartoum", "rsf", "darfur", "burhan", "hemedti"],
        start_date: "Apr 15, 2023",
        parties: &["Sudanese Armed Forces (SAF)", "Rapid Support Forces (RSF)"],
        casualties: "15,000+ killed",
        displaced: "10M+ displaced",
        description: "Power struggle between SAF and RSF paramilitary. Fighting centered around Khartoum, Darfur. Major humanitarian catastrophe with famine conditions.",
        key_events: &[
            "Khartoum battle",
            "Darfur massacres",
            "El Fasher siege",
            "Famine declared",
        ],
    },
    ConflictZone {
        id: "myanmar",
        name: "Myanmar Civil War",
        intensity: Intensity::Medium,
        ring: &[
            (96.0, 22.0),
            (98.0, 23.0),
            (98.5, 21.0),
            (97.0, 19.5),
            (95.5, 20.5),
        ],
        label: Coordinate::new(21.0, 96.5),
        keywords: &["myanmar", "burma", "junta", "arakan", "karen", "kachin"],
        start_date: "Feb 1, 2021",
        parties: &[
            "Military Junta (SAC)",
            "Ethnic Armed Organizations",
            "People's Defense Forces",
        ],
        casualties: "50,000+ (est.)",
        displaced: "3M+ internally displaced",
        description: "Armed resistance following 2021 military coup. Multiple ethnic armies and pro-democracy forces fighting junta. Recent rebel advances in border regions.",
        key_events: &[
            "Operation 1027",
            "Lashio capture",
            "Myawaddy offensive",
            "Junta conscription",
        ],
    },
    ConflictZone {
        id: "taiwan_strait",
        name: "Taiwan Strait",
        // tracked as a watch item, no active combat
        intensity: Intensity::Low,
        ring: &[(119.0, 26.0), (121.5, 26.0), (121.5, 22.5), (119.0, 22.5)],
        label: Coordinate::new(24.5, 120.0),
        keywords: &["taiwan", "china", "strait", "pla", "tsai", "invasion"],
        start_date: "Ongoing tensions",
        parties: &["China (PLA)", "Taiwan (ROC)", "United States (deterrence)"],
        casualties: "N/A - no active combat",
        displaced: "N/A",
        description: "Heightened tensions over Taiwan sovereignty. Regular PLA exercises, airspace incursions, naval activity. Risk of flashpoint escalation.",
        key_events: &[
            "PLA exercises",
            "ADIZ incursions",
            "US arms sales",
            "Diplomatic tensions",
        ],
    },
];

pub const CYBER_REGIONS: &[CyberRegion] = &[
    CyberRegion {
        id: "cyber_russia",
        code: "RU",
        country: "Russia",
        coord: Coordinate::new(55.75, 45.0),
        group: "APT28/29",
        aliases: "Fancy Bear / Cozy Bear",
        sponsor: "GRU / FSB",
        description: "State-sponsored groups linked to Russian intelligence. Known for election interference, government espionage, and critical infrastructure attacks.",
        targets: &["Government", "Defense", "Energy", "Elections", "Media"],
    },
    CyberRegion {
        id: "cyber_china",
        code: "CN",
        country: "China",
        coord: Coordinate::new(35.0, 105.0),
        group: "APT41",
        aliases: "Double Dragon / Winnti",
        sponsor: "MSS",
        description: "Hybrid espionage and financially motivated group. Conducts state-sponsored intelligence and supply chain attacks.",
        targets: &["Tech", "Telecom", "Healthcare", "Gaming", "Supply Chain"],
    },
    CyberRegion {
        id: "cyber_nk",
        code: "NK",
        country: "North Korea",
        coord: Coordinate::new(39.0, 127.0),
        group: "Lazarus",
        aliases: "Hidden Cobra / APT38",
        sponsor: "RGB",
        description: "Financially motivated attacks to fund regime. Known for cryptocurrency theft, SWIFT banking attacks, and ransomware.",
        targets: &["Crypto", "Banks", "Defense", "Media", "Critical Infra"],
    },
    CyberRegion {
        id: "cyber_iran",
        code: "IR",
        country: "Iran",
        coord: Coordinate::new(32.0, 53.0),
        group: "APT33/35",
        aliases: "Charming Kitten / Elfin",
        sponsor: "IRGC",
        description: "Focus on regional adversaries and dissidents. Known for destructive wiper malware and spear-phishing campaigns.",
        targets: &["Energy", "Aviation", "Government", "Dissidents", "Israel"],
    },
];

pub const MILITARY_BASES: &[MilitaryBase] = &[
    MilitaryBase { id: "ramstein", name: "Ramstein AB", coord: Coordinate::new(49.44, 7.6), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "diego_garcia", name: "Diego Garcia", coord: Coordinate::new(-7.32, 72.42), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "guam", name: "Andersen AFB", coord: Coordinate::new(13.58, 144.92), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "okinawa", name: "Kadena AB", coord: Coordinate::new(26.35, 127.77), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "yokosuka", name: "Yokosuka", coord: Coordinate::new(35.28, 139.67), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "bahrain", name: "NSA Bahrain", coord: Coordinate::new(26.23, 50.65), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "qatar", name: "Al Udeid", coord: Coordinate::new(25.12, 51.31), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "djibouti", name: "Camp Lemonnier", coord: Coordinate::new(11.55, 43.15), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "incirlik", name: "Incirlik AB", coord: Coordinate::new(37.0, 35.43), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "rota", name: "NS Rota", coord: Coordinate::new(36.62, -6.35), affiliation: BaseAffiliation::UsNato },
    MilitaryBase { id: "djibouti_cn", name: "PLA Djibouti", coord: Coordinate::new(11.59, 43.05), affiliation: BaseAffiliation::China },
    MilitaryBase { id: "woody_island", name: "Woody Island", coord: Coordinate::new(16.83, 112.33), affiliation: BaseAffiliation::China },
    MilitaryBase { id: "fiery_cross", name: "Fiery Cross", coord: Coordinate::new(9.55, 112.89), affiliation: BaseAffiliation::China },
    MilitaryBase { id: "mischief_reef", name: "Mischief Reef", coord: Coordinate::new(9.90, 115.53), affiliation: BaseAffiliation::China },
    MilitaryBase { id: "ream", name: "Ream (Cambodia)", coord: Coordinate::new(10.52, 103.63), affiliation: BaseAffiliation::China },
    MilitaryBase { id: "kaliningrad", name: "Kaliningrad", coord: Coordinate::new(54.71, 20.51), affiliation: BaseAffiliation::Russia },
    MilitaryBase { id: "sevastopol", name: "Sevastopol", coord: Coordinate::new(44.62, 33.53), affiliation: BaseAffiliation::Russia },
    MilitaryBase { id: "tartus", name: "Tartus (Syria)", coord: Coordinate::new(34.89, 35.87), affiliation: BaseAffiliation::Russia },
    MilitaryBase { id: "hmeimim", name: "Hmeimim AB", coord: Coordinate::new(35.41, 35.95), affiliation: BaseAffiliation::Russia },
    MilitaryBase { id: "cam_ranh", name: "Cam Ranh", coord: Coordinate::new(11.99, 109.22), affiliation: BaseAffiliation::Russia },
];

pub const NUCLEAR_FACILITIES: &[NuclearFacility] = &[
    NuclearFacility { id: "zaporizhzhia", name: "Zaporizhzhia NPP", coord: Coordinate::new(47.51, 34.58), kind: NuclearKind::Plant, status: "contested" },
    NuclearFacility { id: "fukushima", name: "Fukushima", coord: Coordinate::new(37.42, 141.03), kind: NuclearKind::Plant, status: "decommissioning" },
    NuclearFacility { id: "flamanville", name: "Flamanville", coord: Coordinate::new(49.54, -1.88), kind: NuclearKind::Plant, status: "active" },
    NuclearFacility { id: "bruce", name: "Bruce Power", coord: Coordinate::new(44.33, -81.60), kind: NuclearKind::Plant, status: "active" },
    NuclearFacility { id: "natanz", name: "Natanz", coord: Coordinate::new(33.72, 51.73), kind: NuclearKind::Enrichment, status: "active" },
    NuclearFacility { id: "fordow", name: "Fordow", coord: Coordinate::new(34.88, 51.0), kind: NuclearKind::Enrichment, status: "active" },
    NuclearFacility { id: "yongbyon", name: "Yongbyon", coord: Coordinate::new(39.80, 125.75), kind: NuclearKind::Weapons, status: "active" },
    NuclearFacility { id: "dimona", name: "Dimona", coord: Coordinate::new(31.0, 35.15), kind: NuclearKind::Weapons, status: "active" },
    NuclearFacility { id: "los_alamos", name: "Los Alamos", coord: Coordinate::new(35.88, -106.30), kind: NuclearKind::Weapons, status: "active" },
    NuclearFacility { id: "sellafield", name: "Sellafield", coord: Coordinate::new(54.42, -3.50), kind: NuclearKind::Reprocessing, status: "active" },
    NuclearFacility { id: "la_hague", name: "La Hague", coord: Coordinate::new(49.68, -1.88), kind: NuclearKind::Reprocessing, status: "active" },
];

pub const CABLE_ROUTES: &[CableRoute] = &[
    CableRoute {
        id: "transatlantic_1",
        name: "Transatlantic (TAT-14)",
        major: true,
        waypoints: &[(-74.0, 40.7), (-30.0, 45.0), (-9.0, 52.0)],
    },
    CableRoute {
        id: "transpacific_1",
        name: "Transpacific (Unity)",
        major: true,
        waypoints: &[(-122.4, 37.8), (-155.0, 25.0), (139.7, 35.7)],
    },
    CableRoute {
        id: "sea_me_we_5",
        name: "SEA-ME-WE 5",
        major: true,
        waypoints: &[
            (103.8, 1.3),
            (80.0, 10.0),
            (55.0, 25.0),
            (35.0, 30.0),
            (12.0, 37.0),
            (-5.0, 36.0),
        ],
    },
    CableRoute {
        id: "aae1",
        name: "Asia-Africa-Europe 1",
        major: true,
        waypoints: &[
            (121.0, 25.0),
            (103.8, 1.3),
            (73.0, 15.0),
            (44.0, 12.0),
            (35.0, 30.0),
            (28.0, 41.0),
        ],
    },
    CableRoute {
        id: "curie",
        name: "Curie (Google)",
        major: false,
        waypoints: &[(-122.4, 37.8), (-80.0, 0.0), (-70.0, -33.0)],
    },
    CableRoute {
        id: "marea",
        name: "MAREA (Microsoft)",
        major: true,
        waypoints: &[(-73.8, 39.4), (-9.0, 37.0)],
    },
];

/// ISO 3166-1 numeric codes (the ids carried by Natural Earth country
/// features) mapped to sanction severity.
pub const SANCTIONED_COUNTRIES: &[(u16, SanctionTier)] = &[
    (408, SanctionTier::Severe),   // North Korea
    (728, SanctionTier::Severe),   // South Sudan
    (729, SanctionTier::Severe),   // Sudan
    (760, SanctionTier::Severe),   // Syria
    (364, SanctionTier::High),     // Iran
    (643, SanctionTier::High),     // Russia
    (112, SanctionTier::High),     // Belarus
    (862, SanctionTier::Moderate), // Venezuela
    (104, SanctionTier::Moderate), // Myanmar
    (178, SanctionTier::Moderate), // Congo
    (152, SanctionTier::Low),      // Cuba
    (716, SanctionTier::Low),      // Zimbabwe
];

pub const NEWS_REGIONS: &[NewsRegion] = &[
    NewsRegion {
        id: "us",
        name: "United States",
        coord: Coordinate::new(39.0, -98.0),
        radius: 60.0,
        keywords: &["us", "america", "washington", "trump", "biden", "congress"],
    },
    NewsRegion {
        id: "europe",
        name: "Europe",
        coord: Coordinate::new(50.0, 10.0),
        radius: 55.0,
        keywords: &["europe", "eu", "european", "nato", "brussels"],
    },
    NewsRegion {
        id: "russia",
        name: "Russia",
        coord: Coordinate::new(60.0, 90.0),
        radius: 50.0,
        keywords: &["russia", "russian", "putin", "moscow", "kremlin"],
    },
    NewsRegion {
        id: "china",
        name: "China",
        coord: Coordinate::new(35.0, 105.0),
        radius: 55.0,
        keywords: &["china", "chinese", "beijing", "xi"],
    },
    NewsRegion {
        id: "middle_east",
        name: "Middle East",
        coord: Coordinate::new(30.0, 45.0),
        radius: 50.0,
        keywords: &["israel", "iran", "saudi", "gaza", "syria", "iraq", "yemen"],
    },
    NewsRegion {
        id: "east_asia",
        name: "East Asia",
        coord: Coordinate::new(35.0, 130.0),
        radius: 45.0,
        keywords: &["japan", "korea", "taiwan", "kim jong"],
    },
    NewsRegion {
        id: "south_asia",
        name: "South Asia",
        coord: Coordinate::new(22.0, 78.0),
        radius: 45.0,
        keywords: &["india", "pakistan", "modi"],
    },
    NewsRegion {
        id: "africa",
        name: "Africa",
        coord: Coordinate::new(5.0, 20.0),
        radius: 55.0,
        keywords: &["africa", "african", "sudan", "nigeria", "ethiopia"],
    },
    NewsRegion {
        id: "latam",
        name: "Latin America",
        coord: Coordinate::new(-15.0, -60.0),
        radius: 50.0,
        keywords: &["brazil", "mexico", "venezuela", "argentina"],
    },
];

/// Sanction tier for a Natural Earth numeric country id.
pub fn sanction_tier(country_id: u16) -> Option<SanctionTier> {
    SANCTIONED_COUNTRIES
        .iter()
        .find(|(id, _)| *id == country_id)
        .map(|(_, tier)| *tier)
}
