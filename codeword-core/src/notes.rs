/// Maps that have secret exfils, and so get codeword notes.
pub const SECRET_EXFIL_MAPS: &[&str] = &[
    "bigmap",
    "factory4_day",
    "factory4_night",
    "lighthouse",
    "rezervbase",
    "sandbox",
    "sandbox_high",
    "shoreline",
    "tarkovstreets",
    "woods",
];

pub fn is_secret_exfil_map(map_key: &str) -> bool {
    SECRET_EXFIL_MAPS.contains(&map_key)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CacheContainer {
    BuriedBarrel,
    Ground,
    PmcBody,
    ScavBody,
    DeadScav,
}

impl CacheContainer {
    /// Processing order for each map.
    pub const ALL: [CacheContainer; 5] = [
        CacheContainer::BuriedBarrel,
        CacheContainer::Ground,
        CacheContainer::PmcBody,
        CacheContainer::ScavBody,
        CacheContainer::DeadScav,
    ];

    pub fn tpl(self) -> &'static str {
        match self {
            CacheContainer::BuriedBarrel => "5d6d2bb386f774785b07a77a",
            CacheContainer::Ground => "5d6d2b5486f774785c2ba8ea",
            CacheContainer::PmcBody => "6582e6c6edea9e0e8c4b4e6b",
            CacheContainer::ScavBody => "6582e6d7b14b50ef9a4ae4a4",
            CacheContainer::DeadScav => "5909e4b686f7747f5b744fa4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CacheContainer::BuriedBarrel => "Buried barrel cache",
            CacheContainer::Ground => "Ground cache",
            CacheContainer::PmcBody => "PMC body",
            CacheContainer::ScavBody => "Scav body",
            CacheContainer::DeadScav => "Dead Scav",
        }
    }
}

/// The lore notes that reveal a map's secret exfil codeword.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExfilNote {
    Customs,
    Factory,
    Lighthouse,
    Reserve,
    GroundZero,
    Shoreline,
    Streets,
    Woods,
}

impl ExfilNote {
    pub fn tpl(self) -> &'static str {
        match self {
            ExfilNote::Shoreline => "675aab0d6b6addc02a08f097",
            ExfilNote::Factory => "675aaaf674a7619a5304c233",
            ExfilNote::GroundZero => "675aaae75a3ab8372d0b02a7",
            ExfilNote::Streets => "675aaae1dcf102478202c537",
            ExfilNote::Customs => "675aaab74bca0b001d02f356",
            ExfilNote::Woods => "675aaa9a3107dac100063331",
            ExfilNote::Lighthouse => "675aaa8f7f3c962069072b27",
            ExfilNote::Reserve => "675aaa003107dac10006332f",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExfilNote::Customs => "CUSTOMS",
            ExfilNote::Factory => "FACTORY",
            ExfilNote::Lighthouse => "LIGHTHOUSE",
            ExfilNote::Reserve => "RESERVE",
            ExfilNote::GroundZero => "GROUND_ZERO",
            ExfilNote::Shoreline => "SHORELINE",
            ExfilNote::Streets => "STREETS",
            ExfilNote::Woods => "WOODS",
        }
    }
}

pub fn note_for_map(map_key: &str) -> Option<ExfilNote> {
    match map_key {
        "bigmap" => Some(ExfilNote::Customs),
        "factory4_day" | "factory4_night" => Some(ExfilNote::Factory),
        "lighthouse" => Some(ExfilNote::Lighthouse),
        "rezervbase" => Some(ExfilNote::Reserve),
        "sandbox" | "sandbox_high" => Some(ExfilNote::GroundZero),
        "shoreline" => Some(ExfilNote::Shoreline),
        "tarkovstreets" => Some(ExfilNote::Streets),
        "woods" => Some(ExfilNote::Woods),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_allow_listed_map_has_a_note() {
        for map in SECRET_EXFIL_MAPS {
            assert!(note_for_map(map).is_some(), "{map} has no note");
        }
    }

    #[test]
    fn paired_maps_share_a_note() {
        assert_eq!(note_for_map("factory4_day"), note_for_map("factory4_night"));
        assert_eq!(note_for_map("sandbox"), note_for_map("sandbox_high"));
        assert_eq!(note_for_map("sandbox_high"), Some(ExfilNote::GroundZero));
    }

    #[test]
    fn unknown_and_display_ids_have_no_note() {
        assert_eq!(note_for_map("laboratory"), None);
        assert_eq!(note_for_map("hideout"), None);
        assert_eq!(note_for_map("RezervBase"), None);
    }

    #[test]
    fn container_tpls_are_distinct() {
        let mut tpls: Vec<_> = CacheContainer::ALL.iter().map(|c| c.tpl()).collect();
        tpls.sort();
        tpls.dedup();
        assert_eq!(tpls.len(), CacheContainer::ALL.len());
    }
}
