use serde::Serialize;
use std::fmt;

use crate::utils::constants::{
    EPSG_ADINDAN_UTM36N, EPSG_ADINDAN_UTM37N, EPSG_ARC1960_UTM36S, EPSG_ARC1960_UTM37S,
    EPSG_WGS84, EPSG_WGS84_UTM36N, EPSG_WGS84_UTM36S,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Datum {
    #[serde(rename = "WGS 84")]
    Wgs84,
    #[serde(rename = "Arc 1960")]
    Arc1960,
    #[serde(rename = "Adindan")]
    Adindan,
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Datum::Wgs84 => "WGS 84",
            Datum::Arc1960 => "Arc 1960",
            Datum::Adindan => "Adindan",
        };
        write!(f, "{}", name)
    }
}

/// A named coordinate reference system and its proj-string definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrsDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub datum: Datum,
    pub geographic: bool,
    pub definition: &'static str,
}

/// Every supported system, in selector order
pub static CRS_REGISTRY: [CrsDescriptor; 7] = [
    CrsDescriptor {
        id: EPSG_WGS84,
        label: "WGS 84 (EPSG:4326)",
        datum: Datum::Wgs84,
        geographic: true,
        definition: "+proj=longlat +datum=WGS84 +no_defs",
    },
    CrsDescriptor {
        id: EPSG_ARC1960_UTM36S,
        label: "Arc 1960 / UTM 36S",
        datum: Datum::Arc1960,
        geographic: false,
        definition: "+proj=utm +zone=36 +south +ellps=clrk80 +towgs84=-160,-6,-302,0,0,0,0 +units=m +no_defs",
    },
    CrsDescriptor {
        id: EPSG_ARC1960_UTM37S,
        label: "Arc 1960 / UTM 37S",
        datum: Datum::Arc1960,
        geographic: false,
        definition: "+proj=utm +zone=37 +south +ellps=clrk80 +towgs84=-160,-6,-302,0,0,0,0 +units=m +no_defs",
    },
    CrsDescriptor {
        id: EPSG_ADINDAN_UTM36N,
        label: "Adindan / UTM 36N",
        datum: Datum::Adindan,
        geographic: false,
        definition: "+proj=utm +zone=36 +ellps=clrk80 +towgs84=-166,-15,204,0,0,0,0 +units=m +no_defs",
    },
    CrsDescriptor {
        id: EPSG_ADINDAN_UTM37N,
        label: "Adindan / UTM 37N",
        datum: Datum::Adindan,
        geographic: false,
        definition: "+proj=utm +zone=37 +ellps=clrk80 +towgs84=-166,-15,204,0,0,0,0 +units=m +no_defs",
    },
    CrsDescriptor {
        id: EPSG_WGS84_UTM36S,
        label: "WGS 84 / UTM 36S",
        datum: Datum::Wgs84,
        geographic: false,
        definition: "+proj=utm +zone=36 +south +datum=WGS84 +units=m +no_defs",
    },
    CrsDescriptor {
        id: EPSG_WGS84_UTM36N,
        label: "WGS 84 / UTM 36N",
        datum: Datum::Wgs84,
        geographic: false,
        definition: "+proj=utm +zone=36 +datum=WGS84 +units=m +no_defs",
    },
];

/// Look up a registry entry by its identifier (e.g. `EPSG:4326`)
pub fn lookup(id: &str) -> Option<&'static CrsDescriptor> {
    CRS_REGISTRY.iter().find(|crs| crs.id == id)
}

pub fn is_registered(id: &str) -> bool {
    lookup(id).is_some()
}
