use serde::Serialize;

use super::records::ObservatoryCode;

/// An imaging site. The list is fixed and only used for labels and badges.
#[derive(Debug, Clone, Serialize)]
pub struct Observatory {
    pub code: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    /// Whether the site is still in use.
    pub active: bool,
    pub url: Option<&'static str>,
}

pub static OBSERVATORIES: &[Observatory] = &[
    Observatory {
        code: "H85",
        name: "Silver Spring",
        full_name: "Silver Spring Observatory",
        location: "Silver Spring, Maryland",
        description: "The original home observatory established in Silver Spring, Maryland. \
            Personal observatory used for CCD astro-imaging of deep sky objects.",
        active: false,
        url: None,
    },
    Observatory {
        code: "BBO",
        name: "Blackbird",
        full_name: "Blackbird Observatory",
        location: "Cloudcroft, New Mexico",
        description: "Remote observatory located near Cloudcroft, New Mexico. Known for \
            excellent dark skies and seeing conditions. Now relocated to Sierra Remote Observatories.",
        active: false,
        url: Some("https://www.sierra-remote.com/"),
    },
    Observatory {
        code: "SRO",
        name: "Sierra Remote",
        full_name: "Sierra Remote Observatories",
        location: "Sierra Nevada, California",
        description: "Current remote imaging location. Sierra Remote Observatories provides \
            excellent dark sky conditions and professional-grade infrastructure for amateur astronomers.",
        active: true,
        url: Some("https://www.sierra-remote.com/"),
    },
    Observatory {
        code: "G53",
        name: "Alder Springs",
        full_name: "Alder Springs Observatory",
        location: "California",
        description: "Alder Springs Observatory (G53), an additional remote imaging location.",
        active: true,
        url: None,
    },
    Observatory {
        code: "TAS",
        name: "Texas Dark Site",
        full_name: "Texas Astronomical Society Dark Site",
        location: "Oklahoma",
        description: "Observatory at the Texas Astronomical Society dark site in Oklahoma, \
            running the same telescope setup under pristine dark skies.",
        active: true,
        url: Some("https://www.texasastro.org/"),
    },
];

/// Look up an observatory by its code.
pub fn find_observatory(code: &str) -> Option<&'static Observatory> {
    OBSERVATORIES.iter().find(|o| o.code == code)
}

/// Render `"from H85"` or, with `include_full_name`, `"from BBO (Blackbird Observatory)"`.
///
/// Codes without a matching observatory render as `"from CODE"`.
pub fn observatory_label(code: &ObservatoryCode, include_full_name: bool) -> String {
    match find_observatory(code.as_str()) {
        Some(obs) if include_full_name => format!("from {} ({})", obs.code, obs.full_name),
        Some(obs) => format!("from {}", obs.code),
        None => format!("from {}", code),
    }
}
