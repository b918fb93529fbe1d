use serde::Serialize;

use super::records::Category;

/// Display metadata for a gallery page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub slug: Category,
    pub title: &'static str,
    pub plural_title: &'static str,
    pub description: &'static str,
    pub hero_image: Option<&'static str>,
}

pub static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        slug: Category::Galaxies,
        title: "Galaxies",
        plural_title: "Galaxies",
        description: "Deep sky images of galaxies captured from Silver Spring Observatory and \
            remote locations. Includes spiral galaxies, elliptical galaxies, interacting galaxy pairs, and more.",
        hero_image: Some("/images/galaxies/M51_LRGB_gradient_H85.jpg"),
    },
    CategoryInfo {
        slug: Category::GalaxyClusters,
        title: "Galaxy Clusters",
        plural_title: "Galaxy Clusters",
        description: "Gravitationally bound collections of hundreds to thousands of galaxies, \
            some of the largest structures in the universe.",
        hero_image: Some("/images/galaxies/NGC7331_LRGB_H85.jpg"),
    },
    CategoryInfo {
        slug: Category::StarClusters,
        title: "Star Clusters",
        plural_title: "Star Clusters",
        description: "Open clusters and globular clusters captured through CCD imaging, from \
            loose associations to dense spherical collections of ancient stars.",
        hero_image: None,
    },
    CategoryInfo {
        slug: Category::Nebulae,
        title: "Nebulae",
        plural_title: "Nebulae",
        description: "Emission, planetary, reflection and dark nebulae. Interstellar clouds of \
            gas and dust that are stellar nurseries or remnants of dying stars.",
        hero_image: Some("/images/nebulae/M27_LRGB_H85.jpg"),
    },
    CategoryInfo {
        slug: Category::Supernovae,
        title: "Supernovae",
        plural_title: "Supernovae",
        description: "Observations of supernovae, the explosive deaths of massive stars. These \
            transient events can briefly outshine entire galaxies.",
        hero_image: Some("/images/supernovae/SN2004et_RGB_H85.jpg"),
    },
    CategoryInfo {
        slug: Category::Asteroids,
        title: "Asteroids",
        plural_title: "Asteroids",
        description: "Asteroid observations and imaging, including the asteroid (99862) \
            \"Kenlevin\". Tracking observations showing asteroid motion against background stars.",
        hero_image: Some("/images/asteroids/astero2.gif"),
    },
    CategoryInfo {
        slug: Category::Exoplanets,
        title: "Exoplanets",
        plural_title: "Exoplanets",
        description: "Exoplanet transit observations. Detecting planets around other stars \
            through photometric measurements.",
        hero_image: Some("/images/exoplanets/WASP1.jpg"),
    },
];

pub fn category_info(category: Category) -> &'static CategoryInfo {
    // CATEGORIES holds one entry per variant, in `Category::ALL` order.
    &CATEGORIES[Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default()]
}
