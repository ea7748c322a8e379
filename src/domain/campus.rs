/// Fixed landmarks drawn on every map alongside the listings.
#[derive(Debug)]
pub struct Campus {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub link: &'static str,
    pub note: &'static str,
}

pub const CAMPUSES: &[Campus] = &[
    Campus {
        name: "Monash University, Clayton",
        lat: -37.9110995,
        lon: 145.1366624,
        link: "https://www.google.com/maps/place/Monash+University+Clayton+Campus/@-37.9110952,145.1317915,17z",
        note: "Classes here from January 2026 until around 2029.",
    },
    Campus {
        name: "Monash University, Caulfield",
        lat: -37.87725921775779,
        lon: 145.04503248374513,
        link: "https://www.google.com/maps/place/Monash+University+Caulfield+Campus/@-37.8773481,145.0424254,17z",
        note: "Classes here from November 2025 until February 2026.",
    },
];
