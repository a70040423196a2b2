// src/data.rs

use crate::model::Question;

/// A thematic grouping of questions, mirroring the handbook units.
pub struct UnitInfo {
    pub id: u32,
    pub title: &'static str,
    pub badge: &'static str,
}

pub const UNITS: [UnitInfo; 7] = [
    UnitInfo { id: 1, title: "Danger Zones & Mirrors", badge: "👁" },
    UnitInfo { id: 2, title: "Loading & Unloading", badge: "🚸" },
    UnitInfo { id: 3, title: "Emergency Procedures", badge: "🛡" },
    UnitInfo { id: 4, title: "Railroad Crossings", badge: "🚆" },
    UnitInfo { id: 5, title: "Student Management", badge: "🚪" },
    UnitInfo { id: 6, title: "Pre-Trip Inspection", badge: "🔧" },
    UnitInfo { id: 7, title: "Post-Trip & Special Needs", badge: "🚌" },
];

/// Loads the question bank from the embedded YAML.
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("embedded question bank is malformed")
}

pub fn unit_title(id: u32) -> &'static str {
    UNITS
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.title)
        .unwrap_or("Unknown unit")
}
