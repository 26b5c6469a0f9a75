//! Trail information topics for the guide dropdown.

/// The fixed set of hiking topics the information guide can explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    WildlifeEncounters,
    PlantHazards,
    WeatherSafety,
    Navigation,
    FirstAid,
    GearEssentials,
    WaterSafety,
    TrailEtiquette,
    SeasonalTips,
    PhysicalPreparation,
}

impl Topic {
    /// All topics, in dropdown order.
    pub const ALL: [Topic; 10] = [
        Topic::WildlifeEncounters,
        Topic::PlantHazards,
        Topic::WeatherSafety,
        Topic::Navigation,
        Topic::FirstAid,
        Topic::GearEssentials,
        Topic::WaterSafety,
        Topic::TrailEtiquette,
        Topic::SeasonalTips,
        Topic::PhysicalPreparation,
    ];

    /// Human-readable label shown in the dropdown and sent back on selection.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::WildlifeEncounters => "Wildlife Encounters & Safety",
            Topic::PlantHazards => "Plant Hazards & Identification",
            Topic::WeatherSafety => "Weather Safety & Preparation",
            Topic::Navigation => "Navigation & Trail Markers",
            Topic::FirstAid => "First Aid & Emergency Response",
            Topic::GearEssentials => "Gear & Equipment Essentials",
            Topic::WaterSafety => "Water Safety & Hydration",
            Topic::TrailEtiquette => "Trail Etiquette & Rules",
            Topic::SeasonalTips => "Seasonal Hiking Tips",
            Topic::PhysicalPreparation => "Physical Preparation & Fitness",
        }
    }

    /// Resolve a dropdown label back to its topic.
    pub fn from_label(label: &str) -> Option<Topic> {
        Topic::ALL.iter().copied().find(|t| t.label() == label)
    }

    /// The fixed template prompt sent to the model for this topic.
    pub fn info_prompt(&self) -> String {
        format!(
            "Provide comprehensive information about {} on hiking trails, \
             including potential risks and safety tips.",
            self.label()
        )
    }
}
