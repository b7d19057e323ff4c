//! Record builders for creating test fixtures

#![allow(dead_code)]

use extdeck_core::RawExtension;

/// Builder for raw data source records
pub struct RawExtensionBuilder {
    name: String,
    description: String,
    logo: String,
    is_active: bool,
}

impl RawExtensionBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("{} description", name),
            logo: format!("./assets/images/logo-{}.svg", name.to_lowercase()),
            is_active: true,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn logo(mut self, logo: &str) -> Self {
        self.logo = logo.to_string();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn inactive(self) -> Self {
        self.active(false)
    }

    pub fn build(self) -> RawExtension {
        RawExtension::new(self.name, self.description, self.logo, self.is_active)
    }
}

/// The two-record scenario: A active, B inactive
pub fn scenario_ab() -> Vec<RawExtension> {
    vec![
        RawExtensionBuilder::new("A").build(),
        RawExtensionBuilder::new("B").inactive().build(),
    ]
}

/// A realistic mixed list
pub fn sample_extensions() -> Vec<RawExtension> {
    vec![
        RawExtensionBuilder::new("DevLens")
            .description("Quickly inspect page layouts and visualize element boundaries.")
            .build(),
        RawExtensionBuilder::new("StyleSpy")
            .description("Instantly analyze and copy CSS from any webpage element.")
            .build(),
        RawExtensionBuilder::new("SpeedBoost")
            .description("Optimizes browser resource usage to accelerate page loading.")
            .inactive()
            .build(),
        RawExtensionBuilder::new("JSONWizard")
            .description("Formats, validates, and prettifies JSON responses in-browser.")
            .build(),
        RawExtensionBuilder::new("TabMaster Pro")
            .description("Organizes browser tabs into groups and sessions.")
            .build(),
        RawExtensionBuilder::new("ViewportBuddy")
            .description("Simulates various screen resolutions directly within the browser.")
            .inactive()
            .build(),
    ]
}

/// JSON payload in the data source wire format, with an extra field per record
pub fn sample_payload() -> String {
    let records: Vec<serde_json::Value> = sample_extensions()
        .into_iter()
        .enumerate()
        .map(|(i, ext)| {
            serde_json::json!({
                "id": 100 + i,
                "name": ext.name,
                "description": ext.description,
                "logo": ext.logo,
                "isActive": ext.is_active,
                "homepage": format!("https://extensions.example/{}", i),
            })
        })
        .collect();
    serde_json::to_string_pretty(&records).unwrap()
}
