use modgate_descriptor::{TargetConfiguration, TargetType};

pub fn default_platform() -> String {
    "Win64".to_string()
}

pub fn default_configuration() -> TargetConfiguration {
    TargetConfiguration::Development
}

pub fn default_target_type() -> TargetType {
    TargetType::Game
}

pub fn default_target() -> String {
    "Game".to_string()
}
