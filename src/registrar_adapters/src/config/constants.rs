pub mod env {
    pub const ENV_PREFIX: &str = "REGISTRAR";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod files {
    pub const DEFAULT_CONFIG_FILE: &str = "config/default";
    pub const LOCAL_CONFIG_FILE: &str = "config/local";
}

pub mod defaults {
    pub const LOG_FILTER: &str = "info";
}
