use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub symptom_analysis_delay_ms: u64,
    pub booking_date_window_days: u32,
    pub booking_session_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            symptom_analysis_delay_ms: 2000,
            booking_date_window_days: 7,
            booking_session_ttl_secs: 1800,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using default");
                    defaults.server_host.clone()
                }),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            symptom_analysis_delay_ms: parse_var(
                "SYMPTOM_ANALYSIS_DELAY_MS",
                defaults.symptom_analysis_delay_ms,
            ),
            booking_date_window_days: parse_var(
                "BOOKING_DATE_WINDOW_DAYS",
                defaults.booking_date_window_days,
            ),
            booking_session_ttl_secs: parse_var(
                "BOOKING_SESSION_TTL_SECS",
                defaults.booking_session_ttl_secs,
            ),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - falling back to defaults");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.server_host.is_empty()
            && self.server_port != 0
            && self.booking_date_window_days > 0
            && self.booking_session_ttl_secs > 0
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value '{}', using default", key, raw);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default", key);
            default
        }
    }
}
