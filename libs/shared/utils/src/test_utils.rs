use std::sync::Arc;
use chrono::NaiveDate;

use shared_config::AppConfig;

pub struct TestConfig {
    pub symptom_analysis_delay_ms: u64,
    pub booking_date_window_days: u32,
    pub booking_session_ttl_secs: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            symptom_analysis_delay_ms: 5,
            booking_date_window_days: 7,
            booking_session_ttl_secs: 60,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            symptom_analysis_delay_ms: self.symptom_analysis_delay_ms,
            booking_date_window_days: self.booking_date_window_days,
            booking_session_ttl_secs: self.booking_session_ttl_secs,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Fixed "today" used by tests so date labels are stable ("Feb 16" is tomorrow).
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid test date")
}
