//! Records listed by the dashboard tables.

use serde::{Deserialize, Serialize};

/// One row of the user analytics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_name: String,
    pub email: String,
    pub tests_completed: u32,
    /// Average score in percent.
    pub avg_score: u32,
    /// ISO date (`YYYY-MM-DD`).
    pub join_date: String,
    /// ISO date (`YYYY-MM-DD`).
    pub last_login: String,
    pub status: String,
}

/// One row of the test series table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSeriesRecord {
    pub serial_number: u32,
    pub title: String,
    pub test_type: String,
    pub students_enrolled: u32,
    pub average_score: u32,
    pub difficulty_level: String,
    /// ISO date (`YYYY-MM-DD`).
    pub start_date: String,
}
