use fasal_core::{params::AddEntry, Planner, PlannerBuilder};
use jiff::civil::Date;
use tempfile::TempDir;

/// Helper function to create a planner over a throwaway database
pub async fn create_test_planner(user_id: &str) -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_user(user_id)
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

pub fn add_params(crop: &str, activity: &str, scheduled_date: Date) -> AddEntry {
    AddEntry {
        crop_name: crop.to_string(),
        activity: activity.to_string(),
        scheduled_date,
        notes: None,
    }
}
