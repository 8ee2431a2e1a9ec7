use crate::error::DashboardResult;
use crate::models::AllData;
use std::fs;

pub fn load_all_data(file_path: &str) -> DashboardResult<AllData> {
    let raw_data = fs::read_to_string(file_path)?;
    let data: AllData = serde_json::from_str(&raw_data)?;
    Ok(data)
}
