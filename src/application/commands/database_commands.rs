// src/application/commands/database_commands.rs

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::db::{get_connection, get_database_stats, verify_database_integrity};
use crate::error::AppResult;

/// Get row counts and file size of the open database
pub fn get_database_statistics(state: &AppState) -> Result<DatabaseStatsDto, String> {
    let stats = get_connection(&state.pool)
        .and_then(|conn| get_database_stats(&conn))
        .to_error_response()?;

    Ok(DatabaseStatsDto::from(stats))
}

pub fn check_database_integrity(state: &AppState) -> Result<(), String> {
    let result: AppResult<()> =
        get_connection(&state.pool).and_then(|conn| verify_database_integrity(&conn));
    result.to_error_response()
}
