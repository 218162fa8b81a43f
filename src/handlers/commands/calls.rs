//! Call records page: the weekly status grid and call updates

use chrono::{Local, NaiveDate};

use crate::calls::{day_label, next_week, previous_week, CallGrid};
use crate::handlers::commands::ack_text;
use crate::handlers::render::Table;
use crate::models::{CallKind, CallStatus, Student};
use crate::navigation::links::PATH_CALLS;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::{parse_date, truncate_text};
use crate::utils::logging;

/// Handle `calls week`
pub async fn handle_week(services: &ServiceFactory, date: Option<&str>) -> Result<String> {
    services.auth_middleware().require_page(PATH_CALLS).await?;

    let day = match date {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let (students, grid) = futures::try_join!(
        services.people_service.students(),
        services.call_service.week_grid(day),
    )?;

    let listed: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
    let grid = grid.with_students(&listed);

    Ok(render_week(&grid, &students))
}

/// Render one row per grid student. Names come from the listing; students
/// outside it show their id.
pub fn render_week(grid: &CallGrid, students: &[Student]) -> String {
    let mut headers = vec!["Student".to_string()];
    headers.extend(grid.days().iter().map(|d| day_label(*d)));
    let mut table = Table::new(headers);

    for id in grid.students() {
        let name = students
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.name.as_str())
            .unwrap_or(id.as_str());
        push_row(&mut table, grid, id, name);
    }

    let summary = grid.summary();
    let monday = grid.week_start();
    format!(
        "Week of {} (prev {}, next {})\n{}{} done, {} not picked, {} scheduled, {} empty\n",
        monday,
        previous_week(monday),
        next_week(monday),
        table.render(),
        summary.done,
        summary.did_not_pick,
        summary.scheduled,
        summary.nothing,
    )
}

fn push_row(table: &mut Table, grid: &CallGrid, student_id: &str, name: &str) {
    let mut cells = vec![truncate_text(name, 24)];
    cells.extend(grid.row(student_id).iter().map(|s| s.symbol().to_string()));
    table.row(cells);
}

/// Handle `calls set`
pub async fn handle_set(
    services: &ServiceFactory,
    student_id: &str,
    date: &str,
    status: CallStatus,
    parent: bool,
    remark: Option<String>,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_CALLS).await?;
    let date: NaiveDate = parse_date(date)?;
    let kind = if parent { CallKind::Parent } else { CallKind::Student };

    let ack = services
        .call_service
        .update(student_id, date, status, kind, remark)
        .await?;
    logging::log_user_action(&profile.user.id, "update_call", Some(student_id));
    Ok(ack_text(&ack, &format!("Marked {} as {} on {}", student_id, status, date)))
}
