use crate::{
    data::{IdQuery, StudentStore, student::StudentForm},
    error::{MissingStudentSnafu, RosterResult},
    render::{Renderer, View},
    state::RosterState,
};
use axum::extract::{Query, State};
use maud::Markup;
use snafu::OptionExt;

pub async fn get_update_form<S: StudentStore, R: Renderer>(
    State(state): State<RosterState<S, R>>,
    Query(query): Query<IdQuery>,
) -> RosterResult<Markup> {
    let id = query.parse()?;
    let student = state
        .store()
        .get_from_db_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(state.render(View::UpdateForm(&student)))
}

/// Overwrites every field. An `id` with no matching row still reports success.
pub async fn post_update_process<S: StudentStore, R: Renderer>(
    State(state): State<RosterState<S, R>>,
    form: StudentForm,
) -> RosterResult<Markup> {
    let student = form.into_existing_student()?;
    state.store().update_in_database(student.clone()).await?;
    info!(id = student.id, "Updated student");

    Ok(state.render(View::Updated(&student)))
}
