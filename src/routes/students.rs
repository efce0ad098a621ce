use crate::{
    data::{IdQuery, StudentStore},
    error::{MissingStudentSnafu, RosterResult},
    render::{Renderer, View},
    state::RosterState,
};
use axum::extract::{Query, State};
use maud::Markup;
use snafu::OptionExt;

pub async fn get_students<S: StudentStore, R: Renderer>(
    State(state): State<RosterState<S, R>>,
) -> RosterResult<Markup> {
    let students = state.store().get_all().await?;
    Ok(state.render(View::StudentList(&students)))
}

pub async fn get_student<S: StudentStore, R: Renderer>(
    State(state): State<RosterState<S, R>>,
    Query(query): Query<IdQuery>,
) -> RosterResult<Markup> {
    let id = query.parse()?;
    let student = state
        .store()
        .get_from_db_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(state.render(View::ShowStudent(&student)))
}
