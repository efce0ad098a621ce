use crate::{
    data::{IdQuery, StudentStore},
    error::RosterResult,
    render::Renderer,
    state::RosterState,
};
use axum::{
    extract::{Query, State},
    response::Redirect,
};

pub async fn get_delete_process<S: StudentStore, R: Renderer>(
    State(state): State<RosterState<S, R>>,
    Query(query): Query<IdQuery>,
) -> RosterResult<Redirect> {
    let id = query.parse()?;
    state.store().remove_from_database(id).await?;
    info!(id, "Deleted student");

    Ok(Redirect::to("/students"))
}
