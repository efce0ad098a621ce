use crate::{
    data::{StudentStore, student::StudentForm},
    error::RosterResult,
    render::{Renderer, View},
    state::RosterState,
};
use axum::extract::State;
use maud::Markup;

pub async fn get_add_form<S: StudentStore, R: Renderer>(
    State(state): State<RosterState<S, R>>,
) -> Markup {
    state.render(View::CreateForm)
}

pub async fn post_add_process<S: StudentStore, R: Renderer>(
    State(state): State<RosterState<S, R>>,
    form: StudentForm,
) -> RosterResult<Markup> {
    let to_be_added = form.into_new_student()?;
    let id = state
        .store()
        .insert_into_database(to_be_added.clone())
        .await?;
    info!(id, "Added student");

    Ok(state.render(View::Created(&to_be_added.with_id(id))))
}
