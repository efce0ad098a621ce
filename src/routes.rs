use crate::{
    data::StudentStore,
    error::RosterError,
    render::Renderer,
    routes::{
        add::{get_add_form, post_add_process},
        delete::get_delete_process,
        index::get_index_route,
        students::{get_student, get_students},
        update::{get_update_form, post_update_process},
    },
    state::RosterState,
};
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod add;
pub mod delete;
pub mod index;
pub mod students;
pub mod update;

pub fn router<S: StudentStore, R: Renderer>(state: RosterState<S, R>) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", get(get_students::<S, R>))
        .route("/students/show", get(get_student::<S, R>))
        .route("/students/add", get(get_add_form::<S, R>))
        .route("/students/add/process", post(post_add_process::<S, R>))
        .route("/students/update", get(get_update_form::<S, R>))
        .route(
            "/students/update/process",
            post(post_update_process::<S, R>),
        )
        .route(
            "/students/delete/process",
            get(get_delete_process::<S, R>),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(get_index_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed(method: Method) -> RosterError {
    RosterError::MethodNotAllowed { method }
}
