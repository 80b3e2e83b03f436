use super::*;
use crate::session::Submission;
use tracing::{debug, info, warn};

/// Applies one message to the state and returns the effects to run, in order.
pub fn update(state: &mut AppState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::LoadRequested => vec![fetch_all(state)],

        Msg::FilterChanged { kind, text } => {
            state.store.apply_filter(kind, text);
            debug!(?kind, shown = state.store.display().len(), "Filter applied");
            Vec::new()
        }

        Msg::SortRequested { key, direction } => {
            state.store.sort(key, direction);
            Vec::new()
        }

        Msg::AddClicked => {
            state.session.begin_create();
            Vec::new()
        }

        Msg::EditClicked(id) => {
            match state.store.find(id) {
                Some(product) => state.session.begin_edit(product),
                None => warn!(%id, "Edit requested for unknown product"),
            }
            Vec::new()
        }

        Msg::FieldEdited { field, value } => {
            state.session.set_field(field, value);
            Vec::new()
        }

        Msg::Dismissed => {
            state.session.discard();
            Vec::new()
        }

        Msg::Submitted => match state.session.submission() {
            Submission::Create(draft) => vec![Effect::Create(draft)],
            Submission::Update { id, draft } => vec![Effect::Update { id, draft }],
        },

        Msg::DeleteClicked(id) => match state.store.find(id) {
            Some(product) => vec![Effect::ConfirmDelete(product.clone())],
            None => {
                warn!(%id, "Delete requested for unknown product");
                Vec::new()
            }
        },

        Msg::DeleteConfirmed { product, confirmed } => {
            if confirmed {
                vec![Effect::Delete(product.id)]
            } else {
                debug!(id = %product.id, "Delete declined");
                Vec::new()
            }
        }

        Msg::Loaded { generation, result } => {
            match result {
                Ok(products) => {
                    let count = products.len();
                    if state.store.accept_load(generation, products) {
                        info!(generation, count, "Products loaded");
                    }
                }
                // Not shown to the user; the table keeps its previous contents.
                Err(e) => warn!(generation, error = %e, "Loading products failed"),
            }
            Vec::new()
        }

        Msg::Created(result) => mutation_done(state, result, "add", ADDED_MESSAGE, true),
        Msg::Updated(result) => mutation_done(state, result, "update", UPDATED_MESSAGE, true),
        Msg::Deleted(result) => mutation_done(state, result, "delete", DELETED_MESSAGE, false),
    }
}

fn fetch_all(state: &mut AppState) -> Effect {
    Effect::FetchAll {
        generation: state.store.begin_load(),
    }
}

/// Shared tail of create, update and delete: refresh and toast on success, toast
/// the mapped error otherwise.
fn mutation_done(
    state: &mut AppState,
    result: Result<(), ApiError>,
    verb: &str,
    success: &str,
    clears_session: bool,
) -> Vec<Effect> {
    match result {
        Ok(()) => {
            let refresh = fetch_all(state);
            if clears_session {
                state.session.clear();
            }
            vec![refresh, Effect::Notify(Notification::success(success))]
        }
        Err(e) => {
            warn!(verb, error = %e, "Request failed");
            let message = format!("Could not {verb} product: {}", e.user_message());
            vec![Effect::Notify(Notification::error(message))]
        }
    }
}
