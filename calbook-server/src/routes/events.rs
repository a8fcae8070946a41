//! Event endpoints.
//!
//! Each handler maps one logical operation onto the store. Business failures
//! (invalid interval, conflict, missing id) come back as `success=false`
//! bodies with a 200 status; the transport only faults on genuine
//! infrastructure problems.

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
    Json,
};

use calbook_core::protocol::{EventDetails, EventList, EventResponse, ListQuery};
use calbook_core::{EventDraft, EventFilter};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// POST /events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Json<EventResponse> {
    tracing::info!(title = %draft.title, "create event request");

    match state.store.create(draft) {
        Ok(event) => {
            tracing::info!(id = %event.id, title = %event.title, "event created");
            Json(EventResponse::ok(
                "Event created successfully",
                Some(EventDetails::from(&event)),
            ))
        }
        Err(err) => {
            tracing::warn!(error = %err, "create rejected");
            Json(EventResponse::err(err.to_string()))
        }
    }
}

/// GET /events/:id - Get a single event
///
/// Absence is signalled with the `not_found` sentinel record rather than an
/// error response, matching the Get contract.
async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> Json<EventDetails> {
    tracing::info!(%id, "get event request");

    match state.store.get(&id) {
        Some(event) => Json(EventDetails::from(&event)),
        None => Json(EventDetails::not_found(&id)),
    }
}

/// PUT /events/:id - Replace an existing event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Json<EventResponse> {
    tracing::info!(%id, "update event request");

    match state.store.update(&id, draft) {
        Ok(event) => {
            tracing::info!(%id, title = %event.title, "event updated");
            Json(EventResponse::ok(
                "Event updated successfully",
                Some(EventDetails::from(&event)),
            ))
        }
        Err(err) => {
            tracing::warn!(%id, error = %err, "update rejected");
            Json(EventResponse::err(err.to_string()))
        }
    }
}

/// DELETE /events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<EventResponse> {
    tracing::info!(%id, "delete event request");

    match state.store.delete(&id) {
        Ok(title) => {
            tracing::info!(%id, %title, "event deleted");
            Json(EventResponse::ok(
                format!("Event '{title}' deleted successfully"),
                None,
            ))
        }
        Err(err) => Json(EventResponse::err(err.to_string())),
    }
}

/// GET /events - List events matching the filter query
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<EventList> {
    tracing::info!(?query, "list events request");

    let filter = EventFilter::from_parts(
        query.start_date.as_deref(),
        query.end_date.as_deref(),
        query.organizer.as_deref(),
        query.status.as_deref(),
    );

    let events: Vec<EventDetails> = state
        .store
        .list(&filter)
        .iter()
        .map(EventDetails::from)
        .collect();

    tracing::info!(count = events.len(), "list events response");

    Json(EventList {
        total_count: events.len(),
        events,
    })
}
