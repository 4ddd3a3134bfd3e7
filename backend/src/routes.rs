use rocket::{State, get, post, http::Status, serde::json::{self, Json, Value}};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use shared::models::*;
use crate::{error::ApiError, store::ElectionStore};

type JsonBody<'r> = Result<Json<Value>, json::Error<'r>>;

/// Request bodies must be JSON objects; the derived deserializers would
/// otherwise also take a positional array.
fn parse_object<T: DeserializeOwned>(body: JsonBody<'_>) -> Result<T, ApiError> {
    let value = body?.into_inner();
    if !value.is_object() {
        return Err(ApiError::Unprocessable("Input should be a valid JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Unprocessable(e.to_string()))
}

#[get("/")]
pub fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse::welcome())
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(store, candidate))]
#[post("/register-candidate", data = "<candidate>")]
pub fn register_candidate(
    store: &State<ElectionStore>,
    candidate: JsonBody<'_>,
) -> Result<Json<MessageResponse>, ApiError> {
    let registered = store.register_candidate(parse_object(candidate)?)?;
    let (candidates, _) = store.counts()?;
    info!(candidate_id = registered.id, name = %registered.name, party = %registered.party, candidates, "Candidate registered");
    Ok(Json(MessageResponse::candidate_registered(&registered)))
}

#[instrument(skip(store))]
#[get("/candidates")]
pub fn list_candidates(store: &State<ElectionStore>) -> Result<Json<Vec<Candidate>>, ApiError> {
    let candidates = store.candidates()?;
    debug!("Listing {} candidates", candidates.len());
    Ok(Json(candidates))
}

#[instrument(skip(store, vote))]
#[post("/vote", data = "<vote>")]
pub fn cast_vote(
    store: &State<ElectionStore>,
    vote: JsonBody<'_>,
) -> Result<Json<MessageResponse>, ApiError> {
    let vote: Vote = parse_object(vote)?;
    let candidate = store.cast_vote(vote)?;
    let (_, votes) = store.counts()?;
    info!(candidate_id = candidate.id, voter_id = vote.voter_id, votes, "Vote accepted");
    Ok(Json(MessageResponse::vote_submitted()))
}

#[instrument(skip(store))]
#[get("/results")]
pub fn get_results(store: &State<ElectionStore>) -> Result<Json<Vec<TallyEntry>>, ApiError> {
    let results = store.results()?;
    debug!("Tallied {} result rows", results.len());
    Ok(Json(results))
}

#[instrument(skip(store))]
#[get("/results/by-candidate")]
pub fn get_results_by_candidate(store: &State<ElectionStore>) -> Result<Json<Vec<CandidateTally>>, ApiError> {
    let results = store.results_by_candidate()?;
    debug!("Tallied {} candidate rows", results.len());
    Ok(Json(results))
}
