use serde::Deserialize;
use std::sync::Arc;
use warp::Filter;
use warp::http::StatusCode;

use crate::game_manager::GameManager;
use game_core::{parse_date, today_utc};
use game_types::{ErrorResponse, GameError, SubmitGuessRequest};

pub mod catalog;
pub mod config;
pub mod game_manager;

#[derive(Debug, Deserialize)]
struct DateQuery {
    date: Option<String>,
}

impl DateQuery {
    /// The requested day, or today in UTC.
    fn resolve(&self) -> Result<chrono::NaiveDate, GameError> {
        match &self.date {
            Some(value) => parse_date(value),
            None => Ok(today_utc()),
        }
    }
}

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

pub fn create_routes(
    game_manager: Arc<GameManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let game_manager_filter = warp::any().map({
        let game_manager = game_manager.clone();
        move || game_manager.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let puzzle = warp::path("puzzle")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<DateQuery>())
        .and(game_manager_filter.clone())
        .and_then(handle_puzzle_request);

    // Guesses always count against today's puzzle. Body is taken raw so
    // malformed JSON gets our own 400 body
    let guess = warp::path("guess")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .and(game_manager_filter.clone())
        .and_then(handle_guess_request);

    let user_stats = warp::path!("stats" / String)
        .and(warp::get())
        .and(game_manager_filter.clone())
        .and_then(handle_user_stats_request);

    let user_game = warp::path!("games" / String / String)
        .and(warp::get())
        .and(game_manager_filter.clone())
        .and_then(handle_user_game_request);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "OPTIONS"]);

    health
        .or(puzzle)
        .or(guess)
        .or(user_stats)
        .or(user_game)
        .with(cors)
        .with(warp::log("golf_wordle"))
}

async fn handle_puzzle_request(
    query: DateQuery,
    game_manager: Arc<GameManager>,
) -> Result<JsonReply, warp::Rejection> {
    let date = match query.resolve() {
        Ok(date) => date,
        Err(err) => return Ok(error_reply(err)),
    };

    match game_manager.get_or_create_puzzle(date).await {
        Ok(fetch) => Ok(warp::reply::with_status(
            warp::reply::json(&fetch.into_response()),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_guess_request(
    body: warp::hyper::body::Bytes,
    game_manager: Arc<GameManager>,
) -> Result<JsonReply, warp::Rejection> {
    let request: SubmitGuessRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!("Rejected guess body: {}", err);
            return Ok(error_reply(GameError::validation("Invalid JSON body")));
        }
    };

    match game_manager.submit_guess(today_utc(), request).await {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_user_stats_request(
    user_id: String,
    game_manager: Arc<GameManager>,
) -> Result<JsonReply, warp::Rejection> {
    match game_manager.user_stats(&user_id).await {
        Ok(stats) => Ok(warp::reply::with_status(
            warp::reply::json(&stats),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_user_game_request(
    user_id: String,
    date: String,
    game_manager: Arc<GameManager>,
) -> Result<JsonReply, warp::Rejection> {
    let date = match parse_date(&date) {
        Ok(date) => date,
        Err(err) => return Ok(error_reply(err)),
    };

    match game_manager.user_game(&user_id, date).await {
        Ok(Some(game)) => Ok(warp::reply::with_status(
            warp::reply::json(&game),
            StatusCode::OK,
        )),
        Ok(None) => Ok(message_reply("Game not found", StatusCode::NOT_FOUND)),
        Err(err) => Ok(error_reply(err)),
    }
}

/// Map a game error to its HTTP status. Internal failures get a generic body.
fn error_reply(err: GameError) -> JsonReply {
    match err {
        GameError::Validation { message } => message_reply(&message, StatusCode::BAD_REQUEST),
        GameError::PuzzleNotFound { .. } => message_reply(&err.to_string(), StatusCode::NOT_FOUND),
        GameError::RoundAlreadyCompleted { .. } => {
            message_reply(&err.to_string(), StatusCode::CONFLICT)
        }
        GameError::EmptyPool | GameError::Store { .. } | GameError::Catalog { .. } => {
            tracing::error!("Request failed: {}", err);
            message_reply("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn message_reply(message: &str, status: StatusCode) -> JsonReply {
    warp::reply::with_status(
        warp::reply::json(&ErrorResponse {
            message: message.to_string(),
        }),
        status,
    )
}
