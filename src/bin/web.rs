//! Single binary web server: in-memory bracket store driving the engine over REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set ADMIN_TOKEN to require an `x-admin-token` header when recording results.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use bracket_engine::{build_bracket, record_result, BracketError, Participant, Tournament};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

type TournamentId = Uuid;

/// Per-tournament entry: bracket data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state. The single write lock serializes every `record_result` call.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Server settings read from the environment.
#[derive(Clone, Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    admin_token: Option<String>,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            admin_token: std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct EntrantBody {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    participants: Vec<EntrantBody>,
}

#[derive(Serialize)]
struct TournamentResponse<'a> {
    id: TournamentId,
    tournament: &'a Tournament,
}

#[derive(Deserialize)]
struct RecordResultBody {
    winner_id: String,
}

#[derive(Serialize)]
struct ChampionResponse<'a> {
    champion: &'a Participant,
    runner_up: Option<&'a Participant>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match index.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_index: usize,
}

fn error_response(e: &BracketError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        BracketError::NotFound(_) => HttpResponse::NotFound().json(body),
        BracketError::AlreadyDecided(_) => HttpResponse::Conflict().json(body),
        BracketError::InvalidInput(_) | BracketError::InvalidParticipant { .. } => {
            HttpResponse::BadRequest().json(body)
        }
    }
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

/// Caller-side role check: the engine itself never authorizes.
fn is_authorized(req: &HttpRequest, config: &ServerConfig) -> bool {
    match &config.admin_token {
        None => true,
        Some(token) => req
            .headers()
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == token),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-engine",
    })
}

/// Create a tournament from an ordered entrant list (seed = position).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let participants = Participant::seeded(body.participants.into_iter().map(|e| (e.id, e.name)));
    let tournament = match build_bracket(&participants) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let id = Uuid::new_v4();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!(
        "Created tournament {} with {} participants ({} rounds)",
        id,
        participants.len(),
        tournament.rounds
    );
    let entry = g.entry(id).or_insert(TournamentEntry {
        tournament,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(TournamentResponse {
        id,
        tournament: &entry.tournament,
    })
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(TournamentResponse {
                id: path.id,
                tournament: &entry.tournament,
            })
        }
        None => no_tournament(),
    }
}

/// Record the winner of one match. A rejected result leaves the stored bracket untouched.
#[put("/api/tournaments/{id}/matches/{match_index}/winner")]
async fn api_record_result(
    req: HttpRequest,
    state: AppState,
    config: Data<ServerConfig>,
    path: Path<TournamentMatchPath>,
    body: Json<RecordResultBody>,
) -> HttpResponse {
    if !is_authorized(&req, &config) {
        return HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Not authorized" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    entry.last_activity = Instant::now();
    match record_result(&mut entry.tournament, path.match_index, &body.winner_id) {
        Ok(()) => HttpResponse::Ok().json(TournamentResponse {
            id: path.id,
            tournament: &entry.tournament,
        }),
        Err(e) => {
            log::warn!("Rejected result for {} match {}: {}", path.id, path.match_index, e);
            error_response(&e)
        }
    }
}

/// Champion and runner-up of a completed tournament (409 while still running).
#[get("/api/tournaments/{id}/champion")]
async fn api_champion(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    match entry.tournament.champion() {
        Some(champion) => HttpResponse::Ok().json(ChampionResponse {
            champion,
            runner_up: entry.tournament.runner_up(),
        }),
        None => HttpResponse::Conflict()
            .json(serde_json::json!({ "error": "Tournament is not completed" })),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);
    if config.admin_token.is_none() {
        log::warn!("ADMIN_TOKEN not set; result recording is open to every client");
    }

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    let bind = (config.host.clone(), config.port);
    let config = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_record_result)
            .service(api_champion)
    })
    .bind(bind)?
    .run()
    .await
}
