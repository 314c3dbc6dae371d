use std::path::{Path, PathBuf};

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info};
use serde::Deserialize;

use rs_markov_core::io::{list_files, load_corpus, normalize_folder};
use rs_markov_core::model::{Query, Strategy, ThreadSource};

/// Extension of corpus files in the data folder
const CORPUS_EXTENSION: &str = "txt";

/// Default number of words for both endpoints
const DEFAULT_K: i64 = 10;

/// Largest number of words a single request may ask for
const MAX_K: i64 = 10_000;

/// Server configuration, read from the command line
#[derive(Parser, Debug)]
#[command(version, about = "HTTP server for word-level Markov chain queries")]
struct Config {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Folder holding the `.txt` corpora
	#[arg(long, default_value = "./data")]
	data: String,
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	corpus: String,
	seed: String,
	k: Option<i64>,
	mode: Option<String> // "all" (default) or "one"
}

/// Struct representing query parameters for the `/v1/top_k` endpoint
#[derive(Deserialize)]
struct TopKParams {
	corpus: String,
	seed: String,
	k: Option<i64>
}

struct SharedData {
	data_folder: PathBuf
}

impl GenerateParams {
	/// Determines the walk strategy for generation.
	fn strategy(&self) -> Result<Strategy, String> {
		match &self.mode {
			None => Ok(Strategy::Weighted),
			Some(mode) => mode.parse().map_err(|e: rs_markov_core::Error| e.to_string()),
		}
	}
}

/// Resolves the requested number of words, refusing oversized requests.
fn requested_k(k: Option<i64>) -> Result<i64, String> {
	match k.unwrap_or(DEFAULT_K) {
		k if k > MAX_K => Err(format!("k must be at most {}", MAX_K)),
		k => Ok(k),
	}
}

impl SharedData {
	/// Resolves a corpus name to a file of the data folder.
	///
	/// Names are plain file stems: separators and parent references are refused.
	fn corpus_path(&self, name: &str) -> Result<PathBuf, HttpResponse> {
		if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
			return Err(HttpResponse::BadRequest().body("Invalid corpus name"));
		}
		let path = self.data_folder.join(format!("{}.{}", name, CORPUS_EXTENSION));
		if !path.is_file() {
			return Err(HttpResponse::NotFound().body(format!("Corpus {} not found", name)));
		}
		Ok(path)
	}
}

/// Reads the corpus and answers the query on the blocking thread pool.
///
/// The model only lives for the duration of the request.
async fn run_query(path: PathBuf, query: Query) -> Result<Vec<String>, HttpResponse> {
	web::block(move || query.run(load_corpus(&path), &mut ThreadSource::default()))
		.await
		.map_err(|e| {
			error!("Query failed: {}", e);
			HttpResponse::InternalServerError().body("Query failed")
		})
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a sequence of `k` words from `seed` using the named corpus.
/// Returns the generated line as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let strategy = match query.strategy() {
		Ok(s) => s,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};
	let k = match requested_k(query.k) {
		Ok(k) => k,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};
	let path = match data.corpus_path(&query.corpus) {
		Ok(p) => p,
		Err(response) => return response
	};

	match run_query(path, Query::generate(&query.seed, k, strategy)).await {
		Ok(lines) => HttpResponse::Ok().body(lines.join("\n")),
		Err(response) => response,
	}
}

/// HTTP GET endpoint `/v1/top_k`
///
/// Lists the `k` most probable words following `seed`, one per line.
#[get("/v1/top_k")]
async fn get_top_k(data: web::Data<SharedData>, query: web::Query<TopKParams>) -> impl Responder {
	let k = match requested_k(query.k) {
		Ok(k) => k,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};
	let path = match data.corpus_path(&query.corpus) {
		Ok(p) => p,
		Err(response) => return response
	};

	match run_query(path, Query::top_k(&query.seed, k)).await {
		Ok(lines) => HttpResponse::Ok().body(lines.join("\n")),
		Err(response) => response,
	}
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<SharedData>) -> impl Responder {
	match list_files(&data.data_folder, CORPUS_EXTENSION) {
		Ok(files) => HttpResponse::Ok().body(files.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora")
	}
}

/// Registers every endpoint on an app.
fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_top_k)
		.service(get_corpora);
}

fn shared_data(folder: &Path) -> web::Data<SharedData> {
	web::Data::new(SharedData { data_folder: folder.to_owned() })
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server answering generation and top-K
/// queries over the corpora of the data folder.
///
/// # Notes
/// - No model is kept between requests: each one reads its corpus.
/// - Log level is read from `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();
	let folder = normalize_folder(&config.data);
	info!("Serving corpora from {}", folder.display());
	let shared = shared_data(&folder);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(shared.clone())
			.configure(configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::{test, App};

	fn corpus_folder() -> tempfile::TempDir {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("abc.txt"), "a b a b a c\n").unwrap();
		std::fs::write(dir.path().join("other.txt"), "x y\n").unwrap();
		dir
	}

	async fn get(folder: &Path, uri: &str) -> (StatusCode, String) {
		let app = test::init_service(App::new().app_data(shared_data(folder)).configure(configure)).await;
		let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
		let status = response.status();
		let body = test::read_body(response).await;
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	#[actix_web::test]
	async fn generates_greedy_line() {
		let dir = corpus_folder();
		let (status, body) = get(dir.path(), "/v1/generate?corpus=abc&seed=a&k=4&mode=one").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, "a b a b");
	}

	#[actix_web::test]
	async fn lists_top_k() {
		let dir = corpus_folder();
		let (status, body) = get(dir.path(), "/v1/top_k?corpus=abc&seed=a&k=2").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, "b\nc");
	}

	#[actix_web::test]
	async fn lists_corpora() {
		let dir = corpus_folder();
		let (status, body) = get(dir.path(), "/v1/corpora").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, "abc\nother");
	}

	#[actix_web::test]
	async fn rejects_bad_requests() {
		let dir = corpus_folder();
		let (status, _) = get(dir.path(), "/v1/generate?corpus=abc&seed=a&mode=many").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		let (status, _) = get(dir.path(), "/v1/top_k?corpus=..%2Fabc&seed=a").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		let (status, _) = get(dir.path(), "/v1/top_k?corpus=missing&seed=a").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}

	#[actix_web::test]
	async fn rejects_oversized_k() {
		let dir = corpus_folder();
		let (status, body) = get(dir.path(), "/v1/generate?corpus=abc&seed=a&k=10000000000&mode=one").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "k must be at most 10000");
		let (status, _) = get(dir.path(), "/v1/top_k?corpus=abc&seed=a&k=10001").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		let (status, body) = get(dir.path(), "/v1/generate?corpus=abc&seed=a&k=10000&mode=one").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.split(' ').count(), 10_000);
	}
}
