use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};

use serde::Deserialize;
use markov_gen_core::model::error::ChainError;
use markov_gen_core::model::generation_input::{GenerationInput, StartSeed};
use markov_gen_core::model::generator::Generator;

/// Folder holding the `.txt` corpus files loaded at startup.
const DATA_FOLDER: &str = "./data";

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	word_count: Option<usize>, // -> overrides min_words / max_words
	min_words: Option<usize>,
	max_words: Option<usize>,
	seed: Option<String> // -> custom starting word, random starter if absent
}

impl GenerateParams {
	/// Builds the generation input from the query, defaults for missing values.
	fn generation_input(&self) -> Result<GenerationInput, ChainError> {
		let mut input = GenerationInput::default();
		let (default_min, default_max) = input.word_range();

		match self.word_count {
			Some(n) => input.set_word_range(n, n)?,
			None => input.set_word_range(
				self.min_words.unwrap_or(default_min),
				self.max_words.unwrap_or(default_max),
			)?,
		}

		input.start_seed = match &self.seed {
			Some(s) if !s.trim().is_empty() => StartSeed::Custom(s.trim().to_owned()),
			_ => StartSeed::Random,
		};

		Ok(input)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one sentence from the shared chain model.
/// An unknown seed word is not an error: the sentence is empty.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Generator>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};

	let mut rng = rand::rng();
	match data.predict(&input, &mut rng) {
		Ok(prediction) => HttpResponse::Ok().json(prediction),
		Err(e) => {
			error!("Generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/corpora`
///
/// Lists the corpus names the model was built from, one per line.
#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Generator>) -> impl Responder {
	HttpResponse::Ok().body(data.get_corpus_names().join("\n"))
}

/// HTTP GET endpoint `/v1/starters`
///
/// Returns the sentence starters as a JSON array.
#[get("/v1/starters")]
async fn get_starters(data: web::Data<Generator>) -> impl Responder {
	HttpResponse::Ok().json(data.model().starters())
}

/// Main entry point for the server.
///
/// Builds the chain model once from every `.txt` file of `./data` and starts
/// an Actix-web HTTP server. The model is read-only, so it is shared without lock.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Log verbosity is controlled with `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let generator = match Generator::new(DATA_FOLDER) {
		Ok(g) => g,
		Err(e) => {
			error!("Failed to load corpus from {DATA_FOLDER}: {e}");
			return Err(std::io::Error::other(e.to_string()));
		}
	};
	info!("Serving {} corpus file(s)", generator.get_corpus_names().len());
	let shared_generator = web::Data::new(generator);

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(shared_generator.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(get_starters)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params(word_count: Option<usize>, min: Option<usize>, max: Option<usize>, seed: Option<&str>) -> GenerateParams {
		GenerateParams {
			word_count,
			min_words: min,
			max_words: max,
			seed: seed.map(str::to_owned),
		}
	}

	#[test]
	fn word_count_overrides_range() {
		let input = params(Some(8), Some(1), Some(2), None).generation_input().unwrap();
		assert_eq!(input.word_range(), (8, 8));
		assert_eq!(input.start_seed, StartSeed::Random);
	}

	#[test]
	fn blank_seed_is_random() {
		let input = params(None, None, None, Some("  ")).generation_input().unwrap();
		assert_eq!(input.start_seed, StartSeed::Random);
		assert_eq!(input.word_range(), (16, 35));
	}

	#[test]
	fn seed_is_custom() {
		let input = params(None, None, None, Some("cat")).generation_input().unwrap();
		assert_eq!(input.start_seed, StartSeed::Custom("cat".to_owned()));
	}

	#[test]
	fn inverted_range_is_rejected() {
		let result = params(None, Some(20), Some(4), None).generation_input();
		assert!(matches!(result, Err(ChainError::InvalidWordRange { .. })));
	}
}
