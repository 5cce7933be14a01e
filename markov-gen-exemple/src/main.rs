use markov_gen_core::model::generation_input::StartSeed;
use markov_gen_core::model::generator::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Verbosity is controlled with RUST_LOG (ex. RUST_LOG=debug)
    env_logger::init();

    // Corpus file (or directory of .txt files), "test.txt" by default
    let corpus_path = std::env::args().nth(1).unwrap_or_else(|| "test.txt".to_owned());
    let generator = Generator::new(&corpus_path)?;

    // Create a generation input with default values:
    // 11 sentences, each between 16 and 35 words (inclusive)
    let mut input = generator.make_generation_input();

    // Start seed can be set to
    // 'Random' to pick one of the sentence starters found in the corpus
    // 'Custom' to start from a given word (empty output if the word is unknown)
    input.start_seed = StartSeed::Random;

    // Attempting to set an inverted range
    match input.set_word_range(35, 16) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    let mut rng = rand::rng();
    for sentence in generator.predict_many(&input, &mut rng)? {
        println!("{sentence}");
    }

    // A seeded sentence, if the corpus knows the word
    input.start_seed = StartSeed::Custom("the".to_owned());
    let prediction = generator.predict(&input, &mut rng)?;
    if prediction.sentence.is_empty() {
        println!("No sentence can start with 'the'");
    } else {
        println!("{} ({} words requested)", prediction.sentence, prediction.word_count);
    }

    Ok(())
}
