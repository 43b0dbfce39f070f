use log::info;
use rs_bigram_core::{BabbleInput, BigramModel, extract_ints};

/// Used when no corpus file is given on the command line.
const SAMPLE: &[&str] = &[
    "in the great green room there was a telephone and a red balloon",
    "and a picture of the cow jumping over the moon",
    "and there were three little bears sitting on chairs",
    "and two little kittens and a pair of mittens",
    "goodnight room goodnight moon goodnight cow jumping over the moon",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see training details, RUST_LOG=trace for every babble step
    env_logger::init();

    // Train from the file given as first argument, or from the sample text
    let model = match std::env::args().nth(1) {
        Some(path) => BigramModel::from_file(&path)?,
        None => {
            let mut model = BigramModel::new();
            model.train_lines(SAMPLE);
            model
        }
    };
    info!("Model holds {} bigrams", model.len());

    // Every successor of a word, at its trained frequency
    println!("After 'the': {:?}", model.possibilities("the"));

    // Membership checks only look at adjacent pairs
    let text = ["goodnight", "moon"];
    println!("{:?} could be generated: {}", text, model.check(&text));
    let text = ["moon", "goodnight", "room"];
    println!("{:?} could be generated: {}", text, model.check(&text));

    // Seeded walks of at least 8 words from 'and' to 'moon', at most 1000 steps each
    let mut input = BabbleInput::new(8, "and", "moon");
    input.max_steps = Some(1_000);
    for i in 0..5 {
        input.seed = Some(2024 + i);
        match model.babble_from(&input) {
            Ok(words) => println!("Babble {}: {}", i + 1, words.join(" ")),
            Err(e) => println!("Babble {} failed: {e}", i + 1),
        }
    }

    // A word with no successor cannot be continued
    match model.next("balloon") {
        Ok(word) => println!("Should not happen: {word}"),
        Err(e) => println!("{e}"),
    }

    // Integers embedded in text, digits glued to letters are ignored
    let lines = ["room 101, floor 3", "agent 007 drove a B52", "4th of july"];
    let ints: Vec<String> = extract_ints(&lines).iter().map(ToString::to_string).collect();
    println!("Integers in {:?}: [{}]", lines, ints.join(", "));

    Ok(())
}
