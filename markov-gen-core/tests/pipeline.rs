use std::io::Cursor;

use markov_gen_core::io::read_lines;
use markov_gen_core::model::engine::Engine;
use markov_gen_core::model::generator::{Generation, Generator};
use markov_gen_core::normalizer::Normalizer;
use markov_gen_core::{GenerationConfig, MarkovError};

const TEXT: &str = "It was the best of times, it was the worst of times,\n\
	it was the age of wisdom, it was the age of foolishness,\n\
	it was the epoch of belief, it was the epoch of incredulity,\n\
	it was the season of Light, it was the season of Darkness.\n";

fn config(order: usize, length: usize, lines: usize, seed: Option<u64>) -> GenerationConfig {
	let mut config = GenerationConfig::default();
	config.set_order(order).unwrap();
	config.set_lines(lines).unwrap();
	config.length = length;
	config.seed = seed;
	config
}

fn lines(generation: Generation) -> (u64, Vec<String>) {
	match generation {
		Generation::Lines { seed, lines } => (seed, lines),
		Generation::Dump(bytes) => panic!("unexpected dump: {bytes:?}"),
	}
}

#[test]
fn stdin_slurp_feeds_the_pipeline() {
	let input = read_lines(Cursor::new(TEXT)).unwrap();
	let generator = Generator::new(config(4, 80, 3, Some(2024))).unwrap();
	let (seed, generated) = lines(generator.run(&input).unwrap());

	assert_eq!(seed, 2024);
	assert_eq!(generated.len(), 3);
	for line in &generated {
		assert!(line.starts_with(' '));
		assert!(line.chars().count() <= 80);
		assert_eq!(line, &line.to_lowercase());
		assert!(!line.contains('\n'));
	}
}

#[test]
fn rerunning_with_the_same_seed_reproduces_every_line() {
	let generator = Generator::new(config(5, 120, 4, Some(77))).unwrap();
	let first = generator.run(TEXT.as_bytes()).unwrap();
	let second = generator.run(TEXT.as_bytes()).unwrap();
	assert_eq!(first, second);
}

#[test]
fn unseeded_runs_report_the_drawn_seed() {
	let generator = Generator::new(config(4, 60, 2, None)).unwrap();
	let (seed, generated) = lines(generator.run(TEXT.as_bytes()).unwrap());

	let replay = Generator::new(config(4, 60, 2, Some(seed))).unwrap();
	let (_, replayed) = lines(replay.run(TEXT.as_bytes()).unwrap());
	assert_eq!(generated, replayed);
}

#[test]
fn generated_text_only_uses_corpus_transitions() {
	let corpus = Normalizer::default().normalize(TEXT.as_bytes()).unwrap();
	let mut engine = Engine::build(&corpus, 3, 3).unwrap();
	let text: String = corpus.iter().collect();
	for _ in 0..10 {
		let output = engine.generate(100).unwrap();
		for window in output.windows(4) {
			let ngram: String = window.iter().collect();
			assert!(text.contains(&ngram), "{ngram:?} never occurs in the corpus");
		}
	}
}

#[test]
fn min_line_and_ascii_shape_the_dump() {
	let mut config = config(6, 100, 1, Some(0));
	config.min_line = Some(10);
	config.ascii_only = true;
	config.dump_input = true;
	let generator = Generator::new(config).unwrap();

	let input = "abc\nFifteen chars!!\nxy\nTwenty characters ok\n";
	assert_eq!(
		generator.run(input.as_bytes()).unwrap(),
		Generation::Dump(b"fifteen chars!! twenty characters ok".to_vec())
	);
}

#[test]
fn order_larger_than_corpus_is_reported() {
	let generator = Generator::new(config(400, 100, 1, Some(1))).unwrap();
	assert!(matches!(
		generator.run(TEXT.as_bytes()),
		Err(MarkovError::InsufficientCorpus { order: 400, .. })
	));
}
