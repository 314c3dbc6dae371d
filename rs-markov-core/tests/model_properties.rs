use proptest::prelude::*;

use rs_markov_core::model::{ChainModel, FixedSource, Strategy as WalkStrategy, TextWalker, Word, collect_followers, rank_order, top_k};
use rs_markov_core::tokenizer::tokenize_lines;

fn corpus() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop::collection::vec("[a-e]{1,2}", 0..12).prop_map(|words| words.join(" ")), 0..6)
}

proptest! {
	#[test]
	fn probabilities_sum_to_one(lines in corpus()) {
		let model = ChainModel::from_lines(&lines);
		for predecessor in model.predecessors() {
			let table = model.successors(predecessor).unwrap();
			prop_assert!(!table.is_empty());
			let sum: f64 = table.iter().filter_map(Word::probability).sum();
			prop_assert!((sum - 1.0).abs() < 1e-9);
			let counted: usize = table.iter().map(Word::occurrences).sum();
			prop_assert_eq!(counted, table.total());
		}
	}

	#[test]
	fn most_probable_is_the_best_member(lines in corpus()) {
		let model = ChainModel::from_lines(&lines);
		for predecessor in model.predecessors() {
			let table = model.successors(predecessor).unwrap();
			let best = table.most_probable().unwrap();
			prop_assert!(table.get(best.token()).is_some());
			for word in table.iter() {
				prop_assert!(rank_order(best, word).is_le());
			}
		}
	}

	#[test]
	fn top_k_is_sorted_and_bounded(lines in corpus(), seed in "[a-e]{1,2}", k in 0usize..8) {
		let table = collect_followers(&lines, &seed);
		let best = top_k(&table, k);
		prop_assert!(best.len() <= k);
		prop_assert_eq!(best.len(), k.min(table.len()));
		for pair in best.windows(2) {
			prop_assert!(rank_order(pair[0], pair[1]).is_lt());
		}
	}

	#[test]
	fn top_k_matches_follower_count(lines in corpus(), seed in "[a-e]{1,2}") {
		let tokens: Vec<String> = tokenize_lines(&lines).collect();
		let followers = tokens.windows(2).filter(|pair| pair[0] == seed).count();
		prop_assert_eq!(collect_followers(&lines, &seed).total(), followers);
	}

	#[test]
	fn walks_have_requested_length(lines in corpus(), seed in "[a-e]{1,2}", k in 0usize..20, r in 0.0f64..1.0) {
		let model = ChainModel::from_lines(&lines);
		let walker = TextWalker::new(&model);
		let mut source = FixedSource::new(vec![r]);
		for strategy in [WalkStrategy::Greedy, WalkStrategy::Weighted] {
			let output = walker.walk(&seed, k, strategy, &mut source);
			prop_assert_eq!(output.len(), k.max(1));
			prop_assert_eq!(&output[0], &seed);
		}
	}
}
