use anyhow::Result;
use combobox::dispatch::{DispatchFlags, dispatch};
use combobox::reconcile::reconcile;
use combobox::{Candidate, ComboboxConfig, Interaction, SessionEntry, Value};
use proptest::prelude::*;
use serde_json::json;

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
	prop_oneof![
		"[a-z]{0,8}".prop_map(Candidate::from),
		any::<i64>().prop_map(|n| Candidate::from(json!(n))),
		("[A-Z][a-z]{0,6}", any::<i32>()).prop_map(|(label, n)| Candidate::from((label, n))),
	]
}

proptest! {
	#[test]
	fn options_line_up_with_real_values(
		batches in prop::collection::vec(prop::collection::vec(candidate_strategy(), 0..12), 1..6),
	) {
		let mut entry = SessionEntry::new(Value::Null);
		for (round, batch) in batches.into_iter().enumerate() {
			let expected: Vec<Value> = batch.iter().cloned().map(Candidate::into_value).collect();
			let mut search = move |_: &str| -> Result<Vec<Candidate>> { Ok(batch.clone()) };
			dispatch(&mut entry, &mut search, &format!("q{round}"), DispatchFlags::default())
				.expect("dispatch");

			prop_assert!(entry.is_consistent());
			prop_assert_eq!(entry.options.len(), entry.real_values().len());
			for (index, option) in entry.options.iter().enumerate() {
				prop_assert_eq!(option.value, index);
			}
			prop_assert_eq!(entry.real_values(), expected.as_slice());
		}
	}

	#[test]
	fn search_runs_once_per_query_change(queries in prop::collection::vec("[ab]{0,2}", 1..20)) {
		let mut calls = 0usize;
		let mut entry = SessionEntry::new(Value::Null);
		{
			let mut search = |query: &str| -> Result<Vec<String>> {
				calls += 1;
				Ok(vec![query.to_string()])
			};
			for query in &queries {
				dispatch(&mut entry, &mut search, query, DispatchFlags::default()).expect("dispatch");
			}
		}

		let mut changes = 1;
		for pair in queries.windows(2) {
			if pair[0] != pair[1] {
				changes += 1;
			}
		}
		prop_assert_eq!(calls, changes);
		prop_assert_eq!(entry.search(), queries.last().map(String::as_str).unwrap_or_default());
	}

	#[test]
	fn submit_returns_the_indexed_real_value(
		batch in prop::collection::vec(candidate_strategy(), 1..10),
		pick in any::<prop::sample::Index>(),
	) {
		let config = ComboboxConfig::new("prop");
		let values: Vec<Value> = batch.iter().cloned().map(Candidate::into_value).collect();
		let mut search = move |_: &str| -> Result<Vec<Candidate>> { Ok(batch.clone()) };

		let entry = reconcile(
			SessionEntry::new(Value::Null),
			Some(&Interaction::search("x")),
			&config,
			&mut search,
		)
		.expect("search")
		.entry;

		let index = pick.index(values.len());
		let transition = reconcile(entry, Some(&Interaction::submit(index)), &config, &mut search)
			.expect("submit");
		prop_assert_eq!(transition.output, Some(values[index].clone()));
		prop_assert_eq!(transition.entry.result, values[index].clone());
	}
}
