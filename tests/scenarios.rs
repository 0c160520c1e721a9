use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use combobox::{
	Candidate, Combobox, ComboboxConfig, Flow, Interaction, PassEnd, ScriptHost, ScriptedComponent,
	SearchProvider, SessionStore, Value,
};
use serde_json::json;

fn fruit(query: &str) -> Result<Vec<&'static str>> {
	Ok(["apple", "avocado", "banana"]
		.into_iter()
		.filter(|name| name.starts_with(query))
		.collect())
}

/// Run one pass of a host script that only shows the combobox.
fn pass<P: SearchProvider>(
	host: &mut ScriptHost,
	combobox: &mut Combobox<P>,
	component: &mut ScriptedComponent,
) -> (PassEnd<Option<Value>>, usize) {
	let report = host
		.execute(|store| {
			let outcome = combobox.run(store, component)?;
			Ok(Flow::<Option<Value>>::from(outcome))
		})
		.expect("pass");
	(report.end, report.reruns)
}

#[test]
fn search_then_submit_returns_real_value() {
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let mut combobox = Combobox::new(ComboboxConfig::new("fruit"), fruit).expect("widget");

	component.push(Interaction::search("a"));
	pass(&mut host, &mut combobox, &mut component);
	component.push(Interaction::submit(1));
	let (end, _) = pass(&mut host, &mut combobox, &mut component);

	assert_eq!(end, PassEnd::Completed(Some(json!("avocado"))));
}

#[test]
fn labeled_candidates_return_their_values() {
	let cities = |_: &str| -> Result<Vec<Candidate>> {
		Ok(vec![("New York", 1).into(), ("Oslo", 2).into()])
	};
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let mut combobox = Combobox::new(ComboboxConfig::new("city"), cities).expect("widget");

	component.push(Interaction::search("x"));
	pass(&mut host, &mut combobox, &mut component);
	assert_eq!(
		component.last_payload().expect("payload").options.len(),
		0,
		"options appear on the render after the search"
	);
	component.push(Interaction::submit(0));
	let (end, _) = pass(&mut host, &mut combobox, &mut component);

	assert_eq!(end, PassEnd::Completed(Some(json!(1))));
	let labels: Vec<_> = component
		.last_payload()
		.expect("payload")
		.options
		.iter()
		.map(|option| option.label.clone())
		.collect();
	assert_eq!(labels, ["New York", "Oslo"]);
}

#[test]
fn rerun_on_update_settles_after_one_rerun() {
	let calls = Rc::new(Cell::new(0));
	let counter = Rc::clone(&calls);
	let search = move |query: &str| -> Result<Vec<&'static str>> {
		counter.set(counter.get() + 1);
		fruit(query)
	};
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let config = ComboboxConfig::new("fruit").with_rerun_on_update(true);
	let mut combobox = Combobox::new(config, search).expect("widget");

	component.push(Interaction::search("a"));
	let (end, reruns) = pass(&mut host, &mut combobox, &mut component);

	assert_eq!(reruns, 1);
	assert_eq!(end, PassEnd::Completed(Some(Value::Null)));
	assert_eq!(calls.get(), 1);
	let options = &component.last_payload().expect("payload").options;
	assert_eq!(options.len(), 2, "the rerun renders the fresh options");
}

#[test]
fn halt_on_update_stops_the_pass() {
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let config = ComboboxConfig::new("fruit").with_halt_on_update(true);
	let mut combobox = Combobox::new(config, fruit).expect("widget");

	component.push(Interaction::search("b"));
	let (end, reruns) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Halted);
	assert_eq!(reruns, 0);

	let (end, _) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(Value::Null)));
}

#[test]
fn reset_returns_default_and_blank_search_repopulates() {
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let config = ComboboxConfig::new("fruit")
		.with_default("none")
		.with_blank_search("")
		.with_rerun_on_update(true);
	let mut combobox = Combobox::new(config, fruit).expect("widget");

	let (end, reruns) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(json!("none"))));
	assert_eq!(reruns, 0, "the initial blank search never reruns");
	assert_eq!(host.store().get("fruit").expect("entry").options.len(), 3);

	component.push(Interaction::search("b"));
	pass(&mut host, &mut combobox, &mut component);
	component.push(Interaction::submit(0));
	let (end, _) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(json!("banana"))));

	component.push(Interaction::Reset);
	let (end, reruns) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(json!("none"))));
	assert_eq!(reruns, 0);

	let entry = host.store().get("fruit").expect("entry");
	assert_eq!(entry.result, json!("none"));
	assert_eq!(entry.search(), "");
	assert_eq!(entry.options.len(), 3);
}

#[test]
fn empty_blank_search_does_not_loop() {
	let empty = |_: &str| -> Result<Vec<Candidate>> { Ok(Vec::new()) };
	let mut host = ScriptHost::default().with_max_reruns(2);
	let mut component = ScriptedComponent::new();
	let config = ComboboxConfig::new("fruit")
		.with_blank_search("")
		.with_rerun_on_update(true);
	let mut combobox = Combobox::new(config, empty).expect("widget");

	let (end, reruns) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(Value::Null)));
	assert_eq!(reruns, 0);

	component.push(Interaction::Reset);
	let (_, reruns) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(reruns, 0);
}

#[test]
fn independent_keys_do_not_share_state() {
	let mut host = ScriptHost::default();
	let mut first_component = ScriptedComponent::new();
	let mut second_component = ScriptedComponent::new();
	let mut first = Combobox::new(ComboboxConfig::new("first"), fruit).expect("widget");
	let mut second =
		Combobox::new(ComboboxConfig::new("second").with_default("idle"), fruit).expect("widget");

	first_component.push(Interaction::search("a"));
	first_component.push(Interaction::submit(0));
	let report = host
		.execute(|store| {
			first.run(store, &mut first_component)?;
			let outcome = second.run(store, &mut second_component)?;
			Ok(Flow::<Option<Value>>::from(outcome))
		})
		.expect("pass");
	assert_eq!(report.completed(), Some(Some(json!("idle"))));

	let first_entry = host.store().get("first").expect("first");
	let second_entry = host.store().get("second").expect("second");
	assert_eq!(first_entry.search(), "a");
	assert!(second_entry.options.is_empty());
}

#[test]
fn ending_the_session_forgets_entries() {
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let mut combobox = Combobox::new(ComboboxConfig::new("fruit"), fruit).expect("widget");

	component.push(Interaction::search("a"));
	pass(&mut host, &mut combobox, &mut component);
	assert!(host.store().contains("fruit"));

	host.end_session();
	assert!(!host.store().contains("fruit"));
}

#[test]
fn return_only_on_submit_still_reports_idle_and_reset() {
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let config = ComboboxConfig::new("fruit")
		.with_default("none")
		.with_return_only_on_submit(true);
	let mut combobox = Combobox::new(config, fruit).expect("widget");

	let (end, _) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(json!("none"))));

	component
		.push_json(json!({"interaction": "search", "value": "a"}))
		.expect("search event");
	let (end, _) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(None));

	component
		.push_json(json!({"interaction": "submit", "value": 1}))
		.expect("submit event");
	let (end, _) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(json!("avocado"))));

	component
		.push_json(json!({"interaction": "reset"}))
		.expect("reset event");
	let (end, _) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(json!("none"))));
}

#[test]
fn dropped_entry_starts_over_on_the_next_pass() {
	let mut host = ScriptHost::default();
	let mut component = ScriptedComponent::new();
	let mut combobox =
		Combobox::new(ComboboxConfig::new("fruit").with_default("none"), fruit).expect("widget");

	component.push(Interaction::search("a"));
	pass(&mut host, &mut combobox, &mut component);
	component.push(Interaction::submit(0));
	let (end, _) = pass(&mut host, &mut combobox, &mut component);
	assert_eq!(end, PassEnd::Completed(Some(json!("apple"))));

	host.store_mut().remove("fruit");
	component.push(Interaction::search("b"));
	let (end, _) = pass(&mut host, &mut combobox, &mut component);

	assert_eq!(end, PassEnd::Completed(Some(json!("none"))));
	let entry = host.store().get("fruit").expect("entry");
	assert_eq!(entry.search(), "b");
	assert_eq!(entry.options.len(), 1);
}
