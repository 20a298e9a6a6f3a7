use pretty_assertions::assert_eq;

use super::*;

fn snapshot(defs: &[(&str, &str)]) -> Snapshot {
	Snapshot::from_definitions(
		defs.iter()
			.map(|(id, regex)| Definition::new(*id, *id, "u", *regex))
			.collect(),
	)
}

#[test]
fn patterns_follow_registry_order() {
	let snap = snapshot(&[("b", "b"), ("a", "a"), ("c", "c")]);
	let ids: Vec<_> = snap.patterns().map(|(def, _)| def.id.as_str()).collect();
	assert_eq!(ids, ["b", "a", "c"]);
}

#[test]
fn empty_patterns_are_not_compiled() {
	let snap = snapshot(&[("silent", ""), ("loud", "loud")]);
	let ids: Vec<_> = snap.patterns().map(|(def, _)| def.id.as_str()).collect();
	assert_eq!(ids, ["loud"]);
	assert!(snap.compile_failures().is_empty());
}

#[test]
fn invalid_patterns_are_reported_and_skipped() {
	let snap = snapshot(&[("broken", "(unclosed"), ("ok", "ok")]);

	let ids: Vec<_> = snap.patterns().map(|(def, _)| def.id.as_str()).collect();
	assert_eq!(ids, ["ok"]);

	let failures = snap.compile_failures();
	assert_eq!(failures.len(), 1);
	assert_eq!(failures[0].id, "broken");
	assert!(failures[0].to_string().contains("(unclosed"));
}

#[test]
fn compiled_patterns_are_shared_across_readers() {
	let snap = snapshot(&[("a", "a+")]);
	let first = snap.patterns().next().map(|(_, re)| re as *const Regex);
	let second = snap.patterns().next().map(|(_, re)| re as *const Regex);
	assert_eq!(first, second);
}
