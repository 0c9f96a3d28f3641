// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula::{JoinTable, Table, Value};
use tabula_testing::{fixture, logging};

fn animal_names() -> Table {
	fixture::table(
		"Animal:utf8,Name:utf8
		Pig,Bob
		Pig,James
		Horse,David
		Goat,Samantha
		Tigon,Rudhrani
		Rabbit,Taylor",
	)
}

fn animal_feed() -> Table {
	fixture::table(
		"Animal:utf8,Feed:utf8
		Pig,Mush
		Horse,Hay
		Goat,Anything
		Guanaco,Grass
		Monkey,Banana",
	)
}

fn dogs() -> Table {
	fixture::table(
		"Dog Name:utf8,Good:bool,Age:int4
		Spot,true,3
		Fido,true,5
		Rex,false,2
		Lassie,true,9
		Cujo,false,4
		Beethoven,true,6
		Hooch,false,7
		Marley,false,1",
	)
}

#[test]
fn test_inner_join_duplicate_left_keys() {
	logging::init();
	let names = animal_names();
	let feed = animal_feed();

	let pigs = names.filter(|row| row.get("Animal") == Some(Value::utf8("Pig")));
	let result = pigs.join_on(["Animal"]).with(&feed).join().unwrap();

	assert_eq!(result.row_count(), 2);
	assert_eq!(result.column_count(), 3);
	assert_eq!(result.row(0), vec![Value::utf8("Pig"), Value::utf8("Bob"), Value::utf8("Mush")]);
	assert_eq!(result.row(1), vec![Value::utf8("Pig"), Value::utf8("James"), Value::utf8("Mush")]);
}

#[test]
fn test_left_outer_keeps_unmatched_left_rows() {
	logging::init();
	let names = animal_names();
	let feed = animal_feed();

	let result = names.join_on(["Animal"]).with(&feed).left_outer().join().unwrap();

	assert_eq!(result.column_names(), vec!["Animal", "Name", "Feed"]);
	assert_eq!(result.row_count(), 6);
	assert_eq!(result.row(0)[2], Value::utf8("Mush"));
	assert_eq!(result.row(1)[2], Value::utf8("Mush"));
	assert_eq!(result.row(4), vec![Value::utf8("Tigon"), Value::utf8("Rudhrani"), Value::Undefined]);
	assert_eq!(result.row(5), vec![Value::utf8("Rabbit"), Value::utf8("Taylor"), Value::Undefined]);
}

#[test]
fn test_full_outer_partial_overlap() {
	logging::init();
	let names = animal_names();
	let feed = animal_feed();

	let result = names.join_on(["Animal"]).with(&feed).full_outer().join().unwrap();

	// 4 matched, 2 left only, 2 right only
	assert_eq!(result.row_count(), 8);
	assert_eq!(result.row(4), vec![Value::utf8("Tigon"), Value::utf8("Rudhrani"), Value::Undefined]);
	assert_eq!(result.row(6), vec![Value::utf8("Guanaco"), Value::Undefined, Value::utf8("Grass")]);
	assert_eq!(result.row(7), vec![Value::utf8("Monkey"), Value::Undefined, Value::utf8("Banana")]);
}

#[test]
fn test_right_outer_follows_right_order() {
	logging::init();
	let names = animal_names();
	let feed = animal_feed();

	let result = names.join_on(["Animal"]).with(&feed).right_outer().join().unwrap();

	assert_eq!(result.column_names(), vec!["Animal", "Name", "Feed"]);
	let animals: Vec<Value> = result.rows().map(|row| row[0].clone()).collect();
	assert_eq!(
		animals,
		["Pig", "Pig", "Horse", "Goat", "Guanaco", "Monkey"].into_iter().map(Value::utf8).collect::<Vec<_>>()
	);
	assert_eq!(result.row(4)[1], Value::Undefined);
}

#[test]
fn test_self_join_on_boolean() {
	logging::init();
	let dogs = dogs();

	let result = dogs.join_on(["Good"]).with(&dogs).allow_duplicate_column_names(true).join().unwrap();

	assert_eq!(result.row_count(), 32);
	assert_eq!(result.column_names(), vec!["Dog Name", "Good", "Age", "T2.Dog Name", "T2.Age"]);
}

#[test]
fn test_chained_full_outer_on_name() {
	logging::init();
	let t1 = fixture::table(
		"ID:int4,Name:utf8,Price:float8
		1,Apple,1.0
		2,Pear,2.0",
	);
	let t2 = fixture::table(
		"ID:int4,Name:utf8,Price:float8
		3,Pear,2.5
		4,Plum,3.0",
	);
	let t3 = fixture::table(
		"ID:int4,Name:utf8,Price:float8
		5,Plum,3.5
		6,Fig,4.0",
	);

	let result = t1
		.join_on(["Name"])
		.with(&t2)
		.with(&t3)
		.full_outer()
		.allow_duplicate_column_names(true)
		.join()
		.unwrap();

	assert_eq!(result.column_names(), vec!["ID", "Name", "Price", "T2.ID", "T2.Price", "T3.ID", "T3.Price"]);
	// Apple, Pear, Plum, Fig
	assert_eq!(result.row_count(), 4);
	let names: Vec<Value> = result.rows().map(|row| row[1].clone()).collect();
	assert_eq!(names, ["Apple", "Pear", "Plum", "Fig"].into_iter().map(Value::utf8).collect::<Vec<_>>());
	assert_eq!(
		result.row(2),
		vec![
			Value::Undefined,
			Value::utf8("Plum"),
			Value::Undefined,
			Value::Int4(4),
			Value::float8(3.0),
			Value::Int4(5),
			Value::float8(3.5)
		]
	);
}

#[test]
fn test_empty_left_table() {
	logging::init();
	let empty = fixture::table("Animal:utf8,Name:utf8");
	let feed = animal_feed();

	let result = empty.join_on(["Animal"]).with(&feed).join().unwrap();

	assert_eq!(result.row_count(), 0);
	assert_eq!(result.column_names(), vec!["Animal", "Name", "Feed"]);
}
