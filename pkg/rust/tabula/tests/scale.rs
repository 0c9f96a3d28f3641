// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::{Duration, Instant};

use tabula::{Column, ColumnData, JoinTable, Table, Value};
use tabula_testing::logging;
use tracing::info;

const CUSTOMERS: usize = 1_000;
const ORDERS: usize = 50_000;
const FILLER_COLUMNS: usize = 5;
const REGIONS: i32 = 49;

fn filler(prefix: &str, rows: usize) -> impl Iterator<Item = Column> + '_ {
	(0..FILLER_COLUMNS).map(move |i| Column::new(format!("{}_fill{}", prefix, i), ColumnData::int4(vec![1; rows])))
}

fn region_of(customer: i32) -> i32 {
	(customer * 31) % REGIONS
}

fn customers() -> Table {
	let ids: Vec<i32> = (0..CUSTOMERS as i32).collect();
	let regions: Vec<i32> = ids.iter().map(|&id| region_of(id)).collect();

	let mut columns = vec![Column::new("customerId", ColumnData::int4(ids)), Column::new("region", ColumnData::int4(regions))];
	columns.extend(filler("customer", CUSTOMERS));
	Table::new(columns).unwrap()
}

fn orders() -> Table {
	let ids: Vec<i64> = (0..ORDERS as i64).collect();
	let customers: Vec<i32> = (0..ORDERS).map(|i| ((i * 7_919) % CUSTOMERS) as i32).collect();

	let mut columns = vec![Column::new("orderId", ColumnData::int8(ids)), Column::new("customerId", ColumnData::int4(customers))];
	columns.extend(filler("order", ORDERS));
	Table::new(columns).unwrap()
}

#[test]
fn test_orders_with_customers() {
	logging::init();
	let orders = orders();
	let customers = customers();

	let started = Instant::now();
	let result = orders.join_on(["customerId"]).with(&customers).left_outer().join().unwrap();
	let elapsed = started.elapsed();
	info!(?elapsed, rows = result.row_count(), "joined orders with customers");

	assert_eq!(result.row_count(), ORDERS);
	assert_eq!(result.column_count(), 2 + FILLER_COLUMNS + 1 + FILLER_COLUMNS);

	let customer = result.column_index("customerId").unwrap();
	let region = result.column_index("region").unwrap();
	for (i, row) in result.rows().enumerate().step_by(97) {
		assert_eq!(row[0], Value::Int8(i as i64));
		let Value::Int4(id) = row[customer] else {
			panic!("customer id missing in row {}", i);
		};
		assert_eq!(row[region], Value::Int4(region_of(id)));
	}

	assert!(elapsed < Duration::from_secs(60), "join took {:?}", elapsed);
}

#[test]
fn test_full_outer_without_matches_keeps_every_row() {
	let orders = orders();
	let customers = customers();
	let strangers = customers.filter(|row| matches!(row.get("customerId"), Some(Value::Int4(id)) if id >= CUSTOMERS as i32));
	assert_eq!(strangers.row_count(), 0);

	let result = strangers.join_on(["customerId"]).with(&orders).full_outer().join().unwrap();
	assert_eq!(result.row_count(), ORDERS);
	assert_eq!(result.column("region").map(|c| c.count_missing()), Some(ORDERS));
}
