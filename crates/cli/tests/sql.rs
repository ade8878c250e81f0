// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn sql_prints_where_clause_and_binds() {
    pkgq()
        .args(["sql", "stars:>500", "keyword:!ui"])
        .assert()
        .success()
        .stdout(
            "WHERE stars > $1 AND NOT ($2 ILIKE ANY(keywords))\n\
             -- $1 = 500\n\
             -- $2 = 'ui'\n",
        );
}

#[test]
fn sql_without_filters() {
    pkgq()
        .args(["sql", "swift"])
        .assert()
        .success()
        .stdout("-- terms: swift\n-- no filters\n");
}

#[test]
fn sql_offset_flag() {
    pkgq()
        .args(["sql", "type:plugin", "--offset", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WHERE product_types ? $4"));
}

#[test]
fn sql_offset_from_config() {
    let (_temp, path) = config_file("[sql]\nplaceholder_offset = 1\n");
    pkgq()
        .args(["sql", "author:apple", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WHERE repo_owner ILIKE $2"));
}

#[test]
fn sql_json_output() {
    let json = json_output(&["sql", "http", "last_commit:<=2020-07-01", "-o", "json"]);
    assert_eq!(
        json,
        serde_json::json!({
            "terms": ["http"],
            "sql": "last_commit_date <= $1",
            "binds": [{ "type": "date", "value": "2020-07-01" }],
            "offset": 0
        })
    );
}

#[test]
fn user_input_stays_out_of_sql() {
    let json = json_output(&["sql", "author:x';DROP", "-o", "json"]);
    assert_eq!(json["sql"], "repo_owner ILIKE $1");
    assert_eq!(json["binds"][0]["value"], "x';DROP");
}
