//! Behavioural tests for decoding the pagination envelope.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use pagination::Paginated;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};

#[derive(Default, ScenarioState)]
struct World {
    body: Slot<Value>,
    decoded: Slot<Result<Paginated<Value>, String>>,
}

impl World {
    fn page(&self) -> Paginated<Value> {
        self.decoded
            .get()
            .expect("envelope should be decoded")
            .expect("envelope should be valid")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a list response with {count:u64} records on page {page:u64} of {pages:u64}")]
fn a_list_response(world: &World, count: u64, page: u64, pages: u64) {
    let data = (0..count)
        .rev()
        .map(|id| json!({ "id": id, "city": format!("City {id}") }))
        .collect::<Vec<_>>();
    world.body.set(json!({
        "data": data,
        "meta": {
            "total": count * pages,
            "page": page,
            "pageSize": count,
            "totalPages": pages,
        },
    }));
}

#[given("a list response reporting {pages:u64} pages for {total:u64} records of {size:u64}")]
fn a_list_response_with_inconsistent_meta(world: &World, pages: u64, total: u64, size: u64) {
    world.body.set(json!({
        "data": [],
        "meta": { "total": total, "page": 1, "pageSize": size, "totalPages": pages },
    }));
}

#[given("a list response without metadata")]
fn a_list_response_without_metadata(world: &World) {
    world.body.set(json!({ "data": [] }));
}

#[when("the envelope is decoded")]
fn the_envelope_is_decoded(world: &World) {
    let body = world.body.get().expect("body should be set");
    let decoded = serde_json::from_value::<Paginated<Value>>(body).map_err(|err| err.to_string());
    world.decoded.set(decoded);
}

#[then("decoding succeeds")]
fn decoding_succeeds(world: &World) {
    let decoded = world.decoded.get().expect("envelope should be decoded");
    assert!(decoded.is_ok(), "expected success, got: {decoded:?}");
}

#[then("decoding fails")]
fn decoding_fails(world: &World) {
    let decoded = world.decoded.get().expect("envelope should be decoded");
    assert!(decoded.is_err(), "expected failure, got: {decoded:?}");
}

#[then("the records keep server order")]
fn the_records_keep_server_order(world: &World) {
    let ids = world
        .page()
        .data()
        .iter()
        .map(|record| record["id"].as_u64().expect("numeric id"))
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 0]);
}

#[then("the metadata reports page {page:u64} of {pages:u64}")]
fn the_metadata_reports_page(world: &World, page: u64, pages: u64) {
    let decoded = world.page();
    assert_eq!(decoded.meta().page, page);
    assert_eq!(decoded.meta().total_pages, pages);
    assert!(decoded.has_next_page());
}

#[then("the metadata is flagged as inconsistent")]
fn the_metadata_is_flagged_as_inconsistent(world: &World) {
    assert!(!world.page().meta().is_consistent());
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "A server envelope decodes verbatim"
)]
fn a_server_envelope_decodes_verbatim(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Inconsistent metadata is accepted unchanged"
)]
fn inconsistent_metadata_is_accepted_unchanged(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "An envelope without metadata is rejected"
)]
fn an_envelope_without_metadata_is_rejected(world: World) {
    let _ = world;
}
