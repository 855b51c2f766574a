mod common;

use std::fs;

use common::at;
use oneleft::{
    storage::{
        decode_transactions, encode_transactions, JsonFileStore, KeyValueStore, LedgerStore,
        KEY_TRANSACTIONS,
    },
    BalanceLedger, LedgerState,
};
use tempfile::tempdir;

fn sample_state() -> LedgerState {
    let state = BalanceLedger::start_limit(250.0, at(0)).unwrap();
    let state = BalanceLedger::record_spend(&state, 19.99, at(60)).unwrap().state;
    BalanceLedger::record_spend(&state, 300.0, at(120)).unwrap().state
}

#[test]
fn json_store_round_trips_snapshot() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("state.json");
    let state = sample_state();

    let mut store = LedgerStore::new(JsonFileStore::open(&path).unwrap());
    store.save(&state).unwrap();
    store.save_theme(3).unwrap();

    let reopened = LedgerStore::new(JsonFileStore::open(&path).unwrap());
    let snapshot = reopened.load();
    assert_eq!(snapshot.state, state);
    assert_eq!(snapshot.theme_index, 3);
}

#[test]
fn persisted_file_uses_flat_preference_keys() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("state.json");
    let mut store = LedgerStore::new(JsonFileStore::open(&path).unwrap());
    store.save(&sample_state()).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = raw.as_object().expect("json object");
    for key in ["balance", "initial_limit", "limit_start_date", "transactions"] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(raw["balance"], serde_json::json!(0.0));
    assert_eq!(raw["limit_start_date"], serde_json::json!(at(0).timestamp_millis()));
    let encoded = raw["transactions"].as_str().unwrap();
    assert_eq!(encoded.split(';').count(), 2);
}

#[test]
fn hand_edited_transactions_lose_only_bad_records() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("state.json");
    let mut store = LedgerStore::new(JsonFileStore::open(&path).unwrap());
    store.save(&sample_state()).unwrap();

    let mut raw = JsonFileStore::open(&path).unwrap();
    let encoded = raw.get_string(KEY_TRANSACTIONS).unwrap();
    raw.set_string(KEY_TRANSACTIONS, &format!("{encoded};garbage;1,2,3"));
    raw.flush().unwrap();

    let state = LedgerStore::new(JsonFileStore::open(&path).unwrap()).load().state;
    assert_eq!(state.transactions, sample_state().transactions);
}

#[test]
fn codec_round_trip_preserves_order() {
    let state = sample_state();
    let decoded = decode_transactions(&encode_transactions(&state.transactions));
    assert_eq!(decoded, state.transactions);
}
