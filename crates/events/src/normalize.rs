//! Canonicalizes the backend's list envelopes.
//!
//! The events API has shipped the same list under three different shapes: a
//! bare JSON array, a flat `{ events, pagination }` object, and the current
//! `{ success, data: { events, pagination } }` envelope. Everything downstream
//! assumes the last shape, so raw bodies pass through here exactly once,
//! before any typed decoding.

use serde_json::{Map, Value};

/// Rewrites an events list body into the canonical
/// `{ success, data: { events, pagination } }` envelope.
///
/// Recognized shapes, checked in order:
/// 1. a bare array of events,
/// 2. an object with an `events` key and no `success` key,
/// 3. an object with a `data` key holding an `events` array.
///
/// Anything else is returned untouched. Running the output through again is a
/// no-op. Every event in a recognized body gets a string `id`, preferring
/// `id`, then `_id`, then the empty string.
pub fn normalize_event_list_response(raw: Value) -> Value {
    normalize_list_response(raw, "events")
}

/// Gallery counterpart of [`normalize_event_list_response`]; the list key is
/// `images` instead of `events`.
pub fn normalize_gallery_list_response(raw: Value) -> Value {
    normalize_list_response(raw, "images")
}

/// Unwraps a single-event body into the bare event object with a canonical
/// `id`. Accepts the event directly, `{ success, data: <event> }`, and
/// `{ success, data: { event } }`.
pub fn normalize_event_detail_response(raw: Value) -> Value {
    normalize_detail_response(raw, "event")
}

/// Single-image counterpart of [`normalize_event_detail_response`].
pub fn normalize_gallery_image_response(raw: Value) -> Value {
    normalize_detail_response(raw, "image")
}

fn normalize_detail_response(raw: Value, item_key: &str) -> Value {
    let mut body = match raw {
        Value::Object(body) => body,
        other => return other,
    };

    match body.remove("data") {
        None | Some(Value::Null) => with_canonical_id(Value::Object(body)),
        Some(Value::Object(mut data)) => match data.remove(item_key) {
            Some(item) if !item.is_null() => with_canonical_id(item),
            _ => with_canonical_id(Value::Object(data)),
        },
        Some(other) => other,
    }
}

fn normalize_list_response(raw: Value, list_key: &str) -> Value {
    let mut body = match raw {
        Value::Array(items) => return envelope(true, items, None, list_key),
        Value::Object(body) => body,
        other => return other,
    };

    if body.contains_key(list_key) && !body.contains_key("success") {
        let items = take_items(&mut body, list_key);
        let pagination = body.remove("pagination");
        return envelope(true, items, pagination, list_key);
    }

    let has_nested_list = body
        .get("data")
        .and_then(Value::as_object)
        .is_some_and(|data| data.get(list_key).is_some_and(Value::is_array));
    if has_nested_list {
        let success = body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(true);
        let mut data = match body.remove("data") {
            Some(Value::Object(data)) => data,
            _ => Map::new(),
        };
        let items = take_items(&mut data, list_key);
        let pagination = data.remove("pagination");
        return envelope(success, items, pagination, list_key);
    }

    Value::Object(body)
}

fn take_items(body: &mut Map<String, Value>, list_key: &str) -> Vec<Value> {
    match body.remove(list_key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn envelope(
    success: bool,
    items: Vec<Value>,
    pagination: Option<Value>,
    list_key: &str,
) -> Value {
    let items: Vec<Value> = items.into_iter().map(with_canonical_id).collect();
    let pagination = match pagination {
        Some(pagination @ Value::Object(_)) => pagination,
        _ => synthesized_pagination(items.len()),
    };

    let mut data = Map::new();
    data.insert(list_key.to_string(), Value::Array(items));
    data.insert("pagination".to_string(), pagination);

    let mut out = Map::new();
    out.insert("success".to_string(), Value::Bool(success));
    out.insert("data".to_string(), Value::Object(data));
    Value::Object(out)
}

fn with_canonical_id(item: Value) -> Value {
    let Value::Object(mut item) = item else {
        return item;
    };
    let id = canonical_id(&item);
    item.insert("id".to_string(), id);
    Value::Object(item)
}

/// `id` wins over `_id`; a missing or null value falls through. Numeric ids
/// are stringified so the typed model stays uniform.
fn canonical_id(item: &Map<String, Value>) -> Value {
    for key in ["id", "_id"] {
        match item.get(key) {
            Some(Value::String(id)) => return Value::String(id.clone()),
            Some(Value::Number(id)) => return Value::String(id.to_string()),
            _ => {}
        }
    }
    Value::String(String::new())
}

/// Pagination reported for a body that carried none of its own: one page
/// holding the whole list.
fn synthesized_pagination(len: usize) -> Value {
    let mut pagination = Map::new();
    pagination.insert("page".to_string(), Value::from(1));
    pagination.insert("limit".to_string(), Value::from(len));
    pagination.insert("total".to_string(), Value::from(len));
    pagination.insert("totalPages".to_string(), Value::from(1));
    Value::Object(pagination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical(events: Value, pagination: Value) -> Value {
        json!({ "success": true, "data": { "events": events, "pagination": pagination } })
    }

    #[test]
    fn bare_array_gets_enveloped() {
        let raw = json!([
            { "id": "a", "title": "Hackathon" },
            { "id": "b", "title": "BBQ" },
        ]);

        let normalized = normalize_event_list_response(raw);

        assert_eq!(
            normalized,
            canonical(
                json!([
                    { "id": "a", "title": "Hackathon" },
                    { "id": "b", "title": "BBQ" },
                ]),
                json!({ "page": 1, "limit": 2, "total": 2, "totalPages": 1 }),
            )
        );
    }

    #[test]
    fn flat_object_keeps_its_pagination() {
        let raw = json!({
            "events": [{ "id": "a" }],
            "pagination": { "page": 2, "limit": 1, "total": 9, "totalPages": 9 },
        });

        let normalized = normalize_event_list_response(raw);

        assert_eq!(
            normalized,
            canonical(
                json!([{ "id": "a" }]),
                json!({ "page": 2, "limit": 1, "total": 9, "totalPages": 9 }),
            )
        );
    }

    #[test]
    fn canonical_input_is_a_fixed_point() {
        let raw = canonical(
            json!([{ "id": "a", "title": "AGM" }]),
            json!({ "page": 1, "limit": 10, "total": 1, "totalPages": 1 }),
        );

        assert_eq!(normalize_event_list_response(raw.clone()), raw);
    }

    #[test]
    fn all_three_shapes_agree_on_the_events() {
        let events = json!([{ "id": "a", "title": "Trivia Night" }]);
        let shapes = [
            events.clone(),
            json!({ "events": events.clone() }),
            json!({ "success": true, "data": { "events": events.clone() } }),
        ];

        for raw in shapes {
            let normalized = normalize_event_list_response(raw);
            assert_eq!(normalized["data"]["events"], events);
        }
    }

    #[test]
    fn mongo_id_fills_missing_id() {
        let raw = json!([
            { "_id": "64ff", "title": "Week 1" },
            { "id": "plain", "_id": "ignored" },
            { "title": "No id at all" },
        ]);

        let normalized = normalize_event_list_response(raw);
        let events = normalized["data"]["events"].as_array().unwrap();

        assert_eq!(events[0]["id"], "64ff");
        assert_eq!(events[1]["id"], "plain");
        assert_eq!(events[2]["id"], "");
    }

    #[test]
    fn null_id_falls_back_to_mongo_id() {
        let raw = json!([{ "id": null, "_id": "64ff" }]);
        let normalized = normalize_event_list_response(raw);
        assert_eq!(normalized["data"]["events"][0]["id"], "64ff");
    }

    #[test]
    fn numeric_id_is_stringified() {
        let raw = json!([{ "id": 7 }]);
        let normalized = normalize_event_list_response(raw);
        assert_eq!(normalized["data"]["events"][0]["id"], "7");
    }

    #[test]
    fn failure_flag_survives_normalization() {
        let raw = json!({ "success": false, "data": { "events": [] } });
        let normalized = normalize_event_list_response(raw);
        assert_eq!(normalized["success"], false);
        assert_eq!(normalized["data"]["events"], json!([]));
    }

    #[test]
    fn unrecognized_object_passes_through() {
        let raw = json!({ "success": false, "message": "database unavailable" });
        assert_eq!(normalize_event_list_response(raw.clone()), raw);
    }

    #[test]
    fn scalar_passes_through() {
        let raw = json!("oops");
        assert_eq!(normalize_event_list_response(raw.clone()), raw);
    }

    #[test]
    fn flat_shape_with_success_key_is_not_misread() {
        // `success` alongside `events` means the envelope is already half
        // canonical; only the nested-data arm may claim it.
        let raw = json!({ "success": true, "events": [{ "id": "a" }] });
        assert_eq!(normalize_event_list_response(raw.clone()), raw);
    }

    #[test]
    fn null_pagination_is_replaced() {
        let raw = json!({ "events": [{ "id": "a" }], "pagination": null });
        let normalized = normalize_event_list_response(raw);
        assert_eq!(
            normalized["data"]["pagination"],
            json!({ "page": 1, "limit": 1, "total": 1, "totalPages": 1 }),
        );
    }

    #[test]
    fn gallery_envelope_normalizes_like_events() {
        let raw = json!([{ "_id": "img-1", "imageUrl": "https://cdn/x.jpg" }]);
        let normalized = normalize_gallery_list_response(raw);
        assert_eq!(normalized["data"]["images"][0]["id"], "img-1");
        assert_eq!(normalized["data"]["pagination"]["total"], 1);
    }

    #[test]
    fn detail_unwraps_nested_event() {
        let raw = json!({
            "success": true,
            "data": { "event": { "_id": "64ff", "title": "AGM" } },
        });
        let event = normalize_event_detail_response(raw);
        assert_eq!(event["id"], "64ff");
        assert_eq!(event["title"], "AGM");
    }

    #[test]
    fn detail_unwraps_data_object() {
        let raw = json!({ "success": true, "data": { "_id": "64ff" } });
        assert_eq!(normalize_event_detail_response(raw)["id"], "64ff");
    }

    #[test]
    fn bare_detail_gains_canonical_id() {
        let raw = json!({ "_id": "64ff", "title": "AGM" });
        let event = normalize_event_detail_response(raw);
        assert_eq!(event["id"], "64ff");
    }
}
