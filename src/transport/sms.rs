use serde::{Deserialize, Serialize};
use url::Url;

use super::{TransportError, null_as_default};
use crate::domain::{
    CallbackId, DeleteSms, DeviceId, GetSms, ListSms, ListSmsResponse, Pagination, SendSms,
    SendSmsResponse, SimSlot, SmsId, SmsRecord,
};

#[derive(Debug, Serialize)]
struct SendSmsJsonRequest<'a> {
    message: &'a str,
    phone_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_sim: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SmsIdJsonRequest<'a> {
    id: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SendSmsJsonResponse {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SmsJsonRecord {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    message: String,
    #[serde(deserialize_with = "null_as_default")]
    phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    device_id: String,
    #[serde(deserialize_with = "null_as_default")]
    callback_id: String,
    #[serde(deserialize_with = "null_as_default")]
    status: i32,
    #[serde(deserialize_with = "null_as_default")]
    message_status: String,
    #[serde(deserialize_with = "null_as_default")]
    time_create: i64,
    to_sim: Option<i32>,
}

impl From<SmsJsonRecord> for SmsRecord {
    fn from(value: SmsJsonRecord) -> Self {
        Self {
            id: SmsId::new(value.id),
            message: value.message,
            phone_number: value.phone_number,
            device_id: DeviceId::new(value.device_id),
            callback_id: CallbackId::new(value.callback_id),
            status: value.status,
            message_status: value.message_status,
            time_create: value.time_create,
            to_sim: value.to_sim.map(SimSlot::new),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct PaginationJson {
    #[serde(deserialize_with = "null_as_default")]
    total_records: i64,
    #[serde(deserialize_with = "null_as_default")]
    limit: i64,
    #[serde(deserialize_with = "null_as_default")]
    offset: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ListSmsJsonResponse {
    #[serde(deserialize_with = "null_as_default")]
    pagination: PaginationJson,
    #[serde(deserialize_with = "null_as_default")]
    sms_list: Vec<SmsJsonRecord>,
}

pub fn encode_send_sms_json(request: &SendSms) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&SendSmsJsonRequest {
        message: &request.message,
        phone_number: &request.phone_number,
        device_id: request.device_id.as_ref().map(DeviceId::as_str),
        to_sim: request.to_sim.map(SimSlot::value),
        callback_id: request.callback_id.as_ref().map(CallbackId::as_str),
    })
}

pub fn encode_get_sms_json(request: &GetSms) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&SmsIdJsonRequest {
        id: request.id.as_str(),
    })
}

pub fn encode_delete_sms_json(request: &DeleteSms) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&SmsIdJsonRequest {
        id: request.id.as_str(),
    })
}

/// Append `limit`, `offset` (when > 0) and `search` (when non-empty) to `url`.
///
/// Values are form-urlencoded, so `search` may carry `&`, `=`, spaces or non-ASCII text.
pub fn append_list_sms_query(url: &mut Url, request: &ListSms) {
    let mut query = url.query_pairs_mut();
    query.append_pair("limit", &request.limit.to_string());
    if request.offset > 0 {
        query.append_pair("offset", &request.offset.to_string());
    }
    if let Some(search) = request.search.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("search", search);
    }
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    Ok(SendSmsResponse {
        id: SmsId::new(parsed.id),
    })
}

pub fn decode_sms_record_json_response(json: &str) -> Result<SmsRecord, TransportError> {
    let parsed: SmsJsonRecord = serde_json::from_str(json)?;
    Ok(parsed.into())
}

pub fn decode_list_sms_json_response(json: &str) -> Result<ListSmsResponse, TransportError> {
    let parsed: ListSmsJsonResponse = serde_json::from_str(json)?;
    Ok(ListSmsResponse {
        pagination: Pagination {
            total_records: parsed.pagination.total_records,
            limit: parsed.pagination.limit,
            offset: parsed.pagination.offset,
        },
        sms_list: parsed.sms_list.into_iter().map(SmsRecord::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn list_url(request: &ListSms) -> Url {
        let mut url = Url::parse("https://api.gosms.ru/v1/sms").unwrap();
        append_list_sms_query(&mut url, request);
        url
    }

    #[test]
    fn encode_send_sms_omits_unset_optional_fields() {
        let request = SendSms::new("79990000000", "hi");
        let body = encode_send_sms_json(&request).unwrap();

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            json!({ "message": "hi", "phone_number": "79990000000" })
        );
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("device_id"));
        assert!(!object.contains_key("to_sim"));
        assert!(!object.contains_key("callback_id"));
    }

    #[test]
    fn encode_send_sms_includes_set_optional_fields() {
        let request = SendSms::new("79999999999", "Test message")
            .device_id("test-device")
            .to_sim(0)
            .callback_id("test-callback");
        let body = encode_send_sms_json(&request).unwrap();

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Test message",
                "phone_number": "79999999999",
                "device_id": "test-device",
                "to_sim": 0,
                "callback_id": "test-callback"
            })
        );
    }

    #[test]
    fn encode_id_requests() {
        let body = encode_get_sms_json(&GetSms::new("6654a4e8f1527149588c89f2")).unwrap();
        assert_eq!(body, br#"{"id":"6654a4e8f1527149588c89f2"}"#);

        let body = encode_delete_sms_json(&DeleteSms::new("x")).unwrap();
        assert_eq!(body, br#"{"id":"x"}"#);
    }

    #[test]
    fn list_query_contains_only_limit_by_default() {
        let url = list_url(&ListSms::new(5));
        assert_eq!(url.query(), Some("limit=5"));
    }

    #[test]
    fn list_query_skips_zero_offset_and_empty_search() {
        let url = list_url(&ListSms::new(10).offset(0).search(""));
        assert_eq!(url.query(), Some("limit=10"));
    }

    #[test]
    fn list_query_includes_offset_and_search() {
        let url = list_url(&ListSms::new(5).offset(1).search("79999999999"));
        assert_eq!(url.query(), Some("limit=5&offset=1&search=79999999999"));
    }

    #[test]
    fn list_query_escapes_search_text() {
        let url = list_url(&ListSms::new(5).search("a b&limit=100"));
        assert_eq!(url.query(), Some("limit=5&search=a+b%26limit%3D100"));

        let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_owned(), "5".to_owned()),
                ("search".to_owned(), "a b&limit=100".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_send_sms_response() {
        let resp = decode_send_sms_json_response(r#"{"id":"abc123"}"#).unwrap();
        assert_eq!(resp.id, SmsId::new("abc123"));
    }

    #[test]
    fn decode_sms_record_keeps_null_to_sim_distinct_from_zero() {
        let json = r#"
        {
          "id": "6654a4e8f1527149588c89f2",
          "message": "hello",
          "status": 2,
          "callback_id": "cb",
          "device_id": "d1",
          "phone_number": "79999999999",
          "message_status": "delivered",
          "time_create": 1716823272,
          "to_sim": null
        }
        "#;
        let record = decode_sms_record_json_response(json).unwrap();
        assert_eq!(record.id, SmsId::new("6654a4e8f1527149588c89f2"));
        assert_eq!(record.status, 2);
        assert_eq!(record.message_status, "delivered");
        assert_eq!(record.time_create, 1_716_823_272);
        assert_eq!(record.to_sim, None);

        let record = decode_sms_record_json_response(r#"{"id":"x","to_sim":0}"#).unwrap();
        assert_eq!(record.to_sim, Some(SimSlot::new(0)));
        assert_eq!(record.message, "");
    }

    #[test]
    fn decode_list_response_keeps_order() {
        let json = r#"
        {
          "pagination": { "total_records": 42, "limit": 2, "offset": 1 },
          "sms_list": [
            { "id": "a", "to_sim": 1 },
            { "id": "b" }
          ]
        }
        "#;
        let resp = decode_list_sms_json_response(json).unwrap();
        assert_eq!(
            resp.pagination,
            Pagination {
                total_records: 42,
                limit: 2,
                offset: 1
            }
        );
        let ids = resp
            .sms_list
            .iter()
            .map(|it| it.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(resp.sms_list[0].to_sim, Some(SimSlot::new(1)));
        assert_eq!(resp.sms_list[1].to_sim, None);
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(matches!(
            decode_send_sms_json_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
        assert!(decode_list_sms_json_response("").is_err());
    }

    #[test]
    fn decode_send_sms_response_defaults_missing_id() {
        let resp = decode_send_sms_json_response("{}").unwrap();
        assert_eq!(resp.id, SmsId::new(""));

        let resp = decode_send_sms_json_response(r#"{"id":null}"#).unwrap();
        assert_eq!(resp.id, SmsId::new(""));
    }

    #[test]
    fn decode_sms_record_treats_null_as_zero_value() {
        let json = r#"{"id":"a","callback_id":null,"message":null,"status":null,"to_sim":null}"#;
        let record = decode_sms_record_json_response(json).unwrap();
        assert_eq!(record.id, SmsId::new("a"));
        assert_eq!(record.callback_id, CallbackId::new(""));
        assert_eq!(record.message, "");
        assert_eq!(record.status, 0);
        assert_eq!(record.to_sim, None);
    }

    #[test]
    fn decode_list_response_tolerates_null_fields_in_one_entry() {
        let json = r#"
        {
          "pagination": { "total_records": 2, "limit": 10, "offset": null },
          "sms_list": [
            { "id": "a", "callback_id": "cb" },
            { "id": "b", "callback_id": null, "device_id": null, "to_sim": -1 }
          ]
        }
        "#;
        let resp = decode_list_sms_json_response(json).unwrap();
        assert_eq!(resp.pagination.offset, 0);
        assert_eq!(resp.sms_list.len(), 2);
        assert_eq!(resp.sms_list[0].callback_id, CallbackId::new("cb"));
        assert_eq!(resp.sms_list[1].callback_id, CallbackId::new(""));
        assert_eq!(resp.sms_list[1].device_id, DeviceId::new(""));
        assert_eq!(resp.sms_list[1].to_sim, Some(SimSlot::new(-1)));

        let resp = decode_list_sms_json_response(r#"{"pagination":null,"sms_list":null}"#).unwrap();
        assert!(resp.sms_list.is_empty());
    }
}
