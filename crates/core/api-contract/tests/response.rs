use api_contract::{
    ApiResponse, CODE_VALIDATION_ERROR, ValidationErrorBody, validation_error_response,
};
use std::collections::BTreeMap;

#[test]
fn success_response_serializes() {
    let response = ApiResponse::success(vec![1, 2]);
    let value = serde_json::to_value(&response).expect("json");
    assert_eq!(value["success"], true);
    assert_eq!(value["data"], serde_json::json!([1, 2]));
    assert!(value["error"].is_null());
}

#[test]
fn validation_body_groups_messages_by_field() {
    let mut messages = BTreeMap::new();
    messages.insert("owners".to_string(), vec!["Owners are invalid".to_string()]);
    messages.insert("roles".to_string(), vec!["Some roles do not exist".to_string()]);
    let body = ValidationErrorBody::from_messages(messages);
    assert_eq!(
        body.summary(),
        "owners: Owners are invalid, roles: Some roles do not exist"
    );

    let response = validation_error_response(CODE_VALIDATION_ERROR, body);
    let value = serde_json::to_value(&response).expect("json");
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        value["data"]["message"]["owners"],
        serde_json::json!(["Owners are invalid"])
    );
}
