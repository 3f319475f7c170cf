use serde::{Deserialize, Serialize};

/// Account/party pair the upstream service associates with a caller.
/// Both ids are opaque and passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub account_id: String,
    pub party_id: String,
}

/// Body of `GET /v1/roleScopes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleScopesResponse {
    pub role: Role,
    /// URN-shaped permission strings, in the order they are granted.
    pub scopes: Vec<String>,
}

impl RoleScopesResponse {
    /// The canned payload served to every caller.
    pub fn fixture() -> Self {
        Self {
            role: Role {
                account_id: "cfbfbb5a-8b0a-427d-a05e-8d78147605d0".to_string(),
                party_id: "f9e6a782-93c8-590a-8392-0fef2528c504".to_string(),
            },
            scopes: vec![
                "urn:uplight:connect:bills:read".to_string(),
                "urn:uplight:connect:service_locations:read".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_serializes_with_camel_case_role_fields() {
        let value = serde_json::to_value(RoleScopesResponse::fixture()).unwrap();
        assert_eq!(
            value["role"]["accountId"],
            "cfbfbb5a-8b0a-427d-a05e-8d78147605d0"
        );
        assert_eq!(value["role"]["partyId"], "f9e6a782-93c8-590a-8392-0fef2528c504");
        assert!(value["role"].get("account_id").is_none());
    }

    #[test]
    fn fixture_keeps_scope_order() {
        let fixture = RoleScopesResponse::fixture();
        assert_eq!(
            fixture.scopes,
            vec![
                "urn:uplight:connect:bills:read",
                "urn:uplight:connect:service_locations:read",
            ]
        );
    }

    #[test]
    fn fixture_is_identical_across_calls() {
        assert_eq!(RoleScopesResponse::fixture(), RoleScopesResponse::fixture());
    }

    #[test]
    fn parses_upstream_shaped_document() {
        let raw = r#"{"role":{"accountId":"a","partyId":"p"},"scopes":["urn:x"]}"#;
        let parsed: RoleScopesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.role.account_id, "a");
        assert_eq!(parsed.role.party_id, "p");
        assert_eq!(parsed.scopes, vec!["urn:x"]);
    }
}
