use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct EmailDomainRequest {
    pub email: String,
    pub domain: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct EmailValidationResponse {
    pub email: String,
    pub is_valid: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct DomainMatchResponse {
    pub email: String,
    pub domain: String,
    pub is_valid: bool,
    pub matches: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_valid_email_deserialization() {
        let json = r#"{"email": "user@example.com"}"#;
        let email_request: EmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(email_request.email, "user@example.com");
    }

    #[test]
    fn test_missing_email_field() {
        let json = r#"{}"#;
        let result: Result<EmailRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_email_field() {
        let json = r#"{"email": null}"#;
        let result: Result<EmailRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_email_is_not_trimmed() {
        let json = r#"{"email": "  user@example.com  "}"#;
        let email_request: EmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(email_request.email, "  user@example.com  ");
    }

    #[test]
    fn test_domain_request_requires_both_fields() {
        let json = r#"{"email": "user@example.com", "domain": "example.com"}"#;
        let request: EmailDomainRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.domain, "example.com");

        let result: Result<EmailDomainRequest, _> =
            serde_json::from_str(r#"{"email": "user@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_domain_match_response_serialization() {
        let response = DomainMatchResponse {
            email: "user@example.com".to_string(),
            domain: "example.com".to_string(),
            is_valid: true,
            matches: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["matches"], true);
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["domain"], "example.com");
    }
}
