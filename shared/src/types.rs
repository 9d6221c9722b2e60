//! Wire types for the liquor recommendation API

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// User sex as understood by the recommendation backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Demographic and consent data for the current user
///
/// Either fully absent or a structurally complete record: updates replace
/// the whole record, never patch individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub sex: Sex,
    pub is_privacy_agreed: bool,
}

impl UserProfile {
    /// Encode the record for the session slot
    pub fn to_json(&self) -> SharedResult<String> {
        serde_json::to_string(self).map_err(|e| SharedError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Decode a session-slot payload back into a record
    pub fn from_json(raw: &str) -> SharedResult<Self> {
        serde_json::from_str(raw).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }
}

/// Outbound payload for a recommendation request
///
/// Built from the stored profile plus per-request inputs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub age: u32,
    pub sex: Sex,
    pub drink_count: u32,
    pub user_query: String,
}

/// One server-ranked liquor suggestion
///
/// Returned as an ordered sequence; ranking order is server-defined and
/// must be preserved by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquorRecommendation {
    pub id: u64,
    pub liquor_name: String,
    pub reason: String,
}

/// Food pairing for a specific liquor id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingResponse {
    pub food_name: String,
}

/// Historical recommendation entry from the stats endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub id: u64,
    pub age: u32,
    pub sex: Sex,
    pub drink_count: u32,
    pub liquor_name: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_json_field_names() {
        let profile = UserProfile {
            age: 25,
            sex: Sex::Male,
            is_privacy_agreed: true,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["age"], 25);
        assert_eq!(json["sex"], "male");
        assert_eq!(json["isPrivacyAgreed"], true);
    }

    #[test]
    fn test_profile_slot_round_trip() {
        let profile = UserProfile {
            age: 31,
            sex: Sex::Female,
            is_privacy_agreed: false,
        };

        let encoded = profile.to_json().unwrap();
        let decoded = UserProfile::from_json(&encoded).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn test_malformed_slot_payload_is_deserialization_error() {
        let result = UserProfile::from_json("{broken");
        assert!(matches!(
            result,
            Err(SharedError::DeserializationError { .. })
        ));
    }

    #[test]
    fn test_recommendation_round_trip() {
        let json = r#"{"id":1,"liquorName":"Soju","reason":"light body"}"#;
        let rec: LiquorRecommendation = serde_json::from_str(json).unwrap();

        assert_eq!(rec.id, 1);
        assert_eq!(rec.liquor_name, "Soju");
        assert_eq!(rec.reason, "light body");
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = RecommendationRequest {
            age: 30,
            sex: Sex::Female,
            drink_count: 2,
            user_query: "something light".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["drinkCount"], 2);
        assert_eq!(json["userQuery"], "something light");
        assert_eq!(json["sex"], "female");
    }
}
