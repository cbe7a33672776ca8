use crate::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// person_id
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  pub fn decode(jwt: &str, jwt_secret: &str) -> LostpawsResult<TokenData<Claims>> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.remove("exp");
    decode::<Claims>(
      jwt,
      &DecodingKey::from_secret(jwt_secret.as_ref()),
      &validation,
    )
    .with_lostpaws_type(LostpawsErrorType::NotLoggedIn)
  }

  pub fn jwt(person_id: i32, jwt_secret: &str, hostname: &str) -> LostpawsResult<String> {
    let claims = Claims {
      sub: person_id,
      iss: hostname.to_string(),
      iat: Utc::now().timestamp(),
    };
    encode(
      &Header::default(),
      &claims,
      &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .with_lostpaws_type(LostpawsErrorType::NotLoggedIn)
  }
}
