//! CEP lookup against the public postal service (`GET /ws/{cep}/json/`).

use std::time::Duration;

use aff_auth::JsonClient;
use aff_core::entities::Address;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

pub const TRACING_TARGET: &str = "aff_api::postal";

#[derive(Debug, Default, Deserialize)]
struct LookupReply {
    #[serde(default)]
    erro: Option<Value>,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl LookupReply {
    /// The service answers 200 with `{"erro": true}` (or `"true"`) for unknown CEPs.
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn into_address(self, digits: String) -> Address {
        let cep = if self.cep.trim().is_empty() {
            digits
        } else {
            aff_core::normalize::only_digits(&self.cep)
        };
        Address {
            cep,
            street: self.logradouro.trim().to_string(),
            district: self.bairro.trim().to_string(),
            city: self.localidade.trim().to_string(),
            state: self.uf.trim().to_uppercase(),
        }
    }
}

/// Unauthenticated, best-effort address lookup.
#[derive(Debug, Clone)]
pub struct PostalClient {
    http: JsonClient,
}

impl PostalClient {
    /// # Errors
    ///
    /// Returns `ApiError::Postal` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http =
            JsonClient::new(base_url, timeout).map_err(|e| ApiError::Postal(e.to_string()))?;
        Ok(Self { http })
    }

    /// Resolve a CEP to an address. `Ok(None)` when the CEP does not exist.
    ///
    /// # Errors
    ///
    /// - `ApiError::Validation` unless the input holds exactly 8 digits.
    /// - `ApiError::Postal` when the service is unreachable or answers garbage.
    pub async fn lookup(&self, cep: &str) -> Result<Option<Address>, ApiError> {
        let digits = aff_core::normalize::cep(cep)?;
        let path = format!("ws/{digits}/json/");

        let reply: LookupReply = self.http.get(&path, None).await.map_err(|error| {
            tracing::debug!(target: TRACING_TARGET, cep = %digits, %error, "lookup failed");
            ApiError::Postal(error.to_string())
        })?;

        if reply.is_not_found() {
            tracing::debug!(target: TRACING_TARGET, cep = %digits, "CEP not found");
            return Ok(None);
        }
        Ok(Some(reply.into_address(digits)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erro_flag_accepts_bool_and_string() {
        let as_bool: LookupReply = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        let as_string: LookupReply = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        let absent: LookupReply = serde_json::from_str(r#"{"uf": "sp"}"#).unwrap();
        assert!(as_bool.is_not_found());
        assert!(as_string.is_not_found());
        assert!(!absent.is_not_found());
    }

    #[test]
    fn address_is_trimmed_and_state_upper_cased() {
        let reply: LookupReply = serde_json::from_value(serde_json::json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé ",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "sp"
        }))
        .unwrap();
        let address = reply.into_address("01001000".into());
        assert_eq!(address.cep, "01001000");
        assert_eq!(address.street, "Praça da Sé");
        assert_eq!(address.state, "SP");
    }
}
