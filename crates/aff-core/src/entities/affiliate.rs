use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PersonType;

/// An affiliate record as returned by `GET /auth/user/{id}` and `GET /auth/users`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AffiliateProfile {
    #[serde(deserialize_with = "crate::id_serde::required")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(rename = "tipo_pessoa", default)]
    pub person_type: PersonType,
    /// CPF for individuals, CNPJ for companies.
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
    #[serde(rename = "bairro", default)]
    pub district: Option<String>,
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
}

impl AffiliateProfile {
    /// Case-insensitive match on name, email or CPF/CNPJ.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.tax_id.to_lowercase().contains(&term)
    }
}

/// Sparse patch for `PUT /auth/user/{id}`. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileUpdate {
    #[serde(rename = "tipo_pessoa", skip_serializing_if = "Option::is_none")]
    pub person_type: Option<PersonType>,
    #[serde(rename = "cpf_cnpj", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(rename = "endereco", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "numero", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "bairro", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ProfileUpdate {
    /// Drop blank fields and normalise masked ones, mirroring the edit form
    /// where an empty input means "leave unchanged".
    #[must_use]
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        fn digits(value: Option<String>) -> Option<String> {
            clean(value)
                .map(|v| crate::normalize::only_digits(&v))
                .filter(|v| !v.is_empty())
        }

        Self {
            person_type: self.person_type,
            tax_id: digits(self.tax_id),
            name: clean(self.name),
            email: clean(self.email),
            phone: clean(self.phone),
            cep: digits(self.cep),
            address: clean(self.address),
            number: clean(self.number),
            district: clean(self.district),
            city: clean(self.city),
            state: clean(self.state).map(|s| s.to_uppercase()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
