use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::CoreError;
use crate::enums::PersonType;
use crate::normalize::{only_digits, required};

/// Raw sign-up form input, as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    pub person_type: PersonType,
    pub tax_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cep: String,
    pub street: String,
    pub complement: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub tipo_pessoa: PersonType,
    pub cpf_cnpj: String,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cep: String,
    pub endereco: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub senha: String,
}

impl RegistrationForm {
    /// Normalise and validate the form into the wire payload.
    ///
    /// Phone and complement are optional; every other field must be present
    /// after normalisation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first missing field.
    pub fn into_payload(self) -> Result<RegistrationPayload, CoreError> {
        let tax_id = only_digits(&self.tax_id);
        required("CPF/CNPJ", &tax_id)?;
        let cep = only_digits(&self.cep);
        required("CEP", &cep)?;

        let street = required("street", &self.street)?;
        let complement = self.complement.trim();
        let endereco = if complement.is_empty() {
            street.to_string()
        } else {
            format!("{street} - {complement}")
        };

        let payload = RegistrationPayload {
            tipo_pessoa: self.person_type,
            cpf_cnpj: tax_id,
            nome: required("name", &self.name)?.to_string(),
            email: required("email", &self.email)?.to_string(),
            telefone: self.phone.trim().to_string(),
            cep,
            endereco,
            numero: required("number", &self.number)?.to_string(),
            bairro: required("district", &self.district)?.to_string(),
            cidade: required("city", &self.city)?.to_string(),
            estado: required("state", &self.state)?.to_uppercase(),
            senha: required("password", &self.password)?.to_string(),
        };
        Ok(payload)
    }
}
