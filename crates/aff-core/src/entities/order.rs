use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An order attributed to the affiliate (`GET /auth/pedidos/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Order {
    #[serde(rename = "codigoPedido", deserialize_with = "crate::id_serde::required")]
    #[schemars(with = "String")]
    pub code: String,
    #[serde(rename = "valorTotal", default)]
    pub total: f64,
    #[serde(rename = "dataCriacao", default)]
    pub created_at: String,
}

/// Commission balance (`GET /auth/saldo/{id}`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Balance {
    #[serde(default)]
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_defaults_missing_total_to_zero() {
        let balance: Balance = serde_json::from_str("{}").unwrap();
        assert!(balance.total.abs() < f64::EPSILON);
    }

    #[test]
    fn order_accepts_numeric_code() {
        let order: Order = serde_json::from_str(
            r#"{"codigoPedido": 1001, "valorTotal": 59.9, "dataCriacao": "2025-01-02"}"#,
        )
        .unwrap();
        assert_eq!(order.code, "1001");
        assert!((order.total - 59.9).abs() < f64::EPSILON);
    }
}
