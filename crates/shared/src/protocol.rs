//! Wire DTOs exchanged with the benefits REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::BenefitId;

/// Create/update body: a benefit minus its server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub balance: Decimal,
    #[serde(rename = "ativo")]
    pub active: bool,
}

/// Body of the transfer endpoint. Constructed only at submission time and
/// discarded once the call resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "idBeneficioOrigem")]
    pub source_id: BenefitId,
    #[serde(rename = "idBeneficioDestino")]
    pub destination_id: BenefitId,
    #[serde(rename = "valor")]
    pub amount: Decimal,
}

/// Optional payload the API may attach to a failed response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_request_uses_api_field_names() {
        let request = TransferRequest {
            source_id: BenefitId(1),
            destination_id: BenefitId(2),
            amount: Decimal::new(505, 1),
        };
        let encoded = serde_json::to_value(&request).expect("encode");
        assert_eq!(encoded["idBeneficioOrigem"], 1);
        assert_eq!(encoded["idBeneficioDestino"], 2);
        assert_eq!(encoded["valor"], 50.5);
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str("{}").expect("parse");
        assert!(body.message.is_none());

        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"saldo insuficiente"}"#).expect("parse");
        assert_eq!(body.message.as_deref(), Some("saldo insuficiente"));
    }
}
