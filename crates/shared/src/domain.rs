use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a benefit. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BenefitId(pub i64);

/// A named, balance-bearing record managed by the benefits API.
///
/// Field names on the wire are the API's Portuguese originals. The client
/// never patches a record in place; after every successful write it reloads
/// the full list from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: BenefitId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub balance: Decimal,
    #[serde(rename = "ativo")]
    pub active: bool,
}
