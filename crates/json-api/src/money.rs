//! Money Payloads

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Number;

use trolley_app::domain::money::{Money, MoneyError};

/// Money Payload
///
/// The amount travels as a bare JSON number. Amounts that cannot be held without rounding are
/// rejected rather than truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MoneyPayload {
    /// Exact decimal amount
    #[serde(
        serialize_with = "rust_decimal::serde::arbitrary_precision::serialize",
        deserialize_with = "deserialize_exact_amount"
    )]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,

    /// ISO-4217 currency code
    pub currency: String,
}

fn deserialize_exact_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;

    parse_exact_amount(number.as_str()).ok_or_else(|| {
        D::Error::custom(format!(
            "amount {number} has more digits than can be stored exactly"
        ))
    })
}

/// Parse a JSON number literal, refusing any value that would need rounding.
fn parse_exact_amount(raw: &str) -> Option<Decimal> {
    match raw.split_once(['e', 'E']) {
        // the exponent is applied exactly or rejected, only the mantissa can round
        Some((mantissa, _)) => {
            Decimal::from_str_exact(mantissa).ok()?;
            Decimal::from_scientific(raw).ok()
        }
        None => Decimal::from_str_exact(raw).ok(),
    }
}

impl From<Money> for MoneyPayload {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency.code().to_owned(),
        }
    }
}

impl TryFrom<MoneyPayload> for Money {
    type Error = MoneyError;

    fn try_from(payload: MoneyPayload) -> Result<Self, Self::Error> {
        Money::new(payload.amount, &payload.currency)
    }
}
