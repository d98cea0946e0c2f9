//! Wire models for the NBP exchange rates API.
//!
//! Payload shapes follow <https://api.nbp.pl/>: table documents from
//! `/api/exchangerates/tables/{table}/` and rate documents from
//! `/api/exchangerates/rates/{table}/{code}/{from}/{to}/`. Dates are
//! `yyyy-MM-dd`; unknown fields are ignored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One published exchange table document (the endpoint returns an array).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NbpTableDocument {
    #[allow(dead_code)]
    pub table: String,
    /// Publication number, e.g. "064/A/NBP/2024"
    #[allow(dead_code)]
    pub no: String,
    #[allow(dead_code)]
    pub effective_date: NaiveDate,
    pub rates: Vec<NbpTableRate>,
}

/// A currency listed within a table document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NbpTableRate {
    pub currency: String,
    pub code: String,
    #[allow(dead_code)]
    pub mid: Decimal,
}

/// Rate history document for a single currency.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NbpRatesDocument {
    #[allow(dead_code)]
    pub table: String,
    #[allow(dead_code)]
    pub currency: String,
    #[allow(dead_code)]
    pub code: String,
    pub rates: Vec<NbpRatePoint>,
}

/// One historical rate observation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NbpRatePoint {
    pub effective_date: NaiveDate,
    pub mid: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_table_document() {
        let json = r#"[
            {
                "table": "A",
                "no": "064/A/NBP/2024",
                "effectiveDate": "2024-04-02",
                "rates": [
                    {"currency": "dolar amerykański", "code": "USD", "mid": 3.9876},
                    {"currency": "euro", "code": "EUR", "mid": 4.2958}
                ]
            }
        ]"#;

        let documents: Vec<NbpTableDocument> = serde_json::from_str(json).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].rates.len(), 2);
        assert_eq!(documents[0].rates[0].code, "USD");
        assert_eq!(documents[0].rates[0].currency, "dolar amerykański");
        assert_eq!(documents[0].rates[1].mid, dec!(4.2958));
        assert_eq!(
            documents[0].effective_date,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
        );
    }

    #[test]
    fn test_deserialize_rates_document() {
        let json = r#"{
            "table": "A",
            "currency": "dolar amerykański",
            "code": "USD",
            "rates": [
                {"no": "064/A/NBP/2024", "effectiveDate": "2024-04-02", "mid": 3.9876},
                {"no": "065/A/NBP/2024", "effectiveDate": "2024-04-03", "mid": 3.9921}
            ]
        }"#;

        let document: NbpRatesDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.code, "USD");
        assert_eq!(document.rates.len(), 2);
        assert_eq!(document.rates[0].mid, dec!(3.9876));
        assert_eq!(
            document.rates[1].effective_date,
            NaiveDate::from_ymd_opt(2024, 4, 3).unwrap()
        );
    }
}
