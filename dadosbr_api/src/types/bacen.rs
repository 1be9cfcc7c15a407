use std::str::FromStr;

use crate::Error;

/// Series code of the SGS (Sistema Gerenciador de Séries Temporais) API.
///
/// Frequently used series have names; any other code goes through
/// [`SeriesCode::Custom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesCode {
    /// Free exchange rate, US dollar, sell, daily (1).
    DollarSellDaily,
    /// Free exchange rate, US dollar, sell, end of year (33692).
    DollarSellYearEnd,
    /// Selic interest rate (11).
    Selic,
    /// Selic rate accumulated in the month (4390).
    SelicMonthlyAccumulated,
    /// Selic rate annualized, 252-day base (1178).
    SelicAnnualized252,
    /// Active credit cards (25149).
    ActiveCreditCards,
    Custom(u32),
}

impl SeriesCode {
    pub fn code(&self) -> u32 {
        match self {
            SeriesCode::DollarSellDaily => 1,
            SeriesCode::DollarSellYearEnd => 33692,
            SeriesCode::Selic => 11,
            SeriesCode::SelicMonthlyAccumulated => 4390,
            SeriesCode::SelicAnnualized252 => 1178,
            SeriesCode::ActiveCreditCards => 25149,
            SeriesCode::Custom(code) => *code,
        }
    }
}

impl From<u32> for SeriesCode {
    fn from(code: u32) -> Self {
        match code {
            1 => SeriesCode::DollarSellDaily,
            33692 => SeriesCode::DollarSellYearEnd,
            11 => SeriesCode::Selic,
            4390 => SeriesCode::SelicMonthlyAccumulated,
            1178 => SeriesCode::SelicAnnualized252,
            25149 => SeriesCode::ActiveCreditCards,
            other => SeriesCode::Custom(other),
        }
    }
}

impl std::fmt::Display for SeriesCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SeriesCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u32>() {
            return Ok(code.into());
        }
        match s {
            "dollar-sell-daily" => Ok(SeriesCode::DollarSellDaily),
            "dollar-sell-year-end" => Ok(SeriesCode::DollarSellYearEnd),
            "selic" => Ok(SeriesCode::Selic),
            "selic-monthly" => Ok(SeriesCode::SelicMonthlyAccumulated),
            "selic-annualized" => Ok(SeriesCode::SelicAnnualized252),
            "active-credit-cards" => Ok(SeriesCode::ActiveCreditCards),
            _ => Err(Error::UnknownVariant {
                kind: "series code",
                value: s.to_string(),
            }),
        }
    }
}

/// Reports published by the Focus market-expectations survey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpectationsReport {
    ReferenceDates,
    Top5Annual,
    Monthly,
    Top5Inflation12Months,
    Inflation24Months,
    Selic,
    Top5Selic,
    Top5Monthly,
    Quarterly,
    Top5Inflation24Months,
    Top5Quarterly,
    Inflation12Months,
    Annual,
}

impl ExpectationsReport {
    pub const ALL: [ExpectationsReport; 13] = [
        ExpectationsReport::ReferenceDates,
        ExpectationsReport::Top5Annual,
        ExpectationsReport::Monthly,
        ExpectationsReport::Top5Inflation12Months,
        ExpectationsReport::Inflation24Months,
        ExpectationsReport::Selic,
        ExpectationsReport::Top5Selic,
        ExpectationsReport::Top5Monthly,
        ExpectationsReport::Quarterly,
        ExpectationsReport::Top5Inflation24Months,
        ExpectationsReport::Top5Quarterly,
        ExpectationsReport::Inflation12Months,
        ExpectationsReport::Annual,
    ];

    /// Entity set name used in the OData path.
    pub fn resource(&self) -> &'static str {
        match self {
            ExpectationsReport::ReferenceDates => "DatasReferencia",
            ExpectationsReport::Top5Annual => "ExpectativasMercadoTop5Anuais",
            ExpectationsReport::Monthly => "ExpectativaMercadoMensais",
            ExpectationsReport::Top5Inflation12Months => "ExpectativasMercadoTop5Inflacao12Meses",
            ExpectationsReport::Inflation24Months => "ExpectativasMercadoInflacao24Meses",
            ExpectationsReport::Selic => "ExpectativasMercadoSelic",
            ExpectationsReport::Top5Selic => "ExpectativasMercadoTop5Selic",
            ExpectationsReport::Top5Monthly => "ExpectativasMercadoTop5Mensais",
            ExpectationsReport::Quarterly => "ExpectativasMercadoTrimestrais",
            ExpectationsReport::Top5Inflation24Months => "ExpectativasMercadoTop5Inflacao24Meses",
            ExpectationsReport::Top5Quarterly => "ExpectativasMercadoTop5Trimestral",
            ExpectationsReport::Inflation12Months => "ExpectativasMercadoInflacao12Meses",
            ExpectationsReport::Annual => "ExpectativasMercadoAnuais",
        }
    }
}

impl std::fmt::Display for ExpectationsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource())
    }
}

impl FromStr for ExpectationsReport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpectationsReport::ALL
            .into_iter()
            .find(|report| report.resource().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownVariant {
                kind: "expectations report",
                value: s.to_string(),
            })
    }
}
