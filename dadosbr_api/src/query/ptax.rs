//! PTAX resources. Their arguments travel inside the path as an OData
//! function call: `CotacaoDolarDia(dataCotacao='10-16-2026')`.

use chrono::NaiveDate;

use super::common::DateStyle;

/// One PTAX quotation resource with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PtaxResource {
    /// Currencies available for quotation.
    Currencies,
    DollarDay {
        date: NaiveDate,
    },
    DollarPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },
    CurrencyDay {
        currency: String,
        date: NaiveDate,
    },
    CurrencyPeriod {
        currency: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Opening or intermediate bulletins of one day.
    CurrencyOpeningOrIntermediate {
        currency: String,
        date: NaiveDate,
    },
    /// Closing quotations over a period.
    CurrencyPeriodClosing {
        currency: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl PtaxResource {
    pub fn name(&self) -> &'static str {
        match self {
            PtaxResource::Currencies => "Moedas",
            PtaxResource::DollarDay { .. } => "CotacaoDolarDia",
            PtaxResource::DollarPeriod { .. } => "CotacaoDolarPeriodo",
            PtaxResource::CurrencyDay { .. } => "CotacaoMoedaDia",
            PtaxResource::CurrencyPeriod { .. } => "CotacaoMoedaPeriodo",
            PtaxResource::CurrencyOpeningOrIntermediate { .. } => {
                "CotacaoMoedaAberturaOuIntermediario"
            }
            PtaxResource::CurrencyPeriodClosing { .. } => "CotacaoMoedaPeriodoFechamento",
        }
    }

    /// Function-call arguments in wire order, dates as `MM-DD-YYYY`.
    pub fn arguments(&self) -> Vec<(&'static str, String)> {
        let date = |d: &NaiveDate| DateStyle::MonthDayYear.format(*d);
        match self {
            PtaxResource::Currencies => vec![],
            PtaxResource::DollarDay { date: day } => vec![("dataCotacao", date(day))],
            PtaxResource::DollarPeriod { start, end } => vec![
                ("dataInicial", date(start)),
                ("dataFinalCotacao", date(end)),
            ],
            PtaxResource::CurrencyDay { currency, date: day } => {
                vec![("moeda", currency.clone()), ("dataCotacao", date(day))]
            }
            PtaxResource::CurrencyPeriod {
                currency,
                start,
                end,
            } => vec![
                ("codigoMoeda", currency.clone()),
                ("dataInicial", date(start)),
                ("dataFinalCotacao", date(end)),
            ],
            PtaxResource::CurrencyOpeningOrIntermediate { currency, date: day } => {
                vec![("codigoMoeda", currency.clone()), ("dataCotacao", date(day))]
            }
            PtaxResource::CurrencyPeriodClosing {
                currency,
                start,
                end,
            } => vec![
                ("codigoMoeda", currency.clone()),
                ("dataInicialCotacao", date(start)),
                ("dataFinalCotacao", date(end)),
            ],
        }
    }

    /// Last path segment, unencoded. `Moedas` takes no arguments and has no
    /// parentheses. Argument values are OData string literals, so a quote
    /// inside one is doubled.
    pub fn path_segment(&self) -> String {
        let arguments = self.arguments();
        if arguments.is_empty() {
            return self.name().to_string();
        }
        let arguments = arguments
            .iter()
            .map(|(name, value)| format!("{}='{}'", name, value.replace('\'', "''")))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.name(), arguments)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::PtaxResource;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_ptax_path_segments() {
        assert_eq!(PtaxResource::Currencies.path_segment(), "Moedas");
        assert_eq!(
            PtaxResource::DollarDay { date: day(3, 5) }.path_segment(),
            "CotacaoDolarDia(dataCotacao='03-05-2024')"
        );
        assert_eq!(
            PtaxResource::CurrencyPeriodClosing {
                currency: "EUR".to_string(),
                start: day(1, 2),
                end: day(1, 31),
            }
            .path_segment(),
            "CotacaoMoedaPeriodoFechamento(codigoMoeda='EUR',dataInicialCotacao='01-02-2024',dataFinalCotacao='01-31-2024')"
        );
        assert_eq!(
            PtaxResource::CurrencyDay {
                currency: "USD".to_string(),
                date: day(12, 24),
            }
            .path_segment(),
            "CotacaoMoedaDia(moeda='USD',dataCotacao='12-24-2024')"
        );
    }

    #[test]
    fn test_ptax_currency_quote_is_doubled() {
        let resource = PtaxResource::CurrencyOpeningOrIntermediate {
            currency: "O'X".to_string(),
            date: day(3, 5),
        };
        assert_eq!(resource.arguments()[0], ("codigoMoeda", "O'X".to_string()));
        assert_eq!(
            resource.path_segment(),
            "CotacaoMoedaAberturaOuIntermediario(codigoMoeda='O''X',dataCotacao='03-05-2024')"
        );
    }
}
