use chrono::NaiveDate;

use crate::{types::SeriesCode, Format};

use super::{
    common::{DateStyle, QueryParams},
    Query,
};

/// Query for one SGS time series.
///
/// Dates are sent as `DD/MM/YYYY`. `last` is a path suffix (`/ultimos/N`)
/// and is sent alongside any date range; the API decides how they combine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SgsQuery {
    pub code: SeriesCode,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub last: Option<u32>,
    pub format: Format,
}

impl Query for SgsQuery {
    fn params(&self) -> QueryParams {
        let style = DateStyle::DayMonthYear;
        let mut params = QueryParams::new();
        params
            .set("formato", self.effective_format())
            .push("dataInicial", self.start.map(|d| style.format(d)))
            .push("dataFinal", self.end.map(|d| style.format(d)));
        params
    }
}

impl SgsQuery {
    pub fn new(code: impl Into<SeriesCode>) -> Self {
        Self {
            code: code.into(),
            start: None,
            end: None,
            last: None,
            format: Format::Json,
        }
    }

    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with_start(start).with_end(end)
    }

    /// Only the most recent `last` observations.
    pub fn with_last(mut self, last: u32) -> Self {
        self.last = Some(last);
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// The series API only serves JSON and CSV; anything else falls back to JSON.
    pub fn effective_format(&self) -> Format {
        match self.format {
            Format::Csv => Format::Csv,
            _ => Format::Json,
        }
    }

    /// Path relative to the series base URL.
    pub fn path(&self) -> String {
        let mut path = format!("bcdata.sgs.{}/dados", self.code);
        if let Some(last) = self.last {
            path.push_str(&format!("/ultimos/{}", last));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use crate::{query::Query, types::SeriesCode, Format};

    use super::SgsQuery;

    #[test]
    fn test_sgs_query() {
        let url = Url::parse("https://example.com/dados").unwrap();

        insta::assert_snapshot!(SgsQuery::new(SeriesCode::SelicMonthlyAccumulated).add_to_url(&url).as_str(), @"https://example.com/dados?formato=json");

        let query = SgsQuery::new(700u32)
            .with_range(
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            )
            .with_last(3);
        assert_eq!(query.path(), "bcdata.sgs.700/dados/ultimos/3");
        insta::assert_snapshot!(query.add_to_url(&url).as_str(), @"https://example.com/dados?formato=json&dataInicial=01%2F01%2F2023&dataFinal=31%2F01%2F2023");
    }

    #[test]
    fn test_text_formats_other_than_csv_fall_back_to_json() {
        let query = SgsQuery::new(11u32).with_format(Format::Xml);
        assert_eq!(query.effective_format(), Format::Json);
        assert_eq!(query.params().get("formato"), Some("json"));

        let query = SgsQuery::new(11u32).with_format(Format::Csv);
        assert_eq!(query.params().get("formato"), Some("csv"));
    }
}
