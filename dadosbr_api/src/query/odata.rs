//! OData system query options for the Olinda services.

use crate::Format;

use super::{common::QueryParams, Query};

/// OData options are sent with a `$` prefix (`top` becomes `$top`).
fn wire_key(option: &str) -> String {
    format!("${}", option)
}

/// Typed set of the OData options the Olinda services accept.
///
/// `$format` is always sent; it defaults to JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ODataQuery {
    pub top: Option<u32>,
    pub skip: Option<u32>,
    pub filter: Option<String>,
    pub orderby: Option<String>,
    pub select: Option<String>,
    pub format: Format,
}

impl Query for ODataQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push(&wire_key("top"), self.top)
            .push(&wire_key("skip"), self.skip)
            .push(&wire_key("filter"), self.filter.as_deref())
            .push(&wire_key("orderby"), self.orderby.as_deref())
            .push(&wire_key("select"), self.select.as_deref())
            .set(&wire_key("format"), self.format.odata_value());
        params
    }
}

impl ODataQuery {
    /// Maximum number of records to return.
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Number of records to skip, for paging.
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Raw OData filter expression, e.g. `Indicador eq 'IPCA'`.
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    /// Sort expression, e.g. `Data desc`.
    pub fn with_orderby(mut self, orderby: &str) -> Self {
        self.orderby = Some(orderby.to_string());
        self
    }

    /// Restricts the returned columns.
    pub fn with_select(mut self, fields: &[&str]) -> Self {
        self.select = Some(fields.join(","));
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{query::Query, Format};

    use super::ODataQuery;

    #[test]
    fn test_odata_query() {
        let url = Url::parse("https://example.com/odata/Resource").unwrap();

        insta::assert_snapshot!(ODataQuery::default().add_to_url(&url).as_str(), @"https://example.com/odata/Resource?%24format=json");

        insta::assert_snapshot!(ODataQuery::default()
            .with_top(10)
            .with_skip(0)
            .with_select(&["Data", "Mediana"])
            .with_format(Format::Csv)
            .add_to_url(&url)
            .as_str(), @"https://example.com/odata/Resource?%24top=10&%24skip=0&%24select=Data%2CMediana&%24format=text%2Fcsv");
    }

    #[test]
    fn test_unset_options_are_not_sent() {
        let params = ODataQuery::default().with_top(5).params();
        assert_eq!(params.get("$top"), Some("5"));
        assert!(!params.contains_key("$filter"));
        assert!(!params.contains_key("$skip"));
        assert_eq!(params.get("$format"), Some("json"));
    }
}
