//! Endpoint path templates.

use std::fmt::Display;

use crate::Format;

/// Path template of one endpoint, relative to its client's base URL.
///
/// `{}` placeholders are filled in order with path-embedded identifiers
/// (years, contract ids, ...). Routes with a CSV variant serve CSV from the
/// same path with a literal `/csv` suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    template: &'static str,
    csv: bool,
}

impl Route {
    pub const fn new(template: &'static str) -> Self {
        Self {
            template,
            csv: false,
        }
    }

    pub const fn with_csv(self) -> Self {
        Self {
            template: self.template,
            csv: true,
        }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn has_csv(&self) -> bool {
        self.csv
    }

    /// Builds the concrete path for `args`, adding `/csv` when CSV is
    /// requested and this route has a CSV variant.
    pub fn path(&self, args: &[&(dyn Display + Sync)], format: Format) -> String {
        debug_assert_eq!(
            self.template.matches("{}").count(),
            args.len(),
            "argument count mismatch for route {}",
            self.template
        );

        let mut path = String::with_capacity(self.template.len() + 16);
        let mut args = args.iter();
        for (i, part) in self.template.split("{}").enumerate() {
            if i > 0 {
                if let Some(arg) = args.next() {
                    path.push_str(&arg.to_string());
                }
            }
            path.push_str(part);
        }

        if format == Format::Csv {
            if self.csv {
                path.push_str("/csv");
            } else {
                tracing::warn!("{} has no CSV variant, requesting JSON", self.template);
            }
        }
        path
    }
}
