//! Table column metadata for the report presentation layer.

/// One displayable column of the listing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportColumn {
    /// Record field key.
    pub key: &'static str,

    /// Header label.
    pub label: &'static str,

    /// Preferred column width in pixels.
    pub width: u16,
}

/// Default columns of the cities report, in display order.
pub const DEFAULT_COLUMNS: &[ReportColumn] = &[
    ReportColumn {
        key: "name",
        label: "Name",
        width: 220,
    },
    ReportColumn {
        key: "address",
        label: "Address",
        width: 320,
    },
    ReportColumn {
        key: "website",
        label: "Website",
        width: 180,
    },
    ReportColumn {
        key: "phone_number",
        label: "Contact",
        width: 140,
    },
    ReportColumn {
        key: "reviews_count",
        label: "Review Count",
        width: 120,
    },
    ReportColumn {
        key: "reviews_average",
        label: "Review Avg",
        width: 120,
    },
    ReportColumn {
        key: "category",
        label: "Category",
        width: 140,
    },
    ReportColumn {
        key: "city",
        label: "City",
        width: 140,
    },
    ReportColumn {
        key: "state",
        label: "State",
        width: 140,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_cover_known_fields() {
        let keys: Vec<&str> = DEFAULT_COLUMNS.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), 9);
        assert!(keys.contains(&"city"));
        assert!(keys.contains(&"category"));
        assert!(keys.contains(&"reviews_count"));
    }
}
