use std::collections::{BTreeSet, HashMap};

use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// Schema – feature → years, inferred from "<feature> <year>" headers
// ---------------------------------------------------------------------------

/// One feature and the years for which it has a column, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureYears {
    pub feature: String,
    pub years: Vec<String>,
    /// The header each year was parsed from, parallel to `years`.
    pub columns: Vec<String>,
}

/// Read-only structure derived from a table header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    /// Features in first-encounter order.
    features: Vec<FeatureYears>,
    /// Every distinct year across all features, sorted as strings.
    years: Vec<String>,
}

impl Schema {
    pub fn features(&self) -> &[FeatureYears] {
        &self.features
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.feature.as_str())
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Years recorded for `feature`, or `None` if the feature is unknown.
    pub fn years_for(&self, feature: &str) -> Option<&[String]> {
        self.features
            .iter()
            .find(|f| f.feature == feature)
            .map(|f| f.years.as_slice())
    }

    /// The table header holding `feature` in `year`, exactly as it was read.
    /// Duplicates resolve to the first occurrence.
    pub fn column_for(&self, feature: &str, year: &str) -> Option<&str> {
        let f = self.features.iter().find(|f| f.feature == feature)?;
        f.years
            .iter()
            .position(|y| y == year)
            .map(|i| f.columns[i].as_str())
    }

    /// The measurement column names this schema was inferred from, grouped by
    /// feature.
    pub fn column_names(&self) -> Vec<String> {
        self.features
            .iter()
            .flat_map(|f| f.columns.iter().cloned())
            .collect()
    }
}

/// Split a header on its rightmost whitespace run into `(feature, year)`.
///
/// Feature names may themselves contain spaces, so only the last token is
/// the year: `"Median Household Income 2019"` → `("Median Household Income", "2019")`.
pub fn split_header(column: &str) -> Result<(&str, &str), SchemaError> {
    let malformed = || SchemaError::MalformedColumnName {
        column: column.to_string(),
    };

    let split_at = column.rfind(char::is_whitespace).ok_or_else(malformed)?;
    let year = column[split_at..].trim_start();
    let feature = column[..split_at].trim_end();

    if feature.is_empty() || year.is_empty() {
        return Err(malformed());
    }
    Ok((feature, year))
}

/// Infer the feature → years schema from an ordered header list whose first
/// element is the entity column.
pub fn infer_schema<S: AsRef<str>>(
    column_names: &[S],
    entity_column: &str,
) -> Result<Schema, SchemaError> {
    let (first, measurements) = column_names.split_first().ok_or(SchemaError::NoColumns)?;
    if first.as_ref() != entity_column {
        return Err(SchemaError::EntityColumnMismatch {
            expected: entity_column.to_string(),
            found: first.as_ref().to_string(),
        });
    }

    let mut features: Vec<FeatureYears> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut all_years: BTreeSet<String> = BTreeSet::new();

    for column in measurements {
        let (feature, year) = split_header(column.as_ref())?;
        let slot = *index.entry(feature.to_string()).or_insert_with(|| {
            features.push(FeatureYears {
                feature: feature.to_string(),
                years: Vec::new(),
                columns: Vec::new(),
            });
            features.len() - 1
        });
        features[slot].years.push(year.to_string());
        features[slot].columns.push(column.as_ref().to_string());
        all_years.insert(year.to_string());
    }

    Ok(Schema {
        features,
        years: all_years.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_rightmost_whitespace() {
        let header = "Median Household Income 2019";
        assert_eq!(
            split_header(header).unwrap(),
            ("Median Household Income", "2019")
        );

        // A leftmost split would corrupt multi-word features.
        let naive: Vec<&str> = header.splitn(2, ' ').collect();
        assert_ne!(naive, ["Median Household Income", "2019"]);
        assert_eq!(naive[0], "Median");
    }

    #[test]
    fn whitespace_runs_are_a_single_delimiter() {
        assert_eq!(
            split_header("Solar Homes \t 2021").unwrap(),
            ("Solar Homes", "2021")
        );
    }

    #[test]
    fn header_without_whitespace_is_malformed() {
        for bad in ["Population", "Population ", " 2019", ""] {
            assert_eq!(
                split_header(bad),
                Err(SchemaError::MalformedColumnName {
                    column: bad.to_string()
                }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn infers_features_in_encounter_order_and_sorted_years() {
        let schema = infer_schema(
            &["State", "B 2020", "A 2019", "B 2018", "A 2021"],
            "State",
        )
        .unwrap();

        let names: Vec<&str> = schema.feature_names().collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(schema.years_for("B").unwrap(), ["2020", "2018"]);
        assert_eq!(schema.years_for("A").unwrap(), ["2019", "2021"]);
        assert_eq!(schema.years(), ["2018", "2019", "2020", "2021"]);
        assert!(schema.years_for("C").is_none());
    }

    #[test]
    fn years_sort_as_strings() {
        let schema = infer_schema(&["Metro", "A 999", "A 1000"], "Metro").unwrap();
        assert_eq!(schema.years(), ["1000", "999"]);
    }

    #[test]
    fn duplicate_headers_are_preserved() {
        let schema = infer_schema(&["State", "A 2019", "A 2019"], "State").unwrap();
        assert_eq!(schema.years_for("A").unwrap(), ["2019", "2019"]);
        assert_eq!(schema.years(), ["2019"]);
    }

    #[test]
    fn column_names_round_trip() {
        let headers = [
            "State",
            "Median Household Income 2019",
            "Median Household Income 2020",
            "Homes Heated By Gas 2020",
            "Solar 2018",
        ];
        let schema = infer_schema(&headers, "State").unwrap();

        let mut rebuilt = schema.column_names();
        rebuilt.sort();
        let mut expected: Vec<String> = headers[1..].iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn irregular_whitespace_keeps_the_real_header() {
        let headers = ["State", "Solar Homes  2019", "Solar Homes\t2020", "Wind 2019"];
        let schema = infer_schema(&headers, "State").unwrap();

        assert_eq!(schema.years_for("Solar Homes").unwrap(), ["2019", "2020"]);
        assert_eq!(
            schema.column_for("Solar Homes", "2019"),
            Some("Solar Homes  2019")
        );
        assert_eq!(
            schema.column_for("Solar Homes", "2020"),
            Some("Solar Homes\t2020")
        );
        assert_eq!(schema.column_for("Solar Homes", "2021"), None);
        assert_eq!(schema.column_names(), headers[1..]);
    }

    #[test]
    fn inference_is_deterministic() {
        let headers = ["State", "A 2019", "B 2020"];
        assert_eq!(
            infer_schema(&headers, "State").unwrap(),
            infer_schema(&headers, "State").unwrap()
        );
    }

    #[test]
    fn entity_column_must_come_first() {
        assert_eq!(
            infer_schema(&["A 2019", "State"], "State"),
            Err(SchemaError::EntityColumnMismatch {
                expected: "State".into(),
                found: "A 2019".into()
            })
        );
        assert_eq!(
            infer_schema::<&str>(&[], "State"),
            Err(SchemaError::NoColumns)
        );
    }

    #[test]
    fn malformed_measurement_column_fails_inference() {
        assert!(matches!(
            infer_schema(&["State", "A 2019", "Population"], "State"),
            Err(SchemaError::MalformedColumnName { column }) if column == "Population"
        ));
    }
}
