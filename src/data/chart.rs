use super::filter::Outcome;
use super::model::{CellValue, Table};
use super::schema::split_header;

// ---------------------------------------------------------------------------
// Long-form reshape for time-series charts
// ---------------------------------------------------------------------------

/// One (entity, year, value) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRow {
    pub entity: String,
    pub year: String,
    /// Passed through from the table cell untouched; may be `Null`.
    pub value: CellValue,
}

/// Pivot the wide `"<feature> <year>"` columns of `table` into long form.
///
/// For each entity in the given order and each year in `years` order, emits a
/// row when the column exists. Values come from the first row whose entity
/// column equals the entity; entities with no row contribute nothing.
pub fn reshape_for_chart<S: AsRef<str>>(
    table: &Table,
    entity_column: &str,
    entities: &[S],
    feature: &str,
    years: &[String],
) -> Outcome<Vec<PlotRow>> {
    let Some(entity_idx) = table.column_index(entity_column) else {
        log::warn!("entity column {entity_column:?} missing; nothing to chart");
        return Outcome::Empty;
    };

    // Resolve each year's column once; years without a column are dropped.
    let year_columns: Vec<(&String, usize)> = years
        .iter()
        .filter_map(|y| header_index(table, feature, y).map(|i| (y, i)))
        .collect();

    let mut out = Vec::with_capacity(entities.len() * year_columns.len());
    for entity in entities {
        let entity = entity.as_ref();
        let Some(row) = table
            .rows()
            .iter()
            .find(|r| r[entity_idx].entity_key().as_deref() == Some(entity))
        else {
            log::debug!("no row for entity {entity:?}");
            continue;
        };

        out.extend(year_columns.iter().map(|(year, col)| PlotRow {
            entity: entity.to_string(),
            year: (*year).clone(),
            value: row[*col].clone(),
        }));
    }

    if out.is_empty() {
        return Outcome::Empty;
    }
    log::debug!("reshaped {feature:?} into {} plot rows", out.len());
    Outcome::Found(out)
}

/// First column whose header parses to `(feature, year)`, however the two
/// tokens are separated.
fn header_index(table: &Table, feature: &str, year: &str) -> Option<usize> {
    table
        .columns()
        .iter()
        .position(|c| split_header(c).is_ok_and(|parsed| parsed == (feature, year)))
}

/// Title shown above the line chart for `feature`.
pub fn chart_title(feature: &str) -> String {
    format!("{feature} over Years")
}

// ---------------------------------------------------------------------------
// Series grouping
// ---------------------------------------------------------------------------

/// All observations for one entity, ready to draw as a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub entity: String,
    pub points: Vec<(String, CellValue)>,
}

/// Group long-form rows by entity, keeping first-appearance order of entities
/// and row order within each entity.
pub fn group_series(rows: &[PlotRow]) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();
    for row in rows {
        let point = (row.year.clone(), row.value.clone());
        match series.iter_mut().find(|s| s.entity == row.entity) {
            Some(s) => s.points.push(point),
            None => series.push(Series {
                entity: row.entity.clone(),
                points: vec![point],
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(ys: &[&str]) -> Vec<String> {
        ys.iter().map(|y| y.to_string()).collect()
    }

    fn table() -> Table {
        Table::new(
            ["State", "A 2019", "A 2020", "B 2019"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            vec![
                vec!["X".into(), 1i64.into(), 2i64.into(), 10i64.into()],
                vec!["Y".into(), 3i64.into(), CellValue::Null, 11i64.into()],
                vec!["X".into(), 99i64.into(), 98i64.into(), 12i64.into()],
            ],
        )
        .unwrap()
    }

    fn keys(rows: &[PlotRow]) -> Vec<(&str, &str)> {
        rows.iter()
            .map(|r| (r.entity.as_str(), r.year.as_str()))
            .collect()
    }

    #[test]
    fn rows_are_entity_major_then_year() {
        let out = reshape_for_chart(
            &table(),
            "State",
            &["X", "Y"],
            "A",
            &years(&["2019", "2020"]),
        )
        .into_found()
        .unwrap();
        assert_eq!(
            keys(&out),
            [("X", "2019"), ("X", "2020"), ("Y", "2019"), ("Y", "2020")]
        );
    }

    #[test]
    fn first_matching_row_wins() {
        let out = reshape_for_chart(&table(), "State", &["X"], "A", &years(&["2019"]))
            .into_found()
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, CellValue::Integer(1));
    }

    #[test]
    fn missing_values_pass_through() {
        let out = reshape_for_chart(&table(), "State", &["Y"], "A", &years(&["2020"]))
            .into_found()
            .unwrap();
        assert_eq!(out[0].value, CellValue::Null);
    }

    #[test]
    fn years_without_a_column_are_skipped() {
        let out = reshape_for_chart(
            &table(),
            "State",
            &["X", "Y"],
            "B",
            &years(&["2019", "2020"]),
        )
        .into_found()
        .unwrap();
        assert_eq!(keys(&out), [("X", "2019"), ("Y", "2019")]);
    }

    #[test]
    fn irregular_header_whitespace_still_resolves() {
        let t = Table::new(
            vec![
                "State".into(),
                "Solar Homes  2019".into(),
                "Solar Homes\t2020".into(),
            ],
            vec![vec!["Ohio".into(), 5i64.into(), 6i64.into()]],
        )
        .unwrap();
        let ys = years(&["2019", "2020"]);
        let out = reshape_for_chart(&t, "State", &["Ohio"], "Solar Homes", &ys)
            .into_found()
            .unwrap();
        assert_eq!(keys(&out), [("Ohio", "2019"), ("Ohio", "2020")]);
        assert_eq!(out[1].value, CellValue::Integer(6));
    }

    #[test]
    fn unknown_entities_and_features_are_empty() {
        let ys = years(&["2019", "2020"]);
        assert!(reshape_for_chart(&table(), "State", &["Z"], "A", &ys).is_empty());
        assert!(reshape_for_chart(&table(), "State", &["X"], "Q", &ys).is_empty());
        assert!(reshape_for_chart::<&str>(&table(), "State", &[], "A", &ys).is_empty());
    }

    #[test]
    fn more_than_five_entities_are_still_processed() {
        let rows: Vec<Vec<CellValue>> = (0..7)
            .map(|i| vec![CellValue::String(format!("E{i}")), CellValue::Integer(i)])
            .collect();
        let t = Table::new(vec!["Metro".into(), "A 2019".into()], rows).unwrap();
        let entities: Vec<String> = (0..7).map(|i| format!("E{i}")).collect();
        let out = reshape_for_chart(&t, "Metro", &entities, "A", &years(&["2019"]))
            .into_found()
            .unwrap();
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn series_group_by_entity_in_order() {
        let out = reshape_for_chart(
            &table(),
            "State",
            &["Y", "X"],
            "A",
            &years(&["2019", "2020"]),
        )
        .into_found()
        .unwrap();
        let series = group_series(&out);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].entity, "Y");
        assert_eq!(
            series[1].points,
            [
                ("2019".to_string(), CellValue::Integer(1)),
                ("2020".to_string(), CellValue::Integer(2))
            ]
        );
        assert_eq!(chart_title("Solar Homes"), "Solar Homes over Years");
    }
}
