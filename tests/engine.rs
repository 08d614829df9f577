use std::io::Write;

use energy_explorer::data::loader::load_table;
use energy_explorer::{
    group_series, infer_schema, project, reshape_for_chart, CellValue, ColumnMatch, Dataset,
    DatasetKind, Outcome, Selection, SchemaError,
};
use tempfile::Builder;

const STATE_CSV: &str = "\
State,Median Household Income 2019,Median Household Income 2020,Homes Heated By Solar Energy 2020
Ohio,58642,60360,1800
Iowa,61691,,950
Texas,64034,66963,21000
";

fn state_dataset() -> Dataset {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(STATE_CSV.as_bytes()).unwrap();
    Dataset::open(file.path(), DatasetKind::State).unwrap()
}

#[test]
fn loaded_csv_yields_multi_word_features() {
    let ds = state_dataset();
    assert_eq!(
        ds.features(),
        ["Median Household Income", "Homes Heated By Solar Energy"]
    );
    assert_eq!(ds.years(), ["2019", "2020"]);
    assert_eq!(
        ds.schema().years_for("Median Household Income").unwrap(),
        ["2019", "2020"]
    );
    assert_eq!(ds.entities(), ["Ohio", "Iowa", "Texas"]);
}

#[test]
fn filter_then_chart_end_to_end() {
    let ds = state_dataset();

    let sel = Selection::default()
        .with_entities(["Texas", "Iowa"])
        .with_features(["Median Household Income"])
        .with_years(["2020"]);
    let table = ds.project(&sel, ColumnMatch::Substring).into_found().unwrap();
    assert_eq!(table.columns(), ["State", "Median Household Income 2020"]);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.cell(0, "Median Household Income 2020"),
        Some(&CellValue::Null)
    );

    let rows = ds
        .reshape_for_chart(&ds.default_chart_entities(5), "Median Household Income")
        .into_found()
        .unwrap();
    assert_eq!(rows.len(), 6);
    let series = group_series(&rows);
    assert_eq!(series.len(), 3);
    assert_eq!(series[1].entity, "Iowa");
    assert_eq!(series[1].points[1].1, CellValue::Null);
}

#[test]
fn free_functions_match_dataset_methods() {
    const SOLAR: &str = "Homes Heated By Solar Energy";
    let ds = state_dataset();
    let sel = Selection::default().with_years(["2019"]);
    assert_eq!(
        project(ds.table(), ds.schema(), "State", &sel, ColumnMatch::Exact),
        ds.project(&sel, ColumnMatch::Exact)
    );
    assert_eq!(
        reshape_for_chart(ds.table(), "State", &["Ohio"], SOLAR, ds.years()),
        ds.reshape_for_chart(&["Ohio"], SOLAR)
    );
}

#[test]
fn metro_table_under_state_kind_is_rejected() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"Metro,Solar 2020\nBoise,3\n").unwrap();

    let err = Dataset::open(file.path(), DatasetKind::State).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SchemaError>(),
        Some(SchemaError::EntityColumnMismatch { .. })
    ));
    assert!(Dataset::open(file.path(), DatasetKind::Metro).is_ok());
}

#[test]
fn malformed_header_surfaces_at_load_time() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"State,Population\nOhio,11780000\n").unwrap();

    let err = Dataset::open(file.path(), DatasetKind::State).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SchemaError>(),
        Some(&SchemaError::MalformedColumnName {
            column: "Population".into()
        })
    );

    let table = load_table(file.path()).unwrap();
    assert!(infer_schema(table.columns(), "State").is_err());
}

#[test]
fn no_constraint_is_identity_and_empty_is_explicit() {
    let ds = state_dataset();
    assert_eq!(
        ds.project(&Selection::default(), ColumnMatch::Substring),
        Outcome::Found(ds.table().clone())
    );
    let sel = Selection::default().with_features(["Wind"]);
    assert_eq!(ds.project(&sel, ColumnMatch::Substring), Outcome::Empty);
}
