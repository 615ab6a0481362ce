//! Integration tests for the CSV spreadsheet reader.

use std::io::Write;

use crimescope_classifiers::categories::CrimeCategory;
use crimescope_classifiers::error::PipelineError;
use crimescope_classifiers::io::read_crime_csv;

const HEADER: &str = "state/ut,rape,kidnapping_and_abduction,dowry_deaths,\
assault_on_women_with_intent_to_outrage_her_modesty,insult_to_modesty_of_women,\
cruelty_by_husband_or_his_relatives,importation_of_girls";

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// happy path
// ---------------------------------------------------------------------------

#[test]
fn reads_rows_and_region_column() {
    let file = write_csv(&format!(
        "{}\nA,2,0,0,1,0,3,0\nB,0,0,0,0,0,0,0\n",
        HEADER
    ));

    let table = read_crime_csv(file.path()).unwrap();
    assert_eq!(table.nrows(), 2);
    assert_eq!(table.regions(), Some(&["A".to_string(), "B".to_string()][..]));
    assert_eq!(table.column(CrimeCategory::Rape).to_vec(), vec![2.0, 0.0]);
    assert_eq!(
        table
            .column(CrimeCategory::CrueltyByHusbandOrRelatives)
            .to_vec(),
        vec![3.0, 0.0]
    );
}

#[test]
fn header_matching_is_case_insensitive() {
    let file = write_csv(
        "STATE/UT,RAPE,Kidnapping_And_Abduction,dowry_deaths,\
assault_on_women_with_intent_to_outrage_her_modesty,insult_to_modesty_of_women,\
cruelty_by_husband_or_his_relatives,importation_of_girls\nA,1,0,0,0,0,0,0\n",
    );

    let table = read_crime_csv(file.path()).unwrap();
    assert_eq!(table.nrows(), 1);
    assert_eq!(table.column(CrimeCategory::Rape).to_vec(), vec![1.0]);
}

#[test]
fn region_column_is_optional() {
    let file = write_csv(
        "rape,kidnapping_and_abduction,dowry_deaths,\
assault_on_women_with_intent_to_outrage_her_modesty,insult_to_modesty_of_women,\
cruelty_by_husband_or_his_relatives,importation_of_girls\n1,2,3,4,5,6,7\n",
    );

    let table = read_crime_csv(file.path()).unwrap();
    assert!(table.regions().is_none());
}

#[test]
fn empty_cells_parse_to_nan() {
    let file = write_csv(&format!("{}\nA,,0,na,0,NaN,0,0\n", HEADER));

    let table = read_crime_csv(file.path()).unwrap();
    assert!(table.column(CrimeCategory::Rape)[0].is_nan());
    assert!(table.column(CrimeCategory::DowryDeaths)[0].is_nan());
    assert!(table.column(CrimeCategory::InsultToModesty)[0].is_nan());
    assert_eq!(
        table.column(CrimeCategory::KidnappingAndAbduction)[0],
        0.0
    );
}

// ---------------------------------------------------------------------------
// failures
// ---------------------------------------------------------------------------

#[test]
fn missing_category_column_is_reported_by_name() {
    let file = write_csv("state/ut,rape,dowry_deaths\nA,1,0\n");

    let err = read_crime_csv(file.path()).unwrap_err();
    match err {
        PipelineError::MissingColumn(name) => {
            assert_eq!(name, "kidnapping_and_abduction");
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn nonexistent_path_is_a_load_error() {
    let err = read_crime_csv("/nonexistent/crime_stats.csv").unwrap_err();
    assert!(matches!(err, PipelineError::Load(_)));
}

#[test]
fn non_numeric_cell_is_a_load_error() {
    let file = write_csv(&format!("{}\nA,lots,0,0,0,0,0,0\n", HEADER));

    let err = read_crime_csv(file.path()).unwrap_err();
    match err {
        PipelineError::Load(msg) => {
            assert!(msg.contains("lots"), "message should name the bad value: {}", msg);
            assert!(msg.contains("rape"), "message should name the column: {}", msg);
        }
        other => panic!("expected Load, got {:?}", other),
    }
}
