use gem_compare::aggregate::aggregate;
use gem_compare::io::json_writer::write_json;
use gem_compare::model::{Dataset, Record};
use gem_compare::schema::Category;
use tempfile::TempDir;

#[test]
fn json_export_names_categories() {
    let mut a = Record::new("GCF_01".to_string(), [Some(1.0); 6]);
    a.category = Category::Pear;
    let mut b = Record::new("x.seed".to_string(), [Some(2.0); 6]);
    b.category = Category::ModelSeed;
    let dataset = Dataset {
        records: vec![a, b],
    };
    let table = aggregate(&dataset);

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("stats.json");
    write_json(&path, &table).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], "PEAR");
    assert_eq!(rows[1]["category"], "ModelSEED");
}
