use gem_compare::aggregate::aggregate;
use gem_compare::model::{Dataset, Record};
use gem_compare::schema::{Category, Metric};

fn record(identifier: &str, category: Category, nadh: Option<f64>) -> Record {
    let mut r = Record::new(identifier.to_string(), [nadh, None, None, None, None, None]);
    r.category = category;
    r
}

#[test]
fn per_category_mean_median_match_hand_computed() {
    let dataset = Dataset {
        records: vec![
            record("GCF_1", Category::Pear, Some(1.0)),
            record("GCF_2", Category::Pear, Some(2.0)),
            record("GCF_3", Category::Pear, Some(3.0)),
            record("a.faa", Category::CarveMe, Some(10.0)),
            record("b.faa", Category::CarveMe, Some(20.0)),
        ],
    };

    let table = aggregate(&dataset);
    assert_eq!(table.rows.len(), 2);

    let pear = &table.rows[0];
    assert_eq!(pear.category, Category::Pear);
    assert_eq!(pear.count, 3);
    let stats = pear.metric_stats(Metric::Nadh);
    assert_eq!(stats.mean, Some(2.0));
    assert_eq!(stats.median, Some(2.0));

    let carveme = &table.rows[1];
    assert_eq!(carveme.category, Category::CarveMe);
    assert_eq!(carveme.metric_stats(Metric::Nadh).mean, Some(15.0));
    assert_eq!(carveme.metric_stats(Metric::Nadh).median, Some(15.0));
}

#[test]
fn missing_values_are_skipped_not_zeroed() {
    let dataset = Dataset {
        records: vec![
            record("GCF_1", Category::Pear, Some(1.0)),
            record("GCF_2", Category::Pear, None),
            record("GCF_3", Category::Pear, Some(3.0)),
        ],
    };

    let table = aggregate(&dataset);
    let stats = table.rows[0].metric_stats(Metric::Nadh);
    assert_eq!(stats.mean, Some(2.0));
    assert_eq!(stats.median, Some(2.0));
}

#[test]
fn all_missing_metric_yields_absent_stat() {
    let dataset = Dataset {
        records: vec![record("GCF_1", Category::Pear, None)],
    };

    let table = aggregate(&dataset);
    let stats = table.rows[0].metric_stats(Metric::Nadh);
    assert_eq!(stats.mean, None);
    assert_eq!(stats.median, None);
}

#[test]
fn empty_categories_are_absent() {
    let dataset = Dataset {
        records: vec![record("iML1515", Category::Published, Some(1.0))],
    };

    let table = aggregate(&dataset);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].category, Category::Published);
}

#[test]
fn empty_dataset_yields_empty_table() {
    let table = aggregate(&Dataset::default());
    assert!(table.rows.is_empty());
}
