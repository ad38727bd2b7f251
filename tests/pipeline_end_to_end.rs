use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use gem_compare::config::AnalysisConfig;
use gem_compare::ctx::Ctx;
use gem_compare::pipeline::Pipeline;
use gem_compare::schema::Category;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

const HEADER: [&str; 7] = [
    "fasta_name",
    "nadh",
    "atp",
    "biomass",
    "reactions",
    "metabolites",
    "genes",
];

const IDENTIFIERS: [&str; 8] = [
    "ec1.faa",
    "ec2.faa",
    "m1.seed",
    "m2.seed",
    "GCF_000001",
    "GCF_000002",
    "random_model",
    "misc_entry",
];

fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("BIGG_model").unwrap();
    for (col, name) in HEADER.iter().enumerate() {
        ws.write_string(0, col as u16, *name).unwrap();
    }
    for (i, identifier) in IDENTIFIERS.iter().enumerate() {
        let row = (i + 1) as u32;
        ws.write_string(row, 0, *identifier).unwrap();
        for col in 1..7u16 {
            ws.write_number(row, col, (i + 1) as f64 * col as f64)
                .unwrap();
        }
    }
    workbook.save(path).unwrap();
}

fn config_for(dir: &Path, input: &Path) -> AnalysisConfig {
    AnalysisConfig {
        input_path: input.to_path_buf(),
        sheet_name: "BIGG_model".to_string(),
        output_path: dir.join("results.xlsx"),
        chart_png: dir.join("chart.png"),
        chart_svg: dir.join("chart.svg"),
        write_json: true,
        display: false,
    }
}

#[test]
fn eight_row_scenario() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.xlsx");
    write_fixture(&input);

    let mut ctx = Ctx::new(config_for(tmp.path(), &input));
    Pipeline::full().run(&mut ctx).unwrap();

    assert_eq!(ctx.dataset.len(), 6);
    assert_eq!(ctx.discarded, 2);
    assert_eq!(ctx.dataset.category_count(Category::CarveMe), 2);
    assert_eq!(ctx.dataset.category_count(Category::ModelSeed), 2);
    assert_eq!(ctx.dataset.category_count(Category::Pear), 2);
    assert_eq!(ctx.dataset.category_count(Category::Published), 0);

    let table = ctx.aggregate.as_ref().unwrap();
    assert_eq!(table.rows.len(), 3);

    assert!(ctx.config.chart_png.exists());
    assert!(ctx.config.chart_svg.exists());
    assert!(ctx.config.json_path().exists());

    let mut workbook: Xlsx<_> = open_workbook(&ctx.config.output_path).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["Raw Data", "Statistics", "Visualization"]
    );
    let range = workbook.worksheet_range("Raw Data").unwrap();
    assert_eq!(range.rows().count(), 7);
}

#[test]
fn aggregate_table_is_idempotent_across_runs() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.xlsx");
    write_fixture(&input);

    let mut first = Ctx::new(config_for(tmp.path(), &input));
    Pipeline::full().run(&mut first).unwrap();

    let mut second = Ctx::new(config_for(tmp.path(), &input));
    Pipeline::full().run(&mut second).unwrap();

    let a = serde_json::to_string(first.aggregate.as_ref().unwrap()).unwrap();
    let b = serde_json::to_string(second.aggregate.as_ref().unwrap()).unwrap();
    assert_eq!(a, b);
}
