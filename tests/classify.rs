use gem_compare::classify::classify;
use gem_compare::schema::Category;

#[test]
fn faa_marker_wins_over_everything() {
    assert_eq!(classify("strain.faa"), Category::CarveMe);
    assert_eq!(classify("strain.faa.seed"), Category::CarveMe);
    assert_eq!(classify("GCF_000005845.faa"), Category::CarveMe);
    assert_eq!(classify("iML1515.faa"), Category::CarveMe);
}

#[test]
fn seed_marker_wins_over_accession_and_published() {
    assert_eq!(classify("strain.seed"), Category::ModelSeed);
    assert_eq!(classify("GCF_000005845.seed"), Category::ModelSeed);
    assert_eq!(classify("iML1515.seed"), Category::ModelSeed);
}

#[test]
fn accession_without_other_markers_is_pear() {
    assert_eq!(classify("GCF_000005845.2"), Category::Pear);
    assert_eq!(classify("e_coli_GCF_000005845"), Category::Pear);
}

#[test]
fn published_segment_pattern() {
    assert_eq!(classify("iML1515"), Category::Published);
    assert_eq!(classify("e_coli_iML1515"), Category::Published);
    assert_eq!(classify("iJO1366_core"), Category::Published);
}

#[test]
fn bare_i_segment_is_not_published() {
    assert_eq!(classify("i_model"), Category::Other);
    assert_eq!(classify("i"), Category::Other);
}

#[test]
fn segment_with_punctuation_after_i_is_not_published() {
    assert_eq!(classify("iML-1515"), Category::Other);
}

#[test]
fn unmatched_identifiers_are_other() {
    assert_eq!(classify(""), Category::Other);
    assert_eq!(classify("random_model"), Category::Other);
    assert_eq!(classify("ecoli_core"), Category::Other);
}
