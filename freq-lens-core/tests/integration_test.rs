use freq_lens_core::{
    compute_frequency_distribution, extract_columns, select_series, summarize_sorted,
    ExtractOptions,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture() -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        tmp,
        "score,label\n1,a\n2,b\n3,c\n4,d\n5,e\n6,f\n7,g\n8,h\n9,i\n10,j\n"
    )
    .unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn csv_to_distribution_end_to_end() {
    let tmp = write_fixture();
    let cols = extract_columns(tmp.path(), &ExtractOptions::default()).unwrap();
    let series = select_series(cols, Some("score")).unwrap();
    assert_eq!(series.values.len(), 10);
    assert_eq!(series.skipped_cells, 0);

    let dist = compute_frequency_distribution(&series.values).unwrap();
    assert_eq!(dist.number_of_classes, 5);
    assert_eq!(dist.class_width, 2);
    assert_eq!(dist.range, 9.0);
    assert!(dist.classes.iter().all(|c| c.frequency == 2));
    assert_eq!(dist.total_frequency(), 10);
}

#[test]
fn dirty_cells_are_skipped_not_fatal() {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(tmp, "v\n5\nn/a\n5\n?\n5\n").unwrap();
    tmp.flush().unwrap();

    let cols = extract_columns(tmp.path(), &ExtractOptions::default()).unwrap();
    let series = select_series(cols, None).unwrap();
    assert_eq!(series.values, vec![5.0, 5.0, 5.0]);
    assert_eq!(series.skipped_cells, 2);

    // all-identical data still bins: width forced to 1, three classes
    let dist = compute_frequency_distribution(&series.values).unwrap();
    assert_eq!(dist.class_width, 1);
    assert_eq!(dist.number_of_classes, 3);
    let freqs: Vec<u64> = dist.classes.iter().map(|c| c.frequency).collect();
    assert_eq!(freqs, vec![3, 0, 0]);
}

#[test]
fn summary_matches_sorted_data() {
    let tmp = write_fixture();
    let cols = extract_columns(tmp.path(), &ExtractOptions::default()).unwrap();
    let series = select_series(cols, None).unwrap();
    let dist = compute_frequency_distribution(&series.values).unwrap();
    let stats = summarize_sorted(&dist.sorted_data).unwrap();
    assert_eq!(stats.count, 10);
    assert_eq!(stats.mean, 5.5);
    assert_eq!(stats.median, 5.5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 10.0);
}
