//! Unit tests for label derivation

use mrclog::label::{clean_label, file_stem, longest_common_substring};
use mrclog::reduce_to_common_label;

#[test]
fn empty_input_gives_empty_label() {
    let none: Vec<String> = Vec::new();
    assert_eq!(reduce_to_common_label(&none), "");
}

#[test]
fn single_input_is_returned_as_is() {
    assert_eq!(reduce_to_common_label(&["abc"]), "abc");
}

#[test]
fn pair_reduces_to_shared_middle() {
    assert_eq!(reduce_to_common_label(&["xxabcxx", "yyabcyy"]), "abc");
}

#[test]
fn three_way_is_a_left_fold() {
    let inputs = ["foo_bar_1", "foo_bar_2", "foo_baz_3"];
    let fold = longest_common_substring(
        &longest_common_substring(inputs[0], inputs[1]),
        inputs[2],
    );
    assert_eq!(reduce_to_common_label(&inputs), fold);
}

#[test]
fn result_is_stable_across_calls() {
    let inputs = ["ab_cd_ef", "cd_ef_ab", "ef_ab_cd"];
    let first = reduce_to_common_label(&inputs);
    for _ in 0..10 {
        assert_eq!(reduce_to_common_label(&inputs), first);
    }
}

#[test]
fn stems_of_algorithm_runs_share_trace_name() {
    let stems: Vec<String> = [
        "/data/logs/emap/cloudphysics_w44-emap.log",
        "/data/logs/fss/cloudphysics_w44-fss.log",
    ]
    .iter()
    .map(|p| file_stem(p))
    .collect();

    let label = reduce_to_common_label(&stems);
    assert_eq!(label, "cloudphysics_w44-");
    assert_eq!(clean_label(&label), "cloudphysics_w44");
}
