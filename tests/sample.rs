use mldata::dataset::Sample;

fn assert_lengths(sample: &Sample, n_input: usize, n_ideal: usize) {
    assert_eq!(sample.input_len(), n_input);
    assert_eq!(sample.input().len(), n_input);
    assert_eq!(sample.ideal_len(), n_ideal);
    assert_eq!(sample.ideal().len(), n_ideal);
    assert_eq!(sample.is_unsupervised(), n_ideal == 0);
    assert_eq!(sample.is_supervised(), n_ideal != 0);
}

#[test]
fn unsupervised_sized() {
    let sample = Sample::unsupervised(3);
    assert_lengths(&sample, 3, 0);
    assert_eq!(sample.input(), &[0.0, 0.0, 0.0]);
    assert!(sample.ideal().is_empty());
    assert_eq!(sample.label(), None);
}

#[test]
fn supervised_sized_then_labeled() {
    let mut sample = Sample::supervised(2, 1);
    sample.set_label(Some("a".to_string()));
    assert_lengths(&sample, 2, 1);
    assert_eq!(sample.input(), &[0.0, 0.0]);
    assert_eq!(sample.ideal(), &[0.0]);
    assert_eq!(sample.label(), Some("a"));
}

#[test]
fn sized_with_label() {
    let sample = Sample::with_dimensions(4, 2, Some("tag".to_string()));
    assert_lengths(&sample, 4, 2);
    assert!(sample.input().iter().chain(sample.ideal()).all(|x| *x == 0.0));
    assert_eq!(sample.label(), Some("tag"));

    let sample = Sample::with_dimensions(0, 0, None);
    assert_lengths(&sample, 0, 0);
    assert_eq!(sample.label(), None);
}

#[test]
fn supervised_from_data() {
    let mut sample = Sample::new(vec![1.0, 2.0], vec![9.0], Some("x".to_string()));
    assert_lengths(&sample, 2, 1);
    assert_eq!(sample.input(), &[1.0, 2.0]);
    assert_eq!(sample.ideal(), &[9.0]);
    assert_eq!(sample.label(), Some("x"));

    sample.input_mut()[0] = 5.0;
    assert_eq!(sample.input()[0], 5.0);
    sample.ideal_mut()[0] = -1.5;
    assert_eq!(sample.ideal()[0], -1.5);
    assert_lengths(&sample, 2, 1);
    assert_eq!(
        sample.to_string(),
        "[BasicData: input:[5.0, 2.0], ideal:[-1.5], label:x]"
    );
}

#[test]
fn data_constructors_move_storage() {
    let input = vec![1.0, 2.0, 3.0];
    let ptr = input.as_ptr();
    let sample = Sample::new(input, vec![4.0], None);
    assert_eq!(sample.input().as_ptr(), ptr);

    let (input, ideal, label) = sample.into_parts();
    assert_eq!(input.as_ptr(), ptr);
    assert_eq!(ideal, vec![4.0]);
    assert_eq!(label, None);
}

#[test]
fn unsupervised_from_data() {
    let sample = Sample::from_input_labeled(vec![0.5], Some("u".to_string()));
    assert_lengths(&sample, 1, 0);
    assert_eq!(sample.input(), &[0.5]);
    assert_eq!(sample.label(), Some("u"));

    let sample = Sample::from_input(vec![0.25, 0.75]);
    assert_lengths(&sample, 2, 0);
    assert_eq!(sample.label(), None);
    assert_eq!(Sample::from(vec![0.25, 0.75]), sample);

    let sample = Sample::from_input(Vec::new());
    assert_lengths(&sample, 0, 0);
}

#[test]
fn label_round_trip() {
    let mut sample = Sample::unsupervised(1);
    sample.set_label(Some(String::new()));
    assert_eq!(sample.label(), Some(""));
    sample.set_label(Some("b".to_string()));
    assert_eq!(sample.label(), Some("b"));
    sample.set_label(None);
    assert_eq!(sample.label(), None);
    assert_lengths(&sample, 1, 0);
}

#[test]
fn display() {
    let sample = Sample::new(vec![1.0, 2.0], vec![9.0], Some("x".to_string()));
    assert_eq!(
        sample.to_string(),
        "[BasicData: input:[1.0, 2.0], ideal:[9.0], label:x]"
    );
    assert_eq!(
        Sample::unsupervised(0).to_string(),
        "[BasicData: input:[], ideal:[], label:null]"
    );
}
