use word_ladder::Dictionary;

#[test]
fn test_filters_by_length() {
    let words = ["cat", "dog", "hello", "at", "cot", "planet", "dot"];
    let dict = Dictionary::from_words(words, 3);

    assert_eq!(dict.word_len(), 3);
    assert_eq!(dict.len(), 4);
    assert!(dict.contains("cat"));
    assert!(dict.contains("dog"));
    assert!(dict.contains("cot"));
    assert!(dict.contains("dot"));
    assert!(!dict.contains("hello"));
    assert!(!dict.contains("at"));
}

#[test]
fn test_deduplicates_input() {
    let words = ["cat", "cat", "dog", "cat"];
    let dict = Dictionary::from_words(words, 3);

    assert_eq!(dict.len(), 2);
}

#[test]
fn test_no_matching_length_is_empty_not_error() {
    let words = ["cat", "dog"];
    let dict = Dictionary::from_words(words, 7);

    assert!(dict.is_empty());
    assert_eq!(dict.len(), 0);
    assert_eq!(dict.word_len(), 7);
}

#[test]
fn test_no_normalization_applied() {
    let dict = Dictionary::from_words(["Cat", "cat"], 3);

    assert_eq!(dict.len(), 2);
    assert!(dict.contains("Cat"));
    assert!(dict.contains("cat"));
    assert!(!dict.contains("CAT"));
}

#[test]
fn test_contains_bytes() {
    let dict = Dictionary::from_words(["cat", "dog"], 3);

    assert!(dict.contains_bytes(b"cat"));
    assert!(!dict.contains_bytes(b"cow"));
    assert!(!dict.contains_bytes(&[0xff, 0xfe, 0xfd]));
}

#[test]
fn test_words_iterates_members() {
    let dict = Dictionary::from_words(["cat", "dog", "hello"], 3);
    let mut members: Vec<&str> = dict.words().collect();
    members.sort();

    assert_eq!(members, vec!["cat", "dog"]);
}

#[test]
fn test_load_from_path() {
    // Integration tests run with the package root as working directory.
    let dict = Dictionary::load_from_path("dictionary.txt", 3).unwrap();

    assert!(!dict.is_empty());
    assert!(dict.contains("cat"));
    assert!(dict.contains("dog"));
    assert!(dict.words().all(|w| w.len() == 3));
}

#[test]
fn test_load_from_missing_path_is_error() {
    let result = Dictionary::load_from_path("no_such_wordlist.txt", 3);

    assert!(result.is_err());
}
