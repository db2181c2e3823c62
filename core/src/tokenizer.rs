/// Split text on ASCII spaces. Runs of spaces never produce empty words and
/// no other character (tabs included) is treated as a separator.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}
