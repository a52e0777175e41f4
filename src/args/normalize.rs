/// Returns true if the token looks like a fragment of a filesystem path.
fn has_path_separator(token: &str) -> bool {
    token.contains('/') || token.contains('\\')
}

/// Re-join command line tokens that belong to a single path.
///
/// Shells split `C:/My Photos/cat.png` into `C:/My` and `Photos/cat.png`.
/// Consecutive tokens containing a path separator are concatenated, each
/// followed by a single space, into one element. Any token without a separator
/// closes the current group and is emitted on its own, so flags are never
/// swallowed by a preceding path.
///
/// Merged elements keep the trailing space of their last fragment.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized = Vec::new();
    let mut group = String::new();

    for arg in args {
        let arg = arg.as_ref();
        if has_path_separator(arg) {
            group.push_str(arg);
            group.push(' ');
            continue;
        }

        if !group.is_empty() {
            normalized.push(std::mem::take(&mut group));
        }
        normalized.push(arg.to_string());
    }

    if !group.is_empty() {
        normalized.push(group);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tokens_untouched() {
        let result = normalize_args(["-f", "a.png", "b.jpg"]);
        assert_eq!(result, vec!["-f", "a.png", "b.jpg"]);
    }

    #[test]
    fn test_split_path_is_rejoined() {
        let result = normalize_args(["-f", "C:/My", "Photos/cat.png"]);
        assert_eq!(result, vec!["-f", "C:/My Photos/cat.png "]);
    }

    #[test]
    fn test_backslash_counts_as_separator() {
        let result = normalize_args(["--file", r"C:\Users\me", r"pics\dog.jpg"]);
        assert_eq!(result, vec!["--file", r"C:\Users\me pics\dog.jpg "]);
    }

    #[test]
    fn test_flag_after_path_is_separate_element() {
        let result = normalize_args(["-f", "photos/a.png", "-d", "photos/"]);
        assert_eq!(result, vec!["-f", "photos/a.png ", "-d", "photos/ "]);
    }

    #[test]
    fn test_plain_token_after_path_is_not_merged() {
        // A separator-free token closes the group and is kept as its own element
        let result = normalize_args(["-f", "dir/a.png", "b.png", "dir/c.png"]);
        assert_eq!(result, vec!["-f", "dir/a.png ", "b.png", "dir/c.png "]);
    }

    #[test]
    fn test_empty_input() {
        let result = normalize_args(Vec::<String>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let input = ["a/b", "c", "d/e", "f/g", "-h", "x"];
        let result = normalize_args(input);
        assert!(result.len() <= input.len());
        assert_eq!(result, vec!["a/b ", "c", "d/e f/g ", "-h", "x"]);
    }
}
