//! English number words for post counts.

/// Words for counts 0 through 100.
///
/// Counts above the table render as the literal `100+`.
pub(crate) const NUMBER_WORDS: [&str; 101] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
    "twenty", "twenty-one", "twenty-two", "twenty-three", "twenty-four",
    "twenty-five", "twenty-six", "twenty-seven", "twenty-eight", "twenty-nine",
    "thirty", "thirty-one", "thirty-two", "thirty-three", "thirty-four",
    "thirty-five", "thirty-six", "thirty-seven", "thirty-eight", "thirty-nine",
    "forty", "forty-one", "forty-two", "forty-three", "forty-four",
    "forty-five", "forty-six", "forty-seven", "forty-eight", "forty-nine",
    "fifty", "fifty-one", "fifty-two", "fifty-three", "fifty-four",
    "fifty-five", "fifty-six", "fifty-seven", "fifty-eight", "fifty-nine",
    "sixty", "sixty-one", "sixty-two", "sixty-three", "sixty-four",
    "sixty-five", "sixty-six", "sixty-seven", "sixty-eight", "sixty-nine",
    "seventy", "seventy-one", "seventy-two", "seventy-three", "seventy-four",
    "seventy-five", "seventy-six", "seventy-seven", "seventy-eight", "seventy-nine",
    "eighty", "eighty-one", "eighty-two", "eighty-three", "eighty-four",
    "eighty-five", "eighty-six", "eighty-seven", "eighty-eight", "eighty-nine",
    "ninety", "ninety-one", "ninety-two", "ninety-three", "ninety-four",
    "ninety-five", "ninety-six", "ninety-seven", "ninety-eight", "ninety-nine",
    "one hundred",
];

/// Human-readable label for a post count.
///
/// Counts within the table are spelled out (`"three posts"`, `"one post"`);
/// anything larger falls back to `"100+ posts"`.
pub fn count_label(count: usize) -> String {
    let words = NUMBER_WORDS.get(count).copied().unwrap_or("100+");
    format!("{words} post{}", plural_s(count))
}

/// Pluralization suffix: empty for exactly one, `"s"` otherwise.
const fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_zero_to_one_hundred() {
        assert_eq!(NUMBER_WORDS.len(), 101);
        assert_eq!(NUMBER_WORDS[0], "zero");
        assert_eq!(NUMBER_WORDS[100], "one hundred");
    }

    #[test]
    fn test_table_spot_checks() {
        assert_eq!(NUMBER_WORDS[13], "thirteen");
        assert_eq!(NUMBER_WORDS[20], "twenty");
        assert_eq!(NUMBER_WORDS[21], "twenty-one");
        assert_eq!(NUMBER_WORDS[40], "forty");
        assert_eq!(NUMBER_WORDS[42], "forty-two");
        assert_eq!(NUMBER_WORDS[99], "ninety-nine");
    }

    #[test]
    fn test_count_label_zero() {
        assert_eq!(count_label(0), "zero posts");
    }

    #[test]
    fn test_count_label_singular() {
        assert_eq!(count_label(1), "one post");
    }

    #[test]
    fn test_count_label_plural() {
        assert_eq!(count_label(2), "two posts");
        assert_eq!(count_label(87), "eighty-seven posts");
    }

    #[test]
    fn test_count_label_upper_bound() {
        assert_eq!(count_label(100), "one hundred posts");
    }

    #[test]
    fn test_count_label_overflow_fallback() {
        assert_eq!(count_label(101), "100+ posts");
        assert_eq!(count_label(5000), "100+ posts");
    }

    #[test]
    fn test_plural_s() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(2), "s");
    }
}
