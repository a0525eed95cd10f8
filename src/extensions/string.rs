pub trait DayKey {
    /// Trimmed, Unicode-lowercased copy used as a day lookup key.
    fn to_day_key(&self) -> String;
}

impl DayKey for str {
    fn to_day_key(&self) -> String {
        self.trim().to_lowercase()
    }
}

impl DayKey for String {
    fn to_day_key(&self) -> String {
        self.as_str().to_day_key()
    }
}

pub trait LeadingInt {
    /// Integer prefix of the string, ignoring leading whitespace:
    /// `"08"` is 8, `" 9am"` is 9, `"-2"` is -2, `"am"` is `None`.
    fn leading_int(&self) -> Option<i32>;
}

impl LeadingInt for str {
    fn leading_int(&self) -> Option<i32> {
        let s = self.trim_start();
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s.strip_prefix('+').unwrap_or(s)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        digits[..end].parse::<i32>().ok().map(|n| sign * n)
    }
}
