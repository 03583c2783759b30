use serde::Serialize;

/// Statistics of the numbers embedded in an input string.
///
/// A number is a maximal run of ASCII digits, so `"a12b3"` holds 12 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Aggregates {
    /// Sum of every number, saturating at `i64::MAX`
    pub sum: i64,
    /// How many numbers were found
    pub numbers: usize,
}

impl Aggregates {
    /// Scans `input` once and collects its numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulecheck::Aggregates;
    ///
    /// let aggregates = Aggregates::extract("abc 23eft fata4s2van bis23woj1t @175sed2xc");
    /// assert_eq!(aggregates.sum, 230);
    /// assert_eq!(aggregates.numbers, 7);
    /// assert_eq!(aggregates.average(), Some(32));
    ///
    /// assert_eq!(Aggregates::extract("no digits").average(), None);
    /// ```
    pub fn extract(input: &str) -> Self {
        let mut aggregates = Aggregates::default();
        let mut run: Option<i64> = None;

        for byte in input.bytes() {
            if byte.is_ascii_digit() {
                let digit = i64::from(byte - b'0');
                let value = run.unwrap_or(0);
                run = Some(value.saturating_mul(10).saturating_add(digit));
            } else if let Some(value) = run.take() {
                aggregates.add(value);
            }
        }
        if let Some(value) = run {
            aggregates.add(value);
        }

        aggregates
    }

    fn add(&mut self, value: i64) {
        self.sum = self.sum.saturating_add(value);
        self.numbers += 1;
    }

    /// Floored average of the numbers, or `None` when there are none.
    pub fn average(&self) -> Option<i64> {
        let count = i64::try_from(self.numbers).ok().filter(|&n| n > 0)?;
        Some(self.sum / count)
    }
}

/// Sum and floored average of the numbers in `input`.
///
/// See [`Aggregates::average`] for the no-numbers case.
pub fn extract_aggregates(input: &str) -> Aggregates {
    Aggregates::extract(input)
}
