// ============================================================================
// English Language Rules
// Short-scale English numerals (thousand, million, billion, trillion)
// ============================================================================

use crate::domain::is_unit;
use crate::interfaces::Language;
use crate::numeric::{ConversionError, ConversionResult};

const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English rule set.
///
/// Teens follow `<unit>teen` except the irregular 11, 12, 13, 15 and 18;
/// tens hyphenate with the unit word only when the unit digit is nonzero.
/// Magnitude words are invariant (no plural agreement).
pub struct English;

impl Language for English {
    fn unit(&self, value: u16, _modulus: u64, _index: u8) -> ConversionResult<&'static str> {
        UNITS
            .get(value as usize)
            .copied()
            .ok_or(ConversionError::LexicalDomain { value, lower: 0, upper: 9 })
    }

    fn ten(&self, value: u16, modulus: u64, index: u8) -> ConversionResult<String> {
        match value {
            11 => Ok("eleven".to_string()),
            12 => Ok("twelve".to_string()),
            13 => Ok("thirteen".to_string()),
            15 => Ok("fifteen".to_string()),
            18 => Ok("eighteen".to_string()),
            14 | 16 | 17 | 19 => {
                Ok(format!("{}teen", self.unit(value % 10, modulus, index)?))
            },
            10 | 20..=99 => {
                let first = (value / 10) as usize;
                let second = value % 10;
                let mut output = TENS[first].to_string();
                if second > 0 {
                    output.push('-');
                    output.push_str(self.unit(second, modulus, index)?);
                }
                Ok(output)
            },
            _ => Err(ConversionError::LexicalDomain { value, lower: 10, upper: 99 }),
        }
    }

    fn hundred(&self, value: u16, modulus: u64, index: u8) -> ConversionResult<String> {
        if !(100..=999).contains(&value) {
            return Err(ConversionError::LexicalDomain { value, lower: 100, upper: 999 });
        }
        let first = value / 100;
        let second = value % 100;

        let mut output = format!("{} hundred", self.unit(first, modulus, index)?);
        if second > 0 {
            output.push(' ');
            if is_unit(second) {
                output.push_str(self.unit(second, modulus, index)?);
            } else {
                output.push_str(&self.ten(second, modulus, index)?);
            }
        }
        Ok(output)
    }

    fn magnitude(&self, _value: u16, _modulus: u64, index: u8) -> Option<&'static str> {
        match index {
            12 => Some("trillion"),
            9 => Some("billion"),
            6 => Some("million"),
            3 => Some("thousand"),
            _ => None,
        }
    }

    fn fraction_clause(&self, fraction: u8) -> String {
        format!("with {}/100", fraction)
    }

    fn name(&self) -> &str {
        "English"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Converter;
    use crate::interfaces::NoOpHook;
    use std::sync::Arc;

    fn to_text(number: u64) -> String {
        Converter::new(number, Box::new(English), Arc::new(NoOpHook))
            .to_text()
            .unwrap()
    }

    #[test]
    fn test_units() {
        assert_eq!(to_text(0), "zero");
        assert_eq!(to_text(1), "one");
        assert_eq!(to_text(9), "nine");
    }

    #[test]
    fn test_tens_and_teens() {
        assert_eq!(to_text(10), "ten");
        assert_eq!(to_text(13), "thirteen");
        assert_eq!(to_text(15), "fifteen");
        assert_eq!(to_text(17), "seventeen");
        assert_eq!(to_text(18), "eighteen");
        assert_eq!(to_text(40), "forty");
        assert_eq!(to_text(59), "fifty-nine");
        assert_eq!(to_text(73), "seventy-three");
        assert_eq!(to_text(81), "eighty-one");
        assert_eq!(to_text(99), "ninety-nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(to_text(100), "one hundred");
        assert_eq!(to_text(101), "one hundred one");
        assert_eq!(to_text(114), "one hundred fourteen");
        assert_eq!(to_text(123), "one hundred twenty-three");
        assert_eq!(to_text(400), "four hundred");
        assert_eq!(to_text(540), "five hundred forty");
        assert_eq!(to_text(770), "seven hundred seventy");
        assert_eq!(to_text(888), "eight hundred eighty-eight");
        assert_eq!(to_text(933), "nine hundred thirty-three");
    }

    #[test]
    fn test_thousands_and_above() {
        assert_eq!(to_text(5_456), "five thousand four hundred fifty-six");
        assert_eq!(to_text(1_000), "one thousand");
        assert_eq!(to_text(100_000), "one hundred thousand");
        assert_eq!(to_text(101_000), "one hundred one thousand");
        assert_eq!(to_text(33_977), "thirty-three thousand nine hundred seventy-seven");
        assert_eq!(to_text(651_400), "six hundred fifty-one thousand four hundred");
        assert_eq!(
            to_text(333_000_999),
            "three hundred thirty-three million nine hundred ninety-nine"
        );
        assert_eq!(to_text(21_001), "twenty-one thousand one");
        assert_eq!(
            to_text(999_999),
            "nine hundred ninety-nine thousand nine hundred ninety-nine"
        );
        assert_eq!(to_text(1_000_000), "one million");
        assert_eq!(
            to_text(1_153_625_999_567),
            "one trillion one hundred fifty-three billion six hundred twenty-five million \
             nine hundred ninety-nine thousand five hundred sixty-seven"
        );
        assert_eq!(
            to_text(3_214_731),
            "three million two hundred fourteen thousand seven hundred thirty-one"
        );
        assert_eq!(to_text(15_711), "fifteen thousand seven hundred eleven");
        assert_eq!(to_text(13_000), "thirteen thousand");
        assert_eq!(to_text(5_000_000_000), "five billion");
        assert_eq!(to_text(5_001_000_000), "five billion one million");
        assert_eq!(to_text(5_000_020_000), "five billion twenty thousand");
    }

    #[test]
    fn test_lexical_domain_errors() {
        let english = English;
        assert_eq!(
            english.unit(15, 0, 0),
            Err(ConversionError::LexicalDomain { value: 15, lower: 0, upper: 9 })
        );
        assert_eq!(
            english.ten(7, 0, 0),
            Err(ConversionError::LexicalDomain { value: 7, lower: 10, upper: 99 })
        );
        assert_eq!(
            english.hundred(99, 0, 0),
            Err(ConversionError::LexicalDomain { value: 99, lower: 100, upper: 999 })
        );
    }
}
