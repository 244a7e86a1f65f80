// ============================================================================
// Spanish Language Rules
// Long-scale Spanish numerals (mil, millon, mil millones, billon)
// ============================================================================

use crate::domain::is_unit;
use crate::interfaces::Language;
use crate::numeric::{pow10, ConversionError, ConversionResult};

const UNITS: [&str; 10] = [
    "cero", "un", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

const TENS: [&str; 10] = [
    "", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "", "ciento", "doscientos", "trescientos", "cuatrocientos", "quinientos", "seiscientos",
    "setecientos", "ochocientos", "novecientos",
];

/// Spanish rule set.
///
/// Irregular teens run to 15 only; 16-19 compose as "diez y <unit>". The
/// numeral one elides to "un" before magnitude words and inside compounds,
/// staying "uno" only as a bare final unit. Exactly 100 contracts to "cien";
/// magnitude words agree in number ("millon"/"millones"). At the 10^9 tier
/// the word is "mil" while a nonzero 10^6 group remains below it, and
/// "mil millones" otherwise, avoiding the millardo form.
pub struct Spanish;

impl Language for Spanish {
    fn unit(&self, value: u16, modulus: u64, index: u8) -> ConversionResult<&'static str> {
        // "uno" only as a standalone trailing unit; "un" when a magnitude
        // word or further words follow
        if value == 1 && modulus == 0 && index == 0 {
            return Ok("uno");
        }
        UNITS
            .get(value as usize)
            .copied()
            .ok_or(ConversionError::LexicalDomain { value, lower: 0, upper: 9 })
    }

    fn ten(&self, value: u16, modulus: u64, index: u8) -> ConversionResult<String> {
        match value {
            11 => Ok("once".to_string()),
            12 => Ok("doce".to_string()),
            13 => Ok("trece".to_string()),
            14 => Ok("catorce".to_string()),
            15 => Ok("quince".to_string()),
            10 | 16..=99 => {
                let first = (value / 10) as usize;
                let second = value % 10;
                let mut output = TENS[first].to_string();
                if second > 0 {
                    output.push_str(" y ");
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
        let first = (value / 100) as usize;
        let second = value % 100;

        let mut output = if first == 1 {
            // "cien" only for exactly one hundred
            if second == 0 { "cien" } else { "ciento" }.to_string()
        } else {
            HUNDREDS[first].to_string()
        };
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

    fn magnitude(&self, value: u16, modulus: u64, index: u8) -> Option<&'static str> {
        match index {
            12 => Some(if value == 1 { "billon" } else { "billones" }),
            // While a nonzero 10^6 group remains below, this group reads as
            // thousands of millions yet to come: "cinco mil un millon"
            9 => Some(if modulus >= pow10(6) { "mil" } else { "mil millones" }),
            6 => Some(if value == 1 { "millon" } else { "millones" }),
            3 => Some("mil"),
            _ => None,
        }
    }

    fn fraction_clause(&self, fraction: u8) -> String {
        format!("con {}/100", fraction)
    }

    fn name(&self) -> &str {
        "Spanish"
    }
}
