// ============================================================================
// Basic Usage Example
// ============================================================================

use num2text::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    println!("=== num2text Example ===\n");

    // Plain integer conversion in both shipped languages
    for number in [0u64, 18, 101, 4_525, 1_000_000, 5_000_020_000] {
        let english = Converter::new(number, Box::new(English), Arc::new(NoOpHook));
        let spanish = Converter::new(number, Box::new(Spanish), Arc::new(NoOpHook));
        println!(
            "{:>13} | {} | {}",
            number,
            english.to_text().unwrap(),
            spanish.to_text().unwrap()
        );
    }

    // Decimal amount with the automatic fraction clause
    println!("\n=== Decimal Amount ===");
    let amount = Decimal::new(458_719_444, 4); // 45871.9444
    let converter =
        Converter::from_decimal(amount, Box::new(English), Arc::new(NoOpHook)).unwrap();
    println!("{} -> {}", amount, converter.to_text().unwrap());

    // Builder with a custom post-processor (check-writing style)
    println!("\n=== Post-Processed ===");
    let converter = ConverterBuilder::from_amount(Decimal::new(8_750_033, 2))
        .english()
        .build(Arc::new(NoOpHook))
        .unwrap();
    let check_line = converter
        .to_text_formatted(|words, fraction| {
            format!("** {} and {}/100 **", words, fraction.unwrap_or(0))
        })
        .unwrap();
    println!("{}", check_line);

    // A closure hook that marks every group boundary
    println!("\n=== Hooked Conversion ===");
    let hook = Arc::new(
        |phase: Phase, kind: ConversionKind, _event: &ConversionEvent, output: &mut OutputBuffer| {
            if phase == Phase::Before && kind != ConversionKind::Magnitude {
                output.append("** ");
            }
        },
    );
    let converter = Converter::new(1_001_899, Box::new(English), hook);
    println!("{}", converter.to_text().unwrap());

    // Overflow handling
    println!("\n=== Overflow ===");
    let too_big = ConverterBuilder::new(u64::MAX)
        .lenient()
        .build(Arc::new(NoOpHook))
        .unwrap();
    println!("lenient: {}", too_big.to_text().unwrap());
    match too_big.to_text_with_policy(OverflowPolicy::Strict) {
        Ok(_) => unreachable!(),
        Err(err) => println!("strict:  {}", err),
    }
}
