// ============================================================================
// Basic Usage Example
// ============================================================================

use fixpoint::prelude::*;
use fixpoint::text::FormatOptions;

fn main() -> Result<(), NumericError> {
    // Overflow resolutions are reported at TRACE level
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixpoint Example ===\n");

    // Fixed-point values: 7 value bits, scaled by 2^-3
    let x = Fixed::<7, -3>::from_f64(-15.875)?;
    println!("{:?} formats as {} ({} chars max)", x, x, Fixed::<7, -3>::MAX_CHARS);

    // Mixed exponents align before adding; the result keeps the finer one
    let price: RoundingFixed<31, -16> = "101.37".parse()?;
    let fee: Fixed<15, -4> = "0.25".parse()?;
    let total = price.checked_add(fee)?;
    println!("{} + {} = {} (exponent {})", price, fee, total, total.exponent());

    // Multiplication adds exponents
    let quantity = Fixed::<15, 0>::from_int(3)?;
    let notional = price * quantity;
    println!("{} * {} = {}", price, quantity, notional);

    // Division to a requested precision, rounded once
    let share: RoundingFixed<31, -8> = notional.divide_to(Fixed::<15, 0>::from_int(7)?)?;
    println!("{} / 7 ~= {}", notional, share);

    // Rescaling keeps digits and policies; roots round once
    let cents = share.rescale::<-4>()?;
    println!("{} at 2^-4 = {}, floor {}", share, cents, cents.floor()?);
    println!("sqrt({}) ~= {}", price, price.checked_sqrt()?);

    // Overflow policies
    println!("\nOverflow policies:");
    let wrapping = Fixed::<15, 0>::max_value();
    println!("  wrap:     {} * {} = {}", wrapping, wrapping, wrapping * wrapping);
    let saturating = SaturatingInt::<15>::max_value();
    println!("  saturate: {} * {} = {}", saturating, saturating, saturating * saturating);
    let checked = CheckedInt::<15>::max_value();
    match checked.checked_mul(checked) {
        Ok(product) => println!("  checked:  {}", product),
        Err(e) => println!("  checked:  {}", e),
    }

    // Elastic values grow instead of overflowing
    println!("\nElastic growth:");
    let mut acc = ElasticInt::<8>::from_int(255)?;
    let sum = acc + acc;
    println!("  {} + {} = {} ({} digits)", acc, acc, sum, sum.digits());
    acc = ElasticInt::<8>::from_int(-128)?;
    let product = acc * acc * acc;
    println!("  (-128)^3 = {} ({} digits)", product, product.digits());

    // Narrowing conversion saturates
    let wide = Scaled::<Spec<63, 0, true, NativeRounding, SaturatedOverflow, Elastic>>::from_int(150)?;
    let narrow: Scaled<Spec<15, -8, true, NativeRounding, SaturatedOverflow>> = wide.convert()?;
    println!("\n150 into a 16-bit Q8 saturating type: {}", narrow);

    // Formatting options
    println!("\nFormatting:");
    let third = RoundingFixed::<62, -60>::from_ratio(1, 3)?;
    let mut buf = [0u8; 64];
    for options in [
        FormatOptions::new(),
        FormatOptions::new().with_max_fraction_digits(6),
        FormatOptions::new()
            .with_max_fraction_digits(3)
            .with_force_sign(true)
            .with_leading_zero(false),
    ] {
        if let Err(e) = options.validate() {
            println!("  invalid options: {}", e);
            continue;
        }
        let len = third.to_chars_with(&mut buf, &options)?;
        println!("  {:?}: {}", options, String::from_utf8_lossy(&buf[..len]));
    }

    // Parse errors
    match "1e5".parse::<Fixed<31, -8>>() {
        Ok(value) => println!("\nparsed {}", value),
        Err(e) => println!("\n\"1e5\" rejected: {}", e),
    }

    Ok(())
}
