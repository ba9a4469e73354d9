// ============================================================================
// Basic Usage Example
// ============================================================================

use currency_mask::numeric::Amount;
use currency_mask::prelude::*;
use std::rc::Rc;

fn main() {
    println!("=== Currency Mask Example ===\n");

    let form = Rc::new(RecordingValueAccessor::new());
    let mut engine = MaskEngineBuilder::new()
        .value_accessor(form.clone())
        .build(BufferField::new())
        .expect("default config is valid");

    // Host form pushes its stored value
    engine.write_value(Some(Amount::from_cents(123_450)));
    println!("Initial:        {:?}", engine.field().text());

    engine.focus();
    println!("Focused:        {:?}", engine.field().text());

    // Extra fraction digit is chopped as soon as it lands
    engine.type_char('6');
    println!("Typed '6':      {:?}", engine.field().text());

    // Letters are swallowed
    engine.field_mut().set_caret(0);
    engine.type_str("abc9");
    println!("Typed 'abc9':   {:?}", engine.field().text());

    // A second decimal mark just moves the caret behind the first one
    engine.type_char('.');
    println!(
        "Typed '.':      {:?} (caret at {})",
        engine.field().text(),
        engine.field().caret()
    );

    engine.blur();
    println!("Blurred:        {:?}", engine.field().text());

    println!("\n=== Form Notifications ===");
    for (i, value) in form.changes().iter().enumerate() {
        match value {
            Some(amount) => println!("  change #{}: {}", i + 1, amount),
            None => println!("  change #{}: <empty>", i + 1),
        }
    }
    println!("  touched: {}", form.touched_count());

    println!("\n=== Rupee Field, Truncating ===");
    let mut rupees = MaskEngineBuilder::from_config(MaskConfig::inr())
        .build(BufferField::new())
        .expect("preset config is valid");
    rupees.focus();
    rupees.paste_str("99,999.999");
    rupees.blur();
    println!("Pasted '99,999.999' -> {:?}", rupees.field().text());
}
