use rand::Rng;

/// Fallback letter used when a name contains no ASCII letters.
pub const FALLBACK_LETTER: char = 'X';

/// Uppercased ASCII letters of `name`, in order; everything else is dropped.
pub fn letter_pool(name: &str) -> Vec<char> {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Generate a short invoice number from the business and customer names.
///
/// Format: two letters drawn from the business name, two from the customer
/// label, a dash and a zero-padded number in `0..=999`, e.g. `"ACJD-042"`.
/// Letters are drawn with replacement; an empty pool draws
/// [`FALLBACK_LETTER`]. Numbers are not guaranteed unique.
///
/// ```
/// use invoice_draft::core::generate_invoice_number_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let number = generate_invoice_number_with("Acme Co", "Jane Doe", &mut rng);
/// assert_eq!(number.len(), 8);
/// assert_eq!(&number[4..5], "-");
/// ```
pub fn generate_invoice_number_with<R: Rng + ?Sized>(
    business_name: &str,
    customer_label: &str,
    rng: &mut R,
) -> String {
    let business = letter_pool(business_name);
    let customer = letter_pool(customer_label);

    let mut number = String::with_capacity(8);
    for pool in [&business, &customer] {
        for _ in 0..2 {
            number.push(draw_letter(pool, rng));
        }
    }
    let suffix: u16 = rng.gen_range(0..=999);
    number.push_str(&format!("-{suffix:03}"));
    number
}

/// [`generate_invoice_number_with`] using the thread-local generator.
pub fn generate_invoice_number(business_name: &str, customer_label: &str) -> String {
    generate_invoice_number_with(business_name, customer_label, &mut rand::thread_rng())
}

fn draw_letter<R: Rng + ?Sized>(pool: &[char], rng: &mut R) -> char {
    if pool.is_empty() {
        FALLBACK_LETTER
    } else {
        pool[rng.gen_range(0..pool.len())]
    }
}
