//! Pure numeric predicates used to classify a number.
//!
//! None of these functions allocate beyond the property list or perform I/O,
//! and all of them are defined for every `i64`, including negative values.

use crate::domain::model::Property;

/// Trial division up to `floor(sqrt(n))`. Anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2;
    // `i <= n / i` is `i * i <= n` without the overflow near i64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// A number is perfect when the sum of its proper divisors equals itself.
pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    // 1 divides everything and the loop starts at 2
    let mut sum: i128 = 1;
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            let pair = n / i;
            sum += i as i128;
            if pair != i {
                sum += pair as i128;
            }
        }
        i += 1;
    }
    sum == n as i128
}

/// Narcissistic check: the sum of each digit raised to the digit count.
///
/// Zero counts as a one-digit number, so it is an Armstrong number.
/// Negative numbers never are.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let value = n as u64;
    let digits = count_digits(value);

    let mut rest = value;
    let mut sum: u128 = 0;
    loop {
        sum += ((rest % 10) as u128).pow(digits);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    sum == value as u128
}

/// Sum of the base-10 digits of `|n|`.
pub fn digit_sum(n: i64) -> u32 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0;
    while rest != 0 {
        sum += (rest % 10) as u32;
        rest /= 10;
    }
    sum
}

/// `armstrong` first when it applies, then exactly one parity tag.
pub fn determine_properties(n: i64) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }
    if n % 2 == 0 {
        properties.push(Property::Even);
    } else {
        properties.push(Property::Odd);
    }
    properties
}

fn count_digits(mut value: u64) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        digits += 1;
        value /= 10;
    }
    digits
}
