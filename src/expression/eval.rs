//! Left-to-right expression evaluation
//!
//! No operator precedence: "2 + 3 × 4" is 20, not 14. Tokens alternate
//! number/operator by construction in the accumulator; anything malformed
//! at the tail truncates the computation to the partial result, while
//! division by zero fails the whole evaluation. The two failure modes are
//! intentionally distinct.

/// Evaluate an alternating number/operator token sequence.
///
/// Returns None when the leading token is not a number or a division by
/// exactly zero occurs. An unparsable trailing operand stops the loop and
/// yields the result accumulated so far.
pub fn evaluate(tokens: &[String]) -> Option<f64> {
    let mut result: f64 = tokens.first()?.parse().ok()?;

    let mut i = 1;
    while i + 1 < tokens.len() {
        let operand: f64 = match tokens[i + 1].parse() {
            Ok(v) => v,
            Err(_) => break, // truncate, keep the partial result
        };
        match tokens[i].as_str() {
            "+" => result += operand,
            "-" => result -= operand,
            "×" => result *= operand,
            "÷" => {
                if operand == 0.0 {
                    return None; // hard failure, no partial answer
                }
                result /= operand;
            }
            _ => break,
        }
        i += 2;
    }

    // Strip floating-point noise from the displayed/spoken result
    Some((result * 10_000.0).round() / 10_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate(&tokens(&["42"])), Some(42.0));
    }

    #[test]
    fn test_addition() {
        assert_eq!(evaluate(&tokens(&["5", "+", "5"])), Some(10.0));
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        // 2 + 3 = 5, then 5 × 4 = 20
        assert_eq!(evaluate(&tokens(&["2", "+", "3", "×", "4"])), Some(20.0));
    }

    #[test]
    fn test_division_by_zero_is_hard_failure() {
        assert_eq!(evaluate(&tokens(&["7", "÷", "0"])), None);
        // Even mid-expression, with a valid prefix
        assert_eq!(evaluate(&tokens(&["8", "+", "1", "÷", "0"])), None);
    }

    #[test]
    fn test_trailing_operator_truncates() {
        assert_eq!(evaluate(&tokens(&["4", "+"])), Some(4.0));
    }

    #[test]
    fn test_unparsable_operand_truncates() {
        assert_eq!(evaluate(&tokens(&["6", "-", "2", "+", "junk"])), Some(4.0));
    }

    #[test]
    fn test_unparsable_leading_token_fails() {
        assert_eq!(evaluate(&tokens(&["+", "5"])), None);
        assert_eq!(evaluate(&tokens(&[])), None);
    }

    #[test]
    fn test_result_rounded_to_four_decimals() {
        // 1 ÷ 3 = 0.3333...
        assert_eq!(evaluate(&tokens(&["1", "÷", "3"])), Some(0.3333));
        // 2 ÷ 3 = 0.6666... rounds up
        assert_eq!(evaluate(&tokens(&["2", "÷", "3"])), Some(0.6667));
    }

    #[test]
    fn test_rounding_invariant() {
        let cases: [&[&str]; 4] = [
            &["1", "÷", "7"],
            &["22", "÷", "7", "×", "3"],
            &["10", "÷", "3", "-", "1"],
            &["9", "×", "9", "÷", "11"],
        ];
        for case in cases {
            let result = evaluate(&tokens(case)).unwrap();
            let scaled = result * 10_000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "result {} is not a multiple of 0.0001",
                result
            );
        }
    }
}
