// --- Fixed-width field rendering ---

use crate::charset::sjis;

/// Renders `value` into exactly `width` Shift_JIS bytes, space-padded on the
/// right.
///
/// Overflow is cut at the byte boundary, the way bank tooling does it. If the
/// boundary falls inside a double-byte character, the byte that is left over
/// becomes a space.
pub fn pad_right(value: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in value.chars() {
        let w = sjis::byte_width(c);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Renders `value` into exactly `width` characters, padded on the left with
/// `pad`.
///
/// Numeric fields are single-byte, so this is also `width` bytes. An
/// over-long value keeps its low-order `width` digits.
pub fn pad_left(value: &str, width: usize, pad: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.chars().skip(len - width).collect();
    }
    let mut out: String = std::iter::repeat(pad).take(width - len).collect();
    out.push_str(value);
    out
}

/// Keeps only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right_pads_with_spaces() {
        assert_eq!(pad_right("ﾔﾏﾀﾞ", 6), "ﾔﾏﾀﾞ  ");
        assert_eq!(pad_right("", 3), "   ");
    }

    #[test]
    fn test_pad_right_truncates_at_byte_boundary() {
        assert_eq!(pad_right("ABCDEFG", 4), "ABCD");
        assert_eq!(pad_right("ｶﾞｶﾞ", 3), "ｶﾞｶ");
    }

    #[test]
    fn test_pad_right_splits_double_byte() {
        let out = pad_right("山田", 3);
        assert_eq!(out, "山 ");
        assert_eq!(sjis::str_width(&out), 3);
    }

    #[test]
    fn test_pad_right_width_is_always_exact() {
        let inputs = ["", "A", "ｱｲｳｴｵ", "山田太郎", "mixed 漢字 ｶﾅ", "🙂🙂🙂"];
        for input in inputs {
            for width in 0..=12 {
                let out = pad_right(input, width);
                assert_eq!(sjis::str_width(&out), width, "{:?} @ {}", input, width);
            }
        }
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("50000", 10, '0'), "0000050000");
        assert_eq!(pad_left("", 4, '0'), "0000");
        assert_eq!(pad_left("1234", 4, '0'), "1234");
        assert_eq!(pad_left("12345678901", 10, '0'), "2345678901");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("¥1,234円"), "1234");
        assert_eq!(digits_only("-500"), "500");
        assert_eq!(digits_only("abc"), "");
    }
}
