// --- Zengin character set normalization ---
//
// Zengin files only carry half-width katakana, uppercase Latin, digits and a
// handful of symbols. `normalize` folds arbitrary user text into that set.

mod kana_table;
pub mod sjis;

use kana_table::{halfwidth_form, small_to_large};

/// One normalization stage. Every stage is a total function over its input.
pub type Stage = fn(&str) -> String;

/// Stages in the order they must run. Reordering them changes the output
/// (e.g. lowercase full-width Latin has to become ASCII before uppercasing).
pub const PIPELINE: [(&str, Stage); 5] = [
    ("hiragana_to_katakana", hiragana_to_katakana),
    ("to_halfwidth", to_halfwidth),
    ("uppercase_latin", uppercase_latin),
    ("enlarge_small_kana", enlarge_small_kana),
    ("retain_allowed", retain_allowed),
];

/// Maps `text` into the Zengin repertoire.
///
/// Characters with no representation are dropped, never replaced. Callers
/// who need to detect the loss have to compare lengths themselves.
pub fn normalize(text: &str) -> String {
    PIPELINE
        .iter()
        .fold(text.to_string(), |acc, (_, stage)| stage(&acc))
}

/// Shifts hiragana onto the katakana block.
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}' => {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Full-width katakana, Latin, digits and symbols to their half-width forms.
/// Voiced katakana expand to a base character followed by ﾞ or ﾟ.
pub fn to_halfwidth(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{FF01}'..='\u{FF5E}' => {
                out.push(char::from_u32(c as u32 - 0xFEE0).unwrap_or(c));
            }
            '\u{3000}' => out.push(' '),
            _ => match halfwidth_form(c) {
                Some(half) => out.push_str(half),
                None => out.push(c),
            },
        }
    }
    out
}

pub fn uppercase_latin(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// The format has no small kana glyphs, so ｧ becomes ｱ, ｯ becomes ﾂ and so on.
pub fn enlarge_small_kana(text: &str) -> String {
    text.chars().map(|c| small_to_large(c).unwrap_or(c)).collect()
}

/// Drops everything outside the Zengin character set.
pub fn retain_allowed(text: &str) -> String {
    text.chars().filter(|&c| is_allowed(c)).collect()
}

/// Whether `c` may appear in a Zengin text field.
pub fn is_allowed(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '0'..='9'
        | ' ' | '.' | '\\' | '(' | ')' | '-' | '/'
        | '\u{FF62}' | '\u{FF63}'   // ｢ ｣
        | '\u{FF71}'..='\u{FF9D}'   // ｱ..ﾝ
        | '\u{FF9E}' | '\u{FF9F}'   // ﾞ ﾟ
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_becomes_katakana() {
        assert_eq!(hiragana_to_katakana("たなか たろう"), "タナカ タロウ");
        assert_eq!(hiragana_to_katakana("abc漢字"), "abc漢字");
    }

    #[test]
    fn test_halfwidth_expands_voiced_kana() {
        assert_eq!(to_halfwidth("ガッコウ"), "ｶﾞｯｺｳ");
        assert_eq!(to_halfwidth("パン"), "ﾊﾟﾝ");
        assert_eq!(to_halfwidth("ヴ"), "ｳﾞ");
        assert_eq!(to_halfwidth("ＡＢＣ１２３（）"), "ABC123()");
        assert_eq!(to_halfwidth("「ヤマダ」"), "｢ﾔﾏﾀﾞ｣");
    }

    #[test]
    fn test_normalize_full_pipeline() {
        assert_eq!(normalize("やまだ しょうじ"), "ﾔﾏﾀﾞ ｼﾖｳｼﾞ");
        assert_eq!(normalize("ｶ)ｻﾝﾌﾟﾙ"), "ｶ)ｻﾝﾌﾟﾙ");
        assert_eq!(normalize("abc-Ｄｅｆ"), "ABC-DEF");
        assert_eq!(normalize("キャッシュ"), "ｷﾔﾂｼﾕ");
        assert_eq!(normalize("ﾃﾞｰﾀ"), "ﾃﾞ-ﾀ");
    }

    #[test]
    fn test_normalize_drops_unmappable() {
        assert_eq!(normalize("山田商事"), "");
        assert_eq!(normalize("ヤマダ商事"), "ﾔﾏﾀﾞ");
        assert_eq!(normalize("A🙂B,C!"), "ABC");
        assert_eq!(normalize("ヲ・ｦ･"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "ヤマダ商事",
            "ｶﾌﾞｼｷｶﾞｲｼｬ ﾃｽﾄ",
            "がっこう　ほうじん",
            "Ｍｉｘｅｄ ｃａｓｅ ｆｕｌｌ",
            "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ゛゜",
            "¥1,000-(税込)",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_normalize_is_idempotent_across_kana_and_latin_blocks() {
        let blocks = [
            0x0020..=0x007E, // ASCII
            0x00A5..=0x00A5, // yen sign
            0x3000..=0x30FF, // CJK punctuation, hiragana, katakana
            0xFF01..=0xFF9F, // full-width Latin, half-width kana
        ];
        let chars: Vec<char> = blocks
            .into_iter()
            .flatten()
            .filter_map(char::from_u32)
            .collect();
        let marks = ['ﾞ', 'ﾟ', '゛', '゜', '\u{3099}', '\u{309A}', 'ｰ', 'ｯ', ' '];

        let check = |input: &str| {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
            assert!(once.chars().all(is_allowed), "disallowed output for {:?}", input);
        };
        for &c in &chars {
            check(&c.to_string());
            for &m in &marks {
                check(&format!("{}{}", c, m));
                check(&format!("{}{}", m, c));
            }
        }
        check(&chars.iter().collect::<String>());
    }

    #[test]
    fn test_normalized_output_is_single_byte() {
        let out = normalize("ミズホ銀行　ﾄｳｷｮｳ支店 abc");
        assert!(out.chars().all(|c| sjis::byte_width(c) == 1));
        assert!(out.chars().all(is_allowed));
    }
}
