// Full-width to half-width lookup. The half-width katakana block is not laid
// out in the same order as the full-width one, and voiced forms have no
// single half-width code point, so this has to be a table.

pub(super) fn halfwidth_form(c: char) -> Option<&'static str> {
    let half = match c {
        'ァ' => "ｧ", 'ア' => "ｱ", 'ィ' => "ｨ", 'イ' => "ｲ", 'ゥ' => "ｩ",
        'ウ' => "ｳ", 'ェ' => "ｪ", 'エ' => "ｴ", 'ォ' => "ｫ", 'オ' => "ｵ",
        'カ' => "ｶ", 'ガ' => "ｶﾞ", 'キ' => "ｷ", 'ギ' => "ｷﾞ", 'ク' => "ｸ",
        'グ' => "ｸﾞ", 'ケ' => "ｹ", 'ゲ' => "ｹﾞ", 'コ' => "ｺ", 'ゴ' => "ｺﾞ",
        'サ' => "ｻ", 'ザ' => "ｻﾞ", 'シ' => "ｼ", 'ジ' => "ｼﾞ", 'ス' => "ｽ",
        'ズ' => "ｽﾞ", 'セ' => "ｾ", 'ゼ' => "ｾﾞ", 'ソ' => "ｿ", 'ゾ' => "ｿﾞ",
        'タ' => "ﾀ", 'ダ' => "ﾀﾞ", 'チ' => "ﾁ", 'ヂ' => "ﾁﾞ", 'ッ' => "ｯ",
        'ツ' => "ﾂ", 'ヅ' => "ﾂﾞ", 'テ' => "ﾃ", 'デ' => "ﾃﾞ", 'ト' => "ﾄ",
        'ド' => "ﾄﾞ", 'ナ' => "ﾅ", 'ニ' => "ﾆ", 'ヌ' => "ﾇ", 'ネ' => "ﾈ",
        'ノ' => "ﾉ", 'ハ' => "ﾊ", 'バ' => "ﾊﾞ", 'パ' => "ﾊﾟ", 'ヒ' => "ﾋ",
        'ビ' => "ﾋﾞ", 'ピ' => "ﾋﾟ", 'フ' => "ﾌ", 'ブ' => "ﾌﾞ", 'プ' => "ﾌﾟ",
        'ヘ' => "ﾍ", 'ベ' => "ﾍﾞ", 'ペ' => "ﾍﾟ", 'ホ' => "ﾎ", 'ボ' => "ﾎﾞ",
        'ポ' => "ﾎﾟ", 'マ' => "ﾏ", 'ミ' => "ﾐ", 'ム' => "ﾑ", 'メ' => "ﾒ",
        'モ' => "ﾓ", 'ャ' => "ｬ", 'ヤ' => "ﾔ", 'ュ' => "ｭ", 'ユ' => "ﾕ",
        'ョ' => "ｮ", 'ヨ' => "ﾖ", 'ラ' => "ﾗ", 'リ' => "ﾘ", 'ル' => "ﾙ",
        'レ' => "ﾚ", 'ロ' => "ﾛ", 'ヮ' => "ﾜ", 'ワ' => "ﾜ", 'ヰ' => "ｲ",
        'ヱ' => "ｴ", 'ヲ' => "ｦ", 'ン' => "ﾝ", 'ヴ' => "ｳﾞ", 'ヵ' => "ｶ",
        'ヶ' => "ｹ", 'ヷ' => "ﾜﾞ",
        // voicing marks, spacing and combining
        '゛' | '\u{3099}' => "ﾞ",
        '゜' | '\u{309A}' => "ﾟ",
        '・' => "･",
        '「' => "｢",
        '」' => "｣",
        // long vowel and dash variants all land on ASCII hyphen
        'ー' | 'ｰ' | '‐' | '−' | '―' => "-",
        // Shift_JIS 0x5C renders as the yen sign
        '¥' | '￥' => "\\",
        _ => return None,
    };
    Some(half)
}

pub(super) fn small_to_large(c: char) -> Option<char> {
    let large = match c {
        'ァ' | 'ｧ' => 'ｱ',
        'ィ' | 'ｨ' => 'ｲ',
        'ゥ' | 'ｩ' => 'ｳ',
        'ェ' | 'ｪ' => 'ｴ',
        'ォ' | 'ｫ' => 'ｵ',
        'ッ' | 'ｯ' => 'ﾂ',
        'ャ' | 'ｬ' => 'ﾔ',
        'ュ' | 'ｭ' => 'ﾕ',
        'ョ' | 'ｮ' => 'ﾖ',
        'ヮ' => 'ﾜ',
        'ヵ' => 'ｶ',
        'ヶ' => 'ｹ',
        _ => return None,
    };
    Some(large)
}
