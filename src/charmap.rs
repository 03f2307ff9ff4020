//! Static character tables: diacritic folding and Latin case overlays.
//!
//! Both tables are enumerated once and indexed into hash maps on first use.
//! Case mapping consults the Latin overlay first and otherwise falls back to the
//! one-to-one Unicode mapping of the code point; expansions such as `ß -> SS`
//! are never applied, so every mapping keeps exactly one code point.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Accented letter and its ASCII base letter. Covers Latin-1 Supplement,
/// Latin Extended-A/B and Latin Extended Additional (Vietnamese), plus the
/// stroked letters that have no canonical decomposition (`ø`, `đ`, `ł`, ...).
static DIACRITIC_FOLDS: &[(char, char)] = &[
    ('À', 'A'), ('Á', 'A'), ('Â', 'A'), ('Ã', 'A'), ('Ä', 'A'), ('Å', 'A'),
    ('Ç', 'C'), ('È', 'E'), ('É', 'E'), ('Ê', 'E'), ('Ë', 'E'), ('Ì', 'I'),
    ('Í', 'I'), ('Î', 'I'), ('Ï', 'I'), ('Ð', 'D'), ('Ñ', 'N'), ('Ò', 'O'),
    ('Ó', 'O'), ('Ô', 'O'), ('Õ', 'O'), ('Ö', 'O'), ('Ø', 'O'), ('Ù', 'U'),
    ('Ú', 'U'), ('Û', 'U'), ('Ü', 'U'), ('Ý', 'Y'), ('à', 'a'), ('á', 'a'),
    ('â', 'a'), ('ã', 'a'), ('ä', 'a'), ('å', 'a'), ('ç', 'c'), ('è', 'e'),
    ('é', 'e'), ('ê', 'e'), ('ë', 'e'), ('ì', 'i'), ('í', 'i'), ('î', 'i'),
    ('ï', 'i'), ('ð', 'd'), ('ñ', 'n'), ('ò', 'o'), ('ó', 'o'), ('ô', 'o'),
    ('õ', 'o'), ('ö', 'o'), ('ø', 'o'), ('ù', 'u'), ('ú', 'u'), ('û', 'u'),
    ('ü', 'u'), ('ý', 'y'), ('ÿ', 'y'), ('Ā', 'A'), ('ā', 'a'), ('Ă', 'A'),
    ('ă', 'a'), ('Ą', 'A'), ('ą', 'a'), ('Ć', 'C'), ('ć', 'c'), ('Ĉ', 'C'),
    ('ĉ', 'c'), ('Ċ', 'C'), ('ċ', 'c'), ('Č', 'C'), ('č', 'c'), ('Ď', 'D'),
    ('ď', 'd'), ('Đ', 'D'), ('đ', 'd'), ('Ē', 'E'), ('ē', 'e'), ('Ĕ', 'E'),
    ('ĕ', 'e'), ('Ė', 'E'), ('ė', 'e'), ('Ę', 'E'), ('ę', 'e'), ('Ě', 'E'),
    ('ě', 'e'), ('Ĝ', 'G'), ('ĝ', 'g'), ('Ğ', 'G'), ('ğ', 'g'), ('Ġ', 'G'),
    ('ġ', 'g'), ('Ģ', 'G'), ('ģ', 'g'), ('Ĥ', 'H'), ('ĥ', 'h'), ('Ħ', 'H'),
    ('ħ', 'h'), ('Ĩ', 'I'), ('ĩ', 'i'), ('Ī', 'I'), ('ī', 'i'), ('Ĭ', 'I'),
    ('ĭ', 'i'), ('Į', 'I'), ('į', 'i'), ('İ', 'I'), ('ı', 'i'), ('Ĵ', 'J'),
    ('ĵ', 'j'), ('Ķ', 'K'), ('ķ', 'k'), ('Ĺ', 'L'), ('ĺ', 'l'), ('Ļ', 'L'),
    ('ļ', 'l'), ('Ľ', 'L'), ('ľ', 'l'), ('Ł', 'L'), ('ł', 'l'), ('Ń', 'N'),
    ('ń', 'n'), ('Ņ', 'N'), ('ņ', 'n'), ('Ň', 'N'), ('ň', 'n'), ('Ō', 'O'),
    ('ō', 'o'), ('Ŏ', 'O'), ('ŏ', 'o'), ('Ő', 'O'), ('ő', 'o'), ('Ŕ', 'R'),
    ('ŕ', 'r'), ('Ŗ', 'R'), ('ŗ', 'r'), ('Ř', 'R'), ('ř', 'r'), ('Ś', 'S'),
    ('ś', 's'), ('Ŝ', 'S'), ('ŝ', 's'), ('Ş', 'S'), ('ş', 's'), ('Š', 'S'),
    ('š', 's'), ('Ţ', 'T'), ('ţ', 't'), ('Ť', 'T'), ('ť', 't'), ('Ŧ', 'T'),
    ('ŧ', 't'), ('Ũ', 'U'), ('ũ', 'u'), ('Ū', 'U'), ('ū', 'u'), ('Ŭ', 'U'),
    ('ŭ', 'u'), ('Ů', 'U'), ('ů', 'u'), ('Ű', 'U'), ('ű', 'u'), ('Ų', 'U'),
    ('ų', 'u'), ('Ŵ', 'W'), ('ŵ', 'w'), ('Ŷ', 'Y'), ('ŷ', 'y'), ('Ÿ', 'Y'),
    ('Ź', 'Z'), ('ź', 'z'), ('Ż', 'Z'), ('ż', 'z'), ('Ž', 'Z'), ('ž', 'z'),
    ('ƀ', 'b'), ('Ɨ', 'I'), ('Ơ', 'O'), ('ơ', 'o'), ('Ư', 'U'), ('ư', 'u'),
    ('Ǎ', 'A'), ('ǎ', 'a'), ('Ǐ', 'I'), ('ǐ', 'i'), ('Ǒ', 'O'), ('ǒ', 'o'),
    ('Ǔ', 'U'), ('ǔ', 'u'), ('Ǖ', 'U'), ('ǖ', 'u'), ('Ǘ', 'U'), ('ǘ', 'u'),
    ('Ǚ', 'U'), ('ǚ', 'u'), ('Ǜ', 'U'), ('ǜ', 'u'), ('Ǟ', 'A'), ('ǟ', 'a'),
    ('Ǡ', 'A'), ('ǡ', 'a'), ('Ǧ', 'G'), ('ǧ', 'g'), ('Ǩ', 'K'), ('ǩ', 'k'),
    ('Ǫ', 'O'), ('ǫ', 'o'), ('Ǭ', 'O'), ('ǭ', 'o'), ('ǰ', 'j'), ('Ǵ', 'G'),
    ('ǵ', 'g'), ('Ǹ', 'N'), ('ǹ', 'n'), ('Ǻ', 'A'), ('ǻ', 'a'), ('Ȁ', 'A'),
    ('ȁ', 'a'), ('Ȃ', 'A'), ('ȃ', 'a'), ('Ȅ', 'E'), ('ȅ', 'e'), ('Ȇ', 'E'),
    ('ȇ', 'e'), ('Ȉ', 'I'), ('ȉ', 'i'), ('Ȋ', 'I'), ('ȋ', 'i'), ('Ȍ', 'O'),
    ('ȍ', 'o'), ('Ȏ', 'O'), ('ȏ', 'o'), ('Ȑ', 'R'), ('ȑ', 'r'), ('Ȓ', 'R'),
    ('ȓ', 'r'), ('Ȕ', 'U'), ('ȕ', 'u'), ('Ȗ', 'U'), ('ȗ', 'u'), ('Ș', 'S'),
    ('ș', 's'), ('Ț', 'T'), ('ț', 't'), ('Ȟ', 'H'), ('ȟ', 'h'), ('Ȧ', 'A'),
    ('ȧ', 'a'), ('Ȩ', 'E'), ('ȩ', 'e'), ('Ȫ', 'O'), ('ȫ', 'o'), ('Ȭ', 'O'),
    ('ȭ', 'o'), ('Ȯ', 'O'), ('ȯ', 'o'), ('Ȱ', 'O'), ('ȱ', 'o'), ('Ȳ', 'Y'),
    ('ȳ', 'y'), ('Ƀ', 'B'), ('Ḁ', 'A'), ('ḁ', 'a'), ('Ḃ', 'B'), ('ḃ', 'b'),
    ('Ḅ', 'B'), ('ḅ', 'b'), ('Ḇ', 'B'), ('ḇ', 'b'), ('Ḉ', 'C'), ('ḉ', 'c'),
    ('Ḋ', 'D'), ('ḋ', 'd'), ('Ḍ', 'D'), ('ḍ', 'd'), ('Ḏ', 'D'), ('ḏ', 'd'),
    ('Ḑ', 'D'), ('ḑ', 'd'), ('Ḓ', 'D'), ('ḓ', 'd'), ('Ḕ', 'E'), ('ḕ', 'e'),
    ('Ḗ', 'E'), ('ḗ', 'e'), ('Ḙ', 'E'), ('ḙ', 'e'), ('Ḛ', 'E'), ('ḛ', 'e'),
    ('Ḝ', 'E'), ('ḝ', 'e'), ('Ḟ', 'F'), ('ḟ', 'f'), ('Ḡ', 'G'), ('ḡ', 'g'),
    ('Ḣ', 'H'), ('ḣ', 'h'), ('Ḥ', 'H'), ('ḥ', 'h'), ('Ḧ', 'H'), ('ḧ', 'h'),
    ('Ḩ', 'H'), ('ḩ', 'h'), ('Ḫ', 'H'), ('ḫ', 'h'), ('Ḭ', 'I'), ('ḭ', 'i'),
    ('Ḯ', 'I'), ('ḯ', 'i'), ('Ḱ', 'K'), ('ḱ', 'k'), ('Ḳ', 'K'), ('ḳ', 'k'),
    ('Ḵ', 'K'), ('ḵ', 'k'), ('Ḷ', 'L'), ('ḷ', 'l'), ('Ḹ', 'L'), ('ḹ', 'l'),
    ('Ḻ', 'L'), ('ḻ', 'l'), ('Ḽ', 'L'), ('ḽ', 'l'), ('Ḿ', 'M'), ('ḿ', 'm'),
    ('Ṁ', 'M'), ('ṁ', 'm'), ('Ṃ', 'M'), ('ṃ', 'm'), ('Ṅ', 'N'), ('ṅ', 'n'),
    ('Ṇ', 'N'), ('ṇ', 'n'), ('Ṉ', 'N'), ('ṉ', 'n'), ('Ṋ', 'N'), ('ṋ', 'n'),
    ('Ṍ', 'O'), ('ṍ', 'o'), ('Ṏ', 'O'), ('ṏ', 'o'), ('Ṑ', 'O'), ('ṑ', 'o'),
    ('Ṓ', 'O'), ('ṓ', 'o'), ('Ṕ', 'P'), ('ṕ', 'p'), ('Ṗ', 'P'), ('ṗ', 'p'),
    ('Ṙ', 'R'), ('ṙ', 'r'), ('Ṛ', 'R'), ('ṛ', 'r'), ('Ṝ', 'R'), ('ṝ', 'r'),
    ('Ṟ', 'R'), ('ṟ', 'r'), ('Ṡ', 'S'), ('ṡ', 's'), ('Ṣ', 'S'), ('ṣ', 's'),
    ('Ṥ', 'S'), ('ṥ', 's'), ('Ṧ', 'S'), ('ṧ', 's'), ('Ṩ', 'S'), ('ṩ', 's'),
    ('Ṫ', 'T'), ('ṫ', 't'), ('Ṭ', 'T'), ('ṭ', 't'), ('Ṯ', 'T'), ('ṯ', 't'),
    ('Ṱ', 'T'), ('ṱ', 't'), ('Ṳ', 'U'), ('ṳ', 'u'), ('Ṵ', 'U'), ('ṵ', 'u'),
    ('Ṷ', 'U'), ('ṷ', 'u'), ('Ṹ', 'U'), ('ṹ', 'u'), ('Ṻ', 'U'), ('ṻ', 'u'),
    ('Ṽ', 'V'), ('ṽ', 'v'), ('Ṿ', 'V'), ('ṿ', 'v'), ('Ẁ', 'W'), ('ẁ', 'w'),
    ('Ẃ', 'W'), ('ẃ', 'w'), ('Ẅ', 'W'), ('ẅ', 'w'), ('Ẇ', 'W'), ('ẇ', 'w'),
    ('Ẉ', 'W'), ('ẉ', 'w'), ('Ẋ', 'X'), ('ẋ', 'x'), ('Ẍ', 'X'), ('ẍ', 'x'),
    ('Ẏ', 'Y'), ('ẏ', 'y'), ('Ẑ', 'Z'), ('ẑ', 'z'), ('Ẓ', 'Z'), ('ẓ', 'z'),
    ('Ẕ', 'Z'), ('ẕ', 'z'), ('ẖ', 'h'), ('ẗ', 't'), ('ẘ', 'w'), ('ẙ', 'y'),
    ('Ạ', 'A'), ('ạ', 'a'), ('Ả', 'A'), ('ả', 'a'), ('Ấ', 'A'), ('ấ', 'a'),
    ('Ầ', 'A'), ('ầ', 'a'), ('Ẩ', 'A'), ('ẩ', 'a'), ('Ẫ', 'A'), ('ẫ', 'a'),
    ('Ậ', 'A'), ('ậ', 'a'), ('Ắ', 'A'), ('ắ', 'a'), ('Ằ', 'A'), ('ằ', 'a'),
    ('Ẳ', 'A'), ('ẳ', 'a'), ('Ẵ', 'A'), ('ẵ', 'a'), ('Ặ', 'A'), ('ặ', 'a'),
    ('Ẹ', 'E'), ('ẹ', 'e'), ('Ẻ', 'E'), ('ẻ', 'e'), ('Ẽ', 'E'), ('ẽ', 'e'),
    ('Ế', 'E'), ('ế', 'e'), ('Ề', 'E'), ('ề', 'e'), ('Ể', 'E'), ('ể', 'e'),
    ('Ễ', 'E'), ('ễ', 'e'), ('Ệ', 'E'), ('ệ', 'e'), ('Ỉ', 'I'), ('ỉ', 'i'),
    ('Ị', 'I'), ('ị', 'i'), ('Ọ', 'O'), ('ọ', 'o'), ('Ỏ', 'O'), ('ỏ', 'o'),
    ('Ố', 'O'), ('ố', 'o'), ('Ồ', 'O'), ('ồ', 'o'), ('Ổ', 'O'), ('ổ', 'o'),
    ('Ỗ', 'O'), ('ỗ', 'o'), ('Ộ', 'O'), ('ộ', 'o'), ('Ớ', 'O'), ('ớ', 'o'),
    ('Ờ', 'O'), ('ờ', 'o'), ('Ở', 'O'), ('ở', 'o'), ('Ỡ', 'O'), ('ỡ', 'o'),
    ('Ợ', 'O'), ('ợ', 'o'), ('Ụ', 'U'), ('ụ', 'u'), ('Ủ', 'U'), ('ủ', 'u'),
    ('Ứ', 'U'), ('ứ', 'u'), ('Ừ', 'U'), ('ừ', 'u'), ('Ử', 'U'), ('ử', 'u'),
    ('Ữ', 'U'), ('ữ', 'u'), ('Ự', 'U'), ('ự', 'u'), ('Ỳ', 'Y'), ('ỳ', 'y'),
    ('Ỵ', 'Y'), ('ỵ', 'y'), ('Ỷ', 'Y'), ('ỷ', 'y'), ('Ỹ', 'Y'), ('ỹ', 'y'),
];

/// Symmetric `(upper, lower)` pairs for the Latin ranges.
static CASE_PAIRS: &[(char, char)] = &[
    ('À', 'à'), ('Á', 'á'), ('Â', 'â'), ('Ã', 'ã'), ('Ä', 'ä'), ('Å', 'å'),
    ('Æ', 'æ'), ('Ç', 'ç'), ('È', 'è'), ('É', 'é'), ('Ê', 'ê'), ('Ë', 'ë'),
    ('Ì', 'ì'), ('Í', 'í'), ('Î', 'î'), ('Ï', 'ï'), ('Ð', 'ð'), ('Ñ', 'ñ'),
    ('Ò', 'ò'), ('Ó', 'ó'), ('Ô', 'ô'), ('Õ', 'õ'), ('Ö', 'ö'), ('Ø', 'ø'),
    ('Ù', 'ù'), ('Ú', 'ú'), ('Û', 'û'), ('Ü', 'ü'), ('Ý', 'ý'), ('Þ', 'þ'),
    ('Ā', 'ā'), ('Ă', 'ă'), ('Ą', 'ą'), ('Ć', 'ć'), ('Ĉ', 'ĉ'), ('Ċ', 'ċ'),
    ('Č', 'č'), ('Ď', 'ď'), ('Đ', 'đ'), ('Ē', 'ē'), ('Ĕ', 'ĕ'), ('Ė', 'ė'),
    ('Ę', 'ę'), ('Ě', 'ě'), ('Ĝ', 'ĝ'), ('Ğ', 'ğ'), ('Ġ', 'ġ'), ('Ģ', 'ģ'),
    ('Ĥ', 'ĥ'), ('Ħ', 'ħ'), ('Ĩ', 'ĩ'), ('Ī', 'ī'), ('Ĭ', 'ĭ'), ('Į', 'į'),
    ('Ĳ', 'ĳ'), ('Ĵ', 'ĵ'), ('Ķ', 'ķ'), ('Ĺ', 'ĺ'), ('Ļ', 'ļ'), ('Ľ', 'ľ'),
    ('Ŀ', 'ŀ'), ('Ł', 'ł'), ('Ń', 'ń'), ('Ņ', 'ņ'), ('Ň', 'ň'), ('Ŋ', 'ŋ'),
    ('Ō', 'ō'), ('Ŏ', 'ŏ'), ('Ő', 'ő'), ('Œ', 'œ'), ('Ŕ', 'ŕ'), ('Ŗ', 'ŗ'),
    ('Ř', 'ř'), ('Ś', 'ś'), ('Ŝ', 'ŝ'), ('Ş', 'ş'), ('Š', 'š'), ('Ţ', 'ţ'),
    ('Ť', 'ť'), ('Ŧ', 'ŧ'), ('Ũ', 'ũ'), ('Ū', 'ū'), ('Ŭ', 'ŭ'), ('Ů', 'ů'),
    ('Ű', 'ű'), ('Ų', 'ų'), ('Ŵ', 'ŵ'), ('Ŷ', 'ŷ'), ('Ÿ', 'ÿ'), ('Ź', 'ź'),
    ('Ż', 'ż'), ('Ž', 'ž'), ('Ɓ', 'ɓ'), ('Ƃ', 'ƃ'), ('Ƅ', 'ƅ'), ('Ɔ', 'ɔ'),
    ('Ƈ', 'ƈ'), ('Ɖ', 'ɖ'), ('Ɗ', 'ɗ'), ('Ƌ', 'ƌ'), ('Ǝ', 'ǝ'), ('Ə', 'ə'),
    ('Ɛ', 'ɛ'), ('Ƒ', 'ƒ'), ('Ɠ', 'ɠ'), ('Ɣ', 'ɣ'), ('Ɩ', 'ɩ'), ('Ɨ', 'ɨ'),
    ('Ƙ', 'ƙ'), ('Ɯ', 'ɯ'), ('Ɲ', 'ɲ'), ('Ɵ', 'ɵ'), ('Ơ', 'ơ'), ('Ƣ', 'ƣ'),
    ('Ƥ', 'ƥ'), ('Ʀ', 'ʀ'), ('Ƨ', 'ƨ'), ('Ʃ', 'ʃ'), ('Ƭ', 'ƭ'), ('Ʈ', 'ʈ'),
    ('Ư', 'ư'), ('Ʊ', 'ʊ'), ('Ʋ', 'ʋ'), ('Ƴ', 'ƴ'), ('Ƶ', 'ƶ'), ('Ʒ', 'ʒ'),
    ('Ƹ', 'ƹ'), ('Ƽ', 'ƽ'), ('Ǆ', 'ǆ'), ('Ǉ', 'ǉ'), ('Ǌ', 'ǌ'), ('Ǎ', 'ǎ'),
    ('Ǐ', 'ǐ'), ('Ǒ', 'ǒ'), ('Ǔ', 'ǔ'), ('Ǖ', 'ǖ'), ('Ǘ', 'ǘ'), ('Ǚ', 'ǚ'),
    ('Ǜ', 'ǜ'), ('Ǟ', 'ǟ'), ('Ǡ', 'ǡ'), ('Ǣ', 'ǣ'), ('Ǥ', 'ǥ'), ('Ǧ', 'ǧ'),
    ('Ǩ', 'ǩ'), ('Ǫ', 'ǫ'), ('Ǭ', 'ǭ'), ('Ǯ', 'ǯ'), ('Ǳ', 'ǳ'), ('Ǵ', 'ǵ'),
    ('Ƕ', 'ƕ'), ('Ƿ', 'ƿ'), ('Ǹ', 'ǹ'), ('Ǻ', 'ǻ'), ('Ǽ', 'ǽ'), ('Ǿ', 'ǿ'),
    ('Ȁ', 'ȁ'), ('Ȃ', 'ȃ'), ('Ȅ', 'ȅ'), ('Ȇ', 'ȇ'), ('Ȉ', 'ȉ'), ('Ȋ', 'ȋ'),
    ('Ȍ', 'ȍ'), ('Ȏ', 'ȏ'), ('Ȑ', 'ȑ'), ('Ȓ', 'ȓ'), ('Ȕ', 'ȕ'), ('Ȗ', 'ȗ'),
    ('Ș', 'ș'), ('Ț', 'ț'), ('Ȝ', 'ȝ'), ('Ȟ', 'ȟ'), ('Ƞ', 'ƞ'), ('Ȣ', 'ȣ'),
    ('Ȥ', 'ȥ'), ('Ȧ', 'ȧ'), ('Ȩ', 'ȩ'), ('Ȫ', 'ȫ'), ('Ȭ', 'ȭ'), ('Ȯ', 'ȯ'),
    ('Ȱ', 'ȱ'), ('Ȳ', 'ȳ'), ('Ⱥ', 'ⱥ'), ('Ȼ', 'ȼ'), ('Ƚ', 'ƚ'), ('Ⱦ', 'ⱦ'),
    ('Ɂ', 'ɂ'), ('Ƀ', 'ƀ'), ('Ʉ', 'ʉ'), ('Ʌ', 'ʌ'), ('Ɇ', 'ɇ'), ('Ɉ', 'ɉ'),
    ('Ɋ', 'ɋ'), ('Ɍ', 'ɍ'), ('Ɏ', 'ɏ'), ('Ḁ', 'ḁ'), ('Ḃ', 'ḃ'), ('Ḅ', 'ḅ'),
    ('Ḇ', 'ḇ'), ('Ḉ', 'ḉ'), ('Ḋ', 'ḋ'), ('Ḍ', 'ḍ'), ('Ḏ', 'ḏ'), ('Ḑ', 'ḑ'),
    ('Ḓ', 'ḓ'), ('Ḕ', 'ḕ'), ('Ḗ', 'ḗ'), ('Ḙ', 'ḙ'), ('Ḛ', 'ḛ'), ('Ḝ', 'ḝ'),
    ('Ḟ', 'ḟ'), ('Ḡ', 'ḡ'), ('Ḣ', 'ḣ'), ('Ḥ', 'ḥ'), ('Ḧ', 'ḧ'), ('Ḩ', 'ḩ'),
    ('Ḫ', 'ḫ'), ('Ḭ', 'ḭ'), ('Ḯ', 'ḯ'), ('Ḱ', 'ḱ'), ('Ḳ', 'ḳ'), ('Ḵ', 'ḵ'),
    ('Ḷ', 'ḷ'), ('Ḹ', 'ḹ'), ('Ḻ', 'ḻ'), ('Ḽ', 'ḽ'), ('Ḿ', 'ḿ'), ('Ṁ', 'ṁ'),
    ('Ṃ', 'ṃ'), ('Ṅ', 'ṅ'), ('Ṇ', 'ṇ'), ('Ṉ', 'ṉ'), ('Ṋ', 'ṋ'), ('Ṍ', 'ṍ'),
    ('Ṏ', 'ṏ'), ('Ṑ', 'ṑ'), ('Ṓ', 'ṓ'), ('Ṕ', 'ṕ'), ('Ṗ', 'ṗ'), ('Ṙ', 'ṙ'),
    ('Ṛ', 'ṛ'), ('Ṝ', 'ṝ'), ('Ṟ', 'ṟ'), ('Ṡ', 'ṡ'), ('Ṣ', 'ṣ'), ('Ṥ', 'ṥ'),
    ('Ṧ', 'ṧ'), ('Ṩ', 'ṩ'), ('Ṫ', 'ṫ'), ('Ṭ', 'ṭ'), ('Ṯ', 'ṯ'), ('Ṱ', 'ṱ'),
    ('Ṳ', 'ṳ'), ('Ṵ', 'ṵ'), ('Ṷ', 'ṷ'), ('Ṹ', 'ṹ'), ('Ṻ', 'ṻ'), ('Ṽ', 'ṽ'),
    ('Ṿ', 'ṿ'), ('Ẁ', 'ẁ'), ('Ẃ', 'ẃ'), ('Ẅ', 'ẅ'), ('Ẇ', 'ẇ'), ('Ẉ', 'ẉ'),
    ('Ẋ', 'ẋ'), ('Ẍ', 'ẍ'), ('Ẏ', 'ẏ'), ('Ẑ', 'ẑ'), ('Ẓ', 'ẓ'), ('Ẕ', 'ẕ'),
    ('Ạ', 'ạ'), ('Ả', 'ả'), ('Ấ', 'ấ'), ('Ầ', 'ầ'), ('Ẩ', 'ẩ'), ('Ẫ', 'ẫ'),
    ('Ậ', 'ậ'), ('Ắ', 'ắ'), ('Ằ', 'ằ'), ('Ẳ', 'ẳ'), ('Ẵ', 'ẵ'), ('Ặ', 'ặ'),
    ('Ẹ', 'ẹ'), ('Ẻ', 'ẻ'), ('Ẽ', 'ẽ'), ('Ế', 'ế'), ('Ề', 'ề'), ('Ể', 'ể'),
    ('Ễ', 'ễ'), ('Ệ', 'ệ'), ('Ỉ', 'ỉ'), ('Ị', 'ị'), ('Ọ', 'ọ'), ('Ỏ', 'ỏ'),
    ('Ố', 'ố'), ('Ồ', 'ồ'), ('Ổ', 'ổ'), ('Ỗ', 'ỗ'), ('Ộ', 'ộ'), ('Ớ', 'ớ'),
    ('Ờ', 'ờ'), ('Ở', 'ở'), ('Ỡ', 'ỡ'), ('Ợ', 'ợ'), ('Ụ', 'ụ'), ('Ủ', 'ủ'),
    ('Ứ', 'ứ'), ('Ừ', 'ừ'), ('Ử', 'ử'), ('Ữ', 'ữ'), ('Ự', 'ự'), ('Ỳ', 'ỳ'),
    ('Ỵ', 'ỵ'), ('Ỷ', 'ỷ'), ('Ỹ', 'ỹ'), ('Ỻ', 'ỻ'), ('Ỽ', 'ỽ'), ('Ỿ', 'ỿ'),
];

lazy_static! {
    static ref FOLD: HashMap<char, char> = DIACRITIC_FOLDS.iter().copied().collect();
    static ref LOWER: HashMap<char, char> = CASE_PAIRS.iter().copied().collect();
    static ref UPPER: HashMap<char, char> =
        CASE_PAIRS.iter().map(|&(upper, lower)| (lower, upper)).collect();
}

/// Folds an accented letter to its ASCII base; anything outside the table is returned as is.
#[inline]
pub fn fold(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    FOLD.get(&c).copied().unwrap_or(c)
}

#[inline]
pub fn to_lower(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    if let Some(&lower) = LOWER.get(&c) {
        return lower;
    }
    single(c.to_lowercase()).unwrap_or(c)
}

#[inline]
pub fn to_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    if let Some(&upper) = UPPER.get(&c) {
        return upper;
    }
    single(c.to_uppercase()).unwrap_or(c)
}

/// Word separators for identifier-style conversions: Unicode whitespace and
/// ASCII punctuation. Non-ASCII letters and symbols never split a word.
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
