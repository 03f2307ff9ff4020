use std::{
    collections::HashMap,
    fmt::Display,
    str::FromStr,
    sync::atomic::{AtomicU8, Ordering},
};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{buffer::Buffer, charmap, error::Error, types::Value};

/// Languages the built-in dictionary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Language {
    #[default]
    En = 0,
    Es = 1,
    Fr = 2,
    De = 3,
    Pt = 4,
    It = 5,
    Ru = 6,
    Zh = 7,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Pt,
        Language::It,
        Language::Ru,
        Language::Zh,
    ];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
            Language::It => "it",
            Language::Ru => "ru",
            Language::Zh => "zh",
        }
    }

    fn from_index(index: u8) -> Language {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .unwrap_or_default()
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts any BCP 47 tag (underscores allowed); only the base language subtag is used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        let lang_id: LanguageIdentifier = normalized
            .parse()
            .map_err(|_| Error::UnknownLanguage(s.to_string()))?;
        Language::ALL
            .into_iter()
            .find(|lang| lang_id.language.as_str() == lang.code())
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

static CURRENT: AtomicU8 = AtomicU8::new(Language::En as u8);

/// Language used by [`translate`] and [`Error::localized`].
pub fn language() -> Language {
    Language::from_index(CURRENT.load(Ordering::Relaxed))
}

/// Switches the process-wide language. Meant for startup; concurrent readers
/// see either the old or the new language.
pub fn use_language(lang: Language) {
    let previous = Language::from_index(CURRENT.swap(lang as u8, Ordering::Relaxed));
    if previous != lang {
        log::debug!("language changed from {} to {}", previous, lang);
    }
}

/// Parses `code` and switches the process-wide language to it.
pub fn set_language(code: &str) -> Result<Language, Error> {
    let lang = code.parse()?;
    use_language(lang);
    Ok(lang)
}

/// One dictionary row, ordered like [`Language::ALL`]; the English form is the key.
type Row = [&'static str; 8];

static ROWS: &[Row] = &[
    ["argument", "argumento", "argument", "Argument", "argumento", "argomento", "аргумент", "参数"],
    ["character", "carácter", "caractère", "Zeichen", "caractere", "carattere", "символ", "字符"],
    ["decimal", "decimal", "décimal", "Dezimal", "decimal", "decimale", "десятичный", "小数"],
    ["directive", "directiva", "directive", "Direktive", "diretiva", "direttiva", "директива", "指令"],
    ["empty", "vacío", "vide", "leer", "vazio", "vuoto", "пустой", "空"],
    ["error", "error", "erreur", "Fehler", "erro", "errore", "ошибка", "错误"],
    ["format", "formato", "format", "Format", "formato", "formato", "формат", "格式"],
    ["invalid", "inválido", "invalide", "ungültig", "inválido", "non valido", "неверный", "无效"],
    ["language", "idioma", "langue", "Sprache", "idioma", "lingua", "язык", "语言"],
    ["memory", "memoria", "mémoire", "Speicher", "memória", "memoria", "память", "内存"],
    ["missing", "falta", "manquant", "fehlt", "ausente", "mancante", "отсутствует", "缺少"],
    ["not", "no", "pas", "nicht", "não", "non", "не", "不"],
    ["number", "número", "nombre", "Zahl", "número", "numero", "число", "数字"],
    ["range", "rango", "plage", "Bereich", "intervalo", "intervallo", "диапазон", "范围"],
    ["state", "estado", "état", "Zustand", "estado", "stato", "состояние", "状态"],
    ["string", "cadena", "chaîne", "Zeichenkette", "cadeia", "stringa", "строка", "字符串"],
    ["supported", "soportado", "pris en charge", "unterstützt", "suportado", "supportato", "поддерживается", "支持"],
    ["type", "tipo", "type", "Typ", "tipo", "tipo", "тип", "类型"],
    ["unknown", "desconocido", "inconnu", "unbekannt", "desconhecido", "sconosciuto", "неизвестный", "未知"],
    ["value", "valor", "valeur", "Wert", "valor", "valore", "значение", "值"],
    // Error headlines, matched as whole phrases.
    ["unsupported type", "tipo no soportado", "type non pris en charge", "nicht unterstützter Typ", "tipo não suportado", "tipo non supportato", "неподдерживаемый тип", "不支持的类型"],
    ["bad directive", "directiva inválida", "directive invalide", "ungültige Direktive", "diretiva inválida", "direttiva non valida", "неверная директива", "无效指令"],
    ["out of memory", "memoria agotada", "mémoire insuffisante", "Speicher erschöpft", "memória esgotada", "memoria esaurita", "недостаточно памяти", "内存不足"],
    ["invalid state", "estado inválido", "état invalide", "ungültiger Zustand", "estado inválido", "stato non valido", "неверное состояние", "无效状态"],
    ["invalid number", "número inválido", "nombre invalide", "ungültige Zahl", "número inválido", "numero non valido", "неверное число", "无效数字"],
    ["unknown language", "idioma desconocido", "langue inconnue", "unbekannte Sprache", "idioma desconhecido", "lingua sconosciuta", "неизвестный язык", "未知语言"],
    ["configuration error", "error de configuración", "erreur de configuration", "Konfigurationsfehler", "erro de configuração", "errore di configurazione", "ошибка конфигурации", "配置错误"],
    ["input/output error", "error de entrada/salida", "erreur d'entrée/sortie", "Ein-/Ausgabefehler", "erro de entrada/saída", "errore di input/output", "ошибка ввода-вывода", "输入/输出错误"],
];

lazy_static! {
    static ref DICTIONARY: HashMap<&'static str, &'static Row> =
        ROWS.iter().map(|row| (row[0], row)).collect();
}

/// Looks up `key` (ASCII case-insensitive) and returns its form in `lang`.
pub fn lookup(key: &str, lang: Language) -> Option<&'static str> {
    let row = match DICTIONARY.get(key) {
        Some(row) => row,
        None if key.bytes().any(|b| b.is_ascii_uppercase()) => {
            DICTIONARY.get(key.to_ascii_lowercase().as_str())?
        }
        None => return None,
    };
    Some(row[lang as usize])
}

/// Renders `args` separated by single spaces in the current language.
pub fn translate(args: &[Value<'_>]) -> Result<String, Error> {
    translate_in(language(), args)
}

/// Renders `args` separated by single spaces, replacing every dictionary word
/// by its `lang` form. A capitalized key yields a capitalized translation.
pub fn translate_in(lang: Language, args: &[Value<'_>]) -> Result<String, Error> {
    let mut out = Buffer::acquire();
    let written = write_translated(&mut out, lang, args);
    let text = out.finish();
    written.map(|()| text)
}

fn write_translated(out: &mut Buffer, lang: Language, args: &[Value<'_>]) -> Result<(), Error> {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ')?;
        }
        match arg {
            Value::Seq(items) => {
                for (j, item) in items.iter().enumerate() {
                    if j > 0 {
                        out.push(' ')?;
                    }
                    write_word(out, item, lang)?;
                }
            }
            other => match other.as_str() {
                Some(word) => write_word(out, word, lang)?,
                None => other.write_to(out)?,
            },
        }
    }
    Ok(())
}

fn write_word(out: &mut Buffer, word: &str, lang: Language) -> Result<(), Error> {
    let Some(translated) = lookup(word, lang) else {
        return out.push_str(word);
    };
    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    let mut chars = translated.chars();
    match chars.next() {
        Some(first) if capitalized => {
            out.push(charmap::to_upper(first))?;
            out.push_str(chars.as_str())
        }
        _ => out.push_str(translated),
    }
}
