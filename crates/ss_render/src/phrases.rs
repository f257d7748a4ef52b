// crates/ss_render/src/phrases.rs
//
// Compile-time phrasebook for every user-facing string on the analysis page.
// Unknown keys fall back to the key itself so a typo shows up on screen
// instead of rendering blank.

use ss_core::Language;

#[derive(Copy, Clone)]
struct Phrase {
    key: &'static str,
    ru: &'static str,
    en: &'static str,
}

#[rustfmt::skip]
const PHRASES: &[Phrase] = &[
    Phrase { key: "submit",            ru: "Анализировать",                         en: "Analyze" },
    Phrase { key: "in_progress",       ru: "Анализ...",                             en: "Analyzing..." },
    Phrase { key: "validation_empty",  ru: "Пожалуйста, введите описание характера", en: "Please enter a description of the character" },
    Phrase { key: "result_ready",      ru: "Рекомендация готова!",                  en: "Recommendation ready!" },
    Phrase { key: "primary",           ru: "Основная рекомендация:",                en: "Primary recommendation:" },
    Phrase { key: "confidence",        ru: "Уверенность",                           en: "Confidence" },
    Phrase { key: "alternatives",      ru: "Альтернативные варианты:",              en: "Alternative options:" },
    Phrase { key: "analysis_error",    ru: "Ошибка анализа",                        en: "Analysis error" },
    Phrase { key: "connection_error",  ru: "Ошибка подключения",                    en: "Connection error" },
    Phrase { key: "connection_detail", ru: "Не удалось подключиться к серверу. Убедитесь, что он запущен.",
                                       en: "Could not reach the server. Make sure it is running." },
    Phrase { key: "goodbye_title",     ru: "До свидания!",                          en: "Goodbye!" },
    Phrase { key: "goodbye_body",      ru: "Вы отказались от анализа. Форма недоступна без согласия.",
                                       en: "You declined the analysis. The form is unavailable without consent." },
    Phrase { key: "back_home",         ru: "На главную",                            en: "Back to home" },
];

pub fn t(lang: Language, key: &str) -> &str {
    for p in PHRASES {
        if p.key == key {
            return match lang {
                Language::Ru => p.ru,
                Language::En => p.en,
            };
        }
    }
    key
}
